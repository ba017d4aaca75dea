use serde::Serialize;

/// Silhouette score of one clustering approach
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ModelScore {
    pub model: &'static str,
    pub silhouette_score: f64,
}

/// Precomputed comparison shown next to the form
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ModelComparison {
    pub scores: Vec<ModelScore>,
    pub conclusion: &'static str,
}

impl Default for ModelComparison {
    fn default() -> Self {
        Self {
            scores: vec![
                ModelScore {
                    model: "K-Means",
                    silhouette_score: 0.5278,
                },
                ModelScore {
                    model: "DBSCAN",
                    silhouette_score: 0.5063,
                },
            ],
            conclusion: "K-Means performed slightly better based on the Silhouette Score, \
                         indicating better-defined clusters.",
        }
    }
}

impl ModelComparison {
    /// The score with the highest silhouette value
    pub fn best(&self) -> Option<&ModelScore> {
        self.scores
            .iter()
            .max_by(|a, b| a.silhouette_score.total_cmp(&b.silhouette_score))
    }
}
