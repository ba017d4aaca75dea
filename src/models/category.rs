use std::fmt::Display;

/// Show category as assigned by the clustering model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowCategory {
    Concluded,
    Running,
    Blockbuster,
    Unknown,
}

impl ShowCategory {
    /// Maps a raw cluster id to its category
    pub fn from_cluster_id(cluster_id: i64) -> Self {
        match cluster_id {
            0 => ShowCategory::Concluded,
            1 => ShowCategory::Running,
            2 => ShowCategory::Blockbuster,
            _ => ShowCategory::Unknown,
        }
    }
}

impl Display for ShowCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ShowCategory::Concluded => "Concluded",
            ShowCategory::Running => "Running",
            ShowCategory::Blockbuster => "Blockbuster",
            ShowCategory::Unknown => "Unknown",
        };
        write!(f, "{}", label)
    }
}
