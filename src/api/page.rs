//! HTML rendering for the single prediction page.

use crate::{
    models::{
        prediction::{MAX_IMDB_RATING, MIN_IMDB_RATING, MIN_RUN_LENGTH},
        ModelComparison, Ongoing, PredictionRequest,
    },
    services::prediction::PredictionOutcome,
};

/// Values echoed back into the form inputs
#[derive(Debug, Clone, PartialEq)]
pub struct FormValues {
    pub imdb_rating: f64,
    pub total_ratings: u64,
    pub run_length: u32,
    pub ongoing: Ongoing,
}

impl Default for FormValues {
    fn default() -> Self {
        Self {
            imdb_rating: MIN_IMDB_RATING,
            total_ratings: 0,
            run_length: MIN_RUN_LENGTH,
            ongoing: Ongoing::Yes,
        }
    }
}

impl From<&PredictionRequest> for FormValues {
    fn from(request: &PredictionRequest) -> Self {
        Self {
            imdb_rating: request.imdb_rating,
            total_ratings: request.total_ratings,
            run_length: request.run_length,
            ongoing: request.ongoing,
        }
    }
}

pub struct PageView<'a> {
    pub form: FormValues,
    pub outcome: Option<&'a PredictionOutcome>,
    pub input_error: Option<&'a str>,
    pub comparison: &'a ModelComparison,
}

pub fn render(view: &PageView<'_>) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Show Category Prediction App</title>
</head>
<body>
<h1>Show Category Prediction App</h1>
<hr>
<main>
<section id="predict">
<h2>Enter Show Details</h2>
{form}
{result}
</section>
<aside id="comparison">
{comparison}
</aside>
</main>
</body>
</html>
"#,
        form = render_form(&view.form),
        result = render_result(view.outcome, view.input_error),
        comparison = render_comparison(view.comparison),
    )
}

fn render_form(form: &FormValues) -> String {
    let option = |value: Ongoing| {
        let selected = if value == form.ongoing { " selected" } else { "" };
        format!(
            r#"<option value="{v}"{selected}>{v}</option>"#,
            v = value.as_str()
        )
    };

    format!(
        r#"<form method="post" action="/">
<label>IMDb Rating <input type="number" name="imdb_rating" min="{min_rating:.1}" max="{max_rating:.1}" step="0.1" value="{imdb_rating:.1}" required></label>
<label>Total Ratings <input type="number" name="total_ratings" min="0" step="100" value="{total_ratings}" required></label>
<label>Run Length (in years) <input type="number" name="run_length" min="{min_run}" step="1" value="{run_length}" required></label>
<label>Is the show ongoing? <select name="ongoing">{yes}{no}</select></label>
<button type="submit">Predict Category</button>
</form>"#,
        min_rating = MIN_IMDB_RATING,
        max_rating = MAX_IMDB_RATING,
        imdb_rating = form.imdb_rating,
        total_ratings = form.total_ratings,
        min_run = MIN_RUN_LENGTH,
        run_length = form.run_length,
        yes = option(Ongoing::Yes),
        no = option(Ongoing::No),
    )
}

fn render_result(outcome: Option<&PredictionOutcome>, input_error: Option<&str>) -> String {
    if let Some(msg) = input_error {
        return format!(r#"<p class="error">{}</p>"#, escape_html(msg));
    }

    match outcome {
        Some(outcome) if outcome.is_success() => format!(
            r#"<p class="success"><strong>The predicted category is:</strong> {}</p>"#,
            escape_html(&outcome.message)
        ),
        Some(outcome) => format!(r#"<p class="error">{}</p>"#, escape_html(&outcome.message)),
        None => String::new(),
    }
}

fn render_comparison(comparison: &ModelComparison) -> String {
    let best = comparison.best().map(|s| s.model);
    let items: String = comparison
        .scores
        .iter()
        .map(|score| {
            let note = if Some(score.model) == best {
                " (Higher Score)"
            } else {
                ""
            };
            format!(
                "<li><strong>{}:</strong> <code>{:.4}</code>{}</li>\n",
                escape_html(score.model),
                score.silhouette_score,
                note
            )
        })
        .collect();

    format!(
        "<h2>Model Comparison</h2>\n<p><strong>Silhouette Scores:</strong></p>\n<ul>\n{}</ul>\n<blockquote>{}</blockquote>",
        items,
        escape_html(comparison.conclusion)
    )
}

/// Escapes text for use in HTML element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
