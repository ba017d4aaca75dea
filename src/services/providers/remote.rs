/// HTTP client for the remote prediction service
///
/// Sends the show details as JSON and reads `predicted_category` from the reply.
/// Every failure surfaces as a `PredictionError` whose text is shown to the user.
use std::time::Duration;

use reqwest::{
    header::{ACCEPT, CONTENT_TYPE},
    Client as HttpClient, StatusCode,
};

use crate::{
    error::{error_chain, PredictionError},
    models::{ApiPredictionResponse, PredictedCategory, PredictionRequest, ShowCategory},
    services::providers::Predictor,
};

const JSON_MEDIA_TYPE: &str = "application/json";

#[derive(Clone)]
pub struct RemotePredictor {
    http_client: HttpClient,
    api_url: String,
}

impl RemotePredictor {
    /// Creates a client bounded by `timeout` per call
    pub fn new(api_url: String, timeout: Duration) -> Result<Self, PredictionError> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_url,
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Non-200 reply; an unreadable body is reported in place of the text
    fn status_error(status: StatusCode, body: Result<String, reqwest::Error>) -> PredictionError {
        let body = body.unwrap_or_else(|e| format!("<unreadable body: {}>", error_chain(&e)));
        PredictionError::Status {
            status: status.as_u16(),
            body,
        }
    }

    fn category_label(body: ApiPredictionResponse) -> Result<String, PredictionError> {
        match body.predicted_category {
            Some(PredictedCategory::Label(label)) => Ok(label),
            Some(PredictedCategory::Cluster(id)) => {
                Ok(ShowCategory::from_cluster_id(id).to_string())
            }
            None => Err(PredictionError::MissingCategory),
        }
    }
}

#[async_trait::async_trait]
impl Predictor for RemotePredictor {
    async fn predict(&self, request: &PredictionRequest) -> Result<String, PredictionError> {
        let response = self
            .http_client
            .post(&self.api_url)
            .header(ACCEPT, JSON_MEDIA_TYPE)
            .header(CONTENT_TYPE, JSON_MEDIA_TYPE)
            .json(&request.to_payload())
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(Self::status_error(status, response.text().await));
        }

        let body: ApiPredictionResponse = response.json().await?;
        tracing::debug!(response = ?body, "Prediction service replied");

        Self::category_label(body)
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ongoing;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn show() -> PredictionRequest {
        PredictionRequest {
            imdb_rating: 8.7,
            total_ratings: 250_000,
            run_length: 5,
            ongoing: Ongoing::Yes,
        }
    }

    async fn predictor_for(server: &MockServer) -> RemotePredictor {
        RemotePredictor::new(format!("{}/predict", server.uri()), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_success_returns_label() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/predict"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"predicted_category": "Running"})),
            )
            .mount(&server)
            .await;

        let predictor = predictor_for(&server).await;
        assert_eq!(predictor.predict(&show()).await.unwrap(), "Running");
    }

    #[tokio::test]
    async fn test_sends_service_payload_and_json_headers() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/predict"))
            .and(header("accept", "application/json"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({
                "run_length": 5,
                "ongoing": "Yes",
                "imdb_rating": 8.7,
                "total_ratings": 250000
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"predicted_category": "Blockbuster"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let predictor = predictor_for(&server).await;
        assert_eq!(predictor.predict(&show()).await.unwrap(), "Blockbuster");
    }

    #[tokio::test]
    async fn test_non_ok_status_formats_code_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
            .mount(&server)
            .await;

        let predictor = predictor_for(&server).await;
        let error = predictor.predict(&show()).await.unwrap_err();
        assert_eq!(error.to_string(), "Error 500: internal error");
    }

    #[tokio::test]
    async fn test_other_success_codes_are_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(202).set_body_string("queued"))
            .mount(&server)
            .await;

        let predictor = predictor_for(&server).await;
        let error = predictor.predict(&show()).await.unwrap_err();
        assert_eq!(error.to_string(), "Error 202: queued");
    }

    #[tokio::test]
    async fn test_missing_category_is_typed_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"cluster": 1})))
            .mount(&server)
            .await;

        let predictor = predictor_for(&server).await;
        let error = predictor.predict(&show()).await.unwrap_err();
        assert!(matches!(error, PredictionError::MissingCategory));
    }

    #[tokio::test]
    async fn test_cluster_id_is_mapped_to_label() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"predicted_category": 0})),
            )
            .mount(&server)
            .await;

        let predictor = predictor_for(&server).await;
        assert_eq!(predictor.predict(&show()).await.unwrap(), "Concluded");
    }

    #[tokio::test]
    async fn test_malformed_body_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let predictor = predictor_for(&server).await;
        let error = predictor.predict(&show()).await.unwrap_err();
        assert!(matches!(error, PredictionError::Transport(_)));
        assert!(error.to_string().starts_with("Error: "));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let predictor = RemotePredictor::new(
            "http://127.0.0.1:1/predict".to_string(),
            Duration::from_secs(5),
        )
        .unwrap();

        let error = predictor.predict(&show()).await.unwrap_err();
        let message = error.to_string();
        assert!(message.starts_with("Error: "));
        assert!(message.contains("error sending request"));
        assert!(message.contains("refused"), "{}", message);
    }

    #[tokio::test]
    async fn test_unreadable_status_body_is_reported() {
        let read_error = reqwest::get("http://127.0.0.1:1/").await.unwrap_err();

        let error =
            RemotePredictor::status_error(StatusCode::INTERNAL_SERVER_ERROR, Err(read_error));
        let message = error.to_string();
        assert!(message.starts_with("Error 500: <unreadable body: "));
        assert!(message.contains("refused"), "{}", message);
    }

    #[tokio::test]
    async fn test_timeout_is_bounded() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"predicted_category": "Running"}))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let predictor =
            RemotePredictor::new(format!("{}/predict", server.uri()), Duration::from_millis(200))
                .unwrap();

        let error = predictor.predict(&show()).await.unwrap_err();
        assert!(matches!(&error, PredictionError::Transport(e) if e.is_timeout()));
        let message = error.to_string();
        assert!(message.starts_with("Error: "));
        assert!(message.contains("timed out"), "{}", message);
    }

    #[tokio::test]
    async fn test_repeated_requests_give_same_result() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"predicted_category": "Running"})),
            )
            .expect(2)
            .mount(&server)
            .await;

        let predictor = predictor_for(&server).await;
        let first = predictor.predict(&show()).await.unwrap();
        let second = predictor.predict(&show()).await.unwrap();
        assert_eq!(first, second);
    }
}
