use serde::Deserialize;

/// `GET /recommend/{user_id}` response body.
#[derive(Debug, Deserialize)]
pub struct RecommendationResponse {
    #[serde(default)]
    pub user_id: Option<String>,
    pub recommendations: Vec<RecommendationItem>,
    #[serde(default)]
    pub source: Option<String>,
}

/// Single recommended product.
#[derive(Debug, Deserialize)]
pub struct RecommendationItem {
    pub product_id: String,
    pub product_name: String,
    #[serde(default)]
    pub score: f64,
}

/// `GET /explain/{user_id}/{product_id}` response body.
#[derive(Debug, Deserialize)]
pub struct ExplanationResponse {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub product_id: Option<String>,
    pub explanation: String,
}

/// Error body returned by the API framework.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    /// Either a message string or a list of validation errors.
    pub detail: serde_json::Value,
}

impl ErrorResponse {
    pub fn message(&self) -> String {
        match &self.detail {
            serde_json::Value::String(message) => message.clone(),
            other => other.to_string(),
        }
    }
}
