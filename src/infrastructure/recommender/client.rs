//! Recommender API HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::{debug, warn};

use super::dto::{ErrorResponse, ExplanationResponse, RecommendationResponse};
use crate::domain::entities::{
    Explanation, ProductId, Recommendation, RecommendationSet, RecommendationSource, UserId,
};
use crate::domain::errors::RecommenderError;
use crate::domain::ports::{RecommendationQuery, RecommenderPort};

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
const USER_AGENT: &str = concat!("recotui/", env!("CARGO_PKG_VERSION"));

/// HTTP adapter for the recommender API.
pub struct RecommenderClient {
    client: Client,
    base_url: Url,
}

impl RecommenderClient {
    /// Creates client with custom base URL and optional request timeout.
    ///
    /// # Errors
    /// Returns error if the URL is invalid or HTTP client creation fails.
    pub fn with_base_url(
        base_url: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, RecommenderError> {
        let base_url = Url::parse(base_url.trim()).map_err(|e| {
            RecommenderError::unexpected(format!("invalid API URL '{base_url}': {e}"))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(RecommenderError::unexpected(format!(
                "invalid API URL '{base_url}': not a base URL"
            )));
        }

        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| RecommenderError::unexpected(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, base_url })
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get(&self, url: Url) -> Result<reqwest::Response, RecommenderError> {
        debug!(url = %url, "GET");
        self.client.get(url).send().await.map_err(|e| {
            warn!(error = %e, "Failed to reach recommender API");
            if e.is_timeout() {
                RecommenderError::network("Request timed out.")
            } else if e.is_connect() {
                RecommenderError::network("Failed to connect to the recommendation server.")
            } else {
                RecommenderError::network(e.to_string())
            }
        })
    }

    async fn log_error_body(status: StatusCode, response: reqwest::Response) {
        match response.json::<ErrorResponse>().await {
            Ok(body) => warn!(status = %status, detail = %body.message(), "API returned error"),
            Err(_) => warn!(status = %status, "API returned error"),
        }
    }
}

fn to_recommendation_set(response: RecommendationResponse) -> RecommendationSet {
    let recommendations = response
        .recommendations
        .into_iter()
        .filter_map(|item| match ProductId::parse(&item.product_id) {
            Some(product_id) => Some(Recommendation::new(product_id, item.product_name, item.score)),
            None => {
                warn!(product_name = %item.product_name, "Skipping recommendation without product ID");
                None
            }
        })
        .collect();

    RecommendationSet::new(
        response.user_id.as_deref().and_then(UserId::parse),
        recommendations,
        RecommendationSource::from_wire(response.source.as_deref()),
    )
}

#[async_trait]
impl RecommenderPort for RecommenderClient {
    async fn recommend(
        &self,
        query: &RecommendationQuery,
    ) -> Result<RecommendationSet, RecommenderError> {
        let mut url = self.endpoint(&["recommend", query.user_id.as_str()]);
        if let Some(limit) = query.limit {
            url.query_pairs_mut().append_pair("k", &limit.to_string());
        }

        let response = self.get(url).await?;
        let status = response.status();

        if !status.is_success() {
            Self::log_error_body(status, response).await;
            return Err(RecommenderError::RecommendationsUnavailable {
                status: status.as_u16(),
            });
        }

        let body: RecommendationResponse = response.json().await.map_err(|e| {
            warn!(error = %e, "Failed to parse recommendation response");
            RecommenderError::invalid_response(e.to_string())
        })?;

        Ok(to_recommendation_set(body))
    }

    async fn explain(
        &self,
        user_id: &UserId,
        product_id: &ProductId,
    ) -> Result<Explanation, RecommenderError> {
        let url = self.endpoint(&["explain", user_id.as_str(), product_id.as_str()]);

        let response = self.get(url).await?;
        let status = response.status();

        if !status.is_success() {
            Self::log_error_body(status, response).await;
            return Err(RecommenderError::ExplanationUnavailable {
                status: status.as_u16(),
            });
        }

        let body: ExplanationResponse = response.json().await.map_err(|e| {
            warn!(error = %e, "Failed to parse explanation response");
            RecommenderError::invalid_response(e.to_string())
        })?;

        if let Some(echoed) = body.product_id.as_deref() {
            if echoed.trim() != product_id.as_str() {
                debug!(requested = %product_id, echoed, "Server echoed a different product ID");
            }
        }
        debug!(echoed_user = ?body.user_id, "Explanation payload decoded");

        Ok(Explanation::new(
            user_id.clone(),
            product_id.clone(),
            body.explanation,
        ))
    }

    async fn health_check(&self) -> Result<(), RecommenderError> {
        debug!("Performing recommender API health check");

        let response = self.get(self.base_url.clone()).await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(RecommenderError::network(format!(
                "Recommender API returned {}",
                response.status()
            )))
        }
    }
}
