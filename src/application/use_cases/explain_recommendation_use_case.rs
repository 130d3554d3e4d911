//! Explanation lookup use case.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::{Explanation, ProductId, UserId};
use crate::domain::errors::RecommenderError;
use crate::domain::ports::RecommenderPort;

/// Fetches the "why this?" text for a recommended product.
#[derive(Clone)]
pub struct ExplainRecommendationUseCase {
    recommender: Arc<dyn RecommenderPort>,
}

impl ExplainRecommendationUseCase {
    /// Creates new use case.
    #[must_use]
    pub const fn new(recommender: Arc<dyn RecommenderPort>) -> Self {
        Self { recommender }
    }

    /// Executes the lookup.
    ///
    /// # Errors
    /// Returns an input error without contacting the service when either ID
    /// is blank, otherwise whatever the service reports.
    pub async fn execute(
        &self,
        raw_user_id: &str,
        product_id: &str,
    ) -> Result<Explanation, RecommenderError> {
        let user_id = UserId::parse(raw_user_id).ok_or(RecommenderError::EmptyUserId)?;
        let product_id = ProductId::parse(product_id).ok_or(RecommenderError::EmptyProductId)?;

        debug!(user_id = %user_id, product_id = %product_id, "Requesting explanation");

        let explanation = self
            .recommender
            .explain(&user_id, &product_id)
            .await
            .map_err(|e| {
                warn!(
                    product_id = %product_id,
                    status = ?e.status(),
                    network = e.is_network_error(),
                    error = %e,
                    "Explanation request failed"
                );
                e
            })?;

        info!(
            user_id = %user_id,
            product_id = %product_id,
            chars = explanation.text().chars().count(),
            "Explanation received"
        );

        Ok(explanation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockRecommenderPort;

    #[tokio::test]
    async fn test_blank_ids_never_call_service() {
        let mut port = MockRecommenderPort::new();
        port.expect_explain().times(0);
        let use_case = ExplainRecommendationUseCase::new(Arc::new(port));

        assert!(matches!(
            use_case.execute("  ", "abc").await,
            Err(RecommenderError::EmptyUserId)
        ));
        assert!(matches!(
            use_case.execute("42", "").await,
            Err(RecommenderError::EmptyProductId)
        ));
    }

    #[tokio::test]
    async fn test_successful_explanation() {
        let mut port = MockRecommenderPort::new();
        port.expect_explain()
            .withf(|user, product| user.as_str() == "42" && product.as_str() == "abc")
            .times(1)
            .returning(|user, product| {
                Ok(Explanation::new(
                    user.clone(),
                    product.clone(),
                    "Because you bought a keyboard.",
                ))
            });

        let use_case = ExplainRecommendationUseCase::new(Arc::new(port));
        let explanation = use_case.execute(" 42 ", "abc").await.expect("succeeds");

        assert_eq!(explanation.text(), "Because you bought a keyboard.");
        assert_eq!(explanation.product_id().as_str(), "abc");
    }

    #[tokio::test]
    async fn test_service_error_propagated() {
        let mut port = MockRecommenderPort::new();
        port.expect_explain()
            .times(1)
            .returning(|_, _| Err(RecommenderError::ExplanationUnavailable { status: 404 }));

        let use_case = ExplainRecommendationUseCase::new(Arc::new(port));
        let err = use_case.execute("42", "nope").await.unwrap_err();

        assert_eq!(err.to_string(), "Could not fetch explanation.");
    }
}
