//! Recommendation lookup use case.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::{RecommendationSet, UserId};
use crate::domain::errors::RecommenderError;
use crate::domain::ports::{RecommendationQuery, RecommenderPort};

/// Looks up recommendations for the user ID typed by the user.
#[derive(Clone)]
pub struct FetchRecommendationsUseCase {
    recommender: Arc<dyn RecommenderPort>,
    limit: Option<u32>,
}

impl FetchRecommendationsUseCase {
    /// Creates new use case.
    #[must_use]
    pub const fn new(recommender: Arc<dyn RecommenderPort>) -> Self {
        Self {
            recommender,
            limit: None,
        }
    }

    /// Caps the number of recommendations requested.
    #[must_use]
    pub const fn with_limit(mut self, limit: Option<u32>) -> Self {
        self.limit = limit;
        self
    }

    /// Executes the lookup for raw, untrimmed input.
    ///
    /// # Errors
    /// Returns `EmptyUserId` without contacting the service when the input is
    /// blank, otherwise whatever the service reports.
    pub async fn execute(&self, raw_user_id: &str) -> Result<RecommendationSet, RecommenderError> {
        let user_id = UserId::parse(raw_user_id).ok_or_else(|| {
            debug!("Rejected blank user ID");
            RecommenderError::EmptyUserId
        })?;

        let query = RecommendationQuery::new(user_id).with_limit(self.limit);
        debug!(user_id = %query.user_id, limit = ?query.limit, "Requesting recommendations");

        let set = self.recommender.recommend(&query).await.map_err(|e| {
            warn!(
                user_id = %query.user_id,
                status = ?e.status(),
                network = e.is_network_error(),
                error = %e,
                "Recommendation request failed"
            );
            e
        })?;

        info!(
            user_id = %query.user_id,
            count = set.len(),
            source = ?set.source(),
            "Recommendations received"
        );

        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ProductId, Recommendation, RecommendationSource};
    use crate::domain::ports::mocks::MockRecommenderPort;

    fn sample_set() -> RecommendationSet {
        RecommendationSet::new(
            UserId::parse("42"),
            vec![Recommendation::new(
                ProductId::parse("abc123456789").expect("non-blank"),
                "wireless_mouse",
                0.9,
            )],
            RecommendationSource::CollaborativeFiltering,
        )
    }

    #[tokio::test]
    async fn test_blank_input_never_calls_service() {
        let mut port = MockRecommenderPort::new();
        port.expect_recommend().times(0);

        let use_case = FetchRecommendationsUseCase::new(Arc::new(port));

        for input in ["", "   ", "\t\n"] {
            let result = use_case.execute(input).await;
            assert!(matches!(result, Err(RecommenderError::EmptyUserId)));
        }
    }

    #[tokio::test]
    async fn test_input_is_trimmed_before_request() {
        let mut port = MockRecommenderPort::new();
        port.expect_recommend()
            .withf(|query| query.user_id.as_str() == "42" && query.limit == Some(5))
            .times(1)
            .returning(|_| Ok(sample_set()));

        let use_case = FetchRecommendationsUseCase::new(Arc::new(port)).with_limit(Some(5));
        let set = use_case.execute("  42 ").await.expect("lookup succeeds");

        assert_eq!(set.len(), 1);
        assert_eq!(set.recommendations()[0].display_name(), "wireless mouse");
    }

    #[tokio::test]
    async fn test_service_errors_are_propagated() {
        let mut port = MockRecommenderPort::new();
        port.expect_recommend()
            .times(1)
            .returning(|_| Err(RecommenderError::RecommendationsUnavailable { status: 404 }));

        let use_case = FetchRecommendationsUseCase::new(Arc::new(port));
        let result = use_case.execute("missing").await;

        assert!(matches!(
            result,
            Err(RecommenderError::RecommendationsUnavailable { status: 404 })
        ));
    }
}
