//! Recommender API port definition.

use async_trait::async_trait;

use crate::domain::entities::{Explanation, ProductId, RecommendationSet, UserId};
use crate::domain::errors::RecommenderError;

/// Parameters for a recommendation lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationQuery {
    /// User to look up.
    pub user_id: UserId,
    /// Maximum number of items; the server default applies when unset.
    pub limit: Option<u32>,
}

impl RecommendationQuery {
    /// Creates a query with the server's default limit.
    #[must_use]
    pub const fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            limit: None,
        }
    }

    /// Sets the limit. `Some(0)` is treated as unset.
    #[must_use]
    pub const fn with_limit(mut self, limit: Option<u32>) -> Self {
        self.limit = match limit {
            Some(0) => None,
            other => other,
        };
        self
    }
}

/// Port for the remote recommendation service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecommenderPort: Send + Sync {
    /// Fetches recommendations for a user.
    async fn recommend(
        &self,
        query: &RecommendationQuery,
    ) -> Result<RecommendationSet, RecommenderError>;

    /// Fetches the explanation for one recommended product.
    async fn explain(
        &self,
        user_id: &UserId,
        product_id: &ProductId,
    ) -> Result<Explanation, RecommenderError>;

    /// Checks that the service is reachable.
    async fn health_check(&self) -> Result<(), RecommenderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_limit_means_server_default() {
        let user = UserId::parse("7").expect("non-blank");
        assert_eq!(RecommendationQuery::new(user.clone()).with_limit(Some(0)).limit, None);
        assert_eq!(RecommendationQuery::new(user).with_limit(Some(5)).limit, Some(5));
    }
}
