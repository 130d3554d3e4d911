//! Recommendation entities.

use super::{ProductId, UserId};

const SHORT_ID_LEN: usize = 10;
const SHORT_ID_SUFFIX: &str = "...";

/// Strategy the server used to build a recommendation list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RecommendationSource {
    /// Personalised results from collaborative filtering.
    CollaborativeFiltering,
    /// Most popular items, used for unknown users.
    PopularityFallback,
    /// A source this client does not know about.
    Other(String),
    /// The server did not report a source.
    #[default]
    Unknown,
}

impl RecommendationSource {
    /// Parses the wire representation.
    #[must_use]
    pub fn from_wire(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") => Self::Unknown,
            Some("collaborative_filtering") => Self::CollaborativeFiltering,
            Some("popularity_fallback") => Self::PopularityFallback,
            Some(other) => Self::Other(other.to_string()),
        }
    }

    /// Returns a short label for the status line.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::CollaborativeFiltering => Some("personalised"),
            Self::PopularityFallback => Some("popular items"),
            Self::Other(value) => Some(value.as_str()),
            Self::Unknown => None,
        }
    }
}

/// A product suggested for a user.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    product_id: ProductId,
    product_name: String,
    score: f64,
}

impl Recommendation {
    /// Creates new recommendation.
    #[must_use]
    pub fn new(product_id: ProductId, product_name: impl Into<String>, score: f64) -> Self {
        Self {
            product_id,
            product_name: product_name.into(),
            score,
        }
    }

    /// Returns product ID.
    #[must_use]
    pub const fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    /// Returns raw product name as sent by the server.
    #[must_use]
    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    /// Returns relevance score. Fallback items score zero.
    #[must_use]
    pub const fn score(&self) -> f64 {
        self.score
    }

    /// Returns product name with underscores shown as spaces.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.product_name.replace('_', " ")
    }

    /// Returns the first ten characters of the product ID followed by an ellipsis.
    #[must_use]
    pub fn short_id(&self) -> String {
        let mut short: String = self
            .product_id
            .as_str()
            .chars()
            .take(SHORT_ID_LEN)
            .collect();
        short.push_str(SHORT_ID_SUFFIX);
        short
    }
}

/// Recommendations returned for a single user.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecommendationSet {
    user_id: Option<UserId>,
    recommendations: Vec<Recommendation>,
    source: RecommendationSource,
}

impl RecommendationSet {
    /// Creates new set.
    #[must_use]
    pub const fn new(
        user_id: Option<UserId>,
        recommendations: Vec<Recommendation>,
        source: RecommendationSource,
    ) -> Self {
        Self {
            user_id,
            recommendations,
            source,
        }
    }

    /// Returns the user ID echoed by the server, if any.
    #[must_use]
    pub const fn user_id(&self) -> Option<&UserId> {
        self.user_id.as_ref()
    }

    /// Returns recommendations in server order.
    #[must_use]
    pub fn recommendations(&self) -> &[Recommendation] {
        &self.recommendations
    }

    /// Consumes the set, returning the recommendations.
    #[must_use]
    pub fn into_recommendations(self) -> Vec<Recommendation> {
        self.recommendations
    }

    /// Returns the reported source.
    #[must_use]
    pub const fn source(&self) -> &RecommendationSource {
        &self.source
    }

    /// Returns number of recommendations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.recommendations.len()
    }

    /// Returns whether the server had nothing to suggest.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty()
    }
}
