//! Explanation entity.

use super::{ProductId, UserId};

/// Server-generated rationale for a single recommendation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explanation {
    user_id: UserId,
    product_id: ProductId,
    text: String,
}

impl Explanation {
    /// Creates new explanation.
    #[must_use]
    pub fn new(user_id: UserId, product_id: ProductId, text: impl Into<String>) -> Self {
        Self {
            user_id,
            product_id,
            text: text.into(),
        }
    }

    /// Returns the user the explanation was generated for.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the explained product.
    #[must_use]
    pub const fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    /// Returns explanation text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consumes explanation and returns its text.
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }
}
