//! Identifier value objects.

use std::fmt;

/// User identifier as understood by the recommender API.
///
/// Always trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    /// Parses raw user input, returning `None` for blank input.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Returns ID as string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Product identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductId(String);

impl ProductId {
    /// Parses a product ID, returning `None` for blank input.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Returns ID as string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_trims_input() {
        let id = UserId::parse("  42 \t").expect("non-blank");
        assert_eq!(id.as_str(), "42");
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_blank_ids_rejected() {
        assert!(UserId::parse("").is_none());
        assert!(UserId::parse("   ").is_none());
        assert!(UserId::parse("\n\t").is_none());
        assert!(ProductId::parse(" ").is_none());
    }

    #[test]
    fn test_product_id_keeps_inner_content() {
        let id = ProductId::parse(" B00 X ").expect("non-blank");
        assert_eq!(id.as_str(), "B00 X");
    }
}
