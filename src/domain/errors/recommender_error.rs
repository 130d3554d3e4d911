//! Recommender error types.

use thiserror::Error;

/// Errors surfaced while talking to the recommender API.
///
/// The `Display` output is the text shown to the user.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum RecommenderError {
    #[error("Please enter a User ID.")]
    EmptyUserId,

    #[error("No product selected.")]
    EmptyProductId,

    #[error("User not found or an error occurred on the server.")]
    RecommendationsUnavailable { status: u16 },

    #[error("Could not fetch explanation.")]
    ExplanationUnavailable { status: u16 },

    #[error("{message}")]
    NetworkError { message: String },

    #[error("Unexpected response from server: {message}")]
    InvalidResponse { message: String },

    #[error("{message}")]
    Unexpected { message: String },
}

impl RecommenderError {
    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::NetworkError {
            message: message.into(),
        }
    }

    /// Creates invalid response error.
    #[must_use]
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }

    /// Creates unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Returns whether error is network related.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(self, Self::NetworkError { .. })
    }

    /// Returns the HTTP status that caused the error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::RecommendationsUnavailable { status } | Self::ExplanationUnavailable { status } => {
                Some(*status)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_errors_use_generic_messages() {
        let err = RecommenderError::RecommendationsUnavailable { status: 404 };
        assert_eq!(
            err.to_string(),
            "User not found or an error occurred on the server."
        );
        assert_eq!(err.status(), Some(404));

        let err = RecommenderError::ExplanationUnavailable { status: 500 };
        assert_eq!(err.to_string(), "Could not fetch explanation.");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_classification() {
        assert!(!RecommenderError::EmptyUserId.is_network_error());
        assert!(RecommenderError::network("connection refused").is_network_error());
        assert_eq!(
            RecommenderError::network("connection refused").to_string(),
            "connection refused"
        );
        assert_eq!(RecommenderError::unexpected("boom").status(), None);
    }
}
