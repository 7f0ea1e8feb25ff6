//! Error types for Keepsake

use thiserror::Error;

/// Errors raised while loading or validating card content
#[derive(Error, Debug)]
pub enum CardError {
    /// A card needs at least one section to walk through
    #[error("Card has no sections")]
    EmptySections,

    /// The gallery needs at least one photo to page through
    #[error("Gallery has no photos")]
    EmptyGallery,

    /// Section accent colour is not a `#rrggbb` hex string
    #[error("Invalid accent colour {value:?} in section {section:?}")]
    InvalidColor { section: String, value: String },

    /// Photo date is not `YYYY-MM-DD`
    #[error("Invalid date {value:?} for photo {caption:?}")]
    InvalidDate { caption: String, value: String },

    /// Content document could not be decoded
    #[error("Content error: {0}")]
    Content(#[from] serde_json::Error),
}

/// Result type alias using CardError
pub type CardResult<T> = Result<T, CardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CardError::InvalidDate {
            caption: "Latest Memory".to_string(),
            value: "someday".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Invalid date \"someday\" for photo \"Latest Memory\""
        );
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CardError = json_err.into();
        assert!(matches!(err, CardError::Content(_)));
    }
}
