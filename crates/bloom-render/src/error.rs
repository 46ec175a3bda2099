//! Error types for parsing the closed vocabularies of the engine.
//!
//! Rendering and extraction are total and never fail. The only fallible
//! operations are conversions from user-supplied names (CLI flags, token
//! text) into [`Role`](crate::Role), [`Accent`](crate::Accent),
//! [`Variant`](crate::Variant) and [`Notation`](crate::Notation).

use thiserror::Error;

/// Error returned when a name does not belong to one of the fixed sets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Not one of the 15 palette roles.
    #[error("unknown color role '{0}'")]
    UnknownRole(String),

    /// Not one of the six accent roles.
    #[error("unknown accent '{0}' (expected one of: love, gold, rose, pine, foam, iris)")]
    UnknownAccent(String),

    /// Not a variant selector (`main`, `moon`, `dawn`) or variant id.
    #[error("unknown variant '{0}' (expected one of: main, moon, dawn)")]
    UnknownVariant(String),

    /// Not one of the supported color notations.
    #[error("invalid format '{name}'. Valid formats: {valid}")]
    UnknownNotation { name: String, valid: String },
}

/// Result type for parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ParseError::UnknownRole("bsae".to_string());
        assert_eq!(err.to_string(), "unknown color role 'bsae'");

        let err = ParseError::UnknownVariant("noon".to_string());
        assert!(err.to_string().contains("main, moon, dawn"));
    }

    #[test]
    fn test_notation_error_lists_valid_names() {
        let err = ParseError::UnknownNotation {
            name: "cmyk".to_string(),
            valid: "hex, rgb".to_string(),
        };
        assert_eq!(err.to_string(), "invalid format 'cmyk'. Valid formats: hex, rgb");
    }
}
