//! Error types for the Idnummer engine

use thiserror::Error;

/// Main error type for identity number handling.
///
/// Every variant carries the original caller-supplied input so a failure
/// can be reported without further context. All failures are terminal for
/// the given input; the caller has to supply a different string.
#[derive(Error, Debug)]
pub enum NumberError {
    /// Input does not match any accepted identity number shape.
    #[error("Invalid identity number format: '{0}'. Expected YYMMDDXXXX, YYMMDD-XXXX, CCYYMMDDXXXX or CCYYMMDD-XXXX")]
    InvalidFormat(String),

    /// The trailing digit does not match the computed check digit.
    #[error("Check digit mismatch for identity number '{0}'")]
    InvalidChecksum(String),

    /// A semantic rule rejected the number.
    #[error("Identity number '{input}' rejected: {reason}")]
    InvalidSemantics { input: String, reason: String },
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, NumberError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_format_display() {
        let err = NumberError::InvalidFormat("sjuttiotvå".to_string());
        assert!(err.to_string().contains("sjuttiotvå"));
    }

    #[test]
    fn test_invalid_checksum_display() {
        let err = NumberError::InvalidChecksum("197202020331".to_string());
        assert_eq!(
            err.to_string(),
            "Check digit mismatch for identity number '197202020331'"
        );
    }

    #[test]
    fn test_invalid_semantics_display() {
        let err = NumberError::InvalidSemantics {
            input: "157202020330".to_string(),
            reason: "century 15 is not a registered century".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Identity number '157202020330' rejected: century 15 is not a registered century"
        );
    }
}
