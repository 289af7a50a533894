//! Idnummer Engine
//!
//! Parsing, normalization and validation of Swedish personal and
//! organization identity numbers (personnummer and organisationsnummer).
//! This library provides functionality for:
//! - Normalizing free-form input into the canonical twelve-digit form
//! - Computing and verifying the embedded Luhn-style check digit
//! - Running pluggable semantic rules over canonical numbers
//!
//! Validity here means syntactic and checksum validity; no civil registry
//! is consulted.
//!
//! # Example
//!
//! ```
//! use idnummer_engine::Pipeline;
//!
//! let pipeline = Pipeline::default();
//!
//! let number = pipeline.create("720202-0330").unwrap();
//! assert_eq!(number.canonical(), "197202020330");
//! assert!(!number.is_organization());
//!
//! assert!(pipeline.create("197202020331").is_err());
//! ```

pub mod checksum;
pub mod config;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod types;
pub mod validate;

// Re-export commonly used items
pub use checksum::compute_check_digit;
pub use error::{NumberError, Result};
pub use normalize::normalize;
pub use pipeline::Pipeline;
pub use types::IdentityNumber;
pub use validate::{DefaultSemanticValidator, SemanticValidator, SemanticViolation};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, "0.1.0");
    }

    #[test]
    fn test_reexports() {
        // Verify re-exports work
        let _validator = DefaultSemanticValidator;
        let _err = NumberError::InvalidFormat("x".to_string());
        assert_eq!(compute_check_digit("7202020330").unwrap(), 0);
    }
}
