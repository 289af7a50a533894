//! Semantic validation of canonical identity numbers
//!
//! Semantic rules run after normalization and before the check digit is
//! verified. Beyond the built-in [`DefaultSemanticValidator`], callers can
//! supply their own rules at pipeline construction to narrow what counts
//! as acceptable, for example rejecting organization numbers in a service
//! that only deals with persons.

use thiserror::Error;

use crate::config;
use crate::normalize::has_organization_marker;

/// Failure reported by a semantic validator.
///
/// The pipeline wraps this into `NumberError::InvalidSemantics` together
/// with the original caller input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct SemanticViolation {
    message: String,
}

impl SemanticViolation {
    /// Create a violation with a human-readable reason.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A semantic rule over canonical twelve-digit numbers.
///
/// Implementations must be stateless and side-effect free: the pipeline
/// holds one instance for its whole lifetime and may run it from several
/// threads at once. The `canonical` argument is always the twelve-digit
/// canonical form produced by normalization.
pub trait SemanticValidator: Send + Sync {
    /// Validate a canonical twelve-digit number.
    fn validate(&self, canonical: &str) -> Result<(), SemanticViolation>;
}

/// The built-in century and month sanity rule.
///
/// Always runs first in every pipeline and cannot be removed or reordered.
/// Centuries 18-20 cover registered persons and 16 covers organizations;
/// 17 is unassigned.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSemanticValidator;

impl SemanticValidator for DefaultSemanticValidator {
    fn validate(&self, canonical: &str) -> Result<(), SemanticViolation> {
        debug_assert!(
            canonical.len() == config::CANONICAL_LENGTH
                && canonical.bytes().all(|b| b.is_ascii_digit())
        );
        let digits = canonical.as_bytes();

        let century = u32::from(digits[0] - b'0') * 10 + u32::from(digits[1] - b'0');
        if century < 16 || century == 17 || century > 20 {
            return Err(SemanticViolation::new(format!(
                "century {century} is not a registered century"
            )));
        }

        if has_organization_marker(&canonical[2..8]) {
            if century != config::ORGANIZATION_CENTURY {
                return Err(SemanticViolation::new(format!(
                    "organization numbers carry century 16, not {century}"
                )));
            }
        } else {
            let month = u32::from(digits[4] - b'0') * 10 + u32::from(digits[5] - b'0');
            if !(1..=12).contains(&month) {
                return Err(SemanticViolation::new(format!(
                    "month {month:02} is out of range"
                )));
            }
        }

        Ok(())
    }
}
