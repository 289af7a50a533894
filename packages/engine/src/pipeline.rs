//! The validation pipeline
//!
//! Runs raw input through normalization, the ordered semantic rules and
//! the check digit verification, in that order. The first failure aborts
//! the run and is surfaced with the original input echoed back.

use crate::checksum;
use crate::error::{NumberError, Result};
use crate::normalize::normalize;
use crate::types::IdentityNumber;
use crate::validate::{DefaultSemanticValidator, SemanticValidator};

/// Orders a fixed list of semantic rules between the normalizer and the
/// check digit verification.
///
/// The built-in [`DefaultSemanticValidator`] always runs first; rules
/// supplied at construction follow in the order given. The list never
/// changes after construction, so a `Pipeline` can be shared across
/// threads without locking.
pub struct Pipeline {
    validators: Vec<Box<dyn SemanticValidator>>,
}

impl Pipeline {
    /// Build a pipeline with the built-in rule followed by `validators`.
    pub fn new(validators: Vec<Box<dyn SemanticValidator>>) -> Self {
        let mut ordered: Vec<Box<dyn SemanticValidator>> =
            vec![Box::new(DefaultSemanticValidator)];
        ordered.extend(validators);
        Self {
            validators: ordered,
        }
    }

    /// Parse and validate `raw` into an [`IdentityNumber`].
    ///
    /// Each call is independent and stateless; a failure never leaves the
    /// pipeline in a bad state.
    ///
    /// # Errors
    ///
    /// * `NumberError::InvalidFormat` - `raw` matches no accepted shape
    /// * `NumberError::InvalidSemantics` - a semantic rule rejected it
    /// * `NumberError::InvalidChecksum` - the trailing digit is wrong
    ///
    /// # Examples
    /// ```
    /// use idnummer_engine::Pipeline;
    ///
    /// let pipeline = Pipeline::default();
    /// let number = pipeline.create("720202-0330").unwrap();
    /// assert_eq!(number.canonical(), "197202020330");
    /// ```
    pub fn create(&self, raw: &str) -> Result<IdentityNumber> {
        let canonical = normalize(raw)?;

        for validator in &self.validators {
            validator
                .validate(&canonical)
                .map_err(|violation| NumberError::InvalidSemantics {
                    input: raw.to_string(),
                    reason: violation.to_string(),
                })?;
        }

        if !checksum::verify(&canonical) {
            return Err(NumberError::InvalidChecksum(raw.to_string()));
        }

        let number = IdentityNumber::new(canonical);
        tracing::debug!(
            organization = number.is_organization(),
            "Identity number accepted"
        );
        Ok(number)
    }
}

impl Default for Pipeline {
    /// The pipeline with only the built-in rule.
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::SemanticViolation;

    struct RejectEverything;

    impl SemanticValidator for RejectEverything {
        fn validate(&self, _canonical: &str) -> std::result::Result<(), SemanticViolation> {
            Err(SemanticViolation::new("rejected by test rule"))
        }
    }

    #[test]
    fn test_create_personal_number() {
        let number = Pipeline::default().create("19720202-0330").unwrap();
        assert_eq!(number.canonical(), "197202020330");
    }

    #[test]
    fn test_create_echoes_raw_input_on_failure() {
        let err = Pipeline::default().create("197202020331").unwrap_err();
        assert!(err.to_string().contains("197202020331"));
    }

    #[test]
    fn test_checksum_runs_after_semantics() {
        // Wrong century and wrong check digit: the semantic failure wins.
        let err = Pipeline::default().create("217202020331").unwrap_err();
        assert!(matches!(err, NumberError::InvalidSemantics { .. }));
    }

    #[test]
    fn test_custom_validator_runs_after_builtin() {
        let pipeline = Pipeline::new(vec![Box::new(RejectEverything)]);

        // Both rules would fail here; the built-in month rule reports.
        let err = pipeline.create("7213020330").unwrap_err();
        assert!(err.to_string().contains("month"));

        // On an otherwise valid number the custom rule gets its turn.
        let err = pipeline.create("720202-0330").unwrap_err();
        assert!(err.to_string().contains("rejected by test rule"));
    }

    #[test]
    fn test_semantic_failure_echoes_raw_not_canonical() {
        let pipeline = Pipeline::new(vec![Box::new(RejectEverything)]);
        let err = pipeline.create("720202-0330").unwrap_err();
        assert!(err.to_string().contains("720202-0330"));
    }

    #[test]
    fn test_pipeline_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Pipeline>();
    }
}
