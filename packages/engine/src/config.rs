//! Constants and the accepted-shape pattern for identity numbers.

use regex::Regex;
use std::sync::LazyLock;

/// Length of the canonical representation: two century digits, six date
/// digits, three serial digits and the check digit.
pub const CANONICAL_LENGTH: usize = 12;

/// Century prefix shared by every organization number.
pub const ORGANIZATION_CENTURY: u32 = 16;

/// A first month digit at or above this value marks an organization number.
pub const ORGANIZATION_MARKER: u8 = 2;

/// Offset from the end of the input at which the optional separator sits.
pub const SEPARATOR_OFFSET: usize = 5;

/// Accepted input shape: an optional two-digit century, six date digits,
/// an optional `-` or `+` separator and the four trailing digits.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SHAPE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d\d)?\d{6}[-+]?\d{4}$").expect("valid regex"));

/// Whether `raw` matches one of the accepted textual shapes.
///
/// This is a pure shape check; it says nothing about semantics or the
/// check digit.
///
/// # Examples
/// ```
/// use idnummer_engine::config::matches_accepted_shape;
///
/// assert!(matches_accepted_shape("720202-0330"));
/// assert!(matches_accepted_shape("197202020330"));
/// assert!(!matches_accepted_shape("sjuttiotvå"));
/// ```
pub fn matches_accepted_shape(raw: &str) -> bool {
    SHAPE_PATTERN.is_match(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_lengths() {
        assert!(matches_accepted_shape("7202020330"));
        assert!(matches_accepted_shape("720202-0330"));
        assert!(matches_accepted_shape("720202+0330"));
        assert!(matches_accepted_shape("197202020330"));
        assert!(matches_accepted_shape("19720202-0330"));
        assert!(matches_accepted_shape("19720202+0330"));
    }

    #[test]
    fn test_rejected_shapes() {
        assert!(!matches_accepted_shape(""));
        assert!(!matches_accepted_shape("720202-+0330"));
        assert!(!matches_accepted_shape("7202-020330"));
        assert!(!matches_accepted_shape("720202020020202020"));
        assert!(!matches_accepted_shape("19720202-03301"));
        assert!(!matches_accepted_shape("sjuttiotvå"));
        assert!(!matches_accepted_shape("72020a0330"));
    }

    #[test]
    fn test_separator_only_at_fixed_offset() {
        assert!(!matches_accepted_shape("72020-20330"));
        assert!(!matches_accepted_shape("7202020-330"));
    }
}
