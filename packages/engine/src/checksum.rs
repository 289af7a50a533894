//! Check digit computation and verification
//!
//! The trailing digit of an identity number is a Luhn-style checksum over
//! the date and serial digits. The century digits never participate, which
//! is why every input shape of the same number yields the same digit.

use crate::config;
use crate::error::Result;
use crate::normalize::normalize;

/// Compute the check digit that is correct for `raw`.
///
/// Accepts any supported input shape and normalizes it first. The trailing
/// digit already present in the input does not participate in the
/// computation, so this answers "what should the check digit be" even for
/// an already complete number.
///
/// # Errors
///
/// Returns `NumberError::InvalidFormat` when `raw` does not match any
/// supported format.
///
/// # Examples
/// ```
/// use idnummer_engine::compute_check_digit;
///
/// assert_eq!(compute_check_digit("19720202-0330").unwrap(), 0);
/// assert_eq!(compute_check_digit("7202020330").unwrap(), 0);
/// assert!(compute_check_digit("sjuttiotvå").is_err());
/// ```
pub fn compute_check_digit(raw: &str) -> Result<u8> {
    let canonical = normalize(raw)?;
    Ok(check_digit(&canonical))
}

/// Check digit for a canonical twelve-digit number.
///
/// Callers pass the canonical form; use [`compute_check_digit`] for
/// arbitrary input shapes.
pub fn check_digit(canonical: &str) -> u8 {
    debug_assert_eq!(canonical.len(), config::CANONICAL_LENGTH);

    let mut sum = 0u32;
    // The century digits and the trailing check digit stay out of the sum.
    for (index, byte) in canonical
        .bytes()
        .enumerate()
        .take(config::CANONICAL_LENGTH - 1)
        .skip(2)
    {
        let mut value = u32::from(byte - b'0');
        if index % 2 == 0 {
            value *= 2;
        }
        sum += if value >= 10 { value % 10 + 1 } else { value };
    }

    ((10 - sum % 10) % 10) as u8
}

/// Whether the trailing digit of a canonical number matches the computed
/// check digit.
pub fn verify(canonical: &str) -> bool {
    let last = canonical.as_bytes()[canonical.len() - 1] - b'0';
    check_digit(canonical) == last
}
