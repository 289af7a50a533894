//! Normalization of raw input into the canonical twelve-digit form
//!
//! Every identity number is handled internally as `CCYYMMDDXXXX`: two
//! century digits, six date digits, three serial digits and the check
//! digit.
//!
//! # Supported Formats
//!
//! 1. `YYMMDDXXXX` - century inferred from the date digits
//! 2. `YYMMDD-XXXX` or `YYMMDD+XXXX` - `+` marks a person aged one
//!    hundred years or more
//! 3. `CCYYMMDDXXXX` - already canonical, passed through unchanged
//! 4. `CCYYMMDD-XXXX` or `CCYYMMDD+XXXX` - the separator is dropped and
//!    carries no meaning since the century is explicit
//!
//! # Examples
//!
//! ```
//! use idnummer_engine::normalize;
//!
//! assert_eq!(normalize("720202-0330").unwrap(), "197202020330");
//! assert_eq!(normalize("720202+0330").unwrap(), "187202020330");
//! assert_eq!(normalize("9696950253").unwrap(), "169696950253");
//! ```

use chrono::{Datelike, NaiveDate};

use crate::config;
use crate::error::{NumberError, Result};

/// Normalize `raw` into the canonical twelve-digit form.
///
/// # Arguments
/// * `raw` - Identity number in one of the supported formats
///
/// # Errors
///
/// Returns `NumberError::InvalidFormat` echoing `raw` when the input does
/// not match any supported format.
pub fn normalize(raw: &str) -> Result<String> {
    if !config::matches_accepted_shape(raw) {
        return Err(NumberError::InvalidFormat(raw.to_string()));
    }

    let canonical = match raw.len() {
        10 => prepend_century(raw, false),
        11 => {
            let hundred_years_or_more = separator(raw) == b'+';
            prepend_century(&strip_separator(raw), hundred_years_or_more)
        }
        12 => raw.to_string(),
        13 => strip_separator(raw),
        _ => return Err(NumberError::InvalidFormat(raw.to_string())),
    };

    debug_assert_eq!(canonical.len(), config::CANONICAL_LENGTH);
    Ok(canonical)
}

/// Whether the date portion carries the organization marker: a third
/// digit of two or higher, which no personal birth month can have.
pub(crate) fn has_organization_marker(date: &str) -> bool {
    date.as_bytes()[2] - b'0' >= config::ORGANIZATION_MARKER
}

/// The separator byte at its fixed offset from the end.
fn separator(number: &str) -> u8 {
    number.as_bytes()[number.len() - config::SEPARATOR_OFFSET]
}

/// Drop the separator at its fixed offset from the end. The separator is
/// never searched for elsewhere in the input.
fn strip_separator(number: &str) -> String {
    let cut = number.len() - config::SEPARATOR_OFFSET;
    format!("{}{}", &number[..cut], &number[cut + 1..])
}

/// Prepend the century to a ten-digit `YYMMDDXXXX` number.
///
/// Organization numbers always get the fixed century regardless of their
/// date digits; the hundred-years flag has no effect on them.
fn prepend_century(number: &str, hundred_years_or_more: bool) -> String {
    if has_organization_marker(number) {
        tracing::debug!("Organization marker present, using fixed century");
        return format!("{}{number}", config::ORGANIZATION_CENTURY);
    }

    let century = birth_century(number, hundred_years_or_more);
    tracing::debug!(
        century = century,
        hundred_years_or_more = hundred_years_or_more,
        "Inferred century for personal number"
    );
    format!("{century}{number}")
}

/// Resolve the century for a personal number from its two year digits.
///
/// Two-digit years go through chrono's `%y` pivot: 00-68 resolve into
/// 20xx, 69-99 into 19xx. Month and day take no part in the decision and
/// are pinned during the parse, so a calendar-odd date such as `7202310330`
/// still normalizes; the semantic rules deal with month sanity later.
#[allow(clippy::expect_used)] // The shape gate guarantees two ASCII year digits
fn birth_century(number: &str, hundred_years_or_more: bool) -> u32 {
    let birth_year = NaiveDate::parse_from_str(&format!("{}0101", &number[..2]), "%y%m%d")
        .expect("two ASCII digits always resolve through the %y pivot")
        .year() as u32;

    let mut century = birth_year / 100;
    if hundred_years_or_more {
        century -= 1;
    }
    century
}
