//! Public value types for the Idnummer engine

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config;
use crate::error::NumberError;
use crate::normalize::has_organization_marker;
use crate::pipeline::Pipeline;

/// A validated Swedish identity number in canonical twelve-digit form.
///
/// Instances are only produced by a [`Pipeline`] after the full run of
/// normalization, semantic rules and check digit verification, so a value
/// of this type is never partially valid. It is immutable and freely
/// shareable.
///
/// Serialization writes the canonical string; deserialization runs the
/// default pipeline, so a deserialized value keeps the validity invariant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IdentityNumber {
    canonical: String,
}

impl IdentityNumber {
    /// Wrap an already fully validated canonical string.
    pub(crate) fn new(canonical: String) -> Self {
        debug_assert!(
            canonical.len() == config::CANONICAL_LENGTH
                && canonical.bytes().all(|b| b.is_ascii_digit())
        );
        Self { canonical }
    }

    /// The canonical twelve-digit form.
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// The canonical form read as a number.
    ///
    /// Twelve digits exceed the 32-bit range; the value always fits `i64`.
    #[allow(clippy::expect_used)] // The canonical form is all ASCII digits
    pub fn numeric(&self) -> i64 {
        self.canonical
            .parse()
            .expect("canonical form is a twelve-digit number")
    }

    /// Whether this is an organization number rather than a personal one.
    pub fn is_organization(&self) -> bool {
        has_organization_marker(&self.canonical[2..8])
    }
}

impl fmt::Display for IdentityNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

impl TryFrom<String> for IdentityNumber {
    type Error = NumberError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Pipeline::default().create(&value)
    }
}

impl From<IdentityNumber> for String {
    fn from(number: IdentityNumber) -> Self {
        number.canonical
    }
}
