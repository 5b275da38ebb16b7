//! Package identifiers.

use std::fmt;

use crate::domain::error::DomainError;

/// A package name that satisfies the identifier grammar
/// `[A-Za-z_][A-Za-z0-9_]*`.
///
/// The only way to obtain one is [`PackageName::parse`], so holding a
/// `PackageName` means the grammar has been checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageName(String);

impl PackageName {
    /// Validate `raw` against the identifier grammar.
    ///
    /// The whole string must match; there is no trimming and no
    /// trailing-newline leniency.
    pub fn parse(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        if is_identifier(&raw) {
            Ok(Self(raw))
        } else {
            Err(DomainError::InvalidIdentifier { name: raw })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hyphenated public-facing form: every `_` becomes `-`.
    pub fn distribution_name(&self) -> String {
        self.0.replace('_', "-")
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PackageName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
