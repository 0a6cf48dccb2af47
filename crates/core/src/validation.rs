//! Field-level validation of decoded request payloads.
//!
//! A validator collects every violation in declaration order; the first one
//! is what callers surface as the error text (`"<field>: <violation>"`).

use thiserror::Error;

/// A single rule failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// A required field is missing or holds its zero value.
    #[error("{field}: non zero value required")]
    Required { field: &'static str },

    /// A field holds a value outside its enumeration.
    #[error("{field}: {value} does not validate as in({})", .allowed.join("|"))]
    NotIn {
        field: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },

    /// A field failed a whole-value rule that has no finer description.
    #[error("{0} is invalid")]
    Invalid(&'static str),

    /// A customer tax id failed the CPF checksum.
    #[error("invalid CPF [{0}]")]
    InvalidCpf(String),
}

/// Ordered, non-empty list of violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError(Vec<Violation>);

impl ValidationError {
    pub fn first(&self) -> Option<&Violation> {
        self.0.first()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.0
    }
}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.0.first() {
            Some(first) => core::fmt::Display::fmt(first, f),
            None => Ok(()),
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<Violation> for ValidationError {
    fn from(violation: Violation) -> Self {
        Self(vec![violation])
    }
}

/// Collector used by [`Validate`] implementations.
#[derive(Debug, Default)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `violation` unless `ok` holds.
    pub fn check(&mut self, ok: bool, violation: impl FnOnce() -> Violation) -> &mut Self {
        if !ok {
            self.0.push(violation());
        }
        self
    }

    pub fn push(&mut self, violation: Violation) -> &mut Self {
        self.0.push(violation);
        self
    }

    pub fn extend(&mut self, other: Violations) -> &mut Self {
        self.0.extend(other.0);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn finish(self) -> Result<(), ValidationError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(ValidationError(self.0))
        }
    }
}

/// Synchronous, side-effect-free payload validation.
pub trait Validate {
    fn violations(&self) -> Violations;

    fn validate(&self) -> Result<(), ValidationError> {
        self.violations().finish()
    }
}

/// Check `value` against an enumeration, reporting a missing value as
/// [`Violation::Required`].
pub fn one_of(field: &'static str, value: &str, allowed: &'static [&'static str]) -> Option<Violation> {
    if allowed.contains(&value) {
        None
    } else {
        Some(not_in(field, value, allowed))
    }
}

/// The violation for a value known to be outside `allowed`.
pub fn not_in(field: &'static str, value: &str, allowed: &'static [&'static str]) -> Violation {
    if value.is_empty() {
        Violation::Required { field }
    } else {
        Violation::NotIn {
            field,
            value: value.to_string(),
            allowed,
        }
    }
}
