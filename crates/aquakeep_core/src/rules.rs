//! Field validation rules shared by every store.
//!
//! # Responsibility
//! - Describe per-type validation as ordered, declarative rule lists.
//! - Evaluate the same rule list against create drafts and update patches.
//!
//! # Invariants
//! - Rules run in declared order; the first failure wins.
//! - On create, a field the payload does not expose fails every required check.
//! - On update, a field absent from the patch is skipped entirely.

use crate::store::EntityId;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One field value as seen by the rule engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// Free text or an opaque token such as a tag.
    Text(&'a str),
    /// Numeric value; `None` models an explicit null.
    Number(Option<f64>),
    /// Foreign key into another store; `0` or an explicit null means "not set".
    Reference(EntityId),
}

/// Uniform field lookup over create/update payloads.
pub trait Fields {
    /// Returns `None` when the payload does not carry `name` at all.
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;
}

/// Predicate shapes used across entity types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// Text must not be empty. Surrounding whitespace counts as content.
    NonEmpty,
    /// Text must not be empty after trimming.
    NonBlank,
    /// Number must not be null. Zero is accepted.
    Present,
    /// Number, when given, must be >= 0.
    NonNegative,
    /// Reference must be non-zero.
    Reference,
}

/// A single (field, predicate, message) rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub field: &'static str,
    pub check: Check,
    pub message: &'static str,
}

impl Rule {
    pub const fn non_empty(field: &'static str, message: &'static str) -> Self {
        Self::new(field, Check::NonEmpty, message)
    }

    pub const fn non_blank(field: &'static str, message: &'static str) -> Self {
        Self::new(field, Check::NonBlank, message)
    }

    pub const fn present(field: &'static str, message: &'static str) -> Self {
        Self::new(field, Check::Present, message)
    }

    pub const fn non_negative(field: &'static str, message: &'static str) -> Self {
        Self::new(field, Check::NonNegative, message)
    }

    pub const fn reference(field: &'static str, message: &'static str) -> Self {
        Self::new(field, Check::Reference, message)
    }

    const fn new(field: &'static str, check: Check, message: &'static str) -> Self {
        Self {
            field,
            check,
            message,
        }
    }

    /// Evaluates this rule against one (possibly absent) value.
    ///
    /// A value of the wrong shape for the check always fails.
    pub fn accepts(&self, value: Option<FieldValue<'_>>) -> bool {
        match (self.check, value) {
            (Check::NonNegative, None) => true,
            (_, None) => false,
            (Check::NonEmpty, Some(FieldValue::Text(text))) => !text.is_empty(),
            (Check::NonBlank, Some(FieldValue::Text(text))) => !text.trim().is_empty(),
            (Check::Present, Some(FieldValue::Number(number))) => number.is_some(),
            (Check::NonNegative, Some(FieldValue::Number(number))) => {
                number.map_or(true, |n| n >= 0.0)
            }
            (Check::Reference, Some(FieldValue::Reference(id))) => id != 0,
            _ => false,
        }
    }

    fn violation(&self) -> ValidationError {
        ValidationError {
            field: self.field,
            message: self.message,
        }
    }
}

/// Rejected field with a human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: &'static str,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (field `{}`)", self.message, self.field)
    }
}

impl Error for ValidationError {}

/// Runs every rule against a full create payload.
pub fn validate_create<P: Fields + ?Sized>(
    rules: &[Rule],
    payload: &P,
) -> Result<(), ValidationError> {
    for rule in rules {
        if !rule.accepts(payload.field(rule.field)) {
            return Err(rule.violation());
        }
    }
    Ok(())
}

/// Runs rules only for fields the partial payload actually carries.
pub fn validate_update<P: Fields + ?Sized>(
    rules: &[Rule],
    payload: &P,
) -> Result<(), ValidationError> {
    for rule in rules {
        let Some(value) = payload.field(rule.field) else {
            continue;
        };
        if !rule.accepts(Some(value)) {
            return Err(rule.violation());
        }
    }
    Ok(())
}
