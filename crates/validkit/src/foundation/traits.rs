//! The core validator contract

use crate::foundation::{Outcome, RuleCode, Value};

/// The contract every rule checker implements.
///
/// A checker is configured once from a constraint declaration (its
/// constructor), after which its state is immutable. `evaluate` is pure with
/// respect to its inputs and has no observable side effects beyond its return
/// value, so a single configured instance may be shared across concurrent
/// callers without locking.
///
/// # Examples
///
/// ```rust,ignore
/// use validkit::prelude::*;
///
/// let checker = AllowedValues::new(["admin", "user"])?;
/// assert!(checker.evaluate(&Value::from("admin")).is_valid());
/// assert!(!checker.evaluate(&Value::from("root")).is_valid());
/// ```
pub trait Validate {
    /// The stable rule code attached to violations this checker produces.
    fn code(&self) -> RuleCode;

    /// Checks a single field value against the configured constraint.
    ///
    /// Returns [`Outcome::Valid`] or an [`Outcome::Invalid`] carrying the
    /// violation messages. Never fails: bad input values are a negative
    /// result, not an error.
    fn evaluate(&self, value: &Value) -> Outcome;
}
