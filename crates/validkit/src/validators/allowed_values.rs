//! Set-membership validator
//!
//! Checks that a value (or every element of a multi-valued field) is one
//! of a declared set of tokens. Treating collections as "all members must
//! match" lets one declaration cover roles, tags, permissions and similar
//! multi-valued fields.

use std::collections::HashSet;

use crate::foundation::{DeclarationError, Outcome, RuleCode, Validate, Value};

// ============================================================================
// ALLOWED VALUES
// ============================================================================

/// Validates that a value is one of the allowed tokens.
///
/// Supported shapes:
/// - text and other scalars: the value's default textual representation must
///   match one of the allowed tokens;
/// - collections and boxed arrays: **all** elements must match; a single
///   non-member element fails the whole value;
/// - primitive numeric arrays: stringified as a single opaque token, which
///   essentially never matches. Element-wise membership over primitive
///   arrays is out of scope; use a boxed array instead.
///
/// Matching is case-sensitive by default; [`AllowedValues::case_insensitive`]
/// lower-cases both the configured tokens and the checked value. An absent
/// value is accepted by default (presence is a separate constraint);
/// [`AllowedValues::reject_absent`] turns it into a violation.
///
/// # Examples
///
/// ```rust,ignore
/// use validkit::prelude::*;
///
/// let role = AllowedValues::new(["admin", "user", "guest"])?;
/// assert!(role.evaluate(&Value::from("admin")).is_valid());
/// assert!(!role.evaluate(&Value::from("root")).is_valid());
///
/// let tags = AllowedValues::new(["java", "spring", "react"])?;
/// assert!(!tags.evaluate(&Value::from(vec!["java", "cobol"])).is_valid());
/// ```
#[derive(Debug, Clone)]
pub struct AllowedValues {
    /// Declared tokens in declaration order, as spelled by the caller.
    declared: Vec<String>,
    /// Resolved token set; lower-cased when matching is case-insensitive.
    resolved: HashSet<String>,
    case_sensitive: bool,
    accept_absent: bool,
}

impl AllowedValues {
    /// Creates a case-sensitive, absent-accepting membership check.
    ///
    /// Fails fast on an empty token set: a membership rule nothing can
    /// satisfy is a malformed declaration, not a runtime condition.
    pub fn new<I>(values: I) -> Result<Self, DeclarationError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let declared: Vec<String> = values.into_iter().map(Into::into).collect();
        if declared.is_empty() {
            return Err(DeclarationError::EmptyValueSet);
        }
        let resolved = Self::resolve(&declared, true);
        Ok(Self {
            declared,
            resolved,
            case_sensitive: true,
            accept_absent: true,
        })
    }

    /// Accepts any case permutation of a configured token.
    #[must_use = "builder methods must be chained or built"]
    pub fn case_insensitive(mut self) -> Self {
        self.case_sensitive = false;
        self.resolved = Self::resolve(&self.declared, false);
        self
    }

    /// Treats an absent value as a violation instead of deferring to a
    /// separate presence constraint.
    #[must_use = "builder methods must be chained or built"]
    pub fn reject_absent(mut self) -> Self {
        self.accept_absent = false;
        self
    }

    fn resolve(declared: &[String], case_sensitive: bool) -> HashSet<String> {
        if case_sensitive {
            declared.iter().cloned().collect()
        } else {
            declared.iter().map(|v| v.to_lowercase()).collect()
        }
    }

    fn token_allowed(&self, token: &str) -> bool {
        if self.case_sensitive {
            self.resolved.contains(token)
        } else {
            self.resolved.contains(&token.to_lowercase())
        }
    }

    fn message(&self) -> String {
        format!("Must be one of [{}]", self.declared.join(", "))
    }
}

impl Validate for AllowedValues {
    fn code(&self) -> RuleCode {
        RuleCode::AllowedValues
    }

    fn evaluate(&self, value: &Value) -> Outcome {
        if value.is_absent() {
            return if self.accept_absent {
                Outcome::Valid
            } else {
                Outcome::invalid(self.message())
            };
        }

        // Effectively-empty values pass; mandatory checks belong to a
        // presence constraint stacked on the same field.
        if value.is_ignorable() {
            return Outcome::Valid;
        }

        if value
            .membership_tokens()
            .iter()
            .all(|token| self.token_allowed(token))
        {
            Outcome::Valid
        } else {
            Outcome::invalid(self.message())
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
