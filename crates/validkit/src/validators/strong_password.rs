//! Composite password-policy validator
//!
//! Checks length and presence of required character classes. Every enabled
//! rule is evaluated, with no short-circuit, and all failing rules are
//! reported together as one consolidated message per field.

use serde::{Deserialize, Serialize};

use crate::foundation::{DeclarationError, Outcome, RuleCode, Validate, Value};

/// Characters considered "special" unless the policy declares its own set.
pub const DEFAULT_SPECIAL_CHARS: &str = "@$!%*?&_#-";

// ============================================================================
// PASSWORD POLICY
// ============================================================================

/// Declarative password complexity requirements.
///
/// The default policy requires at least 8 characters with no upper bound and
/// one character from each class (uppercase, lowercase, digit, special).
/// `max_length: None` means unbounded.
///
/// Missing fields deserialize to these defaults, so a configuration record
/// only has to spell out what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordPolicy {
    /// Minimum length, in characters.
    pub min_length: usize,
    /// Maximum length, in characters; `None` is unbounded.
    pub max_length: Option<usize>,
    /// Require at least one uppercase letter.
    pub require_uppercase: bool,
    /// Require at least one lowercase letter.
    pub require_lowercase: bool,
    /// Require at least one decimal digit.
    pub require_digit: bool,
    /// Require at least one character from [`PasswordPolicy::special_chars`].
    pub require_special: bool,
    /// The set of characters that satisfy the special-character rule.
    pub special_chars: String,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 8,
            max_length: None,
            require_uppercase: true,
            require_lowercase: true,
            require_digit: true,
            require_special: true,
            special_chars: DEFAULT_SPECIAL_CHARS.to_owned(),
        }
    }
}

// ============================================================================
// STRONG PASSWORD
// ============================================================================

/// Validates a password against a [`PasswordPolicy`].
///
/// An absent value is always valid: this checker never rejects on absence;
/// pair it with a required-field constraint when the password is mandatory.
/// A present value is checked as its full character sequence, and *every*
/// enabled rule contributes its own message on failure, in a fixed order:
/// length, uppercase, lowercase, digit, special. The messages are joined
/// into a single comma-separated description, so a field never produces more
/// than one password violation entry.
///
/// # Examples
///
/// ```rust,ignore
/// use validkit::prelude::*;
///
/// let checker = StrongPassword::new(PasswordPolicy::default())?;
/// assert!(checker.evaluate(&Value::from("Password123!")).is_valid());
/// assert!(!checker.evaluate(&Value::from("password123!")).is_valid());
/// ```
#[derive(Debug, Clone)]
pub struct StrongPassword {
    policy: PasswordPolicy,
}

impl StrongPassword {
    /// Creates the checker, rejecting contradictory policies: inverted
    /// length bounds, or a required special class with no characters that
    /// could ever satisfy it.
    pub fn new(policy: PasswordPolicy) -> Result<Self, DeclarationError> {
        if let Some(max) = policy.max_length
            && policy.min_length > max
        {
            return Err(DeclarationError::LengthBoundsInverted {
                min: policy.min_length,
                max,
            });
        }
        if policy.require_special && policy.special_chars.is_empty() {
            return Err(DeclarationError::EmptySpecialCharset);
        }
        Ok(Self { policy })
    }

    /// The configured policy.
    #[must_use]
    pub const fn policy(&self) -> &PasswordPolicy {
        &self.policy
    }

    fn length_message(&self) -> String {
        match self.policy.max_length {
            None => format!(
                "Length must be at least {} characters",
                self.policy.min_length
            ),
            Some(max) => format!(
                "Length must be between {} and {} characters",
                self.policy.min_length, max
            ),
        }
    }

    fn is_special(&self, c: char) -> bool {
        self.policy.special_chars.contains(c)
    }
}

impl Validate for StrongPassword {
    fn code(&self) -> RuleCode {
        RuleCode::StrongPassword
    }

    fn evaluate(&self, value: &Value) -> Outcome {
        // Absence is delegated to a required-field constraint. Blank text is
        // NOT exempt: a present-but-empty password still fails the length
        // rule.
        if value.is_absent() {
            return Outcome::Valid;
        }

        let password = value.token();
        let length = password.chars().count();
        let mut failures: Vec<String> = Vec::new();

        let too_short = length < self.policy.min_length;
        let too_long = self.policy.max_length.is_some_and(|max| length > max);
        if too_short || too_long {
            failures.push(self.length_message());
        }

        if self.policy.require_uppercase && !password.chars().any(char::is_uppercase) {
            failures.push("Must contain at least one uppercase letter".to_owned());
        }

        if self.policy.require_lowercase && !password.chars().any(char::is_lowercase) {
            failures.push("Must contain at least one lowercase letter".to_owned());
        }

        if self.policy.require_digit && !password.chars().any(|c| c.is_ascii_digit()) {
            failures.push("Must contain at least one digit".to_owned());
        }

        if self.policy.require_special && !password.chars().any(|c| self.is_special(c)) {
            failures.push(format!(
                "Must contain at least one special character from: {}",
                self.policy.special_chars
            ));
        }

        if failures.is_empty() {
            Outcome::Valid
        } else {
            // One consolidated message per field, replacing any default.
            Outcome::invalid(failures.join(", "))
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> StrongPassword {
        StrongPassword::new(PasswordPolicy::default()).unwrap()
    }

    #[test]
    fn valid_password() {
        assert!(defaults().evaluate(&Value::text("Password123!")).is_valid());
    }

    #[test]
    fn default_policy_matches_the_bare_declaration() {
        let checker = defaults();
        assert_eq!(checker.policy().min_length, 8);
        assert_eq!(checker.policy().max_length, None);
        assert_eq!(checker.policy().special_chars, DEFAULT_SPECIAL_CHARS);
    }

    #[test]
    fn absent_is_always_valid() {
        assert!(defaults().evaluate(&Value::Absent).is_valid());
    }

    #[test]
    fn blank_text_is_not_exempt_from_the_length_rule() {
        let outcome = defaults().evaluate(&Value::text(""));
        assert!(!outcome.is_valid());
        assert!(outcome.messages()[0].contains("at least 8 characters"));
    }

    #[test]
    fn too_short() {
        let outcome = defaults().evaluate(&Value::text("Pass1!"));
        assert!(!outcome.is_valid());
        assert!(outcome.messages()[0].contains("Length must be at least 8 characters"));
    }

    #[test]
    fn bounded_length_message_names_the_range() {
        let policy = PasswordPolicy {
            max_length: Some(20),
            ..PasswordPolicy::default()
        };
        let outcome = StrongPassword::new(policy)
            .unwrap()
            .evaluate(&Value::text("Pass1!"));
        assert!(outcome.messages()[0].contains("Length must be between 8 and 20 characters"));
    }

    #[test]
    fn missing_uppercase() {
        let outcome = defaults().evaluate(&Value::text("password123!"));
        assert_eq!(
            outcome.messages(),
            ["Must contain at least one uppercase letter"]
        );
    }

    #[test]
    fn missing_lowercase() {
        let outcome = defaults().evaluate(&Value::text("PASSWORD123!"));
        assert_eq!(
            outcome.messages(),
            ["Must contain at least one lowercase letter"]
        );
    }

    #[test]
    fn missing_digit() {
        let outcome = defaults().evaluate(&Value::text("Password!"));
        assert_eq!(outcome.messages(), ["Must contain at least one digit"]);
    }

    #[test]
    fn missing_special() {
        let outcome = defaults().evaluate(&Value::text("Password123"));
        assert_eq!(
            outcome.messages(),
            ["Must contain at least one special character from: @$!%*?&_#-"]
        );
    }

    #[test]
    fn custom_special_charset() {
        let policy = PasswordPolicy {
            special_chars: "#".to_owned(),
            ..PasswordPolicy::default()
        };
        let checker = StrongPassword::new(policy).unwrap();
        assert!(!checker.evaluate(&Value::text("Password123!")).is_valid());
        assert!(checker.evaluate(&Value::text("Password123#")).is_valid());
    }

    #[test]
    fn all_rules_are_evaluated_and_joined_in_order() {
        // "pass" fails length, uppercase, digit and special at once.
        let outcome = defaults().evaluate(&Value::text("pass"));
        assert_eq!(
            outcome.messages(),
            [concat!(
                "Length must be at least 8 characters, ",
                "Must contain at least one uppercase letter, ",
                "Must contain at least one digit, ",
                "Must contain at least one special character from: @$!%*?&_#-"
            )]
        );
    }

    #[test]
    fn disabled_checks_leave_only_length() {
        let policy = PasswordPolicy {
            min_length: 5,
            require_uppercase: false,
            require_lowercase: false,
            require_digit: false,
            require_special: false,
            ..PasswordPolicy::default()
        };
        let checker = StrongPassword::new(policy).unwrap();
        assert!(!checker.evaluate(&Value::text("pass")).is_valid());
        assert!(checker.evaluate(&Value::text("passw")).is_valid());
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let policy = PasswordPolicy {
            min_length: 5,
            require_uppercase: false,
            require_lowercase: false,
            require_digit: false,
            require_special: false,
            ..PasswordPolicy::default()
        };
        let checker = StrongPassword::new(policy).unwrap();
        // Five two-byte characters satisfy a five-character minimum.
        assert!(checker.evaluate(&Value::text("ééééé")).is_valid());
    }

    #[test]
    fn inverted_bounds_are_rejected_at_configure_time() {
        let policy = PasswordPolicy {
            min_length: 10,
            max_length: Some(5),
            ..PasswordPolicy::default()
        };
        assert_eq!(
            StrongPassword::new(policy).unwrap_err(),
            DeclarationError::LengthBoundsInverted { min: 10, max: 5 }
        );
    }

    #[test]
    fn unsatisfiable_special_rule_is_rejected_at_configure_time() {
        let policy = PasswordPolicy {
            special_chars: String::new(),
            ..PasswordPolicy::default()
        };
        assert_eq!(
            StrongPassword::new(policy).unwrap_err(),
            DeclarationError::EmptySpecialCharset
        );
    }

    #[test]
    fn policy_deserializes_with_annotation_defaults() {
        let policy: PasswordPolicy = serde_json::from_str(r#"{"min_length": 12}"#).unwrap();
        assert_eq!(policy.min_length, 12);
        assert_eq!(policy.max_length, None);
        assert!(policy.require_special);
        assert_eq!(policy.special_chars, DEFAULT_SPECIAL_CHARS);
    }
}
