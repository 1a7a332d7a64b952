//! Built-in rule checkers and the declaration layer
//!
//! Four independent checkers cover the constraint set:
//!
//! - **Set membership**: [`AllowedValues`]
//! - **Binary-text encoding**: [`Base64`]
//! - **Filename extension**: [`FileExtension`]
//! - **Composite password policy**: [`StrongPassword`]
//!
//! Each checker is constructed directly, or resolved from a [`Declaration`]
//! through [`Validator::configure`]. A declaration is the immutable
//! description of a constraint's parameters, captured once at the point the
//! constraint is attached to a field; the configured checker is its resolved,
//! ready-to-evaluate form.

pub mod allowed_values;
pub mod base64;
pub mod file_extension;
pub mod strong_password;

pub use allowed_values::AllowedValues;
pub use self::base64::Base64;
pub use file_extension::FileExtension;
pub use strong_password::{DEFAULT_SPECIAL_CHARS, PasswordPolicy, StrongPassword};

use serde::{Deserialize, Serialize};

use crate::foundation::{DeclarationError, Outcome, RuleCode, Validate, Value};

// ============================================================================
// DECLARATION
// ============================================================================

/// An immutable constraint declaration.
///
/// This is the configuration record a traversal layer hands to
/// [`Validator::configure`], the explicit stand-in for metadata attached to
/// a field. Optional parameters deserialize to the same defaults a bare
/// declaration carries, so a JSON record only spells out what it changes:
///
/// ```json
/// { "rule": "FileExtension", "extensions": ["jpg", "png"] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule")]
pub enum Declaration {
    /// Set-membership constraint.
    AllowedValues {
        /// The allowed tokens.
        values: Vec<String>,
        /// Whether matching is case-sensitive. Default: `true`.
        #[serde(default = "default_true")]
        case_sensitive: bool,
        /// Whether an absent value is accepted. Default: `true`.
        #[serde(default = "default_true")]
        accept_absent: bool,
    },

    /// Binary-text encoding constraint. No parameters.
    Base64,

    /// Filename-extension constraint.
    FileExtension {
        /// The allowed extensions, with or without a leading `.`.
        extensions: Vec<String>,
        /// Whether matching is case-sensitive. Default: `false`.
        #[serde(default)]
        case_sensitive: bool,
    },

    /// Composite password-policy constraint.
    StrongPassword {
        /// The complexity requirements. Default: [`PasswordPolicy::default`].
        #[serde(default)]
        policy: PasswordPolicy,
    },
}

const fn default_true() -> bool {
    true
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// A configured rule checker, dispatched over the closed validator set.
///
/// Configure once per declaration, evaluate per field value; the resolved
/// state is immutable and reusable across any number of evaluations.
#[derive(Debug, Clone)]
pub enum Validator {
    /// Configured set-membership checker.
    AllowedValues(AllowedValues),
    /// Configured encoding checker.
    Base64(Base64),
    /// Configured extension checker.
    FileExtension(FileExtension),
    /// Configured password checker.
    StrongPassword(StrongPassword),
}

impl Validator {
    /// Resolves a declaration into its configured checker.
    ///
    /// Fails fast on a malformed declaration; evaluation never fails.
    pub fn configure(declaration: Declaration) -> Result<Self, DeclarationError> {
        let validator = match declaration {
            Declaration::AllowedValues {
                values,
                case_sensitive,
                accept_absent,
            } => {
                let mut checker = AllowedValues::new(values)?;
                if !case_sensitive {
                    checker = checker.case_insensitive();
                }
                if !accept_absent {
                    checker = checker.reject_absent();
                }
                Self::AllowedValues(checker)
            }
            Declaration::Base64 => Self::Base64(Base64::new()),
            Declaration::FileExtension {
                extensions,
                case_sensitive,
            } => {
                let mut checker = FileExtension::new(extensions)?;
                if case_sensitive {
                    checker = checker.case_sensitive();
                }
                Self::FileExtension(checker)
            }
            Declaration::StrongPassword { policy } => {
                Self::StrongPassword(StrongPassword::new(policy)?)
            }
        };

        tracing::debug!(rule = %validator.code(), "configured validator");
        Ok(validator)
    }
}

impl Validate for Validator {
    fn code(&self) -> RuleCode {
        match self {
            Self::AllowedValues(v) => v.code(),
            Self::Base64(v) => v.code(),
            Self::FileExtension(v) => v.code(),
            Self::StrongPassword(v) => v.code(),
        }
    }

    fn evaluate(&self, value: &Value) -> Outcome {
        match self {
            Self::AllowedValues(v) => v.evaluate(value),
            Self::Base64(v) => v.evaluate(value),
            Self::FileExtension(v) => v.evaluate(value),
            Self::StrongPassword(v) => v.evaluate(value),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
