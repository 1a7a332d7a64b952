//! One-stop imports for common validation scenarios
//!
//! ```rust,ignore
//! use validkit::prelude::*;
//! ```

pub use crate::foundation::{DeclarationError, Messages, Outcome, RuleCode, Validate, Value};
pub use crate::report::{ErrorReport, ReportConfig, ViolationRecord, redact};
pub use crate::validators::{
    AllowedValues, Base64, DEFAULT_SPECIAL_CHARS, Declaration, FileExtension, PasswordPolicy,
    StrongPassword, Validator,
};
