//! # validkit
//!
//! A pluggable field-validation engine: independently configurable rule
//! checkers that inspect a single value against declared constraints, plus
//! an aggregation layer that collects every failing rule across an input and
//! renders a uniform, security-conscious error report.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use validkit::prelude::*;
//!
//! let role = AllowedValues::new(["admin", "user", "guest"])?;
//! let image = FileExtension::new(["jpg", "png"])?;
//!
//! let mut report = ErrorReport::validation_failed();
//! for (field, checker, value) in [
//!     ("role", &role as &dyn Validate, Value::from("root")),
//!     ("profile_image_name", &image, Value::from("pic.exe")),
//! ] {
//!     if let Outcome::Invalid { messages } = checker.evaluate(&value) {
//!         for message in &messages {
//!             report.add_error(field, checker.code(), redact(checker.code(), message, false));
//!         }
//!     }
//! }
//! assert_eq!(report.len(), 2);
//! ```
//!
//! ## Built-in checkers
//!
//! - **Set membership**: [`AllowedValues`](validators::AllowedValues),
//!   covering scalars, collections and boxed arrays (all elements must match)
//! - **Binary-text encoding**: [`Base64`](validators::Base64)
//! - **Filename extension**: [`FileExtension`](validators::FileExtension)
//! - **Composite password policy**:
//!   [`StrongPassword`](validators::StrongPassword)
//!
//! Checkers share two contracts: an ignorable value (absent, blank, empty,
//! numeric below one; see [`Value::is_ignorable`](foundation::Value)) is
//! trivially valid everywhere except the password length rule, and bad input
//! values produce an [`Outcome`](foundation::Outcome), never an error. Only
//! malformed declarations fail, fast, at configure time.
//!
//! Constraints can also be resolved from data with
//! [`Declaration`](validators::Declaration) /
//! [`Validator::configure`](validators::Validator), and the
//! [`report`] module turns collected violations into the external payload,
//! applying the allow-list redaction policy.

pub mod foundation;
pub mod prelude;
pub mod report;
pub mod validators;
