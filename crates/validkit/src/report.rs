//! Violation aggregation and the external error payload
//!
//! The aggregator is a pure data transform: the host application collects
//! every invalid outcome from one validation run, forwards each as a
//! `(field, code, message)` triple, and renders the finished report. One run
//! owns one report; nothing here is shared across traversals.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::foundation::RuleCode;

// ============================================================================
// VIOLATION RECORD
// ============================================================================

/// One triggered rule on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationRecord {
    /// Dotted/indexed path of the failing field, as supplied by the caller.
    pub field: String,
    /// Which rule produced the violation.
    pub code: RuleCode,
    /// Human-readable description, already redacted if the caller chose to.
    pub message: String,
}

// ============================================================================
// ERROR REPORT
// ============================================================================

/// The fixed-shape error payload returned to external consumers.
///
/// Serializes as:
///
/// ```json
/// {
///   "status": 400,
///   "message": "Validation failed",
///   "errors": [
///     { "field": "role", "code": "AllowedValues", "message": "..." }
///   ]
/// }
/// ```
///
/// `errors` preserves the order violations were appended; consumers must
/// not assume a canonical field order. Every violation forwarded to the
/// report appears in it; the aggregator never discards one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Status code of the overall response.
    pub status: u16,
    /// Fixed summary line, e.g. `"Validation failed"`.
    pub message: String,
    /// One record per triggered rule, insertion-ordered.
    pub errors: Vec<ViolationRecord>,
}

impl ErrorReport {
    /// Status used by [`ErrorReport::validation_failed`].
    pub const BAD_REQUEST: u16 = 400;

    /// Creates an empty report.
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            errors: Vec::new(),
        }
    }

    /// The standard report for a failed validation run.
    #[must_use]
    pub fn validation_failed() -> Self {
        Self::new(Self::BAD_REQUEST, "Validation failed")
    }

    /// Appends one violation.
    pub fn add_error(
        &mut self,
        field: impl Into<String>,
        code: RuleCode,
        message: impl Into<String>,
    ) {
        self.push(ViolationRecord {
            field: field.into(),
            code,
            message: message.into(),
        });
    }

    /// Appends an already-built record.
    pub fn push(&mut self, record: ViolationRecord) {
        self.errors.push(record);
    }

    /// True when no violation was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of recorded violations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

// ============================================================================
// REDACTION
// ============================================================================

/// Applies the security filter to a violation message.
///
/// Set-membership and extension messages enumerate their allow-list, which
/// may itself be sensitive (valid roles, accepted upload types). Unless the
/// caller opts into revealing those values, such messages are replaced by a
/// generic description. Password and encoding diagnostics pass through
/// untouched, since they never enumerate a secret whitelist.
#[must_use]
pub fn redact(code: RuleCode, message: &str, reveal_sensitive_values: bool) -> Cow<'_, str> {
    if reveal_sensitive_values {
        return Cow::Borrowed(message);
    }
    match code {
        RuleCode::AllowedValues => {
            tracing::trace!(rule = %code, "redacted violation message");
            Cow::Borrowed("Invalid value provided")
        }
        RuleCode::FileExtension => {
            tracing::trace!(rule = %code, "redacted violation message");
            Cow::Borrowed("Invalid file extension")
        }
        RuleCode::Base64 | RuleCode::StrongPassword => Cow::Borrowed(message),
    }
}

// ============================================================================
// REPORT CONFIG
// ============================================================================

/// Host-side switches for the error responder.
///
/// Mirrors the configuration record a host application binds from its
/// settings; missing fields deserialize to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Whether the host's validation error responder is active at all.
    pub enabled: bool,
    /// Whether allow-list contents may appear in violation messages.
    /// Off by default: valid roles or accepted file types can be sensitive.
    pub include_allowed_values: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            include_allowed_values: false,
        }
    }
}

impl ReportConfig {
    /// Runs a message through [`redact`] with this configuration's toggle.
    #[must_use]
    pub fn filter<'a>(&self, code: RuleCode, message: &'a str) -> Cow<'a, str> {
        redact(code, message, self.include_allowed_values)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_preserves_insertion_order() {
        let mut report = ErrorReport::validation_failed();
        report.add_error("role", RuleCode::AllowedValues, "Invalid value provided");
        report.add_error("avatar", RuleCode::Base64, "Invalid Base64 format");

        assert_eq!(report.len(), 2);
        assert_eq!(report.errors[0].field, "role");
        assert_eq!(report.errors[1].field, "avatar");
    }

    #[test]
    fn validation_failed_uses_the_fixed_summary() {
        let report = ErrorReport::validation_failed();
        assert_eq!(report.status, 400);
        assert_eq!(report.message, "Validation failed");
        assert!(report.is_empty());
    }

    #[test]
    fn payload_shape() {
        let mut report = ErrorReport::validation_failed();
        report.add_error("role", RuleCode::AllowedValues, "Invalid value provided");

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "status": 400,
                "message": "Validation failed",
                "errors": [
                    {
                        "field": "role",
                        "code": "AllowedValues",
                        "message": "Invalid value provided"
                    }
                ]
            })
        );
    }

    #[test]
    fn redaction_replaces_allow_list_messages() {
        let msg = "Must be one of [admin, user]";
        assert_eq!(
            redact(RuleCode::AllowedValues, msg, false),
            "Invalid value provided"
        );
        assert_eq!(
            redact(RuleCode::FileExtension, "Extension must be one of [jpg]", false),
            "Invalid file extension"
        );
    }

    #[test]
    fn redaction_passes_through_when_revealing() {
        let msg = "Must be one of [admin, user]";
        assert_eq!(redact(RuleCode::AllowedValues, msg, true), msg);
    }

    #[test]
    fn precise_diagnostics_are_never_redacted() {
        assert_eq!(
            redact(RuleCode::Base64, "Invalid Base64 format", false),
            "Invalid Base64 format"
        );
        let password_msg = "Must contain at least one digit";
        assert_eq!(
            redact(RuleCode::StrongPassword, password_msg, false),
            password_msg
        );
    }

    #[test]
    fn config_defaults_hide_allow_lists() {
        let config = ReportConfig::default();
        assert!(config.enabled);
        assert!(!config.include_allowed_values);
        assert_eq!(
            config.filter(RuleCode::AllowedValues, "Must be one of [admin]"),
            "Invalid value provided"
        );
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: ReportConfig =
            serde_json::from_str(r#"{"include_allowed_values": true}"#).unwrap();
        assert!(config.enabled);
        assert!(config.include_allowed_values);
    }
}
