//! Binary-text encoding validator
//!
//! Checks that a text value decodes as base64 under the standard alphabet.
//! Decode failures are converted to an invalid outcome, never propagated.

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

use crate::foundation::{Outcome, RuleCode, Validate, Value};

/// Standard alphabet, padding accepted but not required.
///
/// Canonical `=` padding is validated when present; unpadded input of a
/// decodable length is accepted as well. There is no lenient mode: an invalid
/// character or an impossible length always fails.
const STANDARD_INDIFFERENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

const MESSAGE: &str = "Invalid Base64 format";

// ============================================================================
// BASE64
// ============================================================================

/// Validates that a value is a base64-encoded string.
///
/// Ignorable values pass; a present value must be text that strictly decodes
/// under the standard alphabet. Any other present shape is a violation.
///
/// # Examples
///
/// ```rust,ignore
/// use validkit::prelude::*;
///
/// let checker = Base64::new();
/// assert!(checker.evaluate(&Value::from("SGVsbG8=")).is_valid());
/// assert!(!checker.evaluate(&Value::from("!!!")).is_valid());
/// assert!(checker.evaluate(&Value::from("")).is_valid()); // ignorable
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64;

impl Base64 {
    /// Creates the encoding check. There is nothing to configure beyond the
    /// default message.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Validate for Base64 {
    fn code(&self) -> RuleCode {
        RuleCode::Base64
    }

    fn evaluate(&self, value: &Value) -> Outcome {
        if value.is_ignorable() {
            return Outcome::Valid;
        }

        match value {
            Value::Text(s) => match STANDARD_INDIFFERENT.decode(s) {
                Ok(_) => Outcome::Valid,
                Err(_) => Outcome::invalid(MESSAGE),
            },
            _ => Outcome::invalid(MESSAGE),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_padded_input() {
        assert!(Base64::new().evaluate(&Value::text("SGVsbG8=")).is_valid());
    }

    #[test]
    fn valid_unpadded_input() {
        // Padding is optional, matching the reference decoder.
        assert!(Base64::new().evaluate(&Value::text("SGVsbG8")).is_valid());
    }

    #[test]
    fn invalid_characters() {
        assert!(!Base64::new().evaluate(&Value::text("!!!")).is_valid());
        assert!(
            !Base64::new()
                .evaluate(&Value::text("this-is-not-base64!"))
                .is_valid()
        );
    }

    #[test]
    fn misplaced_padding() {
        assert!(!Base64::new().evaluate(&Value::text("SG=VsbG8")).is_valid());
    }

    #[test]
    fn impossible_length() {
        // 4k+1 characters can never be a base64 payload.
        assert!(!Base64::new().evaluate(&Value::text("SGVsb")).is_valid());
    }

    #[test]
    fn ignorable_values_pass() {
        let checker = Base64::new();
        assert!(checker.evaluate(&Value::Absent).is_valid());
        assert!(checker.evaluate(&Value::text("")).is_valid());
        assert!(checker.evaluate(&Value::text("   ")).is_valid());
    }

    #[test]
    fn present_non_text_fails() {
        let outcome = Base64::new().evaluate(&Value::Int(42));
        assert_eq!(outcome.messages(), [MESSAGE]);
    }
}
