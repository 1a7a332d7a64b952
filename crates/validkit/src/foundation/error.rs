//! Configuration-time errors
//!
//! A malformed declaration is the only fatal, caller-visible error in the
//! engine: it is reported when a validator is configured, never deferred to
//! evaluation. Bad *values* are an [`Outcome`](crate::foundation::Outcome),
//! not an `Err`.

/// Rejected constraint declarations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeclarationError {
    /// The set-membership rule needs at least one allowed value.
    #[error("allowed value set must not be empty")]
    EmptyValueSet,

    /// The filename-extension rule needs at least one allowed extension.
    #[error("allowed extension set must not be empty")]
    EmptyExtensionSet,

    /// The password length bounds contradict each other.
    #[error("minimum length {min} exceeds maximum length {max}")]
    LengthBoundsInverted {
        /// Declared minimum length.
        min: usize,
        /// Declared maximum length.
        max: usize,
    },

    /// The special-character rule is enabled but no character can satisfy it.
    #[error("special character set must not be empty while a special character is required")]
    EmptySpecialCharset,
}
