//! Evaluation outcomes and stable rule identifiers

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Violation messages attached to an invalid outcome.
///
/// Inline capacity of one: every rule checker except the composite password
/// policy produces exactly one message, and the password policy joins its
/// rule messages into one as well.
pub type Messages = SmallVec<[String; 1]>;

// ============================================================================
// RULE CODE
// ============================================================================

/// Stable identifier for the rule that produced a violation.
///
/// The serialized form is part of the external error payload, so clients can
/// pattern-match on it for message customization. The strings are fixed and
/// never derived from internal type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleCode {
    /// Set-membership check.
    AllowedValues,
    /// Binary-text encoding check.
    Base64,
    /// Filename-extension check.
    FileExtension,
    /// Composite password policy.
    StrongPassword,
}

impl RuleCode {
    /// The stable string form used in the external payload.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AllowedValues => "AllowedValues",
            Self::Base64 => "Base64",
            Self::FileExtension => "FileExtension",
            Self::StrongPassword => "StrongPassword",
        }
    }
}

impl fmt::Display for RuleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// OUTCOME
// ============================================================================

/// The result of evaluating one value against one configured constraint.
///
/// An invalid outcome is the *expected* negative result of a predicate, not a
/// fault: it never aborts traversal of sibling fields, and it carries the
/// human-readable messages in the order the rules were checked.
///
/// Outcomes are produced fresh per evaluation and are not persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The value satisfies the constraint.
    Valid,
    /// The value violates the constraint.
    Invalid {
        /// Violation messages, insertion-ordered.
        messages: Messages,
    },
}

impl Outcome {
    /// An invalid outcome carrying a single message.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            messages: Messages::from_iter([message.into()]),
        }
    }

    /// Builds an outcome from collected rule messages.
    ///
    /// An empty message list means no rule failed, i.e. `Valid`.
    pub fn from_messages<I>(messages: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let messages: Messages = messages.into_iter().map(Into::into).collect();
        if messages.is_empty() {
            Self::Valid
        } else {
            Self::Invalid { messages }
        }
    }

    /// Returns true for [`Outcome::Valid`].
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The violation messages; empty for a valid outcome.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        match self {
            Self::Valid => &[],
            Self::Invalid { messages } => messages,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
