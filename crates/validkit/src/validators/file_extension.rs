//! Filename-extension validator

use std::collections::HashSet;

use crate::foundation::{DeclarationError, Outcome, RuleCode, Validate, Value};

// ============================================================================
// FILE EXTENSION
// ============================================================================

/// Validates that a filename ends with one of the allowed extensions.
///
/// Matching is case-insensitive by default; [`FileExtension::case_sensitive`]
/// makes the declared spelling binding. A leading `.` on a configured
/// extension is stripped, so `"pdf"` and `".pdf"` declare the same thing.
///
/// Only the suffix after the *last* `.` of the whole string is considered;
/// the value is not split on directory separators. A value like `/a.b/name`
/// therefore extracts `b/name` as its "extension", which fails unless that
/// literal string was configured.
///
/// # Examples
///
/// ```rust,ignore
/// use validkit::prelude::*;
///
/// let images = FileExtension::new(["jpg", "png"])?;
/// assert!(images.evaluate(&Value::from("avatar.JPG")).is_valid());
/// assert!(!images.evaluate(&Value::from("script.exe")).is_valid());
/// assert!(!images.evaluate(&Value::from("README")).is_valid());
/// ```
#[derive(Debug, Clone)]
pub struct FileExtension {
    /// Declared extensions in declaration order, as spelled by the caller.
    declared: Vec<String>,
    /// Resolved extension set: dot-stripped, case-normalized.
    resolved: HashSet<String>,
    case_sensitive: bool,
}

impl FileExtension {
    /// Creates a case-insensitive extension check.
    ///
    /// Fails fast on an empty extension set.
    pub fn new<I>(extensions: I) -> Result<Self, DeclarationError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let declared: Vec<String> = extensions.into_iter().map(Into::into).collect();
        if declared.is_empty() {
            return Err(DeclarationError::EmptyExtensionSet);
        }
        let resolved = Self::resolve(&declared, false);
        Ok(Self {
            declared,
            resolved,
            case_sensitive: false,
        })
    }

    /// Makes the declared spelling binding: `"JPG"` no longer matches `jpg`.
    #[must_use = "builder methods must be chained or built"]
    pub fn case_sensitive(mut self) -> Self {
        self.case_sensitive = true;
        self.resolved = Self::resolve(&self.declared, true);
        self
    }

    fn resolve(declared: &[String], case_sensitive: bool) -> HashSet<String> {
        declared
            .iter()
            .map(|ext| ext.strip_prefix('.').unwrap_or(ext))
            .map(|ext| {
                if case_sensitive {
                    ext.to_owned()
                } else {
                    ext.to_lowercase()
                }
            })
            .collect()
    }

    fn message(&self) -> String {
        format!("Extension must be one of [{}]", self.declared.join(", "))
    }
}

impl Validate for FileExtension {
    fn code(&self) -> RuleCode {
        RuleCode::FileExtension
    }

    fn evaluate(&self, value: &Value) -> Outcome {
        if value.is_ignorable() {
            return Outcome::Valid;
        }

        let name = value.token();
        let extension = match name.rfind('.') {
            // No dot, or a trailing dot with nothing after it: no extension.
            None => return Outcome::invalid("File name has no extension"),
            Some(index) if index == name.len() - 1 => {
                return Outcome::invalid("File name has no extension");
            }
            Some(index) => &name[index + 1..],
        };

        let allowed = if self.case_sensitive {
            self.resolved.contains(extension)
        } else {
            self.resolved.contains(&extension.to_lowercase())
        };

        if allowed {
            Outcome::Valid
        } else {
            Outcome::invalid(self.message())
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn images() -> FileExtension {
        FileExtension::new(["jpg", "png", "pdf"]).unwrap()
    }

    #[test]
    fn empty_set_is_rejected_at_configure_time() {
        let err = FileExtension::new(Vec::<String>::new()).unwrap_err();
        assert_eq!(err, DeclarationError::EmptyExtensionSet);
    }

    #[test]
    fn matching_extension_passes() {
        assert!(images().evaluate(&Value::text("image.jpg")).is_valid());
    }

    #[test]
    fn unknown_extension_fails() {
        assert!(!images().evaluate(&Value::text("image.gif")).is_valid());
    }

    #[test]
    fn case_insensitive_by_default() {
        assert!(images().evaluate(&Value::text("image.JPG")).is_valid());
    }

    #[test]
    fn case_sensitive_rejects_other_spellings() {
        let strict = images().case_sensitive();
        assert!(strict.evaluate(&Value::text("image.jpg")).is_valid());
        assert!(!strict.evaluate(&Value::text("image.JPG")).is_valid());
    }

    #[test]
    fn no_dot_means_no_extension() {
        assert!(!images().evaluate(&Value::text("README")).is_valid());
    }

    #[test]
    fn trailing_dot_means_no_extension() {
        assert!(!images().evaluate(&Value::text("file.")).is_valid());
    }

    #[test]
    fn leading_dot_in_declaration_is_stripped() {
        let v = FileExtension::new([".pdf"]).unwrap();
        assert!(v.evaluate(&Value::text("doc.pdf")).is_valid());
    }

    #[test]
    fn only_the_last_dot_counts() {
        let v = images();
        assert!(v.evaluate(&Value::text("archive.tar.pdf")).is_valid());
        // Directory separators are not special: the "extension" of
        // `/a.b/name` is the literal `b/name`.
        assert!(!v.evaluate(&Value::text("/a.b/name")).is_valid());
    }

    #[test]
    fn ignorable_values_pass() {
        assert!(images().evaluate(&Value::Absent).is_valid());
        assert!(images().evaluate(&Value::text(" ")).is_valid());
    }

    #[test]
    fn messages_name_the_declared_extensions() {
        let outcome = images().evaluate(&Value::text("virus.exe"));
        assert_eq!(outcome.messages(), ["Extension must be one of [jpg, png, pdf]"]);
    }
}
