//! The field-value model
//!
//! Validators operate on a single closed union of value shapes rather than
//! open-ended runtime type inspection. Each shape carries exactly what the
//! rule checkers need: presence, text, elements, or a scalar rendering.

use std::collections::BTreeMap;
use std::fmt;

// ============================================================================
// VALUE
// ============================================================================

/// A field value as seen by the validators.
///
/// `List` holds the elements of an ordered or unordered collection; `Array`
/// holds the boxed elements of a fixed-size sequence. Both are checked
/// element-wise by the set-membership rule. `IntArray` / `FloatArray` model
/// fixed arrays of primitive numbers, which participate in membership checks
/// as a *single* opaque token (see [`Value::token`]).
///
/// # Examples
///
/// ```rust,ignore
/// use validkit::foundation::Value;
///
/// let role = Value::from("admin");
/// let tags = Value::List(vec!["java".into(), "spring".into()]);
/// assert!(!role.is_ignorable());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// No value was supplied for the field.
    #[default]
    Absent,

    /// UTF-8 text.
    Text(String),

    /// Boolean scalar.
    Bool(bool),

    /// Integer number.
    Int(i64),

    /// Floating point number.
    Float(f64),

    /// Ordered or unordered collection of boxed elements.
    List(Vec<Value>),

    /// Fixed-size sequence of boxed elements.
    Array(Vec<Value>),

    /// Fixed-size array of primitive integers.
    IntArray(Vec<i64>),

    /// Fixed-size array of primitive floats.
    FloatArray(Vec<f64>),

    /// Key-value mapping.
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// Creates a text value from `String` or `&str`.
    pub fn text(v: impl Into<String>) -> Self {
        Self::Text(v.into())
    }

    /// Creates a collection value from anything iterable into values.
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Returns true if no value was supplied.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    // ========================================================================
    // IGNORABLE-VALUE PREDICATE
    // ========================================================================

    /// Classifies the value as "missing or empty" for validation purposes.
    ///
    /// Every type-specific rule treats an ignorable value as trivially valid,
    /// delegating mandatory-presence checking to a dedicated required-field
    /// constraint. This prevents double errors when a constraint is stacked
    /// on top of a presence check.
    ///
    /// The checks run in priority order; the first matching shape wins:
    ///
    /// 1. absent values;
    /// 2. text that is empty or whitespace-only;
    /// 3. fixed-size arrays of length 0;
    /// 4. empty collections;
    /// 5. empty mappings;
    /// 6. numbers strictly less than 1.0: `0` and negative numbers count as
    ///    "missing" here; numeric fields express lower bounds through a
    ///    minimum-value constraint, not through this predicate.
    ///
    /// Anything else is not ignorable. Total function, never fails.
    #[must_use]
    pub fn is_ignorable(&self) -> bool {
        match self {
            Self::Absent => true,
            Self::Text(s) => s.trim().is_empty(),
            Self::Array(items) => items.is_empty(),
            Self::IntArray(items) => items.is_empty(),
            Self::FloatArray(items) => items.is_empty(),
            Self::List(items) => items.is_empty(),
            Self::Map(entries) => entries.is_empty(),
            Self::Int(n) => *n < 1,
            Self::Float(x) => *x < 1.0,
            Self::Bool(_) => false,
        }
    }

    // ========================================================================
    // VALUE-SHAPE NORMALIZER
    // ========================================================================

    /// Renders the value as a single comparable string token.
    ///
    /// This is the value's default textual representation, backed by
    /// [`fmt::Display`]. Note that primitive numeric arrays render as one
    /// bracketed token (`"[1, 2, 3]"`), so a whole array checked against a
    /// token set essentially never matches; multi-valued membership is only
    /// supported for collections and boxed arrays, which are flattened by
    /// [`Value::membership_tokens`] instead.
    #[must_use]
    pub fn token(&self) -> String {
        self.to_string()
    }

    /// Flattens the value into the tokens that participate in set-membership
    /// checks.
    ///
    /// Collections and boxed arrays contribute one token per non-ignorable
    /// element (ignorable elements are trivially members and are skipped);
    /// every other shape contributes its single [`Value::token`].
    #[must_use]
    pub fn membership_tokens(&self) -> Vec<String> {
        match self {
            Self::List(items) | Self::Array(items) => items
                .iter()
                .filter(|element| !element.is_ignorable())
                .map(Self::token)
                .collect(),
            other => vec![other.token()],
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => Ok(()),
            Self::Text(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::List(items) | Self::Array(items) => write_bracketed(f, items),
            Self::IntArray(items) => write_bracketed(f, items),
            Self::FloatArray(items) => write_bracketed(f, items),
            Self::Map(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

fn write_bracketed<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    f.write_str("[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str("]")
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Absent, Into::into)
    }
}

impl From<Vec<&str>> for Value {
    fn from(v: Vec<&str>) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}

// ============================================================================
// TESTS
// ============================================================================
