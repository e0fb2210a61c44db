//! Property values read from UFO script files.
//!
//! Values are untyped at parse time: a property such as `size "120 24"` keeps
//! its string form, and interpreting it is left to downstream consumers.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A property value.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", content = "value", rename_all = "lowercase"))]
pub enum Value {
    /// Bare word like `true`, `*cvar:mn_name` or `cmpButton`
    Ident(String),
    /// Quoted string like `"_Save game"`
    String(String),
    /// Integer literal like `42`
    Int(i64),
    /// Float literal like `0.5`
    Float(f64),
    /// Brace list like `{ "a" "b" }`, possibly nested
    List(Vec<Value>),
}

impl Value {
    /// Returns a human-readable name for this value's variant.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Ident(_) => "identifier",
            Self::String(_) => "string",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::List(_) => "list",
        }
    }

    /// Returns the identifier text, or None if not an identifier.
    #[must_use]
    pub fn as_ident(&self) -> Option<&str> {
        match self {
            Self::Ident(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the string contents, or None if not a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the text of an identifier or string.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Ident(s) | Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer value, or None if not an integer.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the numeric value of an integer or float.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Int(n) => Some(*n as f64),
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the list elements, or None if not a list.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns true if this is a list.
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Returns true if this string is marked for translation (`"_Text"`).
    #[must_use]
    pub fn is_translatable(&self) -> bool {
        matches!(self, Self::String(s) if s.len() > 1 && s.starts_with('_'))
    }

    /// Returns the translation key of a translatable string, without the marker.
    #[must_use]
    pub fn translation_key(&self) -> Option<&str> {
        match self {
            Self::String(s) if self.is_translatable() => Some(&s[1..]),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::List(items)
    }
}

/// Writes `s` as a quoted script string.
///
/// # Errors
/// Propagates formatter errors.
pub fn write_quoted(f: &mut impl fmt::Write, s: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ident(s) => f.write_str(s),
            Self::String(s) => write_quoted(f, s),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => {
                let s = n.to_string();
                f.write_str(&s)?;
                if !s.contains('.') && !s.contains('e') && !s.contains("inf") && !s.contains("NaN")
                {
                    f.write_str(".0")?;
                }
                Ok(())
            }
            Self::List(items) => {
                f.write_str("{")?;
                for item in items {
                    write!(f, " {item}")?;
                }
                f.write_str(" }")
            }
        }
    }
}
