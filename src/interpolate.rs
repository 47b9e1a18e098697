//! Placeholder substitution for resolved message templates.
//!
//! Templates carry named placeholders in the form `{identifier}`, e.g.
//! `"{partNumber}: {stock} units in stock"`. Substitution is a pure, total
//! function: unknown placeholders stay in place, malformed braces pass
//! through untouched.

use std::collections::HashMap;
use std::fmt;

/// A substitution value: templates accept strings and numbers.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Pre-formatted text, e.g. `"2,500"` or a part number.
    Str(String),
    /// Integral count or quantity.
    Int(i64),
    /// Fractional value, e.g. a unit price.
    Float(f64),
}

/// Placeholder name → value mapping supplied per lookup call.
pub type Params = HashMap<String, ParamValue>;

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// True for characters allowed inside a placeholder name.
fn is_placeholder_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// True if `name` is a well-formed placeholder name (one or more word
/// characters).
fn is_placeholder_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(is_placeholder_char)
}

/// Substitute `{identifier}` tokens in `template` with values from `params`.
///
/// Scans left to right. Every occurrence of a mapped placeholder is replaced
/// with the value's string form; placeholders with no mapping are left
/// verbatim so a missing parameter is visible in the rendered UI rather than
/// silently dropped. Inserted values are not rescanned.
///
/// # Examples
/// ```
/// use bom_i18n::interpolate::{interpolate, ParamValue, Params};
///
/// let mut params = Params::new();
/// params.insert("name".to_string(), ParamValue::from("A"));
/// params.insert("count".to_string(), ParamValue::from(3_i64));
///
/// let out = interpolate("Hello {name}, you have {count} items", &params);
/// assert_eq!(out, "Hello A, you have 3 items");
/// ```
#[must_use]
pub fn interpolate(template: &str, params: &Params) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some((head, after_brace)) = rest.split_once('{') {
        out.push_str(head);

        match after_brace.split_once('}') {
            Some((name, tail)) if is_placeholder_name(name) => {
                if let Some(value) = params.get(name) {
                    out.push_str(&value.to_string());
                } else {
                    // Unfilled placeholder stays intact.
                    out.push('{');
                    out.push_str(name);
                    out.push('}');
                }
                rest = tail;
            }
            _ => {
                // Not a placeholder; emit the brace and keep scanning after it.
                out.push('{');
                rest = after_brace;
            }
        }
    }

    out.push_str(rest);
    out
}
