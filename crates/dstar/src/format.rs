// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Printf-style substitution over URL templates.
//!
//! Supported conversions: `%d` integer, `%s` string, `%f` fixed
//! six-decimal float, `%t` boolean, `%v` default rendering of any value,
//! and `%%` for a literal percent sign.
//!
//! [`substitute`] is permissive: it never fails. An unmatched specifier is
//! replaced by a visible `%!d(MISSING)`-style marker, a type-incompatible
//! specifier by `%!d(value)`, and surplus values are appended as
//! `%!(EXTRA value)` markers, so a miscounted call site shows up in the
//! rendered output instead of panicking at render time. [`try_substitute`]
//! is the validating variant for callers that prefer a hard error.

use crate::error::{ExprError, Result};
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value as JsonValue;
use std::fmt;

lazy_static! {
    /// A percent sign followed by any single character.
    static ref SPECIFIER_RE: Regex = Regex::new("%.").unwrap();
}

/// A positional value for URL template substitution.
///
/// The closed set of scalar kinds the builder knows how to format. Values
/// are converted via `From`, usually implicitly through the
/// [`args!`](crate::args) macro.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatValue {
    /// Signed integer, formatted by `%d`.
    Int(i64),
    /// Floating-point number, formatted by `%f` with six decimals.
    Float(f64),
    /// String, formatted by `%s`.
    Str(String),
    /// Boolean, formatted by `%t` as `true`/`false`.
    Bool(bool),
}

impl fmt::Display for FormatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{}", i),
            Self::Float(x) => write!(f, "{}", x),
            Self::Str(s) => write!(f, "{}", s),
            Self::Bool(b) => write!(f, "{}", b),
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for FormatValue {
            fn from(value: $t) -> Self {
                Self::Int(value as i64)
            }
        })*
    };
}

impl_from_int!(i8, i16, i32, u8, u16, u32, usize);

impl From<i64> for FormatValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for FormatValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for FormatValue {
    fn from(value: f32) -> Self {
        Self::Float(value as f64)
    }
}

impl From<&str> for FormatValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for FormatValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for FormatValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<JsonValue> for FormatValue {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Bool(b) => Self::Bool(b),
            JsonValue::Number(n) => match n.as_i64() {
                Some(i) => Self::Int(i),
                None => Self::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            JsonValue::String(s) => Self::Str(s),
            // Null, arrays and objects fall back to their JSON text.
            other => Self::Str(other.to_string()),
        }
    }
}

/// Formats `value` according to the conversion character `spec`.
///
/// A type-incompatible pairing yields a `%!<spec>(<value>)` marker.
fn convert(spec: char, value: &FormatValue) -> String {
    match (spec, value) {
        ('d', FormatValue::Int(i)) => i.to_string(),
        ('s', FormatValue::Str(s)) => s.clone(),
        ('f', FormatValue::Float(x)) => format!("{:.6}", x),
        ('t', FormatValue::Bool(b)) => b.to_string(),
        ('v', v) => v.to_string(),
        (spec, v) => format!("%!{}({})", spec, v),
    }
}

/// Substitutes conversion specifiers in `template` with `values`, left to
/// right.
///
/// Permissive: arity and type mismatches are surfaced as markers in the
/// output rather than errors (see the module docs). A `%` followed by a
/// character outside the supported set passes through verbatim and
/// consumes no value, so percent-encoded URL fragments like `%20` survive.
///
/// # Example
///
/// ```rust
/// use dstar::substitute;
///
/// let url = substitute("/api/users/%d?q=%s", &[42.into(), "bob".into()]);
/// assert_eq!(url, "/api/users/42?q=bob");
/// ```
pub fn substitute(template: &str, values: &[FormatValue]) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    let mut tail = 0;
    let mut next = 0;

    for m in SPECIFIER_RE.find_iter(template) {
        let token = m.as_str();
        let spec = token.chars().nth(1).unwrap_or('%');
        match spec {
            '%' => {
                out.push_str(&template[tail..m.start()]);
                out.push('%');
                tail = m.end();
            }
            'd' | 's' | 'f' | 't' | 'v' => {
                out.push_str(&template[tail..m.start()]);
                match values.get(next) {
                    Some(value) => out.push_str(&convert(spec, value)),
                    None => {
                        out.push_str("%!");
                        out.push(spec);
                        out.push_str("(MISSING)");
                    }
                }
                next += 1;
                tail = m.end();
            }
            // Not a conversion we know; leave it alone.
            _ => {}
        }
    }
    out.push_str(&template[tail..]);

    for value in values.iter().skip(next) {
        out.push_str(&format!("%!(EXTRA {})", value));
    }
    out
}

/// Validating variant of [`substitute`].
///
/// Fails with [`ExprError::ArityMismatch`] when the specifier count does
/// not equal `values.len()`, and with [`ExprError::UnknownSpecifier`] when
/// the template contains a `%` followed by an unsupported alphabetic
/// conversion character. On success the output contains no markers.
pub fn try_substitute(template: &str, values: &[FormatValue]) -> Result<String> {
    let mut expected = 0;
    for m in SPECIFIER_RE.find_iter(template) {
        let token = m.as_str();
        let spec = token.chars().nth(1).unwrap_or('%');
        match spec {
            '%' => {}
            'd' | 's' | 'f' | 't' | 'v' => expected += 1,
            c if c.is_ascii_alphabetic() => {
                return Err(ExprError::UnknownSpecifier {
                    token: token.to_string(),
                });
            }
            // Digits and punctuation after '%' are literal text
            // (percent-encoded URLs), not specifiers.
            _ => {}
        }
    }
    if expected != values.len() {
        return Err(ExprError::ArityMismatch {
            expected,
            supplied: values.len(),
        });
    }
    Ok(substitute(template, values))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_specifiers() {
        assert_eq!(substitute("/api/updates", &[]), "/api/updates");
    }

    #[test]
    fn test_int_substitution() {
        assert_eq!(substitute("/api/todos/%d", &[42.into()]), "/api/todos/42");
        assert_eq!(substitute("/api/offset/%d", &[(-10).into()]), "/api/offset/-10");
        assert_eq!(substitute("/api/todos/%d", &[0.into()]), "/api/todos/0");
    }

    #[test]
    fn test_string_substitution() {
        assert_eq!(
            substitute("/api/search?q=%s", &["hello world".into()]),
            "/api/search?q=hello world"
        );
    }

    #[test]
    fn test_float_has_six_decimals() {
        assert_eq!(
            substitute("/api/products?price=%f", &[19.99.into()]),
            "/api/products?price=19.990000"
        );
    }

    #[test]
    fn test_bool_substitution() {
        assert_eq!(
            substitute("/api/toggle?active=%t", &[true.into()]),
            "/api/toggle?active=true"
        );
    }

    #[test]
    fn test_default_rendering() {
        assert_eq!(substitute("/x/%v/%v", &[42.into(), 1.5.into()]), "/x/42/1.5");
    }

    #[test]
    fn test_left_to_right_order() {
        assert_eq!(
            substitute("/api/%s/%d/%s", &["users".into(), 42.into(), "profile".into()]),
            "/api/users/42/profile"
        );
    }

    #[test]
    fn test_literal_percent() {
        assert_eq!(substitute("/load?pct=100%%", &[]), "/load?pct=100%");
    }

    #[test]
    fn test_percent_encoding_passes_through() {
        assert_eq!(substitute("/api/a%20b", &[]), "/api/a%20b");
    }

    #[test]
    fn test_missing_value_marker() {
        assert_eq!(substitute("/api/todos/%d", &[]), "/api/todos/%!d(MISSING)");
    }

    #[test]
    fn test_extra_value_marker() {
        assert_eq!(substitute("/api/todos", &[7.into()]), "/api/todos%!(EXTRA 7)");
    }

    #[test]
    fn test_type_mismatch_marker() {
        assert_eq!(substitute("/api/%d", &["oops".into()]), "/api/%!d(oops)");
    }

    #[test]
    fn test_try_substitute_ok() {
        assert_eq!(
            try_substitute("/api/todos/%d", &[42.into()]),
            Ok("/api/todos/42".to_string())
        );
    }

    #[test]
    fn test_try_substitute_arity_mismatch() {
        assert_eq!(
            try_substitute("/api/%d/%d", &[1.into()]),
            Err(ExprError::ArityMismatch {
                expected: 2,
                supplied: 1
            })
        );
        assert_eq!(
            try_substitute("/api/todos", &[1.into()]),
            Err(ExprError::ArityMismatch {
                expected: 0,
                supplied: 1
            })
        );
    }

    #[test]
    fn test_try_substitute_unknown_specifier() {
        assert_eq!(
            try_substitute("/api/%q", &[]),
            Err(ExprError::UnknownSpecifier {
                token: "%q".to_string()
            })
        );
    }

    #[test]
    fn test_try_substitute_allows_percent_encoding() {
        assert_eq!(try_substitute("/api/a%20b", &[]), Ok("/api/a%20b".to_string()));
    }

    #[test]
    fn test_json_value_conversion() {
        assert_eq!(FormatValue::from(serde_json::json!(42)), FormatValue::Int(42));
        assert_eq!(FormatValue::from(serde_json::json!(1.5)), FormatValue::Float(1.5));
        assert_eq!(
            FormatValue::from(serde_json::json!("x")),
            FormatValue::Str("x".to_string())
        );
        assert_eq!(FormatValue::from(serde_json::json!(true)), FormatValue::Bool(true));
        assert_eq!(
            FormatValue::from(serde_json::json!(null)),
            FormatValue::Str("null".to_string())
        );
    }
}
