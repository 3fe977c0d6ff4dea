// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Heterogeneous argument lists for the action constructors.
//!
//! A single call mixes positional format values and options in any
//! relative order; [`partition`] splits them back out by variant tag,
//! preserving arrival order within each group. The [`args!`](crate::args)
//! macro builds the list from plain Rust values.

use crate::format::FormatValue;
use crate::option::ActionOption;

/// One element of an action constructor's argument list.
///
/// Either a positional format value for the URL template or an option for
/// the trailing `{...}` block. Discrimination is by variant, never by
/// position, so options may appear anywhere in the list.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// A positional value consumed by a conversion specifier in the URL.
    Value(FormatValue),
    /// An option rendered into the expression's option block.
    Opt(ActionOption),
}

/// Conversion into an [`Arg`], used by the [`args!`](crate::args) macro.
pub trait IntoArg {
    /// Converts `self` into an argument-list element.
    fn into_arg(self) -> Arg;
}

impl IntoArg for Arg {
    fn into_arg(self) -> Arg {
        self
    }
}

impl IntoArg for ActionOption {
    fn into_arg(self) -> Arg {
        Arg::Opt(self)
    }
}

impl IntoArg for FormatValue {
    fn into_arg(self) -> Arg {
        Arg::Value(self)
    }
}

macro_rules! impl_into_arg_value {
    ($($t:ty),*) => {
        $(impl IntoArg for $t {
            fn into_arg(self) -> Arg {
                Arg::Value(self.into())
            }
        })*
    };
}

impl_into_arg_value!(
    i8, i16, i32, i64, u8, u16, u32, usize, f32, f64, bool, &str, String, serde_json::Value
);

/// Builds a `Vec<Arg>` from a heterogeneous list of format values and
/// options.
///
/// # Example
///
/// ```rust
/// use dstar::{args, get, opt};
///
/// let expr = get("/api/users/%d", args![5, opt("retry", "error")]);
/// assert_eq!(expr, "@get('/api/users/5',{retry: 'error'})");
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Arg>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        <[_]>::into_vec(::std::boxed::Box::new([
            $($crate::IntoArg::into_arg($arg)),+
        ]))
    };
}

/// Splits a mixed argument list into format values and options.
///
/// Both output sequences preserve the original relative order of their
/// members; interleaving between the two groups is irrelevant.
pub fn partition<I>(args: I) -> (Vec<FormatValue>, Vec<ActionOption>)
where
    I: IntoIterator<Item = Arg>,
{
    let mut values = Vec::new();
    let mut options = Vec::new();
    for arg in args {
        match arg {
            Arg::Value(value) => values.push(value),
            Arg::Opt(option) => options.push(option),
        }
    }
    (values, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::opt;

    #[test]
    fn test_partition_empty() {
        let (values, options) = partition(args![]);
        assert!(values.is_empty());
        assert!(options.is_empty());
    }

    #[test]
    fn test_partition_preserves_relative_order() {
        let (values, options) = partition(args![5, opt("a", "1"), 42, opt("b", "2")]);
        assert_eq!(values, vec![FormatValue::Int(5), FormatValue::Int(42)]);
        assert_eq!(options, vec![opt("a", "1"), opt("b", "2")]);
    }

    #[test]
    fn test_partition_is_interleaving_independent() {
        let (v1, o1) = partition(args![opt("a", "1"), 5, 42]);
        let (v2, o2) = partition(args![5, 42, opt("a", "1")]);
        assert_eq!(v1, v2);
        assert_eq!(o1, o2);
    }

    #[test]
    fn test_mixed_scalar_kinds() {
        let (values, _) = partition(args!["users", 42, 1.5, true]);
        assert_eq!(
            values,
            vec![
                FormatValue::Str("users".to_string()),
                FormatValue::Int(42),
                FormatValue::Float(1.5),
                FormatValue::Bool(true),
            ]
        );
    }

    #[test]
    fn test_json_value_as_arg() {
        let (values, _) = partition(args![serde_json::json!(7)]);
        assert_eq!(values, vec![FormatValue::Int(7)]);
    }
}
