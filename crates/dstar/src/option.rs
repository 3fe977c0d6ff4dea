// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Options attached to an action expression.
//!
//! An option is a key/value pair rendered inside the `{...}` block of an
//! action expression. Quoted options ([`opt`]) wrap the value in single
//! quotes; raw options ([`opt_raw`]) emit the value verbatim so callers can
//! pass numbers, booleans, `null`, object literals, or regular-expression
//! literals as text.
//!
//! # Example
//!
//! ```rust
//! use dstar::{args, get, opt, opt_raw};
//!
//! let expr = get("/api/updates", args![
//!     opt("requestCancellation", "disabled"),
//!     opt_raw("openWhenHidden", "true"),
//! ]);
//! assert_eq!(expr, "@get('/api/updates',{requestCancellation: 'disabled', openWhenHidden: true})");
//! ```

use serde_json::Value as JsonValue;

/// A single key/value option for an action expression.
///
/// Immutable once constructed. Duplicate keys are legal and are all
/// rendered in the order supplied; precedence between duplicates is the
/// downstream runtime's concern, not ours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOption {
    key: String,
    value: String,
    raw: bool,
}

impl ActionOption {
    /// Returns the option key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the option value as supplied, without quoting.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns true if the value is emitted verbatim (no quoting).
    pub fn is_raw(&self) -> bool {
        self.raw
    }

    /// Renders the option as `key: 'value'` or `key: value` into `out`.
    ///
    /// Quoted values are not escaped: a value containing a single quote
    /// produces a syntactically broken expression. Callers own their input.
    pub(crate) fn render_into(&self, out: &mut String) {
        out.push_str(&self.key);
        out.push_str(": ");
        if self.raw {
            out.push_str(&self.value);
        } else {
            out.push('\'');
            out.push_str(&self.value);
            out.push('\'');
        }
    }
}

/// Creates a quoted option: renders as `key: 'value'`.
///
/// The value is wrapped in single quotes verbatim; embedded single quotes
/// are passed through unescaped.
pub fn opt(key: impl Into<String>, value: impl Into<String>) -> ActionOption {
    let key = key.into();
    debug_assert!(!key.is_empty(), "option key must be non-empty");
    ActionOption {
        key,
        value: value.into(),
        raw: false,
    }
}

/// Creates a raw option: renders as `key: value` with no quoting.
///
/// Use this for values that are already literals in the expression
/// language: `opt_raw("openWhenHidden", "true")`,
/// `opt_raw("retryMaxCount", "10")`,
/// `opt_raw("filterSignals", "{include: /^foo/}")`.
pub fn opt_raw(key: impl Into<String>, value: impl Into<String>) -> ActionOption {
    let key = key.into();
    debug_assert!(!key.is_empty(), "option key must be non-empty");
    ActionOption {
        key,
        value: value.into(),
        raw: true,
    }
}

/// Creates a raw option whose value is the compact JSON rendering of `value`.
///
/// JSON object literals are valid expression literals for the client
/// runtime, so this is a convenient bridge from `serde_json` contexts.
pub fn opt_json(key: impl Into<String>, value: &JsonValue) -> ActionOption {
    opt_raw(key, value.to_string())
}
