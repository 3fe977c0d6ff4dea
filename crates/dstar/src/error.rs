// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Error types for the DSTAR expression builder.
//!
//! The builder itself is permissive: the plain constructors ([`crate::get`],
//! [`crate::action`], ...) never fail and surface bad input as visible
//! markers in the rendered expression. These errors are raised only by the
//! validating `try_*` variants ([`crate::try_substitute`],
//! [`crate::try_action`]).

use thiserror::Error;

/// The error type for validating expression construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExprError {
    /// The number of conversion specifiers in the URL template does not
    /// match the number of positional format values supplied.
    #[error("format arity mismatch: template expects {expected} value(s), {supplied} supplied")]
    ArityMismatch {
        /// Number of conversion specifiers found in the template.
        expected: usize,
        /// Number of positional format values supplied.
        supplied: usize,
    },

    /// The template contains a conversion specifier outside the supported
    /// set (`%d`, `%s`, `%f`, `%t`, `%v`, `%%`).
    #[error("unknown format specifier: {token}")]
    UnknownSpecifier {
        /// The offending token, including the leading percent sign.
        token: String,
    },
}

/// Convenience type alias for Results with [`ExprError`].
pub type Result<T> = std::result::Result<T, ExprError>;
