// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

// Warn on missing documentation for public items
#![warn(missing_docs)]

//! # DSTAR
//!
//! Datastar action-expression and attribute builder for server-side
//! templating in Rust.
//!
//! DSTAR renders the small textual `@verb('url', {options})` expressions a
//! client-side reactive runtime evaluates from element attributes, and
//! composes them into `data-init` / `data-on:*` attribute mappings with
//! optional key modifiers (`__debounce.300ms`, ...). It is a one-way,
//! syntax-level renderer: no URL validation, no networking, no parsing of
//! expressions back into structured data.
//!
//! ## Quick Start
//!
//! ```rust
//! use dstar::{args, get, post, opt, on_input, init, debounce, ms};
//!
//! // Action expressions
//! assert_eq!(get("/api/todos/%d", args![42]), "@get('/api/todos/42')");
//! assert_eq!(
//!     get("/api/updates", args![opt("requestCancellation", "disabled")]),
//!     "@get('/api/updates',{requestCancellation: 'disabled'})"
//! );
//!
//! // Attribute composition
//! let attrs = on_input(post("/api/search", args![]), [debounce().value(ms(300))]);
//! assert_eq!(attrs["data-on:input__debounce.300ms"], "@post('/api/search')");
//!
//! // One-entry maps merge into a full attribute set
//! let mut el = init(get("/api/updates", args![]), []);
//! el.extend(attrs);
//! ```

/// Action expression constructors, one per HTTP verb.
pub mod action;
/// Heterogeneous argument lists and partitioning.
pub mod args;
/// Attribute composition (`data-init`, `data-on:*`).
pub mod attrs;
/// Error types for the validating constructors.
pub mod error;
/// Printf-style URL template substitution.
pub mod format;
/// Attribute-key modifiers (`__debounce.300ms`, ...).
pub mod modifier;
/// Quoted and raw expression options.
pub mod option;

pub use action::{action, delete, get, patch, post, put, try_action, Verb};
pub use args::{partition, Arg, IntoArg};
pub use attrs::{init, on, on_change, on_click, on_input};
pub use error::{ExprError, Result};
pub use format::{substitute, try_substitute, FormatValue};
pub use modifier::{debounce, delay, modifier, ms, suffix, throttle, Modifier};
pub use option::{opt, opt_json, opt_raw, ActionOption};
