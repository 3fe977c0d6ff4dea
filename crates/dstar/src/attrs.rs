// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Attribute composition.
//!
//! Maps a semantic attribute role (initialization, click/input/change
//! handler, generic event) plus modifiers to a single-entry attribute
//! mapping consumed by the surrounding templating layer. Each call returns
//! a fresh one-entry map; callers merge multiple results when an element
//! needs more than one attribute.
//!
//! # Example
//!
//! ```rust
//! use dstar::{args, post, on_input, debounce, ms};
//!
//! let attrs = on_input(post("/api/search", args![]), [debounce().value(ms(300))]);
//! assert_eq!(attrs.len(), 1);
//! assert_eq!(attrs["data-on:input__debounce.300ms"], "@post('/api/search')");
//! ```

use crate::modifier::{suffix, Modifier};
use std::collections::HashMap;

/// Builds the one-entry mapping for a fully suffixed base key.
fn entry<I>(base: &str, expression: impl Into<String>, modifiers: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = Modifier>,
{
    let key = suffix(base, modifiers);
    tracing::trace!(key = %key, "composed attribute");
    let mut attrs = HashMap::with_capacity(1);
    attrs.insert(key, expression.into());
    attrs
}

/// Composes a `data-init` attribute, run when the element enters the DOM.
pub fn init<I>(expression: impl Into<String>, modifiers: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = Modifier>,
{
    entry("data-init", expression, modifiers)
}

/// Composes a `data-on:<event>` attribute for an arbitrary event name.
pub fn on<I>(event: &str, expression: impl Into<String>, modifiers: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = Modifier>,
{
    entry(&format!("data-on:{}", event), expression, modifiers)
}

/// Composes a `data-on:click` attribute.
pub fn on_click<I>(expression: impl Into<String>, modifiers: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = Modifier>,
{
    on("click", expression, modifiers)
}

/// Composes a `data-on:input` attribute.
pub fn on_input<I>(expression: impl Into<String>, modifiers: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = Modifier>,
{
    on("input", expression, modifiers)
}

/// Composes a `data-on:change` attribute.
pub fn on_change<I>(expression: impl Into<String>, modifiers: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = Modifier>,
{
    on("change", expression, modifiers)
}
