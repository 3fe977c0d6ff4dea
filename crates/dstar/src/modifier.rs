// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Attribute-key modifiers.
//!
//! Modifiers are behavioral suffixes on an attribute key, rendered as
//! `__name` or `__name.value` and concatenated in the order supplied:
//! `data-on:input__debounce.300ms`.

/// A single attribute-key modifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modifier {
    name: String,
    value: Option<String>,
}

impl Modifier {
    /// Attaches a rendered value, turning `__name` into `__name.value`.
    ///
    /// For durations, combine with [`ms`]: `debounce().value(ms(300))`.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Returns the modifier name.
    pub fn name(&self) -> &str {
        &self.name
    }

    fn render_into(&self, out: &mut String) {
        out.push_str("__");
        out.push_str(&self.name);
        if let Some(value) = &self.value {
            out.push('.');
            out.push_str(value);
        }
    }
}

/// Creates a bare modifier with the given name.
pub fn modifier(name: impl Into<String>) -> Modifier {
    let name = name.into();
    debug_assert!(!name.is_empty(), "modifier name must be non-empty");
    Modifier { name, value: None }
}

/// The `debounce` timing modifier.
pub fn debounce() -> Modifier {
    modifier("debounce")
}

/// The `throttle` timing modifier.
pub fn throttle() -> Modifier {
    modifier("throttle")
}

/// The `delay` timing modifier.
pub fn delay() -> Modifier {
    modifier("delay")
}

/// Renders a millisecond count as a duration value: `ms(300)` is `"300ms"`.
pub fn ms(millis: u64) -> String {
    format!("{}ms", millis)
}

/// Appends each modifier to `base` in order, producing the final
/// attribute key.
pub fn suffix<I>(base: &str, modifiers: I) -> String
where
    I: IntoIterator<Item = Modifier>,
{
    let mut key = String::from(base);
    for modifier in modifiers {
        modifier.render_into(&mut key);
    }
    key
}
