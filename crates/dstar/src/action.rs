// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Action expression constructors.
//!
//! An action expression is the `@verb('url', {options})` call syntax the
//! client-side runtime evaluates from element attributes. One constructor
//! exists per HTTP verb plus the generic [`action`] for custom verbs.
//!
//! # Example
//!
//! ```rust
//! use dstar::{args, get, post, opt, opt_raw};
//!
//! assert_eq!(get("/api/updates", args![]), "@get('/api/updates')");
//! assert_eq!(get("/api/todos/%d", args![42]), "@get('/api/todos/42')");
//! assert_eq!(
//!     post("/api/data", args![opt_raw("openWhenHidden", "true"), opt("retry", "error")]),
//!     "@post('/api/data',{openWhenHidden: true, retry: 'error'})"
//! );
//! ```

use crate::args::{partition, Arg};
use crate::error::Result;
use crate::format::{substitute, try_substitute};
use crate::option::ActionOption;
use std::fmt;

/// The HTTP verbs with dedicated constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    /// `@get(...)`
    Get,
    /// `@post(...)`
    Post,
    /// `@put(...)`
    Put,
    /// `@patch(...)`
    Patch,
    /// `@delete(...)`
    Delete,
}

impl Verb {
    /// Returns the lowercase verb tag used in the expression syntax.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Patch => "patch",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renders `@verb('url')` or `@verb('url',{options})`.
fn render(verb: &str, url: &str, options: &[ActionOption]) -> String {
    let mut out = String::with_capacity(verb.len() + url.len() + 8);
    out.push('@');
    out.push_str(verb);
    out.push_str("('");
    out.push_str(url);
    out.push('\'');
    if !options.is_empty() {
        out.push_str(",{");
        for (i, option) in options.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            option.render_into(&mut out);
        }
        out.push('}');
    }
    out.push(')');
    tracing::trace!(verb, url, options = options.len(), "rendered action expression");
    out
}

/// Builds an action expression for an arbitrary verb.
///
/// `args` mixes positional format values (substituted into `url_template`
/// left to right) and options (rendered into the trailing `{...}` block in
/// arrival order); the two kinds may be interleaved freely. Substitution
/// is permissive, see [`substitute`].
pub fn action<I>(verb: &str, url_template: &str, args: I) -> String
where
    I: IntoIterator<Item = Arg>,
{
    let (values, options) = partition(args);
    render(verb, &substitute(url_template, &values), &options)
}

/// Validating variant of [`action`].
///
/// Fails instead of embedding markers when the template's specifier count
/// does not match the supplied format values, or when the template
/// contains an unsupported conversion.
pub fn try_action<I>(verb: &str, url_template: &str, args: I) -> Result<String>
where
    I: IntoIterator<Item = Arg>,
{
    let (values, options) = partition(args);
    Ok(render(verb, &try_substitute(url_template, &values)?, &options))
}

macro_rules! verb_constructor {
    ($(#[$doc:meta])* $name:ident, $verb:expr) => {
        $(#[$doc])*
        pub fn $name<I>(url_template: &str, args: I) -> String
        where
            I: IntoIterator<Item = Arg>,
        {
            action($verb.as_str(), url_template, args)
        }
    };
}

verb_constructor!(
    /// Builds a `@get('...')` expression.
    get,
    Verb::Get
);
verb_constructor!(
    /// Builds a `@post('...')` expression.
    post,
    Verb::Post
);
verb_constructor!(
    /// Builds a `@put('...')` expression.
    put,
    Verb::Put
);
verb_constructor!(
    /// Builds a `@patch('...')` expression.
    patch,
    Verb::Patch
);
verb_constructor!(
    /// Builds a `@delete('...')` expression.
    delete,
    Verb::Delete
);
