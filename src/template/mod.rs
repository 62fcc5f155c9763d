//! Layout templating for CGI responses.
//!
//! This module provides:
//!
//! - **Template**: a layout document loaded from disk and rendered by
//!   replacing `{{name}}` placeholders
//! - **SubstitutionMap**: the ordered placeholder-to-value pairs for one render
//! - **ValueSelector**: the strategy used to pick one value from a fixed list
//!
//! # Template Syntax
//!
//! Placeholders are literal `{{name}}` tokens:
//!
//! ```text
//! <title>{{title}}</title>
//! <h1>{{icon}} {{heading}}</h1>
//! <p>{{message}}</p>
//! <small>{{time}}</small>
//! ```
//!
//! There is no escaping, no expressions and no nesting. Tokens without a
//! value are left in the output untouched.

mod render;
mod selection;
mod substitution;

pub use render::{TOKEN_CLOSE, TOKEN_OPEN, Template, render_str};
pub use selection::{RandomSelector, ValueSelector};
pub use substitution::{SubstitutionMap, vars};

#[cfg(test)]
pub(crate) use selection::SequenceSelector;
