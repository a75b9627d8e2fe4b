//! Template front end for nextname: scans a name template for its numbering directive.
//!
//! ## Notes
//! - This crate is syntax-only. It splits a template into prefix / scheme / suffix and does not look at existing
//!   names; ordinal resolution lives in the `nextname` crate.
//! - Scheme identity comes from the `nextname_core::registry` selector table.
//! - Parsing is total. Malformed directives are kept as literal text and reported as [`diagnostics::DirectiveError`]
//!   values for tooling.
//!
//! ## Examples
//! ```rust
//! use nextname_syntax::template;
//!
//! let parsed = template::parse("%P Force");
//! let directive = parsed.directive().unwrap();
//! assert_eq!(directive.prefix, "");
//! assert_eq!(directive.suffix, " Force");
//! assert_eq!(directive.scheme.decode("Delta"), Some(4));
//! ```

pub mod diagnostics;
pub mod template;

pub use diagnostics::{DirectiveError, Span};
pub use template::{Directive, ParsedTemplate, Template, parse};
