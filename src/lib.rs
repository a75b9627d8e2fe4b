#![forbid(unsafe_code)]
//! nextname: pick the next available name in a numbered series.
//!
//! A template such as `"Probe %R"` describes a series. Given the names already in use, [`synthesize_name`] finds
//! the highest number present and produces the following one (`"Probe IV"` after `"Probe III"`).
//!
//! The template language and its diagnostics live in `nextname_syntax`; the numbering schemes and the selector
//! registry live in `nextname_core`. This crate adds resolution, a name history, a rename session and the CLI.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`. Synthesis never fails: malformed directives degrade to literal text.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod config;
pub mod history;
pub mod resolve;
pub mod session;
pub mod synthesize;

pub use config::RenameConfig;
pub use history::{EntityId, NameHistory};
pub use session::{Rename, Renamer, template_from_description};
pub use synthesize::{next_name, synthesize_name};
