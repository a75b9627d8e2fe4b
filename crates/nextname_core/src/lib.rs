//! Provide the numbering schemes and selector vocabulary shared by the nextname parser and resolver.
//!
//! A numbering scheme is a codec between an [`Ordinal`] and its textual form: decimal `7`, Roman `VII`,
//! spreadsheet-style `G`, the NATO word `golf`, and so on. The template parser picks a scheme by its one-character
//! selector from [`registry::SELECTORS`]; the resolver then decodes existing names and encodes their successor.
//!
//! ## Notes
//!
//! - This is a "semantic core" crate: **no IO**, no global mutable state, and no third-party dependencies.
//! - Every codec is total. `decode` returns `None` for text it cannot read and `encode` returns an empty string for
//!   ordinals outside the scheme's domain.
//! - Schemes are small `Copy` values. Configuring a width produces a new value, so registry entries are never mutated.
//!
//! ## Examples
//! ```rust
//! use nextname_core::registry;
//!
//! let roman = registry::scheme('R').unwrap();
//! assert_eq!(roman.decode("XX"), Some(20));
//! assert_eq!(roman.encode(21), "XXI");
//! ```

pub mod registry;
pub mod scheme;

pub use scheme::{LetterCase, NumberingScheme, Ordinal, SchemeFamily};
