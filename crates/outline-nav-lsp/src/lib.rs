#![warn(missing_docs)]
//! `outline-nav-lsp` - analysis-server outlines for `outline-nav`.
//!
//! Parses the outline trees an analysis server pushes (`dart/textDocument/publishOutline`),
//! converts UTF-16 columns, and keeps the latest tree per document behind the
//! [`outline_nav::OutlineProvider`] trait.

pub mod coords;
pub mod outline_json;
pub mod outline_store;

pub use coords::LspCoordinateConverter;
pub use outline_json::{outline_from_value, outline_from_value_utf16, outline_to_value};
pub use outline_store::{OutlineError, OutlineStore, PUBLISH_OUTLINE};
