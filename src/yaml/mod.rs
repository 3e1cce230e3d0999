//! YAML source analysis for key path operations.
//!
//! Everything here works against the source text itself. A document is
//! parsed once into a positioned tree, and every operation answers in
//! char offsets into the original text. Nothing is ever re-serialized,
//! so untouched parts of a document keep their exact formatting.
//!
//! # Module Organization
//!
//! - [`error`]: Error types for YAML operations
//! - [`lines`]: Line, column and char offset bookkeeping
//! - [`parse`]: Positioned tree built from parser events
//! - [`keypath`]: Dotted key path syntax
//! - [`locate`]: Cursor position to key path
//! - [`resolve`]: Key path to document location
//! - [`generate`]: Rendering missing structure as YAML lines

mod error;
mod generate;
mod keypath;
mod lines;
mod locate;
mod parse;
mod resolve;

// Re-export error type
pub use error::Error;

// Re-export line bookkeeping
pub use lines::LineIndex;

// Re-export tree types
pub use parse::{parse_document, Document, MappingNode, Node, OtherNode, Pair, Range, ScalarNode};

// Re-export key path helpers
pub use keypath::{is_valid_key_path, join_key_path, normalize_key_path, split_key_path};

// Re-export cursor lookup
pub use locate::{is_offset_on_key, key_path_at_offset};

// Re-export path resolution
pub use resolve::{find_key_path, find_partial_key_path, KeyLocation, PartialPath};

// Re-export structure generation
pub use generate::generate_structure;
