//! Tree construction from minified HTML text.

/// Scanner helpers: cursor movement, tag names and attributes.
mod helpers;
/// Parse diagnostics.
pub mod issue;
/// Parser configuration.
pub mod options;
/// The frame-stack tree builder.
pub mod tree_builder;

pub use issue::{IssueKind, ParseIssue};
pub use options::{DEFAULT_MAX_DEPTH, ParserOptions};
pub use tree_builder::HTMLParser;
