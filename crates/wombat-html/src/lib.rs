//! HTML-to-tree parser for Wombat.
//!
//! # Scope
//!
//! This crate implements:
//! - **Minifier** ([`minify_html`]): whitespace normalisation ahead of parsing
//! - **Tree Parser** ([`HTMLParser`]): a single pass over the minified text
//!   with an explicit stack of open tags, producing an immutable
//!   [`HTMLElement`] tree rooted at a `body` node
//!   - Anchor flattening, list-context rules for `li`, `br` line breaks
//!   - Caller allow-listed custom inline tags
//!   - Recovery from mismatched, stray and unclosed tags, reported as
//!     [`ParseIssue`]s rather than errors
//!
//! # Not Implemented
//!
//! - DOCTYPE, comments, CDATA and character references
//! - Script/style raw text handling
//! - Attributes other than `href`
//!
//! # Example
//! ```
//! use wombat_html::{HTMLElement, parse};
//!
//! let root = parse("<h1>Title</h1><p>Hello <b>world</b></p>", &[]);
//! let HTMLElement::Body(children) = &root else { unreachable!() };
//! assert_eq!(children[0].text_content(), "Title");
//! assert_eq!(children[1].text_content(), "Hello world");
//! ```

/// Parsed node model.
pub mod element;
/// Whitespace minifier.
pub mod minify;
/// Tree construction.
pub mod parser;
/// Indented tree dumps for debugging.
pub mod print;

pub use element::{HTMLElement, Tag, flatten_text};
pub use minify::minify_html;
pub use parser::{DEFAULT_MAX_DEPTH, HTMLParser, IssueKind, ParseIssue, ParserOptions};
pub use print::{format_tree, print_tree, write_tree};

/// Parse `html`, treating `custom_tags` as custom inline tags.
#[must_use]
pub fn parse(html: &str, custom_tags: &[&str]) -> HTMLElement {
    parse_with_issues(html, custom_tags).0
}

/// Parse `html` and also return every diagnostic raised along the way.
#[must_use]
pub fn parse_with_issues(html: &str, custom_tags: &[&str]) -> (HTMLElement, Vec<ParseIssue>) {
    let options = ParserOptions::new().with_custom_tags(custom_tags);
    HTMLParser::new(html, options).run_with_issues()
}
