//! The parsed node model.
//!
//! [`HTMLElement`] is a closed sum type: one variant per recognised tag, plus
//! text, allow-listed custom inline tags, and preserved unknown tags. Once the
//! parser hands a tree back it is never mutated.

use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// A tag name the parser gives semantic meaning to.
///
/// Parsing is ASCII case-insensitive, so `"H1".parse::<Tag>()` yields
/// [`Tag::H1`]. Display and [`Tag::as_str`] always give the lower-case name,
/// which is also the key used for style lookup.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Tag {
    /// `<html>`
    Html,
    /// `<head>`
    Head,
    /// `<body>`
    Body,
    /// `<title>`
    Title,
    /// `<h1>`
    H1,
    /// `<h2>`
    H2,
    /// `<h3>`
    H3,
    /// `<h4>`
    H4,
    /// `<h5>`
    H5,
    /// `<h6>`
    H6,
    /// `<p>`
    P,
    /// `<a>`
    A,
    /// `<ul>`
    Ul,
    /// `<ol>`
    Ol,
    /// `<li>`
    Li,
    /// `<b>`
    B,
    /// `<i>`
    I,
    /// `<u>`
    U,
    /// `<br>` never opens a frame; it is emitted as a line-break text node.
    Br,
}

impl Tag {
    /// The lower-case tag name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Whether this tag opens a list context for `li` children.
    #[must_use]
    pub const fn is_list(self) -> bool {
        matches!(self, Self::Ul | Self::Ol)
    }
}

/// One node of the parsed tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "content", rename_all = "kebab-case")]
pub enum HTMLElement {
    /// `<html>` and its children.
    Html(Vec<HTMLElement>),
    /// `<head>` and its children.
    Head(Vec<HTMLElement>),
    /// `<body>`, also used as the parse root and as an unwrapped group.
    Body(Vec<HTMLElement>),
    /// `<title>`, reduced to its text.
    Title(String),
    /// `<h1>` and its children.
    H1(Vec<HTMLElement>),
    /// `<h2>` and its children.
    H2(Vec<HTMLElement>),
    /// `<h3>` and its children.
    H3(Vec<HTMLElement>),
    /// `<h4>` and its children.
    H4(Vec<HTMLElement>),
    /// `<h5>` and its children.
    H5(Vec<HTMLElement>),
    /// `<h6>` and its children.
    H6(Vec<HTMLElement>),
    /// `<p>` and its children.
    P(Vec<HTMLElement>),
    /// An anchor. Never holds element children.
    A {
        /// The quoted `href` from the opening tag, if any.
        href: Option<String>,
        /// Flattened text of everything between `<a>` and `</a>`.
        text: String,
    },
    /// `<ul>` and its children.
    Ul(Vec<HTMLElement>),
    /// `<ol>` and its children.
    Ol(Vec<HTMLElement>),
    /// `<li>`, only produced inside a `ul` or `ol`.
    Li(Vec<HTMLElement>),
    /// `<b>` and its children.
    B(Vec<HTMLElement>),
    /// `<i>` and its children.
    I(Vec<HTMLElement>),
    /// `<u>` and its children.
    U(Vec<HTMLElement>),
    /// A run of character data. `"\n"` for `<br>`.
    Text(String),
    /// A caller allow-listed tag, treated as inline content.
    CustomInline {
        /// Lower-cased tag name, usable as a style key. `<Callout>` in the
        /// source is stored as `callout`, not in its source casing.
        tag: String,
        /// Parsed content.
        children: Vec<HTMLElement>,
    },
    /// Any other tag, kept only when the parser is asked to preserve
    /// unknown wrappers.
    Unknown {
        /// Lower-cased tag name, not in its source casing.
        tag: String,
        /// Parsed content.
        children: Vec<HTMLElement>,
    },
}

impl HTMLElement {
    /// The tag name used for style lookup, `None` for text.
    #[must_use]
    pub fn tag_name(&self) -> Option<&str> {
        let tag = match self {
            Self::Html(_) => Tag::Html,
            Self::Head(_) => Tag::Head,
            Self::Body(_) => Tag::Body,
            Self::Title(_) => Tag::Title,
            Self::H1(_) => Tag::H1,
            Self::H2(_) => Tag::H2,
            Self::H3(_) => Tag::H3,
            Self::H4(_) => Tag::H4,
            Self::H5(_) => Tag::H5,
            Self::H6(_) => Tag::H6,
            Self::P(_) => Tag::P,
            Self::A { .. } => Tag::A,
            Self::Ul(_) => Tag::Ul,
            Self::Ol(_) => Tag::Ol,
            Self::Li(_) => Tag::Li,
            Self::B(_) => Tag::B,
            Self::I(_) => Tag::I,
            Self::U(_) => Tag::U,
            Self::Text(_) => return None,
            Self::CustomInline { tag, .. } | Self::Unknown { tag, .. } => return Some(tag.as_str()),
        };
        Some(tag.as_str())
    }

    /// Child nodes. Empty for `title`, `a` and text.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Html(children)
            | Self::Head(children)
            | Self::Body(children)
            | Self::H1(children)
            | Self::H2(children)
            | Self::H3(children)
            | Self::H4(children)
            | Self::H5(children)
            | Self::H6(children)
            | Self::P(children)
            | Self::Ul(children)
            | Self::Ol(children)
            | Self::Li(children)
            | Self::B(children)
            | Self::I(children)
            | Self::U(children)
            | Self::CustomInline { children, .. }
            | Self::Unknown { children, .. } => children,
            Self::Title(_) | Self::A { .. } | Self::Text(_) => &[],
        }
    }

    /// Children that a renderer merges into one styled run: the content of
    /// headings, paragraphs, list items, `b`/`i`/`u` and custom inline tags.
    ///
    /// Block containers (`html`, `head`, `body`, `ul`, `ol`) and unknown
    /// wrappers return an empty slice.
    #[must_use]
    pub fn inline_children(&self) -> &[Self] {
        match self {
            Self::H1(children)
            | Self::H2(children)
            | Self::H3(children)
            | Self::H4(children)
            | Self::H5(children)
            | Self::H6(children)
            | Self::P(children)
            | Self::Li(children)
            | Self::B(children)
            | Self::I(children)
            | Self::U(children)
            | Self::CustomInline { children, .. } => children,
            _ => &[],
        }
    }

    /// Whether a renderer lays this node out inline rather than as a block.
    #[must_use]
    pub const fn is_inline(&self) -> bool {
        matches!(
            self,
            Self::Text(_)
                | Self::A { .. }
                | Self::B(_)
                | Self::I(_)
                | Self::U(_)
                | Self::CustomInline { .. }
        )
    }

    /// Depth-first concatenation of all descendant text.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.push_text(&mut out);
        out
    }

    fn push_text(&self, out: &mut String) {
        match self {
            Self::Text(text) | Self::Title(text) | Self::A { text, .. } => out.push_str(text),
            _ => {
                for child in self.children() {
                    child.push_text(out);
                }
            }
        }
    }

    /// Text nodes with no content carry nothing and are never kept in a tree.
    pub(crate) fn is_empty_text(&self) -> bool {
        matches!(self, Self::Text(text) if text.is_empty())
    }
}

/// Flatten a list of siblings into one string.
#[must_use]
pub fn flatten_text(nodes: &[HTMLElement]) -> String {
    let mut out = String::new();
    for node in nodes {
        node.push_text(&mut out);
    }
    out
}
