use std::mem;

use wombat_common::warning::warn_once;

use super::issue::{IssueKind, ParseIssue};
use super::options::ParserOptions;
use crate::element::{HTMLElement, Tag, flatten_text};
use crate::minify::minify_html;

/// An open tag that has not been closed yet.
///
/// Popping a frame finalises it into one [`HTMLElement`], which is appended
/// to the new top frame or, with the stack empty, to the top-level list.
#[derive(Debug)]
struct Frame {
    /// The tag name exactly as written in the source.
    tag: String,
    /// Only kept for anchors; every other tag drops its `href`.
    href: Option<String>,
    /// Finished children, in document order.
    children: Vec<HTMLElement>,
}

impl Frame {
    fn new(tag: String, href: Option<String>) -> Self {
        Self {
            tag,
            href,
            children: Vec::new(),
        }
    }

    fn matches(&self, name: &str) -> bool {
        self.tag.eq_ignore_ascii_case(name)
    }

    fn is_list(&self) -> bool {
        self.tag.parse::<Tag>().is_ok_and(Tag::is_list)
    }
}

/// Single-pass tree builder for a small HTML dialect.
///
/// The parser walks the minified input once, left to right, keeping an
/// explicit stack of open tags instead of recursing. Malformed markup never
/// aborts the parse: every problem is recorded as a [`ParseIssue`], echoed
/// once through the shared warning channel, and the parser keeps going.
///
/// # Example
/// ```
/// use wombat_html::{HTMLElement, HTMLParser, ParserOptions};
///
/// let parser = HTMLParser::new("<h1>Title</h1><p>Content</p>", ParserOptions::new());
/// let root = parser.run();
/// assert!(matches!(root, HTMLElement::Body(ref children) if children.len() == 2));
/// ```
pub struct HTMLParser {
    /// Minified source text.
    pub(super) input: String,

    /// Byte offset of the cursor into `input`.
    pub(super) pos: usize,

    /// Stack of open tags, innermost last.
    frames: Vec<Frame>,

    /// Finished nodes with no enclosing frame.
    top_level: Vec<HTMLElement>,

    /// Tags ignored at the depth limit whose closers have not been seen.
    /// Only ever non-empty while the stack is full, so every entry belongs
    /// to the innermost frame.
    suppressed: Vec<String>,

    options: ParserOptions,

    /// Diagnostics collected so far.
    issues: Vec<ParseIssue>,
}

impl HTMLParser {
    /// Minify `html` and prepare a parser for it.
    #[must_use]
    pub fn new(html: &str, options: ParserOptions) -> Self {
        Self {
            input: minify_html(html),
            pos: 0,
            frames: Vec::new(),
            top_level: Vec::new(),
            suppressed: Vec::new(),
            options,
            issues: Vec::new(),
        }
    }

    /// The minified text this parser works on.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Get all parse issues encountered so far.
    #[must_use]
    pub fn get_issues(&self) -> &[ParseIssue] {
        &self.issues
    }

    /// Run the parser and return the root `body` node.
    #[must_use]
    pub fn run(self) -> HTMLElement {
        self.run_with_issues().0
    }

    /// Run the parser and return both the root node and every diagnostic.
    #[must_use]
    pub fn run_with_issues(mut self) -> (HTMLElement, Vec<ParseIssue>) {
        while !self.is_at_end() {
            self.step();
        }
        self.close_remaining_frames();

        let root = HTMLElement::Body(mem::take(&mut self.top_level));
        (root, mem::take(&mut self.issues))
    }

    /// Consume one text run, opening tag, or closing tag.
    fn step(&mut self) {
        if self.peek() != Some('<') {
            let text = self.consume_text();
            self.insert_text(text);
        } else if self.peek_at(1) == Some('/') {
            self.parse_closing_tag();
        } else {
            self.parse_opening_tag();
        }
    }

    /// Record a recoverable problem.
    ///
    /// Logs via wombat-common's warning system and stores the issue for
    /// later retrieval.
    fn parse_warning(&mut self, kind: IssueKind, message: String, offset: usize) {
        let _ = warn_once("HTML Parser", &message);
        self.issues.push(ParseIssue {
            kind,
            message,
            offset,
        });
    }

    /// Append a character run to the innermost frame, or to the top level.
    ///
    /// Whitespace-only runs directly inside `ul`/`ol` are dropped so that no
    /// phantom nodes appear between list items.
    fn insert_text(&mut self, text: String) {
        if text.is_empty() {
            return;
        }
        if let Some(frame) = self.frames.last()
            && frame.is_list()
            && text.trim().is_empty()
        {
            return;
        }
        self.insert_node(HTMLElement::Text(text));
    }

    /// Attach a finished node to the innermost frame, or to the top level.
    fn insert_node(&mut self, node: HTMLElement) {
        if node.is_empty_text() {
            return;
        }
        match self.frames.last_mut() {
            Some(frame) => frame.children.push(node),
            None => self.top_level.push(node),
        }
    }

    /// `<name attr="value" ...>`
    fn parse_opening_tag(&mut self) {
        let start = self.pos;
        let _ = self.advance(); // '<'
        let name = self.consume_tag_name();
        let href = self.consume_attributes();

        if !self.consume_if('>') {
            self.parse_warning(
                IssueKind::UnterminatedTag,
                format!("Unterminated tag <{name}> at end of input"),
                start,
            );
            return;
        }

        if is_line_break(&name) {
            self.insert_node(HTMLElement::Text("\n".to_string()));
            return;
        }

        if self.frames.len() >= self.options.max_depth() {
            let message = format!(
                "Nesting depth limit of {} reached, ignoring <{name}>",
                self.options.max_depth()
            );
            self.parse_warning(IssueKind::NestingTooDeep, message, start);
            self.suppressed.push(name);
            return;
        }

        let href = if name.eq_ignore_ascii_case(Tag::A.as_str()) {
            href
        } else {
            None
        };
        self.frames.push(Frame::new(name, href));
    }

    /// `</name>`
    ///
    /// Only the innermost frame is ever closed. A closer that names a frame
    /// further down the stack still closes just the innermost one and is
    /// reported as mismatched; intervening frames are not unwound.
    fn parse_closing_tag(&mut self) {
        let start = self.pos;
        let _ = self.advance(); // '<'
        let _ = self.advance(); // '/'
        let name = self.consume_tag_name();
        self.skip_until('>');
        let _ = self.consume_if('>');

        // The closer of an ignored tag closes nothing
        if let Some(index) = self
            .suppressed
            .iter()
            .rposition(|tag| tag.eq_ignore_ascii_case(&name))
        {
            self.suppressed.truncate(index);
            return;
        }

        let Some(top) = self.frames.last() else {
            self.parse_warning(
                IssueKind::UnexpectedClosingTag,
                format!("Unexpected closing tag </{name}> with no matching opening tag"),
                start,
            );
            return;
        };

        if top.matches(&name) {
            self.close_top_frame();
            return;
        }

        let expected = top.tag.clone();
        self.parse_warning(
            IssueKind::MismatchedClosingTag,
            format!("Mismatched closing tag. Expected </{expected}> but found </{name}>"),
            start,
        );
        if self.frames.iter().any(|frame| frame.matches(&name)) {
            self.close_top_frame();
        }
    }

    /// Auto-close everything still open at end of input, innermost first.
    fn close_remaining_frames(&mut self) {
        while let Some(top) = self.frames.last() {
            let message = format!("Missing closing tag for <{}>", top.tag);
            self.parse_warning(IssueKind::MissingClosingTag, message, self.input.len());
            self.close_top_frame();
        }
    }

    fn close_top_frame(&mut self) {
        self.suppressed.clear();
        if let Some(frame) = self.frames.pop() {
            let node = self.create_element(frame);
            self.insert_node(node);
        }
    }

    /// Whether any frame still open is a `ul` or `ol`.
    fn is_inside_list(&self) -> bool {
        self.frames.iter().any(Frame::is_list)
    }

    /// Map a closed frame onto a node variant by its tag name.
    ///
    /// Must be called after the frame has been popped, so that the list
    /// check only sees its ancestors.
    fn create_element(&self, frame: Frame) -> HTMLElement {
        let Frame {
            tag,
            href,
            children,
        } = frame;

        let Ok(known) = tag.parse::<Tag>() else {
            return self.create_unrecognized_element(&tag, children);
        };

        match known {
            Tag::Html => HTMLElement::Html(children),
            Tag::Head => HTMLElement::Head(children),
            Tag::Body => HTMLElement::Body(children),
            Tag::Title => HTMLElement::Title(
                children
                    .first()
                    .map(HTMLElement::text_content)
                    .unwrap_or_default(),
            ),
            Tag::H1 => HTMLElement::H1(children),
            Tag::H2 => HTMLElement::H2(children),
            Tag::H3 => HTMLElement::H3(children),
            Tag::H4 => HTMLElement::H4(children),
            Tag::H5 => HTMLElement::H5(children),
            Tag::H6 => HTMLElement::H6(children),
            Tag::P => HTMLElement::P(children),
            Tag::A => HTMLElement::A {
                href,
                text: flatten_text(&children),
            },
            Tag::Ul => HTMLElement::Ul(children),
            Tag::Ol => HTMLElement::Ol(children),
            // A list item outside any list degrades to an unwrapped group
            Tag::Li if self.is_inside_list() => HTMLElement::Li(children),
            Tag::Li => HTMLElement::Body(children),
            Tag::B => HTMLElement::B(children),
            Tag::I => HTMLElement::I(children),
            Tag::U => HTMLElement::U(children),
            // <br> never opens a frame, so this is only a stray <br ...> variant
            Tag::Br => self.create_unrecognized_element(&tag, children),
        }
    }

    fn create_unrecognized_element(&self, tag: &str, mut children: Vec<HTMLElement>) -> HTMLElement {
        if self.options.is_custom_tag(tag) {
            return HTMLElement::CustomInline {
                tag: tag.to_ascii_lowercase(),
                children,
            };
        }
        if self.options.preserve_unknown_tags() {
            return HTMLElement::Unknown {
                tag: tag.to_ascii_lowercase(),
                children,
            };
        }
        // The wrapper means nothing; keep only what it wrapped
        if children.len() == 1
            && let Some(only) = children.pop()
        {
            return only;
        }
        HTMLElement::Body(children)
    }
}

/// `br` and the self-closing spelling `br/` read as a tag name.
fn is_line_break(name: &str) -> bool {
    let name = name.strip_suffix('/').unwrap_or(name);
    name.eq_ignore_ascii_case(Tag::Br.as_str())
}
