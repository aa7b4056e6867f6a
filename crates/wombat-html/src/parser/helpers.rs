//! Scanner helpers for the tree builder.
//!
//! This module contains the low-level character handling used by
//! [`HTMLParser`]:
//! - Cursor movement (peek, advance, skip)
//! - Character runs and tag names
//! - Attribute scanning, of which only `href` is retained

use super::tree_builder::HTMLParser;

// =============================================================================
// Cursor Helpers
// =============================================================================

impl HTMLParser {
    pub(super) fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// The character under the cursor.
    pub(super) fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// The character `offset` characters past the cursor.
    pub(super) fn peek_at(&self, offset: usize) -> Option<char> {
        self.input[self.pos..].chars().nth(offset)
    }

    /// Consume and return the character under the cursor.
    pub(super) fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consume `expected` if it is under the cursor.
    pub(super) fn consume_if(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    /// Move the cursor onto the next `target`, or to end of input.
    pub(super) fn skip_until(&mut self, target: char) {
        self.pos = self.input[self.pos..]
            .find(target)
            .map_or(self.input.len(), |offset| self.pos + offset);
    }

    pub(super) fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            let _ = self.advance();
        }
    }

    /// Consume characters while `keep` holds and return them.
    fn consume_while(&mut self, keep: impl Fn(char) -> bool) -> String {
        let rest = &self.input[self.pos..];
        let len = rest.find(|c: char| !keep(c)).unwrap_or(rest.len());
        let taken = rest[..len].to_string();
        self.pos += len;
        taken
    }
}

// =============================================================================
// Token Helpers
// =============================================================================

impl HTMLParser {
    /// Character data up to the next `<` or end of input.
    pub(super) fn consume_text(&mut self) -> String {
        self.consume_while(|c| c != '<')
    }

    /// A tag name ends at whitespace or `>`. `br/` is read as one name.
    pub(super) fn consume_tag_name(&mut self) -> String {
        self.consume_while(|c| !c.is_whitespace() && c != '>')
    }

    /// Scan every attribute up to the closing `>` (or end of input) and
    /// return the value of a quoted `href`, if one was present.
    ///
    /// The cursor is left on `>` when the tag is well formed. Every
    /// iteration consumes at least one character, so no input can stall it.
    pub(super) fn consume_attributes(&mut self) -> Option<String> {
        let mut href = None;
        loop {
            self.skip_whitespace();
            match self.peek() {
                None | Some('>') => break,
                Some(_) => {}
            }

            let before = self.pos;
            let name = self.consume_attribute_name();
            self.skip_whitespace();
            let value = if self.consume_if('=') {
                self.skip_whitespace();
                self.consume_attribute_value()
            } else {
                None
            };

            if name.eq_ignore_ascii_case("href") && value.is_some() {
                href = value;
            }
            if self.pos == before {
                let _ = self.advance();
            }
        }
        href
    }

    fn consume_attribute_name(&mut self) -> String {
        self.consume_while(|c| !c.is_whitespace() && c != '=' && c != '>')
    }

    /// A value quoted with `"` or `'` is returned without its quotes. An
    /// unterminated quote runs to end of input.
    ///
    /// Unquoted values are consumed but not returned.
    fn consume_attribute_value(&mut self) -> Option<String> {
        match self.peek() {
            Some(quote @ ('"' | '\'')) => {
                let _ = self.advance();
                let value = self.consume_while(|c| c != quote);
                let _ = self.consume_if(quote);
                Some(value)
            }
            _ => {
                let _ = self.consume_while(|c| !c.is_whitespace() && c != '>');
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{HTMLParser, ParserOptions};

    fn scanner(input: &str) -> HTMLParser {
        HTMLParser::new(input, ParserOptions::new())
    }

    #[test]
    fn attributes_yield_quoted_href_only() {
        let mut parser = scanner(r#" class="x" href='/one' id=y>"#);
        assert_eq!(parser.consume_attributes().as_deref(), Some("/one"));
        assert_eq!(parser.peek(), Some('>'));

        let mut parser = scanner("href=/bare>");
        assert_eq!(parser.consume_attributes(), None);
        assert_eq!(parser.peek(), Some('>'));
    }

    #[test]
    fn attributes_make_progress_on_garbage() {
        let mut parser = scanner("= = ==>");
        assert_eq!(parser.consume_attributes(), None);
        assert_eq!(parser.peek(), Some('>'));

        let mut parser = scanner(r#"href="never closed"#);
        assert_eq!(parser.consume_attributes().as_deref(), Some("never closed"));
        assert!(parser.is_at_end());
    }

    #[test]
    fn cursor_handles_multibyte_text() {
        let mut parser = scanner("héllo<b>");
        assert_eq!(parser.consume_text(), "héllo");
        assert_eq!(parser.peek(), Some('<'));
        assert_eq!(parser.peek_at(1), Some('b'));
        parser.skip_until('>');
        assert!(parser.consume_if('>'));
        assert!(parser.is_at_end());
    }
}
