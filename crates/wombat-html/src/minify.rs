//! Whitespace normalisation applied before tree construction.

/// Minify HTML by removing insignificant whitespace.
///
/// - Every run of whitespace (newlines included) becomes a single space.
/// - A space sitting directly between `>` and `<` is removed.
/// - Leading and trailing whitespace is trimmed.
///
/// Whitespace between a tag and adjoining text is kept, so
/// `"word <b>bold</b>"` keeps its space while `"<ul> <li>"` loses it.
/// The result is a fixed point: minifying it again changes nothing.
///
/// # Example
/// ```
/// use wombat_html::minify_html;
///
/// assert_eq!(minify_html("<ul>\n  <li>x</li>\n</ul>"), "<ul><li>x</li></ul>");
/// assert_eq!(minify_html("a  <b>x</b>"), "a <b>x</b>");
/// ```
#[must_use]
pub fn minify_html(html: &str) -> String {
    let mut collapsed = String::with_capacity(html.len());
    let mut in_whitespace = false;
    for c in html.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                collapsed.push(' ');
            }
            in_whitespace = true;
        } else {
            collapsed.push(c);
            in_whitespace = false;
        }
    }

    let mut minified = String::with_capacity(collapsed.len());
    let mut previous = None;
    let mut chars = collapsed.chars().peekable();
    while let Some(c) = chars.next() {
        if c == ' ' && previous == Some('>') && chars.peek() == Some(&'<') {
            continue;
        }
        minified.push(c);
        previous = Some(c);
    }

    minified.trim().to_string()
}
