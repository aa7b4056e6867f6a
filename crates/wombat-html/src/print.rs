use std::fmt::{self, Write};

use crate::element::HTMLElement;

/// Write an indented dump of `element` into `out`.
///
/// Elements print as `<tag>` lines, text as quoted lines with spaces shown
/// as `·` and line breaks as `\n`. `annotate` is called for every node in
/// document order with the node and its indent level, and may return extra
/// information (for example a resolved style) to print after the tag.
///
/// # Errors
///
/// Propagates any error from the underlying writer.
pub fn write_tree<W: Write>(
    out: &mut W,
    element: &HTMLElement,
    indent: usize,
    annotate: &mut dyn FnMut(&HTMLElement, usize) -> Option<String>,
) -> fmt::Result {
    let prefix = "  ".repeat(indent);
    let note = annotate(element, indent)
        .map(|note| format!(" {note}"))
        .unwrap_or_default();
    match element {
        HTMLElement::Text(text) => writeln!(out, "{prefix}\"{}\"", display_text(text)),
        HTMLElement::A { href, text } => {
            match href {
                Some(href) => writeln!(out, "{prefix}<a href=\"{href}\">{note}")?,
                None => writeln!(out, "{prefix}<a>{note}")?,
            }
            writeln!(out, "{prefix}  \"{}\"", display_text(text))
        }
        HTMLElement::Title(text) => {
            writeln!(out, "{prefix}<title>{note}")?;
            writeln!(out, "{prefix}  \"{}\"", display_text(text))
        }
        _ => {
            let tag = element.tag_name().unwrap_or_default();
            writeln!(out, "{prefix}<{tag}>{note}")?;
            for child in element.children() {
                write_tree(out, child, indent + 1, annotate)?;
            }
            Ok(())
        }
    }
}

/// Dump `element` to a string with no annotations.
#[must_use]
pub fn format_tree(element: &HTMLElement) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_tree(&mut out, element, 0, &mut |_, _| None);
    out
}

/// Print an element tree for debugging.
pub fn print_tree(element: &HTMLElement, indent: usize) {
    let mut out = String::new();
    let _ = write_tree(&mut out, element, indent, &mut |_, _| None);
    print!("{out}");
}

fn display_text(text: &str) -> String {
    text.replace('\n', "\\n").replace(' ', "\u{00B7}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn dump_shows_structure_and_visible_whitespace() {
        let root = parse(r#"<p>Hi there<br><a href="/x">go</a></p>"#, &[]);
        assert_eq!(
            format_tree(&root),
            "<body>\n  <p>\n    \"Hi·there\"\n    \"\\n\"\n    <a href=\"/x\">\n      \"go\"\n"
        );
    }

    #[test]
    fn annotations_follow_document_order() {
        let root = parse("<ul><li>a</li></ul>", &[]);
        let mut seen = Vec::new();
        let mut out = String::new();
        let result = write_tree(&mut out, &root, 0, &mut |element, indent| {
            seen.push((element.tag_name().unwrap_or("#text").to_string(), indent));
            (indent == 1).then(|| "*".to_string())
        });
        assert!(result.is_ok());
        assert_eq!(
            seen,
            [
                ("body".to_string(), 0),
                ("ul".to_string(), 1),
                ("li".to_string(), 2),
                ("#text".to_string(), 3),
            ]
        );
        assert!(out.contains("<ul> *\n"));
    }
}
