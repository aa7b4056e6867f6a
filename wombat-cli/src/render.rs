//! Output formats.

use anyhow::Result;
use clap::ValueEnum;
use serde_json::json;
use wombat_html::{HTMLElement, ParseIssue, write_tree};
use wombat_style::{HTMLElementStyle, StyleMap};

/// What the CLI prints for a parsed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Indented element tree annotated with resolved styles.
    Tree,
    /// The tree and diagnostics as JSON.
    Json,
    /// Flattened text content.
    Text,
    /// The input after whitespace minification.
    Minified,
}

pub fn render(
    format: OutputFormat,
    root: &HTMLElement,
    issues: &[ParseIssue],
    minified: &str,
    styles: &StyleMap,
) -> Result<String> {
    match format {
        OutputFormat::Tree => styled_tree(root, styles),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(
            &json!({ "tree": root, "issues": issues }),
        )?),
        OutputFormat::Text => Ok(root.text_content()),
        OutputFormat::Minified => Ok(minified.to_string()),
    }
}

/// The element tree with each element's resolved style after its tag.
fn styled_tree(root: &HTMLElement, styles: &StyleMap) -> Result<String> {
    // Style of the most recent element at each indent level
    let mut ancestors: Vec<HTMLElementStyle> = Vec::new();
    let mut out = String::new();
    write_tree(&mut out, root, 0, &mut |element, depth| {
        ancestors.truncate(depth);
        let resolved = styles.resolve(element, ancestors.last().copied());
        ancestors.push(resolved.into());
        element.tag_name().map(|_| resolved.to_string())
    })?;
    Ok(out.trim_end().to_string())
}
