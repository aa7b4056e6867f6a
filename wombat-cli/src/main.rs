//! Wombat CLI
//!
//! Parses a restricted HTML fragment and prints the resulting element tree.
//!
//! Usage:
//!   wombat <file>                     Print the tree with resolved styles
//!   wombat <file> --format json       Print the tree and diagnostics as JSON
//!   wombat --html '<p>Hi</p>'         Parse inline HTML

mod render;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use owo_colors::OwoColorize;
use wombat_common::warning::set_warnings_enabled;
use wombat_html::{DEFAULT_MAX_DEPTH, HTMLParser, ParseIssue, ParserOptions};
use wombat_style::StyleMap;

use render::{OutputFormat, render};

/// Wombat: parse restricted HTML into a typed element tree
#[derive(Parser, Debug)]
#[command(name = "wombat")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Print the element tree with resolved styles
    wombat ./page.html

    # Parse inline HTML and treat <callout> as inline content
    wombat --html '<p>See <callout>this</callout></p>' --custom-tag callout

    # Dump JSON, overriding some styles
    wombat ./page.html --format json --styles styles.json
"#)]
struct Cli {
    /// Path to an HTML file
    #[arg(value_name = "FILE", conflicts_with = "html")]
    path: Option<PathBuf>,

    /// Parse this HTML string instead of a file
    #[arg(long, value_name = "HTML")]
    html: Option<String>,

    /// Treat TAG as inline custom content (repeatable)
    #[arg(short = 't', long = "custom-tag", value_name = "TAG")]
    custom_tags: Vec<String>,

    /// JSON file of per-tag style overrides
    #[arg(short, long, value_name = "FILE")]
    styles: Option<PathBuf>,

    /// What to print
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Tree)]
    format: OutputFormat,

    /// Maximum number of simultaneously open elements
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Keep unrecognised tags as `unknown` nodes instead of unwrapping them
    #[arg(long)]
    preserve_unknown: bool,

    /// Do not print parse diagnostics
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics are printed once, after the output
    set_warnings_enabled(false);

    let html = read_input(&cli)?;
    let styles = load_styles(cli.styles.as_deref())?;
    let options = ParserOptions::new()
        .with_custom_tags(&cli.custom_tags)
        .with_max_depth(cli.max_depth)
        .with_preserve_unknown_tags(cli.preserve_unknown);

    let parser = HTMLParser::new(&html, options);
    let minified = parser.input().to_string();
    let (root, issues) = parser.run_with_issues();

    let output = render(cli.format, &root, &issues, &minified, &styles)?;
    println!("{output}");

    if !cli.quiet {
        report_issues(&issues);
    }
    Ok(())
}

/// The HTML named on the command line.
fn read_input(cli: &Cli) -> Result<String> {
    if let Some(ref html) = cli.html {
        Ok(html.clone())
    } else if let Some(ref path) = cli.path {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
    } else {
        bail!("No input: pass a file path or --html")
    }
}

/// The built-in styles, with overrides from `path` if given.
fn load_styles(path: Option<&Path>) -> Result<StyleMap> {
    let defaults = StyleMap::defaults();
    let Some(path) = path else {
        return Ok(defaults);
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read style file {}", path.display()))?;
    let overrides = StyleMap::from_json(&json)
        .with_context(|| format!("Failed to load styles from {}", path.display()))?;
    Ok(defaults.merged(&overrides))
}

fn report_issues(issues: &[ParseIssue]) {
    if issues.is_empty() {
        return;
    }
    eprintln!("\n{}", "=== Parse Issues ===".bold());
    for issue in issues {
        eprintln!(
            "  {} {} {}",
            format!("[{}]", issue.kind).yellow(),
            issue.message,
            format!("(byte {})", issue.offset).dimmed()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn file_and_inline_html_conflict() {
        assert!(Cli::try_parse_from(["wombat", "page.html", "--html", "<p>x</p>"]).is_err());
    }

    #[test]
    fn flags_parse() {
        let cli = Cli::try_parse_from([
            "wombat",
            "--html",
            "<p>x</p>",
            "-t",
            "callout",
            "--custom-tag",
            "note",
            "--format",
            "json",
            "--max-depth",
            "8",
        ])
        .unwrap_or_else(|err| panic!("{err}"));
        assert_eq!(cli.custom_tags, ["callout", "note"]);
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.max_depth, 8);
        assert!(!cli.preserve_unknown);
        assert_eq!(read_input(&cli).ok().as_deref(), Some("<p>x</p>"));
    }

    #[test]
    fn missing_input_is_an_error() {
        let cli = Cli::try_parse_from(["wombat"]).unwrap_or_else(|err| panic!("{err}"));
        assert!(read_input(&cli).is_err());
    }

    #[test]
    fn missing_style_file_is_an_error() {
        assert!(load_styles(Some(Path::new("/nonexistent/styles.json"))).is_err());
        assert_eq!(load_styles(None).ok(), Some(StyleMap::defaults()));
    }
}
