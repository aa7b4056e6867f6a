use std::fmt;

use serde::Serialize;
use strum_macros::{Display, IntoStaticStr};

/// The kind of recoverable problem the parser ran into.
///
/// None of these stop the parse; each is recorded and the parser carries on
/// with a best-effort tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr, Serialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum IssueKind {
    /// A closing tag that does not close the innermost open tag.
    MismatchedClosingTag,
    /// A closing tag with no open tag at all.
    UnexpectedClosingTag,
    /// An open tag still pending at end of input, auto-closed.
    MissingClosingTag,
    /// Input ended inside `<...>`; the tag was dropped.
    UnterminatedTag,
    /// An opening tag past the nesting limit; the tag was ignored.
    NestingTooDeep,
}

/// A single diagnostic produced while parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseIssue {
    /// What went wrong.
    pub kind: IssueKind,
    /// Human-readable description, also echoed to the warning channel.
    pub message: String,
    /// Byte offset into the minified input where the problem was detected.
    pub offset: usize,
}

impl fmt::Display for ParseIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at byte {}", self.message, self.offset)
    }
}
