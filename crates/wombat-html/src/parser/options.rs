use std::collections::HashSet;

/// Default cap on the number of simultaneously open tags.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Construction-time configuration for [`HTMLParser`](super::HTMLParser).
///
/// # Example
/// ```
/// use wombat_html::ParserOptions;
///
/// let options = ParserOptions::new()
///     .with_custom_tag("Highlight")
///     .with_max_depth(64);
/// assert!(options.is_custom_tag("highlight"));
/// assert_eq!(options.max_depth(), 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserOptions {
    /// Lower-cased tag names classified as custom inline content.
    custom_tags: HashSet<String>,
    /// Opening tags beyond this many open frames are ignored.
    max_depth: usize,
    /// Keep unrecognised wrappers as `Unknown` instead of collapsing them.
    preserve_unknown_tags: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            custom_tags: HashSet::new(),
            max_depth: DEFAULT_MAX_DEPTH,
            preserve_unknown_tags: false,
        }
    }
}

impl ParserOptions {
    /// Options with no custom tags, the default depth cap, and unknown
    /// wrappers collapsed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allow-list one tag name as custom inline content.
    #[must_use]
    pub fn with_custom_tag(mut self, tag: impl AsRef<str>) -> Self {
        let _ = self.custom_tags.insert(tag.as_ref().to_ascii_lowercase());
        self
    }

    /// Allow-list several tag names as custom inline content.
    #[must_use]
    pub fn with_custom_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.custom_tags
            .extend(tags.into_iter().map(|tag| tag.as_ref().to_ascii_lowercase()));
        self
    }

    /// Limit how many tags may be open at once. A limit of zero means no tag
    /// ever opens a frame, so the tree is flat text.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Keep unrecognised, non-allow-listed tags as `Unknown` nodes.
    #[must_use]
    pub const fn with_preserve_unknown_tags(mut self, preserve: bool) -> Self {
        self.preserve_unknown_tags = preserve;
        self
    }

    /// Whether `tag` (any case) is on the custom inline allow-list.
    #[must_use]
    pub fn is_custom_tag(&self, tag: &str) -> bool {
        self.custom_tags.contains(&tag.to_ascii_lowercase())
    }

    /// The allow-listed custom tags, lower-cased.
    #[must_use]
    pub const fn custom_tags(&self) -> &HashSet<String> {
        &self.custom_tags
    }

    /// The nesting cap.
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Whether unknown wrappers are preserved.
    #[must_use]
    pub const fn preserve_unknown_tags(&self) -> bool {
        self.preserve_unknown_tags
    }
}
