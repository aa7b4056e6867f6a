//! Per-tag styles.
//!
//! Lookup for an element goes through three layers:
//! 1. the map's own entry for the element's tag (text nodes use `p`)
//! 2. the built-in default for that tag
//! 3. the built-in `p` style
//!
//! Fields a style leaves unset are inherited from the parent element's
//! style when the element is resolved for rendering.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use wombat_html::HTMLElement;

use crate::color::Color;
use crate::error::StyleError;
use crate::font::{Font, TextStyle};

/// Font and colour for one tag. Either may be left unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HTMLElementStyle {
    /// Font, if this style sets one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    /// Colour, if this style sets one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl HTMLElementStyle {
    /// A style setting both fields.
    #[must_use]
    pub const fn new(font: Font, color: Color) -> Self {
        Self {
            font: Some(font),
            color: Some(color),
        }
    }

    /// Fill unset fields from `parent`.
    #[must_use]
    pub fn inherit_from(self, parent: Self) -> Self {
        Self {
            font: self.font.or(parent.font),
            color: self.color.or(parent.color),
        }
    }
}

/// A fully determined style, ready for a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedStyle {
    /// Font to draw with.
    pub font: Font,
    /// Colour to draw with.
    pub color: Color,
}

impl std::fmt::Display for ResolvedStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}; {}]", self.font, self.color)
    }
}

impl From<ResolvedStyle> for HTMLElementStyle {
    fn from(resolved: ResolvedStyle) -> Self {
        Self::new(resolved.font, resolved.color)
    }
}

const PARAGRAPH_STYLE: HTMLElementStyle =
    HTMLElementStyle::new(Font::new(TextStyle::Body), Color::Primary);

/// Styles keyed by lowercase tag name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleMap(HashMap<String, HTMLElementStyle>);

/// The built-in styles.
///
/// Built once and cached via `OnceLock`.
#[must_use]
pub fn default_styles() -> &'static StyleMap {
    static DEFAULTS: OnceLock<StyleMap> = OnceLock::new();
    DEFAULTS.get_or_init(|| {
        let primary = |style| HTMLElementStyle::new(Font::new(style), Color::Primary);
        let mut map = StyleMap::new();
        map.insert("h1", primary(TextStyle::LargeTitle));
        map.insert("h2", primary(TextStyle::Title));
        map.insert("h3", primary(TextStyle::Title2));
        map.insert("h4", primary(TextStyle::Title3));
        map.insert("h5", primary(TextStyle::Headline));
        map.insert("h6", primary(TextStyle::Subheadline));
        for tag in ["p", "li", "ol", "ul"] {
            map.insert(tag, PARAGRAPH_STYLE);
        }
        map.insert(
            "a",
            HTMLElementStyle::new(Font::new(TextStyle::Body), Color::BLUE),
        );
        map
    })
}

impl StyleMap {
    /// An empty map. Lookups on it fall through to the defaults.
    #[must_use]
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// A copy of the built-in styles.
    #[must_use]
    pub fn defaults() -> Self {
        default_styles().clone()
    }

    /// Load a map from a JSON object of `tag -> { "font", "color" }`.
    ///
    /// ```
    /// use wombat_style::{Color, Rgba, StyleMap};
    ///
    /// let map = StyleMap::from_json(r#"{ "H1": { "color": "red" } }"#).unwrap();
    /// let red = Color::Rgba(Rgba::rgb(255, 0, 0));
    /// assert_eq!(map.get("h1").and_then(|s| s.color), Some(red));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Json`] if the text is not such an object or a
    /// font or colour inside it does not parse.
    pub fn from_json(json: &str) -> Result<Self, StyleError> {
        let raw: HashMap<String, HTMLElementStyle> = serde_json::from_str(json)?;
        Ok(raw.into_iter().collect())
    }

    /// Set the style for `tag`, replacing any previous one.
    pub fn insert(&mut self, tag: impl AsRef<str>, style: HTMLElementStyle) {
        let _ = self.0.insert(tag.as_ref().to_ascii_lowercase(), style);
    }

    /// This map's own entry for `tag`, without fallbacks.
    #[must_use]
    pub fn get(&self, tag: &str) -> Option<&HTMLElementStyle> {
        self.0.get(&tag.to_ascii_lowercase())
    }

    /// Add every entry of `overrides`. Where both maps style a tag the
    /// override's entry replaces this one as a whole.
    pub fn merge(&mut self, overrides: &Self) {
        self.0
            .extend(overrides.0.iter().map(|(tag, style)| (tag.clone(), *style)));
    }

    /// Consuming form of [`merge`](Self::merge).
    #[must_use]
    pub fn merged(mut self, overrides: &Self) -> Self {
        self.merge(overrides);
        self
    }

    /// The style for `element` before inheritance.
    #[must_use]
    pub fn style_for(&self, element: &HTMLElement) -> HTMLElementStyle {
        let tag = element.tag_name().unwrap_or("p");
        self.get(tag)
            .or_else(|| default_styles().get(tag))
            .copied()
            .unwrap_or(PARAGRAPH_STYLE)
    }

    /// The style to draw `element` with, given its parent's style.
    ///
    /// Unset fields come from `parent`, then from body text in the primary
    /// colour. Links fall back to blue instead. `<b>` and `<i>` add their
    /// weight or slant to the inherited font.
    #[must_use]
    pub fn resolve(
        &self,
        element: &HTMLElement,
        parent: Option<HTMLElementStyle>,
    ) -> ResolvedStyle {
        let own = match element {
            HTMLElement::B(_) | HTMLElement::I(_) | HTMLElement::U(_) | HTMLElement::Text(_) => {
                self.get(element.tag_name().unwrap_or_default())
                    .copied()
                    .unwrap_or_default()
            }
            _ => self.style_for(element),
        };
        let style = parent.map_or(own, |parent| own.inherit_from(parent));

        let fallback_color = if matches!(element, HTMLElement::A { .. }) {
            Color::BLUE
        } else {
            Color::Primary
        };
        let mut font = style.font.unwrap_or_default();
        match element {
            HTMLElement::B(_) => font = font.bold(),
            HTMLElement::I(_) => font = font.italic(),
            _ => {}
        }
        ResolvedStyle {
            font,
            color: style.color.unwrap_or(fallback_color),
        }
    }

    /// Tags styled by this map, in no particular order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Number of styled tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no tag is styled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, HTMLElementStyle)> for StyleMap {
    fn from_iter<T: IntoIterator<Item = (String, HTMLElementStyle)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (tag, style) in iter {
            map.insert(tag, style);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_block_tags() {
        let defaults = default_styles();
        for tag in ["h1", "h2", "h3", "h4", "h5", "h6", "p", "li", "ol", "ul", "a"] {
            assert!(defaults.get(tag).is_some(), "missing default for {tag}");
        }
        assert_eq!(defaults.len(), 11);
        assert_eq!(defaults.get("a").and_then(|s| s.color), Some(Color::BLUE));
    }

    #[test]
    fn keys_are_case_insensitive() {
        let mut map = StyleMap::new();
        map.insert("CALLOUT", PARAGRAPH_STYLE);
        assert!(map.get("callout").is_some());
        assert_eq!(map.tags().collect::<Vec<_>>(), ["callout"]);
    }
}
