//! Semantic fonts.
//!
//! Fonts are described by role rather than by face and size, so that the
//! renderer can map them onto whatever its platform calls a headline or a
//! caption. The textual form is the role, optionally followed by `bold`
//! and/or `italic`, e.g. `"headline bold"`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::error::StyleError;

/// The role a run of text plays, largest first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum TextStyle {
    /// Page titles.
    LargeTitle,
    /// First-level headings.
    Title,
    /// Second-level headings.
    #[strum(serialize = "title2")]
    Title2,
    /// Third-level headings.
    #[strum(serialize = "title3")]
    Title3,
    /// Emphasised short headings.
    Headline,
    /// Secondary headings.
    Subheadline,
    /// Running text.
    #[default]
    Body,
    /// Call-outs and asides.
    Callout,
    /// Footnotes.
    Footnote,
    /// Captions.
    Caption,
}

/// A text style plus weight and slant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Font {
    /// The semantic role.
    pub style: TextStyle,
    /// Bold weight.
    pub bold: bool,
    /// Italic slant.
    pub italic: bool,
}

impl Font {
    /// A regular, upright font of the given role.
    #[must_use]
    pub const fn new(style: TextStyle) -> Self {
        Self {
            style,
            bold: false,
            italic: false,
        }
    }

    /// The same font in bold.
    #[must_use]
    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    /// The same font in italics.
    #[must_use]
    pub const fn italic(self) -> Self {
        Self {
            italic: true,
            ..self
        }
    }
}

impl From<TextStyle> for Font {
    fn from(style: TextStyle) -> Self {
        Self::new(style)
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.style)?;
        if self.bold {
            f.write_str(" bold")?;
        }
        if self.italic {
            f.write_str(" italic")?;
        }
        Ok(())
    }
}

impl FromStr for Font {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let role = words.next().ok_or(StyleError::EmptyFont)?;
        let style = role
            .parse::<TextStyle>()
            .map_err(|_| StyleError::UnknownTextStyle(role.to_string()))?;

        let mut font = Self::new(style);
        for word in words {
            font = match word.to_ascii_lowercase().as_str() {
                "bold" => font.bold(),
                "italic" => font.italic(),
                _ => return Err(StyleError::UnknownFontModifier(word.to_string())),
            };
        }
        Ok(font)
    }
}

impl TryFrom<String> for Font {
    type Error = StyleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Font> for String {
    fn from(font: Font) -> Self {
        font.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_style_names() {
        assert_eq!(TextStyle::LargeTitle.to_string(), "large-title");
        assert_eq!(TextStyle::Title2.to_string(), "title2");
        assert_eq!("SUBHEADLINE".parse::<TextStyle>(), Ok(TextStyle::Subheadline));
    }

    #[test]
    fn modifiers_round_trip_through_display() {
        let font = Font::new(TextStyle::Headline).bold().italic();
        assert_eq!(font.to_string(), "headline bold italic");
        assert_eq!("headline italic bold".parse::<Font>().ok(), Some(font));
    }

    #[test]
    fn rejects_bad_descriptions() {
        assert!(matches!("".parse::<Font>(), Err(StyleError::EmptyFont)));
        assert!(matches!(
            "huge".parse::<Font>(),
            Err(StyleError::UnknownTextStyle(name)) if name == "huge"
        ));
        assert!(matches!(
            "body wide".parse::<Font>(),
            Err(StyleError::UnknownFontModifier(word)) if word == "wide"
        ));
    }
}
