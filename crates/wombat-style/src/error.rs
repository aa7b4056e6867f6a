use thiserror::Error;

/// Errors raised while parsing style values or loading a style map.
#[derive(Debug, Error)]
pub enum StyleError {
    /// A font description was empty.
    #[error("empty font description")]
    EmptyFont,

    /// The first word of a font description is not a known text style.
    #[error("unknown text style `{0}`")]
    UnknownTextStyle(String),

    /// A font modifier other than `bold` or `italic`.
    #[error("unknown font modifier `{0}`")]
    UnknownFontModifier(String),

    /// A `#` colour with the wrong length or non-hex digits.
    #[error("invalid hex color `{0}`")]
    InvalidHexColor(String),

    /// A colour name that is neither semantic nor in the named colour table.
    #[error("unknown color `{0}`")]
    UnknownColor(String),

    /// The style map source is not valid JSON of the expected shape.
    #[error("invalid style map: {0}")]
    Json(#[from] serde_json::Error),
}
