//! Style mapping for parsed HTML trees.
//!
//! A renderer looks styles up by the tag name the parser assigns to each
//! [`HTMLElement`](wombat_html::HTMLElement). This crate provides:
//! - **Values**: semantic [`Font`]s and [`Color`]s, parsed from strings
//! - **[`HTMLElementStyle`]**: an optional font and colour for one tag
//! - **[`StyleMap`]**: built-in defaults, key-wise override merging, lookup
//!   and parent inheritance

/// Colour values.
pub mod color;
/// Style parsing and loading errors.
pub mod error;
/// Font values.
pub mod font;
/// Per-tag styles and the style map.
pub mod style;

pub use color::{Color, Rgba};
pub use error::StyleError;
pub use font::{Font, TextStyle};
pub use style::{HTMLElementStyle, ResolvedStyle, StyleMap, default_styles};
