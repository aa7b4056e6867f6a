//! Integration tests for style values and style lookup.

use strum::IntoEnumIterator;
use wombat_html::{HTMLElement, parse};
use wombat_style::{
    Color, Font, HTMLElementStyle, ResolvedStyle, Rgba, StyleError, StyleMap, TextStyle,
    default_styles,
};

/// Helper to load a style map, failing the test on bad JSON
fn styles(json: &str) -> StyleMap {
    StyleMap::from_json(json).unwrap_or_else(|err| panic!("bad style JSON {json}: {err}"))
}

fn font(style: TextStyle) -> Font {
    Font::new(style)
}

fn body() -> HTMLElementStyle {
    HTMLElementStyle::new(font(TextStyle::Body), Color::Primary)
}

fn text(s: &str) -> HTMLElement {
    HTMLElement::Text(s.to_string())
}

// =============================================================================
// Values
// =============================================================================

#[test]
fn test_every_text_style_parses_from_its_name() {
    for style in TextStyle::iter() {
        let name = style.to_string();
        assert_eq!(name.parse::<TextStyle>(), Ok(style), "{name}");
        assert_eq!(name.parse::<Font>().ok(), Some(Font::new(style)), "{name}");
    }
}

#[test]
fn test_color_forms() {
    assert_eq!("primary".parse::<Color>().ok(), Some(Color::Primary));
    assert_eq!("Secondary".parse::<Color>().ok(), Some(Color::Secondary));
    assert_eq!("blue".parse::<Color>().ok(), Some(Color::BLUE));
    assert_eq!("GREY".parse::<Color>().ok(), "gray".parse::<Color>().ok());
    assert_eq!(
        "#0000FF".parse::<Color>().ok(),
        Some(Color::Rgba(Rgba::rgb(0, 0, 255)))
    );
    assert_eq!(Color::BLUE.to_string(), "#0000ff");
}

#[test]
fn test_color_errors() {
    assert!(matches!(
        "#12".parse::<Color>(),
        Err(StyleError::InvalidHexColor(hex)) if hex == "#12"
    ));
    assert!(matches!(
        "chartreuse-ish".parse::<Color>(),
        Err(StyleError::UnknownColor(name)) if name == "chartreuse-ish"
    ));
}

// =============================================================================
// Defaults and lookup
// =============================================================================

#[test]
fn test_default_heading_styles() {
    let defaults = default_styles();
    let expected = [
        ("h1", TextStyle::LargeTitle),
        ("h2", TextStyle::Title),
        ("h3", TextStyle::Title2),
        ("h4", TextStyle::Title3),
        ("h5", TextStyle::Headline),
        ("h6", TextStyle::Subheadline),
    ];
    for (tag, style) in expected {
        assert_eq!(
            defaults.get(tag).copied(),
            Some(HTMLElementStyle::new(font(style), Color::Primary)),
            "{tag}"
        );
    }
    assert_eq!(defaults.get("ul").copied(), Some(body()));
}

#[test]
fn test_style_for_prefers_own_entry_then_default_then_paragraph() {
    let map = styles(r#"{ "p": { "color": "secondary" } }"#);

    let heading = HTMLElement::H2(vec![text("x")]);
    assert_eq!(map.style_for(&heading).font, Some(font(TextStyle::Title)));

    let paragraph = HTMLElement::P(vec![text("x")]);
    assert_eq!(map.style_for(&paragraph).color, Some(Color::Secondary));

    // Text is looked up as `p`
    assert_eq!(map.style_for(&text("x")).color, Some(Color::Secondary));

    // Unstyled tags get the built-in paragraph style, not the map's
    let custom = HTMLElement::CustomInline {
        tag: "callout".to_string(),
        children: vec![text("x")],
    };
    assert_eq!(map.style_for(&custom), body());
}

#[test]
fn test_custom_tag_style_applies() {
    let root = parse("<p>See <callout>this</callout></p>", &["callout"]);
    let map = styles(r#"{ "callout": { "font": "callout italic", "color": "red" } }"#);

    let HTMLElement::Body(blocks) = &root else {
        panic!("Expected body root, got {root:?}");
    };
    let custom = &blocks[0].children()[1];
    assert_eq!(custom.tag_name(), Some("callout"));
    assert_eq!(
        map.resolve(custom, Some(body())),
        ResolvedStyle {
            font: font(TextStyle::Callout).italic(),
            color: Color::Rgba(Rgba::rgb(255, 0, 0)),
        }
    );
}

// =============================================================================
// Merging
// =============================================================================

#[test]
fn test_merge_replaces_whole_entries() {
    let overrides = styles(r#"{ "h1": { "color": "red" }, "note": { "font": "footnote" } }"#);
    let merged = StyleMap::defaults().merged(&overrides);

    assert_eq!(merged.len(), default_styles().len() + 1);
    let h1 = merged.get("h1").copied().unwrap_or_default();
    assert_eq!(h1.font, None);
    assert_eq!(h1.color, "red".parse::<Color>().ok());
    assert_eq!(merged.get("h2"), default_styles().get("h2"));
    assert_eq!(merged.get("note").and_then(|s| s.font), Some(font(TextStyle::Footnote)));
}

#[test]
fn test_later_merge_wins() {
    let mut map = StyleMap::new();
    map.merge(&styles(r#"{ "p": { "color": "red" } }"#));
    map.merge(&styles(r#"{ "P": { "color": "navy" } }"#));
    assert_eq!(map.get("p").and_then(|s| s.color), "navy".parse::<Color>().ok());
    assert_eq!(map.tags().count(), 1);
}

#[test]
fn test_from_json_errors() {
    assert!(matches!(StyleMap::from_json("[1, 2]"), Err(StyleError::Json(_))));
    assert!(matches!(
        StyleMap::from_json(r##"{ "p": { "color": "#zzz" } }"##),
        Err(StyleError::Json(_))
    ));
    assert!(matches!(
        StyleMap::from_json(r#"{ "p": { "font": "enormous" } }"#),
        Err(StyleError::Json(_))
    ));
}

#[test]
fn test_style_map_serializes_as_strings() {
    let mut map = StyleMap::new();
    map.insert("h5", HTMLElementStyle::new(font(TextStyle::Headline).bold(), Color::BLUE));
    let json = serde_json::to_value(&map).unwrap_or_default();
    assert_eq!(
        json,
        serde_json::json!({ "h5": { "font": "headline bold", "color": "#0000ff" } })
    );
    assert_eq!(styles(&json.to_string()), map);
}

// =============================================================================
// Resolution
// =============================================================================

#[test]
fn test_unset_fields_inherit_from_parent() {
    let child = HTMLElementStyle {
        font: None,
        color: Some(Color::Secondary),
    };
    let parent = HTMLElementStyle::new(font(TextStyle::Caption), Color::Primary);
    assert_eq!(
        child.inherit_from(parent),
        HTMLElementStyle::new(font(TextStyle::Caption), Color::Secondary)
    );
}

#[test]
fn test_resolve_inline_formatting() {
    let map = StyleMap::defaults();
    let heading = HTMLElementStyle::new(font(TextStyle::Title), Color::Secondary);

    let bold = HTMLElement::B(vec![text("x")]);
    assert_eq!(
        map.resolve(&bold, Some(heading)),
        ResolvedStyle {
            font: font(TextStyle::Title).bold(),
            color: Color::Secondary,
        }
    );

    let italic = HTMLElement::I(vec![text("x")]);
    assert_eq!(map.resolve(&italic, None).font, font(TextStyle::Body).italic());

    assert_eq!(map.resolve(&text("x"), Some(heading)).font, font(TextStyle::Title));
}

#[test]
fn test_links_fall_back_to_blue() {
    let map = styles(r#"{ "a": { "font": "headline" } }"#);
    let link = HTMLElement::A {
        href: Some("/".to_string()),
        text: "home".to_string(),
    };
    assert_eq!(
        map.resolve(&link, None),
        ResolvedStyle {
            font: font(TextStyle::Headline),
            color: Color::BLUE,
        }
    );
    assert_eq!(map.resolve(&link, Some(body())).color, Color::Primary);
    assert_eq!(StyleMap::new().resolve(&link, None).color, Color::BLUE);
}
