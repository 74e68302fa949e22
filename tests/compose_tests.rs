//! # Label Composition Tests
//!
//! End-to-end checks of rendered labels: QR placement, emphasis colors and
//! the policies that turn bad input into well-formed labels.

use image::RgbImage;
use pretty_assertions::assert_eq;
use siroco::compose::{LabelLayout, Record, compose};
use siroco::config::{FontConfig, LayoutConfig};
use siroco::font::FontSet;
use std::path::PathBuf;

const WHITE: [u8; 3] = [255, 255, 255];
const BLACK: [u8; 3] = [0, 0, 0];
const BLUE: [u8; 3] = [0, 0, 255];

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn record(tag_text: &str, link1: Option<&str>, link2: Option<&str>) -> Record {
    Record {
        display_name: "Colectivo Siroco".to_string(),
        tag_text: tag_text.to_string(),
        link1: link1.map(str::to_string),
        link2: link2.map(str::to_string),
    }
}

fn render(record: &Record) -> RgbImage {
    compose(record, &LayoutConfig::default(), &FontSet::embedded()).unwrap()
}

/// True if any pixel in the rectangle has `color`.
fn any_pixel(img: &RgbImage, xs: std::ops::Range<u32>, ys: std::ops::Range<u32>, color: [u8; 3]) -> bool {
    ys.flat_map(|y| xs.clone().map(move |x| (x, y)))
        .any(|(x, y)| img.get_pixel(x, y).0 == color)
}

/// True if every pixel in the rectangle has `color`.
fn all_pixels(img: &RgbImage, xs: std::ops::Range<u32>, ys: std::ops::Range<u32>, color: [u8; 3]) -> bool {
    ys.flat_map(|y| xs.clone().map(move |x| (x, y)))
        .all(|(x, y)| img.get_pixel(x, y).0 == color)
}

// ============================================================================
// QR PLACEMENT
// ============================================================================

#[test]
fn test_two_links_fill_both_slots() {
    let label = render(&record("#rock", Some("https://a.example"), Some("b.example")));

    assert!(any_pixel(&label, 50..350, 105..400, BLACK));
    assert!(any_pixel(&label, 450..750, 105..400, BLACK));
    // Gap between the two codes.
    assert!(all_pixels(&label, 360..440, 120..400, WHITE));
}

#[test]
fn test_one_link_is_centered() {
    let label = render(&record("#rock", Some("https://a.example"), None));

    assert!(any_pixel(&label, 250..550, 105..400, BLACK));
    assert!(all_pixels(&label, 0..240, 120..400, WHITE));
    assert!(all_pixels(&label, 560..800, 120..400, WHITE));
}

#[test]
fn test_missing_links_still_render_fallback_code() {
    let layout = LabelLayout::plan(&record("#rock", None, None), &LayoutConfig::default());
    assert_eq!(layout.qr.len(), 1);
    assert_eq!(layout.qr[0].payload, "No disponible");

    let label = render(&record("#rock", None, None));
    assert!(any_pixel(&label, 250..550, 105..400, BLACK));
}

#[test]
fn test_at_http_link_is_kept_verbatim() {
    let layout = LabelLayout::plan(
        &record("", Some("@https://insta.example/banda"), None),
        &LayoutConfig::default(),
    );
    assert_eq!(layout.qr[0].payload, "@https://insta.example/banda");
}

// ============================================================================
// TAG TEXT
// ============================================================================

#[test]
fn test_hashtags_are_blue_and_plain_words_black() {
    let label = render(&record("#cumbia", None, None));
    assert!(any_pixel(&label, 20..160, 60..90, BLUE));
    assert!(!any_pixel(&label, 20..160, 60..90, BLACK));

    let label = render(&record("cumbia", None, None));
    assert!(any_pixel(&label, 20..160, 60..90, BLACK));
    assert!(!any_pixel(&label, 20..160, 60..90, BLUE));
}

#[test]
fn test_emoji_do_not_change_the_label() {
    let with_emoji = render(&record("#rock 🎸 #jazz ✨", Some("x"), None));
    let without = render(&record("#rock #jazz", Some("x"), None));
    assert!(with_emoji == without);
}

#[test]
fn test_overflowing_tags_drop_text_and_push_qr_down() {
    let tags = (0..60)
        .map(|i| format!("#t{:02}", i))
        .collect::<Vec<_>>()
        .join(" ");
    let layout = LabelLayout::plan(&record(&tags, Some("x"), None), &LayoutConfig::default());

    assert_eq!(layout.line_count(), 2);
    assert_eq!(layout.qr[0].y, 110);
    let kept: usize = layout.lines.iter().map(Vec::len).sum();
    assert!(kept < 60);
    assert!(layout.lines.iter().flatten().all(|w| w.is_emphasized()));
}

// ============================================================================
// CONFIGURATION
// ============================================================================

#[test]
fn test_unloadable_fonts_match_embedded_rendering() {
    let config = LayoutConfig {
        fonts: FontConfig {
            regular: Some(PathBuf::from("/nonexistent/Arial.ttf")),
            bold: Some(PathBuf::from("/nonexistent/Arial Bold.ttf")),
        },
        ..Default::default()
    };
    let rec = record("#salsa en vivo", Some("https://a.example"), None);

    let fallback = compose(&rec, &config, &FontSet::load(&config.fonts)).unwrap();
    let embedded = compose(&rec, &config, &FontSet::embedded()).unwrap();
    assert!(fallback == embedded);
}

#[test]
fn test_custom_canvas_and_colors() {
    let config = LayoutConfig::from_json(
        r#"{
            "canvas_width": 600,
            "canvas_height": 300,
            "qr_size": 200,
            "qr_top": 90,
            "emphasis_color": [200, 0, 0]
        }"#,
    )
    .unwrap();
    let rec = record("#teatro", Some("https://a.example"), None);

    let layout = LabelLayout::plan(&rec, &config);
    assert_eq!((layout.qr[0].x, layout.qr[0].y), (200, 95));

    let label = compose(&rec, &config, &FontSet::embedded()).unwrap();
    assert_eq!(label.dimensions(), (600, 300));
    assert!(any_pixel(&label, 20..120, 60..90, [200, 0, 0]));
}
