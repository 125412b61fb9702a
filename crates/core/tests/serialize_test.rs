//! Wire-format tests: the outline must serialize to exactly the exchange
//! shape downstream consumers read, preserving Unicode verbatim.

use serde_json::{Value, json};
use strata_core::{Heading, HeadingLevel, Outline, Page, PageChar, extract, extract_from_json};

fn run(text: &str, x0: f64, top: f64, size: f64) -> Vec<PageChar> {
    text.chars()
        .enumerate()
        .map(|(i, g)| PageChar {
            text: g.to_string(),
            x0: x0 + 10.0 * i as f64,
            x1: x0 + 10.0 * i as f64 + 10.0,
            top,
            size,
            fontname: "NotoSans-Regular".to_string(),
        })
        .collect()
}

fn page(number: usize, chars: Vec<PageChar>) -> Page {
    Page {
        number,
        width: 612.0,
        height: 792.0,
        chars,
    }
}

#[test]
fn outline_serializes_with_the_exchange_keys() {
    let outline = Outline {
        title: "Strategic Plan 2024".to_string(),
        outline: vec![Heading {
            level: HeadingLevel::H2,
            text: "Introduction".to_string(),
            page: 2,
        }],
    };

    let value = serde_json::to_value(&outline).unwrap();
    assert_eq!(
        value,
        json!({
            "title": "Strategic Plan 2024",
            "outline": [
                {"level": "H2", "text": "Introduction", "page": 2}
            ]
        })
    );
}

#[test]
fn page_numbers_render_as_plain_integers() {
    let heading = Heading {
        level: HeadingLevel::H4,
        text: "Notes".to_string(),
        page: 17,
    };
    let value = serde_json::to_value(&heading).unwrap();
    assert_eq!(value["page"], Value::from(17));
    assert_eq!(value["level"], Value::from("H4"));
}

#[test]
fn unicode_text_survives_the_round_trip() {
    let pages = [
        page(1, run("概要と方針について", 200.0, 90.0, 24.0)),
        page(2, run("背景の説明", 72.0, 90.0, 16.0)),
        page(3, run("結論と展望", 72.0, 90.0, 16.0)),
    ];
    let outline = extract(&pages);
    assert_eq!(outline.title, "概要と方針について");

    let serialized = serde_json::to_string_pretty(&outline).unwrap();
    // serde_json writes non-ASCII text verbatim, no \u escapes.
    assert!(serialized.contains("概要と方針について"));
    assert!(serialized.contains("背景の説明"));

    let back: Outline = serde_json::from_str(&serialized).unwrap();
    assert_eq!(back, outline);
}

#[test]
fn extraction_dump_round_trips_through_the_json_boundary() {
    let dump = json!([
        {
            "number": 1,
            "width": 612.0,
            "height": 792.0,
            "chars": [
                {"text": "C", "x0": 266.0, "x1": 276.0, "top": 80.0, "size": 24.0,
                 "fontname": "Times-Bold"},
                {"text": "h", "x0": 276.0, "x1": 286.0, "top": 80.0, "size": 24.0,
                 "fontname": "Times-Bold"},
                {"text": "a", "x0": 286.0, "x1": 296.0, "top": 80.0, "size": 24.0,
                 "fontname": "Times-Bold"},
                {"text": "p", "x0": 296.0, "x1": 306.0, "top": 80.0, "size": 24.0,
                 "fontname": "Times-Bold"},
                {"text": "t", "x0": 306.0, "x1": 316.0, "top": 80.0, "size": 24.0,
                 "fontname": "Times-Bold"},
                {"text": "e", "x0": 316.0, "x1": 326.0, "top": 80.0, "size": 24.0,
                 "fontname": "Times-Bold"},
                {"text": "r", "x0": 326.0, "x1": 336.0, "top": 80.0, "size": 24.0,
                 "fontname": "Times-Bold"}
            ]
        },
        {"number": 2, "width": 612.0, "height": 792.0, "chars": []},
        {"number": 3, "width": 612.0, "height": 792.0, "chars": []}
    ]);
    let data = serde_json::to_vec(&dump).unwrap();

    let outline = extract_from_json(&data).unwrap();
    assert_eq!(outline.title, "Chapter");
    assert_eq!(outline.outline.len(), 1);
    assert_eq!(outline.outline[0].level, HeadingLevel::H1);
    assert_eq!(outline.outline[0].page, 1);
}

#[test]
fn dumps_may_omit_the_chars_field() {
    let data = br#"[{"number": 1, "width": 612.0, "height": 792.0}]"#;
    let outline = extract_from_json(data).unwrap();
    assert_eq!(outline, Outline::default());
}
