//! Line assembly: buckets characters into visual lines and derives the
//! layout features the heading heuristics read.

use std::collections::BTreeMap;

use crate::layout::line::{Line, is_bold_fontname};
use crate::layout::page::{Page, PageChar};
use crate::layout::params::HeuristicParams;
use crate::normalize::normalize;
use crate::utils::tenth_key;

/// Groups each page's characters into lines.
///
/// Characters land in the same line when they share a page and a vertical
/// offset rounded to 0.1 units; the rounding absorbs sub-pixel jitter
/// between glyphs of one visual row. The returned map iterates pages in
/// ascending order and each page's lines top-to-bottom; ordering comes
/// from the map keys, not from insertion order.
pub fn assemble_lines(
    pages: &[Page],
    params: &HeuristicParams,
) -> BTreeMap<usize, Vec<Line>> {
    let mut lines_by_page: BTreeMap<usize, Vec<Line>> = BTreeMap::new();

    for page in pages {
        let mut rows: BTreeMap<i64, Vec<&PageChar>> = BTreeMap::new();
        for ch in &page.chars {
            rows.entry(tenth_key(ch.top)).or_default().push(ch);
        }

        let lines = lines_by_page.entry(page.number).or_default();
        for (row_key, mut chars) in rows {
            chars.sort_by(|a, b| a.x0.total_cmp(&b.x0));
            if let Some(line) = build_line(page, row_key, &chars, params) {
                lines.push(line);
            }
        }
    }

    lines_by_page
}

/// Builds one line from an x0-sorted row of characters, or discards it
/// when the normalized text is too short to be meaningful structure.
fn build_line(
    page: &Page,
    row_key: i64,
    chars: &[&PageChar],
    params: &HeuristicParams,
) -> Option<Line> {
    let raw: String = chars.iter().map(|c| c.text.as_str()).collect();
    let text = normalize(&raw);
    if text.chars().count() < params.min_line_chars {
        return None;
    }

    let avg_size = chars.iter().map(|c| c.size).sum::<f64>() / chars.len() as f64;
    let is_bold = chars.iter().any(|c| is_bold_fontname(&c.fontname));

    let first = chars.first()?;
    let last = chars.last()?;
    let line_mid = (first.x0 + last.x1) / 2.0;
    let is_centered = (line_mid - page.width / 2.0).abs() < params.center_tolerance;

    // The bucketed (rounded) offset is the line's vertical position.
    let top = row_key as f64 / 10.0;
    let is_top = top < page.height * params.top_zone_ratio;

    Some(Line {
        text,
        avg_size,
        page: page.number,
        is_bold,
        is_centered,
        is_top,
    })
}
