//! Heading detection: a single forward pass over assembled lines, then a
//! repeated-text filter and the title choice.

use std::collections::BTreeMap;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::classify::sizes::SizeLevels;
use crate::layout::{HeuristicParams, Line};
use crate::outline::{Heading, HeadingLevel, Outline};
use crate::stats::DocumentStats;

/// Classifies lines into the filtered outline and selects the title.
///
/// Pages are visited in ascending order, lines in assembly order. A line
/// becomes a heading when its average size resolves to a level and the
/// (text, page) pair is new. After the pass, any heading whose text
/// occurs on more than `repeat_page_ratio` of the pages is dropped as a
/// running header/footer; occurrence at exactly the ratio is kept.
///
/// Title policy, first match wins: the first H1 line on page 1 that is
/// both top-of-page and centered; else the first heading surviving the
/// repeat filter; else the empty string.
pub fn detect_headings(
    lines_by_page: &BTreeMap<usize, Vec<Line>>,
    levels: &SizeLevels,
    stats: &DocumentStats,
    params: &HeuristicParams,
) -> Outline {
    let mut seen: FxHashSet<(usize, &str)> = FxHashSet::default();
    let mut pages_with_text: FxHashMap<&str, usize> = FxHashMap::default();
    let mut headings: Vec<Heading> = Vec::new();
    let mut title_candidates: Vec<&str> = Vec::new();

    for (&page, lines) in lines_by_page {
        for line in lines {
            let Some(level) = levels.level_for(line.avg_size) else {
                continue;
            };
            if !seen.insert((page, line.text.as_str())) {
                continue;
            }
            *pages_with_text.entry(line.text.as_str()).or_insert(0) += 1;

            headings.push(Heading {
                level,
                text: line.text.clone(),
                page,
            });

            if level == HeadingLevel::H1 && page == 1 && line.is_top && line.is_centered {
                title_candidates.push(line.text.as_str());
            }
        }
    }

    let cutoff = params.repeat_page_ratio * stats.total_pages as f64;
    headings.retain(|h| {
        pages_with_text
            .get(h.text.as_str())
            .is_none_or(|&count| count as f64 <= cutoff)
    });

    let title = title_candidates
        .first()
        .map(|t| t.to_string())
        .or_else(|| headings.first().map(|h| h.text.clone()))
        .unwrap_or_default();

    Outline {
        title,
        outline: headings,
    }
}
