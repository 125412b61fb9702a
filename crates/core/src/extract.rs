//! High-level extraction API.
//!
//! Provides the main public entry points for outline inference:
//! - `extract()` - infer an Outline from extracted pages
//! - `extract_with_params()` - same, with tuned heuristics
//! - `extract_from_json()` - read a collaborator's page dump, then infer

use crate::classify::{classify_sizes, detect_headings};
use crate::error::{OutlineError, Result};
use crate::layout::{HeuristicParams, Page, assemble_lines};
use crate::outline::Outline;
use crate::stats::collect_statistics;

/// Infers the title and heading outline of one document.
///
/// Deterministic and pure with respect to its input. A document that
/// yielded no characters (empty, or wholly image-based pages) produces an
/// empty outline, not an error.
pub fn extract(pages: &[Page]) -> Outline {
    extract_with_params(pages, &HeuristicParams::default())
}

/// [`extract`] with explicit heuristic parameters.
pub fn extract_with_params(pages: &[Page], params: &HeuristicParams) -> Outline {
    let stats = collect_statistics(pages);
    if stats.is_empty() {
        return Outline::default();
    }

    let lines_by_page = assemble_lines(pages, params);
    let levels = classify_sizes(&stats, params);
    detect_headings(&lines_by_page, &levels, &stats, params)
}

/// Reads an extraction collaborator's page dump and infers its outline.
///
/// The dump is a JSON array of pages, each carrying its dimensions and
/// character records. Page numbers must be 1-based; the title heuristics
/// key off page 1.
pub fn extract_from_json(data: &[u8]) -> Result<Outline> {
    let pages: Vec<Page> = serde_json::from_slice(data)?;
    if pages.iter().any(|p| p.number == 0) {
        return Err(OutlineError::PageNumberZero);
    }
    Ok(extract(&pages))
}
