//! Input model: the extraction collaborator's per-page character records.

use serde::Deserialize;

/// Single positioned glyph as reported by the extraction layer.
///
/// Input-only and immutable; the pipeline never produces these. `top` is
/// the vertical offset from the top of the page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PageChar {
    /// One grapheme of text.
    pub text: String,
    /// Left edge of the glyph's horizontal span.
    pub x0: f64,
    /// Right edge of the glyph's horizontal span.
    pub x1: f64,
    /// Vertical offset from the page top.
    pub top: f64,
    /// Point size of the glyph's font.
    pub size: f64,
    /// Producer-reported font name, e.g. "TimesNewRoman-Bold".
    pub fontname: String,
}

/// One extracted page: dimensions plus its character records.
///
/// Character order within a page carries no meaning; assembly re-sorts by
/// position. Page numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Page {
    pub number: usize,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub chars: Vec<PageChar>,
}
