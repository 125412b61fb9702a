//! Document-wide statistics gathered in the first pass.
//!
//! The size-to-level mapping and the footer cutoff both need whole-document
//! visibility, so these tables are built once up front and handed to the
//! classification pass as immutable inputs. No module-level state.

use ordered_float::OrderedFloat;
use rustc_hash::FxHashMap;

use crate::layout::Page;
use crate::utils::round_tenth;

/// Aggregates computed over every character of the document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentStats {
    /// Occurrence count per rounded font size.
    pub size_frequency: FxHashMap<OrderedFloat<f64>, usize>,

    /// The most frequent rounded font size, presumed to be body text.
    ///
    /// Computed as a diagnostic; no later stage consults it. Ties break
    /// toward the smaller size so the value is deterministic.
    pub body_font_size: Option<f64>,

    /// Page count of the document, the denominator of the footer cutoff.
    pub total_pages: usize,
}

impl DocumentStats {
    /// True when the document yielded no characters at all.
    pub fn is_empty(&self) -> bool {
        self.size_frequency.is_empty()
    }
}

/// First pass: collects font-size frequencies and page count.
pub fn collect_statistics(pages: &[Page]) -> DocumentStats {
    let mut size_frequency: FxHashMap<OrderedFloat<f64>, usize> = FxHashMap::default();
    for page in pages {
        for ch in &page.chars {
            *size_frequency
                .entry(OrderedFloat(round_tenth(ch.size)))
                .or_insert(0) += 1;
        }
    }

    let body_font_size = size_frequency
        .iter()
        .max_by(|(size_a, count_a), (size_b, count_b)| {
            count_a.cmp(count_b).then_with(|| size_b.cmp(size_a))
        })
        .map(|(size, _)| size.0);

    DocumentStats {
        size_frequency,
        body_font_size,
        total_pages: pages.len(),
    }
}
