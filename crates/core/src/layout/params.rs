//! Heuristic parameters.
//!
//! Contains HeuristicParams for controlling outline inference behavior.

/// Parameters for outline inference.
///
/// Every threshold the heuristics use, named and tunable. All stages take
/// these explicitly; there are no module-level constants to chase.
#[derive(Debug, Clone, PartialEq)]
pub struct HeuristicParams {
    /// Maximum distance from a cluster's representative (largest) size for
    /// another font size to join that cluster, in points.
    pub size_cluster_gap: f64,

    /// Maximum distance between a line's horizontal midpoint and the page's
    /// horizontal midpoint for the line to count as centered, in layout
    /// units.
    pub center_tolerance: f64,

    /// Fraction of the page height from the top within which a line counts
    /// as top-of-page.
    pub top_zone_ratio: f64,

    /// Fraction of the page count above which a repeated heading text is
    /// suppressed as a running header/footer. A text occurring on more than
    /// this fraction of pages is removed; exactly the fraction is kept.
    pub repeat_page_ratio: f64,

    /// Number of size clusters promoted to heading levels, largest first.
    /// Effectively capped at the four representable levels H1..H4.
    pub max_levels: usize,

    /// Minimum character count of a normalized line; shorter lines are
    /// discarded as too short to be meaningful structure.
    pub min_line_chars: usize,
}

impl Default for HeuristicParams {
    fn default() -> Self {
        Self {
            size_cluster_gap: 0.5,
            center_tolerance: 50.0,
            top_zone_ratio: 0.25,
            repeat_page_ratio: 0.4,
            max_levels: 4,
            min_line_chars: 4,
        }
    }
}
