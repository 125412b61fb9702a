//! Font-size clustering: distinct rounded sizes to ordered heading tiers.

use itertools::Itertools;

use crate::layout::HeuristicParams;
use crate::outline::HeadingLevel;
use crate::stats::DocumentStats;
use crate::utils::round_tenth;

/// A set of font sizes judged visually equivalent, promoted to one tier.
///
/// Stored as an inclusive range over the member sizes. `upper` is the
/// representative (largest) member; `lower` the smallest. Lookup is by
/// containment, so a line whose average size falls between two members
/// still resolves to the tier.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeCluster {
    pub upper: f64,
    pub lower: f64,
    pub level: HeadingLevel,
}

impl SizeCluster {
    fn contains(&self, size: f64) -> bool {
        size >= self.lower && size <= self.upper
    }
}

/// The size-to-level table built from document-wide statistics.
///
/// Holds at most four clusters, H1 (largest sizes) downward. Sizes outside
/// every cluster receive no level and can never become headings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SizeLevels {
    clusters: Vec<SizeCluster>,
}

impl SizeLevels {
    /// Looks up the heading level for a line's average font size.
    ///
    /// The size is rounded to the pipeline precision and matched by range
    /// containment against each promoted cluster.
    pub fn level_for(&self, avg_size: f64) -> Option<HeadingLevel> {
        let size = round_tenth(avg_size);
        self.clusters
            .iter()
            .find(|c| c.contains(size))
            .map(|c| c.level)
    }

    pub fn clusters(&self) -> &[SizeCluster] {
        &self.clusters
    }

    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }
}

/// Greedily clusters the document's distinct rounded sizes, descending.
///
/// A size opens a new cluster when its gap to the current cluster's
/// representative exceeds `size_cluster_gap`; otherwise it joins and
/// extends the cluster's lower bound. The first `max_levels` clusters
/// (capped at the four representable levels) are promoted to H1..H4.
pub fn classify_sizes(stats: &DocumentStats, params: &HeuristicParams) -> SizeLevels {
    let mut groups: Vec<(f64, f64)> = Vec::new();
    for size in stats
        .size_frequency
        .keys()
        .map(|s| s.0)
        .sorted_by(|a, b| b.total_cmp(a))
    {
        match groups.last_mut() {
            Some((upper, lower)) if (*upper - size).abs() <= params.size_cluster_gap => {
                *lower = size;
            }
            _ => groups.push((size, size)),
        }
    }

    let promoted = params.max_levels.min(HeadingLevel::COUNT);
    let clusters = groups
        .into_iter()
        .take(promoted)
        .enumerate()
        .filter_map(|(rank, (upper, lower))| {
            HeadingLevel::from_rank(rank).map(|level| SizeCluster {
                upper,
                lower,
                level,
            })
        })
        .collect();

    SizeLevels { clusters }
}
