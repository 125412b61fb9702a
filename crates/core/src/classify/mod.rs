//! Classification stage: font-size clusters to heading levels, lines to a
//! filtered outline.

pub mod headings;
pub mod sizes;

pub use headings::detect_headings;
pub use sizes::{SizeCluster, SizeLevels, classify_sizes};
