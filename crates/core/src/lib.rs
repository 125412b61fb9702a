//! strata - title and heading inference from visual text layout.
//!
//! Infers a document's logical structure (a title plus an H1..H4 outline)
//! purely from the geometry of its text: font sizes, boldness, and position
//! on the page. No bookmark or outline metadata is consulted; the input is
//! the positioned-character stream an extraction layer already produced.
//!
//! The pipeline is a pure two-pass computation per document:
//! document-wide statistics first ([`collect_statistics`]), then per-line
//! classification ([`extract`]).

pub mod classify;
pub mod error;
pub mod extract;
pub mod layout;
pub mod normalize;
pub mod outline;
pub mod stats;
pub mod utils;

pub use classify::{SizeCluster, SizeLevels, classify_sizes, detect_headings};
pub use error::{OutlineError, Result};
pub use extract::{extract, extract_from_json, extract_with_params};
pub use layout::{HeuristicParams, Line, Page, PageChar, assemble_lines, is_bold_fontname};
pub use normalize::normalize;
pub use outline::{Heading, HeadingLevel, Outline};
pub use stats::{DocumentStats, collect_statistics};
