//! Outline data model: heading levels, headings, and the result structure.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Rank of a heading, ordered from most to least prominent.
///
/// A level is assigned by membership in one of the four largest font-size
/// clusters of the document; text outside those clusters never becomes a
/// heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
}

impl HeadingLevel {
    /// Number of representable tiers.
    pub const COUNT: usize = 4;

    /// Level for a zero-based prominence rank (0 = most prominent).
    pub const fn from_rank(rank: usize) -> Option<Self> {
        match rank {
            0 => Some(Self::H1),
            1 => Some(Self::H2),
            2 => Some(Self::H3),
            3 => Some(Self::H4),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::H1 => "H1",
            Self::H2 => "H2",
            Self::H3 => "H3",
            Self::H4 => "H4",
        }
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One detected heading.
///
/// The (text, page) pair is unique across an outline; the first occurrence
/// on a page wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    pub level: HeadingLevel,
    pub text: String,
    pub page: usize,
}

/// The sole output artifact: a title plus the ordered heading sequence.
///
/// Headings are ordered by ascending page, then by discovery order within
/// the page. Serializes to exactly `{"title": ..., "outline": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    pub title: String,
    pub outline: Vec<Heading>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_ordered_by_prominence() {
        assert!(HeadingLevel::H1 < HeadingLevel::H2);
        assert!(HeadingLevel::H3 < HeadingLevel::H4);
    }

    #[test]
    fn from_rank_covers_exactly_four_tiers() {
        assert_eq!(HeadingLevel::from_rank(0), Some(HeadingLevel::H1));
        assert_eq!(HeadingLevel::from_rank(3), Some(HeadingLevel::H4));
        assert_eq!(HeadingLevel::from_rank(4), None);
    }

    #[test]
    fn display_matches_wire_spelling() {
        assert_eq!(HeadingLevel::H2.to_string(), "H2");
    }
}
