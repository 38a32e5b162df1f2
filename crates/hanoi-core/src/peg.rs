//! Peg labels.
//!
//! The puzzle has exactly three pegs. Labels parse case-insensitively and
//! always display upper case; on the wire they travel lower case so the page
//! can address its `tower-a`, `tower-b` and `tower-c` elements directly.

use std::fmt;
use std::str::FromStr;

use crate::error::HanoiError;

/// One of the three pegs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PegLabel {
    #[cfg_attr(feature = "serde", serde(alias = "A"))]
    A,
    #[cfg_attr(feature = "serde", serde(alias = "B"))]
    B,
    #[cfg_attr(feature = "serde", serde(alias = "C"))]
    C,
}

impl PegLabel {
    /// All pegs in display order.
    pub const ALL: [PegLabel; 3] = [PegLabel::A, PegLabel::B, PegLabel::C];

    /// Array index of this peg (`A` = 0).
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PegLabel::A => 0,
            PegLabel::B => 1,
            PegLabel::C => 2,
        }
    }

    /// Upper-case display letter.
    pub const fn letter(self) -> char {
        match self {
            PegLabel::A => 'A',
            PegLabel::B => 'B',
            PegLabel::C => 'C',
        }
    }

    /// Lower-case identifier used in element ids and JSON.
    pub const fn id(self) -> &'static str {
        match self {
            PegLabel::A => "a",
            PegLabel::B => "b",
            PegLabel::C => "c",
        }
    }

    /// The peg that is neither `a` nor `b`.
    ///
    /// Returns `None` when `a == b`, since the third peg is then ambiguous.
    pub fn spare(a: PegLabel, b: PegLabel) -> Option<PegLabel> {
        if a == b {
            return None;
        }
        Self::ALL.into_iter().find(|p| *p != a && *p != b)
    }

    /// Parse a single character label.
    pub fn from_char(c: char) -> Result<Self, HanoiError> {
        match c.to_ascii_lowercase() {
            'a' => Ok(PegLabel::A),
            'b' => Ok(PegLabel::B),
            'c' => Ok(PegLabel::C),
            _ => Err(HanoiError::InvalidPeg(c.to_string())),
        }
    }
}

impl fmt::Display for PegLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for PegLabel {
    type Err = HanoiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => Err(HanoiError::InvalidPeg(s.to_string())),
        }
    }
}

impl TryFrom<char> for PegLabel {
    type Error = HanoiError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::from_char(c)
    }
}
