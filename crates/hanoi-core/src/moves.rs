//! Disk counts, moves and materialized move sequences.

use std::fmt;
use std::ops::Index;

use crate::error::HanoiError;
use crate::peg::PegLabel;

/// Smallest supported puzzle.
pub const MIN_DISKS: u8 = 1;

/// Largest supported puzzle (255 moves).
pub const MAX_DISKS: u8 = 8;

/// A disk count validated to lie in `[MIN_DISKS, MAX_DISKS]`.
///
/// Generators take a `DiskCount` rather than a raw integer, so an
/// out-of-range puzzle is rejected before any move is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct DiskCount(u8);

impl DiskCount {
    /// Validate a disk count.
    ///
    /// ```
    /// use hanoi_core::DiskCount;
    ///
    /// assert_eq!(DiskCount::new(3).unwrap().get(), 3);
    /// assert!(DiskCount::new(0).is_err());
    /// assert!(DiskCount::new(9).is_err());
    /// ```
    pub fn new(n: u8) -> Result<Self, HanoiError> {
        if (MIN_DISKS..=MAX_DISKS).contains(&n) {
            Ok(Self(n))
        } else {
            Err(out_of_range())
        }
    }

    /// Parse the raw text of an input field.
    ///
    /// Anything that is not an integer in range, including non-numeric
    /// text, reports the same out-of-range error.
    pub fn parse(text: &str) -> Result<Self, HanoiError> {
        let n: i64 = text.trim().parse().map_err(|_| out_of_range())?;
        u8::try_from(n)
            .map_err(|_| out_of_range())
            .and_then(Self::new)
    }

    /// Raw value.
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Closed-form minimum move count, `2^n - 1`.
    pub const fn expected_moves(self) -> usize {
        (1usize << self.0) - 1
    }

    /// How many times disk `k` moves in an optimal solution, `2^(n-k)`.
    ///
    /// Zero for disks that do not exist in this puzzle.
    pub const fn expected_visits(self, disk: u8) -> usize {
        if disk == 0 || disk > self.0 {
            0
        } else {
            1usize << (self.0 - disk)
        }
    }
}

fn out_of_range() -> HanoiError {
    HanoiError::DiskCountOutOfRange {
        min: MIN_DISKS,
        max: MAX_DISKS,
    }
}

/// Three disks, the tower shown before any run.
impl Default for DiskCount {
    fn default() -> Self {
        Self(3)
    }
}

impl TryFrom<u8> for DiskCount {
    type Error = HanoiError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

impl From<DiskCount> for u8 {
    fn from(n: DiskCount) -> Self {
        n.0
    }
}

impl fmt::Display for DiskCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single-disk move.
///
/// `from` and `to` are the pegs the disk physically travels between.
/// `description` is the text shown in the log, which a faulty labeller may
/// get wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub disk: u8,
    pub from: PegLabel,
    pub to: PegLabel,
    #[cfg_attr(feature = "serde", serde(rename = "desc"))]
    pub description: String,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

/// The ordered, fully materialized moves of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MoveSequence {
    moves: Vec<Move>,
}

impl MoveSequence {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            moves: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Move> {
        self.moves.get(index)
    }

    pub fn first(&self) -> Option<&Move> {
        self.moves.first()
    }

    pub fn last(&self) -> Option<&Move> {
        self.moves.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn into_vec(self) -> Vec<Move> {
        self.moves
    }

    /// Number of moves of the given disk.
    pub fn visits_of(&self, disk: u8) -> usize {
        self.moves.iter().filter(|m| m.disk == disk).count()
    }

    /// Disk numbers in execution order.
    pub fn disk_order(&self) -> Vec<u8> {
        self.moves.iter().map(|m| m.disk).collect()
    }

    /// Running step count for each move, computed as `index + 1`.
    pub fn step_numbers(&self) -> impl Iterator<Item = (usize, &Move)> + '_ {
        self.moves.iter().enumerate().map(|(i, m)| (i + 1, m))
    }
}

impl Index<usize> for MoveSequence {
    type Output = Move;

    fn index(&self, index: usize) -> &Move {
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveSequence {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveSequence {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl From<Vec<Move>> for MoveSequence {
    fn from(moves: Vec<Move>) -> Self {
        Self { moves }
    }
}
