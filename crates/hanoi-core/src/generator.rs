//! Recursive move generation.
//!
//! Both solvers share one recursion:
//!
//! 1. move `n - 1` disks from the source to the auxiliary peg,
//! 2. move disk `n` from the source to the destination,
//! 3. move `n - 1` disks from the auxiliary peg to the destination.
//!
//! They differ only in how each move is labelled. [`CorrectLabels`] reports
//! the real destination. [`AuxiliaryBugLabels`] reproduces a swapped-argument
//! bug: every description names the auxiliary peg of its call as the
//! destination, while the disk still travels where the recursion sends it.

use std::fmt;
use std::str::FromStr;

use crate::error::HanoiError;
use crate::moves::{DiskCount, Move, MoveSequence};
use crate::peg::PegLabel;

/// Strategy for describing a generated move.
pub trait MoveLabeler {
    /// The destination the description reports.
    fn reported_destination(&self, auxiliary: PegLabel, destination: PegLabel) -> PegLabel;

    /// Log text for disk `disk` moving `from` to the reported peg.
    fn describe(&self, disk: u8, from: PegLabel, reported: PegLabel) -> String;

    /// Build the move record for one step of the recursion.
    fn label(&self, disk: u8, from: PegLabel, auxiliary: PegLabel, to: PegLabel) -> Move {
        let reported = self.reported_destination(auxiliary, to);
        Move {
            disk,
            from,
            to,
            description: self.describe(disk, from, reported),
        }
    }
}

/// Labels every move with its true destination.
#[derive(Debug, Clone, Copy, Default)]
pub struct CorrectLabels;

impl MoveLabeler for CorrectLabels {
    fn reported_destination(&self, _auxiliary: PegLabel, destination: PegLabel) -> PegLabel {
        destination
    }

    fn describe(&self, disk: u8, from: PegLabel, reported: PegLabel) -> String {
        format!("Move disk {disk} from {from} to {reported}")
    }
}

/// Labels every move with the auxiliary peg of its call instead of the
/// destination.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuxiliaryBugLabels;

impl MoveLabeler for AuxiliaryBugLabels {
    fn reported_destination(&self, auxiliary: PegLabel, _destination: PegLabel) -> PegLabel {
        auxiliary
    }

    fn describe(&self, disk: u8, from: PegLabel, reported: PegLabel) -> String {
        format!("transfer disk {disk} from {from} to {reported}")
    }
}

/// Generate the moves for `n` disks with the given labeller.
pub fn generate_with<L: MoveLabeler + ?Sized>(
    labeler: &L,
    n: DiskCount,
    source: PegLabel,
    auxiliary: PegLabel,
    destination: PegLabel,
) -> MoveSequence {
    let mut moves = MoveSequence::with_capacity(n.expected_moves());
    solve(labeler, n.get(), source, auxiliary, destination, &mut moves);
    moves
}

fn solve<L: MoveLabeler + ?Sized>(
    labeler: &L,
    disk: u8,
    source: PegLabel,
    auxiliary: PegLabel,
    destination: PegLabel,
    out: &mut MoveSequence,
) {
    if disk == 1 {
        out.push(labeler.label(1, source, auxiliary, destination));
        return;
    }

    solve(labeler, disk - 1, source, destination, auxiliary, out);
    out.push(labeler.label(disk, source, auxiliary, destination));
    solve(labeler, disk - 1, auxiliary, source, destination, out);
}

/// Solve the puzzle, labelling each move with its true destination.
///
/// ```
/// use hanoi_core::{generate, DiskCount, PegLabel};
///
/// let moves = generate(DiskCount::new(2).unwrap(), PegLabel::A, PegLabel::B, PegLabel::C);
/// assert_eq!(moves.len(), 3);
/// assert_eq!(moves[1].description, "Move disk 2 from A to C");
/// ```
pub fn generate(
    n: DiskCount,
    source: PegLabel,
    auxiliary: PegLabel,
    destination: PegLabel,
) -> MoveSequence {
    generate_with(&CorrectLabels, n, source, auxiliary, destination)
}

/// Solve the puzzle with the auxiliary-peg labelling bug.
///
/// The recursion and the `from`/`to` fields are identical to [`generate`];
/// only the descriptions are wrong.
pub fn generate_faulty(
    n: DiskCount,
    source: PegLabel,
    auxiliary: PegLabel,
    destination: PegLabel,
) -> MoveSequence {
    generate_with(&AuxiliaryBugLabels, n, source, auxiliary, destination)
}

/// Which solver a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Variant {
    Correct,
    Faulty,
}

impl Variant {
    /// Canonical pegs for a run: source `A`, auxiliary `B`, destination `C`.
    pub const PEGS: (PegLabel, PegLabel, PegLabel) = (PegLabel::A, PegLabel::B, PegLabel::C);

    /// The labeller this variant uses.
    pub fn labeler(self) -> &'static dyn MoveLabeler {
        match self {
            Variant::Correct => &CorrectLabels,
            Variant::Faulty => &AuxiliaryBugLabels,
        }
    }

    /// Whether runs of this variant report a running step count.
    ///
    /// The faulty solver never counts its steps.
    pub const fn tracks_steps(self) -> bool {
        matches!(self, Variant::Correct)
    }

    /// Generate the moves for `n` disks on the canonical pegs.
    pub fn generate(self, n: DiskCount) -> MoveSequence {
        let (source, auxiliary, destination) = Self::PEGS;
        self.generate_on(n, source, auxiliary, destination)
    }

    /// Generate the moves for `n` disks on explicit pegs.
    pub fn generate_on(
        self,
        n: DiskCount,
        source: PegLabel,
        auxiliary: PegLabel,
        destination: PegLabel,
    ) -> MoveSequence {
        generate_with(self.labeler(), n, source, auxiliary, destination)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Variant::Correct => "correct",
            Variant::Faulty => "faulty",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = HanoiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "correct" => Ok(Variant::Correct),
            "faulty" => Ok(Variant::Faulty),
            _ => Err(HanoiError::InvalidVariant(s.to_string())),
        }
    }
}

/// Check that three pegs are pairwise distinct.
pub fn distinct_pegs(
    source: PegLabel,
    auxiliary: PegLabel,
    destination: PegLabel,
) -> Result<(), HanoiError> {
    if source == auxiliary || source == destination || auxiliary == destination {
        return Err(HanoiError::DuplicatePeg {
            from: source,
            via: auxiliary,
            to: destination,
        });
    }
    Ok(())
}
