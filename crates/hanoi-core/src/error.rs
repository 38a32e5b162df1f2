//! Error types for hanoi-core.

use thiserror::Error;

use crate::peg::PegLabel;

/// Result type for hanoi-core operations.
pub type Result<T> = std::result::Result<T, HanoiError>;

/// Errors that can occur while validating input or replaying moves.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HanoiError {
    /// Disk count outside the supported range (or not a number at all).
    #[error("Please enter a value between {min} and {max}")]
    DiskCountOutOfRange { min: u8, max: u8 },

    /// Text that does not name one of the three pegs.
    #[error("unknown peg label: {0:?}")]
    InvalidPeg(String),

    /// Two roles of a puzzle were given the same peg.
    // `source` is reserved by thiserror for the error chain.
    #[error("pegs must be distinct, got source={from} auxiliary={via} destination={to}")]
    DuplicatePeg {
        from: PegLabel,
        via: PegLabel,
        to: PegLabel,
    },

    /// Text that does not name a solver variant.
    #[error("unknown variant: {0:?} (expected \"correct\" or \"faulty\")")]
    InvalidVariant(String),

    /// A move was taken from a peg with no disks on it.
    #[error("cannot move disk {disk}: peg {peg} is empty")]
    EmptyPeg { disk: u8, peg: PegLabel },

    /// The named disk is not the top disk of the source peg.
    #[error("disk {disk} is not on top of peg {peg} (top is {top})")]
    WrongDisk { disk: u8, peg: PegLabel, top: u8 },

    /// A disk would be placed on a smaller one.
    #[error("cannot place disk {disk} on smaller disk {below} at peg {peg}")]
    IllegalMove { disk: u8, below: u8, peg: PegLabel },
}
