//! Tower of Hanoi Core
//!
//! Move generation and paced replay for a visualizer that contrasts a
//! correct recursive solver with one carrying a labelling bug.
//!
//! # Architecture
//!
//! - **Generator**: one recursion, two labellers. The correct labeller
//!   reports each move's real destination; the faulty one reports the
//!   auxiliary peg of the call instead.
//! - **Schedule**: plans playback as timed actions and runs them against an
//!   injectable clock.
//! - **Tower**: strict replay checker and mirror of the rendered pegs.
//! - **Narration**: log lines for runs and demonstrations.
//!
//! Everything here is synchronous and free of I/O, so the generators can be
//! exercised headless.
//!
//! # Usage
//!
//! ```
//! use hanoi_core::{generate, DiskCount, PegLabel, TowerState};
//!
//! let n = DiskCount::new(3).unwrap();
//! let moves = generate(n, PegLabel::A, PegLabel::B, PegLabel::C);
//! assert_eq!(moves.len(), n.expected_moves());
//!
//! let mut tower = TowerState::new(n.get());
//! for mv in &moves {
//!     tower.apply(mv).unwrap();
//! }
//! assert!(tower.is_solved_on(PegLabel::C));
//! ```

mod error;
mod generator;
mod moves;
mod narration;
mod peg;
mod schedule;
mod tower;

pub use error::{HanoiError, Result};
pub use generator::{
    distinct_pegs, generate, generate_faulty, generate_with, AuxiliaryBugLabels, CorrectLabels,
    MoveLabeler, Variant,
};
pub use moves::{DiskCount, Move, MoveSequence, MAX_DISKS, MIN_DISKS};
pub use narration::{
    cleared_line, completion_lines, error_line, replay_line, LogKind, LogLine, Transcript,
    NARRATION_DELAY,
};
pub use peg::PegLabel;
pub use schedule::{
    schedule, step_delay, Clock, ReplayAction, ReplayPlan, ReplaySink, ScheduledEvent, Scheduler,
    SystemClock, VirtualClock, MIN_STEP_DELAY, PLAYBACK_BUDGET,
};
pub use tower::{disk_width, DiskPlacement, TowerState, BASE_OFFSET_PX, DISK_HEIGHT_PX};
