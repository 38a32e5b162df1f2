//! Frames streamed to the page.

use hanoi_core::{DiskPlacement, LogLine, PegLabel};
use serde::{Deserialize, Serialize};

/// Events the page applies to its log and towers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum VisEvent {
    /// Empty the log before a run
    Clear,

    /// Append a line to the log
    Log { line: LogLine },

    /// Rebuild the towers with every disk on peg A
    Reset {
        disks: u8,
        placements: Vec<DiskPlacement>,
    },

    /// Relocate one disk
    Move {
        index: usize,
        disk: u8,
        from: PegLabel,
        to: PegLabel,
        placement: DiskPlacement,
    },

    /// A demonstration finished
    Complete { total: usize },

    /// Input was rejected
    Error { message: String },
}

impl VisEvent {
    /// Short name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            VisEvent::Clear => "clear",
            VisEvent::Log { .. } => "log",
            VisEvent::Reset { .. } => "reset",
            VisEvent::Move { .. } => "move",
            VisEvent::Complete { .. } => "complete",
            VisEvent::Error { .. } => "error",
        }
    }
}
