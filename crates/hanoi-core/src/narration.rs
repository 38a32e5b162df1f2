//! Log lines narrating a run.
//!
//! Each run produces a [`Transcript`]: a short preamble shown immediately and
//! a body shown after [`NARRATION_DELAY`]. Visual demonstrations add one line
//! per replayed move and a closing line, emitted by the replay loop.

use std::time::Duration;

use crate::error::HanoiError;
use crate::generator::Variant;
use crate::moves::{DiskCount, Move, MoveSequence};

/// Pause between a run's preamble and its body.
pub const NARRATION_DELAY: Duration = Duration::from_millis(500);

/// Presentation class of a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LogKind {
    Heading,
    Info,
    Step,
    Warning,
    Success,
    Error,
    Blank,
}

/// One line for the log sink.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogLine {
    pub kind: LogKind,
    pub text: String,
}

impl LogLine {
    pub fn new(kind: LogKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn blank() -> Self {
        Self::new(LogKind::Blank, "")
    }
}

/// Lines for one run, split around the narration delay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transcript {
    pub preamble: Vec<LogLine>,
    pub body: Vec<LogLine>,
}

impl Transcript {
    /// Narrate a full solver run.
    pub fn for_run(variant: Variant, n: DiskCount) -> Self {
        let moves = variant.generate(n);
        match variant {
            Variant::Faulty => faulty_run(n, &moves),
            Variant::Correct => correct_run(n, &moves),
        }
    }

    /// Opening lines of a visual demonstration.
    ///
    /// The per-move lines come from [`replay_line`] as the replay fires.
    pub fn for_demo(n: DiskCount, moves: &MoveSequence) -> Self {
        Self {
            preamble: vec![
                LogLine::new(LogKind::Heading, "VISUAL DEMONSTRATION"),
                LogLine::new(
                    LogKind::Info,
                    format!("Solving Tower of Hanoi with {n} disks..."),
                ),
                LogLine::new(
                    LogKind::Info,
                    "Watch the towers above as the algorithm executes...",
                ),
                LogLine::blank(),
                LogLine::new(
                    LogKind::Info,
                    format!("Total moves required: {} (2^{n} - 1)", moves.len()),
                ),
                LogLine::blank(),
            ],
            body: Vec::new(),
        }
    }

    /// All lines, preamble first.
    pub fn lines(&self) -> impl Iterator<Item = &LogLine> {
        self.preamble.iter().chain(self.body.iter())
    }
}

fn method_line(call: String) -> LogLine {
    LogLine::new(LogKind::Info, format!("Method: {call}"))
}

fn faulty_run(n: DiskCount, moves: &MoveSequence) -> Transcript {
    let preamble = vec![
        LogLine::new(LogKind::Heading, "EXECUTING FAULTY SOLVER"),
        method_line(format!("tower_of_hanoi({n}, \"A\", \"B\", \"C\")")),
        LogLine::blank(),
    ];

    let mut body: Vec<LogLine> = moves
        .iter()
        .map(|mv| {
            LogLine::new(
                LogKind::Error,
                format!("{}  ERROR: should be {}!", mv.description, mv.to),
            )
        })
        .collect();
    body.extend([
        LogLine::blank(),
        LogLine::new(
            LogKind::Warning,
            "ISSUE DETECTED: the faulty solver reports the wrong peg for every move!",
        ),
        LogLine::new(LogKind::Info, "No step counting available"),
        LogLine::new(
            LogKind::Info,
            format!("Expected total steps: {}", n.expected_moves()),
        ),
    ]);

    Transcript { preamble, body }
}

fn correct_run(n: DiskCount, moves: &MoveSequence) -> Transcript {
    let preamble = vec![
        LogLine::new(LogKind::Heading, "EXECUTING CORRECT SOLVER"),
        method_line(format!("solve_hanoi({n}, 'A', 'B', 'C')")),
        LogLine::blank(),
    ];

    let mut body: Vec<LogLine> = moves
        .step_numbers()
        .map(|(step, mv)| LogLine::new(LogKind::Step, format!("{}  Step {step}", mv.description)))
        .collect();

    let total = moves.len();
    body.push(LogLine::blank());
    body.push(LogLine::new(LogKind::Success, format!("Total steps = {total}")));
    if total == n.expected_moves() {
        body.push(LogLine::new(LogKind::Success, "All moves are logically correct!"));
    } else {
        body.push(LogLine::new(
            LogKind::Error,
            format!(
                "Step count {total} does not match the expected {}",
                n.expected_moves()
            ),
        ));
    }
    body.push(LogLine::new(
        LogKind::Info,
        format!("Formula verification: 2^{n} - 1 = {}", n.expected_moves()),
    ));

    Transcript { preamble, body }
}

/// Log line for a replayed move, numbered from 1.
pub fn replay_line(index: usize, mv: &Move) -> LogLine {
    LogLine::new(LogKind::Step, format!("{}. {}", index + 1, mv.description))
}

/// Closing lines of a visual demonstration.
pub fn completion_lines(total: usize) -> Vec<LogLine> {
    vec![
        LogLine::blank(),
        LogLine::new(LogKind::Success, format!("Puzzle solved in {total} moves!")),
    ]
}

/// Line reporting rejected input.
pub fn error_line(err: &HanoiError) -> LogLine {
    LogLine::new(LogKind::Error, err.to_string())
}

/// Line shown when the log is cleared before a run.
pub fn cleared_line() -> LogLine {
    LogLine::new(LogKind::Info, "Output cleared. Ready for new execution...")
}
