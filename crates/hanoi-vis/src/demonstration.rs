//! Timed cue lists for runs and visual demonstrations.
//!
//! A [`Demonstration`] is built entirely up front: every log line and tower
//! update is placed at its offset from the start before playback begins.
//! Tower updates stay symbolic until they fire, because the rendered
//! position depends on the tower as it is at that moment.

use std::time::Duration;

use hanoi_core::{
    cleared_line, completion_lines, replay_line, DiskCount, HanoiError, LogLine, Move,
    ReplayAction, ReplayPlan, Transcript, Variant, NARRATION_DELAY,
};
use serde::{Deserialize, Serialize};

use crate::events::VisEvent;

/// Something that happens when a cue fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Send a frame as-is
    Emit(VisEvent),
    /// Put every disk back on peg A
    ResetTower { disks: DiskCount },
    /// Relocate one disk on the tower mirror
    MoveDisk { index: usize, mv: Move },
}

/// A step and its offset from the start of playback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cue {
    pub at: Duration,
    pub step: Step,
}

/// Disk count as sent by the page: a number or the raw field text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DiskInput {
    Number(i64),
    Text(String),
}

impl DiskInput {
    /// Validate into a disk count.
    pub fn resolve(&self) -> Result<DiskCount, HanoiError> {
        match self {
            DiskInput::Number(n) => DiskCount::parse(&n.to_string()),
            DiskInput::Text(text) => DiskCount::parse(text),
        }
    }
}

/// Ordered cues for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Demonstration {
    cues: Vec<Cue>,
}

impl Demonstration {
    fn push(&mut self, at: Duration, step: Step) {
        self.cues.push(Cue { at, step });
    }

    fn log(&mut self, at: Duration, line: LogLine) {
        self.push(at, Step::Emit(VisEvent::Log { line }));
    }

    /// Narrate a solver run: clear, preamble now, body after the narration delay.
    pub fn run(variant: Variant, n: DiskCount) -> Self {
        let transcript = Transcript::for_run(variant, n);
        let mut demo = Self::default();
        demo.push(Duration::ZERO, Step::Emit(VisEvent::Clear));
        for line in transcript.preamble {
            demo.log(Duration::ZERO, line);
        }
        for line in transcript.body {
            demo.log(NARRATION_DELAY, line);
        }
        demo
    }

    /// Animate the correct solution on the towers.
    pub fn visual(n: DiskCount) -> Self {
        let moves = Variant::Correct.generate(n);
        let transcript = Transcript::for_demo(n, &moves);
        let plan = ReplayPlan::new(&moves);

        let mut demo = Self::default();
        demo.push(Duration::ZERO, Step::Emit(VisEvent::Clear));
        demo.push(Duration::ZERO, Step::ResetTower { disks: n });
        for line in transcript.lines().cloned() {
            demo.log(Duration::ZERO, line);
        }

        for event in plan {
            match event.action {
                ReplayAction::Move { index, mv } => {
                    demo.log(event.at, replay_line(index, &mv));
                    demo.push(event.at, Step::MoveDisk { index, mv });
                }
                ReplayAction::Complete { total } => {
                    for line in completion_lines(total) {
                        demo.log(event.at, line);
                    }
                    demo.push(event.at, Step::Emit(VisEvent::Complete { total }));
                }
            }
        }
        demo
    }

    /// Rebuild the towers with `n` disks and nothing else.
    pub fn reset(n: DiskCount) -> Self {
        let mut demo = Self::default();
        demo.push(Duration::ZERO, Step::ResetTower { disks: n });
        demo
    }

    /// Clear the log.
    pub fn clear() -> Self {
        let mut demo = Self::default();
        demo.push(Duration::ZERO, Step::Emit(VisEvent::Clear));
        demo.log(Duration::ZERO, cleared_line());
        demo
    }

    /// Report rejected input. Nothing is generated.
    pub fn rejected(err: &HanoiError) -> Self {
        Self::error(err.to_string())
    }

    /// A single error frame.
    pub fn error(message: impl Into<String>) -> Self {
        let mut demo = Self::default();
        demo.push(
            Duration::ZERO,
            Step::Emit(VisEvent::Error {
                message: message.into(),
            }),
        );
        demo
    }

    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    /// Offset of the last cue.
    pub fn duration(&self) -> Duration {
        self.cues.last().map(|c| c.at).unwrap_or(Duration::ZERO)
    }
}

impl IntoIterator for Demonstration {
    type Item = Cue;
    type IntoIter = std::vec::IntoIter<Cue>;

    fn into_iter(self) -> Self::IntoIter {
        self.cues.into_iter()
    }
}

impl FromIterator<Cue> for Demonstration {
    fn from_iter<I: IntoIterator<Item = Cue>>(iter: I) -> Self {
        Self {
            cues: iter.into_iter().collect(),
        }
    }
}
