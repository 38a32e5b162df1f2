//! Paced replay of a move sequence.
//!
//! Playback is planned up front as an ordered list of `(offset, action)`
//! pairs. Move `i` (1-indexed) fires at `i * delay` and completion fires at
//! `(len + 1) * delay`, where `delay = max(500ms, 3000ms / len)`: short
//! solutions stretch to fill about three seconds, long ones never step
//! faster than twice a second.
//!
//! A single loop walks the plan against a [`Clock`]. Tests drive it with a
//! [`VirtualClock`] so pacing can be asserted without waiting.

use std::thread;
use std::time::{Duration, Instant};

use crate::moves::{Move, MoveSequence};

/// Lower bound on the per-move delay.
pub const MIN_STEP_DELAY: Duration = Duration::from_millis(500);

/// Target total playback time that short solutions are spread over.
pub const PLAYBACK_BUDGET: Duration = Duration::from_millis(3000);

/// Per-move delay for a sequence of `len` moves.
///
/// An empty sequence gets the whole budget, so its completion still fires
/// after a visible pause.
pub fn step_delay(len: usize) -> Duration {
    if len == 0 {
        return PLAYBACK_BUDGET;
    }
    let spread = u32::try_from(len)
        .map(|len| PLAYBACK_BUDGET / len)
        .unwrap_or(Duration::ZERO);
    spread.max(MIN_STEP_DELAY)
}

/// What happens at a scheduled instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayAction {
    /// Apply the move at `index` (zero-based) of the sequence.
    Move { index: usize, mv: Move },
    /// Playback finished.
    Complete { total: usize },
}

/// An action and its offset from the start of playback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledEvent {
    pub at: Duration,
    pub action: ReplayAction,
}

/// Every timed action of one playback, in firing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayPlan {
    delay: Duration,
    events: Vec<ScheduledEvent>,
}

impl ReplayPlan {
    /// Plan the playback of a sequence.
    pub fn new(moves: &MoveSequence) -> Self {
        let len = moves.len();
        let delay = step_delay(len);
        let mut events = Vec::with_capacity(len + 1);
        let mut at = Duration::ZERO;
        for (index, mv) in moves.iter().enumerate() {
            at += delay;
            events.push(ScheduledEvent {
                at,
                action: ReplayAction::Move {
                    index,
                    mv: mv.clone(),
                },
            });
        }
        events.push(ScheduledEvent {
            at: at + delay,
            action: ReplayAction::Complete { total: len },
        });
        Self { delay, events }
    }

    /// Delay between consecutive actions.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn events(&self) -> &[ScheduledEvent] {
        &self.events
    }

    /// Number of move actions (excluding completion).
    pub fn len(&self) -> usize {
        self.events.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Offset of the completion action.
    pub fn total_duration(&self) -> Duration {
        self.events.last().map(|e| e.at).unwrap_or(Duration::ZERO)
    }
}

impl IntoIterator for ReplayPlan {
    type Item = ScheduledEvent;
    type IntoIter = std::vec::IntoIter<ScheduledEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}

/// Time source for the replay loop.
///
/// Offsets are measured from the moment the clock was created.
pub trait Clock {
    /// Time since playback started.
    fn elapsed(&self) -> Duration;

    /// Block until `deadline` has passed. Returns immediately if it already has.
    fn sleep_until(&mut self, deadline: Duration);
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::start()
    }
}

impl Clock for SystemClock {
    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    fn sleep_until(&mut self, deadline: Duration) {
        if let Some(remaining) = deadline.checked_sub(self.elapsed()) {
            thread::sleep(remaining);
        }
    }
}

/// A clock that jumps straight to each deadline and remembers it.
#[derive(Debug, Clone, Default)]
pub struct VirtualClock {
    now: Duration,
    wakeups: Vec<Duration>,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every instant the loop woke at, in order.
    pub fn wakeups(&self) -> &[Duration] {
        &self.wakeups
    }
}

impl Clock for VirtualClock {
    fn elapsed(&self) -> Duration {
        self.now
    }

    fn sleep_until(&mut self, deadline: Duration) {
        self.now = self.now.max(deadline);
        self.wakeups.push(self.now);
    }
}

/// Receiver of replay callbacks.
pub trait ReplaySink {
    /// Called once per move, in sequence order, with its zero-based index.
    fn on_move(&mut self, mv: &Move, index: usize);

    /// Called once after the last move.
    fn on_complete(&mut self, total: usize);
}

/// Runs a plan against a clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct Scheduler;

impl Scheduler {
    /// Fire every action of `plan` at its offset.
    pub fn run<C, S>(plan: &ReplayPlan, clock: &mut C, sink: &mut S)
    where
        C: Clock + ?Sized,
        S: ReplaySink + ?Sized,
    {
        for event in plan.events() {
            clock.sleep_until(event.at);
            match &event.action {
                ReplayAction::Move { index, mv } => sink.on_move(mv, *index),
                ReplayAction::Complete { total } => sink.on_complete(*total),
            }
        }
    }
}

struct FnSink<M, D> {
    on_move: M,
    on_complete: Option<D>,
}

impl<M, D> ReplaySink for FnSink<M, D>
where
    M: FnMut(&Move, usize),
    D: FnOnce(),
{
    fn on_move(&mut self, mv: &Move, index: usize) {
        (self.on_move)(mv, index);
    }

    fn on_complete(&mut self, _total: usize) {
        if let Some(done) = self.on_complete.take() {
            done();
        }
    }
}

/// Plan and play back `moves`, invoking `on_move` for each move and
/// `on_complete` once at the end.
///
/// ```
/// use hanoi_core::{generate, schedule, DiskCount, PegLabel, VirtualClock};
/// use std::time::Duration;
///
/// let moves = generate(DiskCount::new(2).unwrap(), PegLabel::A, PegLabel::B, PegLabel::C);
/// let mut clock = VirtualClock::new();
/// let mut seen = Vec::new();
/// schedule(&moves, &mut clock, |mv, i| seen.push((i, mv.disk)), || {});
///
/// assert_eq!(seen, vec![(0, 1), (1, 2), (2, 1)]);
/// assert_eq!(clock.wakeups().last(), Some(&Duration::from_millis(4000)));
/// ```
pub fn schedule<C, M, D>(moves: &MoveSequence, clock: &mut C, on_move: M, on_complete: D)
where
    C: Clock + ?Sized,
    M: FnMut(&Move, usize),
    D: FnOnce(),
{
    let plan = ReplayPlan::new(moves);
    let mut sink = FnSink {
        on_move,
        on_complete: Some(on_complete),
    };
    Scheduler::run(&plan, clock, &mut sink);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate;
    use crate::moves::DiskCount;
    use crate::peg::PegLabel::{A, B, C};

    fn moves(n: u8) -> MoveSequence {
        generate(DiskCount::new(n).unwrap(), A, B, C)
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl ReplaySink for Recorder {
        fn on_move(&mut self, mv: &Move, index: usize) {
            self.calls.push(format!("{index}:{}", mv.disk));
        }

        fn on_complete(&mut self, total: usize) {
            self.calls.push(format!("done:{total}"));
        }
    }

    #[test]
    fn delay_spreads_short_runs_over_budget() {
        assert_eq!(step_delay(1), ms(3000));
        assert_eq!(step_delay(3), ms(1000));
        assert_eq!(step_delay(6), ms(500));
    }

    #[test]
    fn delay_never_drops_below_floor() {
        assert_eq!(step_delay(7), ms(500));
        assert_eq!(step_delay(255), ms(500));
        assert_eq!(step_delay(usize::MAX), ms(500));
    }

    #[test]
    fn empty_sequence_uses_budget() {
        assert_eq!(step_delay(0), PLAYBACK_BUDGET);
        let plan = ReplayPlan::new(&MoveSequence::default());
        assert!(plan.is_empty());
        assert_eq!(plan.total_duration(), PLAYBACK_BUDGET);
    }

    #[test]
    fn single_disk_plan() {
        let plan = ReplayPlan::new(&moves(1));
        assert_eq!(plan.delay(), ms(3000));
        let offsets: Vec<Duration> = plan.events().iter().map(|e| e.at).collect();
        assert_eq!(offsets, vec![ms(3000), ms(6000)]);
    }

    #[test]
    fn plan_offsets_are_cumulative() {
        let plan = ReplayPlan::new(&moves(3));
        assert_eq!(plan.len(), 7);
        for (i, event) in plan.events().iter().enumerate() {
            assert_eq!(event.at, ms(500) * (i as u32 + 1));
        }
        assert_eq!(plan.total_duration(), ms(4000));
        assert!(matches!(
            plan.events().last().unwrap().action,
            ReplayAction::Complete { total: 7 }
        ));
    }

    #[test]
    fn scheduler_fires_in_order_then_completes() {
        let plan = ReplayPlan::new(&moves(2));
        let mut clock = VirtualClock::new();
        let mut sink = Recorder::default();
        Scheduler::run(&plan, &mut clock, &mut sink);

        assert_eq!(sink.calls, vec!["0:1", "1:2", "2:1", "done:3"]);
        assert_eq!(clock.wakeups(), &[ms(1000), ms(2000), ms(3000), ms(4000)]);
        assert_eq!(clock.elapsed(), ms(4000));
    }

    #[test]
    fn schedule_calls_completion_once() {
        let seq = moves(4);
        let mut clock = VirtualClock::new();
        let mut indices = Vec::new();
        let mut completions = 0;
        schedule(&seq, &mut clock, |_, i| indices.push(i), || completions += 1);

        assert_eq!(indices, (0..15).collect::<Vec<_>>());
        assert_eq!(completions, 1);
        assert_eq!(clock.elapsed(), ms(500) * 16);
    }

    #[test]
    fn virtual_clock_never_goes_backwards() {
        let mut clock = VirtualClock::new();
        clock.sleep_until(ms(100));
        clock.sleep_until(ms(50));
        assert_eq!(clock.elapsed(), ms(100));
    }

    #[test]
    fn system_clock_returns_for_past_deadlines() {
        let mut clock = SystemClock::start();
        clock.sleep_until(Duration::ZERO);
        assert!(clock.elapsed() < ms(500));
    }
}
