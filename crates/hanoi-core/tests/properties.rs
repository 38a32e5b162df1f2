//! Property-based tests for move generation and replay pacing.
//!
//! These tests use proptest to check the closed-form guarantees across every
//! supported disk count and every assignment of peg roles.

use std::time::Duration;

use hanoi_core::{
    generate, generate_faulty, schedule, step_delay, DiskCount, PegLabel, ReplayAction,
    ReplayPlan, TowerState, VirtualClock,
};
use proptest::prelude::*;

prop_compose! {
    fn disk_count()(n in 1u8..=8) -> DiskCount {
        DiskCount::new(n).unwrap()
    }
}

prop_compose! {
    /// Any assignment of the three pegs to source, auxiliary and destination.
    fn peg_roles()(perm in 0usize..6) -> (PegLabel, PegLabel, PegLabel) {
        use PegLabel::{A, B, C};
        [(A, B, C), (A, C, B), (B, A, C), (B, C, A), (C, A, B), (C, B, A)][perm]
    }
}

/// Tower with all `n` disks stacked on `source`.
fn tower_on(source: PegLabel, n: u8) -> TowerState {
    let mut tower = TowerState::new(n);
    if source != PegLabel::A {
        // Largest first, so the stack stays descending.
        for disk in (1..=n).rev() {
            tower.move_top_disk(disk, PegLabel::A, source);
        }
    }
    tower
}

proptest! {
    #[test]
    fn move_count_is_closed_form(n in disk_count(), (s, a, d) in peg_roles()) {
        let moves = generate(n, s, a, d);
        prop_assert_eq!(moves.len(), (1usize << n.get()) - 1);
    }

    #[test]
    fn each_disk_moves_power_of_two_times(n in disk_count(), (s, a, d) in peg_roles()) {
        let moves = generate(n, s, a, d);
        for k in 1..=n.get() {
            prop_assert_eq!(moves.visits_of(k), 1usize << (n.get() - k));
        }
        prop_assert_eq!(moves.visits_of(n.get()), 1);
    }

    #[test]
    fn replay_is_legal_and_solves(n in disk_count(), (s, a, d) in peg_roles()) {
        let moves = generate(n, s, a, d);
        let mut tower = tower_on(s, n.get());
        prop_assert!(tower.is_solved_on(s));

        for mv in &moves {
            prop_assert!(tower.apply(mv).is_ok(), "illegal move: {:?}", mv);
            prop_assert!(tower.is_well_ordered());
        }
        prop_assert!(tower.is_solved_on(d));
        prop_assert_eq!(tower.peg(d).len(), n.get() as usize);
    }

    #[test]
    fn faulty_shares_shape_with_correct(n in disk_count(), (s, a, d) in peg_roles()) {
        let good = generate(n, s, a, d);
        let bad = generate_faulty(n, s, a, d);
        prop_assert_eq!(good.len(), bad.len());
        for (g, b) in good.iter().zip(bad.iter()) {
            prop_assert_eq!(g.disk, b.disk);
            prop_assert_eq!(g.from, b.from);
            prop_assert_eq!(g.to, b.to);
        }
    }

    #[test]
    fn faulty_reports_the_auxiliary_of_each_call(n in disk_count(), (s, a, d) in peg_roles()) {
        let bad = generate_faulty(n, s, a, d);
        for mv in &bad {
            // The auxiliary of the call that emitted this move is the peg
            // that is neither its source nor its destination.
            let aux = PegLabel::spare(mv.from, mv.to).unwrap();
            let expected = format!("transfer disk {} from {} to {}", mv.disk, mv.from, aux);
            prop_assert_eq!(&mv.description, &expected);
            prop_assert_ne!(aux, mv.to);
        }
    }

    #[test]
    fn replay_timestamps_follow_adaptive_delay(n in disk_count()) {
        let moves = generate(n, PegLabel::A, PegLabel::B, PegLabel::C);
        let len = moves.len();
        let delay = Duration::from_millis(500).max(Duration::from_millis(3000) / len as u32);
        prop_assert_eq!(step_delay(len), delay);

        let mut clock = VirtualClock::new();
        let mut fired = Vec::new();
        let mut completed = 0usize;
        schedule(&moves, &mut clock, |_, i| fired.push(i), || completed += 1);

        prop_assert_eq!(fired, (0..len).collect::<Vec<_>>());
        prop_assert_eq!(completed, 1);
        let wakeups = clock.wakeups();
        prop_assert_eq!(wakeups.len(), len + 1);
        for (i, at) in wakeups.iter().enumerate() {
            prop_assert_eq!(*at, delay * (i as u32 + 1));
        }
    }

    #[test]
    fn plan_offsets_strictly_increase(n in disk_count()) {
        let plan = ReplayPlan::new(&generate(n, PegLabel::A, PegLabel::B, PegLabel::C));
        let offsets: Vec<Duration> = plan.events().iter().map(|e| e.at).collect();
        prop_assert!(offsets.windows(2).all(|w| w[0] < w[1]));
        let is_complete = matches!(
            plan.events().last().map(|e| &e.action),
            Some(ReplayAction::Complete { .. })
        );
        prop_assert!(is_complete);
    }
}

#[test]
fn two_disk_scenario() {
    use PegLabel::{A, B, C};
    let moves = generate(DiskCount::new(2).unwrap(), A, B, C);
    let triples: Vec<_> = moves.iter().map(|m| (m.disk, m.from, m.to)).collect();
    assert_eq!(triples, vec![(1, A, B), (2, A, C), (1, B, C)]);
}

#[test]
fn three_disk_scenario() {
    use PegLabel::{A, B, C};
    let moves = generate(DiskCount::new(3).unwrap(), A, B, C);
    assert_eq!(moves.len(), 7);
    let first = moves.first().unwrap();
    let last = moves.last().unwrap();
    assert_eq!((first.disk, first.from, first.to), (1, A, C));
    assert_eq!((last.disk, last.from, last.to), (1, A, C));
}
