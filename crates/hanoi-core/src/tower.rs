//! Three-peg tower state.
//!
//! Used two ways: as a strict checker that replays a move sequence and
//! rejects illegal moves, and as the mirror of the rendered towers, where a
//! move whose disk cannot be found is silently ignored.

use crate::error::HanoiError;
use crate::moves::Move;
use crate::peg::PegLabel;

/// Pixel offset of the bottom disk above the peg base.
pub const BASE_OFFSET_PX: u32 = 8;

/// Rendered height of one disk.
pub const DISK_HEIGHT_PX: u32 = 20;

/// Width added per unit of disk size (the smallest disk is 40px wide).
pub const DISK_WIDTH_STEP_PX: u32 = 20;

/// Rendered position of one disk on its peg.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiskPlacement {
    pub disk: u8,
    pub peg: PegLabel,
    /// Distance of the disk's bottom edge from the peg base, in px.
    pub bottom: u32,
    /// Horizontal offset from the peg centre line, in px.
    pub left: i32,
    pub width: u32,
}

impl DiskPlacement {
    /// Placement of `disk` resting at stack height `level` (0 = bottom).
    pub fn at(disk: u8, peg: PegLabel, level: usize) -> Self {
        let width = disk_width(disk);
        Self {
            disk,
            peg,
            bottom: BASE_OFFSET_PX + level as u32 * DISK_HEIGHT_PX,
            left: -(width as i32) / 2,
            width,
        }
    }
}

/// Rendered width of a disk.
pub const fn disk_width(disk: u8) -> u32 {
    DISK_WIDTH_STEP_PX + disk as u32 * DISK_WIDTH_STEP_PX
}

/// Disks on each peg, bottom first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TowerState {
    pegs: [Vec<u8>; 3],
}

impl TowerState {
    /// All `n` disks on peg `A`, largest at the bottom.
    pub fn new(n: u8) -> Self {
        let mut tower = Self::default();
        tower.reset(n);
        tower
    }

    /// Discard the current layout and stack `n` disks on peg `A`.
    pub fn reset(&mut self, n: u8) {
        for peg in &mut self.pegs {
            peg.clear();
        }
        self.pegs[PegLabel::A.index()].extend((1..=n).rev());
    }

    /// Disks on a peg, bottom first.
    pub fn peg(&self, peg: PegLabel) -> &[u8] {
        &self.pegs[peg.index()]
    }

    /// Top disk of a peg.
    pub fn top(&self, peg: PegLabel) -> Option<u8> {
        self.pegs[peg.index()].last().copied()
    }

    /// Total disks across all pegs.
    pub fn disk_count(&self) -> usize {
        self.pegs.iter().map(Vec::len).sum()
    }

    /// Whether every disk sits on `peg`.
    pub fn is_solved_on(&self, peg: PegLabel) -> bool {
        self.pegs
            .iter()
            .enumerate()
            .all(|(i, stack)| i == peg.index() || stack.is_empty())
    }

    /// Whether no disk rests on a smaller one.
    pub fn is_well_ordered(&self) -> bool {
        self.pegs
            .iter()
            .all(|stack| stack.windows(2).all(|w| w[0] > w[1]))
    }

    /// Apply a move, rejecting anything the rules forbid.
    pub fn apply(&mut self, mv: &Move) -> Result<(), HanoiError> {
        let top = self.top(mv.from).ok_or(HanoiError::EmptyPeg {
            disk: mv.disk,
            peg: mv.from,
        })?;
        if top != mv.disk {
            return Err(HanoiError::WrongDisk {
                disk: mv.disk,
                peg: mv.from,
                top,
            });
        }
        if let Some(below) = self.top(mv.to) {
            if below < mv.disk {
                return Err(HanoiError::IllegalMove {
                    disk: mv.disk,
                    below,
                    peg: mv.to,
                });
            }
        }
        self.pegs[mv.from.index()].pop();
        self.pegs[mv.to.index()].push(mv.disk);
        Ok(())
    }

    /// Relocate a named disk the way the rendered towers do.
    ///
    /// The disk is looked up anywhere in the source stack; if it is missing
    /// nothing happens and `None` is returned. Sizes are not checked. The
    /// returned placement is computed from the destination's occupancy
    /// before the disk lands.
    pub fn move_top_disk(
        &mut self,
        disk: u8,
        from: PegLabel,
        to: PegLabel,
    ) -> Option<DiskPlacement> {
        let source = &mut self.pegs[from.index()];
        let pos = source.iter().position(|&d| d == disk)?;
        source.remove(pos);

        let level = self.pegs[to.index()].len();
        self.pegs[to.index()].push(disk);
        Some(DiskPlacement::at(disk, to, level))
    }

    /// Placement of every disk, peg by peg, bottom first.
    pub fn layout(&self) -> Vec<DiskPlacement> {
        PegLabel::ALL
            .iter()
            .flat_map(|&peg| {
                self.peg(peg)
                    .iter()
                    .enumerate()
                    .map(move |(level, &disk)| DiskPlacement::at(disk, peg, level))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate;
    use crate::moves::DiskCount;
    use PegLabel::{A, B, C};

    fn mv(disk: u8, from: PegLabel, to: PegLabel) -> Move {
        Move {
            disk,
            from,
            to,
            description: String::new(),
        }
    }

    #[test]
    fn reset_stacks_descending_on_a() {
        let tower = TowerState::new(4);
        assert_eq!(tower.peg(A), &[4, 3, 2, 1]);
        assert!(tower.peg(B).is_empty());
        assert!(tower.is_well_ordered());
        assert!(tower.is_solved_on(A));
    }

    #[test]
    fn reset_discards_previous_layout() {
        let mut tower = TowerState::new(3);
        tower.apply(&mv(1, A, C)).unwrap();
        tower.reset(2);
        assert_eq!(tower.peg(A), &[2, 1]);
        assert!(tower.peg(C).is_empty());
        assert_eq!(tower.disk_count(), 2);
    }

    #[test]
    fn apply_rejects_larger_on_smaller() {
        let mut tower = TowerState::new(2);
        tower.apply(&mv(1, A, B)).unwrap();
        let err = tower.apply(&mv(2, A, B)).unwrap_err();
        assert_eq!(
            err,
            HanoiError::IllegalMove {
                disk: 2,
                below: 1,
                peg: B
            }
        );
    }

    #[test]
    fn apply_rejects_buried_and_missing_disks() {
        let mut tower = TowerState::new(2);
        assert!(matches!(
            tower.apply(&mv(2, A, C)),
            Err(HanoiError::WrongDisk { top: 1, .. })
        ));
        assert!(matches!(tower.apply(&mv(1, B, C)), Err(HanoiError::EmptyPeg { .. })));
    }

    #[test]
    fn generated_solution_replays_cleanly() {
        for n in 1..=8 {
            let mut tower = TowerState::new(n);
            for m in &generate(DiskCount::new(n).unwrap(), A, B, C) {
                tower.apply(m).unwrap();
                assert!(tower.is_well_ordered());
            }
            assert!(tower.is_solved_on(C));
            assert_eq!(tower.peg(C).len(), n as usize);
        }
    }

    #[test]
    fn lenient_move_ignores_missing_disk() {
        let mut tower = TowerState::new(3);
        assert_eq!(tower.move_top_disk(2, B, C), None);
        assert_eq!(tower, TowerState::new(3));
    }

    #[test]
    fn lenient_move_reports_landing_position() {
        let mut tower = TowerState::new(3);
        let first = tower.move_top_disk(1, A, C).unwrap();
        assert_eq!(first.bottom, BASE_OFFSET_PX);
        assert_eq!(first.width, 40);
        assert_eq!(first.left, -20);

        let second = tower.move_top_disk(2, A, B).unwrap();
        assert_eq!(second.bottom, BASE_OFFSET_PX);
        let third = tower.move_top_disk(1, C, B).unwrap();
        assert_eq!(third.bottom, BASE_OFFSET_PX + DISK_HEIGHT_PX);
        assert_eq!(third.peg, B);
    }

    #[test]
    fn layout_lists_every_disk() {
        let tower = TowerState::new(3);
        let layout = tower.layout();
        assert_eq!(layout.len(), 3);
        assert_eq!(layout[0], DiskPlacement::at(3, A, 0));
        assert_eq!(layout[2].bottom, 48);
        assert_eq!(layout[2].left, -20);
    }
}
