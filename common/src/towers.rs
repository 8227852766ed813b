use anyhow::{Context, anyhow, bail};

use crate::{Direction, Disk, Move, NR_PEGS, PegId};

/// The three stacks of disks. Each stack is stored bottom first.
///
/// Invariant: every stack is strictly decreasing from bottom to top, and the
/// stacks together hold exactly the disks `0..nr_disks`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Towers {
    stacks: [Vec<Disk>; NR_PEGS],
    nr_disks: u8,
}

impl Towers {
    /// All `n` disks stacked on `start`, largest at the bottom.
    pub fn new(n: u8, start: PegId) -> Self {
        let mut stacks: [Vec<Disk>; NR_PEGS] = Default::default();
        stacks[start.index()] = (0..n).rev().map(Disk).collect();
        Self {
            stacks,
            nr_disks: n,
        }
    }

    pub fn nr_disks(&self) -> u8 {
        self.nr_disks
    }

    pub fn stack(&self, peg: PegId) -> &[Disk] {
        &self.stacks[peg.index()]
    }

    pub fn height(&self, peg: PegId) -> usize {
        self.stacks[peg.index()].len()
    }

    pub fn top(&self, peg: PegId) -> Option<Disk> {
        self.stacks[peg.index()].last().copied()
    }

    /// Iterate over all disks as `(peg, level, disk)`, where level 0 is the
    /// bottom of the peg.
    pub fn disks(&self) -> impl Iterator<Item = (PegId, usize, Disk)> + '_ {
        PegId::all().into_iter().flat_map(move |peg| {
            self.stack(peg)
                .iter()
                .enumerate()
                .map(move |(level, &disk)| (peg, level, disk))
        })
    }

    /// Check whether a move could be applied, and return the disk that would
    /// be moved.
    pub fn check_move(&self, mv: Move) -> anyhow::Result<Disk> {
        if mv.src == mv.dst {
            bail!("Source and destination are both peg {}", mv.src);
        }
        let disk = self
            .top(mv.src)
            .ok_or_else(|| anyhow!("No disk on source peg {}", mv.src))?;
        if let Some(below) = self.top(mv.dst)
            && below < disk
        {
            bail!("Disk {disk} does not fit onto the smaller disk {below}");
        }
        Ok(disk)
    }

    /// Move the top disk. Backward moves undo the given move, i.e. they take
    /// the disk from `mv.dst` back to `mv.src`.
    ///
    /// On error the towers are left unchanged.
    pub fn apply_move(&mut self, mv: Move, dir: Direction) -> anyhow::Result<Disk> {
        let mv = match dir {
            Direction::Forward => mv,
            Direction::Backward => mv.reversed(),
        };
        let disk = self
            .check_move(mv)
            .with_context(|| format!("Cannot perform {dir:?} move {mv}"))?;

        self.stacks[mv.src.index()].pop();
        self.stacks[mv.dst.index()].push(disk);
        debug_assert!(self.is_consistent(), "{mv} broke the stacking order");
        Ok(disk)
    }

    /// True if all disks sit on `peg`, in their original order.
    pub fn is_solved(&self, peg: PegId) -> bool {
        let stack = self.stack(peg);
        stack.len() == self.nr_disks as usize
            && stack
                .iter()
                .rev()
                .enumerate()
                .all(|(i, disk)| disk.0 as usize == i)
    }

    /// Check the stacking invariant, asserted after every move in debug builds.
    pub fn is_consistent(&self) -> bool {
        let ordered = self
            .stacks
            .iter()
            .all(|stack| stack.windows(2).all(|w| w[0] > w[1]));

        let mut seen = vec![false; self.nr_disks as usize];
        for (_, _, Disk(d)) in self.disks() {
            match seen.get_mut(d as usize) {
                Some(s) if !*s => *s = true,
                _ => return false,
            }
        }

        ordered && seen.into_iter().all(|s| s)
    }
}

#[cfg(test)]
mod tests {
    use proptest::{prelude::*, sample::select};

    use super::*;
    use crate::{solve, solve_default};

    fn mv(src: u8, dst: u8) -> Move {
        Move::from_labels(src, dst).unwrap()
    }

    #[test]
    fn test_initial_stack() {
        let t = Towers::new(3, PegId::left());
        assert_eq!(t.stack(PegId::left()), &[Disk(2), Disk(1), Disk(0)]);
        assert_eq!(t.height(PegId::middle()), 0);
        assert_eq!(t.top(PegId::left()), Some(Disk(0)));
        assert!(t.is_solved(PegId::left()));
        assert!(t.is_consistent());
    }

    #[test]
    fn test_move_from_empty_peg() {
        let mut t = Towers::new(3, PegId::left());
        let before = t.clone();
        assert!(t.apply_move(mv(1, 2), Direction::Forward).is_err());
        assert_eq!(t, before);
    }

    #[test]
    fn test_larger_onto_smaller() {
        let mut t = Towers::new(3, PegId::left());
        t.apply_move(mv(0, 1), Direction::Forward).unwrap();
        let before = t.clone();

        let err = t.apply_move(mv(0, 1), Direction::Forward).unwrap_err();
        assert!(format!("{err:#}").contains("does not fit"));
        assert_eq!(t, before);
    }

    #[test]
    fn test_move_onto_same_peg() {
        let t = Towers::new(2, PegId::left());
        assert!(t.check_move(mv(0, 0)).is_err());
    }

    #[test]
    fn test_backward_move() {
        let mut t = Towers::new(2, PegId::left());
        assert_eq!(t.apply_move(mv(0, 2), Direction::Forward).unwrap(), Disk(0));
        assert_eq!(t.stack(PegId::right()), &[Disk(0)]);

        assert_eq!(t.apply_move(mv(0, 2), Direction::Backward).unwrap(), Disk(0));
        assert_eq!(t, Towers::new(2, PegId::left()));
    }

    #[test]
    fn test_three_disk_replay() {
        let moves = solve_default(3);
        assert_eq!(moves.len(), 7);

        let mut t = Towers::new(3, PegId::left());
        for m in moves {
            t.apply_move(m, Direction::Forward).unwrap();
        }
        assert!(t.is_solved(PegId::middle()));
        assert_eq!(t.stack(PegId::middle()), &[Disk(2), Disk(1), Disk(0)]);
    }

    #[test]
    fn test_unsolved_in_wrong_order() {
        let mut t = Towers::new(2, PegId::left());
        t.apply_move(mv(0, 1), Direction::Forward).unwrap();
        assert!(!t.is_solved(PegId::left()));
        assert!(!t.is_solved(PegId::middle()));
    }

    fn peg_permutation() -> impl Strategy<Value = (PegId, PegId, PegId)> {
        select(vec![
            (0, 1, 2),
            (0, 2, 1),
            (1, 0, 2),
            (1, 2, 0),
            (2, 0, 1),
            (2, 1, 0),
        ])
        .prop_map(|(a, b, c)| {
            (
                PegId::new(a).unwrap(),
                PegId::new(b).unwrap(),
                PegId::new(c).unwrap(),
            )
        })
    }

    proptest! {
        #[test]
        fn test_replay_keeps_invariants(n in 1u8..11, (src, dst, spare) in peg_permutation()) {
            let moves = solve(n, src, dst, spare);
            prop_assert_eq!(moves.len(), (1usize << n) - 1);

            let mut t = Towers::new(n, src);
            for m in &moves {
                prop_assert!(t.apply_move(*m, Direction::Forward).is_ok());
                prop_assert!(t.is_consistent());
            }
            prop_assert!(t.is_solved(dst));
        }

        #[test]
        fn test_replay_backward_restores_start(n in 1u8..9, (src, dst, spare) in peg_permutation()) {
            let moves = solve(n, src, dst, spare);
            let mut t = Towers::new(n, src);
            for m in &moves {
                t.apply_move(*m, Direction::Forward).unwrap();
            }
            for m in moves.iter().rev() {
                t.apply_move(*m, Direction::Backward).unwrap();
            }
            prop_assert_eq!(t, Towers::new(n, src));
        }
    }
}
