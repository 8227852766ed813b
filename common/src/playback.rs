use std::rc::Rc;

use crate::{Direction, Disk, Move, PegId, solve_default, towers::Towers};

/// Walks through a precomputed solution, keeping a mirror of the peg stacks
/// in sync with the current position.
#[derive(Clone, Debug, PartialEq)]
pub struct Playback {
    moves: Rc<[Move]>,
    towers: Towers,
    /// Number of moves that have been applied to `towers`.
    position: usize,
}

/// A single move as it was carried out. The renderer lifts `disk` off
/// `mv.src`, carries it over to `mv.dst` and drops it at `to_level`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub disk: Disk,
    /// Already reversed for backward steps.
    pub mv: Move,
    /// Level of the disk on the destination peg after the step.
    pub to_level: usize,
}

impl Playback {
    /// Solve the `n` disk puzzle from peg 0 to peg 1 and start at the
    /// beginning of the solution.
    pub fn new(n: u8) -> Self {
        Self::from_moves(n, PegId::left(), solve_default(n))
    }

    pub fn from_moves(n: u8, start: PegId, moves: Vec<Move>) -> Self {
        Self {
            moves: moves.into(),
            towers: Towers::new(n, start),
            position: 0,
        }
    }

    pub fn towers(&self) -> &Towers {
        &self.towers
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn is_at_start(&self) -> bool {
        self.position == 0
    }

    pub fn is_finished(&self) -> bool {
        self.position == self.moves.len()
    }

    /// The move that a forward step would perform.
    pub fn next_move(&self) -> Option<Move> {
        self.moves.get(self.position).copied()
    }

    /// Advance or rewind by one move. Returns `None` if there is nothing left
    /// to do in the given direction.
    pub fn step(&mut self, dir: Direction) -> Option<Step> {
        let (mv, next_position) = match dir {
            Direction::Forward => (*self.moves.get(self.position)?, self.position + 1),
            Direction::Backward => (
                *self.moves.get(self.position.checked_sub(1)?)?,
                self.position - 1,
            ),
        };
        let performed = match dir {
            Direction::Forward => mv,
            Direction::Backward => mv.reversed(),
        };

        let disk = match self.towers.apply_move(mv, dir) {
            Ok(disk) => disk,
            Err(e) => {
                // only reachable if the move list doesn't belong to the towers
                log::warn!("Move list out of sync with towers: {e:#}");
                return None;
            }
        };
        let to_level = self.towers.height(performed.dst) - 1;
        self.position = next_position;

        Some(Step {
            disk,
            mv: performed,
            to_level,
        })
    }

    /// Jump to an absolute position in the sequence, clamped to the valid
    /// range. Returns the number of moves that were applied.
    pub fn seek(&mut self, position: usize) -> usize {
        let target = position.min(self.moves.len());
        let mut count = 0;
        while self.position < target && self.step(Direction::Forward).is_some() {
            count += 1;
        }
        while self.position > target && self.step(Direction::Backward).is_some() {
            count += 1;
        }
        count
    }

    /// Rewind to the beginning without recomputing the solution.
    pub fn rewind(&mut self) {
        self.seek(0);
    }
}
