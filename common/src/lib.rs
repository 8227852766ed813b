pub mod peg;
pub mod playback;
pub mod towers;

use std::fmt::Display;

pub use crate::peg::{NR_PEGS, PegId};

/// Largest puzzle the frontend and the command line tool accept.
pub const MAX_DISKS: u8 = 20;
/// Puzzle size shown when nothing else is requested.
pub const DEFAULT_DISKS: u8 = 8;

/// A disk on the board. Larger numbers are larger disks, so with `n` disks
/// the bottom disk of the starting peg is `Disk(n - 1)`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord)]
pub struct Disk(pub u8);

impl Display for Disk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Take the top disk from `src` and put it onto `dst`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Move {
    pub src: PegId,
    pub dst: PegId,
}

impl Move {
    pub fn new(src: PegId, dst: PegId) -> Self {
        Self { src, dst }
    }

    /// The move that undoes this one.
    pub fn reversed(self) -> Self {
        Self {
            src: self.dst,
            dst: self.src,
        }
    }
}

#[cfg(test)]
impl Move {
    /// Build a move from raw peg labels, `None` if a label is out of range.
    pub(crate) fn from_labels(src: u8, dst: u8) -> Option<Self> {
        Some(Self {
            src: PegId::new(src)?,
            dst: PegId::new(dst)?,
        })
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.src, self.dst)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    Forward,
    Backward,
}

/// Number of moves in the solution for `n` disks, i.e. `2^n - 1`.
///
/// `n` must not exceed [MAX_DISKS]; the count overflows a 32 bit `usize`
/// from 32 disks on.
pub fn nr_moves(n: u8) -> usize {
    debug_assert!(n <= MAX_DISKS, "{n} disks is more than the supported {MAX_DISKS}");
    (1usize << n) - 1
}

/// Compute the moves that bring a stack of `n` disks from `src` to `dst`,
/// using `spare` as intermediate storage.
///
/// The first `n - 1` disks go to the spare peg, the largest disk goes to the
/// destination and then the `n - 1` disks are moved on top of it. An empty
/// stack needs no moves.
///
/// The result holds `2^n - 1` moves, so `n` is limited to [MAX_DISKS].
pub fn solve(n: u8, src: PegId, dst: PegId, spare: PegId) -> Vec<Move> {
    let mut moves = Vec::with_capacity(nr_moves(n));
    solve_into(n, src, dst, spare, &mut moves);
    moves
}

/// [solve] with the usual labelling: from peg 0 to peg 1 via peg 2.
pub fn solve_default(n: u8) -> Vec<Move> {
    solve(n, PegId::left(), PegId::middle(), PegId::right())
}

fn solve_into(n: u8, src: PegId, dst: PegId, spare: PegId, out: &mut Vec<Move>) {
    if n == 0 {
        return;
    }
    solve_into(n - 1, src, spare, dst, out);
    out.push(Move::new(src, dst));
    solve_into(n - 1, spare, dst, src, out);
}
