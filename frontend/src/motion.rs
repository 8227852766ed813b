use common::playback::Step;

use crate::layout::{Geometry, Rect};

/// The three legs a disk travels during one move. Every leg changes only one
/// coordinate, so the disk never passes through the other stacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Straight up from the source stack.
    Lift,
    /// Across to above the destination peg.
    Carry,
    /// Down onto the destination stack.
    Drop,
}

impl Phase {
    pub const ALL: [Phase; 3] = [Phase::Lift, Phase::Carry, Phase::Drop];

    pub fn next(self) -> Option<Phase> {
        match self {
            Phase::Lift => Some(Phase::Carry),
            Phase::Carry => Some(Phase::Drop),
            Phase::Drop => None,
        }
    }
}

/// Target position of the moving disk at the end of `phase`.
pub fn waypoint(geometry: &Geometry, step: &Step, phase: Phase) -> Rect {
    match phase {
        Phase::Lift => geometry.lifted_rect(step.mv.src, step.disk),
        Phase::Carry => geometry.lifted_rect(step.mv.dst, step.disk),
        Phase::Drop => geometry.disk_rect(step.mv.dst, step.to_level, step.disk),
    }
}

/// How long each leg takes when the whole move should last `total_ms`.
pub fn phase_duration_ms(total_ms: u32) -> u32 {
    total_ms / Phase::ALL.len() as u32
}

#[cfg(test)]
mod tests {
    use common::{Direction, PegId, playback::Playback};

    use super::*;

    fn first_step(n: u8) -> (Geometry, Step) {
        let mut playback = Playback::new(n);
        let step = playback.step(Direction::Forward).unwrap();
        (Geometry::for_disks(n), step)
    }

    #[test]
    fn test_each_leg_changes_one_coordinate() {
        let (g, step) = first_step(3);
        let start = g.disk_rect(step.mv.src, 2, step.disk);

        let lift = waypoint(&g, &step, Phase::Lift);
        assert_eq!(lift.left, start.left);
        assert!(lift.top < start.top);

        let carry = waypoint(&g, &step, Phase::Carry);
        assert_eq!(carry.top, lift.top);
        assert_ne!(carry.left, lift.left);

        let drop = waypoint(&g, &step, Phase::Drop);
        assert_eq!(drop.left, carry.left);
        assert!(drop.top > carry.top);
    }

    #[test]
    fn test_drop_ends_on_destination_stack() {
        let (g, step) = first_step(3);
        assert_eq!(step.mv.dst, PegId::middle());
        assert_eq!(
            waypoint(&g, &step, Phase::Drop),
            g.disk_rect(PegId::middle(), 0, step.disk)
        );
    }

    #[test]
    fn test_phase_order() {
        assert_eq!(Phase::Lift.next(), Some(Phase::Carry));
        assert_eq!(Phase::Carry.next(), Some(Phase::Drop));
        assert_eq!(Phase::Drop.next(), None);
        assert_eq!(phase_duration_ms(999), 333);
    }
}
