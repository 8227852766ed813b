use std::rc::Rc;

use common::{
    DEFAULT_DISKS, Direction, MAX_DISKS,
    playback::{Playback, Step},
};
use yew::Reducible;

/// Delay between two automatic steps, in milliseconds.
pub const DEFAULT_SPEED_MS: u32 = 1010;
pub const SPEEDS_MS: [u32; 4] = [2020, DEFAULT_SPEED_MS, 500, 200];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackAction {
    Step { dir: Direction },
    /// Sent by the interval timer while playing.
    Tick,
    Play,
    Pause,
    Reset,
    Seek { position: usize },
    SetDiskCount { n: u8 },
    SetSpeed { speed_ms: u32 },
}

/// Animation state as seen from the user interface. The interaction with this
/// state happens through [PlaybackAction]s that are sent to Yew's
/// [`use_reducer`](https://docs.rs/yew/0.21.0/yew/functional/fn.use_reducer.html)
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    playback: Playback,
    pub playing: bool,
    pub speed_ms: u32,
    /// The most recent step, animated by the board. `None` after jumps, which
    /// are not animated.
    pub last_step: Option<Step>,
}

impl PlaybackState {
    pub fn new(nr_disks: u8) -> Self {
        Self {
            playback: Playback::new(nr_disks.clamp(1, MAX_DISKS)),
            playing: false,
            speed_ms: DEFAULT_SPEED_MS,
            last_step: None,
        }
    }

    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    pub fn nr_disks(&self) -> u8 {
        self.playback.towers().nr_disks()
    }

    pub fn can_step(&self, dir: Direction) -> bool {
        match dir {
            Direction::Forward => !self.playback.is_finished(),
            Direction::Backward => !self.playback.is_at_start(),
        }
    }

    fn step(&mut self, dir: Direction) {
        self.last_step = self.playback.step(dir);
        if let Some(step) = self.last_step {
            log::debug!(
                "move {}/{}: disk {} {} to level {}",
                self.playback.position(),
                self.playback.len(),
                step.disk,
                step.mv,
                step.to_level
            );
        }
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new(DEFAULT_DISKS)
    }
}

impl Reducible for PlaybackState {
    type Action = PlaybackAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        log::debug!("Reducing with action {action:?}");

        match action {
            PlaybackAction::Step { dir } => {
                if !self.can_step(dir) {
                    return self;
                }
                let mut state = (*self).clone();
                // stepping by hand takes over from the timer
                state.playing = false;
                state.step(dir);
                state.into()
            }
            PlaybackAction::Tick => {
                if !self.playing {
                    // a tick that was already scheduled before pausing
                    return self;
                }
                let mut state = (*self).clone();
                state.step(Direction::Forward);
                if state.playback.is_finished() {
                    log::info!("solved {} disks", state.nr_disks());
                    state.playing = false;
                }
                state.into()
            }
            PlaybackAction::Play => {
                if self.playing {
                    return self;
                }
                let mut state = (*self).clone();
                if state.playback.is_finished() {
                    state.playback.rewind();
                    state.last_step = None;
                }
                state.playing = true;
                state.into()
            }
            PlaybackAction::Pause => {
                if !self.playing {
                    return self;
                }
                let mut state = (*self).clone();
                state.playing = false;
                state.into()
            }
            PlaybackAction::Reset => {
                log::info!("reset");
                let mut state = (*self).clone();
                state.playback.rewind();
                state.playing = false;
                state.last_step = None;
                state.into()
            }
            PlaybackAction::Seek { position } => {
                if position == self.playback.position() {
                    return self;
                }
                let mut state = (*self).clone();
                state.playing = false;
                state.last_step = None;
                let steps = state.playback.seek(position);
                log::debug!("seeked to move {} in {steps} steps", state.playback.position());
                state.into()
            }
            PlaybackAction::SetDiskCount { n } => {
                let n = n.clamp(1, MAX_DISKS);
                if n == self.nr_disks() {
                    return self;
                }
                log::info!("switching to {n} disks ({} moves)", common::nr_moves(n));
                let mut state = PlaybackState::new(n);
                state.speed_ms = self.speed_ms;
                state.into()
            }
            PlaybackAction::SetSpeed { speed_ms } => {
                if speed_ms == 0 || speed_ms == self.speed_ms {
                    return self;
                }
                let mut state = (*self).clone();
                state.speed_ms = speed_ms;
                state.into()
            }
        }
    }
}
