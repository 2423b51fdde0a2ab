//! A running Pong match: state plus its serve randomness

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::serve::ServeRandom;
use super::state::MatchState;
use super::tick::{TickInput, TickOutcome, tick};
use crate::settings::PongSettings;

/// Owns one match exclusively; the outside world only gets copies of the state
#[derive(Debug, Clone)]
pub struct PongSession<R = Pcg32> {
    state: MatchState,
    rng: R,
    ticks: u64,
}

impl PongSession<Pcg32> {
    /// Start a match whose serves are fully determined by `seed`
    pub fn new(settings: &PongSettings, seed: u64) -> Self {
        Self::with_rng(settings, Pcg32::seed_from_u64(seed))
    }
}

impl<R: ServeRandom> PongSession<R> {
    pub fn with_rng(settings: &PongSettings, mut rng: R) -> Self {
        let state = MatchState::new(settings, &mut rng);
        Self {
            state,
            rng,
            ticks: 0,
        }
    }

    /// Advance one tick
    pub fn step(&mut self, input: &TickInput) -> TickOutcome {
        self.ticks += 1;
        tick(&mut self.state, input, &mut self.rng)
    }

    /// Snapshot of the current state
    pub fn state(&self) -> MatchState {
        self.state
    }

    /// Ticks simulated so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
