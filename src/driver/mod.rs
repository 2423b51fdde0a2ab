//! Game loop driver
//!
//! Connects an input source, a simulation and a display sink:
//! - poll one input frame
//! - stop if it asks to quit
//! - advance the simulation
//! - present a snapshot if anything changed
//!
//! Everything runs on the calling thread. The simulation is owned by the
//! caller and only borrowed for the duration of the loop.

mod pacing;

pub use pacing::Pacing;
use pacing::Ticker;

use crate::chess::{ChessSession, ChessSnapshot, RulesOracle};
use crate::sim::{MatchState, PongSession, ServeRandom, TickInput};

/// Everything the input source gathered since the previous iteration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputFrame {
    /// Movement keys currently held
    pub held: TickInput,
    /// Pointer clicks in display pixels, oldest first
    pub clicks: Vec<(u32, u32)>,
    /// Window closed / user asked to stop
    pub quit: bool,
}

impl InputFrame {
    pub fn quit() -> Self {
        Self {
            quit: true,
            ..Default::default()
        }
    }

    pub fn held(held: TickInput) -> Self {
        Self {
            held,
            ..Default::default()
        }
    }

    pub fn click(x: u32, y: u32) -> Self {
        Self {
            clicks: vec![(x, y)],
            ..Default::default()
        }
    }
}

/// Produces input frames (keyboard/pointer/window events)
pub trait InputSource {
    fn poll(&mut self) -> InputFrame;
}

/// Consumes snapshots for drawing. Must not block the simulation on failure.
pub trait DisplaySink<S> {
    fn present(&mut self, snapshot: &S);
}

/// Something the driver can step
pub trait Simulation {
    type Snapshot;

    /// Process one input frame; returns true if visible state changed
    fn advance(&mut self, frame: &InputFrame) -> bool;

    fn snapshot(&self) -> Self::Snapshot;
}

/// Counters from a finished loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Input frames processed (the quitting frame excluded)
    pub frames: u64,
    /// Snapshots handed to the sink, the initial one included
    pub presented: u64,
}

/// Run until the input source reports quit
pub fn run<I, S, D>(input: &mut I, sim: &mut S, sink: &mut D, pacing: Pacing) -> RunSummary
where
    I: InputSource,
    S: Simulation,
    D: DisplaySink<S::Snapshot>,
{
    let mut summary = RunSummary::default();
    let mut ticker = Ticker::new(pacing);

    sink.present(&sim.snapshot());
    summary.presented += 1;

    loop {
        let frame = input.poll();
        if frame.quit {
            log::info!("Quit requested after {} frames", summary.frames);
            break;
        }

        if sim.advance(&frame) {
            sink.present(&sim.snapshot());
            summary.presented += 1;
        }
        summary.frames += 1;

        ticker.wait();
    }

    summary
}

impl<R: ServeRandom> Simulation for PongSession<R> {
    type Snapshot = MatchState;

    fn advance(&mut self, frame: &InputFrame) -> bool {
        let outcome = self.step(&frame.held);
        if let Some(side) = outcome.scored {
            let score = self.state().score;
            log::info!(
                "{side:?} scores past {:?} at tick {} ({} - {})",
                side.opponent(),
                self.ticks(),
                score.left,
                score.right
            );
        } else if let Some(side) = outcome.paddle_bounce {
            log::debug!("Ball returned by {side:?} paddle");
        }
        if outcome.wall_bounce {
            log::trace!("Wall bounce at tick {}", self.ticks());
        }
        // The ball moves every tick
        true
    }

    fn snapshot(&self) -> MatchState {
        self.state()
    }
}

impl<O: RulesOracle> Simulation for ChessSession<O> {
    type Snapshot = ChessSnapshot<O::Position>;

    fn advance(&mut self, frame: &InputFrame) -> bool {
        let mut changed = false;
        for &(x, y) in &frame.clicks {
            let selection = self.selection();
            let moved = self.click_pixel(x, y).is_some();
            changed |= moved || selection != self.selection();
        }
        changed
    }

    fn snapshot(&self) -> Self::Snapshot {
        ChessSession::snapshot(self)
    }
}
