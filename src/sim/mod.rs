//! Deterministic Pong simulation
//!
//! All match logic lives here. This module must stay pure and deterministic:
//! - Fixed timestep only
//! - Injected serve randomness only
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod serve;
pub mod session;
pub mod state;
pub mod tick;

pub use collision::{hits_wall, paddle_contact, scoring_side};
pub use rect::Rect;
pub use serve::{ServeRandom, serve_velocity};
pub use session::PongSession;
pub use state::{Ball, MatchState, Paddle, Score, Side};
pub use tick::{PaddleInput, TickInput, TickOutcome, tick};
