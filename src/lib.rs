//! Tabletop Arcade - Pong simulation and chess board core
//!
//! Core modules:
//! - `sim`: Deterministic Pong simulation (paddles, ball, walls, scoring)
//! - `chess`: Click-to-move mapping on top of a pluggable rules oracle
//! - `driver`: Fixed-rate / event-driven game loop
//! - `platform`: Headless input sources and display sinks
//! - `settings`: JSON-loadable configuration

pub mod chess;
pub mod driver;
pub mod platform;
pub mod settings;
pub mod sim;

pub use settings::{ChessSettings, PongSettings, Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Pong tick rate (Hz)
    pub const PONG_TICK_RATE: u32 = 60;

    /// Play field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Distance from the side edge of the field to the paddle's outer side
    pub const PADDLE_MARGIN: f32 = 50.0;
    /// Pixels per tick while a movement key is held
    pub const PADDLE_SPEED: f32 = 10.0;

    /// Ball defaults
    pub const BALL_WIDTH: f32 = 10.0;
    pub const BALL_HEIGHT: f32 = 10.0;
    /// Per-axis speed (pixels per tick) after every serve
    pub const BALL_SPEED: f32 = 7.0;

    /// Chess board edge length in pixels (square board, 8x8 tiles)
    pub const BOARD_PIXELS: u32 = 800;
}
