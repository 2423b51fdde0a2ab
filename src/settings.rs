//! Game settings
//!
//! Loaded from an optional JSON file. Missing fields fall back to the
//! defaults in [`crate::consts`], so a file only needs the values it changes.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Error loading or validating settings
#[derive(Debug)]
pub enum SettingsError {
    /// Settings file could not be read
    Io(std::io::Error),
    /// Settings file is not valid JSON for [`Settings`]
    Parse(serde_json::Error),
    /// Values parse but make no sense together
    Invalid(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "cannot read settings: {e}"),
            SettingsError::Parse(e) => write!(f, "malformed settings: {e}"),
            SettingsError::Invalid(msg) => write!(f, "invalid settings: {msg}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
            SettingsError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

/// Pong field, paddle and ball dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PongSettings {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Gap between a side edge of the field and the paddle
    pub paddle_margin: f32,
    /// Pixels per tick
    pub paddle_speed: f32,

    // === Ball ===
    pub ball_width: f32,
    pub ball_height: f32,
    /// Per-axis pixels per tick
    pub ball_speed: f32,

    /// Simulation ticks per second
    pub tick_rate_hz: u32,
}

impl Default for PongSettings {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_margin: PADDLE_MARGIN,
            paddle_speed: PADDLE_SPEED,

            ball_width: BALL_WIDTH,
            ball_height: BALL_HEIGHT,
            ball_speed: BALL_SPEED,

            tick_rate_hz: PONG_TICK_RATE,
        }
    }
}

impl PongSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        let dims = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_width", self.ball_width),
            ("ball_height", self.ball_height),
            ("ball_speed", self.ball_speed),
        ];
        for (name, value) in dims {
            if !value.is_finite() || value <= 0.0 {
                return Err(SettingsError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }
        if !self.paddle_margin.is_finite() || self.paddle_margin < 0.0 {
            return Err(SettingsError::Invalid(format!(
                "paddle_margin must not be negative, got {}",
                self.paddle_margin
            )));
        }
        if self.paddle_height > self.field_height || self.ball_height > self.field_height {
            return Err(SettingsError::Invalid(
                "paddles and ball must fit inside the field height".to_string(),
            ));
        }
        // Left paddle's front edge must stay left of the right paddle
        if 2.0 * (self.paddle_margin + self.paddle_width) >= self.field_width {
            return Err(SettingsError::Invalid(
                "paddles overlap: field too narrow for margin and width".to_string(),
            ));
        }
        if self.tick_rate_hz == 0 {
            return Err(SettingsError::Invalid("tick_rate_hz must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Chess board display geometry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChessSettings {
    /// Edge length of the square board in pixels
    pub board_pixels: u32,
}

impl Default for ChessSettings {
    fn default() -> Self {
        Self {
            board_pixels: BOARD_PIXELS,
        }
    }
}

impl ChessSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.board_pixels < 8 {
            return Err(SettingsError::Invalid(format!(
                "board_pixels must be at least 8, got {}",
                self.board_pixels
            )));
        }
        Ok(())
    }
}

/// All settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub pong: PongSettings,
    pub chess: ChessSettings,
}

impl Settings {
    /// Parse and validate settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, SettingsError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        self.pong.validate()?;
        self.chess.validate()
    }
}
