//! Platform collaborators
//!
//! Headless input sources and display sinks for the game loop:
//! - Scripted input (tests, demo runs)
//! - Line-based click input from any reader (stdin)
//! - Log and plain-text displays

mod scripted;
mod sinks;
mod stdin;

pub use scripted::ScriptedInput;
pub use sinks::{BoardTextSink, PongLogSink};
pub use stdin::{LineClicks, parse_click};
