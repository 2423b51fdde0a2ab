use std::collections::VecDeque;

use crate::driver::{InputFrame, InputSource};

/// Replays a fixed list of frames, then quits
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<InputFrame>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = InputFrame>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// The same frame `count` times
    pub fn repeat(frame: InputFrame, count: usize) -> Self {
        Self::new(std::iter::repeat_n(frame, count))
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> InputFrame {
        self.frames.pop_front().unwrap_or_else(InputFrame::quit)
    }
}
