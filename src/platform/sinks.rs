//! Headless display sinks

use std::fmt::Display;
use std::io::Write;

use crate::chess::ChessSnapshot;
use crate::driver::DisplaySink;
use crate::sim::{MatchState, Score};

/// Logs the score whenever it changes; full state at trace level
#[derive(Debug, Default)]
pub struct PongLogSink {
    last_score: Option<Score>,
    frames: u64,
}

impl PongLogSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent score presented
    pub fn last_score(&self) -> Option<Score> {
        self.last_score
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl DisplaySink<MatchState> for PongLogSink {
    fn present(&mut self, state: &MatchState) {
        self.frames += 1;
        log::trace!(
            "ball=({:.1}, {:.1}) left_y={:.1} right_y={:.1}",
            state.ball.pos.x,
            state.ball.pos.y,
            state.left.pos.y,
            state.right.pos.y
        );
        if self.last_score != Some(state.score) {
            log::info!("Score {} : {}", state.score.left, state.score.right);
            self.last_score = Some(state.score);
        }
    }
}

/// Writes the board as text after every change
#[derive(Debug)]
pub struct BoardTextSink<W> {
    out: W,
}

impl<W: Write> BoardTextSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_snapshot<P: Display>(&mut self, snap: &ChessSnapshot<P>) -> std::io::Result<()> {
        writeln!(self.out, "{}", snap.position)?;
        if let Some(mv) = snap.last_move {
            writeln!(self.out, "last move: {mv}")?;
        }
        match snap.selection {
            Some(square) => writeln!(self.out, "{} to move, selected {square}", snap.to_move)?,
            None => writeln!(self.out, "{} to move", snap.to_move)?,
        }
        writeln!(self.out)?;
        self.out.flush()
    }
}

impl<W: Write, P: Display> DisplaySink<ChessSnapshot<P>> for BoardTextSink<W> {
    fn present(&mut self, snap: &ChessSnapshot<P>) {
        if let Err(e) = self.write_snapshot(snap) {
            log::warn!("Failed to draw board: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::{BasicRules, Board, ChessSession};
    use crate::settings::PongSettings;
    use crate::sim::PongSession;

    #[test]
    fn test_pong_sink_tracks_score() {
        let session = PongSession::new(&PongSettings::default(), 1);
        let mut sink = PongLogSink::new();
        let mut state = session.state();

        sink.present(&state);
        assert_eq!(sink.last_score(), Some(Score::default()));

        state.score.left = 2;
        sink.present(&state);
        assert_eq!(sink.last_score().map(|s| s.left), Some(2));
        assert_eq!(sink.frames(), 2);
    }

    #[test]
    fn test_board_text_output() {
        let mut session = ChessSession::new(BasicRules, Board::starting(), 800);
        let mut sink = BoardTextSink::new(Vec::new());

        sink.present(&session.snapshot());
        session.click_square("e2".parse().unwrap());
        sink.present(&session.snapshot());
        session.click_square("e4".parse().unwrap());
        sink.present(&session.snapshot());

        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert!(text.starts_with("8 r n b q k b n r"));
        assert!(text.contains("white to move, selected e2"));
        assert!(text.contains("last move: e2e4"));
        assert!(text.contains("black to move"));
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("display gone"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_errors_are_swallowed() {
        let session = ChessSession::new(BasicRules, Board::starting(), 800);
        let mut sink = BoardTextSink::new(Broken);
        sink.present(&session.snapshot());
    }
}
