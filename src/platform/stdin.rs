//! Line-based pointer input
//!
//! One click per line: `x y`, `x,y` or an algebraic square such as `e2`
//! (clicked at the centre of its tile). Unreadable lines are skipped; `quit`
//! or end of input stops the loop.

use std::io::{BufRead, ErrorKind};

use crate::chess::{BoardPosition, square_center_pixel};
use crate::driver::{InputFrame, InputSource};

/// Parse one line into a pixel position on a `board_pixels` board
pub fn parse_click(line: &str, board_pixels: u32) -> Option<(u32, u32)> {
    let line = line.trim();
    if let Ok(square) = line.parse::<BoardPosition>() {
        return Some(square_center_pixel(square, board_pixels));
    }
    let mut parts = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty());
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((x, y))
}

/// Blocking click source reading from any buffered reader
#[derive(Debug)]
pub struct LineClicks<R> {
    reader: R,
    board_pixels: u32,
}

impl<R: BufRead> LineClicks<R> {
    pub fn new(reader: R, board_pixels: u32) -> Self {
        Self {
            reader,
            board_pixels,
        }
    }
}

impl<R: BufRead> InputSource for LineClicks<R> {
    fn poll(&mut self) -> InputFrame {
        let mut line = String::new();
        loop {
            line.clear();
            match self.reader.read_line(&mut line) {
                Ok(0) => return InputFrame::quit(),
                Ok(_) => {}
                // read_line already consumed the bad bytes
                Err(e) if e.kind() == ErrorKind::InvalidData => {
                    log::warn!("Ignoring line that is not UTF-8: {e}");
                    continue;
                }
                Err(e) => {
                    log::warn!("Input closed: {e}");
                    return InputFrame::quit();
                }
            }

            let text = line.trim();
            if text.is_empty() {
                continue;
            }
            if matches!(text, "quit" | "q" | "exit") {
                return InputFrame::quit();
            }
            match parse_click(text, self.board_pixels) {
                Some((x, y)) => return InputFrame::click(x, y),
                None => log::warn!("Ignoring unreadable click {text:?}"),
            }
        }
    }
}
