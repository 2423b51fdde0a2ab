//! A chess board session: position, selection and move history

use super::mapper::{on_square_clicked, square_from_pixel};
use super::oracle::RulesOracle;
use super::types::{BoardPosition, Color, MoveRequest};

/// Immutable view handed to the display
#[derive(Debug, Clone, PartialEq)]
pub struct ChessSnapshot<P> {
    pub position: P,
    pub selection: Option<BoardPosition>,
    pub to_move: Color,
    pub last_move: Option<MoveRequest>,
}

/// Owns the position exclusively; only the oracle may produce a new one
#[derive(Debug, Clone)]
pub struct ChessSession<O: RulesOracle> {
    oracle: O,
    position: O::Position,
    selection: Option<BoardPosition>,
    board_pixels: u32,
    history: Vec<MoveRequest>,
}

impl<O: RulesOracle> ChessSession<O> {
    pub fn new(oracle: O, position: O::Position, board_pixels: u32) -> Self {
        Self {
            oracle,
            position,
            selection: None,
            board_pixels,
            history: Vec::new(),
        }
    }

    /// Handle a pointer click in display pixels. Clicks off the board are ignored.
    pub fn click_pixel(&mut self, x: u32, y: u32) -> Option<MoveRequest> {
        match square_from_pixel(x, y, self.board_pixels) {
            Some(square) => self.click_square(square),
            None => {
                log::debug!("Click at ({x}, {y}) is off the board");
                None
            }
        }
    }

    /// Handle a click on `square`; returns the move applied, if any
    pub fn click_square(&mut self, square: BoardPosition) -> Option<MoveRequest> {
        let to_move = self.to_move();
        let previous = self.selection;
        let outcome =
            on_square_clicked(square, previous, &self.position, to_move, &self.oracle);
        self.selection = outcome.selection;

        match (previous, outcome.mv) {
            (_, Some(mv)) => {
                self.position = self.oracle.apply_move(&self.position, &mv);
                self.history.push(mv);
                log::info!("{to_move} plays {mv}");
            }
            (Some(from), None) => log::debug!("Rejected {from}->{square} for {to_move}"),
            (None, None) => match outcome.selection {
                Some(sel) => log::debug!("Selected {sel}"),
                None => log::debug!("Nothing selectable on {square}"),
            },
        }
        outcome.mv
    }

    pub fn to_move(&self) -> Color {
        self.oracle.side_to_move(&self.position)
    }

    pub fn selection(&self) -> Option<BoardPosition> {
        self.selection
    }

    pub fn position(&self) -> &O::Position {
        &self.position
    }

    /// Moves applied so far, oldest first
    pub fn history(&self) -> &[MoveRequest] {
        &self.history
    }

    pub fn snapshot(&self) -> ChessSnapshot<O::Position> {
        ChessSnapshot {
            position: self.position.clone(),
            selection: self.selection,
            to_move: self.to_move(),
            last_move: self.history.last().copied(),
        }
    }
}
