//! Rules oracle interface
//!
//! The board front-end never decides chess rules itself. Legality, move
//! application and piece lookup all go through this trait so a different
//! rule set can be plugged in without touching the click handling.

use super::types::{BoardPosition, Color, MoveRequest, Piece};

pub trait RulesOracle {
    /// Position representation understood by this oracle
    type Position: Clone;

    fn piece_at(&self, position: &Self::Position, square: BoardPosition) -> Option<Piece>;

    fn side_to_move(&self, position: &Self::Position) -> Color;

    fn is_legal(&self, position: &Self::Position, mv: &MoveRequest) -> bool;

    /// Position after `mv`. Only called with moves `is_legal` accepted.
    fn apply_move(&self, position: &Self::Position, mv: &MoveRequest) -> Self::Position;
}
