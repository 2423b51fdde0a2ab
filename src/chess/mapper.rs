//! Click-to-move translation
//!
//! Two clicks make a move: the first selects one of the mover's pieces, the
//! second names the destination. Whatever the second click does, the
//! selection is cleared afterwards.

use serde::{Deserialize, Serialize};

use super::oracle::RulesOracle;
use super::types::{BoardPosition, Color, MoveRequest, Piece, PieceKind};

/// Result of handling one square click
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickOutcome {
    /// Selection after the click
    pub selection: Option<BoardPosition>,
    /// Legal move for the caller to apply, if the click completed one
    pub mv: Option<MoveRequest>,
}

/// Handle a click on `square` given the current selection.
///
/// Pawn moves onto rank 0 or 7 always request a queen; under-promotion is not
/// reachable through clicks. Illegal moves are dropped without error.
pub fn on_square_clicked<O: RulesOracle>(
    square: BoardPosition,
    selection: Option<BoardPosition>,
    position: &O::Position,
    to_move: Color,
    oracle: &O,
) -> ClickOutcome {
    let Some(from) = selection else {
        let selection = oracle
            .piece_at(position, square)
            .filter(|piece| piece.color == to_move)
            .map(|_| square);
        return ClickOutcome {
            selection,
            mv: None,
        };
    };

    let own_pawn = Piece::new(PieceKind::Pawn, to_move);
    let is_promotion =
        oracle.piece_at(position, from) == Some(own_pawn) && matches!(square.rank(), 0 | 7);

    let mv = MoveRequest {
        from,
        to: square,
        promotion: is_promotion.then_some(PieceKind::Queen),
    };

    ClickOutcome {
        selection: None,
        mv: oracle.is_legal(position, &mv).then_some(mv),
    }
}

/// Square under pixel (`x`, `y`) on a `board_pixels` x `board_pixels` display.
///
/// Rank 0 is drawn at the bottom. Pixels past the last whole tile map to
/// `None`.
pub fn square_from_pixel(x: u32, y: u32, board_pixels: u32) -> Option<BoardPosition> {
    let tile = board_pixels / 8;
    if tile == 0 {
        return None;
    }
    let col = x / tile;
    let row = y / tile;
    if col >= 8 || row >= 8 {
        return None;
    }
    BoardPosition::new(col as u8, 7 - row as u8)
}

/// Pixel at the centre of `square`'s tile
pub fn square_center_pixel(square: BoardPosition, board_pixels: u32) -> (u32, u32) {
    let tile = board_pixels / 8;
    let x = u32::from(square.file()) * tile + tile / 2;
    let y = u32::from(7 - square.rank()) * tile + tile / 2;
    (x, y)
}
