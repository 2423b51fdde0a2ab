//! Full chess rules backed by `shakmaty`
//!
//! Legality is decided by the engine's legal move list, so check, pins,
//! castling, en passant and promotion all follow standard rules. Castling is
//! requested the usual way, by moving the king two squares.

use std::fmt;

use shakmaty::fen::Fen;
use shakmaty::san::San;
use shakmaty::uci::UciMove;
use shakmaty::{CastlingMode, Chess, EnPassantMode, Move, Outcome, Position, Role, Square};

use super::board::{Board, FenError};
use super::oracle::RulesOracle;
use super::types::{BoardPosition, Color, MoveRequest, Piece, PieceKind};

/// A legal chess position including castling rights, en passant and clocks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StandardPosition(Chess);

impl StandardPosition {
    pub fn starting() -> Self {
        Self::default()
    }

    /// Parse a FEN string. Missing trailing fields default to no castling,
    /// no en passant square and fresh clocks.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parsed: Fen = fen
            .trim()
            .parse()
            .map_err(|e| FenError::new(format!("{e}")))?;
        let chess = parsed
            .into_position(CastlingMode::Standard)
            .map_err(|e| FenError::new(format!("{e}")))?;
        Ok(Self(chess))
    }

    /// Full six-field FEN
    pub fn to_fen(&self) -> String {
        Fen::from_position(&self.0, EnPassantMode::Legal).to_string()
    }

    pub fn get(&self, square: BoardPosition) -> Option<Piece> {
        self.0.board().piece_at(to_square(square)).map(|piece| {
            Piece::new(
                kind_from_role(piece.role),
                color_from_engine(piece.color),
            )
        })
    }

    pub fn turn(&self) -> Color {
        color_from_engine(self.0.turn())
    }

    pub fn is_check(&self) -> bool {
        self.0.is_check()
    }

    /// `1-0`, `0-1`, `1/2-1/2`, or `*` while the game is still going
    pub fn outcome(&self) -> Outcome {
        self.0.outcome()
    }

    /// Piece placement and side to move as a movement-only [`Board`]
    pub fn to_board(&self) -> Board {
        let mut board = Board::empty(self.turn());
        for square in BoardPosition::all() {
            board.put(square, self.get(square));
        }
        board
    }

    /// The engine move matching `mv` in standard UCI form, if legal here
    fn find_legal(&self, mv: &MoveRequest) -> Option<Move> {
        let wanted = UciMove::Normal {
            from: to_square(mv.from),
            to: to_square(mv.to),
            promotion: mv.promotion.map(role_from_kind),
        };
        self.0
            .legal_moves()
            .into_iter()
            .find(|m| m.to_uci(CastlingMode::Standard) == wanted)
    }
}

impl fmt::Display for StandardPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_board())?;
        if self.0.is_checkmate() {
            write!(f, "\ncheckmate")
        } else if self.0.is_stalemate() {
            write!(f, "\nstalemate")
        } else if self.0.is_check() {
            write!(f, "\ncheck")
        } else {
            Ok(())
        }
    }
}

/// Standard chess rules
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRules;

impl RulesOracle for StandardRules {
    type Position = StandardPosition;

    fn piece_at(&self, position: &StandardPosition, square: BoardPosition) -> Option<Piece> {
        position.get(square)
    }

    fn side_to_move(&self, position: &StandardPosition) -> Color {
        position.turn()
    }

    fn is_legal(&self, position: &StandardPosition, mv: &MoveRequest) -> bool {
        position.find_legal(mv).is_some()
    }

    fn apply_move(&self, position: &StandardPosition, mv: &MoveRequest) -> StandardPosition {
        let mut next = position.clone();
        match position.find_legal(mv) {
            Some(m) => {
                log::debug!("{mv} is {}", San::from_move(&position.0, m));
                next.0.play_unchecked(m);
            }
            None => log::warn!("Not applying illegal move {mv}"),
        }
        next
    }
}

#[inline]
fn to_square(square: BoardPosition) -> Square {
    // index() is always below 64
    Square::new(square.index() as u32)
}

fn color_from_engine(color: shakmaty::Color) -> Color {
    match color {
        shakmaty::Color::White => Color::White,
        shakmaty::Color::Black => Color::Black,
    }
}

fn kind_from_role(role: Role) -> PieceKind {
    match role {
        Role::Pawn => PieceKind::Pawn,
        Role::Knight => PieceKind::Knight,
        Role::Bishop => PieceKind::Bishop,
        Role::Rook => PieceKind::Rook,
        Role::Queen => PieceKind::Queen,
        Role::King => PieceKind::King,
    }
}

fn role_from_kind(kind: PieceKind) -> Role {
    match kind {
        PieceKind::Pawn => Role::Pawn,
        PieceKind::Knight => Role::Knight,
        PieceKind::Bishop => Role::Bishop,
        PieceKind::Rook => Role::Rook,
        PieceKind::Queen => Role::Queen,
        PieceKind::King => Role::King,
    }
}
