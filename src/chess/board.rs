//! Plain board and movement-only rules oracle
//!
//! `BasicRules` checks how each piece moves (sliding paths, pawn pushes and
//! captures, promotion on the last rank) but knows nothing about check,
//! castling, en passant or the end of the game. It is a lightweight stand-in
//! for tests; real games use [`StandardRules`](super::StandardRules).

use std::fmt;

use super::oracle::RulesOracle;
use super::types::{BoardPosition, Color, MoveRequest, Piece, PieceKind};

/// Standard starting position
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Error parsing FEN text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenError {
    message: String,
}

impl FenError {
    pub(super) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bad FEN: {}", self.message)
    }
}

impl std::error::Error for FenError {}

/// Piece placement plus side to move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
    turn: Color,
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

impl Board {
    pub fn empty(turn: Color) -> Self {
        Self {
            squares: [None; 64],
            turn,
        }
    }

    pub fn starting() -> Self {
        let mut board = Self::empty(Color::White);
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (file, kind) in (0u8..).zip(back) {
            board.squares[idx(file, 0)] = Some(Piece::new(kind, Color::White));
            board.squares[idx(file, 1)] = Some(Piece::new(PieceKind::Pawn, Color::White));
            board.squares[idx(file, 6)] = Some(Piece::new(PieceKind::Pawn, Color::Black));
            board.squares[idx(file, 7)] = Some(Piece::new(kind, Color::Black));
        }
        board
    }

    /// Parse the piece-placement field and optional side-to-move field of a FEN
    /// string. Remaining fields (castling, en passant, clocks) are ignored.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let mut fields = fen.split_whitespace();
        let placement = fields.next().ok_or_else(|| FenError::new("empty input"))?;
        let turn = match fields.next() {
            None | Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(other) => return Err(FenError::new(format!("side to move {other:?}"))),
        };

        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 8 {
            return Err(FenError::new(format!("expected 8 ranks, found {}", rows.len())));
        }

        let mut board = Self::empty(turn);
        for (row, text) in rows.iter().enumerate() {
            let rank = 7 - row as u8;
            let mut file = 0u8;
            for c in text.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as u8;
                } else {
                    let piece = Piece::from_fen_char(c)
                        .ok_or_else(|| FenError::new(format!("unknown piece {c:?}")))?;
                    let square = BoardPosition::new(file, rank)
                        .ok_or_else(|| FenError::new(format!("rank {} too long", rank + 1)))?;
                    board.put(square, Some(piece));
                    file += 1;
                }
                if file > 8 {
                    return Err(FenError::new(format!("rank {} too long", rank + 1)));
                }
            }
            if file != 8 {
                return Err(FenError::new(format!("rank {} too short", rank + 1)));
            }
        }
        Ok(board)
    }

    /// Piece placement and side to move in FEN form
    pub fn to_fen(&self) -> String {
        let mut out = String::new();
        for rank in (0..8).rev() {
            let mut empty = 0;
            for file in 0..8 {
                match self.squares[idx(file, rank)] {
                    Some(piece) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(piece.fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if rank > 0 {
                out.push('/');
            }
        }
        out.push(' ');
        out.push(match self.turn {
            Color::White => 'w',
            Color::Black => 'b',
        });
        out
    }

    #[inline]
    pub fn get(&self, square: BoardPosition) -> Option<Piece> {
        self.squares[square.index()]
    }

    pub fn put(&mut self, square: BoardPosition, piece: Option<Piece>) {
        self.squares[square.index()] = piece;
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Move the piece, promote if requested and pass the turn
    pub fn apply(&self, mv: &MoveRequest) -> Board {
        let mut next = self.clone();
        let moving = next.get(mv.from).map(|piece| match mv.promotion {
            Some(kind) => Piece::new(kind, piece.color),
            None => piece,
        });
        next.put(mv.from, None);
        next.put(mv.to, moving);
        next.turn = self.turn.opponent();
        next
    }

    /// True if every square strictly between `from` and `to` is empty.
    /// Only meaningful for squares on a shared rank, file or diagonal.
    fn path_clear(&self, from: BoardPosition, to: BoardPosition) -> bool {
        let df = (i16::from(to.file()) - i16::from(from.file())).signum() as i8;
        let dr = (i16::from(to.rank()) - i16::from(from.rank())).signum() as i8;
        let mut cur = from.offset(df, dr);
        while let Some(square) = cur {
            if square == to {
                return true;
            }
            if self.get(square).is_some() {
                return false;
            }
            cur = square.offset(df, dr);
        }
        false
    }
}

#[inline]
fn idx(file: u8, rank: u8) -> usize {
    usize::from(rank) * 8 + usize::from(file)
}

impl fmt::Display for Board {
    /// Rank 8 at the top, `.` for empty squares
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let c = self.squares[idx(file, rank)].map_or('.', |p| p.fen_char());
                write!(f, "{c}")?;
                if file < 7 {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}

/// Movement-only rules for [`Board`]
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicRules;

impl BasicRules {
    fn pawn_move_ok(board: &Board, color: Color, mv: &MoveRequest) -> bool {
        let (dir, start_rank, last_rank) = match color {
            Color::White => (1i16, 1u8, 7u8),
            Color::Black => (-1i16, 6u8, 0u8),
        };
        let df = i16::from(mv.to.file()) - i16::from(mv.from.file());
        let dr = i16::from(mv.to.rank()) - i16::from(mv.from.rank());
        let target = board.get(mv.to);

        let shape_ok = if df == 0 && dr == dir {
            target.is_none()
        } else if df == 0 && dr == 2 * dir {
            mv.from.rank() == start_rank && target.is_none() && board.path_clear(mv.from, mv.to)
        } else if df.abs() == 1 && dr == dir {
            target.is_some_and(|p| p.color != color)
        } else {
            false
        };

        let promotion_ok = if mv.to.rank() == last_rank {
            matches!(
                mv.promotion,
                Some(PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight)
            )
        } else {
            mv.promotion.is_none()
        };

        shape_ok && promotion_ok
    }
}

impl RulesOracle for BasicRules {
    type Position = Board;

    fn piece_at(&self, position: &Board, square: BoardPosition) -> Option<Piece> {
        position.get(square)
    }

    fn side_to_move(&self, position: &Board) -> Color {
        position.turn()
    }

    fn is_legal(&self, position: &Board, mv: &MoveRequest) -> bool {
        let Some(piece) = position.get(mv.from) else {
            return false;
        };
        if piece.color != position.turn() || mv.from == mv.to {
            return false;
        }
        if position.get(mv.to).is_some_and(|p| p.color == piece.color) {
            return false;
        }
        if piece.kind == PieceKind::Pawn {
            return Self::pawn_move_ok(position, piece.color, mv);
        }
        if mv.promotion.is_some() {
            return false;
        }

        let df = (i16::from(mv.to.file()) - i16::from(mv.from.file())).abs();
        let dr = (i16::from(mv.to.rank()) - i16::from(mv.from.rank())).abs();
        match piece.kind {
            PieceKind::Knight => (df, dr) == (1, 2) || (df, dr) == (2, 1),
            PieceKind::King => df.max(dr) == 1,
            PieceKind::Bishop => df == dr && position.path_clear(mv.from, mv.to),
            PieceKind::Rook => (df == 0 || dr == 0) && position.path_clear(mv.from, mv.to),
            PieceKind::Queen => {
                (df == dr || df == 0 || dr == 0) && position.path_clear(mv.from, mv.to)
            }
            PieceKind::Pawn => false,
        }
    }

    fn apply_move(&self, position: &Board, mv: &MoveRequest) -> Board {
        position.apply(mv)
    }
}
