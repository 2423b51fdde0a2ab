//! Board coordinates, pieces and move requests

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Side color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Lowercase letter used by FEN and UCI notation
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    /// FEN letter: uppercase for white, lowercase for black
    pub fn fen_char(&self) -> char {
        let c = self.kind.letter();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn from_fen_char(c: char) -> Option<Self> {
        let kind = PieceKind::from_letter(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Self { kind, color })
    }
}

/// A square on the 8x8 board. File 0 is the a-file, rank 0 is white's back rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BoardPosition {
    file: u8,
    rank: u8,
}

impl BoardPosition {
    pub fn new(file: u8, rank: u8) -> Option<Self> {
        (file < 8 && rank < 8).then_some(Self { file, rank })
    }

    /// Square from a 0..64 index (`rank * 8 + file`)
    pub fn from_index(index: usize) -> Option<Self> {
        (index < 64).then(|| Self {
            file: (index % 8) as u8,
            rank: (index / 8) as u8,
        })
    }

    #[inline]
    pub fn file(&self) -> u8 {
        self.file
    }

    #[inline]
    pub fn rank(&self) -> u8 {
        self.rank
    }

    #[inline]
    pub fn index(&self) -> usize {
        usize::from(self.rank) * 8 + usize::from(self.file)
    }

    /// Square displaced by (`df`, `dr`), if still on the board
    pub fn offset(&self, df: i8, dr: i8) -> Option<Self> {
        let file = i16::from(self.file) + i16::from(df);
        let rank = i16::from(self.rank) + i16::from(dr);
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Self::new(file as u8, rank as u8)
        } else {
            None
        }
    }

    /// Iterate over all 64 squares in index order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..64).filter_map(Self::from_index)
    }
}

impl fmt::Display for BoardPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", char::from(b'a' + self.file), self.rank + 1)
    }
}

/// Error parsing an algebraic square like `e4`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSquareError {
    input: String,
}

impl fmt::Display for ParseSquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a board square: {:?}", self.input)
    }
}

impl std::error::Error for ParseSquareError {}

impl FromStr for BoardPosition {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseSquareError {
            input: s.to_string(),
        };
        let bytes = s.trim().as_bytes();
        if bytes.len() != 2 {
            return Err(err());
        }
        let file = bytes[0].to_ascii_lowercase().wrapping_sub(b'a');
        let rank = bytes[1].wrapping_sub(b'1');
        Self::new(file, rank).ok_or_else(err)
    }
}

/// A move the player asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRequest {
    pub from: BoardPosition,
    pub to: BoardPosition,
    pub promotion: Option<PieceKind>,
}

impl fmt::Display for MoveRequest {
    /// UCI long algebraic form, e.g. `e7e8q`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.letter())?;
        }
        Ok(())
    }
}
