//! Chess board front-end
//!
//! Turns pointer clicks into move requests. Every rules question is answered
//! by a [`RulesOracle`]; this module only tracks the selection and position.

pub mod board;
pub mod mapper;
pub mod oracle;
pub mod session;
pub mod standard;
pub mod types;

pub use board::{BasicRules, Board, FenError, START_FEN};
pub use mapper::{ClickOutcome, on_square_clicked, square_center_pixel, square_from_pixel};
pub use oracle::RulesOracle;
pub use session::{ChessSession, ChessSnapshot};
pub use standard::{StandardPosition, StandardRules};
pub use types::{BoardPosition, Color, MoveRequest, ParseSquareError, Piece, PieceKind};
