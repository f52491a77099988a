//! 跳棋引擎核心库
//!
//! 包含:
//! - 棋子、棋盘、位置等核心数据结构
//! - 走法生成
//! - 走子执行、升变、重复局面和胜负判定
//! - 棋盘记谱格式
//! - 棋局存档 (JSON)

mod board;
mod constants;
mod error;
mod game;
mod moves;
mod notation;
mod piece;
mod record;

pub use board::Board;
pub use constants::*;
pub use error::{MoveError, NotationError, RecordError, Result};
pub use game::{new_game, GameState, Winner};
pub use moves::{LegalMoves, Move, MoveGenerator};
pub use notation::{Notation, INITIAL_NOTATION};
pub use piece::{Cell, PieceKind, Position, Side};
pub use record::{deserialize, serialize, GameRecord};

/// 查询指定阵营的合法走法（只读）
pub fn legal_moves(state: &GameState, side: Side) -> LegalMoves {
    state.legal_moves(side)
}

/// 对指定对局执行一步走子
pub fn apply_move(state: &mut GameState, from: Position, to: Position) -> std::result::Result<Move, MoveError> {
    state.apply_move(from, to)
}
