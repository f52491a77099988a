//! 错误类型定义

use thiserror::Error;

use crate::game::Winner;
use crate::piece::Position;

/// 走子错误
///
/// 全部可恢复：返回错误时棋局状态保持不变，走子方不切换。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MoveError {
    /// 游戏已结束
    #[error("Game over. {winner} has already won.")]
    GameOver { winner: Winner },

    /// 坐标越界
    #[error("Move out of bounds")]
    OutOfBounds { from: Position, to: Position },

    /// 起点为空或不是当前走子方的棋子
    #[error("Invalid piece selection")]
    InvalidSelection { at: Position },

    /// 目标格已被占据
    #[error("Target cell not empty")]
    OccupiedTarget { at: Position },

    /// 不在合法走法列表中
    #[error("Illegal move")]
    IllegalMove { from: Position, to: Position },
}

/// 棋盘记谱解析错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NotationError {
    #[error("Expected 8 rows, got {0}")]
    RowCount(usize),

    #[error("Row {row} has {len} cells, expected 8")]
    RowLength { row: usize, len: usize },

    #[error("Invalid cell character: {0}")]
    InvalidCell(char),

    #[error("Piece on light square at {0}")]
    LightSquare(Position),

    #[error("Invalid side: {0}")]
    InvalidSide(String),
}

/// 棋局记录错误
#[derive(Error, Debug)]
pub enum RecordError {
    /// JSON 序列化错误
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// 记录版本不匹配
    #[error("Record version mismatch: expected {expected}, got {actual}")]
    VersionMismatch { expected: u8, actual: u8 },

    /// 棋子出现在浅色格上
    #[error("Invalid board: piece on light square at {0}")]
    InvalidBoard(Position),
}

/// 棋局记录操作结果类型
pub type Result<T> = std::result::Result<T, RecordError>;
