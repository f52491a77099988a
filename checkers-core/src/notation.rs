//! 棋盘记谱格式解析和生成
//!
//! 格式：`<棋盘> <走子方>`
//!
//! 棋盘从第 0 行（红方底线）到第 7 行（蓝方底线），行之间以 `/` 分隔，
//! 每行 8 个字符：`.` 空格，`b`/`B` 蓝方兵/王，`r`/`R` 红方兵/王。
//! 走子方为 `b` 或 `r`。
//!
//! 示例（初始局面）：
//! `.r.r.r.r/r.r.r.r./.r.r.r.r/......../......../b.b.b.b./.b.b.b.b/b.b.b.b. b`

use crate::board::Board;
use crate::constants::BOARD_SIZE;
use crate::error::NotationError;
use crate::game::GameState;
use crate::piece::{Cell, Position, Side};

/// 初始局面记谱
pub const INITIAL_NOTATION: &str =
    ".r.r.r.r/r.r.r.r./.r.r.r.r/......../......../b.b.b.b./.b.b.b.b/b.b.b.b. b";

/// 记谱格式处理
pub struct Notation;

impl Notation {
    /// 解析记谱字符串为棋局状态（无胜负、无重复历史）
    pub fn parse(notation: &str) -> Result<GameState, NotationError> {
        let mut parts = notation.split_whitespace();
        let board = Self::parse_board(parts.next().unwrap_or(""))?;

        // 走子方缺省为蓝方
        let turn = match parts.next() {
            Some(s) => {
                let mut chars = s.chars();
                match (chars.next().and_then(Side::from_notation_char), chars.next()) {
                    (Some(side), None) => side,
                    _ => return Err(NotationError::InvalidSide(s.to_string())),
                }
            }
            None => Side::Blue,
        };

        Ok(GameState::from_board(board, turn))
    }

    /// 解析棋盘部分
    pub fn parse_board(board_str: &str) -> Result<Board, NotationError> {
        let rows: Vec<&str> = board_str.split('/').collect();
        if rows.len() != BOARD_SIZE {
            return Err(NotationError::RowCount(rows.len()));
        }

        let mut board = Board::empty();
        for (row, row_str) in rows.iter().enumerate() {
            let len = row_str.chars().count();
            if len != BOARD_SIZE {
                return Err(NotationError::RowLength { row, len });
            }

            for (col, c) in row_str.chars().enumerate() {
                let cell = Cell::from_notation_char(c).ok_or(NotationError::InvalidCell(c))?;
                let pos = Position::new_unchecked(row as u8, col as u8);
                if !cell.is_empty() && !pos.is_dark() {
                    return Err(NotationError::LightSquare(pos));
                }
                board.set(pos, cell);
            }
        }

        Ok(board)
    }

    /// 将棋局状态转换为记谱字符串
    pub fn to_string(state: &GameState) -> String {
        Self::position_key(&state.board, state.turn)
    }

    /// 棋盘与阵营组成的规范局面键，用于重复局面统计
    pub fn position_key(board: &Board, side: Side) -> String {
        format!("{} {}", Self::board_to_string(board), side.to_notation_char())
    }

    /// 将棋盘转换为记谱字符串
    pub fn board_to_string(board: &Board) -> String {
        board
            .rows()
            .iter()
            .map(|row| row.iter().map(|cell| cell.to_notation_char()).collect::<String>())
            .collect::<Vec<_>>()
            .join("/")
    }
}
