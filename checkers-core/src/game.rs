//! 对局状态与走子执行
//!
//! 包含走子校验、吃子、升变、重复局面统计和胜负判定

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::board::Board;
use crate::constants::REPETITION_DRAW_THRESHOLD;
use crate::error::MoveError;
use crate::moves::{LegalMoves, Move, MoveGenerator};
use crate::notation::Notation;
use crate::piece::{Cell, Position, Side};

/// 对局结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    /// 蓝方胜
    Blue,
    /// 红方胜
    Red,
    /// 和棋（重复局面）
    Draw,
}

impl Winner {
    /// 由获胜阵营构造
    pub fn from_side(side: Side) -> Self {
        match side {
            Side::Blue => Winner::Blue,
            Side::Red => Winner::Red,
        }
    }
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Winner::Blue => write!(f, "BLUE"),
            Winner::Red => write!(f, "RED"),
            Winner::Draw => write!(f, "DRAW"),
        }
    }
}

/// 完整的对局状态
///
/// 每个会话各自持有一份，只通过 [`GameState::apply_move`] 修改。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// 棋盘
    pub board: Board,
    /// 当前走子方
    pub turn: Side,
    /// 对局结果，未结束时为 None
    pub winner: Option<Winner>,
    /// 局面出现次数（键为走子后的棋盘加走子方）
    pub position_history: BTreeMap<String, u32>,
}

/// 创建新对局
pub fn new_game() -> GameState {
    GameState::new()
}

impl GameState {
    /// 创建初始状态：标准开局，蓝方先走
    pub fn new() -> Self {
        Self::from_board(Board::initial(), Side::Blue)
    }

    /// 从棋盘创建状态
    pub fn from_board(board: Board, turn: Side) -> Self {
        Self {
            board,
            turn,
            winner: None,
            position_history: BTreeMap::new(),
        }
    }

    /// 重置为初始状态
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// 对局是否已结束
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// 指定阵营的全部合法走法（只读）
    pub fn legal_moves(&self, side: Side) -> LegalMoves {
        MoveGenerator::legal_moves(&self.board, side)
    }

    /// 执行一步走子
    ///
    /// 校验失败时返回错误且不修改任何状态。成功后依次处理吃子、升变、
    /// 重复局面统计和胜负判定，对局未结束时才切换走子方。
    pub fn apply_move(&mut self, from: Position, to: Position) -> Result<Move, MoveError> {
        if let Some(winner) = self.winner {
            return Err(MoveError::GameOver { winner });
        }
        if !from.is_valid() || !to.is_valid() {
            return Err(MoveError::OutOfBounds { from, to });
        }
        if !self.board.get(from).belongs_to(self.turn) {
            return Err(MoveError::InvalidSelection { at: from });
        }
        if !self.board.get(to).is_empty() {
            return Err(MoveError::OccupiedTarget { at: to });
        }
        if !self.legal_moves(self.turn).contains(from, to) {
            return Err(MoveError::IllegalMove { from, to });
        }

        let mv = Move::new(from, to);
        if let Some(mid) = mv.midpoint() {
            self.board.set(mid, Cell::Empty);
        }
        self.board.move_piece(from, to);
        self.maybe_promote(to);
        debug!(side = %self.turn, %mv, capture = mv.is_capture(), "move applied");

        if self.record_position() {
            self.winner = Some(Winner::Draw);
            info!(position = %Notation::board_to_string(&self.board), "draw by repetition");
            return Ok(mv);
        }

        self.check_winner();
        if self.winner.is_none() {
            self.turn = self.turn.opponent();
        }

        Ok(mv)
    }

    /// 兵到达对方底线后升变为王
    fn maybe_promote(&mut self, pos: Position) -> bool {
        let cell = self.board.get(pos);
        let reached_far_row = cell
            .side()
            .is_some_and(|side| pos.row == side.promotion_row());
        let promoted = cell.promoted();

        if reached_far_row && promoted != cell {
            self.board.set(pos, promoted);
            debug!(at = %pos, "piece promoted");
            return true;
        }
        false
    }

    /// 记录当前局面，返回是否达到重复和棋次数
    ///
    /// 键使用刚走完棋的一方（切换走子方之前）。
    fn record_position(&mut self) -> bool {
        let key = Notation::position_key(&self.board, self.turn);
        let count = self.position_history.entry(key).or_insert(0);
        *count += 1;
        trace!(count = *count, "position recorded");
        *count >= REPETITION_DRAW_THRESHOLD
    }

    /// 胜负判定
    ///
    /// 双方都检查，与下一步轮到谁无关：先看蓝方，再看红方。
    fn check_winner(&mut self) {
        if self.winner.is_some() {
            return;
        }

        let loser = [Side::Blue, Side::Red].into_iter().find(|&side| {
            !self.board.has_pieces(side) || !MoveGenerator::has_any_move(&self.board, side)
        });

        if let Some(loser) = loser {
            let winner = Winner::from_side(loser.opponent());
            self.winner = Some(winner);
            info!(%winner, "game decided");
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
