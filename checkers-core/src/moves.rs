//! 走法生成

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::piece::{Cell, Position, Side};

/// 走法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// 起始位置
    pub from: Position,
    /// 目标位置
    pub to: Position,
}

impl Move {
    /// 创建新走法
    pub fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }

    /// 是否为吃子（斜向跳两格）
    pub fn is_capture(&self) -> bool {
        let dr = (i16::from(self.to.row) - i16::from(self.from.row)).abs();
        let dc = (i16::from(self.to.col) - i16::from(self.from.col)).abs();
        dr == 2 && dc == 2
    }

    /// 吃子时被跳过的中间格
    pub fn midpoint(&self) -> Option<Position> {
        if !self.is_capture() {
            return None;
        }
        let mid = |a: u8, b: u8| ((u16::from(a) + u16::from(b)) / 2) as u8;
        Some(Position::new_unchecked(
            mid(self.from.row, self.to.row),
            mid(self.from.col, self.to.col),
        ))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// 一方的全部合法走法，吃子与普通走法分开保存
///
/// 两类走法同样合法，吃子不具有优先权。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalMoves {
    pub captures: Vec<Move>,
    pub steps: Vec<Move>,
}

impl LegalMoves {
    /// 是否无子可动
    pub fn is_empty(&self) -> bool {
        self.captures.is_empty() && self.steps.is_empty()
    }

    /// 是否包含指定起止位置的走法
    pub fn contains(&self, from: Position, to: Position) -> bool {
        let mv = Move::new(from, to);
        self.captures.contains(&mv) || self.steps.contains(&mv)
    }

    /// 按“先吃子、后普通走法”的顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.captures.iter().chain(self.steps.iter())
    }

    /// 合并为单个列表（吃子在前）
    pub fn into_vec(self) -> Vec<Move> {
        let mut all = self.captures;
        all.extend(self.steps);
        all
    }
}

/// 走法生成器
pub struct MoveGenerator;

impl MoveGenerator {
    /// 生成指定阵营的所有合法走法
    ///
    /// 按行优先扫描棋盘，每个棋子按其方向表的顺序生成。
    /// 每次吃子只跳一格，不做连跳；后续的吃子需要下一次单独走子。
    pub fn legal_moves(board: &Board, side: Side) -> LegalMoves {
        let mut moves = LegalMoves::default();

        for (pos, piece) in board.pieces(side) {
            Self::generate_piece_moves(board, pos, piece, side, &mut moves);
        }

        moves
    }

    /// 生成单个棋子的走法
    fn generate_piece_moves(
        board: &Board,
        pos: Position,
        piece: Cell,
        side: Side,
        moves: &mut LegalMoves,
    ) {
        for &(dr, dc) in piece.directions() {
            // 普通走法：相邻斜格为空
            if let Some(to) = pos.offset(dr, dc) {
                if board.get(to).is_empty() {
                    moves.steps.push(Move::new(pos, to));
                }
            }

            // 吃子：中间格为对方棋子，落点为空
            if let (Some(mid), Some(landing)) = (pos.offset(dr, dc), pos.offset(2 * dr, 2 * dc)) {
                if board.get(landing).is_empty() && board.get(mid).is_opponent_of(side) {
                    moves.captures.push(Move::new(pos, landing));
                }
            }
        }
    }

    /// 指定阵营是否还有可走的棋
    pub fn has_any_move(board: &Board, side: Side) -> bool {
        !Self::legal_moves(board, side).is_empty()
    }
}
