//! 棋盘状态

use serde::{Deserialize, Serialize};

use crate::constants::BOARD_SIZE;
use crate::piece::{Cell, PieceKind, Position, Side};

/// 每方初始占据的行数
const SETUP_ROWS: usize = 3;

/// 棋盘
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// 8x8 棋盘，按 [行][列] 索引
    squares: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// 创建空棋盘
    pub fn empty() -> Self {
        Self {
            squares: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// 创建初始棋盘
    pub fn initial() -> Self {
        let mut board = Self::empty();

        // 红方占据上方三行（0-2），蓝方占据下方三行（5-7），只放深色格
        for (rows, side) in [
            (0..SETUP_ROWS, Side::Red),
            (BOARD_SIZE - SETUP_ROWS..BOARD_SIZE, Side::Blue),
        ] {
            for row in rows {
                for col in 0..BOARD_SIZE {
                    let pos = Position::new_unchecked(row as u8, col as u8);
                    if pos.is_dark() {
                        board.set(pos, Cell::piece(side, PieceKind::Man));
                    }
                }
            }
        }

        board
    }

    /// 按行访问格子
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.squares
    }

    /// 获取指定位置的格子，越界视为空
    pub fn get(&self, pos: Position) -> Cell {
        if pos.is_valid() {
            self.squares[pos.row as usize][pos.col as usize]
        } else {
            Cell::Empty
        }
    }

    /// 设置指定位置的格子
    pub fn set(&mut self, pos: Position, cell: Cell) {
        if pos.is_valid() {
            self.squares[pos.row as usize][pos.col as usize] = cell;
        }
    }

    /// 移动棋子（不检查规则），返回被移动的棋子
    pub fn move_piece(&mut self, from: Position, to: Position) -> Cell {
        let cell = self.get(from);
        self.set(from, Cell::Empty);
        self.set(to, cell);
        cell
    }

    /// 获取指定阵营的所有棋子（按行优先顺序）
    pub fn pieces(&self, side: Side) -> Vec<(Position, Cell)> {
        self.all_pieces()
            .into_iter()
            .filter(|(_, cell)| cell.belongs_to(side))
            .collect()
    }

    /// 获取所有棋子（按行优先顺序）
    pub fn all_pieces(&self) -> Vec<(Position, Cell)> {
        let mut result = Vec::new();
        for (row, cells) in self.squares.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if !cell.is_empty() {
                    result.push((Position::new_unchecked(row as u8, col as u8), *cell));
                }
            }
        }
        result
    }

    /// 指定阵营剩余棋子数
    pub fn piece_count(&self, side: Side) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|cell| cell.belongs_to(side))
            .count()
    }

    /// 指定阵营是否还有棋子
    pub fn has_pieces(&self, side: Side) -> bool {
        self.squares.iter().flatten().any(|cell| cell.belongs_to(side))
    }

    /// 指定阵营的子力总分（兵 1 分，王 2 分）
    pub fn material(&self, side: Side) -> i32 {
        self.squares
            .iter()
            .flatten()
            .filter(|cell| cell.belongs_to(side))
            .map(|cell| cell.value())
            .sum()
    }

    /// 检查所有棋子是否都在深色格上
    pub fn pieces_on_dark_squares(&self) -> bool {
        self.all_pieces().iter().all(|(pos, _)| pos.is_dark())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}
