//! 棋子定义

use serde::{Deserialize, Serialize};

use crate::constants::BOARD_SIZE;

/// 阵营
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// 蓝方（人类玩家，先手，在下方）
    Blue,
    /// 红方（AI，后手，在上方）
    Red,
}

impl Side {
    /// 获取对方阵营
    pub fn opponent(&self) -> Side {
        match self {
            Side::Blue => Side::Red,
            Side::Red => Side::Blue,
        }
    }

    /// 兵升变所在的底线行
    pub fn promotion_row(&self) -> u8 {
        match self {
            Side::Blue => 0,
            Side::Red => (BOARD_SIZE - 1) as u8,
        }
    }

    /// 获取记谱字符
    pub fn to_notation_char(&self) -> char {
        match self {
            Side::Blue => 'b',
            Side::Red => 'r',
        }
    }

    /// 从记谱字符解析
    pub fn from_notation_char(c: char) -> Option<Side> {
        match c {
            'b' | 'B' => Some(Side::Blue),
            'r' | 'R' => Some(Side::Red),
            _ => None,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Blue => write!(f, "blue"),
            Side::Red => write!(f, "red"),
        }
    }
}

/// 棋子类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    /// 兵（只能斜向前进）
    Man,
    /// 王（四个斜向均可走）
    King,
}

impl PieceKind {
    /// 获取棋子的子力分值（用于 AI 评估）
    pub fn value(&self) -> i32 {
        match self {
            PieceKind::Man => 1,
            PieceKind::King => 2,
        }
    }
}

/// 各类棋子的可走方向，按 (行偏移, 列偏移) 排列
const BLUE_MAN_DIRECTIONS: &[(i8, i8)] = &[(-1, -1), (-1, 1)];
const RED_MAN_DIRECTIONS: &[(i8, i8)] = &[(1, -1), (1, 1)];
const KING_DIRECTIONS: &[(i8, i8)] = &[(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// 棋盘格子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cell {
    #[default]
    Empty,
    BlueMan,
    BlueKing,
    RedMan,
    RedKing,
}

impl Cell {
    /// 由阵营和类型构造棋子
    pub fn piece(side: Side, kind: PieceKind) -> Self {
        match (side, kind) {
            (Side::Blue, PieceKind::Man) => Cell::BlueMan,
            (Side::Blue, PieceKind::King) => Cell::BlueKing,
            (Side::Red, PieceKind::Man) => Cell::RedMan,
            (Side::Red, PieceKind::King) => Cell::RedKing,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Cell::Empty
    }

    /// 所属阵营（空格返回 None）
    pub fn side(&self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::BlueMan | Cell::BlueKing => Some(Side::Blue),
            Cell::RedMan | Cell::RedKing => Some(Side::Red),
        }
    }

    /// 棋子类型（空格返回 None）
    pub fn kind(&self) -> Option<PieceKind> {
        match self {
            Cell::Empty => None,
            Cell::BlueMan | Cell::RedMan => Some(PieceKind::Man),
            Cell::BlueKing | Cell::RedKing => Some(PieceKind::King),
        }
    }

    /// 是否为指定阵营的棋子（兵或王）
    pub fn belongs_to(&self, side: Side) -> bool {
        self.side() == Some(side)
    }

    /// 是否为指定阵营的对方棋子
    pub fn is_opponent_of(&self, side: Side) -> bool {
        self.side() == Some(side.opponent())
    }

    /// 可移动方向：兵只能向前，王四个方向
    pub fn directions(&self) -> &'static [(i8, i8)] {
        match self {
            Cell::Empty => &[],
            Cell::BlueMan => BLUE_MAN_DIRECTIONS,
            Cell::RedMan => RED_MAN_DIRECTIONS,
            Cell::BlueKing | Cell::RedKing => KING_DIRECTIONS,
        }
    }

    /// 升变后的棋子；王和空格保持不变
    pub fn promoted(&self) -> Cell {
        match self {
            Cell::BlueMan => Cell::BlueKing,
            Cell::RedMan => Cell::RedKing,
            other => *other,
        }
    }

    /// 子力分值，空格为 0
    pub fn value(&self) -> i32 {
        self.kind().map(|kind| kind.value()).unwrap_or(0)
    }

    /// 获取记谱字符（蓝方 b/B，红方 r/R，大写为王）
    pub fn to_notation_char(&self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::BlueMan => 'b',
            Cell::BlueKing => 'B',
            Cell::RedMan => 'r',
            Cell::RedKing => 'R',
        }
    }

    /// 从记谱字符解析
    pub fn from_notation_char(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Empty),
            'b' => Some(Cell::BlueMan),
            'B' => Some(Cell::BlueKing),
            'r' => Some(Cell::RedMan),
            'R' => Some(Cell::RedKing),
            _ => None,
        }
    }
}

/// 棋盘位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// 行 (0-7)，0 为红方底线
    pub row: u8,
    /// 列 (0-7)
    pub col: u8,
}

impl Position {
    /// 创建新位置
    pub fn new(row: u8, col: u8) -> Option<Self> {
        let pos = Self { row, col };
        pos.is_valid().then_some(pos)
    }

    /// 创建新位置（不检查边界，越界坐标由走子校验拒绝）
    pub const fn new_unchecked(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// 检查位置是否在棋盘内
    pub fn is_valid(&self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }

    /// 是否为深色格（棋子只能出现在深色格）
    pub fn is_dark(&self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// 获取偏移后的位置
    pub fn offset(&self, dr: i8, dc: i8) -> Option<Position> {
        let row = i16::from(self.row) + i16::from(dr);
        let col = i16::from(self.col) + i16::from(dc);
        if row >= 0 && (row as usize) < BOARD_SIZE && col >= 0 && (col as usize) < BOARD_SIZE {
            Some(Position {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
