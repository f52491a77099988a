//! 终端输入解析与棋盘显示

use checkers_core::{Board, GameState, Position, Winner};
use thiserror::Error;

/// 输入错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("Empty input")]
    Empty,

    #[error("Expected four coordinates: <from_row> <from_col> <to_row> <to_col>")]
    CoordinateCount,

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("Missing file path")]
    MissingPath,
}

/// 玩家命令
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// 走子
    Move { from: Position, to: Position },
    /// 列出当前走子方的合法走法
    Moves,
    /// 保存对局
    Save(String),
    /// 重新开始
    Reset,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, InputError> {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => Err(InputError::Empty),
            ["moves"] => Ok(Command::Moves),
            ["reset"] => Ok(Command::Reset),
            ["quit"] | ["exit"] => Ok(Command::Quit),
            ["save"] => Err(InputError::MissingPath),
            ["save", path] => Ok(Command::Save(path.to_string())),
            [fr, fc, tr, tc] => Ok(Command::Move {
                from: Position::new_unchecked(coordinate(fr)?, coordinate(fc)?),
                to: Position::new_unchecked(coordinate(tr)?, coordinate(tc)?),
            }),
            _ => Err(InputError::CoordinateCount),
        }
    }
}

fn coordinate(word: &str) -> Result<u8, InputError> {
    word.parse()
        .map_err(|_| InputError::InvalidCoordinate(word.to_string()))
}

/// 将棋盘渲染为文本（带行列号）
pub fn render_board(board: &Board) -> String {
    let mut output = String::from("  0 1 2 3 4 5 6 7\n");
    for (row, cells) in board.rows().iter().enumerate() {
        output.push_str(&row.to_string());
        for cell in cells {
            output.push(' ');
            output.push(cell.to_notation_char());
        }
        output.push('\n');
    }
    output
}

/// 对局状态摘要
pub fn status_line(state: &GameState) -> String {
    match state.winner {
        Some(Winner::Draw) => "Game drawn by repetition".to_string(),
        Some(winner) => format!("{} wins", winner),
        None => format!("{} to move", state.turn),
    }
}
