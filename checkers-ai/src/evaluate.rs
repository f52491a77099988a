//! 棋局评估函数

use checkers_core::{Board, Side};

/// 评估器
pub struct Evaluator;

impl Evaluator {
    /// 评估棋局（红方视角，正值对红方有利）
    ///
    /// 纯子力计算：兵 1 分，王 2 分。
    pub fn evaluate(board: &Board) -> i32 {
        board.material(Side::Red) - board.material(Side::Blue)
    }
}
