//! 跳棋 AI 引擎
//!
//! 包含:
//! - 子力评估函数
//! - Minimax + Alpha-Beta 搜索
//! - 难度配置

mod evaluate;
mod search;

pub use evaluate::Evaluator;
pub use search::{maybe_ai_move, AiConfig, AiEngine, Difficulty};
