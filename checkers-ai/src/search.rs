//! 搜索引擎
//!
//! 实现固定深度的 Minimax + Alpha-Beta 剪枝

use checkers_core::{GameState, Move, MoveGenerator, Side};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::evaluate::Evaluator;

/// AI 难度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// 简单：depth=2
    Easy,
    /// 中等：depth=4
    #[default]
    Medium,
    /// 困难：depth=6
    Hard,
}

/// AI 配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiConfig {
    pub difficulty: Difficulty,
    pub max_depth: u8,
}

impl AiConfig {
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        let max_depth = match difficulty {
            Difficulty::Easy => 2,
            Difficulty::Medium => 4,
            Difficulty::Hard => 6,
        };
        Self {
            difficulty,
            max_depth,
        }
    }

    /// 指定搜索深度（保留当前难度标签）
    pub fn with_depth(mut self, max_depth: u8) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::from_difficulty(Difficulty::Medium)
    }
}

/// AI 引擎
///
/// 红方为极大方，蓝方为极小方；每个分支在克隆的对局上展开，
/// 搜索过程不会修改真实对局。
pub struct AiEngine {
    config: AiConfig,
    nodes_searched: u64,
}

impl AiEngine {
    /// 创建新的 AI 引擎
    pub fn new(config: AiConfig) -> Self {
        Self {
            config,
            nodes_searched: 0,
        }
    }

    /// 搜索当前走子方的最佳走法
    pub fn best_move(&mut self, state: &GameState) -> Option<Move> {
        self.nodes_searched = 0;
        let maximizing = state.turn == Side::Red;

        let (score, best) = self.minimax(
            state,
            self.config.max_depth,
            i32::MIN,
            i32::MAX,
            maximizing,
        );

        debug!(
            depth = self.config.max_depth,
            nodes = self.nodes_searched,
            score,
            best = ?best,
            "search finished"
        );
        best
    }

    /// 轮到红方且对局未结束时，搜索并执行红方走法
    ///
    /// 其余情况返回 None，不修改对局。
    pub fn maybe_move(&mut self, state: &mut GameState) -> Option<Move> {
        if state.turn != Side::Red || state.is_over() {
            return None;
        }

        let mv = self.best_move(state)?;
        match state.apply_move(mv.from, mv.to) {
            Ok(mv) => Some(mv),
            Err(err) => {
                warn!(%mv, %err, "search produced a move the executor rejected");
                None
            }
        }
    }

    /// Minimax + Alpha-Beta 搜索
    ///
    /// 候选走法顺序为先吃子后普通走法；只有严格更优的分数才会替换
    /// 当前最佳走法，同分时保留先遇到的走法。
    fn minimax(
        &mut self,
        state: &GameState,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> (i32, Option<Move>) {
        self.nodes_searched += 1;

        if depth == 0 || state.is_over() {
            return (Evaluator::evaluate(&state.board), None);
        }

        let side = if maximizing { Side::Red } else { Side::Blue };
        let moves = MoveGenerator::legal_moves(&state.board, side).into_vec();
        if moves.is_empty() {
            return (Evaluator::evaluate(&state.board), None);
        }

        let mut best_move = None;
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };

        for mv in moves {
            let mut child = state.clone();
            if child.apply_move(mv.from, mv.to).is_err() {
                continue;
            }

            let (score, _) = self.minimax(&child, depth - 1, alpha, beta, !maximizing);

            if maximizing {
                if score > best_score || best_move.is_none() {
                    best_score = score;
                    best_move = Some(mv);
                }
                alpha = alpha.max(score);
            } else {
                if score < best_score || best_move.is_none() {
                    best_score = score;
                    best_move = Some(mv);
                }
                beta = beta.min(score);
            }

            // Beta 剪枝
            if beta <= alpha {
                break;
            }
        }

        if best_move.is_none() {
            return (Evaluator::evaluate(&state.board), None);
        }
        (best_score, best_move)
    }

    /// 获取搜索的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }
}

impl Default for AiEngine {
    fn default() -> Self {
        Self::new(AiConfig::default())
    }
}

/// 使用默认配置（深度 4）为红方走一步
pub fn maybe_ai_move(state: &mut GameState) -> Option<Move> {
    AiEngine::default().maybe_move(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkers_core::{Notation, Position, Winner};

    fn pos(row: u8, col: u8) -> Position {
        Position::new_unchecked(row, col)
    }

    #[test]
    fn test_difficulty_config() {
        let easy = AiConfig::from_difficulty(Difficulty::Easy);
        assert_eq!(easy.max_depth, 2);

        let medium = AiConfig::default();
        assert_eq!(medium.difficulty, Difficulty::Medium);
        assert_eq!(medium.max_depth, 4);

        let hard = AiConfig::from_difficulty(Difficulty::Hard);
        assert_eq!(hard.max_depth, 6);

        assert_eq!(AiConfig::default().with_depth(1).max_depth, 1);
    }

    #[test]
    fn test_no_move_on_blue_turn() {
        let mut state = GameState::new();
        let before = state.clone();

        assert_eq!(maybe_ai_move(&mut state), None);
        assert_eq!(state, before);
    }

    #[test]
    fn test_no_move_when_game_over() {
        let mut state = GameState::new();
        state.turn = Side::Red;
        state.winner = Some(Winner::Blue);
        let before = state.clone();

        assert_eq!(maybe_ai_move(&mut state), None);
        assert_eq!(state, before);
    }

    #[test]
    fn test_finds_winning_capture() {
        // 红方吃掉蓝方最后一子即可获胜
        let mut state = Notation::parse(
            ".....r../..r...../...b..../......../......../......../......../........ r",
        )
        .unwrap();

        let mv = maybe_ai_move(&mut state);

        assert_eq!(mv, Some(Move::new(pos(1, 2), pos(3, 4))));
        assert_eq!(state.winner, Some(Winner::Red));
        assert_eq!(state.board.piece_count(Side::Blue), 0);
    }

    #[test]
    fn test_prefers_material_gain() {
        let state = Notation::parse(
            "......../......../...r..../....b.../......../......../.b....../........ r",
        )
        .unwrap();

        let mut engine = AiEngine::new(AiConfig::default().with_depth(1));
        assert_eq!(engine.best_move(&state), Some(Move::new(pos(2, 3), pos(4, 5))));
    }

    #[test]
    fn test_tie_keeps_first_move() {
        let mut state = GameState::new();
        state.apply_move(pos(5, 0), pos(4, 1)).unwrap();

        // 深度 1 时所有走法分数相同，保留扫描顺序中的第一个
        let mut engine = AiEngine::new(AiConfig::default().with_depth(1));
        assert_eq!(engine.best_move(&state), Some(Move::new(pos(2, 1), pos(3, 0))));
    }

    #[test]
    fn test_zero_depth_yields_no_move() {
        let mut state = GameState::new();
        state.apply_move(pos(5, 0), pos(4, 1)).unwrap();
        let before = state.clone();

        let mut engine = AiEngine::new(AiConfig::default().with_depth(0));
        assert_eq!(engine.maybe_move(&mut state), None);
        assert_eq!(state, before);
    }

    #[test]
    fn test_search_does_not_touch_real_state() {
        let mut state = GameState::new();
        state.apply_move(pos(5, 2), pos(4, 3)).unwrap();
        let before = state.clone();

        let mut engine = AiEngine::default();
        let mv = engine.best_move(&state);
        assert!(mv.is_some());
        assert!(engine.nodes_searched() > 1);
        assert_eq!(state, before);
    }

    #[test]
    fn test_maybe_move_applies_one_move() {
        let mut state = GameState::new();
        state.apply_move(pos(5, 2), pos(4, 3)).unwrap();

        let mv = maybe_ai_move(&mut state).unwrap();

        assert_eq!(state.turn, Side::Blue);
        assert_eq!(state.board.get(mv.from), checkers_core::Cell::Empty);
        assert!(state.board.get(mv.to).belongs_to(Side::Red));
        assert_eq!(state.position_history.len(), 2);
    }

    fn total_pieces(state: &GameState) -> usize {
        state.board.piece_count(Side::Blue) + state.board.piece_count(Side::Red)
    }

    #[test]
    fn test_self_play_keeps_invariants() {
        for depth in 1..=3 {
            let mut engine = AiEngine::new(AiConfig::default().with_depth(depth));
            let mut state = GameState::new();
            let mut plies = 0;

            while !state.is_over() && plies < 300 {
                let mv = engine.best_move(&state).unwrap();
                let before = total_pieces(&state);
                state.apply_move(mv.from, mv.to).unwrap();
                plies += 1;

                assert!(state.board.pieces_on_dark_squares(), "depth {} ply {}", depth, plies);
                let expected = if mv.is_capture() { before - 1 } else { before };
                assert_eq!(total_pieces(&state), expected, "depth {} ply {}", depth, plies);

                let json = checkers_core::serialize(&state).unwrap();
                assert_eq!(checkers_core::deserialize(&json).unwrap(), state);
            }
        }
    }
}
