//! 棋局存档格式
//!
//! 以 JSON 存储完整对局状态，供外部服务按会话 ID 持久化。
//! `last_updated` 用于外部按不活跃时长清理过期对局。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::RECORD_VERSION;
use crate::error::{RecordError, Result};
use crate::game::GameState;

/// 棋局存档
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// 版本号
    pub version: u8,
    /// 对局状态（棋盘、走子方、结果、重复局面历史）
    pub state: GameState,
    /// 最后更新时间
    pub last_updated: DateTime<Utc>,
}

impl GameRecord {
    /// 以当前时间创建存档
    pub fn new(state: GameState) -> Self {
        Self {
            version: RECORD_VERSION,
            state,
            last_updated: Utc::now(),
        }
    }

    /// 刷新更新时间
    pub fn touch(&mut self) {
        self.last_updated = Utc::now();
    }

    /// 距上次更新是否已超过指定时长
    pub fn is_stale(&self, now: DateTime<Utc>, max_idle: chrono::Duration) -> bool {
        now - self.last_updated > max_idle
    }

    /// 转换为 JSON 字符串
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// 从 JSON 字符串解析并校验
    pub fn from_json(json: &str) -> Result<Self> {
        let record: GameRecord = serde_json::from_str(json)?;
        record.validate()?;
        Ok(record)
    }

    /// 校验版本和棋盘
    fn validate(&self) -> Result<()> {
        if self.version != RECORD_VERSION {
            return Err(RecordError::VersionMismatch {
                expected: RECORD_VERSION,
                actual: self.version,
            });
        }

        if let Some((pos, _)) = self
            .state
            .board
            .all_pieces()
            .into_iter()
            .find(|(pos, _)| !pos.is_dark())
        {
            return Err(RecordError::InvalidBoard(pos));
        }

        Ok(())
    }
}

/// 序列化对局状态
///
/// 写入当前时间作为 `last_updated`；需要保留原有时间戳的调用方
/// 应直接使用 [`GameRecord`]。
pub fn serialize(state: &GameState) -> Result<String> {
    GameRecord::new(state.clone()).to_json()
}

/// 反序列化对局状态
///
/// 只返回对局状态，`last_updated` 被丢弃；需要时间戳时使用
/// [`GameRecord::from_json`]。
pub fn deserialize(json: &str) -> Result<GameState> {
    GameRecord::from_json(json).map(|record| record.state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Winner;
    use crate::notation::Notation;
    use crate::piece::Position;

    fn pos(row: u8, col: u8) -> Position {
        Position::new_unchecked(row, col)
    }

    #[test]
    fn test_round_trip_initial() {
        let state = GameState::new();
        let json = serialize(&state).unwrap();
        assert_eq!(deserialize(&json).unwrap(), state);
    }

    #[test]
    fn test_round_trip_mid_game() {
        let mut state = GameState::new();
        state.apply_move(pos(5, 2), pos(4, 3)).unwrap();
        state.apply_move(pos(2, 1), pos(3, 2)).unwrap();
        state.apply_move(pos(4, 3), pos(2, 1)).unwrap();

        let restored = deserialize(&serialize(&state).unwrap()).unwrap();
        assert_eq!(restored.board, state.board);
        assert_eq!(restored.turn, state.turn);
        assert_eq!(restored.winner, state.winner);
        assert_eq!(restored.position_history, state.position_history);
        assert_eq!(restored.position_history.len(), 3);
    }

    #[test]
    fn test_round_trip_finished_game() {
        let mut state =
            Notation::parse("......../......../......../......../...r..../..b...../......../........ b")
                .unwrap();
        state.apply_move(pos(5, 2), pos(3, 4)).unwrap();
        assert_eq!(state.winner, Some(Winner::Blue));

        let restored = deserialize(&serialize(&state).unwrap()).unwrap();
        assert_eq!(restored, state);
    }

    #[test]
    fn test_version_mismatch() {
        let mut record = GameRecord::new(GameState::new());
        record.version = RECORD_VERSION + 1;
        let json = serde_json::to_string(&record).unwrap();

        let err = GameRecord::from_json(&json).unwrap_err();
        assert!(matches!(err, RecordError::VersionMismatch { .. }));
    }

    #[test]
    fn test_light_square_rejected() {
        let mut state = GameState::new();
        state.board.set(pos(4, 4), crate::piece::Cell::RedMan);
        let json = serialize(&state).unwrap();

        let err = deserialize(&json).unwrap_err();
        assert!(matches!(err, RecordError::InvalidBoard(p) if p == pos(4, 4)));
    }

    #[test]
    fn test_malformed_json() {
        let err = deserialize("{not json").unwrap_err();
        assert!(matches!(err, RecordError::Json(_)));
    }

    #[test]
    fn test_record_keeps_timestamp() {
        let mut record = GameRecord::new(GameState::new());
        record.last_updated -= chrono::Duration::hours(1);
        let saved = record.last_updated;

        let restored = GameRecord::from_json(&record.to_json().unwrap()).unwrap();
        assert_eq!(restored.last_updated, saved);
        assert_eq!(restored, record);

        record.touch();
        assert!(record.last_updated > saved);
    }

    #[test]
    fn test_staleness() {
        let record = GameRecord::new(GameState::new());
        let later = record.last_updated + chrono::Duration::hours(13);

        assert!(record.is_stale(later, chrono::Duration::hours(12)));
        assert!(!record.is_stale(record.last_updated, chrono::Duration::hours(12)));
    }
}
