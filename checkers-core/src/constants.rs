//! 引擎常量定义

/// 棋盘边长（8x8）
pub const BOARD_SIZE: usize = 8;

/// 每方初始棋子数
pub const PIECES_PER_SIDE: usize = 12;

/// 同一局面出现多少次判和
pub const REPETITION_DRAW_THRESHOLD: u32 = 5;

/// 走子成功时返回给调用方的消息
pub const MOVE_SUCCESS_MESSAGE: &str = "Move successful";

/// 棋谱记录格式版本
pub const RECORD_VERSION: u8 = 1;
