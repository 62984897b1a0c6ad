//! 黑白棋测试局面库
//!
//! 提供命名的测试局面，方便测试和调试
//!
//! 命名规范:
//! - START_n: 初始局面（n 为棋盘边长）
//! - MID_n: 中局
//! - PASS_n: 一方需要停一手的局面
//! - FORCED_n: 行棋方只有唯一走法的局面
//! - END_n: 终局

// =============================================================================
// 初始局面 (START)
// =============================================================================

/// 8x8 标准初始局面
pub const START_8: &str = "8/8/8/3OX3/3XO3/8/8/8 O";

/// 4x4 最小实用棋盘的初始局面
pub const START_4: &str = "4/1OX1/1XO1/4 O";

// =============================================================================
// 中局 (MID)
// =============================================================================

/// 白方走 e3 之后的局面，轮黑方
pub const MID_1: &str = "8/8/4O3/3OO3/3XO3/8/8/8 X";

// =============================================================================
// 停一手 (PASS)
// =============================================================================

/// 白方无合法走法，黑方还有一步（对局未结束）
pub const PASS_1: &str = "XO2/4/4/4 O";

// =============================================================================
// 唯一走法 (FORCED)
// =============================================================================

/// 双方各只剩一个合法走法：白 a1，黑 d1
pub const FORCED_1: &str = "1XO1/4/4/4 O";

// =============================================================================
// 终局 (END)
// =============================================================================

/// 2x2 棋盘开局即终局，平局
pub const END_DRAW: &str = "OX/XO O";

/// 棋盘上只剩白子，白方获胜
pub const END_WHITE: &str = "OO2/4/4/4 O";

/// 所有测试局面
pub const ALL_POSITIONS: [&str; 7] = [
    START_8, START_4, MID_1, PASS_1, FORCED_1, END_DRAW, END_WHITE,
];
