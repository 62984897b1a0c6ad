//! 黑白棋 AI 引擎
//!
//! Reversi (Othello) 引擎 - 棋盘规则 + 固定深度极小极大搜索

pub mod ai;
pub mod board;
pub mod notation;
pub mod test_positions;
pub mod types;

pub use ai::{
    get_node_count, reset_node_count, strategies_help, AIConfig, AIEngine, AIStrategy,
    AlphaBetaAI, GreedyAI, MinimaxAI, RandomAI, ScoredMove, AVAILABLE_STRATEGIES,
    DEFAULT_STRATEGY,
};
pub use board::{
    Board, MoveRecord, CORNER_WEIGHT, DISC_DIFF_WEIGHT, MAX_BOARD_SIZE, MOBILITY_WEIGHT,
};
pub use notation::{board_to_string, parse_board, parse_square, square_to_string};
pub use types::{GameResult, Player, Position, DIRECTIONS};
