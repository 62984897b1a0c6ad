//! 极小极大搜索策略
//!
//! 固定深度的穷举搜索，不剪枝。叶子节点用棋盘静态评估，
//! 评估始终为白方视角：白方层取最大值，黑方层取最小值。

use super::{sort_and_truncate, AIConfig, AIStrategy, ScoredMove, NODE_COUNT};
use crate::board::Board;
use crate::types::Player;
use std::sync::atomic::Ordering;

/// 极小极大 AI
pub struct MinimaxAI {
    depth: u32,
}

impl MinimaxAI {
    pub fn new(config: &AIConfig) -> Self {
        MinimaxAI {
            depth: config.depth,
        }
    }

    /// 递归评估局面
    ///
    /// maximizing 为 true 时轮到白方走棋，否则轮到黑方。
    /// 行棋方无合法走法而对局未结束时（需要停一手），
    /// 直接返回静态评估，避免对空走法集取极值产生无穷哨兵。
    pub fn evaluate(board: &mut Board, depth: u32, maximizing: bool) -> f64 {
        NODE_COUNT.fetch_add(1, Ordering::Relaxed);

        if depth == 0 || board.is_game_over() {
            return board.evaluate_position();
        }

        let side = if maximizing {
            Player::White
        } else {
            Player::Black
        };
        let moves = board.get_valid_moves(side);
        if moves.is_empty() {
            // 停一手
            return board.evaluate_position();
        }

        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        for pos in moves {
            if let Some(record) = board.apply_move(pos.row, pos.col, side) {
                let value = Self::evaluate(board, depth - 1, !maximizing);
                board.undo_move(&record);

                best = if maximizing {
                    best.max(value)
                } else {
                    best.min(value)
                };
            }
        }
        best
    }
}

impl AIStrategy for MinimaxAI {
    fn select_moves(&self, board: &Board, player: Player, n: usize) -> Vec<ScoredMove> {
        let moves = board.get_valid_moves(player);
        // 根走法之后轮到对方
        let child_maximizing = player == Player::Black;

        let mut scored: Vec<ScoredMove> = moves
            .into_iter()
            .filter_map(|pos| {
                let mut copy = board.clone();
                copy.apply_move(pos.row, pos.col, player)?;
                let value =
                    Self::evaluate(&mut copy, self.depth.saturating_sub(1), child_maximizing);
                // 统一为行棋方视角
                let score = match player {
                    Player::White => value,
                    Player::Black => -value,
                };
                Some(ScoredMove { pos, score })
            })
            .collect();

        sort_and_truncate(&mut scored, n);
        scored
    }
}
