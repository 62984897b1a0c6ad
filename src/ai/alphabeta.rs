//! Alpha-Beta 剪枝搜索策略
//!
//! 与极小极大同一棵搜索树、同一评估，只是剪去不影响结果的分支。
//! 根节点的每个走法都用全窗口搜索，根分数与极小极大完全一致，
//! 因此两种策略可以互换使用。

use super::{sort_and_truncate, AIConfig, AIStrategy, ScoredMove, NODE_COUNT};
use crate::board::Board;
use crate::types::Player;
use std::sync::atomic::Ordering;

/// Alpha-Beta 剪枝 AI
pub struct AlphaBetaAI {
    depth: u32,
}

impl AlphaBetaAI {
    pub fn new(config: &AIConfig) -> Self {
        AlphaBetaAI {
            depth: config.depth,
        }
    }

    /// 带窗口的递归评估
    ///
    /// 终止条件与停一手处理和极小极大完全相同。
    pub fn evaluate(
        board: &mut Board,
        depth: u32,
        maximizing: bool,
        mut alpha: f64,
        mut beta: f64,
    ) -> f64 {
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
                let value = Self::evaluate(board, depth - 1, !maximizing, alpha, beta);
                board.undo_move(&record);

                if maximizing {
                    best = best.max(value);
                    alpha = alpha.max(value);
                } else {
                    best = best.min(value);
                    beta = beta.min(value);
                }
                if alpha >= beta {
                    // 剪枝
                    break;
                }
            }
        }
        best
    }
}

impl AIStrategy for AlphaBetaAI {
    fn select_moves(&self, board: &Board, player: Player, n: usize) -> Vec<ScoredMove> {
        let moves = board.get_valid_moves(player);
        let child_maximizing = player == Player::Black;

        let mut scored: Vec<ScoredMove> = moves
            .into_iter()
            .filter_map(|pos| {
                let mut copy = board.clone();
                copy.apply_move(pos.row, pos.col, player)?;
                // 每个根走法独立使用全窗口，保证根分数精确
                let value = Self::evaluate(
                    &mut copy,
                    self.depth.saturating_sub(1),
                    child_maximizing,
                    f64::NEG_INFINITY,
                    f64::INFINITY,
                );
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::MinimaxAI;

    #[test]
    fn test_full_window_equals_minimax_value() {
        let mut a = Board::new(8).unwrap();
        let mut b = a.clone();

        for depth in 0..4 {
            for maximizing in [true, false] {
                let plain = MinimaxAI::evaluate(&mut a, depth, maximizing);
                let pruned = AlphaBetaAI::evaluate(
                    &mut b,
                    depth,
                    maximizing,
                    f64::NEG_INFINITY,
                    f64::INFINITY,
                );
                assert_eq!(plain, pruned, "depth={} maximizing={}", depth, maximizing);
            }
        }
    }

    #[test]
    fn test_pass_node_matches_minimax() {
        use crate::notation::parse_board;

        // 白方需要停一手的局面，两种搜索的处理一致
        let (board, _) = parse_board("XO2/4/4/4 O").unwrap();
        let mut a = board.clone();
        let mut b = board;

        let plain = MinimaxAI::evaluate(&mut a, 3, true);
        let pruned =
            AlphaBetaAI::evaluate(&mut b, 3, true, f64::NEG_INFINITY, f64::INFINITY);
        assert!(plain.is_finite());
        assert_eq!(plain, pruned);
    }
}
