//! 贪婪策略
//!
//! 单层前瞻：对每个走法直接评估走子后的局面，取最优的一步。

use super::{sort_and_truncate, AIConfig, AIStrategy, ScoredMove};
use crate::board::Board;
use crate::types::Player;
use rand::prelude::*;

/// 贪婪 AI - 静态评估最优的一步
pub struct GreedyAI {
    rng: StdRng,
    randomness: f64,
}

impl GreedyAI {
    pub fn new(config: &AIConfig) -> Self {
        let rng = match config.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        GreedyAI {
            rng,
            randomness: config.randomness,
        }
    }
}

impl AIStrategy for GreedyAI {
    fn select_moves(&self, board: &Board, player: Player, n: usize) -> Vec<ScoredMove> {
        let moves = board.get_valid_moves(player);
        let mut rng = self.rng.clone();

        let mut scored: Vec<ScoredMove> = moves
            .into_iter()
            .filter_map(|pos| {
                let mut copy = board.clone();
                copy.apply_move(pos.row, pos.col, player)?;

                let value = copy.evaluate_position();
                let base_score = match player {
                    Player::White => value,
                    Player::Black => -value,
                };
                let noise = if self.randomness > 0.0 {
                    rng.gen::<f64>() * self.randomness
                } else {
                    0.0
                };
                Some(ScoredMove {
                    pos,
                    score: base_score + noise,
                })
            })
            .collect();

        sort_and_truncate(&mut scored, n);
        scored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::parse_board;

    #[test]
    fn test_greedy_prefers_corner() {
        // d4 吃角（翻转 b2、c3），角点权重使其优于其他走法
        let (board, turn) = parse_board("4/1XX1/2XO/3O O").unwrap();
        let config = AIConfig::default();
        let ai = GreedyAI::new(&config);

        let best = ai.select_best_move(&board, turn);
        assert_eq!(best.map(|p| p.to_coord_str()), Some("a1".to_string()));
    }

    #[test]
    fn test_greedy_without_noise_is_deterministic() {
        let board = Board::new(8).unwrap();
        let config = AIConfig::default();

        let first = GreedyAI::new(&config).select_moves(&board, Player::White, 4);
        let second = GreedyAI::new(&config).select_moves(&board, Player::White, 4);
        assert_eq!(first, second);
    }
}
