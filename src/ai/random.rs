//! 随机策略
//!
//! 随机选择合法走法，主要用作基准和测试对手。

use super::{sort_and_truncate, AIStrategy, ScoredMove};
use crate::board::Board;
use crate::types::Player;
use rand::prelude::*;

/// 随机 AI
pub struct RandomAI {
    rng: StdRng,
}

impl RandomAI {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        RandomAI { rng }
    }
}

impl AIStrategy for RandomAI {
    fn select_moves(&self, board: &Board, player: Player, n: usize) -> Vec<ScoredMove> {
        let moves = board.get_valid_moves(player);
        let mut rng = self.rng.clone();

        let mut scored: Vec<ScoredMove> = moves
            .into_iter()
            .map(|pos| ScoredMove {
                pos,
                score: rng.gen::<f64>(),
            })
            .collect();

        sort_and_truncate(&mut scored, n);
        scored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_random_is_reproducible() {
        let board = Board::new(8).unwrap();

        let first = RandomAI::new(Some(42)).select_moves(&board, Player::Black, 4);
        let second = RandomAI::new(Some(42)).select_moves(&board, Player::Black, 4);
        assert_eq!(first, second);
    }

    #[test]
    fn test_only_legal_moves_returned() {
        let board = Board::new(8).unwrap();
        let moves = RandomAI::new(Some(7)).select_moves(&board, Player::White, 64);

        assert_eq!(moves.len(), 4);
        for sm in moves {
            assert!(board.is_valid_move(sm.pos.row, sm.pos.col, Player::White));
        }
    }
}
