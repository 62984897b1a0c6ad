//! 搜索性能基准
//!
//! 从初始局面测量 select_best_move，对比极小极大与 Alpha-Beta 剪枝。

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use reversi_ai::{AIConfig, AIEngine, Board, Player};

fn bench_select_best_move(c: &mut Criterion) {
    let board = Board::new(8).unwrap();

    for depth in [1, 2, 3] {
        let config = AIConfig {
            depth,
            ..Default::default()
        };

        let minimax = AIEngine::minimax(&config);
        c.bench_function(&format!("minimax_depth_{}", depth), |b| {
            b.iter(|| minimax.select_best_move(black_box(&board), Player::White))
        });

        let alphabeta = AIEngine::alphabeta(&config);
        c.bench_function(&format!("alphabeta_depth_{}", depth), |b| {
            b.iter(|| alphabeta.select_best_move(black_box(&board), Player::White))
        });
    }
}

criterion_group!(benches, bench_select_best_move);
criterion_main!(benches);
