//! AI 策略模块
//!
//! 提供多种 AI 策略实现：随机、贪婪、极小极大、Alpha-Beta 剪枝

mod alphabeta;
mod greedy;
mod minimax;
mod random;

pub use alphabeta::AlphaBetaAI;
pub use greedy::GreedyAI;
pub use minimax::MinimaxAI;
pub use random::RandomAI;

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

/// 全局节点计数器
pub static NODE_COUNT: AtomicU64 = AtomicU64::new(0);

/// 重置节点计数器
pub fn reset_node_count() {
    NODE_COUNT.store(0, AtomicOrdering::Relaxed);
}

/// 获取当前节点计数
pub fn get_node_count() -> u64 {
    NODE_COUNT.load(AtomicOrdering::Relaxed)
}

use crate::board::Board;
use crate::notation::parse_board;
use crate::types::{Player, Position};
use std::cmp::Ordering;

/// 可用策略名称
pub const AVAILABLE_STRATEGIES: [&str; 4] = ["random", "greedy", "minimax", "alphabeta"];

/// 默认策略
pub const DEFAULT_STRATEGY: &str = "minimax";

/// 策略说明
pub fn strategies_help() -> String {
    format!("Available strategies: {}", AVAILABLE_STRATEGIES.join(", "))
}

/// AI 配置
#[derive(Debug, Clone)]
pub struct AIConfig {
    /// 搜索深度
    pub depth: u32,
    /// 随机性（0.0-1.0，仅 random/greedy 使用）
    pub randomness: f64,
    /// 随机种子
    pub seed: Option<u64>,
}

impl Default for AIConfig {
    fn default() -> Self {
        AIConfig {
            depth: 3,
            randomness: 0.0,
            seed: None,
        }
    }
}

/// 走法评分
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredMove {
    pub pos: Position,
    pub score: f64,
}

/// AI 策略接口
///
/// 分数统一为行棋方视角：越大对行棋方越有利。
pub trait AIStrategy {
    /// 为某方选择走法（返回带评分的走法列表，按分数降序）
    fn select_moves(&self, board: &Board, player: Player, n: usize) -> Vec<ScoredMove>;

    /// 为某方选择最佳走法；无合法走法时返回 None
    fn select_best_move(&self, board: &Board, player: Player) -> Option<Position> {
        self.select_moves(board, player, 1).first().map(|sm| sm.pos)
    }
}

/// 排序辅助函数（稳定排序，同分走法保持扫描顺序）
pub(crate) fn sort_and_truncate(scored: &mut Vec<ScoredMove>, n: usize) {
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored.truncate(n);
}

/// AI 引擎 - 统一的 AI 接口
pub struct AIEngine {
    strategy: Box<dyn AIStrategy>,
}

impl AIEngine {
    /// 创建随机 AI
    pub fn random(seed: Option<u64>) -> Self {
        AIEngine {
            strategy: Box::new(RandomAI::new(seed)),
        }
    }

    /// 创建贪婪 AI
    pub fn greedy(config: &AIConfig) -> Self {
        AIEngine {
            strategy: Box::new(GreedyAI::new(config)),
        }
    }

    /// 创建极小极大 AI
    pub fn minimax(config: &AIConfig) -> Self {
        AIEngine {
            strategy: Box::new(MinimaxAI::new(config)),
        }
    }

    /// 创建 Alpha-Beta 剪枝 AI
    pub fn alphabeta(config: &AIConfig) -> Self {
        AIEngine {
            strategy: Box::new(AlphaBetaAI::new(config)),
        }
    }

    /// 从策略名称创建
    pub fn from_strategy(name: &str, config: &AIConfig) -> Result<Self, String> {
        match name.to_lowercase().as_str() {
            "random" => Ok(Self::random(config.seed)),
            "greedy" => Ok(Self::greedy(config)),
            "minimax" => Ok(Self::minimax(config)),
            "alphabeta" | "alpha_beta" => Ok(Self::alphabeta(config)),
            _ => Err(format!(
                "Unknown strategy: {}. Available: {}",
                name,
                AVAILABLE_STRATEGIES.join(", ")
            )),
        }
    }

    /// 为某方选择走法
    pub fn select_moves(&self, board: &Board, player: Player, n: usize) -> Vec<ScoredMove> {
        self.strategy.select_moves(board, player, n)
    }

    /// 为某方选择最佳走法
    pub fn select_best_move(&self, board: &Board, player: Player) -> Option<Position> {
        self.strategy.select_best_move(board, player)
    }

    /// 从棋盘字符串选择走法（返回坐标与评分）
    pub fn select_moves_text(&self, text: &str, n: usize) -> Result<Vec<(String, f64)>, String> {
        let (board, turn) = parse_board(text)?;
        Ok(self
            .strategy
            .select_moves(&board, turn, n)
            .into_iter()
            .map(|sm| (sm.pos.to_coord_str(), sm.score))
            .collect())
    }

    /// 从棋盘字符串选择最佳走法
    pub fn select_best_move_text(&self, text: &str) -> Result<Option<String>, String> {
        let (board, turn) = parse_board(text)?;
        Ok(self
            .strategy
            .select_best_move(&board, turn)
            .map(|pos| pos.to_coord_str()))
    }
}
