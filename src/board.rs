//! 黑白棋棋盘
//!
//! 使用扁平数组存储格子，走子时沿 8 个方向独立扫描翻转。

use std::cmp::Ordering;
use std::fmt;

use crate::types::{GameResult, Player, Position, DIRECTIONS};

/// 行动力权重（双方合法走法数之差）
pub const MOBILITY_WEIGHT: f64 = 1.0;
/// 子力差权重（双方棋子数之差，并非位置意义上的稳定子）
pub const DISC_DIFF_WEIGHT: f64 = 0.5;
/// 角点权重（四个角格子值之和）
pub const CORNER_WEIGHT: f64 = 2.0;

/// 走子记录，供搜索撤销使用
#[derive(Debug, Clone)]
pub struct MoveRecord {
    pub pos: Position,
    pub player: Player,
    /// 本步翻转的所有格子
    pub flipped: Vec<Position>,
}

/// 棋盘尺寸上限（列坐标 a-z）
pub const MAX_BOARD_SIZE: usize = 26;

fn check_size(size: usize) -> Result<(), String> {
    if size < 2 || size > MAX_BOARD_SIZE || size % 2 != 0 {
        return Err(format!(
            "Invalid board size: {} (must be even, in 2..={})",
            size, MAX_BOARD_SIZE
        ));
    }
    Ok(())
}

/// 黑白棋棋盘
///
/// size x size 个格子，行优先存储：+1 白，-1 黑，0 空。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    squares: Vec<i8>,
}

impl Board {
    /// 创建初始局面的棋盘
    ///
    /// 中心四格按标准开局摆放，白方占主对角线两格。
    /// size 必须为偶数，且在 2..=26 之间（列坐标用单个字母表示）。
    pub fn new(size: usize) -> Result<Board, String> {
        check_size(size)?;

        let mut squares = vec![0i8; size * size];
        let half = size / 2;
        squares[(half - 1) * size + (half - 1)] = Player::White.disc();
        squares[half * size + half] = Player::White.disc();
        squares[(half - 1) * size + half] = Player::Black.disc();
        squares[half * size + (half - 1)] = Player::Black.disc();

        Ok(Board { size, squares })
    }

    /// 从格子数组创建棋盘（notation 模块使用）
    pub(crate) fn from_squares(size: usize, squares: Vec<i8>) -> Result<Board, String> {
        check_size(size)?;
        if squares.len() != size * size {
            return Err(format!(
                "Invalid square count: expected {}, got {}",
                size * size,
                squares.len()
            ));
        }
        Ok(Board { size, squares })
    }

    /// 棋盘边长
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// 获取某格子的值，越界返回 0
    #[inline]
    pub fn get(&self, pos: Position) -> i8 {
        if !pos.is_within(self.size) {
            return 0;
        }
        self.squares[pos.to_index(self.size)]
    }

    /// 检查走法是否合法（纯查询，不修改棋盘）
    ///
    /// 合法条件：目标格在棋盘内且为空，且至少一个方向上紧邻着
    /// 一段连续的对方棋子，以己方棋子收尾，中间无空格或边界。
    pub fn is_valid_move(&self, row: i8, col: i8, player: Player) -> bool {
        let pos = Position::new(row, col);
        if !pos.is_within(self.size) || self.squares[pos.to_index(self.size)] != 0 {
            return false;
        }
        DIRECTIONS
            .iter()
            .any(|&(dr, dc)| self.flips_along(pos, dr, dc, player))
    }

    /// 沿单一方向扫描：是否存在「对方连续段 + 己方收尾」
    fn flips_along(&self, from: Position, dr: i8, dc: i8, player: Player) -> bool {
        let own = player.disc();
        let opponent = player.opponent().disc();
        let mut cur = from.offset(dr, dc);
        let mut seen_opponent = false;

        while cur.is_within(self.size) {
            let value = self.squares[cur.to_index(self.size)];
            if value == opponent {
                seen_opponent = true;
                cur = cur.offset(dr, dc);
            } else if value == own {
                return seen_opponent;
            } else {
                // 空格中断
                return false;
            }
        }
        // 扫出边界
        false
    }

    /// 执行走子，返回撤销记录；非法走法返回 None 且棋盘不变
    ///
    /// 每个方向独立处理：只有以己方棋子收尾的对方连续段才被翻转，
    /// 未收尾的方向不产生任何改动。
    pub fn apply_move(&mut self, row: i8, col: i8, player: Player) -> Option<MoveRecord> {
        if !self.is_valid_move(row, col, player) {
            return None;
        }

        let pos = Position::new(row, col);
        let own = player.disc();
        let opponent = player.opponent().disc();
        self.squares[pos.to_index(self.size)] = own;

        let mut flipped = Vec::new();
        for &(dr, dc) in DIRECTIONS.iter() {
            if !self.flips_along(pos, dr, dc, player) {
                continue;
            }
            let mut cur = pos.offset(dr, dc);
            while self.squares[cur.to_index(self.size)] == opponent {
                self.squares[cur.to_index(self.size)] = own;
                flipped.push(cur);
                cur = cur.offset(dr, dc);
            }
        }

        Some(MoveRecord {
            pos,
            player,
            flipped,
        })
    }

    /// 撤销一步走子，棋盘恢复到走子前的状态
    pub fn undo_move(&mut self, record: &MoveRecord) {
        let opponent = record.player.opponent().disc();
        self.squares[record.pos.to_index(self.size)] = 0;
        for pos in &record.flipped {
            self.squares[pos.to_index(self.size)] = opponent;
        }
    }

    /// 执行走子；非法走法返回 false 且棋盘不变
    pub fn make_move(&mut self, row: i8, col: i8, player: Player) -> bool {
        self.apply_move(row, col, player).is_some()
    }

    /// 获取某方所有合法走法，按行优先扫描顺序返回
    pub fn get_valid_moves(&self, player: Player) -> Vec<Position> {
        let mut moves = Vec::new();
        for row in 0..self.size as i8 {
            for col in 0..self.size as i8 {
                if self.is_valid_move(row, col, player) {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    /// 某方是否存在合法走法（找到即返回）
    pub fn has_valid_move(&self, player: Player) -> bool {
        for row in 0..self.size as i8 {
            for col in 0..self.size as i8 {
                if self.is_valid_move(row, col, player) {
                    return true;
                }
            }
        }
        false
    }

    /// 对局是否结束：双方都没有合法走法
    pub fn is_game_over(&self) -> bool {
        !self.has_valid_move(Player::White) && !self.has_valid_move(Player::Black)
    }

    /// 统计双方棋子数 (白, 黑)
    pub fn count_pieces(&self) -> (usize, usize) {
        let mut white = 0;
        let mut black = 0;
        for &value in &self.squares {
            if value == 1 {
                white += 1;
            } else if value == -1 {
                black += 1;
            }
        }
        (white, black)
    }

    /// 获取对局结果：终局时棋子多者获胜
    pub fn result(&self) -> GameResult {
        if !self.is_game_over() {
            return GameResult::Ongoing;
        }
        let (white, black) = self.count_pieces();
        match white.cmp(&black) {
            Ordering::Greater => GameResult::WhiteWin,
            Ordering::Less => GameResult::BlackWin,
            Ordering::Equal => GameResult::Draw,
        }
    }

    /// 静态启发式评估，始终为白方视角（正值对白方有利）
    ///
    /// 三项加权和：行动力差、子力差、角点占据。
    /// 子力差是纯粹的棋子数之差。
    pub fn evaluate_position(&self) -> f64 {
        let mobility = self.get_valid_moves(Player::White).len() as f64
            - self.get_valid_moves(Player::Black).len() as f64;

        let (white, black) = self.count_pieces();
        let disc_diff = white as f64 - black as f64;

        let last = (self.size - 1) as i8;
        let corners = (self.get(Position::new(0, 0))
            + self.get(Position::new(0, last))
            + self.get(Position::new(last, 0))
            + self.get(Position::new(last, last))) as f64;

        MOBILITY_WEIGHT * mobility + DISC_DIFF_WEIGHT * disc_diff + CORNER_WEIGHT * corners
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                if col > 0 {
                    write!(f, " ")?;
                }
                let symbol = Player::from_disc(self.squares[row * self.size + col])
                    .map(|p| p.to_symbol())
                    .unwrap_or('.');
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_invalid_size() {
        assert!(Board::new(0).is_err());
        assert!(Board::new(3).is_err());
        assert!(Board::new(7).is_err());
        assert!(Board::new(28).is_err());
        assert!(Board::new(2).is_ok());
        assert!(Board::new(8).is_ok());
        assert!(Board::new(26).is_ok());
    }

    #[test]
    fn test_initial_board() {
        let board = Board::new(8).unwrap();

        assert_eq!(board.count_pieces(), (2, 2));
        assert!(!board.is_game_over());
        // 白方占主对角线两格
        assert_eq!(board.get(Position::new(3, 3)), 1);
        assert_eq!(board.get(Position::new(4, 4)), 1);
        assert_eq!(board.get(Position::new(3, 4)), -1);
        assert_eq!(board.get(Position::new(4, 3)), -1);
    }

    #[test]
    fn test_initial_valid_moves() {
        let board = Board::new(8).unwrap();

        // 开局双方各有 4 个合法走法，按行优先顺序
        assert_eq!(
            board.get_valid_moves(Player::White),
            vec![
                Position::new(2, 4),
                Position::new(3, 5),
                Position::new(4, 2),
                Position::new(5, 3),
            ]
        );
        assert_eq!(
            board.get_valid_moves(Player::Black),
            vec![
                Position::new(2, 3),
                Position::new(3, 2),
                Position::new(4, 5),
                Position::new(5, 4),
            ]
        );
    }

    #[test]
    fn test_make_move_flips() {
        let mut board = Board::new(8).unwrap();

        assert!(board.make_move(2, 4, Player::White));
        // (3,4) 的黑子被翻转
        assert_eq!(board.get(Position::new(2, 4)), 1);
        assert_eq!(board.get(Position::new(3, 4)), 1);
        assert_eq!(board.count_pieces(), (4, 1));
    }

    #[test]
    fn test_invalid_move_leaves_board_unchanged() {
        let mut board = Board::new(8).unwrap();
        let before = board.clone();

        // 不产生翻转的空格
        assert!(!board.make_move(0, 0, Player::White));
        // 已占用的格子
        assert!(!board.make_move(3, 3, Player::White));
        // 越界
        assert!(!board.make_move(-1, 0, Player::White));
        assert!(!board.make_move(8, 0, Player::White));

        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_undo_roundtrip() {
        let mut board = Board::new(8).unwrap();
        let before = board.clone();

        let record = board.apply_move(2, 4, Player::White).unwrap();
        assert_ne!(board, before);
        assert_eq!(record.flipped, vec![Position::new(3, 4)]);

        board.undo_move(&record);
        assert_eq!(board, before);
    }

    #[test]
    fn test_clone_independence() {
        let board = Board::new(8).unwrap();
        let mut copy = board.clone();

        assert!(copy.make_move(2, 4, Player::White));
        assert_eq!(board.count_pieces(), (2, 2));
        assert_ne!(board, copy);
    }

    #[test]
    fn test_min_board_is_immediately_over() {
        // 2x2 棋盘开局即满
        let board = Board::new(2).unwrap();
        assert_eq!(board.count_pieces(), (2, 2));
        assert!(board.is_game_over());
        assert_eq!(board.result(), GameResult::Draw);
    }

    #[test]
    fn test_result_white_win() {
        // 只剩白子：双方均无走法，白方获胜
        let mut squares = vec![0i8; 16];
        squares[0] = 1;
        squares[1] = 1;
        let board = Board::from_squares(4, squares).unwrap();

        assert!(board.is_game_over());
        assert_eq!(board.result(), GameResult::WhiteWin);
    }

    #[test]
    fn test_piece_counts_bounded() {
        let mut board = Board::new(8).unwrap();
        board.make_move(2, 4, Player::White);
        board.make_move(2, 3, Player::Black);

        let (white, black) = board.count_pieces();
        assert!(white + black <= 64);
        // 空格 + 双方棋子 = 格子总数
        let empties = (0..8)
            .flat_map(|r| (0..8).map(move |c| Position::new(r, c)))
            .filter(|p| board.get(*p) == 0)
            .count();
        assert_eq!(empties + white + black, 64);
    }

    #[test]
    fn test_heuristic_initial_is_zero() {
        // 开局对称：行动力差 0，子力差 0，角点 0
        let board = Board::new(8).unwrap();
        assert_eq!(board.evaluate_position(), 0.0);
    }

    #[test]
    fn test_heuristic_corner_and_material() {
        // 仅 (0,0) 一枚白子：子力差 0.5，角点 2.0
        let mut squares = vec![0i8; 16];
        squares[0] = 1;
        let board = Board::from_squares(4, squares).unwrap();

        assert_eq!(board.evaluate_position(), 2.5);
    }

    #[test]
    fn test_identical_sequences_identical_grids() {
        let mut a = Board::new(8).unwrap();
        let mut b = Board::new(8).unwrap();

        for (row, col, player) in [
            (2, 4, Player::White),
            (2, 3, Player::Black),
            (2, 2, Player::White),
        ] {
            assert!(a.make_move(row, col, player));
            assert!(b.make_move(row, col, player));
        }
        assert_eq!(a, b);
    }
}
