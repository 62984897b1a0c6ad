//! 棋盘与坐标的文本表示
//!
//! 棋盘格式: `<棋盘> <行棋方>`
//!
//! 棋盘符号：
//! - 白子：O
//! - 黑子：X
//! - 空格：数字（连续空格的个数）
//! - 行之间用 / 分隔，自上而下
//!
//! 例（8x8 初始局面）：`8/8/8/3OX3/3XO3/8/8/8 O`
//!
//! 坐标格式：列字母 + 1 起始的行号，如 `d3`。

use crate::board::Board;
use crate::types::{Player, Position};

/// 解析棋盘字符串，返回棋盘与行棋方
pub fn parse_board(text: &str) -> Result<(Board, Player), String> {
    let parts: Vec<&str> = text.split_whitespace().collect();
    if parts.len() != 2 {
        return Err(format!(
            "Invalid board format: expected '<board> <turn>', got: {}",
            text
        ));
    }

    let rows: Vec<&str> = parts[0].split('/').collect();
    let size = rows.len();

    let mut squares: Vec<i8> = Vec::with_capacity(size * size);
    for (row_idx, row) in rows.iter().enumerate() {
        let mut filled = 0usize;
        let mut run = 0usize;
        for c in row.chars() {
            if let Some(digit) = c.to_digit(10) {
                run = run * 10 + digit as usize;
                continue;
            }
            squares.extend(std::iter::repeat(0).take(run));
            filled += run;
            run = 0;
            match Player::from_symbol(c) {
                Some(player) => {
                    squares.push(player.disc());
                    filled += 1;
                }
                None => return Err(format!("Invalid board symbol: {}", c)),
            }
        }
        squares.extend(std::iter::repeat(0).take(run));
        filled += run;

        if filled != size {
            return Err(format!(
                "Invalid row {}: expected {} squares, got {}",
                row_idx + 1,
                size,
                filled
            ));
        }
    }

    let turn = parse_turn(parts[1])?;
    let board = Board::from_squares(size, squares)?;
    Ok((board, turn))
}

fn parse_turn(text: &str) -> Result<Player, String> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => {
            Player::from_symbol(c).ok_or_else(|| format!("Invalid turn field: {}", text))
        }
        _ => Err(format!("Invalid turn field: {}", text)),
    }
}

/// 生成棋盘字符串
pub fn board_to_string(board: &Board, turn: Player) -> String {
    let size = board.size();
    let mut rows = Vec::with_capacity(size);

    for row in 0..size as i8 {
        let mut text = String::new();
        let mut run = 0usize;
        for col in 0..size as i8 {
            match Player::from_disc(board.get(Position::new(row, col))) {
                Some(player) => {
                    if run > 0 {
                        text.push_str(&run.to_string());
                        run = 0;
                    }
                    text.push(player.to_symbol());
                }
                None => run += 1,
            }
        }
        if run > 0 {
            text.push_str(&run.to_string());
        }
        rows.push(text);
    }

    format!("{} {}", rows.join("/"), turn.to_symbol())
}

/// 解析坐标字符串并检查是否在棋盘内
pub fn parse_square(text: &str, size: usize) -> Result<Position, String> {
    let pos =
        Position::from_coord_str(text).ok_or_else(|| format!("Invalid square: {}", text))?;
    if !pos.is_within(size) {
        return Err(format!("Square out of board: {}", text));
    }
    Ok(pos)
}

/// 坐标转字符串
pub fn square_to_string(pos: Position) -> String {
    pos.to_coord_str()
}
