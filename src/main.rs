//! 黑白棋 AI CLI
//!
//! 命令行界面，用于对弈和测试 AI
//!
//! 支持两种模式：
//! 1. 单次命令模式：每次执行一个命令
//! 2. Server 模式：长驻进程，通过 stdin/stdout 通信

use clap::{Parser, Subcommand};
use reversi_ai::{
    get_node_count, parse_board, parse_square, reset_node_count, AIConfig, AIEngine, Board,
    GameResult, Player, DEFAULT_STRATEGY,
};
use serde::{Deserialize, Serialize};
use std::io::{self, BufRead, Write};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "reversi-ai")]
#[command(about = "Reversi (Othello) AI Engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 人机对弈（AI 执白先行，人类执黑）
    Play {
        /// 棋盘边长（偶数，2-26）
        #[arg(long, default_value = "8")]
        size: usize,

        /// 搜索深度
        #[arg(long, default_value = "3")]
        depth: u32,

        /// AI 策略 (random, greedy, minimax, alphabeta)
        #[arg(long, default_value = DEFAULT_STRATEGY)]
        strategy: String,

        /// 随机种子（random/greedy 使用）
        #[arg(long)]
        seed: Option<u64>,
    },

    /// 获取合法走法
    Moves {
        /// 棋盘字符串
        #[arg(long)]
        board: String,
    },

    /// 选择最佳走法
    Best {
        /// 棋盘字符串
        #[arg(long)]
        board: String,

        /// AI 策略 (random, greedy, minimax, alphabeta)
        #[arg(long, default_value = DEFAULT_STRATEGY)]
        strategy: String,

        /// 搜索深度
        #[arg(long, default_value = "3")]
        depth: u32,

        /// 返回的走法数量
        #[arg(long, default_value = "1")]
        n: usize,

        /// JSON 输出
        #[arg(long)]
        json: bool,
    },

    /// 评估局面分数
    Score {
        /// 棋盘字符串
        #[arg(long)]
        board: String,

        /// JSON 输出
        #[arg(long)]
        json: bool,
    },

    /// 启动 server 模式（stdin/stdout 通信）
    Server,
}

#[derive(Serialize, Deserialize)]
struct MoveResult {
    #[serde(rename = "move")]
    mv: String,
    score: f64,
}

#[derive(Serialize, Deserialize)]
struct MovesResponse {
    moves: Vec<MoveResult>,
    total: usize,
}

// Server 模式的请求和响应结构
#[derive(Serialize, Deserialize)]
struct ServerRequest {
    cmd: String,
    #[serde(default)]
    board: String,
    #[serde(default)]
    strategy: Option<String>,
    #[serde(default)]
    depth: Option<u32>,
    #[serde(default)]
    n: Option<usize>,
}

#[derive(Serialize, Deserialize, Default)]
struct ServerResponse {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    moves: Option<Vec<MoveResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    legal_moves: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    nodes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    nps: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    elapsed_ms: Option<f64>,
    // eval 命令的字段
    #[serde(skip_serializing_if = "Option::is_none")]
    eval: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    turn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ServerResponse {
    fn success_moves(moves: Vec<MoveResult>, nodes: u64, nps: f64, elapsed_ms: f64) -> Self {
        Self {
            ok: true,
            moves: Some(moves),
            nodes: Some(nodes),
            nps: Some(nps),
            elapsed_ms: Some(elapsed_ms),
            ..Default::default()
        }
    }

    fn success_legal_moves(legal_moves: Vec<String>) -> Self {
        Self {
            ok: true,
            legal_moves: Some(legal_moves),
            ..Default::default()
        }
    }

    fn success_eval(eval_score: f64, turn: Player) -> Self {
        Self {
            ok: true,
            eval: Some(eval_score),
            turn: Some(turn.to_symbol().to_string()),
            ..Default::default()
        }
    }

    fn error(msg: &str) -> Self {
        Self {
            ok: false,
            error: Some(msg.to_string()),
            ..Default::default()
        }
    }
}

fn calc_nps(nodes: u64, elapsed_secs: f64) -> f64 {
    if elapsed_secs > 0.0 {
        nodes as f64 / elapsed_secs
    } else {
        0.0
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            size,
            depth,
            strategy,
            seed,
        } => {
            if let Err(e) = run_play(size, depth, &strategy, seed) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }

        Commands::Moves { board } => match parse_board(&board) {
            Ok((board, turn)) => {
                let moves = board.get_valid_moves(turn);
                println!("Legal moves for {} ({}):", turn, moves.len());
                for pos in &moves {
                    println!("  {}", pos);
                }
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },

        Commands::Best {
            board,
            strategy,
            depth,
            n,
            json,
        } => {
            let config = AIConfig {
                depth,
                randomness: 0.0,
                seed: None,
            };

            let ai = match AIEngine::from_strategy(&strategy, &config) {
                Ok(ai) => ai,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            };

            // 重置计数器
            reset_node_count();
            let start = Instant::now();

            match ai.select_moves_text(&board, n) {
                Ok(moves) => {
                    let elapsed = start.elapsed().as_secs_f64();
                    let nodes = get_node_count();
                    let nps = calc_nps(nodes, elapsed);

                    if json {
                        let response = MovesResponse {
                            total: moves.len(),
                            moves: moves
                                .into_iter()
                                .map(|(mv, score)| MoveResult { mv, score })
                                .collect(),
                        };
                        println!("{}", serde_json::to_string_pretty(&response).unwrap());
                        eprintln!(
                            "Stats: depth={}, nodes={}, time={:.3}s, nps={:.0}",
                            depth, nodes, elapsed, nps
                        );
                    } else {
                        println!("Best moves (strategy={}):", strategy);
                        for (mv, score) in moves {
                            println!("  {} (score: {:.2})", mv, score);
                        }
                        println!(
                            "\nStats: depth={}, nodes={}, time={:.3}s, nps={:.0}",
                            depth, nodes, elapsed, nps
                        );
                    }
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Score { board, json } => match parse_board(&board) {
            Ok((parsed, turn)) => {
                let score = parsed.evaluate_position();

                if json {
                    println!(
                        "{{\"board\": {:?}, \"turn\": \"{}\", \"score\": {:.2}}}",
                        board,
                        turn.to_symbol(),
                        score
                    );
                } else {
                    println!("局面评估 (白方视角): {:.2}", score);
                    println!("轮到: {}", turn);
                }
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },

        Commands::Server => {
            run_server();
        }
    }
}

/// 人机对弈主循环
///
/// AI 执白先行；一方无合法走法时跳过该方回合（对局未结束时）。
fn run_play(size: usize, depth: u32, strategy: &str, seed: Option<u64>) -> Result<(), String> {
    let mut board = Board::new(size)?;
    let config = AIConfig {
        depth,
        randomness: 0.0,
        seed,
    };
    let ai = AIEngine::from_strategy(strategy, &config)?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("{}", board);

    while !board.is_game_over() {
        // AI 回合（白方）
        if let Some(pos) = ai.select_best_move(&board, Player::White) {
            board.make_move(pos.row, pos.col, Player::White);
            println!("AI plays {}", pos);
            println!("{}", board);
        } else {
            println!("White has no legal moves, turn skipped");
        }

        if board.is_game_over() {
            break;
        }

        // 人类回合（黑方）
        if board.has_valid_move(Player::Black) {
            loop {
                print!("Enter your move (e.g. d3): ");
                io::stdout().flush().map_err(|e| e.to_string())?;

                let line = match lines.next() {
                    Some(l) => l.map_err(|e| e.to_string())?,
                    None => return Err("stdin closed".to_string()),
                };
                let pos = match parse_square(line.trim(), board.size()) {
                    Ok(p) => p,
                    Err(e) => {
                        println!("{}", e);
                        continue;
                    }
                };
                if board.make_move(pos.row, pos.col, Player::Black) {
                    break;
                }
                println!("Invalid move. Try again.");
            }
            println!("{}", board);
        } else {
            println!("Black has no legal moves, turn skipped");
        }
    }

    let (white, black) = board.count_pieces();
    println!("Game Over!");
    println!("White (AI) score: {}", white);
    println!("Black (You) score: {}", black);

    match board.result() {
        GameResult::WhiteWin => println!("White (AI) wins!"),
        GameResult::BlackWin => println!("Black (You) wins!"),
        GameResult::Draw => println!("It's a tie!"),
        GameResult::Ongoing => {}
    }
    Ok(())
}

/// Server 模式主循环
///
/// 从 stdin 读取 JSON 请求，返回 JSON 响应到 stdout
fn run_server() {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        // 空行跳过
        if line.trim().is_empty() {
            continue;
        }

        // 解析请求
        let request: ServerRequest = match serde_json::from_str(&line) {
            Ok(r) => r,
            Err(e) => {
                let response = ServerResponse::error(&format!("Invalid JSON: {}", e));
                println!("{}", serde_json::to_string(&response).unwrap());
                let _ = stdout.flush();
                continue;
            }
        };

        log::debug!("server request: cmd={}", request.cmd);

        // 处理命令
        let response = match request.cmd.as_str() {
            "best" => handle_best_request(&request),
            "moves" => handle_moves_request(&request),
            "eval" => handle_eval_request(&request),
            "quit" => break,
            _ => ServerResponse::error(&format!("Unknown command: {}", request.cmd)),
        };

        // 返回响应
        println!("{}", serde_json::to_string(&response).unwrap());
        let _ = stdout.flush();
    }
}

/// 处理 best 命令
fn handle_best_request(request: &ServerRequest) -> ServerResponse {
    let strategy = request.strategy.as_deref().unwrap_or(DEFAULT_STRATEGY);
    let depth = request.depth.unwrap_or(3);
    let n = request.n.unwrap_or(1);

    let config = AIConfig {
        depth,
        randomness: 0.0,
        seed: None,
    };

    let ai = match AIEngine::from_strategy(strategy, &config) {
        Ok(ai) => ai,
        Err(e) => return ServerResponse::error(&format!("Invalid strategy: {}", e)),
    };

    reset_node_count();
    let start = Instant::now();

    match ai.select_moves_text(&request.board, n) {
        Ok(moves) => {
            let elapsed = start.elapsed().as_secs_f64();
            let nodes = get_node_count();
            let nps = calc_nps(nodes, elapsed);

            let move_results: Vec<MoveResult> = moves
                .into_iter()
                .map(|(mv, score)| MoveResult { mv, score })
                .collect();

            ServerResponse::success_moves(move_results, nodes, nps, elapsed * 1000.0)
        }
        Err(e) => ServerResponse::error(&format!("AI error: {}", e)),
    }
}

/// 处理 moves 命令
fn handle_moves_request(request: &ServerRequest) -> ServerResponse {
    match parse_board(&request.board) {
        Ok((board, turn)) => {
            let moves = board
                .get_valid_moves(turn)
                .iter()
                .map(|pos| pos.to_coord_str())
                .collect();
            ServerResponse::success_legal_moves(moves)
        }
        Err(e) => ServerResponse::error(&format!("Invalid board: {}", e)),
    }
}

/// 处理 eval 命令（静态评估）
fn handle_eval_request(request: &ServerRequest) -> ServerResponse {
    match parse_board(&request.board) {
        Ok((board, turn)) => ServerResponse::success_eval(board.evaluate_position(), turn),
        Err(e) => ServerResponse::error(&format!("Invalid board: {}", e)),
    }
}
