mod config;
mod input;

use std::fs;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use checkers_ai::AiEngine;
use checkers_core::{GameRecord, GameState, Side, MOVE_SUCCESS_MESSAGE};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Cli;
use crate::input::{render_board, status_line, Command};

fn main() -> Result<()> {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("checkers_cli=info".parse()?))
        .init();

    let cli = Cli::parse();
    let ai_config = cli.ai_config();
    info!(difficulty = ?ai_config.difficulty, depth = ai_config.max_depth, "跳棋启动");

    // 存档保留 last_updated，每次保存时刷新
    let mut record = match &cli.load {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("读取存档失败: {:?}", path))?;
            GameRecord::from_json(&json).context("解析存档失败")?
        }
        None => GameRecord::new(checkers_core::new_game()),
    };
    let mut engine = AiEngine::new(ai_config);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    // 读档后可能正轮到红方
    play_ai_turn(&mut engine, &mut record.state);
    print_state(&mut stdout, &record.state)?;

    for line in stdin.lock().lines() {
        let line = line.context("读取输入失败")?;
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(err) => {
                writeln!(stdout, "{}", err)?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Reset => record.state.reset(),
            Command::Moves => {
                let moves = record.state.legal_moves(record.state.turn);
                for mv in moves.iter() {
                    writeln!(stdout, "{}", mv)?;
                }
                continue;
            }
            Command::Save(path) => {
                record.touch();
                let json = record.to_json().context("序列化对局失败")?;
                fs::write(&path, json).with_context(|| format!("写入存档失败: {}", path))?;
                writeln!(stdout, "Saved to {}", path)?;
                continue;
            }
            Command::Move { from, to } => match record.state.apply_move(from, to) {
                Ok(_) => {
                    writeln!(stdout, "{}", MOVE_SUCCESS_MESSAGE)?;
                    play_ai_turn(&mut engine, &mut record.state);
                }
                Err(err) => {
                    writeln!(stdout, "{}", err)?;
                    continue;
                }
            },
        }

        print_state(&mut stdout, &record.state)?;
    }

    Ok(())
}

/// 轮到红方时让 AI 走一步
fn play_ai_turn(engine: &mut AiEngine, state: &mut GameState) {
    if state.turn != Side::Red || state.is_over() {
        return;
    }

    match engine.maybe_move(state) {
        Some(mv) => info!(%mv, nodes = engine.nodes_searched(), "AI 走棋"),
        None => warn!("AI 没有找到可走的棋"),
    }
}

fn print_state(out: &mut impl Write, state: &GameState) -> io::Result<()> {
    write!(out, "{}", render_board(&state.board))?;
    writeln!(out, "{}", status_line(state))?;
    out.flush()
}
