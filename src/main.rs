use std::io::{self, BufRead};
use std::str::FromStr;

use anyhow::Context;
use derpfish::chess::core::Square;
use derpfish::chess::position::Position;
use itertools::Itertools;

/// Writes log records to stderr so that they never interleave with the
/// command output on stdout.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging() -> anyhow::Result<()> {
    let level = match std::env::var("DERPFISH_LOG") {
        Ok(level) => log::LevelFilter::from_str(&level).map_err(|e| {
            anyhow::anyhow!("DERPFISH_LOG should be a log level, got '{level}': {e}")
        })?,
        Err(_) => log::LevelFilter::Off,
    };
    log::set_logger(&LOGGER).map_err(|e| anyhow::anyhow!("{e}"))?;
    log::set_max_level(level);
    Ok(())
}

fn set_position(input: &str) -> anyhow::Result<Position> {
    if input == "startpos" {
        return Ok(Position::starting());
    }
    Position::try_from(input)
}

fn allowed_moves(position: &Position, square: &str) -> anyhow::Result<String> {
    let square = Square::try_from(square)?;
    Ok(format!("[{}]", position.allowed_moves(square).iter().join(", ")))
}

fn main() -> anyhow::Result<()> {
    init_logging()?;
    derpfish::print_engine_info();
    derpfish::print_binary_info();

    let mut position = Position::starting();
    for line in io::stdin().lock().lines() {
        let line = line.context("reading command from stdin")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(input) = line.strip_prefix("position ") {
            match set_position(input.trim()) {
                Ok(pos) => position = pos,
                Err(e) => println!("Error reading the position: {e}"),
            }
        } else if let Some(square) = line.strip_prefix("moves ") {
            match allowed_moves(&position, square.trim()) {
                Ok(moves) => println!("{moves}"),
                Err(e) => println!("Error reading the square: {e}"),
            }
        } else if line == "moves" {
            println!("{}", position.generate_moves().iter().join(" "));
        } else if line == "d" {
            println!("{position:?}");
        } else if line == "quit" {
            break;
        } else {
            println!("Unsupported command: {line}");
        }
    }
    Ok(())
}
