//! Raw key decoder probe.
//!
//! Puts the terminal in raw mode and prints every decoded key together with
//! its raw bytes. Press `q` or Ctrl+C to quit.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use crossterm::terminal;
use simplelog::LevelFilter;

use tui_dialog::input::{decode, read_event, StdinSource};
use tui_dialog::logging::init_file_logger;
use tui_dialog::types::Key;

#[derive(Parser)]
#[command(name = "key-test", about = "Print decoded terminal keys")]
struct Args {
    /// Also log decoder traces to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_file_logger(path, LevelFilter::Trace)?;
    }

    terminal::enable_raw_mode()?;
    let result = run();
    // Always try to restore terminal state.
    let _ = terminal::disable_raw_mode();
    result
}

fn run() -> Result<()> {
    let mut source = StdinSource::new();
    let mut out = io::stdout();
    write!(out, "press keys (q or Ctrl+C to quit)\r\n")?;
    out.flush()?;
    loop {
        let raw = read_event(&mut source)?;
        let key = decode(&raw);
        write!(out, "{:<12} code={:<4} bytes={:02x?}\r\n", key.to_string(), key.code(), raw.bytes())?;
        out.flush()?;
        if key == Key::CTRL_C || key.is_char('q') {
            return Ok(());
        }
    }
}
