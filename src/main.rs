//! Dialog demo runner (default binary).
//!
//! Opens one dialog on the alternate screen and prints its result after the
//! terminal is restored.

use std::path::PathBuf;
use std::rc::Rc;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use simplelog::LevelFilter;

use tui_dialog::dialog::{DialogConfig, DialogRunner};
use tui_dialog::input::StdinSource;
use tui_dialog::logging::init_file_logger;
use tui_dialog::term::TerminalScreen;
use tui_dialog::widgets::Controller;

#[derive(Parser)]
#[command(name = "tui-dialog", about = "Run one modal terminal dialog")]
struct Args {
    /// Theme configuration (TOML)
    #[arg(long, default_value = "tui-dialog.toml")]
    config: PathBuf,

    /// Where log lines are written
    #[arg(long, default_value = "tui-dialog.log")]
    log_file: PathBuf,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    #[command(subcommand)]
    dialog: DialogKind,
}

#[derive(Subcommand)]
enum DialogKind {
    /// Yes/no question
    Confirm { message: String },
    /// Free text entry
    Text { message: String },
    /// Integer entry
    Integer { message: String },
    /// Pick one of several options
    Choice {
        message: String,
        #[arg(required = true)]
        options: Vec<String>,
    },
    /// No/Yes selector
    Bool { message: String },
    /// Dismissible message
    Splash {
        #[arg(long, default_value = "")]
        title: String,
        text: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Logs what the widgets report.
struct LoggingController;

impl Controller for LoggingController {
    fn value_changed(&self, value: &str) {
        log::debug!("widget value: {value:?}");
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_file_logger(&args.log_file, args.log_level.into())?;
    let theme = DialogConfig::load(&args.config)?.theme()?;

    let mut screen = TerminalScreen::new();
    screen.enter()?;

    let result = {
        let mut runner = DialogRunner::new(&mut screen, StdinSource::new()).with_theme(theme);
        run(&mut runner, args.dialog)
    };

    // Always try to restore terminal state.
    let _ = screen.exit();
    println!("{}", result?);
    Ok(())
}

fn run(
    runner: &mut DialogRunner<&mut TerminalScreen, StdinSource>,
    kind: DialogKind,
) -> Result<String> {
    let controller: Rc<dyn Controller> = Rc::new(LoggingController);
    let out = match kind {
        DialogKind::Confirm { message } => runner.confirm(&message)?.to_string(),
        DialogKind::Text { message } => {
            let (text, ok) = runner.input_string(controller, &message)?;
            format!("{text:?} accepted={ok}")
        }
        DialogKind::Integer { message } => {
            let (n, ok) = runner.input_integer(controller, &message)?;
            format!("{n} accepted={ok}")
        }
        DialogKind::Choice { message, options } => {
            let (choice, ok) = runner.input_choice(controller, &message, &options[..])?;
            format!("{choice:?} accepted={ok}")
        }
        DialogKind::Bool { message } => {
            let (value, ok) = runner.input_bool(controller, &message)?;
            format!("{value} accepted={ok}")
        }
        DialogKind::Splash { title, text } => {
            runner.splash(&title, &text.replace("\\n", "\n"))?;
            "dismissed".to_string()
        }
    };
    Ok(out)
}
