//! Tetris Stack runner (default binary).
//!
//! By default this draws the lookahead queue, reserve and undo history in the
//! terminal and maps keys to commands. With `--headless` it speaks the
//! line-delimited JSON protocol on stdin/stdout instead.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tetris_stack::adapter::Session;
use tetris_stack::core::{GameController, StackConfig, StackSnapshot};
use tetris_stack::input::{handle_key_event, should_quit, KEY_HELP};
use tetris_stack::term::{StackView, Status, TerminalRenderer};

#[derive(Parser, Debug)]
#[command(name = "tetris-stack")]
#[command(about = "Lookahead queue, reserve stack and undo history for falling-block pieces")]
struct Args {
    /// Seed for piece kinds (random when omitted)
    #[arg(long)]
    seed: Option<u32>,

    /// Lookahead queue length (overrides TETRIS_STACK_QUEUE_CAPACITY)
    #[arg(long)]
    queue_capacity: Option<usize>,

    /// Reserve stack slots (overrides TETRIS_STACK_RESERVE_CAPACITY)
    #[arg(long)]
    reserve_capacity: Option<usize>,

    /// Undo history length (overrides TETRIS_STACK_UNDO_CAPACITY)
    #[arg(long)]
    undo_capacity: Option<usize>,

    /// Read JSON commands from stdin and write replies to stdout
    #[arg(long)]
    headless: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn stack_config(&self) -> StackConfig {
        let mut config = StackConfig::from_env();
        if let Some(v) = self.queue_capacity {
            config.queue_capacity = v;
        }
        if let Some(v) = self.reserve_capacity {
            config.reserve_capacity = v;
        }
        if let Some(v) = self.undo_capacity {
            config.undo_capacity = v;
        }
        config
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = args.stack_config();
    let seed = args.seed.unwrap_or_else(rand::random);
    let controller =
        GameController::new(config, seed).context("invalid capacity configuration")?;
    info!(seed, ?config, headless = args.headless, "starting");

    if args.headless {
        let stdin = io::stdin();
        let stdout = io::stdout();
        Session::new(controller).run(stdin.lock(), stdout.lock())?;
        return Ok(());
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, controller);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Logs go to stderr; `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(term: &mut TerminalRenderer, mut controller: GameController) -> Result<()> {
    let view = StackView::new().with_footer(KEY_HELP);
    let mut snapshot = StackSnapshot::default();
    let mut status: Option<Status> = None;

    loop {
        controller.snapshot_into(&mut snapshot);
        term.draw(&view.render(&snapshot, status.as_ref()))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if should_quit(key) {
                return Ok(());
            }
            if let Some(command) = handle_key_event(key) {
                let result = controller.apply(command);
                debug!(command = command.as_str(), ok = result.is_ok(), "key command");
                status = Some(Status::from_result(&result));
            }
        }
    }
}
