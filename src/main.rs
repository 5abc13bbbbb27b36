//! loom - render a JSON element tree as an interactive terminal form.
//!
//! With `--key` tokens (or `--print`) the tree is driven headlessly and the
//! final frame is printed to stdout; otherwise the form runs full screen until
//! Ctrl+C.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use loom_tui::event::token::parse_key_token;
use loom_tui::render::driver::Driver;
use loom_tui::{App, AppConfig, Block, EventOutcome, InputEvent, UiConfig};

#[derive(Parser)]
#[command(name = "loom")]
#[command(version)]
#[command(about = "Render a JSON element tree as an interactive terminal form", long_about = None)]
struct Cli {
    /// Element tree file (JSON)
    #[arg(value_name = "FILE")]
    tree: PathBuf,

    /// Key token to replay headlessly, e.g. `tab`, `shift+tab`, `a` (repeatable)
    #[arg(short, long = "key", value_name = "TOKEN")]
    keys: Vec<String>,

    /// Print the initial frame headlessly instead of running interactively
    #[arg(short, long)]
    print: bool,

    /// Viewport width for headless rendering
    #[arg(long, default_value_t = 80)]
    width: u16,

    /// Viewport height for headless rendering
    #[arg(long, default_value_t = 24)]
    height: u16,

    /// Write logs to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn headless(&self) -> bool {
        self.print || !self.keys.is_empty()
    }
}

/// Install the tracing subscriber. Interactive sessions own the terminal, so
/// they only log when a file is given; headless runs fall back to stderr.
fn setup_logging(cli: &Cli) -> Result<()> {
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    match &cli.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
                .init();
        }
        None if cli.headless() => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
        }
        None => {}
    }
    Ok(())
}

fn run_headless(app: &mut App, keys: &[String]) -> Result<()> {
    for token in keys {
        let key = parse_key_token(token).with_context(|| format!("bad key token {token:?}"))?;
        if app.handle_input(InputEvent::Key(key)) == EventOutcome::Quit {
            break;
        }
    }
    println!("{}", app.render());
    Ok(())
}

fn run_interactive(app: &mut App) -> Result<()> {
    let (width, height) = Driver::terminal_size().context("failed to query terminal size")?;
    app.handle_input(InputEvent::Resize { width, height });

    let mut driver = Driver::new().context("failed to open terminal")?;
    let result = driver
        .enter_alt_screen()
        .context("failed to enter alternate screen")
        .and_then(|()| driver.hide_cursor().context("failed to hide cursor"))
        .and_then(|()| event_loop(app, &mut driver));

    // Restore the terminal even when the loop failed.
    let restored = driver.restore().context("failed to restore terminal");
    result.and(restored)
}

fn event_loop(app: &mut App, driver: &mut Driver) -> Result<()> {
    let mut previous: Option<Block> = None;
    loop {
        let frame = app.frame();
        driver.paint(&frame, previous.as_ref()).context("failed to draw frame")?;
        previous = Some(frame);

        let event = crossterm::event::read().context("failed to read terminal event")?;
        let Some(event) = InputEvent::from_crossterm(event) else {
            continue;
        };
        if matches!(event, InputEvent::Resize { .. }) {
            previous = None;
        }
        if app.handle_input(event) == EventOutcome::Quit {
            return Ok(());
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(&cli)?;

    let ui = UiConfig::load(&cli.tree)
        .with_context(|| format!("failed to load {}", cli.tree.display()))?;
    let config = AppConfig::new().with_viewport(cli.width.into(), cli.height.into());
    let mut app = App::from_ui(ui, config);

    if cli.headless() {
        run_headless(&mut app, &cli.keys)
    } else {
        run_interactive(&mut app)
    }
}
