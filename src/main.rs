#![warn(clippy::all, clippy::pedantic)]

use std::io;
use std::os::fd::AsRawFd;
use std::time::{Duration, Instant};

use anyhow::Context;
use blockfall::Time;
use blockfall::app::{App, AppResult};
use blockfall::config::{GameConfig, loader};
use blockfall::simulation::TickOutcome;
use blockfall::ui;
use crossterm::{
    cursor::Show,
    event::{
        self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        supports_keyboard_enhancement,
    },
};
use log::{debug, error, info, warn};
use ratatui::{Terminal, prelude::*};

const LOG_PATH: &str = "blockfall.log";

fn main() -> AppResult<()> {
    // Create log file and redirect stderr to it
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(LOG_PATH)
        .with_context(|| format!("failed to create log file {LOG_PATH}"))?;

    // Safety: We're redirecting stderr to our log file using standard POSIX operations
    unsafe {
        libc::dup2(log_file.as_raw_fd(), io::stderr().as_raw_fd());
    }

    // Configure the logger to use stderr (which is now redirected to our file)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_module_path(false)
        .init();

    info!("Starting Blockfall");

    let config = match loader::load_config_from_file() {
        Ok(config) => {
            info!("Configuration loaded successfully");
            config
        }
        Err(e) => {
            error!("Failed to load configuration: {e}");
            // Continue with default configuration
            GameConfig::default()
        }
    };

    // Terminal initialization
    enable_raw_mode().context("failed to enable raw mode")?;

    // Key release events are only reported with the keyboard enhancement protocol
    let release_events = matches!(supports_keyboard_enhancement(), Ok(true));
    if !release_events {
        warn!("Terminal does not report key releases; held keys will not auto-repeat");
    }

    let res = start_terminal(release_events).and_then(|mut terminal| {
        let frame_interval = Duration::from_millis(config.display.frame_interval_ms);
        let app = App::new(&config, release_events);
        run_app(&mut terminal, app, frame_interval)
    });

    // Restore terminal whether or not setup and the game loop succeeded
    let restored = restore_terminal(release_events);

    if let Err(err) = &res {
        error!("Game error: {err:?}");
    }
    if let Err(err) = &restored {
        error!("Failed to restore terminal: {err}");
    }

    res.and(restored.context("failed to restore terminal"))
}

fn start_terminal(release_events: bool) -> AppResult<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    if release_events {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }

    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

// Undoes everything `main` and `start_terminal` may have switched on. Each
// step is attempted even if an earlier one fails.
fn restore_terminal(release_events: bool) -> io::Result<()> {
    let mut stdout = io::stdout();
    let popped = if release_events {
        execute!(stdout, PopKeyboardEnhancementFlags)
    } else {
        Ok(())
    };
    let raw = disable_raw_mode();
    let left = execute!(stdout, LeaveAlternateScreen);
    let shown = execute!(stdout, Show);

    popped.and(raw).and(left).and(shown)
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    frame_interval: Duration,
) -> AppResult<()> {
    let mut time = Time::new();
    let mut last_frame = Instant::now();

    // Flush any pending input events that might be in the buffer
    while event::poll(Duration::from_millis(0))? {
        let _ = event::read()?;
    }

    loop {
        // Input first: discrete commands apply as soon as their key arrives
        let timeout = frame_interval.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                debug!("Key event: {key:?}");
                app.handle_key(key);
            }
        }

        if app.should_quit {
            info!("Quitting");
            return Ok(());
        }

        // Then gravity and auto-repeat, once per frame
        if last_frame.elapsed() >= frame_interval {
            last_frame = Instant::now();
            time.update();

            match app.update(time.delta_ms()) {
                Some(TickOutcome::Locked { lines }) if lines > 0 => {
                    debug!("Score now {}", app.simulation.score());
                }
                Some(TickOutcome::GameOver { .. }) => {
                    let stats = app.simulation.stats();
                    info!(
                        "Games played: {}, best score: {}, total lines: {}",
                        stats.games_played(),
                        stats.best_score(),
                        stats.total_lines()
                    );
                }
                _ => {}
            }

            terminal.draw(|f| ui::render(f, &app))?;
        }
    }
}
