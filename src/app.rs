#![warn(clippy::all, clippy::pedantic)]

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use log::{debug, info};

use crate::config::GameConfig;
use crate::factory::{PieceFactory, PieceSource};
use crate::input::{Command, InputController, Key};
use crate::simulation::{Simulation, TickOutcome};

pub type AppResult<T> = anyhow::Result<T>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Title,
    Playing,
}

/// Owns everything the main loop drives: the simulation, the input
/// controller and the current screen.
pub struct App {
    pub simulation: Simulation,
    pub input: InputController,
    pub screen: Screen,
    pub should_quit: bool,
    pub show_ghost: bool,
}

/// Terminal key to game control.
#[must_use]
pub fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Up => Some(Key::Rotate),
        KeyCode::Char(' ') => Some(Key::HardDrop),
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => Some(Key::Quit),
        KeyCode::Enter | KeyCode::Char('r' | 'R') => Some(Key::Restart),
        _ => None,
    }
}

impl App {
    #[must_use]
    pub fn new(config: &GameConfig, release_events: bool) -> Self {
        Self::with_source(config, release_events, Box::new(PieceFactory::new()))
    }

    #[must_use]
    pub fn with_source(
        config: &GameConfig,
        release_events: bool,
        source: Box<dyn PieceSource>,
    ) -> Self {
        let simulation = Simulation::new(config.board.width, config.board.height, source);
        let input = InputController::new(config.controls.repeat_delay_ms, release_events);

        Self {
            simulation,
            input,
            screen: Screen::Title,
            should_quit: false,
            show_ghost: config.display.show_ghost,
        }
    }

    pub fn start_game(&mut self) {
        info!("Starting a new game");
        self.simulation.reset();
        self.input.clear();
        self.screen = Screen::Playing;
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let Some(control) = map_key(key.code) else {
            return;
        };

        match key.kind {
            KeyEventKind::Release => {
                self.input.release(control);
                return;
            }
            // Only movement keys auto-repeat; a held rotate or drop fires once
            KeyEventKind::Repeat if !matches!(control, Key::Left | Key::Right | Key::Down) => {
                return;
            }
            _ => {}
        }

        if self.screen == Screen::Title {
            match control {
                Key::Quit => self.should_quit = true,
                Key::Restart | Key::HardDrop => self.start_game(),
                _ => {}
            }
            return;
        }

        if let Some(command) = self.input.press(control) {
            self.dispatch(command);
        }
    }

    fn dispatch(&mut self, command: Command) {
        match command {
            Command::Quit => {
                debug!("Quit requested");
                self.should_quit = true;
            }
            Command::RestartRequested => {
                if self.simulation.is_game_over() {
                    self.start_game();
                }
            }
            _ => {
                if !self.simulation.is_game_over() {
                    self.simulation.apply(command);
                }
            }
        }
    }

    /// One frame of game logic: auto-repeated moves first, then gravity.
    pub fn update(&mut self, elapsed_ms: u64) -> Option<TickOutcome> {
        if self.screen != Screen::Playing || self.simulation.is_game_over() {
            return None;
        }

        for command in self.input.update(elapsed_ms) {
            self.simulation.apply(command);
        }

        let outcome = self.simulation.tick(elapsed_ms);
        if let TickOutcome::GameOver { .. } = outcome {
            self.input.clear();
        }
        Some(outcome)
    }
}
