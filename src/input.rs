#![warn(clippy::all, clippy::pedantic)]

use log::trace;

/// Discrete requests the game loop hands to the simulation or acts on itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    SoftDropTick,
    Rotate,
    HardDrop,
    Quit,
    RestartRequested,
}

/// Physical controls, independent of the terminal key that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Down,
    Rotate,
    HardDrop,
    Quit,
    Restart,
}

impl Key {
    /// The command a key produces each time it fires.
    #[must_use]
    pub fn command(self) -> Command {
        match self {
            Key::Left => Command::MoveLeft,
            Key::Right => Command::MoveRight,
            Key::Down => Command::SoftDropTick,
            Key::Rotate => Command::Rotate,
            Key::HardDrop => Command::HardDrop,
            Key::Quit => Command::Quit,
            Key::Restart => Command::RestartRequested,
        }
    }

    fn is_held(self) -> bool {
        matches!(self, Key::Left | Key::Right | Key::Down)
    }
}

// Held state and repeat timer for one movement direction
#[derive(Debug, Clone, Copy, Default)]
struct Repeat {
    held: bool,
    timer_ms: u64,
}

impl Repeat {
    fn reset(&mut self) {
        self.held = false;
        self.timer_ms = 0;
    }
}

/// Turns key presses and releases into commands, repeating held movement keys
/// once per `repeat_delay_ms`.
#[derive(Debug, Clone)]
pub struct InputController {
    repeat_delay_ms: u64,
    release_events: bool,
    left: Repeat,
    right: Repeat,
    down: Repeat,
}

impl InputController {
    /// `release_events` tells the controller whether the terminal reports key
    /// releases. Without them a held key cannot be tracked, so every movement
    /// press fires once immediately instead.
    #[must_use]
    pub fn new(repeat_delay_ms: u64, release_events: bool) -> Self {
        Self {
            repeat_delay_ms,
            release_events,
            left: Repeat::default(),
            right: Repeat::default(),
            down: Repeat::default(),
        }
    }

    #[must_use]
    pub fn is_held(&self, key: Key) -> bool {
        self.slot(key).is_some_and(|repeat| repeat.held)
    }

    /// Registers a key press. Edge keys return their command right away;
    /// movement keys start repeating and fire from `update`.
    pub fn press(&mut self, key: Key) -> Option<Command> {
        if !key.is_held() || !self.release_events {
            return Some(key.command());
        }

        if let Some(repeat) = self.slot_mut(key) {
            // Terminal key-repeat sends further presses; keep the running timer
            repeat.held = true;
        }
        None
    }

    /// Stops a movement key from repeating. Its timer is kept, so quick taps
    /// still add up to a move.
    pub fn release(&mut self, key: Key) {
        if let Some(repeat) = self.slot_mut(key) {
            repeat.held = false;
        }
    }

    /// Drops every held key and its timer, e.g. when a game ends.
    pub fn clear(&mut self) {
        self.left.reset();
        self.right.reset();
        self.down.reset();
    }

    /// Advances the repeat timers and returns the movement commands that came due.
    pub fn update(&mut self, elapsed_ms: u64) -> Vec<Command> {
        let delay = self.repeat_delay_ms;
        let mut commands = Vec::new();

        for (repeat, command) in [
            (&mut self.left, Command::MoveLeft),
            (&mut self.right, Command::MoveRight),
            (&mut self.down, Command::SoftDropTick),
        ] {
            if !repeat.held {
                continue;
            }
            repeat.timer_ms += elapsed_ms;
            if repeat.timer_ms >= delay {
                repeat.timer_ms = 0;
                commands.push(command);
            }
        }

        if !commands.is_empty() {
            trace!("Auto-repeat fired: {commands:?}");
        }
        commands
    }

    fn slot(&self, key: Key) -> Option<&Repeat> {
        match key {
            Key::Left => Some(&self.left),
            Key::Right => Some(&self.right),
            Key::Down => Some(&self.down),
            _ => None,
        }
    }

    fn slot_mut(&mut self, key: Key) -> Option<&mut Repeat> {
        match key {
            Key::Left => Some(&mut self.left),
            Key::Right => Some(&mut self.right),
            Key::Down => Some(&mut self.down),
            _ => None,
        }
    }
}
