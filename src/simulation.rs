#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Allow truncation when casting from usize to i32 since board dimensions are always small enough to fit in i32
    clippy::cast_possible_truncation,
    // Allow potential wrapping when casting between types as board coordinates are within reasonable ranges
    clippy::cast_possible_wrap
)]

use log::{debug, info};

use crate::components::{Grid, Piece};
use crate::factory::PieceSource;
use crate::game::{
    BASE_FALL_MS, FALL_STEP_MS, HARD_DROP_POINTS, LINES_PER_LEVEL, MIN_FALL_MS, POINTS_PER_LINE,
    STARTING_LEVEL,
};
use crate::input::Command;
use crate::stats::{Achievement, StatisticsTracker};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    GameOver,
}

/// What a call to [`Simulation::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The gravity timer has not run out yet, or the game is over.
    Idle,
    /// The current piece moved down one row.
    Fell,
    /// The current piece locked and the next one spawned.
    Locked { lines: u32 },
    /// The current piece locked and its successor had no room to spawn.
    GameOver { lines: u32 },
}

#[must_use]
pub fn level_for_lines(lines_cleared: u32) -> u32 {
    lines_cleared / LINES_PER_LEVEL + STARTING_LEVEL
}

/// Milliseconds between gravity steps at the given level.
#[must_use]
pub fn fall_interval_for_level(level: u32) -> u64 {
    let speedup = u64::from(level.saturating_sub(1)) * FALL_STEP_MS;
    BASE_FALL_MS.saturating_sub(speedup).max(MIN_FALL_MS)
}

/// Complete state of one game: the playfield, the falling piece, the preview
/// piece and the counters, plus the statistics that outlive a single game.
pub struct Simulation {
    grid: Grid,
    current: Piece,
    next: Piece,
    score: u32,
    level: u32,
    lines_cleared: u32,
    phase: Phase,
    fall_timer_ms: u64,
    source: Box<dyn PieceSource>,
    stats: StatisticsTracker,
}

impl Simulation {
    #[must_use]
    pub fn new(width: usize, height: usize, mut source: Box<dyn PieceSource>) -> Self {
        let grid = Grid::new(width, height);
        let current = source.spawn(width);
        Self::with_grid(grid, current, source)
    }

    /// Starts from a prepared grid and falling piece. The preview piece is
    /// drawn from `source`.
    #[must_use]
    pub fn with_grid(grid: Grid, current: Piece, mut source: Box<dyn PieceSource>) -> Self {
        let next = source.spawn(grid.width());
        Self {
            grid,
            current,
            next,
            score: 0,
            level: STARTING_LEVEL,
            lines_cleared: 0,
            phase: Phase::Playing,
            fall_timer_ms: 0,
            source,
            stats: StatisticsTracker::new(),
        }
    }

    /// Whether `piece` fits with its anchor at `(x, y)`: every filled cell
    /// inside the side walls, above the floor, and not on a settled block.
    /// Cells above the top row only need to be within the walls.
    #[must_use]
    pub fn is_valid_position(&self, piece: &Piece, x: i32, y: i32) -> bool {
        let width = self.grid.width() as i32;
        let height = self.grid.height() as i32;

        piece.cells_at(x, y).all(|(cx, cy)| {
            (0..width).contains(&cx) && cy < height && !self.grid.is_occupied(cx, cy)
        })
    }

    fn fits(&self, piece: &Piece) -> bool {
        self.is_valid_position(piece, piece.position.x, piece.position.y)
    }

    /// Shifts the current piece when the destination is free.
    pub fn move_by(&mut self, dx: i32, dy: i32) -> bool {
        if self.is_game_over() {
            return false;
        }

        let moved = self.current.moved(dx, dy);
        if self.fits(&moved) {
            self.current = moved;
            true
        } else {
            false
        }
    }

    /// Turns the current piece clockwise in place. There are no wall kicks:
    /// if the turned shape does not fit at the same anchor nothing changes.
    pub fn rotate(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }

        let rotated = self.current.rotated();
        if self.fits(&rotated) {
            self.current = rotated;
            true
        } else {
            debug!("Rotation of {:?} blocked", self.current.kind);
            false
        }
    }

    /// Drops the current piece as far as it goes and returns the rows
    /// travelled. The piece locks on the next gravity step, not here.
    pub fn hard_drop(&mut self) -> u32 {
        let mut distance = 0;
        while self.move_by(0, 1) {
            distance += 1;
        }
        debug!("Hard drop of {distance} rows");
        distance
    }

    /// Applies a gameplay command. Loop-control commands are not the
    /// simulation's business and are ignored.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::MoveLeft => self.move_by(-1, 0),
            Command::MoveRight => self.move_by(1, 0),
            Command::SoftDropTick => self.move_by(0, 1),
            Command::Rotate => self.rotate(),
            Command::HardDrop => {
                let distance = self.hard_drop();
                self.score = self.score.saturating_add(distance * HARD_DROP_POINTS);
                distance > 0
            }
            Command::Quit | Command::RestartRequested => false,
        }
    }

    /// Advances the gravity timer by `elapsed_ms`. Once a full fall interval
    /// has built up the piece drops a row, or locks if it is resting.
    pub fn tick(&mut self, elapsed_ms: u64) -> TickOutcome {
        if self.is_game_over() {
            return TickOutcome::Idle;
        }

        self.fall_timer_ms += elapsed_ms;
        if self.fall_timer_ms < self.fall_interval_ms() {
            return TickOutcome::Idle;
        }
        self.fall_timer_ms = 0;

        if self.move_by(0, 1) {
            TickOutcome::Fell
        } else {
            self.lock_current()
        }
    }

    fn lock_current(&mut self) -> TickOutcome {
        self.grid.merge(&self.current);
        let lines = self.grid.clear_completed_lines();

        if lines > 0 {
            // Statistics see the score and level from before this clear is scored
            self.stats.record_line_clear(lines, self.score, self.level);
            info!("Cleared {lines} lines at level {}", self.level);
        }

        self.lines_cleared += lines;
        // Scored with the level in effect before the new line total is applied
        self.score = self.score.saturating_add(lines * POINTS_PER_LINE * self.level);

        let previous_level = self.level;
        self.level = level_for_lines(self.lines_cleared);
        if self.level > previous_level {
            info!("Level up: {}", self.level);
        }

        self.current = self.next;
        self.next = self.source.spawn(self.grid.width());

        if self.fits(&self.current) {
            TickOutcome::Locked { lines }
        } else {
            self.phase = Phase::GameOver;
            self.stats.record_game_over();
            info!(
                "Game over with score {} at level {} after {} lines",
                self.score, self.level, self.lines_cleared
            );
            TickOutcome::GameOver { lines }
        }
    }

    #[must_use]
    pub fn fall_interval_ms(&self) -> u64 {
        fall_interval_for_level(self.level)
    }

    /// Starts a fresh game. Statistics carry over.
    pub fn reset(&mut self) {
        self.grid.clear();
        let width = self.grid.width();
        self.current = self.source.spawn(width);
        self.next = self.source.spawn(width);
        self.score = 0;
        self.level = STARTING_LEVEL;
        self.lines_cleared = 0;
        self.phase = Phase::Playing;
        self.fall_timer_ms = 0;
        debug!("Simulation reset");
    }

    /// Anchor row the current piece would come to rest on if dropped.
    #[must_use]
    pub fn ghost_row(&self) -> i32 {
        let Piece { position, .. } = self.current;
        let mut y = position.y;
        while self.is_valid_position(&self.current, position.x, y + 1) {
            y += 1;
        }
        y
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            grid: &self.grid,
            current: &self.current,
            next: &self.next,
            ghost_row: self.ghost_row(),
            score: self.score,
            level: self.level,
            lines_cleared: self.lines_cleared,
            best_score: self.stats.best_score(),
            game_over: self.is_game_over(),
            stats: &self.stats,
        }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn current(&self) -> &Piece {
        &self.current
    }

    #[must_use]
    pub fn next(&self) -> &Piece {
        &self.next
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[must_use]
    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    #[must_use]
    pub fn stats(&self) -> &StatisticsTracker {
        &self.stats
    }
}

/// Read-only view of a [`Simulation`] for one rendered frame.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub grid: &'a Grid,
    pub current: &'a Piece,
    pub next: &'a Piece,
    pub ghost_row: i32,
    pub score: u32,
    pub level: u32,
    pub lines_cleared: u32,
    pub best_score: u32,
    pub game_over: bool,
    pub stats: &'a StatisticsTracker,
}

impl Snapshot<'_> {
    pub fn achievements(&self) -> impl Iterator<Item = (Achievement, bool)> + '_ {
        self.stats.achievements()
    }
}
