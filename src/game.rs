#![warn(clippy::all, clippy::pedantic)]

// Default board dimensions (overridable through the config file)
pub const BOARD_WIDTH: usize = 12;
pub const BOARD_HEIGHT: usize = 22;

// Gravity curve: fall interval shrinks by FALL_STEP_MS per level, floored at MIN_FALL_MS
pub const BASE_FALL_MS: u64 = 250;
pub const FALL_STEP_MS: u64 = 20;
pub const MIN_FALL_MS: u64 = 50;

// Auto-repeat delay for held movement keys
pub const MOVE_REPEAT_MS: u64 = 100;

// Scoring
pub const POINTS_PER_LINE: u32 = 100; // Multiplied by lines cleared and the current level
pub const HARD_DROP_POINTS: u32 = 2; // Points per cell hard dropped

// Level progression
pub const LINES_PER_LEVEL: u32 = 10;
pub const STARTING_LEVEL: u32 = 1;

// Achievement thresholds
pub const ACHIEVEMENT_LEVEL: u32 = 5;
pub const ACHIEVEMENT_SCORE_LOW: u32 = 1_000;
pub const ACHIEVEMENT_SCORE_HIGH: u32 = 5_000;
pub const ACHIEVEMENT_TOTAL_LINES: u64 = 50;
