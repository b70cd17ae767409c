#![warn(clippy::all, clippy::pedantic)]

use log::info;

use crate::game::{
    ACHIEVEMENT_LEVEL, ACHIEVEMENT_SCORE_HIGH, ACHIEVEMENT_SCORE_LOW, ACHIEVEMENT_TOTAL_LINES,
    STARTING_LEVEL,
};

const ACHIEVEMENT_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Achievement {
    FirstLine,
    Level5,
    Score1000,
    Score5000,
    Lines50,
}

impl Achievement {
    pub const ALL: [Achievement; ACHIEVEMENT_COUNT] = [
        Achievement::FirstLine,
        Achievement::Level5,
        Achievement::Score1000,
        Achievement::Score5000,
        Achievement::Lines50,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Achievement::FirstLine => "First line",
            Achievement::Level5 => "Level 5",
            Achievement::Score1000 => "Score 1000",
            Achievement::Score5000 => "Score 5000",
            Achievement::Lines50 => "50 lines",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Cumulative counters across every game played in this process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatisticsTracker {
    total_lines: u64,
    total_score: u64,
    max_level: u32,
    games_played: u32,
    best_score: u32,
    unlocked: [bool; ACHIEVEMENT_COUNT],
}

impl Default for StatisticsTracker {
    fn default() -> Self {
        Self {
            total_lines: 0,
            total_score: 0,
            max_level: STARTING_LEVEL,
            games_played: 0,
            best_score: 0,
            unlocked: [false; ACHIEVEMENT_COUNT],
        }
    }
}

impl StatisticsTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds a line clear into the totals and unlocks any achievement whose
    /// condition now holds.
    pub fn record_line_clear(&mut self, lines: u32, score_at_clear: u32, level_at_clear: u32) {
        self.total_lines += u64::from(lines);
        self.total_score += u64::from(score_at_clear);
        self.max_level = self.max_level.max(level_at_clear);
        self.best_score = self.best_score.max(score_at_clear);

        for achievement in Achievement::ALL {
            let earned = match achievement {
                Achievement::FirstLine => lines > 0,
                Achievement::Level5 => level_at_clear >= ACHIEVEMENT_LEVEL,
                Achievement::Score1000 => score_at_clear >= ACHIEVEMENT_SCORE_LOW,
                Achievement::Score5000 => score_at_clear >= ACHIEVEMENT_SCORE_HIGH,
                Achievement::Lines50 => self.total_lines >= ACHIEVEMENT_TOTAL_LINES,
            };

            let slot = &mut self.unlocked[achievement.index()];
            if earned && !*slot {
                *slot = true;
                info!("Achievement unlocked: {}", achievement.label());
            }
        }
    }

    pub fn record_game_over(&mut self) {
        self.games_played += 1;
    }

    #[must_use]
    pub fn is_unlocked(&self, achievement: Achievement) -> bool {
        self.unlocked[achievement.index()]
    }

    /// Every achievement paired with its state, in display order.
    pub fn achievements(&self) -> impl Iterator<Item = (Achievement, bool)> + '_ {
        Achievement::ALL
            .into_iter()
            .map(|achievement| (achievement, self.is_unlocked(achievement)))
    }

    #[must_use]
    pub fn total_lines(&self) -> u64 {
        self.total_lines
    }

    #[must_use]
    pub fn total_score(&self) -> u64 {
        self.total_score
    }

    #[must_use]
    pub fn max_level(&self) -> u32 {
        self.max_level
    }

    #[must_use]
    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    #[must_use]
    pub fn best_score(&self) -> u32 {
        self.best_score
    }
}
