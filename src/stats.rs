//! Per-game statistics persisted across sessions
//!
//! Records accumulate monotonically: totals only grow and bests only
//! improve, except `games_played` which increments once per game-over.
//! Every field defaults to zero so a missing or corrupt record loads clean.

use serde::{Deserialize, Serialize};

use crate::consts::FOOD_SCORE;
use crate::quiz::QuizSession;

/// Storage keys for each game's record
pub const SNAKE_STATS_KEY: &str = "snake_stats";
pub const CARD_STATS_KEY: &str = "card_stats";
pub const QUIZ_STATS_KEY: &str = "quiz_stats";

/// Lifetime snake record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SnakeStats {
    pub games_played: u32,
    pub best_score: u32,
    pub total_food_eaten: u32,
    pub longest_snake: u32,
}

impl SnakeStats {
    /// Fold one finished run into the record
    pub fn record_game(&mut self, score: u32, snake_length: u32) {
        self.games_played += 1;
        self.best_score = self.best_score.max(score);
        self.total_food_eaten += score / FOOD_SCORE;
        self.longest_snake = self.longest_snake.max(snake_length);
    }
}

/// Lifetime card-matching record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CardStats {
    pub games_played: u32,
    pub games_completed: u32,
    /// Fewest comparisons in a completed game
    pub best_moves: Option<u32>,
}

impl CardStats {
    pub fn record_game(&mut self, completed: bool, moves: u32) {
        self.games_played += 1;
        if completed {
            self.games_completed += 1;
            self.best_moves = Some(match self.best_moves {
                Some(best) => best.min(moves),
                None => moves,
            });
        }
    }
}

/// Lifetime arithmetic quiz record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct QuizStats {
    pub games_played: u32,
    pub best_score: u32,
    pub total_correct: u32,
    pub total_questions: u32,
    pub best_streak: u32,
}

impl QuizStats {
    /// Fold a finished session into the record
    pub fn record_session(&mut self, session: &QuizSession) {
        self.games_played += 1;
        self.best_score = self.best_score.max(session.score);
        self.total_correct += session.correct;
        self.total_questions += session.asked;
        self.best_streak = self.best_streak.max(session.best_streak);
    }
}
