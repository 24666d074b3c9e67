//! Snake game state and core types
//!
//! Everything needed to resume or replay a run lives here and serializes,
//! including the RNG, so a restored game steps identically.

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::consts::{COUNTDOWN_SECS, GRID_SIZE};

/// Difficulty preset, mapped to the tick interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    /// Milliseconds between simulation ticks
    pub fn tick_interval_ms(&self) -> u64 {
        match self {
            Difficulty::Easy => 150,
            Difficulty::Medium => 100,
            Difficulty::Hard => 70,
            Difficulty::Expert => 50,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            "expert" => Some(Difficulty::Expert),
            _ => None,
        }
    }

    /// Countdown length in ticks at this difficulty's cadence (whole
    /// ticks fitting inside the countdown window)
    pub(crate) fn countdown_ticks(&self) -> u32 {
        (u64::from(COUNTDOWN_SECS) * 1000 / self.tick_interval_ms()) as u32
    }
}

/// Wall behavior for a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Leaving the grid ends the game
    #[default]
    Classic,
    /// Positions wrap modulo the grid size on both axes
    Wrap,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Classic => "Classic",
            Mode::Wrap => "Wrap",
        }
    }
}

/// Heading of the snake; grid y grows downward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit step for this heading
    pub fn delta(&self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -1),
            Direction::Down => IVec2::new(0, 1),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
        }
    }

    /// True when `other` points straight back into this heading
    pub fn is_reversal(&self, other: Direction) -> bool {
        self.delta() + other.delta() == IVec2::ZERO
    }
}

/// Current phase of a snake session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GamePhase {
    /// Difficulty/mode selection, no run in progress
    #[default]
    Menu,
    /// 3-2-1 before the first tick; direction input is ignored
    Countdown,
    /// Active gameplay
    Running,
    /// Run suspended, state untouched
    Paused,
    /// Run ended
    GameOver,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndCause {
    HitWall,
    HitSelf,
    /// The snake filled the entire grid
    Won,
}

/// Events emitted by a tick for the host to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    CountdownStarted,
    RunStarted,
    FoodEaten { at: IVec2 },
    GameOver { cause: EndCause, score: u32, length: u32 },
}

/// Complete snake game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub difficulty: Difficulty,
    pub mode: Mode,
    pub phase: GamePhase,
    /// Body cells, head first; no two cells share a coordinate
    pub snake: VecDeque<IVec2>,
    pub direction: Direction,
    queued_turn: Option<Direction>,
    pub food: IVec2,
    pub score: u32,
    pub foods_eaten: u32,
    /// Ticks remaining in the countdown
    pub countdown_ticks: u32,
    /// Simulation tick counter for the current run
    pub time_ticks: u64,
    pub end_cause: Option<EndCause>,
}

impl GameState {
    /// Create a session in the menu with the board laid out for preview
    pub fn new(seed: u64, difficulty: Difficulty, mode: Mode) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            difficulty,
            mode,
            phase: GamePhase::Menu,
            snake: VecDeque::new(),
            direction: Direction::Right,
            queued_turn: None,
            food: IVec2::ZERO,
            score: 0,
            foods_eaten: 0,
            countdown_ticks: 0,
            time_ticks: 0,
            end_cause: None,
        };
        state.reset_run();
        state.phase = GamePhase::Menu;
        state
    }

    /// Fresh snake, food and score; enters Countdown
    pub fn reset_run(&mut self) {
        let mid = GRID_SIZE / 2;
        self.snake = (0..3).map(|i| IVec2::new(mid - i, mid)).collect();
        self.direction = Direction::Right;
        self.queued_turn = None;
        self.score = 0;
        self.foods_eaten = 0;
        self.time_ticks = 0;
        self.end_cause = None;
        self.countdown_ticks = self.difficulty.countdown_ticks();
        self.phase = GamePhase::Countdown;
        self.spawn_food();
    }

    /// Head cell (the snake is never empty)
    pub fn head(&self) -> IVec2 {
        self.snake[0]
    }

    /// True when a snake segment occupies the cell
    pub fn occupied(&self, cell: IVec2) -> bool {
        self.snake.contains(&cell)
    }

    /// True when the cell lies inside the grid
    pub fn in_bounds(cell: IVec2) -> bool {
        (0..GRID_SIZE).contains(&cell.x) && (0..GRID_SIZE).contains(&cell.y)
    }

    /// Request a turn for the next tick. Ignored outside Running; 180°
    /// reversals are dropped when the turn is applied.
    pub fn queue_turn(&mut self, turn: Direction) {
        if self.phase == GamePhase::Running {
            self.queued_turn = Some(turn);
        }
    }

    pub(crate) fn take_turn(&mut self) -> Option<Direction> {
        self.queued_turn.take()
    }

    /// Countdown display value (3, 2, 1)
    pub fn countdown_value(&self) -> u32 {
        (u64::from(self.countdown_ticks) * self.difficulty.tick_interval_ms()).div_ceil(1000) as u32
    }

    /// Place food on a uniformly random free cell, resampling until one is
    /// found. Returns false when the snake fills the grid and no free cell
    /// exists.
    pub(crate) fn spawn_food(&mut self) -> bool {
        if self.snake.len() >= (GRID_SIZE * GRID_SIZE) as usize {
            return false;
        }
        loop {
            let cell = IVec2::new(
                self.rng.random_range(0..GRID_SIZE),
                self.rng.random_range(0..GRID_SIZE),
            );
            if !self.occupied(cell) {
                self.food = cell;
                return true;
            }
        }
    }
}
