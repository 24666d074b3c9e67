//! Seeded arithmetic quiz engine
//!
//! Generates small arithmetic problems (division is always exact) and
//! tracks a running session tally: correct counts, streaks and score.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Points per correct answer
pub const POINTS_PER_CORRECT: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    pub fn symbol(&self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '×',
            Op::Div => '÷',
        }
    }
}

/// Problem difficulty: operand ranges and which operators appear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QuizDifficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl QuizDifficulty {
    fn max_operand(&self) -> i64 {
        match self {
            QuizDifficulty::Easy => 10,
            QuizDifficulty::Medium => 25,
            QuizDifficulty::Hard => 50,
        }
    }

    fn max_factor(&self) -> i64 {
        match self {
            QuizDifficulty::Easy => 5,
            QuizDifficulty::Medium => 12,
            QuizDifficulty::Hard => 15,
        }
    }

    fn ops(&self) -> &'static [Op] {
        match self {
            QuizDifficulty::Easy => &[Op::Add, Op::Sub],
            QuizDifficulty::Medium => &[Op::Add, Op::Sub, Op::Mul],
            QuizDifficulty::Hard => &[Op::Add, Op::Sub, Op::Mul, Op::Div],
        }
    }
}

/// A single arithmetic problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub a: i64,
    pub b: i64,
    pub op: Op,
}

impl Problem {
    pub fn answer(&self) -> i64 {
        match self.op {
            Op::Add => self.a + self.b,
            Op::Sub => self.a - self.b,
            Op::Mul => self.a * self.b,
            // Problems are generated so this divides exactly
            Op::Div => self.a / self.b,
        }
    }

    pub fn prompt(&self) -> String {
        format!("{} {} {}", self.a, self.op.symbol(), self.b)
    }
}

fn generate(rng: &mut Pcg32, difficulty: QuizDifficulty) -> Problem {
    let ops = difficulty.ops();
    let op = ops[rng.random_range(0..ops.len())];
    let max = difficulty.max_operand();
    let factor = difficulty.max_factor();

    match op {
        Op::Add => Problem {
            a: rng.random_range(1..=max),
            b: rng.random_range(1..=max),
            op,
        },
        Op::Sub => {
            // Keep answers non-negative
            let x = rng.random_range(1..=max);
            let y = rng.random_range(1..=max);
            Problem {
                a: x.max(y),
                b: x.min(y),
                op,
            }
        }
        Op::Mul => Problem {
            a: rng.random_range(1..=factor),
            b: rng.random_range(1..=factor),
            op,
        },
        Op::Div => {
            // Built from a product so the quotient is exact
            let quotient = rng.random_range(1..=factor);
            let divisor = rng.random_range(1..=factor);
            Problem {
                a: quotient * divisor,
                b: divisor,
                op,
            }
        }
    }
}

/// A quiz session: one seeded stream of problems and its running tally
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSession {
    rng: Pcg32,
    pub difficulty: QuizDifficulty,
    pub asked: u32,
    pub correct: u32,
    pub streak: u32,
    pub best_streak: u32,
    pub score: u32,
    current: Problem,
}

impl QuizSession {
    pub fn new(seed: u64, difficulty: QuizDifficulty) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let current = generate(&mut rng, difficulty);
        Self {
            rng,
            difficulty,
            asked: 0,
            correct: 0,
            streak: 0,
            best_streak: 0,
            score: 0,
            current,
        }
    }

    pub fn current(&self) -> &Problem {
        &self.current
    }

    /// Check an answer, update the tally, and move to the next problem.
    /// Returns whether the answer was correct.
    pub fn submit(&mut self, answer: i64) -> bool {
        let correct = answer == self.current.answer();
        self.asked += 1;
        if correct {
            self.correct += 1;
            self.streak += 1;
            self.best_streak = self.best_streak.max(self.streak);
            self.score += POINTS_PER_CORRECT;
        } else {
            self.streak = 0;
        }
        self.current = generate(&mut self.rng, self.difficulty);
        correct
    }
}
