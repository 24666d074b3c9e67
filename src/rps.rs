//! Rock-paper-scissors rounds and match tallies
//!
//! Rounds are stateless: a fixed beats-table and a uniformly random
//! computer hand. Match modes are just termination conditions over the
//! running win/loss tally.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Rounds played in a tournament match
pub const TOURNAMENT_ROUNDS: u32 = 10;

/// A throwable hand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hand {
    Rock,
    Paper,
    Scissors,
}

impl Hand {
    /// The hand this one defeats
    pub fn beats(&self) -> Hand {
        match self {
            Hand::Rock => Hand::Scissors,
            Hand::Paper => Hand::Rock,
            Hand::Scissors => Hand::Paper,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Hand::Rock => "Rock",
            Hand::Paper => "Paper",
            Hand::Scissors => "Scissors",
        }
    }

    /// Uniformly random hand
    pub fn random(rng: &mut impl Rng) -> Hand {
        match rng.random_range(0..3) {
            0 => Hand::Rock,
            1 => Hand::Paper,
            _ => Hand::Scissors,
        }
    }
}

/// Round result from the player's perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    Win,
    Loss,
    Draw,
}

/// Beats-table lookup for one round
pub fn round_outcome(player: Hand, computer: Hand) -> RoundOutcome {
    if player == computer {
        RoundOutcome::Draw
    } else if player.beats() == computer {
        RoundOutcome::Win
    } else {
        RoundOutcome::Loss
    }
}

/// How a match decides it is over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// One round settles it
    #[default]
    Quick,
    /// First to 3 wins
    BestOfFive,
    /// Fixed number of rounds, most wins takes it
    Tournament,
}

/// Final match result from the player's perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    Won,
    Lost,
    Tied,
}

/// One round as reported to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    pub computer: Hand,
    pub outcome: RoundOutcome,
}

/// Running tally for a match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpsMatch {
    pub mode: MatchMode,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    outcome: Option<MatchOutcome>,
}

impl RpsMatch {
    pub fn new(mode: MatchMode) -> Self {
        Self {
            mode,
            wins: 0,
            losses: 0,
            draws: 0,
            outcome: None,
        }
    }

    pub fn rounds_played(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// Final result once the stopping condition is met
    pub fn outcome(&self) -> Option<MatchOutcome> {
        self.outcome
    }

    /// Play one round against a random computer hand. `None` once the
    /// match is already decided.
    pub fn play_round(&mut self, player: Hand, rng: &mut impl Rng) -> Option<RoundResult> {
        if self.outcome.is_some() {
            return None;
        }
        let computer = Hand::random(rng);
        let outcome = round_outcome(player, computer);
        match outcome {
            RoundOutcome::Win => self.wins += 1,
            RoundOutcome::Loss => self.losses += 1,
            RoundOutcome::Draw => self.draws += 1,
        }
        self.outcome = self.check_finished();
        Some(RoundResult { computer, outcome })
    }

    fn standings(&self) -> MatchOutcome {
        if self.wins > self.losses {
            MatchOutcome::Won
        } else if self.losses > self.wins {
            MatchOutcome::Lost
        } else {
            MatchOutcome::Tied
        }
    }

    fn check_finished(&self) -> Option<MatchOutcome> {
        match self.mode {
            MatchMode::Quick => Some(self.standings()),
            MatchMode::BestOfFive => {
                if self.wins >= 3 {
                    Some(MatchOutcome::Won)
                } else if self.losses >= 3 {
                    Some(MatchOutcome::Lost)
                } else {
                    None
                }
            }
            MatchMode::Tournament => {
                (self.rounds_played() >= TOURNAMENT_ROUNDS).then(|| self.standings())
            }
        }
    }
}
