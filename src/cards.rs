//! Card-matching memory game
//!
//! Pairs of symbols shuffled face-down. Flipping the second card of a pair
//! starts a short resolution delay before the pair is marked matched or
//! flipped back down; only one comparison is ever pending at a time, so
//! further flips are ignored until it resolves.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::consts::CARD_RESOLVE_DELAY_MS;

/// Resolution delay in ticks for a host ticking at the given rate
pub fn resolve_delay_ticks(tick_rate_hz: u32) -> u32 {
    (CARD_RESOLVE_DELAY_MS * u64::from(tick_rate_hz) / 1000) as u32
}

/// One card on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub symbol: u8,
    pub flipped: bool,
    pub matched: bool,
}

impl Card {
    fn new(symbol: u8) -> Self {
        Self {
            symbol,
            flipped: false,
            matched: false,
        }
    }
}

/// What a flip request did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    /// Flip was not legal right now (resolving, already up, or matched)
    Ignored,
    /// First card of a pair turned up
    FirstUp,
    /// Second card turned up; the comparison is now pending
    ComparisonPending,
}

/// Events emitted when a pending comparison resolves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchEvent {
    Matched { a: usize, b: usize },
    Mismatched { a: usize, b: usize },
    /// Every pair is matched; fires exactly once, with the final match
    Completed,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct Pending {
    a: usize,
    b: usize,
    ticks_left: u32,
}

/// Card-matching game state machine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchGame {
    cards: Vec<Card>,
    first_up: Option<usize>,
    pending: Option<Pending>,
    resolve_delay_ticks: u32,
    /// Number of two-card comparisons made
    pub moves: u32,
    pub matched_pairs: u32,
}

impl MatchGame {
    /// Deal `pairs` symbol pairs in a uniformly random order
    pub fn new(pairs: u8, resolve_delay_ticks: u32, rng: &mut impl Rng) -> Self {
        let mut cards: Vec<Card> = (0..pairs)
            .flat_map(|symbol| [Card::new(symbol), Card::new(symbol)])
            .collect();
        cards.shuffle(rng);
        Self {
            cards,
            first_up: None,
            pending: None,
            resolve_delay_ticks,
            moves: 0,
            matched_pairs: 0,
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn total_pairs(&self) -> u32 {
        (self.cards.len() / 2) as u32
    }

    pub fn is_complete(&self) -> bool {
        self.matched_pairs == self.total_pairs()
    }

    /// Try to turn a card face-up
    pub fn flip(&mut self, index: usize) -> FlipOutcome {
        if self.pending.is_some() || index >= self.cards.len() {
            return FlipOutcome::Ignored;
        }
        let card = &mut self.cards[index];
        if card.flipped || card.matched {
            return FlipOutcome::Ignored;
        }
        card.flipped = true;

        match self.first_up.take() {
            None => {
                self.first_up = Some(index);
                FlipOutcome::FirstUp
            }
            Some(first) => {
                self.moves += 1;
                self.pending = Some(Pending {
                    a: first,
                    b: index,
                    ticks_left: self.resolve_delay_ticks,
                });
                FlipOutcome::ComparisonPending
            }
        }
    }

    /// Advance the resolution delay by one tick
    pub fn tick(&mut self) -> Vec<MatchEvent> {
        let mut events = Vec::new();
        let Some(pending) = &mut self.pending else {
            return events;
        };
        pending.ticks_left = pending.ticks_left.saturating_sub(1);
        if pending.ticks_left > 0 {
            return events;
        }
        let (a, b) = (pending.a, pending.b);
        self.pending = None;

        if self.cards[a].symbol == self.cards[b].symbol {
            self.cards[a].matched = true;
            self.cards[b].matched = true;
            self.matched_pairs += 1;
            events.push(MatchEvent::Matched { a, b });
            if self.is_complete() {
                events.push(MatchEvent::Completed);
            }
        } else {
            self.cards[a].flipped = false;
            self.cards[b].flipped = false;
            events.push(MatchEvent::Mismatched { a, b });
        }
        events
    }
}
