//! Fixed timestep advance for the snake simulation

use glam::IVec2;

use super::state::{Direction, EndCause, GameEvent, GamePhase, GameState, Mode};
use crate::consts::{FOOD_SCORE, GRID_SIZE};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Direction change requested since the last tick
    pub turn: Option<Direction>,
    /// Pause toggle
    pub pause: bool,
    /// Start a run (from Menu) or replay (from GameOver)
    pub start: bool,
    /// Back to the menu (from Paused or GameOver)
    pub menu: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Pause toggle suspends tick processing without touching the run
    if input.pause {
        match state.phase {
            GamePhase::Running => {
                state.phase = GamePhase::Paused;
                return events;
            }
            GamePhase::Paused => state.phase = GamePhase::Running,
            _ => {}
        }
    }

    if input.menu && matches!(state.phase, GamePhase::Paused | GamePhase::GameOver) {
        state.phase = GamePhase::Menu;
        return events;
    }

    match state.phase {
        GamePhase::Menu | GamePhase::GameOver => {
            if input.start {
                state.reset_run();
                events.push(GameEvent::CountdownStarted);
            }
        }
        GamePhase::Countdown => {
            // Direction input is ignored until the run starts
            state.countdown_ticks = state.countdown_ticks.saturating_sub(1);
            if state.countdown_ticks == 0 {
                state.phase = GamePhase::Running;
                events.push(GameEvent::RunStarted);
            }
        }
        GamePhase::Paused => {}
        GamePhase::Running => advance(state, input, &mut events),
    }

    events
}

fn advance(state: &mut GameState, input: &TickInput, events: &mut Vec<GameEvent>) {
    state.time_ticks += 1;

    if let Some(turn) = input.turn {
        state.queue_turn(turn);
    }
    if let Some(turn) = state.take_turn() {
        // No reversing through your own neck
        if !turn.is_reversal(state.direction) {
            state.direction = turn;
        }
    }

    let mut next = state.head() + state.direction.delta();
    match state.mode {
        Mode::Wrap => next = next.rem_euclid(IVec2::splat(GRID_SIZE)),
        Mode::Classic => {
            if !GameState::in_bounds(next) {
                return end_run(state, EndCause::HitWall, events);
            }
        }
    }

    // Self-collision is checked before the move commits
    if state.occupied(next) {
        return end_run(state, EndCause::HitSelf, events);
    }

    state.snake.push_front(next);
    if next == state.food {
        state.score += FOOD_SCORE;
        state.foods_eaten += 1;
        events.push(GameEvent::FoodEaten { at: next });
        // Tail stays: the snake grows by one
        if !state.spawn_food() {
            end_run(state, EndCause::Won, events);
        }
    } else {
        state.snake.pop_back();
    }
}

fn end_run(state: &mut GameState, cause: EndCause, events: &mut Vec<GameEvent>) {
    state.phase = GamePhase::GameOver;
    state.end_cause = Some(cause);
    events.push(GameEvent::GameOver {
        cause,
        score: state.score,
        length: state.snake.len() as u32,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::Difficulty;
    use proptest::prelude::*;
    use std::collections::VecDeque;

    fn running_state(mode: Mode) -> GameState {
        let mut state = GameState::new(7, Difficulty::Medium, mode);
        state.reset_run();
        state.phase = GamePhase::Running;
        state
    }

    fn step(state: &mut GameState) -> Vec<GameEvent> {
        tick(state, &TickInput::default())
    }

    #[test]
    fn test_plain_move_drops_tail() {
        let mut state = running_state(Mode::Classic);
        state.food = IVec2::new(0, 0);
        let events = step(&mut state);
        assert!(events.is_empty());
        assert_eq!(
            state.snake,
            [IVec2::new(11, 10), IVec2::new(10, 10), IVec2::new(9, 10)]
        );
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_eating_grows_and_scores() {
        let mut state = running_state(Mode::Classic);
        state.food = IVec2::new(11, 10);
        let events = step(&mut state);
        assert!(events.contains(&GameEvent::FoodEaten {
            at: IVec2::new(11, 10)
        }));
        assert_eq!(state.score, 10);
        assert_eq!(state.foods_eaten, 1);
        assert_eq!(state.snake.len(), 4);
        assert_ne!(state.food, IVec2::new(11, 10));
        assert!(!state.occupied(state.food));
    }

    #[test]
    fn test_classic_wall_ends_game() {
        let mut state = running_state(Mode::Classic);
        state.snake = VecDeque::from([IVec2::new(19, 10), IVec2::new(18, 10), IVec2::new(17, 10)]);
        let events = step(&mut state);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.end_cause, Some(EndCause::HitWall));
        assert!(matches!(events[0], GameEvent::GameOver { .. }));
        // The snake itself is untouched by a wall death
        assert_eq!(state.snake.len(), 3);
    }

    #[test]
    fn test_wrap_crosses_the_edge() {
        let mut state = running_state(Mode::Wrap);
        state.snake = VecDeque::from([IVec2::new(19, 10), IVec2::new(18, 10), IVec2::new(17, 10)]);
        state.food = IVec2::new(5, 5);
        step(&mut state);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.head(), IVec2::new(0, 10));
    }

    #[test]
    fn test_self_collision_ends_game() {
        let mut state = running_state(Mode::Classic);
        // Head about to move right into its own body
        state.snake = VecDeque::from([
            IVec2::new(5, 5),
            IVec2::new(5, 6),
            IVec2::new(6, 6),
            IVec2::new(6, 5),
            IVec2::new(6, 4),
        ]);
        state.direction = Direction::Right;
        step(&mut state);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.end_cause, Some(EndCause::HitSelf));
    }

    #[test]
    fn test_reversal_is_rejected() {
        let mut state = running_state(Mode::Classic);
        state.food = IVec2::new(0, 0);
        tick(
            &mut state,
            &TickInput {
                turn: Some(Direction::Left),
                ..TickInput::default()
            },
        );
        // Still heading right
        assert_eq!(state.direction, Direction::Right);
        assert_eq!(state.head(), IVec2::new(11, 10));
    }

    #[test]
    fn test_orthogonal_turn_applies() {
        let mut state = running_state(Mode::Classic);
        state.food = IVec2::new(0, 0);
        tick(
            &mut state,
            &TickInput {
                turn: Some(Direction::Up),
                ..TickInput::default()
            },
        );
        assert_eq!(state.direction, Direction::Up);
        assert_eq!(state.head(), IVec2::new(10, 9));
    }

    #[test]
    fn test_pause_freezes_and_resumes() {
        let mut state = running_state(Mode::Classic);
        state.food = IVec2::new(0, 0);
        let pause = TickInput {
            pause: true,
            ..TickInput::default()
        };

        tick(&mut state, &pause);
        assert_eq!(state.phase, GamePhase::Paused);
        let frozen = state.snake.clone();

        // Ticks while paused change nothing
        step(&mut state);
        assert_eq!(state.snake, frozen);

        // Unpausing resumes from the exact prior state
        tick(&mut state, &pause);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.head(), IVec2::new(11, 10));
    }

    #[test]
    fn test_menu_to_countdown_to_running() {
        let mut state = GameState::new(9, Difficulty::Medium, Mode::Classic);
        let events = tick(
            &mut state,
            &TickInput {
                start: true,
                ..TickInput::default()
            },
        );
        assert_eq!(events, vec![GameEvent::CountdownStarted]);
        assert_eq!(state.phase, GamePhase::Countdown);

        // Turns during the countdown are ignored
        let turn = TickInput {
            turn: Some(Direction::Down),
            ..TickInput::default()
        };
        for _ in 0..state.difficulty.countdown_ticks() - 1 {
            assert!(tick(&mut state, &turn).is_empty());
        }
        let events = tick(&mut state, &turn);
        assert_eq!(events, vec![GameEvent::RunStarted]);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.direction, Direction::Right);
    }

    #[test]
    fn test_replay_from_game_over() {
        let mut state = running_state(Mode::Classic);
        state.snake = VecDeque::from([IVec2::new(19, 10), IVec2::new(18, 10), IVec2::new(17, 10)]);
        step(&mut state);
        assert_eq!(state.phase, GamePhase::GameOver);

        let events = tick(
            &mut state,
            &TickInput {
                start: true,
                ..TickInput::default()
            },
        );
        assert_eq!(events, vec![GameEvent::CountdownStarted]);
        assert_eq!(state.phase, GamePhase::Countdown);
        assert_eq!(state.score, 0);
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.end_cause, None);
    }

    #[test]
    fn test_menu_clears_game_over() {
        let mut state = running_state(Mode::Classic);
        state.snake = VecDeque::from([IVec2::new(19, 10), IVec2::new(18, 10), IVec2::new(17, 10)]);
        step(&mut state);
        tick(
            &mut state,
            &TickInput {
                menu: true,
                ..TickInput::default()
            },
        );
        assert_eq!(state.phase, GamePhase::Menu);
    }

    #[test]
    fn test_filling_the_grid_wins() {
        let mut state = running_state(Mode::Classic);
        // Snake covers every cell except (0, 0); head at (0, 1) moving up
        let mut body: VecDeque<_> = VecDeque::from([IVec2::new(0, 1)]);
        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                let cell = IVec2::new(x, y);
                if cell != IVec2::new(0, 0) && cell != IVec2::new(0, 1) {
                    body.push_back(cell);
                }
            }
        }
        state.snake = body;
        state.direction = Direction::Up;
        state.food = IVec2::new(0, 0);

        let events = step(&mut state);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.end_cause, Some(EndCause::Won));
        assert!(events.contains(&GameEvent::FoodEaten {
            at: IVec2::new(0, 0)
        }));
        assert_eq!(state.snake.len(), (GRID_SIZE * GRID_SIZE) as usize);
    }

    fn direction_strategy() -> impl Strategy<Value = Direction> {
        prop_oneof![
            Just(Direction::Up),
            Just(Direction::Down),
            Just(Direction::Left),
            Just(Direction::Right),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// Property: wrap mode never ends a game at the boundary, and the
        /// head stays inside the grid forever
        #[test]
        fn prop_wrap_never_out_of_bounds(
            seed in 0u64..1000,
            turns in proptest::collection::vec(direction_strategy(), 1..200)
        ) {
            let mut state = GameState::new(seed, Difficulty::Medium, Mode::Wrap);
            state.reset_run();
            state.phase = GamePhase::Running;
            for turn in turns {
                let events = tick(&mut state, &TickInput { turn: Some(turn), ..TickInput::default() });
                prop_assert!(GameState::in_bounds(state.head()));
                for event in events {
                    if let GameEvent::GameOver { cause, .. } = event {
                        prop_assert_ne!(cause, EndCause::HitWall);
                    }
                }
                if state.phase != GamePhase::Running {
                    break;
                }
            }
        }

        /// Property: food is never on the snake while a run is live, and
        /// each food adds exactly 10 points and one segment
        #[test]
        fn prop_food_and_score_invariants(
            seed in 0u64..1000,
            turns in proptest::collection::vec(direction_strategy(), 1..300)
        ) {
            let mut state = GameState::new(seed, Difficulty::Medium, Mode::Wrap);
            state.reset_run();
            state.phase = GamePhase::Running;
            let start_len = state.snake.len();
            for turn in turns {
                tick(&mut state, &TickInput { turn: Some(turn), ..TickInput::default() });
                if state.phase != GamePhase::Running {
                    break;
                }
                prop_assert!(!state.occupied(state.food));
                prop_assert_eq!(state.score, state.foods_eaten * 10);
                prop_assert_eq!(state.snake.len(), start_len + state.foods_eaten as usize);
            }
        }
    }
}
