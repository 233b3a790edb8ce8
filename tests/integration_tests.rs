//! Integration tests for the main game loop

use tui_snake::core::{GameState, SimpleRng};
use tui_snake::types::{Cell, GameAction, Heading, Phase, StepOutcome, INITIAL_SNAKE_LEN};

#[test]
fn test_game_lifecycle() {
    let mut state = GameState::new(12345);
    assert_eq!(state.phase(), Phase::Ready);

    // Ticks before the first input do nothing.
    assert_eq!(state.tick(), StepOutcome::Idle);
    assert_eq!(state.snake().head(), Cell::new(8, 10));

    // First accepted input starts the game.
    assert!(state.apply_action(GameAction::Turn(Heading::Up)));
    assert_eq!(state.phase(), Phase::Running);

    let outcome = state.tick();
    assert!(matches!(outcome, StepOutcome::Moved | StepOutcome::Ate));
    assert_eq!(state.snake().head(), Cell::new(8, 9));
}

#[test]
fn test_reversal_is_dropped_within_a_window() {
    let mut state = GameState::new(1);
    assert!(state.apply_action(GameAction::Turn(Heading::Right)));

    // Right then Left before the next tick: Left is dropped and the snake
    // keeps going right.
    assert!(!state.apply_action(GameAction::Turn(Heading::Left)));
    state.tick();
    assert_eq!(state.snake().head(), Cell::new(9, 10));
    assert_eq!(state.heading(), Heading::Right);
}

#[test]
fn test_wall_collision_ends_and_freezes_the_game() {
    let mut state = GameState::new(77);
    assert!(state.apply_action(GameAction::Turn(Heading::Up)));

    // Drive straight up; the head starts at y=10, so within a dozen ticks
    // (food or not) the top wall ends the game.
    let mut outcomes = Vec::new();
    for _ in 0..13 {
        outcomes.push(state.tick());
        if state.phase() == Phase::GameOver {
            break;
        }
    }
    assert_eq!(outcomes.last(), Some(&StepOutcome::Died));
    assert_eq!(state.phase(), Phase::GameOver);

    // Frozen until restart: inputs and ticks are no-ops.
    let head = state.snake().head();
    let score = state.score();
    let food = state.food();
    assert!(!state.apply_action(GameAction::Turn(Heading::Left)));
    assert_eq!(state.tick(), StepOutcome::Idle);
    assert_eq!(state.snake().head(), head);
    assert_eq!(state.score(), score);
    assert_eq!(state.food(), food);
}

#[test]
fn test_restart_restores_initial_values() {
    let mut state = GameState::new(42);
    assert!(state.apply_action(GameAction::Turn(Heading::Down)));
    for _ in 0..5 {
        state.tick();
    }

    assert!(state.apply_action(GameAction::Restart));

    assert_eq!(state.phase(), Phase::Ready);
    assert_eq!(state.score(), 0);
    assert_eq!(state.heading(), Heading::Right);
    assert_eq!(state.episode_id(), 1);
    assert_eq!(state.snake().len(), INITIAL_SNAKE_LEN);
    assert_eq!(
        state.snake().cells(),
        &[Cell::new(8, 10), Cell::new(7, 10), Cell::new(6, 10)]
    );
    assert!(!state.snake().contains(state.food()));
}

#[test]
fn test_snake_stays_in_bounds_and_food_stays_off_the_body() {
    for seed in [3u32, 99, 2024] {
        let mut state = GameState::new(seed);
        assert!(state.apply_action(GameAction::Turn(Heading::Right)));
        let mut rng = SimpleRng::new(seed.wrapping_mul(31));

        for _ in 0..3000 {
            let turn = match rng.next_range(4) {
                0 => Heading::Up,
                1 => Heading::Down,
                2 => Heading::Left,
                _ => Heading::Right,
            };
            state.apply_action(GameAction::Turn(turn));

            if state.tick() == StepOutcome::Died {
                state.apply_action(GameAction::Restart);
                state.apply_action(GameAction::Turn(Heading::Right));
                continue;
            }

            for &cell in state.snake().cells() {
                assert!(cell.in_bounds(), "seed {seed}: cell {cell:?} out of bounds");
            }
            assert!(!state.snake().contains(state.food()));
        }
    }
}

#[test]
fn test_score_tracks_length() {
    // Score and length move in lockstep: length = initial + score.
    let mut state = GameState::new(7);
    assert!(state.apply_action(GameAction::Turn(Heading::Right)));
    let mut rng = SimpleRng::new(11);

    for _ in 0..3000 {
        let turn = match rng.next_range(4) {
            0 => Heading::Up,
            1 => Heading::Down,
            2 => Heading::Left,
            _ => Heading::Right,
        };
        state.apply_action(GameAction::Turn(turn));

        if state.tick() == StepOutcome::Died {
            state.apply_action(GameAction::Restart);
            state.apply_action(GameAction::Turn(Heading::Right));
            continue;
        }
        assert_eq!(
            state.snake().len(),
            INITIAL_SNAKE_LEN + state.score() as usize
        );
    }
}
