//! Engine-level tests for whole game flows: start, steer, eat, crash,
//! restart, and high-score handling through the public API.

use tui_snake::core::StepOutcome;
use tui_snake::engine::GameEngine;
use tui_snake::score::MemoryScoreStore;
use tui_snake::types::{Direction, GameAction, GamePhase, Point};

fn new_engine(high_score: u32) -> GameEngine<MemoryScoreStore> {
    GameEngine::new(12345, MemoryScoreStore::with_value(high_score))
}

/// Pick the next greedy move toward the food, never reversing.
fn direction_toward(head: Point, food: Point, heading: Direction) -> Direction {
    let mut candidates = Vec::new();
    if food.x > head.x {
        candidates.push(Direction::Right);
    } else if food.x < head.x {
        candidates.push(Direction::Left);
    }
    if food.y > head.y {
        candidates.push(Direction::Down);
    } else if food.y < head.y {
        candidates.push(Direction::Up);
    }

    for dir in candidates {
        if dir != heading.opposite() {
            return dir;
        }
    }

    // Food lies exactly behind the head: sidestep first.
    match heading {
        Direction::Left | Direction::Right => {
            if head.y > 0 {
                Direction::Up
            } else {
                Direction::Down
            }
        }
        Direction::Up | Direction::Down => {
            if head.x > 0 {
                Direction::Left
            } else {
                Direction::Right
            }
        }
    }
}

/// Steer the snake onto food until the target score is reached.
fn eat_until(engine: &mut GameEngine<MemoryScoreStore>, target_score: u32) {
    for _ in 0..400 {
        if engine.score() >= target_score {
            return;
        }
        let head = engine.state().head();
        let food = engine.state().food();
        let heading = engine.state().heading().expect("running game has heading");

        engine.apply_action(GameAction::Turn(direction_toward(head, food, heading)));
        let outcome = engine.step().expect("game should still be running");
        assert_ne!(outcome, StepOutcome::Died, "steering must not crash");
    }
    panic!("did not reach score {target_score}");
}

#[test]
fn test_start_scenario() {
    let mut engine = new_engine(0);
    assert_eq!(engine.phase(), GamePhase::Idle);
    assert_eq!(engine.state().heading(), None);

    engine.apply_action(GameAction::Start);
    assert_eq!(engine.phase(), GamePhase::Running);
    assert_eq!(engine.state().heading(), Some(Direction::Right));

    // With this seed the first food is not on the starting row, so the first
    // step is a pure translation.
    engine.step();
    assert_eq!(engine.state().head(), Point::new(11, 10));
    assert_eq!(engine.state().snake().len(), 1);
    assert_eq!(engine.score(), 0);
}

#[test]
fn test_eating_grows_and_scores() {
    let mut engine = new_engine(0);
    engine.apply_action(GameAction::Start);

    eat_until(&mut engine, 20);

    assert_eq!(engine.score(), 20);
    assert_eq!(engine.state().snake().len(), 3);
    assert_eq!(engine.phase(), GamePhase::Running);
    // Food keeps clear of the snake.
    assert!(!engine.state().snake().contains(&engine.state().food()));
}

#[test]
fn test_wall_crash_ends_game_and_updates_high_score() {
    let mut engine = new_engine(0);
    engine.apply_action(GameAction::Start);
    eat_until(&mut engine, 10);

    // Hold rightward until the wall ends the game (eating on the way is fine).
    engine.apply_action(GameAction::Turn(Direction::Right));
    for _ in 0..40 {
        if engine.phase() == GamePhase::Over {
            break;
        }
        engine.apply_action(GameAction::Turn(Direction::Right));
        engine.step();
    }

    assert_eq!(engine.phase(), GamePhase::Over);
    let notice = engine.notice().expect("notice after game over");
    assert_eq!(notice.final_score, engine.score());
    assert!(notice.new_high_score);
    assert_eq!(engine.high_score(), engine.score());
    assert!(engine.score() >= 10);
}

#[test]
fn test_high_score_not_lowered_by_worse_game() {
    let mut engine = new_engine(500);
    engine.apply_action(GameAction::Start);

    // Crash scorelessly into the right wall (the food sits off this row).
    while engine.phase() == GamePhase::Running {
        engine.step();
    }

    assert_eq!(engine.score(), 0);
    assert_eq!(engine.high_score(), 500);
    assert!(!engine.notice().unwrap().new_high_score);
}

#[test]
fn test_pause_blocks_steps_and_turns() {
    let mut engine = new_engine(0);
    engine.apply_action(GameAction::Start);
    engine.step();
    let head = engine.state().head();

    engine.apply_action(GameAction::TogglePause);
    assert_eq!(engine.phase(), GamePhase::Paused);

    assert!(engine.step().is_none());
    assert!(!engine.apply_action(GameAction::Turn(Direction::Up)));
    assert_eq!(engine.state().head(), head);

    engine.apply_action(GameAction::TogglePause);
    assert_eq!(engine.phase(), GamePhase::Running);
    engine.step();
    assert_ne!(engine.state().head(), head);
}

#[test]
fn test_reverse_turn_is_ignored() {
    let mut engine = new_engine(0);
    engine.apply_action(GameAction::Start);

    assert!(!engine.apply_action(GameAction::Turn(Direction::Left)));
    assert_eq!(engine.state().heading(), Some(Direction::Right));

    assert!(engine.apply_action(GameAction::Turn(Direction::Down)));
    assert!(!engine.apply_action(GameAction::Turn(Direction::Up)));
    assert_eq!(engine.state().heading(), Some(Direction::Down));
}

#[test]
fn test_restart_from_over_starts_fresh() {
    let mut engine = new_engine(0);
    engine.apply_action(GameAction::Start);
    while engine.phase() == GamePhase::Running {
        engine.step();
    }
    assert_eq!(engine.phase(), GamePhase::Over);

    // Starting without a restart stays dead.
    assert!(!engine.apply_action(GameAction::Start));
    assert_eq!(engine.phase(), GamePhase::Over);

    engine.apply_action(GameAction::Restart);
    assert_eq!(engine.phase(), GamePhase::Idle);
    assert_eq!(engine.score(), 0);
    assert_eq!(engine.state().snake().len(), 1);
    assert_eq!(engine.state().head(), Point::new(10, 10));
    assert!(engine.notice().is_none());

    engine.apply_action(GameAction::Start);
    assert_eq!(engine.phase(), GamePhase::Running);
    assert!(engine.step().is_some());
}
