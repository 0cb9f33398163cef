//! Tests for easy-mode alternation and the per-game move counter.

use aigames_tictactoe::{Board, Difficulty, Engine, GameId, Mark, MoveCounter, MoveSelector};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashMap;

fn board_of(s: &str) -> Board {
    let cells: Vec<String> = s.chars().map(|c| c.to_string()).collect();
    Board::from_cells(&cells).expect("valid board")
}

// O must block the 0-4-8 diagonal at 8. Empty squares: 2, 3, 5, 7, 8.
const OPEN: &str = "XO  X O  ";

#[test]
fn test_hard_move_on_open_board_is_the_block() {
    let selector = MoveSelector::default();
    assert_eq!(selector.select_hard(&board_of(OPEN), Mark::O), Some(8));
}

#[test]
fn test_first_easy_move_is_uniform() {
    let selector = MoveSelector::default();
    let board = board_of(OPEN);
    let game = board.game_id();
    let mut rng = StdRng::seed_from_u64(2024);

    let trials = 5000;
    let mut tally: HashMap<usize, usize> = HashMap::new();
    for _ in 0..trials {
        selector.counter().remove(&game);
        let choice = selector.select_easy(&board, &game, Mark::O, &mut rng).unwrap();
        *tally.entry(choice).or_default() += 1;
    }

    let mut squares: Vec<usize> = tally.keys().copied().collect();
    squares.sort_unstable();
    assert_eq!(squares, vec![2, 3, 5, 7, 8]);
    for (square, count) in tally {
        assert!(
            (850..=1150).contains(&count),
            "square {} chosen {} times out of {}",
            square,
            count,
            trials
        );
    }
}

#[test]
fn test_easy_moves_alternate_random_hard_random() {
    let selector = MoveSelector::default();
    let board = board_of(OPEN);
    let game = GameId::from("alternation".to_string());
    let hard = selector.select_hard(&board, Mark::O);
    let mut rng = StdRng::seed_from_u64(11);

    let mut firsts = HashMap::<usize, usize>::new();
    let mut thirds = HashMap::<usize, usize>::new();
    for _ in 0..500 {
        selector.counter().remove(&game);

        let first = selector.select_easy(&board, &game, Mark::O, &mut rng).unwrap();
        let second = selector.select_easy(&board, &game, Mark::O, &mut rng);
        let third = selector.select_easy(&board, &game, Mark::O, &mut rng).unwrap();

        assert_eq!(second, hard, "second easy move must be the minimax move");
        assert!(board.is_empty(first));
        assert!(board.is_empty(third));
        *firsts.entry(first).or_default() += 1;
        *thirds.entry(third).or_default() += 1;
    }

    assert_eq!(selector.counter().get(&game), Some(3));
    assert_eq!(firsts.len(), 5);
    assert_eq!(thirds.len(), 5);
}

#[test]
fn test_counter_lifecycle() {
    let counter = MoveCounter::new();
    let engine = Engine::new(counter.clone());
    let mut rng = StdRng::seed_from_u64(9);

    // One empty square left; X filling it draws.
    let board = board_of("XOXXOOO X");
    let game = board.game_id();

    for n in 1..=3 {
        engine
            .selector()
            .select_easy(&board, &game, Mark::X, &mut rng);
        assert_eq!(counter.get(&game), Some(n));
    }

    let turn = engine.play(&board, Difficulty::Easy, Mark::X, &mut rng);
    assert_eq!(turn.chosen, Some(7));
    assert!(turn.outcome.is_terminal());
    assert_eq!(counter.get(&game), None);

    engine
        .selector()
        .select_easy(&board, &game, Mark::X, &mut rng);
    assert_eq!(counter.get(&game), Some(1));
}

#[test]
fn test_games_are_counted_independently() {
    let counter = MoveCounter::new();
    let selector = MoveSelector::new(counter.clone());
    let board = board_of(OPEN);
    let a = GameId::from("a".to_string());
    let b = GameId::from("b".to_string());
    let mut rng = StdRng::seed_from_u64(4);

    selector.select_easy(&board, &a, Mark::O, &mut rng);
    selector.select_easy(&board, &a, Mark::O, &mut rng);
    selector.select_easy(&board, &b, Mark::O, &mut rng);

    assert_eq!(counter.get(&a), Some(2));
    assert_eq!(counter.get(&b), Some(1));
    assert_eq!(counter.len(), 2);
}

#[test]
fn test_hard_mode_does_not_touch_counter() {
    let counter = MoveCounter::new();
    let engine = Engine::new(counter.clone());
    let mut rng = StdRng::seed_from_u64(4);

    engine.play(&board_of(OPEN), Difficulty::Hard, Mark::O, &mut rng);
    assert!(counter.is_empty());
}
