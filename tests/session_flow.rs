//! Full rounds the way a UI would drive them: session moves, engine
//! replies, score tallying and the persisted record.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tictactoe_core::engine::{Difficulty, MinimaxEngine, MoveSelector};
use tictactoe_core::logic::board::Side;
use tictactoe_core::logic::game::GameSession;
use tictactoe_core::logic::rules::Outcome;
use tictactoe_core::record::{MemoryStore, RecordStore, ScoreRecord};

/// Plays one round to the end: a random-but-legal human against the
/// engine at the given difficulty. Returns the terminal outcome.
fn play_round(
    game: &mut GameSession,
    engine: &mut MinimaxEngine<StdRng>,
    difficulty: Difficulty,
    human: &mut StdRng,
) -> Outcome {
    while !game.status.is_terminal() {
        match game.turn {
            Side::Player => {
                let open: Vec<usize> = game.board.empty_cells().collect();
                let index = *open.choose(human).expect("live board has a cell");
                game.apply_move(index, Side::Player).expect("legal move");
            }
            Side::Computer => {
                let (index, _) = engine
                    .select_move(&game.board, difficulty)
                    .expect("live board has a move");
                game.apply_move(index, Side::Computer).expect("legal move");
            }
        }
    }
    game.status
}

#[test]
fn test_rounds_tally_into_the_record() {
    let mut engine = MinimaxEngine::from_seed(11);
    let mut human = StdRng::seed_from_u64(22);
    let mut record = ScoreRecord::default();

    let rounds = 30;
    for _ in 0..rounds {
        let mut game = GameSession::new();
        let outcome = play_round(&mut game, &mut engine, Difficulty::Medium, &mut human);
        record.record(outcome);
    }

    assert_eq!(
        record.player_score + record.computer_score + record.draw_score,
        rounds
    );
}

#[test]
fn test_hard_rounds_never_count_a_player_win() {
    let mut engine = MinimaxEngine::from_seed(3);
    let mut human = StdRng::seed_from_u64(4);
    let mut record = ScoreRecord::default();

    for _ in 0..50 {
        let mut game = GameSession::new();
        let outcome = play_round(&mut game, &mut engine, Difficulty::Hard, &mut human);
        record.record(outcome);
    }

    assert_eq!(record.player_score, 0);
    assert_eq!(record.computer_score + record.draw_score, 50);
}

#[test]
fn test_in_progress_outcomes_do_not_tally() {
    let mut record = ScoreRecord::default();
    record.record(Outcome::InProgress);
    assert_eq!(record, ScoreRecord::default());
}

#[test]
fn test_three_resets_zero_the_board_and_spare_the_record() {
    let mut record = ScoreRecord {
        player_score: 3,
        computer_score: 1,
        draw_score: 2,
    };
    let mut game = GameSession::new();

    for _ in 0..3 {
        game.apply_move(4, Side::Player).expect("legal move");
        game.apply_move(0, Side::Computer).expect("legal move");
        game.reset();

        assert!(game.board.empty_cells().count() == 9, "board not zeroed");
        assert_eq!(game.turn, Side::Player);
        assert_eq!(game.status, Outcome::InProgress);
    }

    // Only an explicit record reset touches the counters.
    assert_eq!(record.player_score, 3);
    assert_eq!(record.computer_score, 1);
    assert_eq!(record.draw_score, 2);

    record.reset();
    assert_eq!(record, ScoreRecord::default());
}

#[test]
fn test_record_payload_shape() {
    let record = ScoreRecord {
        player_score: 2,
        computer_score: 1,
        draw_score: 0,
    };
    assert_eq!(
        record.to_json(),
        r#"{"playerScore":2,"computerScore":1,"drawScore":0}"#
    );
    assert_eq!(ScoreRecord::from_json(&record.to_json()), record);
}

#[test]
fn test_corrupted_payload_falls_back_to_zero() {
    assert_eq!(ScoreRecord::from_json("not json"), ScoreRecord::default());
    assert_eq!(ScoreRecord::from_json(""), ScoreRecord::default());
    assert_eq!(
        ScoreRecord::from_json(r#"{"playerScore":"three"}"#),
        ScoreRecord::default()
    );
}

#[test]
fn test_missing_fields_read_as_zero() {
    let record = ScoreRecord::from_json(r#"{"playerScore":5}"#);
    assert_eq!(record.player_score, 5);
    assert_eq!(record.computer_score, 0);
    assert_eq!(record.draw_score, 0);
}

#[test]
fn test_store_round_trip_and_corruption() {
    let mut store = MemoryStore::new();
    assert_eq!(store.load(), ScoreRecord::default(), "empty store is zero");

    let record = ScoreRecord {
        player_score: 1,
        computer_score: 4,
        draw_score: 2,
    };
    store.save(&record);
    assert_eq!(store.load(), record);

    let garbled = MemoryStore::with_payload("{{{");
    assert_eq!(garbled.load(), ScoreRecord::default());
}
