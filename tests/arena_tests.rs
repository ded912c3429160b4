//! Match runner integration tests.

use std::time::Duration;

use isolation::agent::{Agent, RandomPlayer, SearchPlayer};
use isolation::arena::{play_match, EndReason, MatchConfig};
use isolation::core::{Board, Move, PlayerId};
use isolation::eval::{ImprovedScore, NullScore};
use isolation::search::{Deadline, SearchConfig};

/// Waits out its clock before answering.
struct Sleeper;

impl Agent for Sleeper {
    fn choose_move(&mut self, board: &Board, deadline: &dyn Deadline) -> Move {
        let wait = deadline.time_left().max(0.0) as u64 + 5;
        std::thread::sleep(Duration::from_millis(wait));
        board.active_legal_moves()[0]
    }

    fn name(&self) -> &str {
        "sleeper"
    }
}

/// Always answers with the sentinel.
struct Passer;

impl Agent for Passer {
    fn choose_move(&mut self, _board: &Board, _deadline: &dyn Deadline) -> Move {
        Move::NONE
    }
}

#[test]
fn test_match_runs_to_completion() {
    let mut one = SearchPlayer::minimax(ImprovedScore, 2);
    let mut two = RandomPlayer::new(8);
    let config = MatchConfig::default().with_enforce_timeout(false);

    let outcome = play_match(Board::new(5, 5), &mut one, &mut two, &config);

    assert_eq!(outcome.reason, EndReason::NoLegalMoves);
    assert_eq!(outcome.board.winner(), Some(outcome.winner));
    assert_ne!(outcome.winner, outcome.loser());
    assert!(outcome.history().len() >= 2);
}

#[test]
fn test_history_alternates_players() {
    let mut one = RandomPlayer::new(1);
    let mut two = RandomPlayer::new(2);
    let config = MatchConfig::default().with_enforce_timeout(false);

    let outcome = play_match(Board::new(6, 6), &mut one, &mut two, &config);

    for (ply, record) in outcome.history().iter().enumerate() {
        let expected = if ply % 2 == 0 {
            PlayerId::ONE
        } else {
            PlayerId::TWO
        };
        assert_eq!(record.player, expected);
    }
}

#[test]
fn test_timeout_forfeits() {
    let mut one = RandomPlayer::new(1);
    let mut two = Sleeper;
    let config = MatchConfig::default().with_time_limit(1);

    let outcome = play_match(Board::new(5, 5), &mut one, &mut two, &config);

    assert_eq!(outcome.winner, PlayerId::ONE);
    assert_eq!(outcome.reason, EndReason::Timeout);
    assert_eq!(outcome.history().len(), 1);
}

#[test]
fn test_timeout_ignored_when_not_enforced() {
    let mut one = RandomPlayer::new(1);
    let mut two = Sleeper;
    let config = MatchConfig::default()
        .with_time_limit(1)
        .with_enforce_timeout(false);

    let outcome = play_match(Board::new(3, 3), &mut one, &mut two, &config);

    assert_ne!(outcome.reason, EndReason::Timeout);
}

#[test]
fn test_sentinel_is_an_illegal_move() {
    let mut one = Passer;
    let mut two = RandomPlayer::new(3);

    let outcome = play_match(Board::new(4, 4), &mut one, &mut two, &MatchConfig::default());

    assert_eq!(outcome.winner, PlayerId::TWO);
    assert_eq!(outcome.reason, EndReason::IllegalMove(Move::NONE));
}

#[test]
fn test_match_starts_from_given_board() {
    // Player 1 is already stuck.
    let mut board = Board::new(3, 1);
    board.apply_move(Move::new(0, 0)).unwrap();
    board.apply_move(Move::new(0, 2)).unwrap();

    let mut one = SearchPlayer::new(NullScore, SearchConfig::alphabeta());
    let mut two = RandomPlayer::new(4);
    let outcome = play_match(board, &mut one, &mut two, &MatchConfig::default());

    assert_eq!(outcome.winner, PlayerId::TWO);
    assert_eq!(outcome.reason, EndReason::NoLegalMoves);
    assert_eq!(outcome.history().len(), 2);
}
