// Copyright (C) 2020-2026 Andy Kurnia.

mod common;

use common::{board_with, board_with_cat, dictionary, loc, rack, snapshot, word};
use rackbot::dictionary::Dictionary;
use rackbot::game_config::make_english_game_config;
use rackbot::grid::Grid;
use rackbot::legality::verify_legality;
use rackbot::location::Direction::{Horizontal, Vertical};
use rackbot::location::{self, Direction, Location};
use rackbot::movegen::{BoardSnapshot, Move, MoveGenerator};
use rackbot::play_scorer::compute_score;
use rackbot::word::Symbol;

fn gen_all(board: &BoardSnapshot<'_>, hand: &str) -> Vec<Move> {
    let mut move_generator = MoveGenerator::new();
    move_generator.gen_moves(board, &rack(hand));
    move_generator.moves
}

fn has_move(moves: &[Move], w: &str, location: Location, direction: Direction, score: i32) -> bool {
    moves.iter().any(|play| {
        play.word == word(w) && play.location == location && play.direction == direction && play.score == score
    })
}

fn assert_sound(board: &BoardSnapshot<'_>, hand: &str, moves: &[Move]) {
    for pair in moves.windows(2) {
        assert!(pair[0].score >= pair[1].score, "moves are sorted by score");
    }
    for play in moves {
        assert_eq!(
            verify_legality(board, &play.word, play.location, play.direction, &rack(hand)),
            Ok(()),
            "{} at {} is legal",
            play.word,
            play.location
        );
        assert_eq!(
            compute_score(board, &play.word, play.location, play.direction),
            play.score
        );
    }
}

#[test]
fn first_moves_cross_the_center_horizontally() {
    let (grid, dictionary, game_config) = (Grid::new(), dictionary(), make_english_game_config());
    let board = snapshot(&grid, &dictionary, &game_config);
    let moves = gen_all(&board, "tac");
    assert_sound(&board, "tac", &moves);
    // cat and act at three starts each, at and ta at two starts each
    assert_eq!(moves.len(), 10);
    for play in &moves {
        assert_eq!(play.direction, Horizontal);
        assert_eq!(play.location.row, location::CENTER.row);
        let end = play.location.col + play.word.len() as i8;
        assert!((play.location.col..end).contains(&location::CENTER.col));
    }
    assert_eq!(moves[0].score, 10);
    assert!(has_move(&moves, "cat", loc(7, 5), Horizontal, 10));
    assert!(has_move(&moves, "at", loc(7, 7), Horizontal, 4));
    // equal scores stay in dictionary order, then left to right
    let order = moves
        .iter()
        .map(|play| (play.word.to_string(), play.location.col))
        .collect::<Vec<_>>();
    let expected = [
        ("act", 5),
        ("act", 6),
        ("act", 7),
        ("cat", 5),
        ("cat", 6),
        ("cat", 7),
        ("at", 6),
        ("at", 7),
        ("ta", 6),
        ("ta", 7),
    ]
    .map(|(w, col)| (w.to_string(), col));
    assert_eq!(order, expected);
}

#[test]
fn extends_and_hooks_existing_words() {
    let (grid, dictionary, game_config) = (board_with_cat(), dictionary(), make_english_game_config());
    let board = snapshot(&grid, &dictionary, &game_config);
    let moves = gen_all(&board, "s");
    assert_sound(&board, "s", &moves);
    assert_eq!(moves.len(), 3, "{:?}", moves);
    assert!(has_move(&moves, "   s", loc(7, 6), Horizontal, 6));
    assert!(has_move(&moves, "s   ", loc(7, 5), Horizontal, 6));
    assert_eq!(moves[2].word, word(" s"));
    assert_eq!((moves[2].location, moves[2].direction, moves[2].score), (loc(7, 7), Vertical, 2));
}

#[test]
fn fills_gaps_between_runs() {
    let (dictionary, game_config) = (dictionary(), make_english_game_config());
    let grid = board_with(&[("c", 7, 5, Horizontal), ("t", 7, 7, Horizontal)]);
    let board = snapshot(&grid, &dictionary, &game_config);
    let moves = gen_all(&board, "a");
    assert_sound(&board, "a", &moves);
    assert!(has_move(&moves, " a ", loc(7, 5), Horizontal, 5));
}

#[test]
fn blank_stands_in_for_missing_letters() {
    let (grid, dictionary, game_config) = (board_with_cat(), dictionary(), make_english_game_config());
    let board = snapshot(&grid, &dictionary, &game_config);
    let moves = gen_all(&board, "_");
    assert_sound(&board, "_", &moves);
    assert!(has_move(&moves, "   S", loc(7, 6), Horizontal, 5));
    assert!(has_move(&moves, "S   ", loc(7, 5), Horizontal, 5));
    for play in &moves {
        assert_eq!(play.word.num_placed(), 1);
        assert_eq!(play.word.num_blanks(), 1, "{} uses the blank", play.word);
    }
}

#[test]
fn real_tiles_are_used_before_blanks() {
    let (grid, dictionary, game_config) = (Grid::new(), dictionary(), make_english_game_config());
    let board = snapshot(&grid, &dictionary, &game_config);
    let moves = gen_all(&board, "ca_");
    assert_sound(&board, "ca_", &moves);
    let cat = moves
        .iter()
        .find(|play| play.word.to_string().eq_ignore_ascii_case("cat"))
        .expect("cat is playable");
    assert_eq!(
        cat.word.symbols(),
        &[Symbol::Tile('c'), Symbol::Tile('a'), Symbol::Blank('t')]
    );
}

#[test]
fn no_moves_without_buildable_words() {
    let (grid, dictionary, game_config) = (board_with_cat(), dictionary(), make_english_game_config());
    let board = snapshot(&grid, &dictionary, &game_config);
    assert!(gen_all(&board, "qzzq").is_empty());
    let empty_dictionary = Dictionary::from_words(Vec::<String>::new());
    let board = snapshot(&grid, &empty_dictionary, &game_config);
    assert!(gen_all(&board, "cats").is_empty());
}

#[test]
fn search_is_deterministic_and_buffers_reset() {
    let (grid, dictionary, game_config) = (board_with_cat(), dictionary(), make_english_game_config());
    let board = snapshot(&grid, &dictionary, &game_config);
    let mut move_generator = MoveGenerator::new();
    move_generator.gen_moves(&board, &rack("sat"));
    let first = move_generator.moves.clone();
    move_generator.gen_moves(&board, &rack("s"));
    move_generator.gen_moves(&board, &rack("sat"));
    assert_eq!(move_generator.moves, first);
    assert!(!first.is_empty());
}
