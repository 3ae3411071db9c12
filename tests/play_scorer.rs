// Copyright (C) 2020-2026 Andy Kurnia.

mod common;

use common::{board_with, board_with_cat, dictionary, loc, snapshot, word};
use rackbot::game_config::{make_english_game_config, make_legacy_english_game_config};
use rackbot::grid::Grid;
use rackbot::location::Direction::{Horizontal, Vertical};
use rackbot::location::NUM_SQUARES;
use rackbot::play_scorer::compute_score;

#[test]
fn center_square_doubles_the_first_word() {
    let (grid, dictionary, game_config) = (Grid::new(), dictionary(), make_english_game_config());
    let board = snapshot(&grid, &dictionary, &game_config);
    assert_eq!(compute_score(&board, &word("cat"), loc(7, 6), Horizontal), 10);
    // a blank scores nothing but still gets the word multiplier
    assert_eq!(compute_score(&board, &word("Cat"), loc(7, 6), Horizontal), 4);
}

#[test]
fn full_rack_earns_the_bonus_on_a_plain_board() {
    let grid = Grid::from_snapshot(&" ".repeat(NUM_SQUARES)).unwrap();
    let (dictionary, game_config) = (dictionary(), make_english_game_config());
    let board = snapshot(&grid, &dictionary, &game_config);
    // p3 i1 r1 a1 t1 e1 s1
    assert_eq!(compute_score(&board, &word("pirates"), loc(3, 4), Horizontal), 9 + 50);
    assert_eq!(compute_score(&board, &word("pirate"), loc(3, 4), Horizontal), 8, "six tiles, no bonus");
}

#[test]
fn bonus_counts_new_tiles_not_word_length() {
    let mut grid = Grid::from_snapshot(&" ".repeat(NUM_SQUARES)).unwrap();
    grid.set(loc(3, 9), 'e').unwrap();
    let (dictionary, game_config) = (dictionary(), make_english_game_config());
    let board = snapshot(&grid, &dictionary, &game_config);
    // six new tiles through the e
    assert_eq!(compute_score(&board, &word("pirat s"), loc(3, 4), Horizontal), 9);
    // seven new tiles through the e, eight letters long
    assert_eq!(compute_score(&board, &word("pirat sa"), loc(3, 4), Horizontal), 10 + 50);
}

#[test]
fn existing_tiles_score_at_face_value_whatever_the_word_says() {
    let (grid, dictionary, game_config) = (board_with_cat(), dictionary(), make_english_game_config());
    let board = snapshot(&grid, &dictionary, &game_config);
    assert_eq!(compute_score(&board, &word("   "), loc(7, 6), Horizontal), 5);
    assert_eq!(compute_score(&board, &word("cat"), loc(7, 6), Horizontal), 5);
    assert_eq!(compute_score(&board, &word("   s"), loc(7, 6), Horizontal), 6);
    assert_eq!(compute_score(&board, &word("cats"), loc(7, 6), Horizontal), 6);
}

#[test]
fn cross_words_use_the_new_square_premium() {
    let (grid, dictionary, game_config) = (board_with_cat(), dictionary(), make_english_game_config());
    let board = snapshot(&grid, &dictionary, &game_config);
    // a lands on a double letter under the t: "at" is 2+1, "ta" is 1+2
    assert_eq!(compute_score(&board, &word("at"), loc(8, 8), Horizontal), 6);
    // s below the a: "as" only, nothing across
    assert_eq!(compute_score(&board, &word(" s"), loc(7, 7), Vertical), 2);
}

#[test]
fn triple_word_in_cross_words_is_configurable() {
    let grid = board_with(&[("at", 1, 7, Vertical)]);
    let dictionary = dictionary();
    // c on the triple word at the top edge: "ac" is (1+3)*3, "cat" down is (3+1+1)*3
    let game_config = make_english_game_config();
    let board = snapshot(&grid, &dictionary, &game_config);
    assert_eq!(compute_score(&board, &word("ac"), loc(0, 6), Horizontal), 12 + 15);
    // the older scorer left such cross words untripled
    let game_config = make_legacy_english_game_config();
    let board = snapshot(&grid, &dictionary, &game_config);
    assert_eq!(compute_score(&board, &word("ac"), loc(0, 6), Horizontal), 12 + 5);
}

#[test]
fn premiums_are_used_only_once() {
    let (dictionary, game_config) = (dictionary(), make_english_game_config());
    let grid = board_with(&[("cat", 7, 6, Horizontal)]);
    let board = snapshot(&grid, &dictionary, &game_config);
    // the a on the center is already down; no doubling this time
    assert_eq!(compute_score(&board, &word(" s"), loc(7, 7), Vertical), 2);
    assert_eq!(compute_score(&board, &word("s   "), loc(7, 5), Horizontal), 6);
}
