// Copyright (C) 2020-2026 Andy Kurnia.

mod common;

use common::{board_with, board_with_cat, dictionary, loc, rack, snapshot, word};
use rackbot::game_config::make_english_game_config;
use rackbot::grid::Grid;
use rackbot::legality::{Illegality, verify_legality};
use rackbot::location::Direction::{Horizontal, Vertical};
use rackbot::rack::can_be_drawn_from_hand;

#[test]
fn first_word_through_center_is_legal() {
    let (grid, dictionary, game_config) = (Grid::new(), dictionary(), make_english_game_config());
    let board = snapshot(&grid, &dictionary, &game_config);
    assert_eq!(
        verify_legality(&board, &word("cat"), loc(7, 6), Horizontal, &rack("tac")),
        Ok(())
    );
    assert_eq!(
        verify_legality(&board, &word("cat"), loc(6, 6), Horizontal, &rack("tac")),
        Err(Illegality::DisconnectedPlacement),
        "first word must cover the center"
    );
}

#[test]
fn rules_are_checked_in_order() {
    let (grid, dictionary, game_config) = (board_with_cat(), dictionary(), make_english_game_config());
    let board = snapshot(&grid, &dictionary, &game_config);
    let check = |w: &str, row, col, direction, hand: &str| {
        verify_legality(&board, &word(w), loc(row, col), direction, &rack(hand))
    };
    assert_eq!(check("s", 8, 6, Vertical, "s"), Err(Illegality::WordTooShort));
    assert_eq!(check("   ", 7, 6, Horizontal, "s"), Err(Illegality::NoNewTiles));
    assert_eq!(check("   s", 7, 6, Horizontal, "a"), Err(Illegality::InsufficientRackTiles));
    // a word too short and missing from the rack still reports the length first
    assert_eq!(check("z", 0, 0, Horizontal, ""), Err(Illegality::WordTooShort));
    assert_eq!(check("   s", 7, 6, Horizontal, "s"), Ok(()));
}

#[test]
fn placement_must_fit_the_board() {
    let (grid, dictionary, game_config) = (board_with_cat(), dictionary(), make_english_game_config());
    let board = snapshot(&grid, &dictionary, &game_config);
    let check = |w: &str, row, col, direction, hand: &str| {
        verify_legality(&board, &word(w), loc(row, col), direction, &rack(hand))
    };
    // the t of cat sits right before the word
    assert_eq!(check("as", 7, 9, Horizontal, "as"), Err(Illegality::InvalidBoardPlacement));
    // the c of cat sits right after the word
    assert_eq!(check("as", 7, 4, Horizontal, "as"), Err(Illegality::InvalidBoardPlacement));
    // a new tile on an occupied square
    assert_eq!(check("cats", 7, 6, Horizontal, "cats"), Err(Illegality::InvalidBoardPlacement));
    // a placeholder over an empty square
    assert_eq!(check(" s", 6, 6, Vertical, "s"), Err(Illegality::InvalidBoardPlacement));
    // off the edge
    assert_eq!(check("cats", 0, 12, Horizontal, "cats"), Err(Illegality::InvalidBoardPlacement));
    // coordinates at the limits of the type
    assert_eq!(check("as", 7, i8::MIN, Horizontal, "as"), Err(Illegality::InvalidBoardPlacement));
    assert_eq!(check("as", i8::MAX, 7, Vertical, "as"), Err(Illegality::InvalidBoardPlacement));
}

#[test]
fn placement_must_connect() {
    let (grid, dictionary, game_config) = (board_with_cat(), dictionary(), make_english_game_config());
    let board = snapshot(&grid, &dictionary, &game_config);
    assert_eq!(
        verify_legality(&board, &word("at"), loc(0, 0), Horizontal, &rack("at")),
        Err(Illegality::DisconnectedPlacement)
    );
    // touching the c from above is enough
    assert_ne!(
        verify_legality(&board, &word("at"), loc(6, 5), Horizontal, &rack("at")),
        Err(Illegality::DisconnectedPlacement)
    );
}

#[test]
fn every_word_formed_must_be_in_the_dictionary() {
    let (grid, dictionary, game_config) = (board_with_cat(), dictionary(), make_english_game_config());
    let board = snapshot(&grid, &dictionary, &game_config);
    // s under the c forms "cs"
    assert_eq!(
        verify_legality(&board, &word(" s"), loc(7, 6), Vertical, &rack("s")),
        Err(Illegality::IllegalWordFormed),
        "cs is not a word"
    );
    // s under the a forms "as"
    assert_eq!(
        verify_legality(&board, &word(" s"), loc(7, 7), Vertical, &rack("s")),
        Ok(())
    );
    // "at" under "at" of cat forms "aa" down column h
    assert_eq!(
        verify_legality(&board, &word("at"), loc(8, 7), Horizontal, &rack("at")),
        Err(Illegality::IllegalWordFormed),
        "aa is not a word"
    );
    // "at" under "t" of cat forms "ta" down column i, and nothing else
    assert_eq!(
        verify_legality(&board, &word("at"), loc(8, 8), Horizontal, &rack("at")),
        Ok(())
    );
}

#[test]
fn blanks_are_only_paid_for_by_blanks() {
    let (grid, dictionary, game_config) = (Grid::new(), dictionary(), make_english_game_config());
    let board = snapshot(&grid, &dictionary, &game_config);
    assert_eq!(
        verify_legality(&board, &word("cAt"), loc(7, 6), Horizontal, &rack("c_t")),
        Ok(())
    );
    assert_eq!(
        verify_legality(&board, &word("cAt"), loc(7, 6), Horizontal, &rack("cat")),
        Err(Illegality::InsufficientRackTiles)
    );
    assert!(can_be_drawn_from_hand(&word("cat"), &rack("tca")));
    assert!(can_be_drawn_from_hand(&word("CAT"), &rack("___")));
    assert!(!can_be_drawn_from_hand(&word("cat"), &rack("___")), "a blank cannot pay for a lowercase tile");
    assert!(!can_be_drawn_from_hand(&word("tat"), &rack("tac")), "each tile is used once");
    assert!(can_be_drawn_from_hand(&word(" a "), &rack("a")), "placeholders cost nothing");
}

#[test]
fn words_may_bridge_separate_tiles() {
    let (dictionary, game_config) = (dictionary(), make_english_game_config());
    let grid = board_with(&[("c", 7, 5, Horizontal), ("t", 7, 7, Horizontal)]);
    let board = snapshot(&grid, &dictionary, &game_config);
    assert_eq!(
        verify_legality(&board, &word(" a "), loc(7, 5), Horizontal, &rack("a")),
        Ok(())
    );
    assert_eq!(
        verify_legality(&board, &word(" a"), loc(7, 5), Horizontal, &rack("a")),
        Err(Illegality::InvalidBoardPlacement),
        "stopping short of the t leaves a fragment"
    );
}
