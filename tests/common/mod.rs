// Copyright (C) 2020-2026 Andy Kurnia.
#![allow(dead_code)]

use rackbot::dictionary::Dictionary;
use rackbot::game_config::GameConfig;
use rackbot::grid::Grid;
use rackbot::location::{Direction, Location};
use rackbot::movegen::BoardSnapshot;
use rackbot::word::Word;
use rand::SeedableRng;

// deliberately lacks "aa", "cs" and anything with q or z.
pub const WORDS: &[&str] = &["act", "as", "at", "cat", "cats", "scat", "ta", "tas"];

pub fn dictionary() -> Dictionary {
    Dictionary::from_words(WORDS)
}

pub fn word(s: &str) -> Word {
    s.parse().expect("valid word")
}

pub fn loc(row: i8, col: i8) -> Location {
    Location::new(row, col)
}

// standard board with these words already on it, written as given.
pub fn board_with(words: &[(&str, i8, i8, Direction)]) -> Grid {
    let mut grid = Grid::new();
    for &(s, row, col, direction) in words {
        grid.place(&word(s), loc(row, col), direction)
            .expect("word fits on board");
    }
    grid
}

// "cat" across row 8, columns g to i.
pub fn board_with_cat() -> Grid {
    board_with(&[("cat", 7, 6, Direction::Horizontal)])
}

pub fn snapshot<'a>(
    grid: &'a Grid,
    dictionary: &'a Dictionary,
    game_config: &'a GameConfig,
) -> BoardSnapshot<'a> {
    BoardSnapshot {
        grid,
        dictionary,
        game_config,
    }
}

pub fn rack(s: &str) -> Vec<char> {
    s.chars().collect()
}

pub fn seeded_rng(seed: u64) -> rand_chacha::ChaCha20Rng {
    rand_chacha::ChaCha20Rng::seed_from_u64(seed)
}
