// Copyright (C) 2020-2026 Andy Kurnia.

use super::location::{self, Direction, Location};
use super::word::{Symbol, Word};
use super::{grid, movegen, rack};

// why a candidate placement is not legal. recoverable; the candidate is just dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Illegality {
    WordTooShort,
    NoNewTiles,
    InsufficientRackTiles,
    InvalidBoardPlacement,
    DisconnectedPlacement,
    IllegalWordFormed,
}

impl std::fmt::Display for Illegality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Illegality::WordTooShort => "word must be at least two letters long",
            Illegality::NoNewTiles => "word must contain at least one new tile",
            Illegality::InsufficientRackTiles => "rack does not contain the tiles to play word",
            Illegality::InvalidBoardPlacement => {
                "board placement incorrect (gaps, overlapping tiles, edge of board)"
            }
            Illegality::DisconnectedPlacement => "word is not connected to any tile or the center",
            Illegality::IllegalWordFormed => "invalid word created",
        })
    }
}

impl std::error::Error for Illegality {}

// checks in a fixed order and reports the first rule broken.
pub fn verify_legality(
    board_snapshot: &movegen::BoardSnapshot<'_>,
    word: &Word,
    location: Location,
    direction: Direction,
    hand: &[char],
) -> Result<(), Illegality> {
    if word.len() < 2 {
        return Err(Illegality::WordTooShort);
    }
    if word.num_placed() == 0 {
        return Err(Illegality::NoNewTiles);
    }
    if !rack::can_be_drawn_from_hand(word, hand) {
        return Err(Illegality::InsufficientRackTiles);
    }
    let grid = board_snapshot.grid;
    if !can_be_placed_on_board(grid, word, location, direction) {
        return Err(Illegality::InvalidBoardPlacement);
    }
    if !would_be_connected(grid, word, location, direction) {
        return Err(Illegality::DisconnectedPlacement);
    }
    if !would_create_only_legal_words(board_snapshot, word, location, direction) {
        return Err(Illegality::IllegalWordFormed);
    }
    Ok(())
}

// no tile right before or after, stays on the board, new tiles only on empty squares,
// and every placeholder sits on an existing tile.
pub fn can_be_placed_on_board(
    grid: &grid::Grid,
    word: &Word,
    location: Location,
    direction: Direction,
) -> bool {
    if grid.is_occupied(location - direction) {
        return false;
    }
    let mut loc = location;
    for symbol in word.symbols() {
        if !loc.on_board() {
            return false;
        }
        if symbol.is_placed() == grid.is_occupied(loc) {
            return false;
        }
        loc = loc + direction;
    }
    !grid.is_occupied(loc)
}

// contains an existing tile, covers the center, or has a new tile beside an existing one.
pub fn would_be_connected(
    grid: &grid::Grid,
    word: &Word,
    location: Location,
    direction: Direction,
) -> bool {
    let cross = direction.orthogonal();
    let mut loc = location;
    for symbol in word.symbols() {
        if !symbol.is_placed() || loc == location::CENTER {
            return true;
        }
        if grid.is_occupied(loc + cross) || grid.is_occupied(loc - cross) {
            return true;
        }
        loc = loc + direction;
    }
    false
}

// the (start, length) of the cross word through an empty square at loc,
// or None if no tile touches it along cross.
pub fn perpendicular_word(
    grid: &grid::Grid,
    loc: Location,
    cross: Direction,
) -> Option<(Location, i8)> {
    if !grid.is_occupied(loc - cross) && !grid.is_occupied(loc + cross) {
        return None;
    }
    let start = grid.find_start_of_word(loc, cross);
    let mut len = 1 + (loc.lane_and_idx(cross).1 - start.lane_and_idx(cross).1);
    while grid.is_occupied(start.step(cross, len)) {
        len += 1;
    }
    Some((start, len))
}

#[inline(always)]
fn letter_for(grid: &grid::Grid, loc: Location, symbol: Symbol) -> Option<char> {
    grid.letter_at(loc)
        .or_else(|| symbol.placed_char())
        .map(|c| c.to_ascii_lowercase())
}

pub fn would_create_only_legal_words(
    board_snapshot: &movegen::BoardSnapshot<'_>,
    word: &Word,
    location: Location,
    direction: Direction,
) -> bool {
    let grid = board_snapshot.grid;
    let dictionary = board_snapshot.dictionary;
    let mut buf = String::with_capacity(location::ROWS.max(location::COLS) as usize);
    for (i, &symbol) in (0..).zip(word.symbols()) {
        match letter_for(grid, location.step(direction, i), symbol) {
            Some(c) => buf.push(c),
            None => return false,
        }
    }
    if buf.len() < 2 || !dictionary.is_word(&buf) {
        return false;
    }
    let cross = direction.orthogonal();
    for (i, &symbol) in (0..).zip(word.symbols()) {
        let Some(placed) = symbol.placed_char() else {
            continue;
        };
        let loc = location.step(direction, i);
        let Some((start, len)) = perpendicular_word(grid, loc, cross) else {
            continue;
        };
        buf.clear();
        for j in 0..len {
            let here = start.step(cross, j);
            if here == loc {
                buf.push(placed.to_ascii_lowercase());
            } else if let Some(c) = grid.letter_at(here) {
                buf.push(c.to_ascii_lowercase());
            }
        }
        if !dictionary.is_word(&buf) {
            return false;
        }
    }
    true
}
