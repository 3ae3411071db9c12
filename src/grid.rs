// Copyright (C) 2020-2026 Andy Kurnia.

use super::alphabet::ENGLISH_ALPHABET;
use super::board_layout::{self, Premium};
use super::location::{self, Direction, Location};
use super::{error, word};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Premium(Premium),
    // lowercase for a normal tile, uppercase for a blank.
    Letter(char),
}

impl Cell {
    #[inline(always)]
    pub fn letter(self) -> Option<char> {
        match self {
            Cell::Letter(c) => Some(c),
            _ => None,
        }
    }

    #[inline(always)]
    pub fn premium(self) -> Option<Premium> {
        match self {
            Cell::Premium(premium) => Some(premium),
            _ => None,
        }
    }

    #[inline(always)]
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => board_layout::NO_PREMIUM,
            Cell::Premium(premium) => premium.marker(),
            Cell::Letter(c) => c,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfBounds(pub Location);

impl std::fmt::Display for OutOfBounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}) is off the board", self.0.row, self.0.col)
    }
}

impl std::error::Error for OutOfBounds {}

#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Box<[Cell]>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    // fresh board with the standard premium layout.
    pub fn new() -> Self {
        Self {
            cells: board_layout::STANDARD_LAYOUT
                .iter()
                .map(|premium| premium.map_or(Cell::Empty, Cell::Premium))
                .collect(),
        }
    }

    // 225 symbols, row-major. line breaks are ignored.
    pub fn from_snapshot(snapshot: &str) -> error::Returns<Self> {
        let mut cells = Vec::with_capacity(location::NUM_SQUARES);
        for c in snapshot.chars().filter(|&c| c != '\n' && c != '\r') {
            let cell = if ENGLISH_ALPHABET.is_board_letter(c) {
                Cell::Letter(c)
            } else if let Some(premium) = Premium::from_marker(c) {
                Cell::Premium(premium)
            } else if c == board_layout::NO_PREMIUM {
                Cell::Empty
            } else {
                return_error!("board snapshot has invalid symbol {:?}", c);
            };
            cells.push(cell);
        }
        if cells.len() != location::NUM_SQUARES {
            return_error!(
                "board snapshot: need {} squares, found {}",
                location::NUM_SQUARES,
                cells.len()
            );
        }
        Ok(Self {
            cells: cells.into_boxed_slice(),
        })
    }

    pub fn to_snapshot(&self) -> String {
        self.cells.iter().map(|cell| cell.symbol()).collect()
    }

    pub fn get(&self, loc: Location) -> Result<Cell, OutOfBounds> {
        if loc.on_board() {
            Ok(self.cells[loc.index()])
        } else {
            Err(OutOfBounds(loc))
        }
    }

    // caller must ensure loc.on_board().
    #[inline(always)]
    pub fn at(&self, loc: Location) -> Cell {
        self.cells[loc.index()]
    }

    pub fn set(&mut self, loc: Location, letter: char) -> Result<(), OutOfBounds> {
        if !loc.on_board() {
            return Err(OutOfBounds(loc));
        }
        self.cells[loc.index()] = Cell::Letter(letter);
        Ok(())
    }

    // off-board squares are never occupied.
    #[inline(always)]
    pub fn is_occupied(&self, loc: Location) -> bool {
        loc.on_board() && matches!(self.cells[loc.index()], Cell::Letter(_))
    }

    #[inline(always)]
    pub fn letter_at(&self, loc: Location) -> Option<char> {
        if loc.on_board() {
            self.cells[loc.index()].letter()
        } else {
            None
        }
    }

    pub fn has_tiles(&self) -> bool {
        self.cells.iter().any(|cell| matches!(cell, Cell::Letter(_)))
    }

    // letters on the board, as they are written (uppercase for blanks).
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.cells.iter().filter_map(|cell| cell.letter())
    }

    // puts the new tiles of word on the board. legality is the caller's business.
    pub fn place(
        &mut self,
        word: &word::Word,
        location: Location,
        direction: Direction,
    ) -> Result<(), OutOfBounds> {
        for (i, symbol) in (0..).zip(word.symbols()) {
            if let Some(c) = symbol.placed_char() {
                self.set(location.step(direction, i), c)?;
            }
        }
        Ok(())
    }

    // first square of the run of tiles through loc (loc itself if nothing precedes it).
    pub fn find_start_of_word(&self, mut loc: Location, direction: Direction) -> Location {
        while self.is_occupied(loc - direction) {
            loc = loc - direction;
        }
        loc
    }
}
