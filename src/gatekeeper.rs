// Copyright (C) 2020-2026 Andy Kurnia.

use super::grid;
use super::legality::Illegality;
use super::location::{Direction, Location};
use super::rack::ExchangeMask;
use super::word::Word;

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "action")]
pub enum Action {
    PlaceWord {
        word: Word,
        location: Location,
        direction: Direction,
    },
    // exchanging no tiles is a pass.
    ExchangeTiles { mask: ExchangeMask },
}

impl Action {
    #[inline(always)]
    pub fn is_exchange(&self) -> bool {
        matches!(self, Action::ExchangeTiles { .. })
    }

    #[inline(always)]
    pub fn is_pass(&self) -> bool {
        matches!(self, Action::ExchangeTiles { mask } if !mask.iter().any(|&m| m))
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::PlaceWord {
                word,
                location,
                direction,
            } => write!(
                f,
                "place {:?} at {} {}",
                word.to_string(),
                location,
                match direction {
                    Direction::Horizontal => "across",
                    Direction::Vertical => "down",
                }
            ),
            Action::ExchangeTiles { mask } => {
                write!(f, "exchange ")?;
                for &m in mask {
                    f.write_str(if m { "1" } else { "0" })?;
                }
                Ok(())
            }
        }
    }
}

// what the bot may ask of whoever holds the real game.
pub trait Gatekeeper {
    fn get_hand(&self) -> Vec<char>;

    fn get_square(&self, location: Location) -> Result<grid::Cell, grid::OutOfBounds>;

    // 225 symbols, row by row.
    fn board_snapshot(&self) -> String;

    fn verify_legality(
        &self,
        word: &Word,
        location: Location,
        direction: Direction,
    ) -> Result<(), Illegality>;

    fn score(&self, word: &Word, location: Location, direction: Direction) -> i32;

    // None before anyone has moved.
    fn get_last_move(&self) -> Option<Action>;

    fn get_my_score(&self) -> i32;

    fn get_opponent_score(&self) -> i32;

    fn get_opponent_hand_size(&self) -> usize;
}
