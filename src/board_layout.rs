// Copyright (C) 2020-2026 Andy Kurnia.

use super::location;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Premium {
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
}

pub const DOUBLE_LETTER_SCORE: char = '-';
pub const TRIPLE_LETTER_SCORE: char = '=';
pub const DOUBLE_WORD_SCORE: char = '+';
pub const TRIPLE_WORD_SCORE: char = '#';
pub const NO_PREMIUM: char = ' ';

impl Premium {
    #[inline(always)]
    pub fn letter_multiplier(self) -> i32 {
        match self {
            Premium::DoubleLetter => 2,
            Premium::TripleLetter => 3,
            Premium::DoubleWord | Premium::TripleWord => 1,
        }
    }

    #[inline(always)]
    pub fn word_multiplier(self) -> i32 {
        match self {
            Premium::DoubleWord => 2,
            Premium::TripleWord => 3,
            Premium::DoubleLetter | Premium::TripleLetter => 1,
        }
    }

    #[inline(always)]
    pub fn marker(self) -> char {
        match self {
            Premium::DoubleLetter => DOUBLE_LETTER_SCORE,
            Premium::TripleLetter => TRIPLE_LETTER_SCORE,
            Premium::DoubleWord => DOUBLE_WORD_SCORE,
            Premium::TripleWord => TRIPLE_WORD_SCORE,
        }
    }

    #[inline(always)]
    pub fn from_marker(c: char) -> Option<Premium> {
        match c {
            DOUBLE_LETTER_SCORE => Some(Premium::DoubleLetter),
            TRIPLE_LETTER_SCORE => Some(Premium::TripleLetter),
            DOUBLE_WORD_SCORE => Some(Premium::DoubleWord),
            TRIPLE_WORD_SCORE => Some(Premium::TripleWord),
            _ => None,
        }
    }
}

const TWS: Option<Premium> = Some(Premium::TripleWord);
const DWS: Option<Premium> = Some(Premium::DoubleWord);
const TLS: Option<Premium> = Some(Premium::TripleLetter);
const DLS: Option<Premium> = Some(Premium::DoubleLetter);
const FVS: Option<Premium> = None;

#[rustfmt::skip]
pub static STANDARD_LAYOUT: [Option<Premium>; location::NUM_SQUARES] = [
TWS, FVS, FVS, DLS, FVS, FVS, FVS, TWS, FVS, FVS, FVS, DLS, FVS, FVS, TWS, //
FVS, DWS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, DWS, FVS, //
FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, //
DLS, FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, DLS, //
FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS, //
FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, //
FVS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, FVS, //
TWS, FVS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, FVS, TWS, //
FVS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, FVS, //
FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, //
FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS, //
DLS, FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, DLS, //
FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, //
FVS, DWS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, DWS, FVS, //
TWS, FVS, FVS, DLS, FVS, FVS, FVS, TWS, FVS, FVS, FVS, DLS, FVS, FVS, TWS, //
];
