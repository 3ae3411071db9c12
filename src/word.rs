// Copyright (C) 2020-2026 Andy Kurnia.

use super::alphabet::ENGLISH_ALPHABET;
use super::error;

pub const PLACEHOLDER: char = ' ';

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    // a rack tile, lowercase.
    Tile(char),
    // a blank designated as this letter, stored lowercase.
    Blank(char),
    // the square already holds a tile; nothing is placed.
    Existing,
}

impl Symbol {
    #[inline(always)]
    pub fn is_placed(self) -> bool {
        !matches!(self, Symbol::Existing)
    }

    // what goes on the board: lowercase tile, uppercase blank.
    #[inline(always)]
    pub fn placed_char(self) -> Option<char> {
        match self {
            Symbol::Tile(c) => Some(c),
            Symbol::Blank(c) => Some(c.to_ascii_uppercase()),
            Symbol::Existing => None,
        }
    }

    #[inline(always)]
    pub fn to_char(self) -> char {
        self.placed_char().unwrap_or(PLACEHOLDER)
    }

    pub fn from_char(c: char) -> Option<Symbol> {
        if c == PLACEHOLDER {
            Some(Symbol::Existing)
        } else if c.is_ascii_lowercase() && ENGLISH_ALPHABET.is_board_letter(c) {
            Some(Symbol::Tile(c))
        } else if c.is_ascii_uppercase() && ENGLISH_ALPHABET.is_board_letter(c) {
            Some(Symbol::Blank(c.to_ascii_lowercase()))
        } else {
            None
        }
    }
}

// a word candidate, one symbol per square starting at its location.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Word(Vec<Symbol>);

impl Word {
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Self(symbols)
    }

    // every letter as a normal tile.
    pub fn from_letters(letters: &str) -> Self {
        Self(letters.chars().map(Symbol::Tile).collect())
    }

    #[inline(always)]
    pub fn symbols(&self) -> &[Symbol] {
        &self.0
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn num_placed(&self) -> usize {
        self.0.iter().filter(|symbol| symbol.is_placed()).count()
    }

    pub fn num_blanks(&self) -> usize {
        self.0
            .iter()
            .filter(|symbol| matches!(symbol, Symbol::Blank(_)))
            .count()
    }

    // rack tiles this word consumes, blanks as alphabet::BLANK.
    pub fn tiles_used(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().filter_map(|&symbol| match symbol {
            Symbol::Tile(c) => Some(c),
            Symbol::Blank(_) => Some(super::alphabet::BLANK),
            Symbol::Existing => None,
        })
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for symbol in &self.0 {
            write!(f, "{}", symbol.to_char())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Word {
    type Err = error::BoxAnyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut symbols = Vec::with_capacity(s.len());
        for c in s.chars() {
            match Symbol::from_char(c) {
                Some(symbol) => symbols.push(symbol),
                None => return_error!("word {:?} has invalid symbol {:?}", s, c),
            }
        }
        Ok(Self(symbols))
    }
}

impl serde::Serialize for Word {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Word {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_placeholders_and_blanks() {
        let word: Word = "c T".parse().unwrap();
        assert_eq!(
            word.symbols(),
            &[Symbol::Tile('c'), Symbol::Existing, Symbol::Blank('t')]
        );
        assert_eq!(word.num_placed(), 2);
        assert_eq!(word.num_blanks(), 1);
        assert_eq!(word.to_string(), "c T");
        assert!("c?t".parse::<Word>().is_err());
    }
}
