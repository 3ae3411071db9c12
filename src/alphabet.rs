// Copyright (C) 2020-2026 Andy Kurnia.

// rack and bag use lowercase letters and BLANK.
// on the board and in words, an uppercase letter is a blank played as that letter.
pub const BLANK: char = '_';

pub struct Tile {
    label: char,
    freq: u8,
    score: i8,
}

pub struct Alphabet {
    tiles: &'static [Tile],
    blank_freq: u8,
}

impl Alphabet {
    #[inline(always)]
    pub fn len(&self) -> u8 {
        self.tiles.len() as u8
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[inline(always)]
    fn tile(&self, c: char) -> Option<&Tile> {
        if c.is_ascii_lowercase() {
            self.tiles.get((c as u8 - b'a') as usize)
        } else {
            None
        }
    }

    // face value of a symbol. blanks, and letters played with blanks, are worth 0.
    #[inline(always)]
    pub fn score(&self, c: char) -> i8 {
        self.tile(c).map_or(0, |tile| tile.score)
    }

    #[inline(always)]
    pub fn freq(&self, c: char) -> u8 {
        if c == BLANK {
            self.blank_freq
        } else {
            self.tile(c).map_or(0, |tile| tile.freq)
        }
    }

    // valid in a rack or bag.
    #[inline(always)]
    pub fn is_rack_tile(&self, c: char) -> bool {
        c == BLANK || self.tile(c).is_some()
    }

    // valid on the board, either as a tile or as a blank-designated letter.
    #[inline(always)]
    pub fn is_board_letter(&self, c: char) -> bool {
        self.tile(c.to_ascii_lowercase()).is_some()
    }

    pub fn num_tiles(&self) -> u16 {
        self.blank_freq as u16 + self.tiles.iter().map(|tile| tile.freq as u16).sum::<u16>()
    }

    // the full distribution, letters in alphabet order then blanks.
    pub fn all_tiles(&self) -> Vec<char> {
        let mut ret = Vec::with_capacity(self.num_tiles() as usize);
        for tile in self.tiles {
            for _ in 0..tile.freq {
                ret.push(tile.label);
            }
        }
        for _ in 0..self.blank_freq {
            ret.push(BLANK);
        }
        ret
    }

    pub fn rack_value(&self, tiles: &[char]) -> i32 {
        tiles.iter().map(|&c| self.score(c) as i32).sum()
    }
}

macro_rules! tile {
    ($label:expr, $freq:expr, $score:expr) => {
        Tile {
            label: $label,
            freq: $freq,
            score: $score,
        }
    };
}

pub static ENGLISH_ALPHABET: Alphabet = Alphabet {
    tiles: &[
        tile!('a', 9, 1),
        tile!('b', 2, 3),
        tile!('c', 2, 3),
        tile!('d', 4, 2),
        tile!('e', 12, 1),
        tile!('f', 2, 4),
        tile!('g', 3, 2),
        tile!('h', 2, 4),
        tile!('i', 9, 1),
        tile!('j', 1, 8),
        tile!('k', 1, 5),
        tile!('l', 4, 1),
        tile!('m', 2, 3),
        tile!('n', 6, 1),
        tile!('o', 8, 1),
        tile!('p', 2, 3),
        tile!('q', 1, 10),
        tile!('r', 6, 1),
        tile!('s', 4, 1),
        tile!('t', 6, 1),
        tile!('u', 4, 1),
        tile!('v', 2, 4),
        tile!('w', 2, 4),
        tile!('x', 1, 8),
        tile!('y', 2, 4),
        tile!('z', 1, 10),
    ],
    blank_freq: 2,
};
