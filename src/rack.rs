// Copyright (C) 2020-2026 Andy Kurnia.

use super::alphabet::{BLANK, ENGLISH_ALPHABET};
use super::{bag, error, word};

pub const MAX_RACK_SIZE: usize = 7;

// slot i set means the tile in rack slot i goes back to the bag.
pub type ExchangeMask = [bool; MAX_RACK_SIZE];

pub const ALL_TILES: ExchangeMask = [true; MAX_RACK_SIZE];
pub const NO_TILES: ExchangeMask = [false; MAX_RACK_SIZE];

// true iff every new symbol in word can be paid for by a distinct tile in hand.
// a lowercase letter needs that exact tile; a blank-designated letter needs a blank.
pub fn can_be_drawn_from_hand(word: &word::Word, hand: &[char]) -> bool {
    let mut rack_tally = [0u8; TALLY_LEN];
    for &tile in hand {
        match tally_index(tile) {
            Some(idx) => rack_tally[idx] += 1,
            None => return false,
        }
    }
    for needed in word.tiles_used() {
        match tally_index(needed) {
            Some(idx) if rack_tally[idx] > 0 => rack_tally[idx] -= 1,
            _ => return false,
        }
    }
    true
}

// 0 for the blank, 1 to 26 for a to z.
pub const TALLY_LEN: usize = 27;

#[inline(always)]
pub fn tally_index(tile: char) -> Option<usize> {
    if tile == BLANK {
        Some(0)
    } else if tile.is_ascii_lowercase() {
        Some((tile as u8 - b'a') as usize + 1)
    } else {
        None
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Rack(Vec<char>);

impl Rack {
    pub fn new(tiles: Vec<char>) -> error::Returns<Self> {
        if tiles.len() > MAX_RACK_SIZE {
            return_error!(
                "rack holds at most {} tiles, found {}",
                MAX_RACK_SIZE,
                tiles.len()
            );
        }
        for &tile in &tiles {
            if !ENGLISH_ALPHABET.is_rack_tile(tile) {
                return_error!("rack has invalid tile {:?}", tile);
            }
        }
        Ok(Self(tiles))
    }

    pub fn from_str_tiles(s: &str) -> error::Returns<Self> {
        Self::new(s.chars().collect())
    }

    #[inline(always)]
    pub fn tiles(&self) -> &[char] {
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

    pub fn num_blanks(&self) -> usize {
        self.0.iter().filter(|&&tile| tile == BLANK).count()
    }

    pub fn can_draw(&self, word: &word::Word) -> bool {
        can_be_drawn_from_hand(word, &self.0)
    }

    // takes out the tiles word would use. caller checked can_draw().
    pub fn remove_tiles(&mut self, word: &word::Word) -> error::Returns<()> {
        for tile in word.tiles_used() {
            match self.0.iter().position(|&t| t == tile) {
                Some(pos) => {
                    self.0.remove(pos);
                }
                None => return_error!("rack has no {:?} for {:?}", tile, word.to_string()),
            }
        }
        Ok(())
    }

    #[inline(always)]
    pub fn refill(&mut self, bag: &mut bag::Bag, rack_size: usize) {
        bag.replenish(&mut self.0, rack_size);
    }

    // returns the masked tiles to the bag and refills. slots past the rack length are ignored.
    // if the bag runs short, some of the returned tiles may come straight back.
    pub fn exchange(
        &mut self,
        bag: &mut bag::Bag,
        mask: &ExchangeMask,
        rack_size: usize,
        rng: &mut dyn rand::RngCore,
    ) -> Vec<char> {
        let mut dumped = Vec::with_capacity(MAX_RACK_SIZE);
        let mut kept = Vec::with_capacity(MAX_RACK_SIZE);
        for (i, &tile) in self.0.iter().enumerate() {
            if i < MAX_RACK_SIZE && mask[i] {
                dumped.push(tile);
            } else {
                kept.push(tile);
            }
        }
        self.0 = kept;
        bag.replenish(&mut self.0, rack_size);
        bag.put_back(rng, &dumped);
        bag.replenish(&mut self.0, rack_size);
        dumped
    }
}

impl std::fmt::Display for Rack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for &tile in &self.0 {
            write!(f, "{}", tile)?;
        }
        Ok(())
    }
}

// mask for every one of the 2^7 exchange choices, all-true first down to all-false.
pub fn all_exchange_masks() -> impl Iterator<Item = ExchangeMask> {
    (0..1u32 << MAX_RACK_SIZE).map(|k| {
        let mut mask = NO_TILES;
        for (i, m) in mask.iter_mut().enumerate() {
            *m = (k >> (MAX_RACK_SIZE - 1 - i)) & 1 == 0;
        }
        mask
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_start_all_true_and_end_all_false() {
        let masks = all_exchange_masks().collect::<Vec<_>>();
        assert_eq!(masks.len(), 128);
        assert_eq!(masks[0], ALL_TILES);
        assert_eq!(masks[1], [true, true, true, true, true, true, false]);
        assert_eq!(masks[127], NO_TILES);
    }
}
