// Copyright (C) 2020-2026 Andy Kurnia.

use super::alphabet::{self, BLANK};
use super::grid;
use rand::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct Bag(pub Vec<char>);

impl Bag {
    pub fn new(alphabet: &alphabet::Alphabet) -> Bag {
        Bag(alphabet.all_tiles())
    }

    // the full distribution minus every tile already on the board.
    // tiles in racks are still considered to be in the bag.
    pub fn unseen(alphabet: &alphabet::Alphabet, grid: &grid::Grid) -> Bag {
        let mut bag = Self::new(alphabet);
        for letter in grid.letters() {
            let tile = if letter.is_ascii_uppercase() {
                BLANK
            } else {
                letter
            };
            match bag.0.iter().rposition(|&t| t == tile) {
                Some(pos) => {
                    bag.0.swap_remove(pos);
                }
                None => {
                    log::warn!("board has more {:?} than the distribution allows", tile);
                }
            }
        }
        bag
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn shuffle(&mut self, rng: &mut dyn RngCore) {
        self.0.shuffle(rng);
    }

    pub fn pop(&mut self) -> Option<char> {
        self.0.pop()
    }

    // deals from the end of the bag until the rack is full or the bag is empty.
    pub fn replenish(&mut self, rack: &mut Vec<char>, rack_size: usize) {
        while rack.len() < rack_size {
            match self.pop() {
                Some(tile) => rack.push(tile),
                None => break,
            }
        }
    }

    // put back the tiles in random order. keep the rest of the bag in the same order.
    pub fn put_back(&mut self, rng: &mut dyn RngCore, tiles: &[char]) {
        let mut num_new_tiles = tiles.len();
        match num_new_tiles {
            0 => {
                return;
            }
            1 => {
                let pos = rng.random_range(0..self.0.len() + 1);
                self.0.insert(pos, tiles[0]);
                return;
            }
            _ => {}
        }
        let mut num_old_tiles = self.0.len();
        let new_len = num_new_tiles + num_old_tiles;
        let mut new_tiles = tiles.to_vec();
        new_tiles.shuffle(rng);
        let old_tiles = std::mem::replace(&mut self.0, Vec::with_capacity(new_len));
        let mut p_old_tiles = 0;
        let mut p_new_tiles = 0;
        for _ in 0..new_len {
            let take_old = if num_new_tiles == 0 {
                true
            } else if num_old_tiles == 0 {
                false
            } else {
                rng.random_range(0..num_old_tiles + num_new_tiles) < num_old_tiles
            };
            if take_old {
                self.0.push(old_tiles[p_old_tiles]);
                p_old_tiles += 1;
                num_old_tiles -= 1;
            } else {
                self.0.push(new_tiles[p_new_tiles]);
                p_new_tiles += 1;
                num_new_tiles -= 1;
            }
        }
    }
}
