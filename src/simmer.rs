// Copyright (C) 2020-2026 Andy Kurnia.

use super::dictionary::LetterPool;
use super::game_config::ExchangeRanking;
use super::{bag, movegen, rack, stats};
use rand::prelude::*;

pub struct Candidate {
    pub mask: rack::ExchangeMask,
    pub stats: stats::Stats,
}

// a placement only found after exchanging the masked tiles.
#[derive(Clone, Debug)]
pub struct ExchangeMove {
    pub mask: rack::ExchangeMask,
    pub play: movegen::Move,
}

pub struct Simmer {
    // rank_exchanges() sets these, best first
    pub candidates: Vec<Candidate>,

    // reused internally
    move_generator: movegen::MoveGenerator,
    unseen: bag::Bag,
    bag: bag::Bag,
}

impl Default for Simmer {
    fn default() -> Self {
        Self::new()
    }
}

impl Simmer {
    pub fn new() -> Self {
        Self {
            candidates: Vec::new(),
            move_generator: movegen::MoveGenerator::new(),
            unseen: bag::Bag::default(),
            bag: bag::Bag::default(),
        }
    }

    // a fresh shuffled copy of every tile not on the board.
    #[inline(always)]
    fn prepare_bag(&mut self, rng: &mut dyn RngCore) {
        self.bag.0.clone_from(&self.unseen.0);
        self.bag.shuffle(rng);
    }

    // average number of dictionary words buildable after each possible exchange,
    // over num_exchange_trials simulated bags. keeps num_exchange_candidates of them.
    pub fn rank_exchanges(
        &mut self,
        board_snapshot: &movegen::BoardSnapshot<'_>,
        rack: &rack::Rack,
        rng: &mut dyn RngCore,
    ) -> &[Candidate] {
        let game_config = board_snapshot.game_config;
        self.unseen = bag::Bag::unseen(game_config.alphabet(), board_snapshot.grid);
        let mut candidates = std::mem::take(&mut self.candidates);
        candidates.clear();
        for mask in rack::all_exchange_masks() {
            let mut stats = stats::Stats::new();
            for _ in 0..game_config.num_exchange_trials() {
                self.prepare_bag(rng);
                let mut simulated = rack.clone();
                simulated.exchange(&mut self.bag, &mask, game_config.rack_size() as usize, rng);
                let pool = LetterPool::from_tiles(simulated.tiles().iter().copied());
                stats.update(board_snapshot.dictionary.count_buildable_from(&pool) as f64);
            }
            candidates.push(Candidate { mask, stats });
        }
        match game_config.exchange_ranking() {
            ExchangeRanking::FewestWordsFirst => {
                candidates.sort_by(|a, b| a.stats.mean().total_cmp(&b.stats.mean()))
            }
            ExchangeRanking::MostWordsFirst => {
                candidates.sort_by(|a, b| b.stats.mean().total_cmp(&a.stats.mean()))
            }
        }
        candidates.truncate(game_config.num_exchange_candidates());
        if log::log_enabled!(log::Level::Debug) {
            for candidate in &candidates {
                log::debug!(
                    "exchange {} averages {:.1} words (sd {:.1}, best {})",
                    mask_to_string(rack.tiles(), &candidate.mask),
                    candidate.stats.mean(),
                    candidate.stats.standard_deviation(),
                    candidate.stats.max().unwrap_or_default(),
                );
            }
        }
        self.candidates = candidates;
        &self.candidates
    }

    // re-searches after each ranked exchange and returns the best placement
    // not among the known ones. call rank_exchanges() first.
    pub fn find_exchange_move(
        &mut self,
        board_snapshot: &movegen::BoardSnapshot<'_>,
        rack: &rack::Rack,
        known: &std::collections::HashSet<movegen::MoveKey>,
        rng: &mut dyn RngCore,
    ) -> Option<ExchangeMove> {
        let rack_size = board_snapshot.game_config.rack_size() as usize;
        let mut best: Option<ExchangeMove> = None;
        for idx in 0..self.candidates.len() {
            let mask = self.candidates[idx].mask;
            self.prepare_bag(rng);
            let mut simulated = rack.clone();
            simulated.exchange(&mut self.bag, &mask, rack_size, rng);
            self.move_generator.gen_moves(board_snapshot, simulated.tiles());
            // moves are sorted, so the first unknown one is this mask's best.
            let Some(play) = self
                .move_generator
                .moves
                .iter()
                .find(|play| !known.contains(&play.key()))
            else {
                continue;
            };
            if best.as_ref().is_none_or(|best| play.score > best.play.score) {
                best = Some(ExchangeMove {
                    mask,
                    play: play.clone(),
                });
            }
        }
        best
    }
}

// the tiles a mask selects, for logs.
pub fn mask_to_string(tiles: &[char], mask: &rack::ExchangeMask) -> String {
    tiles
        .iter()
        .zip(mask.iter())
        .filter(|&(_, &m)| m)
        .map(|(&tile, _)| tile)
        .collect()
}
