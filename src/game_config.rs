// Copyright (C) 2020-2026 Andy Kurnia.

use super::alphabet;
use super::error;

// how the exchange simulations order the candidate masks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ExchangeRanking {
    // ascending by average playable word count, head taken as best.
    FewestWordsFirst,
    MostWordsFirst,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    rack_size: u8,
    num_played_bonus: i32,
    exchange_threshold: i32,
    num_exchange_trials: u32,
    num_exchange_candidates: usize,
    exchange_ranking: ExchangeRanking,
    // false reproduces cross-word scoring that never tripled the word.
    triple_word_in_cross_words: bool,
    num_zeros_to_end: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        make_english_game_config()
    }
}

impl GameConfig {
    // fields not mentioned keep their defaults.
    pub fn from_json_str(s: &str) -> error::Returns<Self> {
        let game_config = serde_json::from_str::<Self>(s)?;
        if game_config.rack_size as usize > super::rack::MAX_RACK_SIZE || game_config.rack_size == 0 {
            return_error!(
                "rack_size must be 1 to {}, found {}",
                super::rack::MAX_RACK_SIZE,
                game_config.rack_size
            );
        }
        Ok(game_config)
    }

    #[inline(always)]
    pub fn alphabet(&self) -> &'static alphabet::Alphabet {
        &alphabet::ENGLISH_ALPHABET
    }

    #[inline(always)]
    pub fn rack_size(&self) -> u8 {
        self.rack_size
    }

    // bonus for using a full rack in one play.
    #[inline(always)]
    pub fn num_played_bonus(&self, num_played: usize) -> i32 {
        if num_played == self.rack_size as usize {
            self.num_played_bonus
        } else {
            0
        }
    }

    // best plays scoring below this make the bot consider exchanging.
    #[inline(always)]
    pub fn exchange_threshold(&self) -> i32 {
        self.exchange_threshold
    }

    #[inline(always)]
    pub fn num_exchange_trials(&self) -> u32 {
        self.num_exchange_trials
    }

    #[inline(always)]
    pub fn num_exchange_candidates(&self) -> usize {
        self.num_exchange_candidates
    }

    #[inline(always)]
    pub fn exchange_ranking(&self) -> ExchangeRanking {
        self.exchange_ranking
    }

    #[inline(always)]
    pub fn triple_word_in_cross_words(&self) -> bool {
        self.triple_word_in_cross_words
    }

    #[inline(always)]
    pub fn num_zeros_to_end(&self) -> u8 {
        self.num_zeros_to_end
    }

    pub fn with_exchange_ranking(mut self, exchange_ranking: ExchangeRanking) -> Self {
        self.exchange_ranking = exchange_ranking;
        self
    }

    pub fn with_triple_word_in_cross_words(mut self, enabled: bool) -> Self {
        self.triple_word_in_cross_words = enabled;
        self
    }

    pub fn with_num_exchange_trials(mut self, num_exchange_trials: u32) -> Self {
        self.num_exchange_trials = num_exchange_trials;
        self
    }
}

pub fn make_english_game_config() -> GameConfig {
    GameConfig {
        rack_size: 7,
        num_played_bonus: 50,
        exchange_threshold: 11,
        num_exchange_trials: 10,
        num_exchange_candidates: 5,
        exchange_ranking: ExchangeRanking::FewestWordsFirst,
        triple_word_in_cross_words: true,
        num_zeros_to_end: 6,
    }
}

// scores cross words the way the older scorer did, for matching such a referee.
pub fn make_legacy_english_game_config() -> GameConfig {
    make_english_game_config().with_triple_word_in_cross_words(false)
}
