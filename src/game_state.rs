// Copyright (C) 2020-2026 Andy Kurnia.

use super::gatekeeper::{Action, Gatekeeper};
use super::location::{Direction, Location};
use super::{bag, dictionary, error, game_config, grid, legality, movegen, play_scorer, rack, word};
use rand::prelude::*;

pub const NUM_PLAYERS: usize = 2;

#[derive(Clone, Debug, Default)]
pub struct GamePlayer {
    pub score: i32,
    pub rack: rack::Rack,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckGameEnded {
    NotEnded,
    PlayedOut,
    ZeroScores,
}

// holds the real game for self-play and tests.
#[derive(Clone)]
pub struct GameState<'a> {
    pub game_config: &'a game_config::GameConfig,
    pub dictionary: &'a dictionary::Dictionary,
    pub players: [GamePlayer; NUM_PLAYERS],
    pub grid: grid::Grid,
    pub bag: bag::Bag,
    pub turn: u8,
    pub last_action: Option<Action>,
    pub num_zeros: u8,
}

impl<'a> GameState<'a> {
    pub fn new(
        game_config: &'a game_config::GameConfig,
        dictionary: &'a dictionary::Dictionary,
    ) -> Self {
        Self {
            game_config,
            dictionary,
            players: Default::default(),
            grid: grid::Grid::new(),
            bag: bag::Bag::new(game_config.alphabet()),
            turn: 0,
            last_action: None,
            num_zeros: 0,
        }
    }

    pub fn reset_and_draw_tiles(&mut self, rng: &mut dyn RngCore) {
        self.grid = grid::Grid::new();
        self.bag = bag::Bag::new(self.game_config.alphabet());
        self.bag.shuffle(rng);
        let rack_size = self.game_config.rack_size() as usize;
        for player in self.players.iter_mut() {
            player.score = 0;
            player.rack = rack::Rack::default();
            player.rack.refill(&mut self.bag, rack_size);
        }
        self.turn = 0;
        self.last_action = None;
        self.num_zeros = 0;
    }

    #[inline(always)]
    pub fn board_snapshot(&self) -> movegen::BoardSnapshot<'_> {
        movegen::BoardSnapshot {
            grid: &self.grid,
            dictionary: self.dictionary,
            game_config: self.game_config,
        }
    }

    #[inline(always)]
    pub fn current_player(&self) -> &GamePlayer {
        &self.players[self.turn as usize]
    }

    // the game as seen by one player.
    #[inline(always)]
    pub fn view(&self, player: u8) -> GameView<'_, 'a> {
        GameView {
            game_state: self,
            player: player as usize,
        }
    }

    // applies the current player's action and returns its score.
    // the referee does not trust the player: illegal placements are errors.
    pub fn play(&mut self, rng: &mut dyn RngCore, action: &Action) -> error::Returns<i32> {
        let rack_size = self.game_config.rack_size() as usize;
        let turn = self.turn as usize;
        let score = match action {
            Action::PlaceWord {
                word,
                location,
                direction,
            } => {
                let board_snapshot = movegen::BoardSnapshot {
                    grid: &self.grid,
                    dictionary: self.dictionary,
                    game_config: self.game_config,
                };
                if let Err(illegality) = legality::verify_legality(
                    &board_snapshot,
                    word,
                    *location,
                    *direction,
                    self.players[turn].rack.tiles(),
                ) {
                    return_error!("cannot place {:?} at {}: {}", word.to_string(), location, illegality);
                }
                let score = play_scorer::compute_score(&board_snapshot, word, *location, *direction);
                self.grid.place(word, *location, *direction)?;
                let player = &mut self.players[turn];
                player.rack.remove_tiles(word)?;
                player.rack.refill(&mut self.bag, rack_size);
                player.score += score;
                score
            }
            Action::ExchangeTiles { mask } => {
                self.players[turn]
                    .rack
                    .exchange(&mut self.bag, mask, rack_size, rng);
                0
            }
        };
        if score == 0 {
            self.num_zeros += 1;
        } else {
            self.num_zeros = 0;
        }
        self.last_action = Some(action.clone());
        Ok(score)
    }

    pub fn next_turn(&mut self) {
        self.turn = ((self.turn as usize + 1) % NUM_PLAYERS) as u8;
    }

    pub fn check_game_ended(&self) -> CheckGameEnded {
        if self.bag.is_empty() && self.players.iter().any(|player| player.rack.is_empty()) {
            CheckGameEnded::PlayedOut
        } else if self.num_zeros >= self.game_config.num_zeros_to_end() {
            CheckGameEnded::ZeroScores
        } else {
            CheckGameEnded::NotEnded
        }
    }

    // unplayed tiles count against their holder; whoever played out also gains them.
    pub fn finalize_scores(&mut self, ended: CheckGameEnded) {
        let alphabet = self.game_config.alphabet();
        let rack_values = self
            .players
            .each_ref()
            .map(|player| alphabet.rack_value(player.rack.tiles()));
        let total = rack_values.iter().sum::<i32>();
        for (player, rack_value) in self.players.iter_mut().zip(rack_values) {
            player.score -= rack_value;
            if ended == CheckGameEnded::PlayedOut && player.rack.is_empty() {
                player.score += total;
            }
        }
    }
}

pub struct GameView<'g, 'a> {
    game_state: &'g GameState<'a>,
    player: usize,
}

impl GameView<'_, '_> {
    #[inline(always)]
    fn opponent(&self) -> &GamePlayer {
        &self.game_state.players[(self.player + 1) % NUM_PLAYERS]
    }
}

impl Gatekeeper for GameView<'_, '_> {
    fn get_hand(&self) -> Vec<char> {
        self.game_state.players[self.player].rack.tiles().to_vec()
    }

    fn get_square(&self, location: Location) -> Result<grid::Cell, grid::OutOfBounds> {
        self.game_state.grid.get(location)
    }

    fn board_snapshot(&self) -> String {
        self.game_state.grid.to_snapshot()
    }

    fn verify_legality(
        &self,
        word: &word::Word,
        location: Location,
        direction: Direction,
    ) -> Result<(), legality::Illegality> {
        legality::verify_legality(
            &self.game_state.board_snapshot(),
            word,
            location,
            direction,
            self.game_state.players[self.player].rack.tiles(),
        )
    }

    fn score(&self, word: &word::Word, location: Location, direction: Direction) -> i32 {
        play_scorer::compute_score(&self.game_state.board_snapshot(), word, location, direction)
    }

    fn get_last_move(&self) -> Option<Action> {
        self.game_state.last_action.clone()
    }

    fn get_my_score(&self) -> i32 {
        self.game_state.players[self.player].score
    }

    fn get_opponent_score(&self) -> i32 {
        self.opponent().score
    }

    fn get_opponent_hand_size(&self) -> usize {
        self.opponent().rack.len()
    }
}
