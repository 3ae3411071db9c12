// Copyright (C) 2020-2026 Andy Kurnia.

use super::gatekeeper::{Action, Gatekeeper};
use super::{dictionary, error, game_config, grid, movegen, rack, simmer};
use rand::prelude::*;

pub struct MovePicker<'a> {
    dictionary: &'a dictionary::Dictionary,
    game_config: &'a game_config::GameConfig,
    rng: Box<dyn RngCore>,
    move_generator: movegen::MoveGenerator,
    simmer: simmer::Simmer,
}

impl<'a> MovePicker<'a> {
    pub fn new(
        dictionary: &'a dictionary::Dictionary,
        game_config: &'a game_config::GameConfig,
        rng: Box<dyn RngCore>,
    ) -> Self {
        Self {
            dictionary,
            game_config,
            rng,
            move_generator: movegen::MoveGenerator::new(),
            simmer: simmer::Simmer::new(),
        }
    }

    // never fails. an unreadable game is logged and answered by exchanging everything.
    pub fn choose_move(&mut self, gatekeeper: &dyn Gatekeeper) -> Action {
        let action = match self.try_choose_move(gatekeeper) {
            Ok(action) => action,
            Err(err) => {
                log::error!("cannot choose a move: {}", err);
                Action::ExchangeTiles {
                    mask: rack::ALL_TILES,
                }
            }
        };
        if let Action::PlaceWord {
            word,
            location,
            direction,
        } = &action
        {
            log::info!(
                "chose {} for {} points",
                action,
                gatekeeper.score(word, *location, *direction)
            );
        } else {
            log::info!("chose {}", action);
        }
        action
    }

    fn try_choose_move(&mut self, gatekeeper: &dyn Gatekeeper) -> error::Returns<Action> {
        let rack = rack::Rack::new(gatekeeper.get_hand())?;
        let grid = grid::Grid::from_snapshot(&gatekeeper.board_snapshot())?;
        if self.should_pass(gatekeeper, &rack) {
            return Ok(Action::ExchangeTiles {
                mask: rack::NO_TILES,
            });
        }
        let board_snapshot = movegen::BoardSnapshot {
            grid: &grid,
            dictionary: self.dictionary,
            game_config: self.game_config,
        };
        self.move_generator.gen_moves(&board_snapshot, rack.tiles());
        let moves = std::mem::take(&mut self.move_generator.moves);

        let weak = moves
            .first()
            .is_none_or(|best| best.score < self.game_config.exchange_threshold());
        if weak {
            self.simmer
                .rank_exchanges(&board_snapshot, &rack, &mut *self.rng);
            if moves.is_empty() {
                let mask = self
                    .simmer
                    .candidates
                    .first()
                    .map_or(rack::ALL_TILES, |candidate| candidate.mask);
                return Ok(Action::ExchangeTiles { mask });
            }
            let known = moves
                .iter()
                .map(|play| play.key())
                .collect::<std::collections::HashSet<_>>();
            let exchange_move = self
                .simmer
                .find_exchange_move(&board_snapshot, &rack, &known, &mut *self.rng);
            // must beat the best play the current rack already has.
            if let Some(exchange_move) =
                exchange_move.filter(|exchange_move| exchange_move.play.score > moves[0].score)
            {
                let play = &exchange_move.play;
                if rack.can_draw(&play.word)
                    && gatekeeper
                        .verify_legality(&play.word, play.location, play.direction)
                        .is_ok()
                {
                    return Ok(place_word(play));
                }
                log::debug!(
                    "{} needs exchanging {} first",
                    place_word(play),
                    simmer::mask_to_string(rack.tiles(), &exchange_move.mask)
                );
                return Ok(Action::ExchangeTiles {
                    mask: exchange_move.mask,
                });
            }
        }

        for play in &moves {
            match gatekeeper.verify_legality(&play.word, play.location, play.direction) {
                Ok(()) => return Ok(place_word(play)),
                Err(illegality) => {
                    log::warn!("gatekeeper rejected {}: {}", place_word(play), illegality);
                }
            }
        }
        Ok(Action::ExchangeTiles {
            mask: rack::ALL_TILES,
        })
    }

    // after the opponent exchanges or passes, pass too if that keeps us ahead
    // once both unplayed racks are counted.
    fn should_pass(&self, gatekeeper: &dyn Gatekeeper, rack: &rack::Rack) -> bool {
        if !gatekeeper
            .get_last_move()
            .is_some_and(|action| action.is_exchange())
        {
            return false;
        }
        let rack_value = self.game_config.alphabet().rack_value(rack.tiles());
        let difference = (gatekeeper.get_my_score() - rack_value)
            - (gatekeeper.get_opponent_score() - gatekeeper.get_opponent_hand_size() as i32);
        log::debug!("pass check: difference {}", difference);
        difference > 0
    }
}

fn place_word(play: &movegen::Move) -> Action {
    Action::PlaceWord {
        word: play.word.clone(),
        location: play.location,
        direction: play.direction,
    }
}
