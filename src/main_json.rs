// Copyright (C) 2020-2026 Andy Kurnia.

use rackbot::gatekeeper::{Action, Gatekeeper};
use rackbot::location::{Direction, Location};
use rackbot::{dictionary, display, error, game_config, grid, legality, logger, move_picker, movegen};
use rackbot::{play_scorer, rack, return_error, word};
use rand::prelude::*;

// board: 15 strings of 15 symbols. lowercase for tiles, uppercase for blanks,
// "-" double letter, "=" triple letter, "+" double word, "#" triple word, " " plain.
// rack: tiles as a string, "_" for blank.
// config: optional partial game config.
// seed: optional, for reproducible exchange simulations.
// count: number of top placements to also report.
#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct Question {
    #[serde(default)]
    dictionary: Option<String>,
    board: Vec<String>,
    rack: String,
    #[serde(default)]
    config: Option<serde_json::Value>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    my_score: i32,
    #[serde(default)]
    opponent_score: i32,
    #[serde(default)]
    opponent_hand_size: usize,
    #[serde(default)]
    last_move_was_exchange: bool,
    #[serde(default)]
    count: usize,
}

struct QuestionGatekeeper<'a> {
    question: &'a Question,
    board_snapshot: movegen::BoardSnapshot<'a>,
    rack: &'a rack::Rack,
}

impl Gatekeeper for QuestionGatekeeper<'_> {
    fn get_hand(&self) -> Vec<char> {
        self.rack.tiles().to_vec()
    }

    fn get_square(&self, location: Location) -> Result<grid::Cell, grid::OutOfBounds> {
        self.board_snapshot.grid.get(location)
    }

    fn board_snapshot(&self) -> String {
        self.board_snapshot.grid.to_snapshot()
    }

    fn verify_legality(
        &self,
        word: &word::Word,
        location: Location,
        direction: Direction,
    ) -> Result<(), legality::Illegality> {
        legality::verify_legality(&self.board_snapshot, word, location, direction, self.rack.tiles())
    }

    fn score(&self, word: &word::Word, location: Location, direction: Direction) -> i32 {
        play_scorer::compute_score(&self.board_snapshot, word, location, direction)
    }

    fn get_last_move(&self) -> Option<Action> {
        if self.question.last_move_was_exchange {
            Some(Action::ExchangeTiles {
                mask: rack::ALL_TILES,
            })
        } else {
            None
        }
    }

    fn get_my_score(&self) -> i32 {
        self.question.my_score
    }

    fn get_opponent_score(&self) -> i32 {
        self.question.opponent_score
    }

    fn get_opponent_hand_size(&self) -> usize {
        self.question.opponent_hand_size
    }
}

fn main() -> error::Returns<()> {
    logger::init();
    let data = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => std::io::read_to_string(std::io::stdin())?,
    };
    let question = serde_json::from_str::<Question>(&data)?;

    let game_config = match &question.config {
        Some(config) => game_config::GameConfig::from_json_str(&config.to_string())?,
        None => game_config::make_english_game_config(),
    };
    let dict_path = question
        .dictionary
        .clone()
        .or_else(|| std::env::var("RACKBOT_DICT").ok())
        .unwrap_or_else(|| "words.txt".into());
    let dictionary = dictionary::Dictionary::from_path(&dict_path)?;

    for (row_num, row) in question.board.iter().enumerate() {
        if row.chars().count() != rackbot::location::COLS as usize {
            return_error!(
                "board row {} (0-based): need {} cols, found {} cols",
                row_num,
                rackbot::location::COLS,
                row.chars().count()
            );
        }
    }
    let grid = grid::Grid::from_snapshot(&question.board.concat())?;
    let rack = rack::Rack::from_str_tiles(&question.rack)?;
    if rack.len() > game_config.rack_size() as usize {
        return_error!("rack has {} tiles, more than {}", rack.len(), game_config.rack_size());
    }
    display::print_board(&grid);

    let gatekeeper = QuestionGatekeeper {
        question: &question,
        board_snapshot: movegen::BoardSnapshot {
            grid: &grid,
            dictionary: &dictionary,
            game_config: &game_config,
        },
        rack: &rack,
    };

    let mut top_moves = Vec::new();
    if question.count > 0 {
        let mut move_generator = movegen::MoveGenerator::new();
        move_generator.gen_moves(&gatekeeper.board_snapshot, rack.tiles());
        println!("found {} moves", move_generator.moves.len());
        display::print_moves(&move_generator.moves, question.count);
        for play in move_generator.moves.iter().take(question.count) {
            top_moves.push(serde_json::json!({
                "score": play.score,
                "word": play.word,
                "location": play.location,
                "direction": play.direction }));
        }
    }

    let rng: Box<dyn RngCore> = match question.seed {
        Some(seed) => Box::new(rand_chacha::ChaCha20Rng::seed_from_u64(seed)),
        None => Box::new(rand_chacha::ChaCha20Rng::from_os_rng()),
    };
    let mut move_picker = move_picker::MovePicker::new(&dictionary, &game_config, rng);
    let action = move_picker.choose_move(&gatekeeper);
    println!("{}", action);

    let ret = serde_json::json!({ "action": action, "moves": top_moves });
    println!("{}", serde_json::to_string_pretty(&ret)?);

    Ok(())
}
