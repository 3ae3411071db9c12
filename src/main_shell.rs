// Copyright (C) 2020-2026 Andy Kurnia.

use rackbot::{dictionary, display, error, game_config, game_state, grid, location, logger};
use rackbot::{move_picker, movegen, rack, return_error};
use rand::prelude::*;

struct Shell {
    game_config: game_config::GameConfig,
    dictionary: Option<dictionary::Dictionary>,
    grid: grid::Grid,
    rack: rack::Rack,
    seed: Option<u64>,
}

impl Shell {
    fn dictionary(&self) -> error::Returns<&dictionary::Dictionary> {
        match &self.dictionary {
            Some(dictionary) => Ok(dictionary),
            None => return_error!("no dictionary, use dict <path>"),
        }
    }

    // replaces one row with 15 board symbols. use quotes to keep spaces.
    fn set_row(&mut self, row: &str, symbols: &str) -> error::Returns<()> {
        let row = row.parse::<i8>()?;
        if !(1..=location::ROWS).contains(&row) {
            return_error!("row must be 1 to {}", location::ROWS);
        }
        let mut snapshot = self.grid.to_snapshot().chars().collect::<Vec<_>>();
        let symbols = symbols.chars().collect::<Vec<_>>();
        if symbols.len() != location::COLS as usize {
            return_error!("need {} symbols", location::COLS);
        }
        let start = (row - 1) as usize * location::COLS as usize;
        snapshot[start..start + symbols.len()].copy_from_slice(&symbols);
        self.grid = grid::Grid::from_snapshot(&snapshot.into_iter().collect::<String>())?;
        Ok(())
    }

    fn list_moves(&self, limit: usize) -> error::Returns<()> {
        let board_snapshot = movegen::BoardSnapshot {
            grid: &self.grid,
            dictionary: self.dictionary()?,
            game_config: &self.game_config,
        };
        let mut move_generator = movegen::MoveGenerator::new();
        move_generator.gen_moves(&board_snapshot, self.rack.tiles());
        println!("found {} moves", move_generator.moves.len());
        display::print_moves(&move_generator.moves, limit);
        Ok(())
    }

    fn choose(&self) -> error::Returns<()> {
        let dictionary = self.dictionary()?;
        let mut game_state = game_state::GameState::new(&self.game_config, dictionary);
        game_state.grid = self.grid.clone();
        game_state.players[0].rack = self.rack.clone();
        let rng: Box<dyn RngCore> = match self.seed {
            Some(seed) => Box::new(rand_chacha::ChaCha20Rng::seed_from_u64(seed)),
            None => Box::new(rand_chacha::ChaCha20Rng::from_os_rng()),
        };
        let mut move_picker = move_picker::MovePicker::new(dictionary, &self.game_config, rng);
        let action = move_picker.choose_move(&game_state.view(0));
        println!("{}", action);
        println!("{}", serde_json::to_string(&action)?);
        Ok(())
    }

    fn run(&mut self, strings: &[String]) -> error::Returns<()> {
        match strings[0].as_str() {
            "dict" if strings.len() > 1 => {
                let dictionary = dictionary::Dictionary::from_path(&strings[1])?;
                println!("{} words", dictionary.len());
                self.dictionary = Some(dictionary);
            }
            "config" if strings.len() > 1 => {
                self.game_config = game_config::GameConfig::from_json_str(&strings[1])?;
            }
            "seed" if strings.len() > 1 => {
                self.seed = Some(strings[1].parse()?);
            }
            "row" if strings.len() > 2 => {
                self.set_row(&strings[1], &strings[2])?;
            }
            "check" if strings.len() > 1 => {
                let dictionary = self.dictionary()?;
                for word in &strings[1..] {
                    let valid = dictionary.contains(word)?;
                    println!("{} is {}", word, if valid { "valid" } else { "invalid" });
                }
            }
            "clear" => {
                self.grid = grid::Grid::new();
            }
            "rack" => {
                self.rack = rack::Rack::from_str_tiles(strings.get(1).map_or("", |s| s.as_str()))?;
            }
            "show" => {
                display::print_board(&self.grid);
                println!("rack: {}", self.rack);
            }
            "gen" => {
                let limit = match strings.get(1) {
                    Some(s) => s.parse()?,
                    None => 10,
                };
                self.list_moves(limit)?;
            }
            "choose" => {
                self.choose()?;
            }
            _ => {
                println!("invalid input, help for help");
            }
        }
        Ok(())
    }
}

static HELP: &str = "\
dict <path>          load a word list, one word per line
config <json>        replace the game config, e.g. config '{\"exchange_ranking\":\"MostWordsFirst\"}'
seed <n>             seed the exchange simulations
row <n> <symbols>    set board row n (1-15) to 15 symbols, e.g. row 8 \"      cat      \"
check <words>        look words up in the dictionary
clear                empty the board
rack <tiles>         set the rack, _ for blank
show                 print the board and rack
gen [n]              list the top n placements
choose               pick an action
source <file>        run commands from a file
exit";

fn main() -> error::Returns<()> {
    logger::init();
    let mut shell = Shell {
        game_config: game_config::make_english_game_config(),
        dictionary: None,
        grid: grid::Grid::new(),
        rack: rack::Rack::default(),
        seed: None,
    };
    let mut rl = rustyline::DefaultEditor::new()
        .map_err(|err| error::new(format!("cannot start editor: {}", err)))?;
    let mut cmd_stack = Vec::<(String, Option<(String, usize)>)>::new();
    loop {
        if let Some((line, source)) = cmd_stack.pop() {
            if let Some((filename, line_num)) = source {
                println!("{}:{}> {}", filename, line_num, line);
            }
            match shell_words::split(&line) {
                Ok(strings) => {
                    if !strings.is_empty() {
                        match strings[0].as_str() {
                            "help" => {
                                println!("{}", HELP);
                            }
                            "exit" => {
                                break;
                            }
                            "source" => {
                                if strings.len() > 1 {
                                    match std::fs::read_to_string(&strings[1]) {
                                        Ok(whole_file) => {
                                            let v = cmd_stack.len();
                                            for (line_num, line) in whole_file.lines().enumerate() {
                                                cmd_stack.push((
                                                    line.to_string(),
                                                    Some((strings[1].clone(), line_num + 1)),
                                                ));
                                            }
                                            cmd_stack[v..].reverse();
                                        }
                                        Err(err) => {
                                            println!("cannot open file: {:?}", err);
                                        }
                                    }
                                } else {
                                    println!("need another arg");
                                }
                            }
                            _ => {
                                if let Err(err) = shell.run(&strings) {
                                    println!("error: {}", err);
                                }
                            }
                        }
                    }
                }
                Err(err) => {
                    println!("Bad quoting: {:?}", err);
                }
            }
        } else {
            match rl.readline(">> ") {
                Ok(line) => {
                    let _ = rl.add_history_entry(line.as_str());
                    cmd_stack.push((line, None));
                }
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(rustyline::error::ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }
    }

    Ok(())
}
