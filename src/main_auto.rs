// Copyright (C) 2020-2026 Andy Kurnia.

use rackbot::{dictionary, display, error, game_config, game_state, logger, move_picker, stats};
use rand::prelude::*;

// omits 01IOl
static BASE57: &[u8; 57] = b"\
23456789\
ABCDEFGHJKLMNPQRSTUVWXYZ\
abcdefghijkmnopqrstuvwxyz\
";

const GAME_ID_LEN: usize = 8;

enum CSVRow<T1, T2> {
    Log(T1),
    Game(T2),
}

fn main() -> error::Returns<()> {
    logger::init();
    let args = std::env::args().collect::<Vec<_>>();
    let num_games = match args.get(1) {
        Some(s) => s.parse::<usize>()?,
        None => 100,
    };
    let seed = match args.get(2) {
        Some(s) => Some(s.parse::<u64>()?),
        None => None,
    };
    let dict_path = std::env::var("RACKBOT_DICT").unwrap_or_else(|_| "words.txt".into());
    let dictionary = std::sync::Arc::new(dictionary::Dictionary::from_path(&dict_path)?);
    let game_config = std::sync::Arc::new(game_config::make_english_game_config());

    let num_threads = num_cpus::get().min(num_games.max(1));
    let num_processed_games = std::sync::Arc::new(std::sync::atomic::AtomicUsize::new(0));
    let mut threads = vec![];
    let (tx, rx) = std::sync::mpsc::channel();
    for thread_idx in 0..num_threads {
        let tx = tx.clone();
        let game_config = std::sync::Arc::clone(&game_config);
        let dictionary = std::sync::Arc::clone(&dictionary);
        let num_processed_games = std::sync::Arc::clone(&num_processed_games);
        threads.push(std::thread::spawn(move || -> error::Returns<()> {
            let mut rng = match seed {
                Some(seed) => rand_chacha::ChaCha20Rng::seed_from_u64(seed.wrapping_add(thread_idx as u64)),
                None => rand_chacha::ChaCha20Rng::from_os_rng(),
            };
            let mut move_picker = move_picker::MovePicker::new(
                &dictionary,
                &game_config,
                Box::new(rand_chacha::ChaCha20Rng::seed_from_u64(rng.next_u64())),
            );
            let mut game_state = game_state::GameState::new(&game_config, &dictionary);
            let mut game_id = String::with_capacity(GAME_ID_LEN);
            loop {
                if num_processed_games.fetch_add(1, std::sync::atomic::Ordering::SeqCst) >= num_games {
                    num_processed_games.fetch_sub(1, std::sync::atomic::Ordering::Relaxed);
                    break;
                }
                game_id.clear();
                for _ in 0..GAME_ID_LEN {
                    game_id.push(BASE57[rng.random_range(0..BASE57.len())] as char);
                }
                let went_first = rng.random_range(0..game_state::NUM_PLAYERS as u8);
                game_state.reset_and_draw_tiles(&mut rng);
                game_state.turn = went_first;
                let mut num_moves = 0u32;
                let ended = loop {
                    num_moves += 1;
                    let turn = game_state.turn;
                    let rack_before = game_state.current_player().rack.to_string();
                    let action = move_picker.choose_move(&game_state.view(turn));
                    let score = game_state.play(&mut rng, &action)?;
                    let player = &game_state.players[turn as usize];
                    let opponent = &game_state.players[(turn as usize + 1) % game_state::NUM_PLAYERS];
                    tx.send(CSVRow::Log((
                        game_id.clone(),
                        format!("p{}", turn + 1),
                        num_moves,
                        rack_before,
                        action.to_string(),
                        score,
                        player.score,
                        game_state.bag.len(),
                        opponent.score,
                    )))?;
                    match game_state.check_game_ended() {
                        game_state::CheckGameEnded::NotEnded => {}
                        ended => break ended,
                    }
                    game_state.next_turn();
                };
                game_state.finalize_scores(ended);
                tx.send(CSVRow::Game((
                    game_id.clone(),
                    game_state.players[0].score,
                    game_state.players[1].score,
                    format!("p{}", went_first + 1),
                    num_moves,
                    format!("{:?}", ended),
                )))?;
                if num_threads == 1 && num_games == 1 {
                    display::print_board(&game_state.grid);
                }
            }
            Ok(())
        }));
    }
    drop(tx);

    let epoch_secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let run_identifier = format!("log-{:08x}", epoch_secs);
    println!("logging to {}", run_identifier);
    let mut csv_log = csv::Writer::from_path(&run_identifier)?;
    let mut csv_game = csv::Writer::from_path(format!("games-{}", run_identifier))?;
    csv_log.serialize((
        "gameID",
        "playerID",
        "turn",
        "rack",
        "action",
        "score",
        "totalscore",
        "tilesremaining",
        "oppscore",
    ))?;
    csv_game.serialize(("gameID", "p1_score", "p2_score", "first", "moves", "ending"))?;
    let mut completed_games = 0u64;
    let mut completed_moves = 0u64;
    let mut score_stats = [stats::Stats::new(), stats::Stats::new()];
    let t0 = std::time::Instant::now();
    let mut last_reported_secs = 0;
    for row in rx.iter() {
        match row {
            CSVRow::Log(r) => {
                csv_log.serialize(&r)?;
                completed_moves += 1;
            }
            CSVRow::Game(r) => {
                score_stats[0].update(r.1 as f64);
                score_stats[1].update(r.2 as f64);
                csv_game.serialize(&r)?;
                completed_games += 1;
                let elapsed_secs = t0.elapsed().as_secs();
                if elapsed_secs != last_reported_secs {
                    last_reported_secs = elapsed_secs;
                    println!(
                        "After {} seconds, have logged {} games ({} moves) into {}",
                        elapsed_secs, completed_games, completed_moves, run_identifier
                    );
                }
            }
        }
    }
    csv_log.flush()?;
    csv_game.flush()?;
    println!(
        "After {} seconds, have logged {} games ({} moves) into {}",
        t0.elapsed().as_secs(),
        completed_games,
        completed_moves,
        run_identifier
    );
    let [mut all_scores, p2_scores] = score_stats;
    all_scores.update_bulk(&p2_scores);
    println!(
        "average final score {:.2} (sd {:.2}, best {}) over {} scores",
        all_scores.mean(),
        all_scores.standard_deviation(),
        all_scores.max().unwrap_or_default(),
        all_scores.count(),
    );

    for thread in threads {
        match thread.join() {
            Ok(Err(e)) => println!("{}", e),
            Err(e) => println!("{:?}", e),
            Ok(Ok(())) => {}
        }
    }

    Ok(())
}
