// Copyright (C) 2020-2026 Andy Kurnia.

use super::board_layout::Premium;
use super::grid::Cell;
use super::location::{Direction, Location};
use super::word::Word;
use super::{legality, movegen};

// word multiplier of a premium square in a cross word.
#[inline(always)]
fn cross_word_multiplier(premium: Premium, triple_word_in_cross_words: bool) -> i32 {
    match premium {
        Premium::TripleWord if !triple_word_in_cross_words => 1,
        _ => premium.word_multiplier(),
    }
}

// Assume play is valid. Squares that already hold a tile count at face value
// whatever the word says about them, and never trigger a premium again.
pub fn compute_score(
    board_snapshot: &movegen::BoardSnapshot<'_>,
    word: &Word,
    location: Location,
    direction: Direction,
) -> i32 {
    let game_config = board_snapshot.game_config;
    let alphabet = game_config.alphabet();
    let grid = board_snapshot.grid;
    let cross = direction.orthogonal();
    let mut num_played = 0;
    let mut perpendicular_score = 0;
    let mut word_multiplier = 1;
    let mut main_score = 0;

    for (i, symbol) in (0..).zip(word.symbols()) {
        let loc = location.step(direction, i);
        let Ok(cell) = grid.get(loc) else {
            break;
        };
        let placed_tile = match (cell, symbol.placed_char()) {
            (Cell::Letter(c), _) => {
                main_score += alphabet.score(c) as i32;
                continue;
            }
            (_, None) => continue,
            (_, Some(placed_tile)) => placed_tile,
        };
        num_played += 1;
        let tile_value = alphabet.score(placed_tile) as i32;
        let premium = cell.premium();
        let tile_multiplier = premium.map_or(1, |p| p.letter_multiplier());
        word_multiplier *= premium.map_or(1, |p| p.word_multiplier());
        main_score += tile_value * tile_multiplier;

        if let Some((start, len)) = legality::perpendicular_word(grid, loc, cross) {
            let mut cross_score = 0;
            for j in 0..len {
                let here = start.step(cross, j);
                if here == loc {
                    cross_score += tile_value * tile_multiplier;
                } else if let Some(c) = grid.letter_at(here) {
                    cross_score += alphabet.score(c) as i32;
                }
            }
            let cross_multiplier = premium.map_or(1, |p| {
                cross_word_multiplier(p, game_config.triple_word_in_cross_words())
            });
            perpendicular_score += cross_score * cross_multiplier;
        }
    }

    main_score * word_multiplier + perpendicular_score + game_config.num_played_bonus(num_played)
}
