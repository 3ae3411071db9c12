// Copyright (C) 2020-2026 Andy Kurnia.

use super::dictionary::{self, LetterPool};
use super::location::{self, Direction, Location};
use super::word::{Symbol, Word};
use super::{game_config, grid, legality, play_scorer, rack};

pub struct BoardSnapshot<'a> {
    pub grid: &'a grid::Grid,
    pub dictionary: &'a dictionary::Dictionary,
    pub game_config: &'a game_config::GameConfig,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub score: i32,
    pub word: Word,
    pub location: Location,
    pub direction: Direction,
}

pub type MoveKey = (Word, Location, Direction);

impl Move {
    pub fn key(&self) -> MoveKey {
        (self.word.clone(), self.location, self.direction)
    }
}

// a maximal run of tiles along a lane.
struct Run {
    start: i8,
    // lowercased.
    letters: Vec<u8>,
}

impl Run {
    #[inline(always)]
    fn end(&self) -> i8 {
        self.start + self.letters.len() as i8
    }
}

struct WorkingBuffer {
    runs: Vec<Run>,
    // where the word sits on the lane, and which positions are existing tiles.
    candidates: Vec<(i8, u32)>,
    symbols: Vec<Symbol>,
}

impl WorkingBuffer {
    fn new() -> Self {
        Self {
            runs: Vec::with_capacity(location::COLS as usize / 2 + 1),
            candidates: Vec::new(),
            symbols: Vec::with_capacity(location::COLS as usize),
        }
    }
}

pub struct MoveGenerator {
    pub moves: Vec<Move>,
    attempted: std::collections::HashSet<MoveKey>,
    working_buffer: WorkingBuffer,
}

impl Default for MoveGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveGenerator {
    pub fn new() -> Self {
        Self {
            moves: Vec::new(),
            attempted: std::collections::HashSet::new(),
            working_buffer: WorkingBuffer::new(),
        }
    }

    // every legal placement for this rack, best score first.
    // equal scores keep the order they were found in.
    pub fn gen_moves(&mut self, board_snapshot: &BoardSnapshot<'_>, hand: &[char]) {
        self.moves.clear();
        self.attempted.clear();
        if board_snapshot.grid.has_tiles() {
            for direction in [Direction::Vertical, Direction::Horizontal] {
                for lane in 0..location::num_lanes(direction) {
                    self.gen_lane_moves(board_snapshot, hand, direction, lane);
                }
            }
        } else {
            self.gen_first_moves(board_snapshot, hand);
        }
        self.sort_moves();
        log::debug!(
            "found {} moves for rack {:?}",
            self.moves.len(),
            hand.iter().collect::<String>()
        );
    }

    fn sort_moves(&mut self) {
        self.moves.sort_by(|a, b| b.score.cmp(&a.score));
    }

    // empty board: words from the rack alone, across the center row, covering the center.
    pub fn gen_first_moves(&mut self, board_snapshot: &BoardSnapshot<'_>, hand: &[char]) {
        let direction = Direction::Horizontal;
        let (lane, center_idx) = location::CENTER.lane_and_idx(direction);
        let lane_len = location::lane_len(direction);
        let rack_pool = LetterPool::from_tiles(hand.iter().copied());
        for word in board_snapshot.dictionary.words_buildable_from(&rack_pool) {
            let word = word.as_bytes();
            let len = word.len() as i8;
            if len > lane_len {
                continue;
            }
            for start in (center_idx - len + 1).max(0)..=center_idx.min(lane_len - len) {
                self.try_candidate(board_snapshot, hand, direction, lane, start, word, 0);
            }
        }
    }

    fn gen_lane_moves(
        &mut self,
        board_snapshot: &BoardSnapshot<'_>,
        hand: &[char],
        direction: Direction,
        lane: i8,
    ) {
        let grid = board_snapshot.grid;
        let lane_len = location::lane_len(direction);

        let mut runs = std::mem::take(&mut self.working_buffer.runs);
        runs.clear();
        let mut idx = 0;
        while idx < lane_len {
            let loc = Location::from_lane_and_idx(direction, lane, idx);
            if let Some(c) = grid.letter_at(loc) {
                if idx > 0 && grid.is_occupied(Location::from_lane_and_idx(direction, lane, idx - 1)) {
                    if let Some(run) = runs.last_mut() {
                        run.letters.push(c.to_ascii_lowercase() as u8);
                    }
                } else {
                    runs.push(Run {
                        start: idx,
                        letters: vec![c.to_ascii_lowercase() as u8],
                    });
                }
            }
            idx += 1;
        }

        let rack_pool = LetterPool::from_tiles(hand.iter().copied());
        let mut pool = rack_pool.clone();
        for run in &runs {
            run.letters.iter().for_each(|&b| pool.add(b as char));
        }

        let mut candidates = std::mem::take(&mut self.working_buffer.candidates);
        for word in board_snapshot.dictionary.words_buildable_from(&pool) {
            let word = word.as_bytes();
            let len = word.len() as i8;
            if len > lane_len {
                continue;
            }
            candidates.clear();
            for i in 0..runs.len() {
                for j in i..runs.len() {
                    align_to_runs(word, &runs[i..=j], lane_len, &mut candidates);
                }
            }
            for &(start, existing) in &candidates {
                self.try_candidate(board_snapshot, hand, direction, lane, start, word, existing);
            }
            if rack_pool.can_build_word(word) {
                for start in 0..=lane_len - len {
                    self.try_candidate(board_snapshot, hand, direction, lane, start, word, 0);
                }
            }
        }
        self.working_buffer.candidates = candidates;
        self.working_buffer.runs = runs;
    }

    // existing has bit p set iff position p of word is a tile already on the board.
    #[allow(clippy::too_many_arguments)]
    fn try_candidate(
        &mut self,
        board_snapshot: &BoardSnapshot<'_>,
        hand: &[char],
        direction: Direction,
        lane: i8,
        start: i8,
        word: &[u8],
        existing: u32,
    ) {
        let symbols = &mut self.working_buffer.symbols;
        if !assign_tiles(word, existing, hand, symbols) {
            return;
        }
        let candidate = Word::new(symbols.clone());
        let location = Location::from_lane_and_idx(direction, lane, start);
        if !self.attempted.insert((candidate.clone(), location, direction)) {
            return;
        }
        if let Err(illegality) =
            legality::verify_legality(board_snapshot, &candidate, location, direction, hand)
        {
            log::trace!("skip {:?} at {} {:?}: {}", candidate.to_string(), location, direction, illegality);
            return;
        }
        let score = play_scorer::compute_score(board_snapshot, &candidate, location, direction);
        self.moves.push(Move {
            score,
            word: candidate,
            location,
            direction,
        });
    }
}

// every way word can lie over exactly these consecutive runs, as (start, existing bits).
fn align_to_runs(word: &[u8], runs: &[Run], lane_len: i8, out: &mut Vec<(i8, u32)>) {
    let (Some(first), Some(last)) = (runs.first(), runs.last()) else {
        return;
    };
    let len = word.len() as i8;
    let span = last.end() - first.start;
    if span > len {
        return;
    }
    for offset in 0..=len - span {
        let start = first.start - offset;
        if start < 0 || start + len > lane_len {
            continue;
        }
        let mut existing = 0u32;
        let fits = runs.iter().all(|run| {
            (run.start..run.end()).zip(run.letters.iter()).all(|(idx, &b)| {
                let p = (idx - start) as usize;
                existing |= 1 << p;
                word[p] == b
            })
        });
        if fits && existing.count_ones() < len as u32 {
            out.push((start, existing));
        }
    }
}

// fills symbols for the new tiles of word. letters the rack lacks become blanks,
// first occurrences first. false if the rack cannot pay for them.
fn assign_tiles(word: &[u8], existing: u32, hand: &[char], symbols: &mut Vec<Symbol>) -> bool {
    let mut available = [0u8; rack::TALLY_LEN];
    for &tile in hand {
        if let Some(idx) = rack::tally_index(tile) {
            available[idx] += 1;
        }
    }
    let mut shortfall = [0u8; rack::TALLY_LEN];
    for (p, &b) in word.iter().enumerate() {
        if existing & (1 << p) == 0 {
            let idx = (b - b'a') as usize + 1;
            if available[idx] > 0 {
                available[idx] -= 1;
            } else {
                shortfall[idx] += 1;
            }
        }
    }
    let num_blanks_needed = shortfall.iter().map(|&n| n as u32).sum::<u32>();
    if num_blanks_needed > available[0] as u32 {
        return false;
    }
    symbols.clear();
    for (p, &b) in word.iter().enumerate() {
        let c = b as char;
        symbols.push(if existing & (1 << p) != 0 {
            Symbol::Existing
        } else {
            let idx = (b - b'a') as usize + 1;
            if shortfall[idx] > 0 {
                shortfall[idx] -= 1;
                Symbol::Blank(c)
            } else {
                Symbol::Tile(c)
            }
        });
    }
    true
}
