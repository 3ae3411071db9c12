// Copyright (C) 2020-2026 Andy Kurnia.

use super::board_layout::Premium;
use super::location::{self, Location};
use super::{grid, movegen};

#[inline(always)]
pub fn empty_label(loc: Location, premium: Option<Premium>) -> char {
    if loc == location::CENTER {
        return '*';
    }
    match premium {
        Some(Premium::TripleWord) => '=',
        Some(Premium::DoubleWord) => '-',
        Some(Premium::TripleLetter) => '"',
        Some(Premium::DoubleLetter) => '\'',
        None => ' ',
    }
}

#[inline(always)]
pub fn board_label(grid: &grid::Grid, loc: Location) -> char {
    match grid.at(loc) {
        grid::Cell::Letter(c) => c,
        cell => empty_label(loc, cell.premium()),
    }
}

fn print_column_labels() {
    print!("  ");
    for c in 0..location::COLS {
        print!(" {}", ((c as u8) + b'a') as char);
    }
    println!();
}

fn print_border() {
    print!("  +");
    for _ in 1..location::COLS {
        print!("--");
    }
    println!("-+");
}

pub fn print_board(grid: &grid::Grid) {
    print_column_labels();
    print_border();
    for r in 0..location::ROWS {
        print!("{:2}|", r + 1);
        for c in 0..location::COLS {
            if c > 0 {
                print!(" ")
            }
            print!("{}", board_label(grid, Location::new(r, c)));
        }
        println!("|{}", r + 1);
    }
    print_border();
    print_column_labels();
}

pub fn print_moves(moves: &[movegen::Move], limit: usize) {
    for (i, play) in moves.iter().take(limit).enumerate() {
        println!(
            "{:3}: {:4} {:?} {} {}",
            i + 1,
            play.score,
            play.word.to_string(),
            play.location,
            match play.direction {
                location::Direction::Horizontal => "across",
                location::Direction::Vertical => "down",
            }
        );
    }
}
