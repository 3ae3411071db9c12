// Copyright (C) 2020-2026 Andy Kurnia.

#[macro_use]
pub mod error;

pub mod alphabet;
pub mod bag;
pub mod board_layout;
pub mod dictionary;
pub mod display;
pub mod game_config;
pub mod game_state;
pub mod gatekeeper;
pub mod grid;
pub mod legality;
pub mod location;
pub mod logger;
pub mod move_picker;
pub mod movegen;
pub mod play_scorer;
pub mod rack;
pub mod simmer;
pub mod stats;
pub mod word;
