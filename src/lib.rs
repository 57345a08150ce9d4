#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod ai;
mod board;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
pub mod placement;
mod player;
mod player_ai;
#[cfg(feature = "std")]
mod player_cli;
pub mod prelude;
mod ship;
mod view;

pub use ai::*;
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use placement::{check_capacity, place_randomly, random_candidate, random_fleet, set_fleet};
pub use player::*;
pub use player_ai::*;
#[cfg(feature = "std")]
pub use player_cli::*;
pub use ship::*;
pub use view::*;
