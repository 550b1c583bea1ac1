#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod board;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
mod piece;
pub mod prelude;
mod team;
mod tile;
#[cfg(feature = "std")]
mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use piece::*;
pub use team::*;
pub use tile::*;
#[cfg(feature = "std")]
pub use ui::*;
