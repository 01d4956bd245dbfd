#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod ai;
mod board;
#[cfg(feature = "std")]
pub mod cli;
mod common;
mod config;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
mod ship;
mod strategy;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use ship::*;
pub use strategy::*;
