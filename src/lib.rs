#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod cellset;
mod common;
mod config;
mod coord;
mod engine;
mod game;
mod generator;
mod grid;
mod hunt;
mod ledger;
#[cfg(feature = "std")]
mod logging;
mod placement;
mod probability;
mod reveal;

pub use board::*;
pub use cellset::*;
pub use common::*;
pub use config::*;
pub use coord::*;
pub use engine::*;
pub use game::*;
pub use generator::*;
pub use grid::*;
pub use hunt::*;
pub use ledger::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use placement::*;
pub use probability::*;
pub use reveal::*;
