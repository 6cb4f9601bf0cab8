#![no_std]

extern crate alloc;

pub use board::*;
pub use error::*;
pub use generator::*;
pub use round::*;
pub use tile::*;
pub use types::*;
pub use ui::*;

mod board;
mod error;
mod generator;
mod round;
mod tile;
mod types;
mod ui;
