pub mod board;
pub mod cell;
pub mod color;

mod constants;
mod zobrist;
mod zobrist_values;

use zobrist::*;

pub use board::*;
pub use cell::*;
pub use color::*;
pub use constants::MAX_DIM;
