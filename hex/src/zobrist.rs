use super::color::Color;
use super::zobrist_values::*;

#[derive(Eq, PartialEq, Clone, Copy, Debug)]
pub struct Zobrist {
    hash: u64,
}

impl Zobrist {
    pub fn initial() -> Self {
        Zobrist { hash: INITIAL }
    }

    pub fn toggle_stone(&self, color: Color, cell_index: usize) -> Self {
        let color_idx = match color {
            Color::Black => 0,
            Color::White => 1,
        };
        let hash = self.hash ^ SQUARE_VALUES[color_idx][cell_index];

        Zobrist { hash }
    }

    pub fn board_state_hash(&self) -> u64 {
        self.hash
    }
}
