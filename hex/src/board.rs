use std::fmt::{self, Display, Formatter};
use std::hash::{Hash, Hasher};

use anyhow::{anyhow, Result};
use common::{clear_first_set_bit, first_set_bit, single_bit_index};
use engine::Position;

use super::cell::Cell;
use super::color::Color;
use super::constants::{ASCII_LETTER_A, MAX_DIM};
use super::Zobrist;

/// A Hex position: stone placement only. Connectivity analysis and win
/// detection live in the solver, not here.
///
/// Cells are indexed row-major, so a 180 degree rotation of the board maps
/// index `i` to `area - 1 - i`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board {
    width: u8,
    height: u8,
    swap_rule: bool,
    black: u128,
    white: u128,
    zobrist: Zobrist,
}

impl Board {
    pub fn new(width: u8, height: u8) -> Result<Self> {
        if width == 0 || height == 0 || width as usize > MAX_DIM || height as usize > MAX_DIM {
            return Err(anyhow!(
                "Board dimensions must be between 1 and {}, got {}x{}",
                MAX_DIM,
                width,
                height
            ));
        }

        Ok(Self {
            width,
            height,
            swap_rule: false,
            black: 0,
            white: 0,
            zobrist: Zobrist::initial(),
        })
    }

    /// Enables or disables the swap rule for games on this board.
    pub fn set_swap_rule(&mut self, enabled: bool) {
        self.swap_rule = enabled;
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.col < self.width && cell.row < self.height
    }

    pub fn stone_at(&self, cell: Cell) -> Option<Color> {
        let bit = 1u128 << cell.index(self.width);
        if self.black & bit != 0 {
            Some(Color::Black)
        } else if self.white & bit != 0 {
            Some(Color::White)
        } else {
            None
        }
    }

    pub fn is_legal(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && self.stone_at(cell).is_none()
    }

    pub fn play_move(&mut self, color: Color, cell: Cell) {
        debug_assert!(self.is_legal(cell), "illegal move {} on\n{}", cell, self);

        let index = cell.index(self.width);
        match color {
            Color::Black => self.black |= 1 << index,
            Color::White => self.white |= 1 << index,
        }
        self.zobrist = self.zobrist.toggle_stone(color, index);
    }

    pub fn undo_move(&mut self, cell: Cell) {
        let color = self.stone_at(cell);
        debug_assert!(color.is_some(), "undo of empty cell {} on\n{}", cell, self);

        if let Some(color) = color {
            let index = cell.index(self.width);
            match color {
                Color::Black => self.black &= !(1u128 << index),
                Color::White => self.white &= !(1u128 << index),
            }
            self.zobrist = self.zobrist.toggle_stone(color, index);
        }
    }

    /// Black moves first; with equal stone counts it is black's turn.
    pub fn whose_turn(&self) -> Color {
        if self.black.count_ones() <= self.white.count_ones() {
            Color::Black
        } else {
            Color::White
        }
    }

    pub fn num_stones(&self) -> usize {
        (self.black.count_ones() + self.white.count_ones()) as usize
    }

    pub fn empty_cells(&self) -> EmptyCells {
        let full = (1u128 << self.area()) - 1;

        EmptyCells {
            bits: full & !(self.black | self.white),
            width: self.width,
        }
    }

    pub fn rotate_board(&self) -> Self {
        let mut rotated = Self {
            width: self.width,
            height: self.height,
            swap_rule: self.swap_rule,
            black: 0,
            white: 0,
            zobrist: Zobrist::initial(),
        };

        let last = self.area() - 1;
        for (color, bits) in [(Color::Black, self.black), (Color::White, self.white)] {
            let mut bits = bits;
            while bits != 0 {
                let index = last - single_bit_index(first_set_bit(bits));
                match color {
                    Color::Black => rotated.black |= 1u128 << index,
                    Color::White => rotated.white |= 1u128 << index,
                }
                rotated.zobrist = rotated.zobrist.toggle_stone(color, index);
                bits = clear_first_set_bit(bits);
            }
        }

        rotated
    }

    /// The swap option is open to the second player right after the opening
    /// stone, and only then, and only in games played with the swap rule.
    pub fn swap_legal(&self) -> bool {
        self.swap_rule && self.num_stones() == 1
    }

    pub fn board_state_hash(&self) -> u64 {
        self.zobrist.board_state_hash()
    }
}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.zobrist.board_state_hash().hash(state);
    }
}

impl Position for Board {
    type Move = Cell;

    fn legal_moves(&self) -> Vec<Cell> {
        self.empty_cells().collect()
    }

    fn play(&mut self, mv: Cell) {
        let color = self.whose_turn();
        self.play_move(color, mv);
    }

    fn undo(&mut self, mv: Cell) {
        self.undo_move(mv);
    }

    fn player_to_move(&self) -> usize {
        self.whose_turn().player()
    }

    fn stones_played(&self) -> usize {
        self.num_stones()
    }

    fn position_hash(&self) -> u64 {
        self.board_state_hash()
    }

    fn rotate180(&self) -> Self {
        self.rotate_board()
    }

    fn swap_allowed(&self) -> bool {
        self.swap_legal()
    }
}

/// Iterates the empty cells of a board in index order.
pub struct EmptyCells {
    bits: u128,
    width: u8,
}

impl Iterator for EmptyCells {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        if self.bits == 0 {
            return None;
        }

        let index = single_bit_index(first_set_bit(self.bits));
        self.bits = clear_first_set_bit(self.bits);

        Some(Cell::from_index(index, self.width))
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..self.width {
            write!(f, " {}", (ASCII_LETTER_A + col) as char)?;
        }
        writeln!(f)?;

        for row in 0..self.height {
            for _ in 0..row {
                write!(f, " ")?;
            }
            write!(f, "{:>2}", row + 1)?;
            for col in 0..self.width {
                let stone = match self.stone_at(Cell::new(col, row)) {
                    Some(Color::Black) => 'B',
                    Some(Color::White) => 'W',
                    None => '.',
                };
                write!(f, " {}", stone)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
