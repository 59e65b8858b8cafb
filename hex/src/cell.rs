use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use anyhow::anyhow;
use serde::de::{Deserialize, Deserializer, Error as DeserializeError, Visitor};
use serde::ser::{Serialize, Serializer};

use super::constants::{ASCII_LETTER_A, MAX_DIM};

/// A board cell in the usual "a1" notation: column letter, then 1-based row.
/// Stored zero-based.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub col: u8,
    pub row: u8,
}

impl Cell {
    pub fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }

    pub fn from_index(index: usize, width: u8) -> Self {
        Self {
            col: (index % width as usize) as u8,
            row: (index / width as usize) as u8,
        }
    }

    pub fn index(&self, width: u8) -> usize {
        self.row as usize * width as usize + self.col as usize
    }
}

impl FromStr for Cell {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let col_char = chars
            .next()
            .ok_or_else(|| anyhow!("Empty cell string"))?
            .to_ascii_lowercase();

        if !col_char.is_ascii_lowercase() {
            return Err(anyhow!("Invalid column letter in cell: {}", s));
        }

        let col = col_char as u8 - ASCII_LETTER_A;
        let row: usize = chars.as_str().parse()?;

        if col as usize >= MAX_DIM || row < 1 || row > MAX_DIM {
            return Err(anyhow!("Cell out of range: {}", s));
        }

        Ok(Cell::new(col, row as u8 - 1))
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (ASCII_LETTER_A + self.col) as char,
            self.row + 1
        )
    }
}

impl Serialize for Cell {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

struct CellVisitor {}

impl<'de> Visitor<'de> for CellVisitor {
    type Value = Cell;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a cell in column-letter row-number form, e.g. \"a1\"")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: DeserializeError,
    {
        v.parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(CellVisitor {})
    }
}
