use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};
use std::path::Path;

use engine::{PlayedMove, Position};
use log::info;

use crate::error::BookError;
use crate::node::BookNode;
use crate::store::{DiskStore, KvStore};

/// Fixed key of the settings record.
pub const SETTINGS_KEY: &[u8] = b"settings";

const SETTINGS_VERSION: u16 = 1;
const SETTINGS_RECORD_LEN: usize = 4;

/// Board dimensions a book is bound to at creation. A book never migrates
/// between board sizes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Settings {
    pub width: u8,
    pub height: u8,
}

impl Settings {
    pub fn encode(&self) -> [u8; SETTINGS_RECORD_LEN] {
        let version = SETTINGS_VERSION.to_le_bytes();
        [version[0], version[1], self.width, self.height]
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, BookError> {
        if bytes.len() != SETTINGS_RECORD_LEN {
            return Err(BookError::Corrupt(format!(
                "settings record has {} bytes, expected {}",
                bytes.len(),
                SETTINGS_RECORD_LEN
            )));
        }

        let version = u16::from_le_bytes([bytes[0], bytes[1]]);
        if version != SETTINGS_VERSION {
            return Err(BookError::Corrupt(format!(
                "unsupported settings version: {}",
                version
            )));
        }

        Ok(Self {
            width: bytes[2],
            height: bytes[3],
        })
    }
}

impl Display for Settings {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Key a position is stored under: the lesser of the position's hash and the
/// hash of its 180 degree rotation, so both views of the same physical
/// position share one record.
pub fn canonical_key<P: Position>(position: &P) -> u64 {
    position
        .position_hash()
        .min(position.rotate180().position_hash())
}

/// Persistent opening book: evaluated nodes keyed by canonical position.
pub struct Book<S> {
    store: S,
    settings: Settings,
}

impl Book<DiskStore> {
    pub fn open_path(
        path: impl AsRef<Path>,
        width: u8,
        height: u8,
    ) -> Result<Self, BookError> {
        let store = DiskStore::open(path).map_err(BookError::Open)?;
        Self::open(store, width, height)
    }
}

impl<S: KvStore> Book<S> {
    /// Opens a book over the given store. An existing book must have been
    /// created for the same board dimensions; a fresh store is initialized
    /// with them.
    pub fn open(mut store: S, width: u8, height: u8) -> Result<Self, BookError> {
        let requested = Settings { width, height };

        match store.get(SETTINGS_KEY)? {
            Some(bytes) => {
                let book = Settings::decode(&bytes)?;
                info!("Opened existing book for a {} board", book);
                if book.width != requested.width || book.height != requested.height {
                    return Err(BookError::SettingsMismatch { book, requested });
                }
            }
            None => {
                info!("New book, storing settings for a {} board", requested);
                store.put(SETTINGS_KEY, &requested.encode())?;
            }
        }

        Ok(Self {
            store,
            settings: requested,
        })
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    /// Looks up the node stored for the position, if any. Absence means the
    /// position is not in the book.
    pub fn get_node<P: Position>(&self, position: &P) -> Result<Option<BookNode>, BookError> {
        match self.store.get(&canonical_key(position).to_le_bytes())? {
            Some(bytes) => Ok(Some(BookNode::decode(&bytes)?)),
            None => Ok(None),
        }
    }

    pub fn write_node<P: Position>(
        &mut self,
        position: &P,
        node: &BookNode,
    ) -> Result<(), BookError> {
        self.store
            .put(&canonical_key(position).to_le_bytes(), &node.encode())?;
        Ok(())
    }

    /// Makes pending writes durable. Nothing is persisted implicitly.
    pub fn flush(&mut self) -> Result<(), BookError> {
        self.store.flush()?;
        Ok(())
    }

    /// Length of the line of mutually best moves from the position, followed
    /// while book coverage lasts. Each step plays the move whose child value,
    /// inverted to the parent's perspective, is strictly greatest; the first
    /// maximal move in enumeration order wins ties.
    pub fn main_line_depth<P: Position>(&self, position: &P) -> Result<usize, BookError> {
        let mut position = position.clone();
        let mut depth = 0;

        while self.get_node(&position)?.is_some() {
            let mut best: Option<(P::Move, f32)> = None;
            for mv in position.legal_moves() {
                let mut played = PlayedMove::new(&mut position, mv);
                if let Some(child) = self.get_node(played.position())? {
                    let value = child.effective_value(played.get()).invert().as_f32();
                    if best.map_or(true, |(_, best_value)| value > best_value) {
                        best = Some((mv, value));
                    }
                }
            }

            match best {
                Some((mv, _)) => {
                    position.play(mv);
                    depth += 1;
                }
                None => break,
            }
        }

        Ok(depth)
    }

    /// Number of stored nodes reachable from the position by legal move
    /// sequences. The same canonical position is reachable along many move
    /// orders and through symmetry, so the walk memoizes per canonical key.
    pub fn tree_size<P: Position>(&self, position: &P) -> Result<usize, BookError> {
        let mut position = position.clone();
        let mut memo = HashMap::new();
        self.tree_size_memo(&mut position, &mut memo)
    }

    fn tree_size_memo<P: Position>(
        &self,
        position: &mut P,
        memo: &mut HashMap<u64, usize>,
    ) -> Result<usize, BookError> {
        let key = canonical_key(position);
        if let Some(&size) = memo.get(&key) {
            return Ok(size);
        }

        if self.get_node(position)?.is_none() {
            return Ok(0);
        }

        let mut size = 1;
        for mv in position.legal_moves() {
            let mut played = PlayedMove::new(position, mv);
            size += self.tree_size_memo(played.position(), memo)?;
        }

        memo.insert(key, size);
        Ok(size)
    }
}
