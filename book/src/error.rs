use thiserror::Error;

use crate::book::Settings;

#[derive(Debug, Error)]
pub enum BookError {
    #[error("could not open book store")]
    Open(#[source] anyhow::Error),
    #[error("book settings do not match: book is {book}, requested {requested}")]
    SettingsMismatch { book: Settings, requested: Settings },
    #[error("corrupt book data: {0}")]
    Corrupt(String),
    #[error("book store error")]
    Store(#[from] anyhow::Error),
    #[error("dump output error")]
    Io(#[from] std::io::Error),
}
