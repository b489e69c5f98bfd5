//! Error types for the conversion library.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid note name {name:?}: expected letter A-G, optional ♯/♭ (or #/b), octave")]
    NoteName { name: String },
}

pub type Result<T> = std::result::Result<T, Error>;
