use std::io;

use thiserror::Error;

use crate::dispatch::KeyParseError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid key binding for {action}: {source}")]
    KeySpec {
        action: String,
        #[source]
        source: KeyParseError,
    },

    #[error("Unknown action in key bindings: {0}")]
    UnknownAction(String),

    #[error("Failed to start logging: {0}")]
    Logging(String),

    /// User input failed validation. Recoverable: the form keeps its contents.
    #[error("Invalid input! Please, try again.")]
    InvalidInput,
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Io(e) => e,
            other => io::Error::other(other),
        }
    }
}
