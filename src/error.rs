// error.rs

use rustyline::error::ReadlineError;
use std::io;

/// Infrastructure failures. An unknown command is not one of these; it is an
/// ordinary response.
#[derive(Debug, thiserror::Error)]
pub enum PortfolioError {
    #[error("config error: {0}")]
    Config(String),

    #[error("failed to open {target}: {source}")]
    Launch {
        target: String,
        #[source]
        source: io::Error,
    },

    #[error("line editor error: {0}")]
    Editor(#[from] ReadlineError),

    #[error("session state poisoned")]
    Poisoned,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
