use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to access '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse JSON{}", origin(.path))]
    Decode {
        path: Option<PathBuf>,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize JSON")]
    Encode(#[source] serde_json::Error),

    #[error("document root must be an object, found {0}")]
    RootNotMapping(&'static str),

    #[error("console I/O failed")]
    Console(#[from] io::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

fn origin(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" from '{}'", p.display()))
        .unwrap_or_default()
}
