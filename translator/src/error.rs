use std::{io, path::PathBuf};

use thiserror::Error;

use crate::parser::{ErrorKind, ParseError};

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid usage: {0}")]
    Usage(String),

    #[error("failed to read {}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("statistics file {} requested more than once", .0.display())]
    DuplicateStatsFile(PathBuf),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Usage(_) => ErrorKind::Usage,
            Error::Input { .. } => ErrorKind::InputIo,
            Error::Output { .. } | Error::DuplicateStatsFile(_) => ErrorKind::OutputIo,
            Error::Parse(e) => e.kind,
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.kind().exit_code()
    }
}
