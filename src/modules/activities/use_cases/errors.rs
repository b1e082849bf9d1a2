use thiserror::Error;

use crate::modules::activities::adapters::outbound::directory::DirectoryError;
use crate::modules::activities::core::decision::DecideError;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("{0}")]
    Domain(DecideError),

    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
    Unexpected,
}

impl ApplicationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApplicationError::ActivityNotFound => ErrorKind::NotFound,
            ApplicationError::Domain(DecideError::NotSignedUp) => ErrorKind::NotFound,
            ApplicationError::Domain(
                DecideError::AlreadySignedUp | DecideError::ActivityFull,
            ) => ErrorKind::Conflict,
            ApplicationError::Directory(_) => ErrorKind::Unexpected,
        }
    }
}
