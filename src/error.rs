// src/error.rs

use crate::model::{LevelId, LevelKind};
use thiserror::Error;

/// Everything the progression core can refuse to do.
///
/// All variants are local to a single operation. `NotFound` and `Catalog`
/// point at a broken level catalog; the rest are user-recoverable and end up
/// as a toast in the UI.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("level {0} does not exist in this catalog")]
    NotFound(LevelId),

    #[error("level {0} is locked")]
    Locked(LevelId),

    #[error("level {level}: {} item(s) still unanswered", missing.len())]
    IncompleteSubmission { level: LevelId, missing: Vec<usize> },

    #[error("level {level} expects a {expected} submission")]
    SubmissionMismatch { level: LevelId, expected: LevelKind },

    #[error("invalid level catalog: {0}")]
    Catalog(String),
}

impl GameError {
    /// Locked levels and unanswered items are expected during play.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GameError::Locked(_) | GameError::IncompleteSubmission { .. }
        )
    }
}

pub type GameResult<T> = Result<T, GameError>;
