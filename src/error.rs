use std::collections::TryReserveError;

use thiserror::Error;

/// Library error type for wordlist generation and persistence.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// A collection could not grow while building candidates.
    #[error("out of memory while {stage}")]
    OutOfMemory { stage: &'static str },

    /// Any other failure inside the generation phases.
    #[error("generation failed: {0}")]
    Internal(String),

    /// Underlying IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// YAML profile file could not be parsed.
    #[error("invalid profile file: {0}")]
    Profile(#[from] serde_yaml::Error),
}

impl GenerateError {
    pub fn is_out_of_memory(&self) -> bool {
        matches!(self, Self::OutOfMemory { .. })
    }
}

/// Attach the stage name to an allocation failure.
pub(crate) trait ReserveExt<T> {
    fn or_oom(self, stage: &'static str) -> Result<T, GenerateError>;
}

impl<T> ReserveExt<T> for Result<T, TryReserveError> {
    fn or_oom(self, stage: &'static str) -> Result<T, GenerateError> {
        self.map_err(|_| GenerateError::OutOfMemory { stage })
    }
}
