use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while configuring a series or persisting its results.
#[derive(Debug, Error)]
pub enum TournamentError {
    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid results JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unknown engine '{0}' (expected minimax or random[:seed])")]
    UnknownEngine(String),
}

impl TournamentError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
