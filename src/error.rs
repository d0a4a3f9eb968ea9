use std::path::PathBuf;

use crate::WIDTH;

/// Errors raised by the game model and the move search.
///
/// None of these are fatal: a rejected operation leaves every board untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("column {column} out of range, columns must be between 0 and {}", WIDTH - 1)]
    InvalidColumn { column: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("no legal moves remain")]
    NoLegalMoves,

    #[error("the game is over")]
    GameOver,

    #[error("search worker stopped without a result")]
    SearchAborted,

    #[error("could not parse '{character}' as a valid move")]
    InvalidMoveString { character: char },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_error_display() {
        assert_eq!(
            GameError::InvalidColumn { column: 9 }.to_string(),
            "column 9 out of range, columns must be between 0 and 6"
        );
        assert_eq!(
            GameError::ColumnFull { column: 2 }.to_string(),
            "column 2 is full"
        );
        assert_eq!(GameError::NoLegalMoves.to_string(), "no legal moves remain");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("search.depth must be >= 1".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: search.depth must be >= 1"
        );
    }
}
