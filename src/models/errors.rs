use std::fmt;

/// Game-specific error types
#[derive(Debug)]
pub enum GameError {
    /// Failed to parse user input
    ParseError(String),
    /// Invalid input provided by user
    InvalidInput(String),
    /// Insufficient resources (energy, torpedoes, etc.)
    InsufficientResources { required: i32, available: i32 },
    /// Snapshot could not be encoded or decoded
    Serialization(serde_json::Error),
    /// Snapshot decoded but describes an impossible game
    CorruptSave(String),
    /// I/O error occurred
    IoError(std::io::Error),
}

/// Type alias for Results using GameError
pub type GameResult<T> = Result<T, GameError>;

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            GameError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            GameError::InsufficientResources { required, available } => {
                write!(
                    f,
                    "Insufficient resources: required {}, available {}",
                    required, available
                )
            }
            GameError::Serialization(err) => write!(f, "Serialization error: {}", err),
            GameError::CorruptSave(msg) => write!(f, "Corrupt save: {}", msg),
            GameError::IoError(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::IoError(err) => Some(err),
            GameError::Serialization(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        GameError::IoError(err)
    }
}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        GameError::Serialization(err)
    }
}

impl From<std::num::ParseIntError> for GameError {
    fn from(err: std::num::ParseIntError) -> Self {
        GameError::ParseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_resources_message() {
        let err = GameError::InsufficientResources {
            required: 150,
            available: 149,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient resources: required 150, available 149"
        );
    }

    #[test]
    fn parse_int_converts_to_parse_error() {
        let err: GameError = "x".parse::<i32>().unwrap_err().into();
        assert!(matches!(err, GameError::ParseError(_)));
    }
}
