//! Configuration loading errors.

/// Config load error
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigLoadError {
    /// File could not be read
    Io(String),
    /// File content is not a valid survey description
    Parse(String),
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigLoadError::Io(msg) => write!(f, "IO error: {}", msg),
            ConfigLoadError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigLoadError {}
