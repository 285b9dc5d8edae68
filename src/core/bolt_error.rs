use std::fmt;

#[derive(Debug)]
pub enum BoltError {
    Io(std::io::Error),
    Parse(ron::error::SpannedError),
    InvalidParams(String),
    UnknownPreset(String),
    Other(String),
}

impl fmt::Display for BoltError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoltError::Io(e) => write!(f, "io error: {}", e),
            BoltError::Parse(e) => write!(f, "preset parse error: {}", e),
            BoltError::InvalidParams(msg) => write!(f, "invalid parameters: {}", msg),
            BoltError::UnknownPreset(name) => write!(f, "unknown preset '{}'", name),
            BoltError::Other(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for BoltError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BoltError::Io(e) => Some(e),
            BoltError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BoltError {
    fn from(error: std::io::Error) -> Self {
        BoltError::Io(error)
    }
}

impl From<ron::error::SpannedError> for BoltError {
    fn from(error: ron::error::SpannedError) -> Self {
        BoltError::Parse(error)
    }
}

impl From<&str> for BoltError {
    fn from(error: &str) -> Self {
        BoltError::Other(error.to_string())
    }
}
