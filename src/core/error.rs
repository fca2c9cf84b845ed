use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IslandError {
    OutOfBounds { row: usize, col: usize, size: usize },
    InvalidConfig(String),
}

impl fmt::Display for IslandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { row, col, size } => {
                write!(f, "cell ({}, {}) is outside the {}x{} grid", row, col, size, size)
            }
            Self::InvalidConfig(msg) => write!(f, "invalid config: {}", msg),
        }
    }
}

impl std::error::Error for IslandError {}

pub type Result<T> = std::result::Result<T, IslandError>;
