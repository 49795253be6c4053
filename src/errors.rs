use thiserror::Error;

/// Which operand a boundary error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

// Errors raised when turning text into operators or operands.
// Comparisons themselves never fail.
#[derive(Debug, Error)]
pub enum CompareError {
    #[error("unknown operator: {0}")]
    UnknownOperator(String),

    #[error("invalid JSON for {side} operand: {source}")]
    InvalidJson {
        side: Side,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, CompareError>;
