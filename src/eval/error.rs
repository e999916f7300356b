use crate::core::Side;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum EvalError {
    #[error("legal move count must not be negative, got {0}")]
    NegativeMoveCount(i32),

    #[error("search depth must not be negative, got {0}")]
    NegativeDepth(i32),

    #[error("search depth {depth} exceeds the configured maximum {max}")]
    DepthOutOfRange { depth: u32, max: u32 },

    #[error("{side} must have exactly one king, found {count}")]
    KingCount { side: Side, count: usize },

    #[error("invalid evaluation config: {0}")]
    InvalidConfig(String),
}
