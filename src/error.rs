use crate::model::Ms;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedError {
    /// Query window with `start > end`, rejected by the checked entry point.
    InvalidRange { start: Ms, end: Ms },
}

impl std::fmt::Display for FeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedError::InvalidRange { start, end } => {
                write!(f, "invalid query window: start {start} is after end {end}")
            }
        }
    }
}

impl std::error::Error for FeedError {}
