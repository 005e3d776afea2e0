/// Errors raised by the disjoint sets, the maze and the solver.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("invalid maze dimensions {width}x{height}: both must be positive")]
    InvalidDimension { width: usize, height: usize },
    #[error("index {index} is out of range for {len} elements")]
    OutOfRangeIndex { index: usize, len: usize },
    #[error("broken precondition: {0}")]
    BrokenPrecondition(String),
}

pub type Result<T> = std::result::Result<T, MazeError>;
