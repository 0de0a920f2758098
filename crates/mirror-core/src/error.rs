use crate::dtype::DType;
use crate::shape::Shape;

/// All errors that can occur within Mirror.
///
/// Axis validation failures (`InvalidArgument`, `OutOfRange`) are raised at
/// graph-construction time. The remaining variants guard the data model:
/// buffers that don't match their shape, sequences whose elements disagree,
/// and runtime values that don't match the static metadata of a node.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed argument, e.g. an empty axis list or a sequence-mode axis
    /// set other than `{0}`.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A raw axis outside `[-rank, rank)`.
    #[error("axis {axis} out of range for rank {rank}: expected {lower} <= axis < {rank}", lower = lower_bound(.rank))]
    OutOfRange { axis: i64, rank: usize },

    /// Shape mismatch between two tensors.
    #[error("shape mismatch: expected {expected}, got {got}")]
    ShapeMismatch { expected: Shape, got: Shape },

    /// Operation requires a specific rank (number of dimensions).
    #[error("rank mismatch: expected rank {expected}, got {got}")]
    RankMismatch { expected: usize, got: usize },

    /// DType mismatch, e.g. mixing element types inside one sequence.
    #[error("dtype mismatch: expected {expected}, got {got}")]
    DTypeMismatch { expected: DType, got: DType },

    /// Element count mismatch when creating an array from a vec.
    #[error("element count mismatch: shape {shape} requires {expected} elements, got {got}")]
    ElementCountMismatch {
        shape: Shape,
        expected: usize,
        got: usize,
    },

    /// Generic message for cases not covered above.
    #[error("{0}")]
    Msg(String),
}

impl Error {
    pub fn invalid_argument(s: impl Into<String>) -> Self {
        Error::InvalidArgument(s.into())
    }
}

fn lower_bound(rank: &usize) -> i64 {
    -(*rank as i64)
}

/// Convenience Result type used throughout Mirror.
pub type Result<T> = std::result::Result<T, Error>;

/// Macro for early return with a formatted error message.
/// Usage: `bail!("something went wrong: {}", detail)`
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::Msg(format!($($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message_names_bounds() {
        let err = Error::OutOfRange { axis: 5, rank: 2 };
        assert_eq!(
            err.to_string(),
            "axis 5 out of range for rank 2: expected -2 <= axis < 2"
        );
    }

    #[test]
    fn test_bail_macro() {
        fn fails() -> Result<()> {
            bail!("bad value {}", 3);
        }
        assert_eq!(fails().unwrap_err().to_string(), "bad value 3");
    }
}
