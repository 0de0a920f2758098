use tracing::debug;

use crate::axis::{self, AxisSet};
use crate::dtype::DType;
use crate::dynamic_shape::SymbolicShape;
use crate::error::{Error, Result};
use crate::value::DataModel;

// Shape/type inference for reverse
//
// Runs once per graph construction, before any data exists. Inputs are the
// static description of X and the raw `axis` attribute; outputs are the
// validated ReverseSpec the node keeps for its lifetime and the static
// description of Out.
//
// RULES:
//
//   Dense X     rank must be known; axes resolved against it
//               (empty → InvalidArgument, out of [-rank, rank) → OutOfRange)
//   Sequence X  axis must be exactly [0]; no rank check (the number of steps
//               and their shapes are only known at runtime)
//
//   Out.data_model = X.data_model
//   Out.dtype      = X.dtype
//   Out.shape      = X.shape   (unresolved stays unresolved)

/// Static description of a graph variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarDesc {
    pub data_model: DataModel,
    pub dtype: DType,
    /// `None` when the shape is not statically known.
    pub shape: Option<SymbolicShape>,
}

impl VarDesc {
    /// A dense variable with a statically known rank.
    pub fn dense(dtype: DType, shape: impl Into<SymbolicShape>) -> Self {
        VarDesc {
            data_model: DataModel::Dense,
            dtype,
            shape: Some(shape.into()),
        }
    }

    /// A tensor-sequence variable.
    pub fn sequence(dtype: DType, shape: Option<SymbolicShape>) -> Self {
        VarDesc {
            data_model: DataModel::Sequence,
            dtype,
            shape,
        }
    }

    pub fn rank(&self) -> Option<usize> {
        self.shape.as_ref().map(SymbolicShape::rank)
    }
}

/// Validated configuration of one reverse node.
///
/// Built once at graph construction, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReverseSpec {
    axes: AxisSet,
    data_model: DataModel,
    raw_axes: Vec<i64>,
    rank: Option<usize>,
}

impl ReverseSpec {
    /// Spec for a dense input of the given rank.
    pub fn dense(raw_axes: &[i64], rank: usize) -> Result<Self> {
        Ok(ReverseSpec {
            axes: axis::resolve(raw_axes, rank)?,
            data_model: DataModel::Dense,
            raw_axes: raw_axes.to_vec(),
            rank: Some(rank),
        })
    }

    /// Spec for a tensor-sequence input.
    pub fn sequence(raw_axes: &[i64]) -> Result<Self> {
        Ok(ReverseSpec {
            axes: axis::resolve_sequence(raw_axes)?,
            data_model: DataModel::Sequence,
            raw_axes: raw_axes.to_vec(),
            rank: None,
        })
    }

    /// The resolved axes.
    pub fn axes(&self) -> &AxisSet {
        &self.axes
    }

    pub fn data_model(&self) -> DataModel {
        self.data_model
    }

    /// The `axis` attribute exactly as given.
    pub fn raw_axes(&self) -> &[i64] {
        &self.raw_axes
    }

    /// Rank the axes were resolved against (dense specs only).
    pub fn rank(&self) -> Option<usize> {
        self.rank
    }

    /// Static description of Out for a given X: everything is copied.
    pub fn output_desc(&self, input: &VarDesc) -> VarDesc {
        input.clone()
    }
}

/// Result of inference: the node's spec and the description of Out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inferred {
    pub spec: ReverseSpec,
    pub output: VarDesc,
}

/// Validate the `axis` attribute against X and derive the description of Out.
pub fn infer_reverse(input: &VarDesc, raw_axes: &[i64]) -> Result<Inferred> {
    let spec = match input.data_model {
        DataModel::Sequence => ReverseSpec::sequence(raw_axes)?,
        DataModel::Dense => {
            let rank = input.rank().ok_or_else(|| {
                Error::invalid_argument("dense reverse requires a statically known rank")
            })?;
            ReverseSpec::dense(raw_axes, rank)?
        }
    };
    let output = spec.output_desc(input);
    debug!(
        data_model = %input.data_model,
        dtype = %input.dtype,
        ?raw_axes,
        axes = ?spec.axes().axes(),
        "inferred reverse"
    );
    Ok(Inferred { spec, output })
}
