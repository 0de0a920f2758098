//! # Mirror
//!
//! Multi-axis reverse for dense tensors and tensor sequences.
//!
//! This is the top-level facade crate that re-exports everything you need.
//!
//! ## Usage
//!
//! ```rust
//! use mirror::prelude::*;
//!
//! let x = Tensor::from_vec((1..=6).collect::<Vec<i32>>(), (2, 3))?;
//! let desc = VarDesc::dense(DType::I32, x.shape().clone());
//! let (node, _out_desc) = ReverseNode::build("x", "out", &desc, &[-1])?;
//! let out = node.forward(&Value::Dense(x), &ReverseConfig::default())?;
//! assert_eq!(out.as_dense().unwrap().to_vec::<i32>()?, vec![3, 2, 1, 6, 5, 4]);
//! # Ok::<(), mirror::Error>(())
//! ```
//!
//! ## Architecture
//!
//! | Crate | Purpose |
//! |-------|----------|
//! | `mirror-core` | Shape, Layout, DType, axis resolution, dense/sequence kernels, inference, gradient rule |
//! | `mirror` | Prelude and the [`op::ReverseNode`] graph adapter |

/// Re-export core types.
pub use mirror_core::{
    axis, dense, grad, infer, sequence, AxisSet, DType, DataModel, DenseArray, Error, GradOpDesc,
    Inferred, Layout, Result, Reverse, ReverseConfig, ReverseSpec, Shape, SymDim, SymbolicShape,
    Tensor, TensorSequence, Value, VarDesc, WithDType,
};

/// Graph-node adapter for hosts.
pub mod op;

pub use op::ReverseNode;

/// Everything needed to build and run reverse nodes.
pub mod prelude {
    pub use crate::op::ReverseNode;
    pub use mirror_core::{
        AxisSet, DType, DataModel, DenseArray, Error, Result, Reverse, ReverseConfig,
        ReverseSpec, Shape, SymDim, SymbolicShape, Tensor, TensorSequence, Value, VarDesc,
    };
}
