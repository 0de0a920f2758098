//! # mirror-core
//!
//! Multi-axis reverse transform over dense N-dimensional arrays and tensor
//! sequences, plus the static inference and gradient rules a computation
//! graph needs to host it.
//!
//! This crate provides:
//! - [`DenseArray`] / [`Tensor`] — immutable row-major arrays (typed / dtype-erased)
//! - [`TensorSequence`] — ordered list of variable-length steps
//! - [`AxisSet`] — validated, normalized reversal axes
//! - [`dense::reverse`] — single-pass multi-axis reversal
//! - [`sequence::reverse`] — step-order reversal
//! - [`infer_reverse`] / [`ReverseSpec`] — shape/type inference
//! - [`grad::reverse_grad`] — the self-inverse gradient rule
//! - [`DType`] — supported element types (i32, u8, i64, bool, f32, f64)
//! - [`Shape`] / [`Layout`] — dims and row-major strides
//! - [`Value`] — dense-vs-sequence tagged union, dispatched once

pub mod axis;
pub mod config;
pub mod dense;
pub mod dtype;
pub mod dynamic_shape;
pub mod error;
pub mod grad;
pub mod infer;
pub mod layout;
pub mod sequence;
pub mod shape;
pub mod tensor;
pub mod value;

pub use axis::{normalize_axis, resolve, resolve_sequence, AxisSet};
pub use config::ReverseConfig;
pub use dtype::{DType, WithDType};
pub use dynamic_shape::{SymDim, SymbolicShape};
pub use error::{Error, Result};
pub use grad::{grad_op_desc, grad_var_name, reverse_grad, GradOpDesc, REVERSE_OP};
pub use infer::{infer_reverse, Inferred, ReverseSpec, VarDesc};
pub use layout::Layout;
pub use sequence::TensorSequence;
pub use shape::Shape;
pub use tensor::{DenseArray, Tensor};
pub use value::{DataModel, Reverse, Value};
