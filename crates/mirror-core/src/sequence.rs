use tracing::debug;

use crate::axis::AxisSet;
use crate::config::ReverseConfig;
use crate::dtype::DType;
use crate::error::{Error, Result};
use crate::tensor::Tensor;
use crate::value::Reverse;

// TensorSequence — An ordered list of variable-length steps
//
// Each element is a dense tensor. Elements share one dtype, one rank and the
// same trailing dims; only the leading dim may differ between steps:
//
//   step 0: [1, 4]
//   step 1: [3, 4]     ok
//   step 2: [3, 5]     rejected (trailing dim differs)
//
// Reversing a sequence "along axis 0" reverses the order of its steps. There
// is no stride relationship between steps, so element contents are never
// touched and the reversed sequence shares every step buffer with the input.

/// An ordered sequence of dense tensors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TensorSequence {
    items: Vec<Tensor>,
}

impl TensorSequence {
    /// Build a sequence, checking that all steps agree on dtype, rank and
    /// trailing dims.
    pub fn new(items: Vec<Tensor>) -> Result<Self> {
        if let Some(first) = items.first() {
            for item in &items[1..] {
                check_compatible(first, item)?;
            }
        }
        Ok(TensorSequence { items })
    }

    /// Append a step.
    pub fn push(&mut self, item: Tensor) -> Result<()> {
        if let Some(first) = self.items.first() {
            check_compatible(first, &item)?;
        }
        self.items.push(item);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Tensor> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tensor> {
        self.items.iter()
    }

    /// Shared element dtype, `None` while the sequence is empty.
    pub fn dtype(&self) -> Option<DType> {
        self.items.first().map(Tensor::dtype)
    }
}

impl<'a> IntoIterator for &'a TensorSequence {
    type Item = &'a Tensor;
    type IntoIter = std::slice::Iter<'a, Tensor>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

fn check_compatible(first: &Tensor, item: &Tensor) -> Result<()> {
    if item.dtype() != first.dtype() {
        return Err(Error::DTypeMismatch {
            expected: first.dtype(),
            got: item.dtype(),
        });
    }
    if item.rank() != first.rank() {
        return Err(Error::RankMismatch {
            expected: first.rank(),
            got: item.rank(),
        });
    }
    if item.shape().trailing_dims() != first.shape().trailing_dims() {
        return Err(Error::ShapeMismatch {
            expected: first.shape().clone(),
            got: item.shape().clone(),
        });
    }
    Ok(())
}

/// Reverse the order of the steps in `input`.
///
/// Only the axis set `{0}` is meaningful for a sequence; anything else fails
/// with [`Error::InvalidArgument`]. Step buffers are shared, not copied.
pub fn reverse(input: &TensorSequence, axes: &AxisSet) -> Result<TensorSequence> {
    if !axes.is_sequence_axis() {
        return Err(Error::invalid_argument(format!(
            "sequence reversal requires exactly one axis equal to 0, got {:?}",
            axes.axes()
        )));
    }
    debug!(len = input.len(), "sequence reverse");
    let items = input.items.iter().rev().cloned().collect();
    Ok(TensorSequence { items })
}

impl Reverse for TensorSequence {
    fn reverse(&self, axes: &AxisSet, _config: &ReverseConfig) -> Result<Self> {
        reverse(self, axes)
    }
}

impl TryFrom<Vec<Tensor>> for TensorSequence {
    type Error = Error;

    fn try_from(items: Vec<Tensor>) -> Result<Self> {
        TensorSequence::new(items)
    }
}

/// Leading-dim sizes of every step, e.g. `[1, 3, 2]`.
pub fn step_lengths(input: &TensorSequence) -> Vec<usize> {
    input
        .iter()
        .map(|t| t.shape().dims().first().copied().unwrap_or(0))
        .collect()
}
