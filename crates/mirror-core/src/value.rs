use std::fmt;

use crate::axis::AxisSet;
use crate::config::ReverseConfig;
use crate::dtype::DType;
use crate::error::Result;
use crate::sequence::TensorSequence;
use crate::tensor::Tensor;

// Value — What a host hands to a reverse node at execution time
//
// A graph variable is either a single dense tensor or an ordered sequence of
// tensors (e.g. the variable-length steps of a recurrent loop). The two data
// models reverse differently:
//
//   Dense     → mirror element positions along the requested axes
//   Sequence  → reverse the order of the steps, leave each step untouched
//
// The tag is matched once, here, and each side implements the shared
// `Reverse` capability. Kernels below this point never inspect tags.

/// Data-model tag of a graph variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataModel {
    /// A single dense tensor.
    Dense,
    /// An ordered sequence of tensors.
    Sequence,
}

impl fmt::Display for DataModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataModel::Dense => write!(f, "dense"),
            DataModel::Sequence => write!(f, "sequence"),
        }
    }
}

/// Anything that can be reversed along a resolved axis set.
pub trait Reverse: Sized {
    /// Return a reversed copy of `self`. The receiver is never modified.
    fn reverse(&self, axes: &AxisSet, config: &ReverseConfig) -> Result<Self>;
}

/// A runtime value: one dense tensor or a tensor sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Dense(Tensor),
    Sequence(TensorSequence),
}

impl Value {
    pub fn data_model(&self) -> DataModel {
        match self {
            Value::Dense(_) => DataModel::Dense,
            Value::Sequence(_) => DataModel::Sequence,
        }
    }

    /// Element dtype. `None` for an empty sequence.
    pub fn dtype(&self) -> Option<DType> {
        match self {
            Value::Dense(t) => Some(t.dtype()),
            Value::Sequence(s) => s.dtype(),
        }
    }

    pub fn as_dense(&self) -> Option<&Tensor> {
        match self {
            Value::Dense(t) => Some(t),
            Value::Sequence(_) => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&TensorSequence> {
        match self {
            Value::Dense(_) => None,
            Value::Sequence(s) => Some(s),
        }
    }
}

impl Reverse for Value {
    fn reverse(&self, axes: &AxisSet, config: &ReverseConfig) -> Result<Self> {
        match self {
            Value::Dense(t) => t.reverse(axes, config).map(Value::Dense),
            Value::Sequence(s) => s.reverse(axes, config).map(Value::Sequence),
        }
    }
}

impl From<Tensor> for Value {
    fn from(t: Tensor) -> Self {
        Value::Dense(t)
    }
}

impl From<TensorSequence> for Value {
    fn from(s: TensorSequence) -> Self {
        Value::Sequence(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::resolve;
    use crate::error::Error;

    #[test]
    fn test_value_dispatches_dense() {
        let x: Value = Tensor::from_vec(vec![1i32, 2, 3], 3).unwrap().into();
        assert_eq!(x.data_model(), DataModel::Dense);
        let out = x
            .reverse(&resolve(&[0], 1).unwrap(), &ReverseConfig::default())
            .unwrap();
        assert_eq!(out.data_model(), DataModel::Dense);
        let out = out.as_dense().unwrap();
        assert_eq!(out.to_vec::<i32>().unwrap(), vec![3, 2, 1]);
    }

    #[test]
    fn test_value_dispatches_sequence() {
        let steps = vec![
            Tensor::from_vec(vec![1.0f32, 2.0], (1, 2)).unwrap(),
            Tensor::from_vec(vec![3.0f32, 4.0, 5.0, 6.0], (2, 2)).unwrap(),
        ];
        let x: Value = TensorSequence::new(steps.clone()).unwrap().into();
        assert_eq!(x.data_model(), DataModel::Sequence);
        assert_eq!(x.dtype(), Some(DType::F32));

        let out = x
            .reverse(&AxisSet::sequence(), &ReverseConfig::default())
            .unwrap();
        let out = out.as_sequence().unwrap();
        assert_eq!(out.get(0), Some(&steps[1]));
        assert_eq!(out.get(1), Some(&steps[0]));

        let err = x
            .reverse(&resolve(&[1], 2).unwrap(), &ReverseConfig::default())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_data_model_display() {
        assert_eq!(DataModel::Dense.to_string(), "dense");
        assert_eq!(DataModel::Sequence.to_string(), "sequence");
    }
}
