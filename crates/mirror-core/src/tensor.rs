use std::sync::Arc;

use crate::dtype::{DType, WithDType};
use crate::error::{Error, Result};
use crate::layout::Layout;
use crate::shape::Shape;

// DenseArray / Tensor — The dense data model
//
// DenseArray<T> is an immutable view of a contiguous, row-major buffer of one
// element type. The buffer lives behind an Arc, so:
//
//   - Cloning a DenseArray is O(1) (just increments a refcount)
//   - A TensorSequence can hand the same element buffers to its reversed
//     copy without touching the data
//   - Kernels only ever read the input and allocate a fresh output
//
// Tensor is the dtype-erased counterpart: one enum variant per DType, each
// wrapping a DenseArray of the matching Rust type. Generic kernels run on
// DenseArray<T>; the host and the sequence container work with Tensor.

/// An immutable n-dimensional array of `T` in row-major order.
///
/// Invariants: rank >= 1 and `data.len() == shape.elem_count()`.
#[derive(Debug)]
pub struct DenseArray<T> {
    data: Arc<[T]>,
    layout: Layout,
}

impl<T> Clone for DenseArray<T> {
    fn clone(&self) -> Self {
        DenseArray {
            data: Arc::clone(&self.data),
            layout: self.layout.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for DenseArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.layout == other.layout && self.data == other.data
    }
}

impl<T: WithDType> DenseArray<T> {
    /// Create an array from a flat row-major buffer.
    ///
    /// Fails if the shape has rank 0 or the buffer length does not match the
    /// element count of the shape.
    pub fn new(data: Vec<T>, shape: impl Into<Shape>) -> Result<Self> {
        let shape = shape.into();
        if shape.rank() == 0 {
            return Err(Error::invalid_argument(
                "dense arrays must have rank >= 1",
            ));
        }
        let expected = shape.elem_count();
        if data.len() != expected {
            return Err(Error::ElementCountMismatch {
                shape,
                expected,
                got: data.len(),
            });
        }
        Ok(Self::from_parts(data, Layout::contiguous(shape)))
    }

    /// Build an array whose buffer is already known to match the layout.
    pub(crate) fn from_parts(data: Vec<T>, layout: Layout) -> Self {
        debug_assert_eq!(data.len(), layout.elem_count());
        DenseArray {
            data: data.into(),
            layout,
        }
    }

    pub fn dtype(&self) -> DType {
        T::DTYPE
    }

    pub fn shape(&self) -> &Shape {
        self.layout.shape()
    }

    pub fn dims(&self) -> &[usize] {
        self.layout.dims()
    }

    pub fn rank(&self) -> usize {
        self.layout.rank()
    }

    pub fn elem_count(&self) -> usize {
        self.layout.elem_count()
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The flat row-major buffer.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.data.to_vec()
    }

    /// Whether two arrays share the same underlying buffer.
    pub fn shares_buffer(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}

/// A dense tensor of any supported element type.
#[derive(Debug, Clone, PartialEq)]
pub enum Tensor {
    I32(DenseArray<i32>),
    U8(DenseArray<u8>),
    I64(DenseArray<i64>),
    Bool(DenseArray<bool>),
    F32(DenseArray<f32>),
    F64(DenseArray<f64>),
}

/// Run the same expression on whichever typed array a Tensor holds.
///
/// `map_dense!(t, a => expr)` rebuilds a Tensor of the same variant from
/// `expr`; `with_dense!(t, a => expr)` just evaluates `expr`.
macro_rules! with_dense {
    ($tensor:expr, $array:ident => $body:expr) => {
        match $tensor {
            $crate::tensor::Tensor::I32($array) => $body,
            $crate::tensor::Tensor::U8($array) => $body,
            $crate::tensor::Tensor::I64($array) => $body,
            $crate::tensor::Tensor::Bool($array) => $body,
            $crate::tensor::Tensor::F32($array) => $body,
            $crate::tensor::Tensor::F64($array) => $body,
        }
    };
}

macro_rules! map_dense {
    ($tensor:expr, $array:ident => $body:expr) => {
        match $tensor {
            $crate::tensor::Tensor::I32($array) => $crate::tensor::Tensor::I32($body),
            $crate::tensor::Tensor::U8($array) => $crate::tensor::Tensor::U8($body),
            $crate::tensor::Tensor::I64($array) => $crate::tensor::Tensor::I64($body),
            $crate::tensor::Tensor::Bool($array) => $crate::tensor::Tensor::Bool($body),
            $crate::tensor::Tensor::F32($array) => $crate::tensor::Tensor::F32($body),
            $crate::tensor::Tensor::F64($array) => $crate::tensor::Tensor::F64($body),
        }
    };
}

pub(crate) use map_dense;

impl Tensor {
    /// Create a tensor from a typed flat buffer.
    pub fn from_vec<T: WithDType>(data: Vec<T>, shape: impl Into<Shape>) -> Result<Self> {
        Ok(T::into_tensor(DenseArray::new(data, shape)?))
    }

    pub fn dtype(&self) -> DType {
        with_dense!(self, a => a.dtype())
    }

    pub fn shape(&self) -> &Shape {
        with_dense!(self, a => a.shape())
    }

    pub fn dims(&self) -> &[usize] {
        with_dense!(self, a => a.dims())
    }

    pub fn rank(&self) -> usize {
        with_dense!(self, a => a.rank())
    }

    pub fn elem_count(&self) -> usize {
        with_dense!(self, a => a.elem_count())
    }

    /// Borrow the typed array, if `T` matches the tensor's dtype.
    pub fn as_array<T: WithDType>(&self) -> Option<&DenseArray<T>> {
        T::from_tensor(self)
    }

    /// Copy the elements out as a typed vec.
    pub fn to_vec<T: WithDType>(&self) -> Result<Vec<T>> {
        match T::from_tensor(self) {
            Some(array) => Ok(array.to_vec()),
            None => Err(Error::DTypeMismatch {
                expected: T::DTYPE,
                got: self.dtype(),
            }),
        }
    }

    /// Whether two tensors share the same underlying buffer.
    pub fn shares_buffer(&self, other: &Tensor) -> bool {
        match (self, other) {
            (Tensor::I32(a), Tensor::I32(b)) => a.shares_buffer(b),
            (Tensor::U8(a), Tensor::U8(b)) => a.shares_buffer(b),
            (Tensor::I64(a), Tensor::I64(b)) => a.shares_buffer(b),
            (Tensor::Bool(a), Tensor::Bool(b)) => a.shares_buffer(b),
            (Tensor::F32(a), Tensor::F32(b)) => a.shares_buffer(b),
            (Tensor::F64(a), Tensor::F64(b)) => a.shares_buffer(b),
            _ => false,
        }
    }
}

impl<T: WithDType> From<DenseArray<T>> for Tensor {
    fn from(array: DenseArray<T>) -> Self {
        T::into_tensor(array)
    }
}
