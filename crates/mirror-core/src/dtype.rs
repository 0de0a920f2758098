use std::fmt;

use crate::tensor::{DenseArray, Tensor};

// DType — Element types the reverse kernels are instantiated for
//
// Reverse is a pure data-movement op, so every element type is handled the
// same way (a strict copy). We support the types a graph usually feeds
// through it:
//
//   I32  — signed 32-bit int, the default integer type
//   U8   — unsigned byte, for image data
//   I64  — signed 64-bit int, for labels/indices
//   Bool — masks
//   F32  — 32-bit float, the default workhorse
//   F64  — 64-bit float, for high-precision work

/// Enum of all supported element data types.
///
/// Stored inside every dtype-erased [`Tensor`] and every static variable
/// description so dispatch and inference can branch on it at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    I32,
    U8,
    I64,
    Bool,
    F32,
    F64,
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DType::I32 => "i32",
            DType::U8 => "u8",
            DType::I64 => "i64",
            DType::Bool => "bool",
            DType::F32 => "f32",
            DType::F64 => "f64",
        };
        write!(f, "{}", s)
    }
}

// WithDType — Trait that connects Rust types to DType enum
//
// This trait is the bridge between Rust's type system and the runtime DType.
// Generic kernels are written once over `T: WithDType`, and the dtype-erased
// Tensor enum uses `into_tensor` / `from_tensor` to move in and out of the
// typed world:
//
//   fn reverse<T: WithDType>(input: &DenseArray<T>, ...) -> DenseArray<T>

/// Trait implemented by Rust types that can be stored in a tensor.
pub trait WithDType: Copy + Send + Sync + PartialEq + fmt::Debug + 'static {
    /// The corresponding DType enum variant.
    const DTYPE: DType;

    /// Wrap a typed array into the dtype-erased tensor.
    fn into_tensor(array: DenseArray<Self>) -> Tensor;

    /// Borrow the typed array back out, if the dtype matches.
    fn from_tensor(tensor: &Tensor) -> Option<&DenseArray<Self>>;
}

macro_rules! with_dtype {
    ($ty:ty, $variant:ident) => {
        impl WithDType for $ty {
            const DTYPE: DType = DType::$variant;

            fn into_tensor(array: DenseArray<Self>) -> Tensor {
                Tensor::$variant(array)
            }

            fn from_tensor(tensor: &Tensor) -> Option<&DenseArray<Self>> {
                match tensor {
                    Tensor::$variant(array) => Some(array),
                    _ => None,
                }
            }
        }
    };
}

with_dtype!(i32, I32);
with_dtype!(u8, U8);
with_dtype!(i64, I64);
with_dtype!(bool, Bool);
with_dtype!(f32, F32);
with_dtype!(f64, F64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_dtype_tags() {
        assert_eq!(i32::DTYPE, DType::I32);
        assert_eq!(u8::DTYPE, DType::U8);
        assert_eq!(bool::DTYPE, DType::Bool);
        assert_eq!(f64::DTYPE, DType::F64);
    }

    #[test]
    fn test_with_dtype_tensor_bridge() {
        let array = DenseArray::new(vec![1i64, 2, 3], 3).unwrap();
        let tensor = i64::into_tensor(array.clone());
        assert_eq!(tensor.dtype(), DType::I64);
        assert_eq!(i64::from_tensor(&tensor), Some(&array));
        assert!(f32::from_tensor(&tensor).is_none());
    }
}
