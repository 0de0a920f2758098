use std::fmt;

// Shape — N-dimensional shape representation
//
// A Shape describes the size of each dimension of a tensor.
// For example:
//   - Vector: Shape([5])         — 1 dimension, 5 elements
//   - Matrix: Shape([3, 5])      — 2 dimensions, 15 elements
//   - Batch:  Shape([2, 2, 4])   — 3 dimensions, 16 elements
//
// For the reverse transform the shape determines:
//   1. How many elements are in the tensor (product of all dims)
//   2. The row-major strides used to decompose a linear index
//   3. Which raw axis values are valid (rank bounds)

/// N-dimensional shape of a tensor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape(Vec<usize>);

impl Shape {
    /// Create a new shape from a vector of dimension sizes.
    pub fn new(dims: Vec<usize>) -> Self {
        Shape(dims)
    }

    /// The dimension sizes as a slice.
    pub fn dims(&self) -> &[usize] {
        &self.0
    }

    /// Number of dimensions.
    pub fn rank(&self) -> usize {
        self.0.len()
    }

    /// Total number of elements (product of all dimensions).
    /// A shape with a zero-sized dimension has no elements.
    pub fn elem_count(&self) -> usize {
        self.0.iter().product::<usize>()
    }

    /// Compute the contiguous (row-major / C-order) strides for this shape.
    ///
    /// For shape [2, 2, 4], strides are [8, 4, 1]:
    ///   - Moving 1 step in dim 0 jumps 8 elements (2*4)
    ///   - Moving 1 step in dim 1 jumps 4 elements
    ///   - Moving 1 step in dim 2 jumps 1 element
    pub fn stride_contiguous(&self) -> Vec<usize> {
        let mut strides = vec![0usize; self.rank()];
        if self.rank() > 0 {
            strides[self.rank() - 1] = 1;
            for i in (0..self.rank() - 1).rev() {
                strides[i] = strides[i + 1] * self.0[i + 1];
            }
        }
        strides
    }

    /// Dimensions after the leading one. Two sequence elements are
    /// compatible when their trailing dims agree.
    pub fn trailing_dims(&self) -> &[usize] {
        self.0.get(1..).unwrap_or(&[])
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, d) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", d)?;
        }
        write!(f, "]")
    }
}

// Convenient From implementations
// These let you write: Shape::from((3, 5)) instead of Shape::new(vec![3, 5])

impl From<usize> for Shape {
    /// 1-D shape.
    fn from(d: usize) -> Self {
        Shape(vec![d])
    }
}

impl From<(usize,)> for Shape {
    fn from((d0,): (usize,)) -> Self {
        Shape(vec![d0])
    }
}

impl From<(usize, usize)> for Shape {
    fn from((d0, d1): (usize, usize)) -> Self {
        Shape(vec![d0, d1])
    }
}

impl From<(usize, usize, usize)> for Shape {
    fn from((d0, d1, d2): (usize, usize, usize)) -> Self {
        Shape(vec![d0, d1, d2])
    }
}

impl From<(usize, usize, usize, usize)> for Shape {
    fn from((d0, d1, d2, d3): (usize, usize, usize, usize)) -> Self {
        Shape(vec![d0, d1, d2, d3])
    }
}

impl From<Vec<usize>> for Shape {
    fn from(v: Vec<usize>) -> Self {
        Shape(v)
    }
}

impl From<&[usize]> for Shape {
    fn from(s: &[usize]) -> Self {
        Shape(s.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_shape() {
        let s = Shape::from(5);
        assert_eq!(s.rank(), 1);
        assert_eq!(s.elem_count(), 5);
        assert_eq!(s.stride_contiguous(), vec![1]);
        assert!(s.trailing_dims().is_empty());
    }

    #[test]
    fn test_matrix_shape() {
        let s = Shape::from((3, 5));
        assert_eq!(s.rank(), 2);
        assert_eq!(s.elem_count(), 15);
        // Row-major: stride for dim0 = 5, stride for dim1 = 1
        assert_eq!(s.stride_contiguous(), vec![5, 1]);
    }

    #[test]
    fn test_3d_strides() {
        let s = Shape::from((2, 2, 4));
        assert_eq!(s.stride_contiguous(), vec![8, 4, 1]);
        assert_eq!(s.elem_count(), 16);
        assert_eq!(s.trailing_dims(), &[2, 4]);
    }

    #[test]
    fn test_zero_sized_dim() {
        let s = Shape::from((0, 3));
        assert_eq!(s.elem_count(), 0);
        assert_eq!(s.stride_contiguous(), vec![3, 1]);
    }

    #[test]
    fn test_display() {
        let s = Shape::from((3, 4));
        assert_eq!(format!("{}", s), "[3, 4]");
    }
}
