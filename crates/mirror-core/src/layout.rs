use crate::shape::Shape;

// Layout — Memory layout of a dense array (shape + row-major strides)
//
// Every DenseArray is contiguous: element [i0, i1, ..., in] lives at
//
//   flat = i0 * stride[0] + i1 * stride[1] + ... + in * stride[n]
//
// with strides derived from the shape (last dimension fastest). The reverse
// kernel runs this formula in both directions: a linear output position is
// decomposed into a coordinate (unravel), some coordinates are mirrored, and
// the result is recomposed into the linear source position (flat_index).
//
// Example for shape [3, 5] (strides [5, 1]):
//   linear 7  → unravel → [1, 2]
//   [1, 2]    → flat    → 7

/// Layout describes how a dense array's logical shape maps to flat storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    shape: Shape,
    strides: Vec<usize>,
}

impl Layout {
    /// Create a new contiguous layout for the given shape.
    /// Strides are computed as row-major (C-order).
    pub fn contiguous(shape: Shape) -> Self {
        let strides = shape.stride_contiguous();
        Layout { shape, strides }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    pub fn rank(&self) -> usize {
        self.shape.rank()
    }

    pub fn dims(&self) -> &[usize] {
        self.shape.dims()
    }

    pub fn elem_count(&self) -> usize {
        self.shape.elem_count()
    }

    /// Compute the flat index into storage for a given multi-dimensional index.
    pub fn flat_index(&self, index: &[usize]) -> usize {
        index
            .iter()
            .zip(self.strides.iter())
            .map(|(&idx, &stride)| idx * stride)
            .sum()
    }

    /// Decompose a flat index into its multi-dimensional coordinate.
    /// Inverse of [`Layout::flat_index`] for every `linear < elem_count()`.
    pub fn unravel_index(&self, linear: usize) -> Vec<usize> {
        let mut rem = linear;
        self.strides
            .iter()
            .map(|&stride| {
                let coord = rem / stride;
                rem %= stride;
                coord
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contiguous_layout() {
        let layout = Layout::contiguous(Shape::from((2, 3)));
        assert_eq!(layout.strides(), &[3, 1]);
        assert_eq!(layout.dims(), &[2, 3]);
        assert_eq!(layout.elem_count(), 6);
    }

    #[test]
    fn test_flat_index() {
        let layout = Layout::contiguous(Shape::from((2, 3, 4)));
        // Element at [1, 2, 3]: 1*12 + 2*4 + 3*1 = 23
        assert_eq!(layout.flat_index(&[1, 2, 3]), 23);
        assert_eq!(layout.flat_index(&[0, 0, 0]), 0);
    }

    #[test]
    fn test_unravel_index() {
        let layout = Layout::contiguous(Shape::from((3, 5)));
        assert_eq!(layout.unravel_index(7), vec![1, 2]);
        assert_eq!(layout.unravel_index(14), vec![2, 4]);
    }

    #[test]
    fn test_unravel_inverts_flat_index() {
        let layout = Layout::contiguous(Shape::from((2, 3, 4)));
        for linear in 0..layout.elem_count() {
            let coord = layout.unravel_index(linear);
            assert_eq!(layout.flat_index(&coord), linear);
        }
    }
}
