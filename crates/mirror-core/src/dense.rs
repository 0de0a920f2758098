use rayon::prelude::*;
use tracing::debug;

use crate::axis::AxisSet;
use crate::config::ReverseConfig;
use crate::dtype::WithDType;
use crate::error::Result;
use crate::layout::Layout;
use crate::tensor::{map_dense, DenseArray, Tensor};
use crate::value::Reverse;

// Dense reverse — one combined pass over every output position
//
// For each linear output index we:
//   1. decompose it into a coordinate with the row-major strides
//   2. mirror every coordinate on a reversed axis: i → dim_size - 1 - i
//   3. recompose the mirrored coordinate into the linear source index
//   4. copy the source element to the output position
//
// Example: shape [2, 2, 4], axes {0, 2}, output index 1
//   1 → [0, 0, 1] → [1, 0, 2] → 1*8 + 0*4 + 2*1 = 10 → out[1] = in[10]
//
// All reversed axes are handled in the same pass, so the cost is one read and
// one write per element whatever the number of axes. Because axis flips
// commute, the result equals flipping one axis at a time in any order.
//
// Each output position depends only on the immutable input, so the loop can
// be split across rayon workers without synchronization.

/// Per-dimension `(size, stride, reversed)` triples for one reverse call.
struct ReversePlan {
    dims: Vec<(usize, usize, bool)>,
}

impl ReversePlan {
    fn new(layout: &Layout, axes: &AxisSet) -> Self {
        let mask = axes.flip_mask(layout.rank());
        let dims = layout
            .dims()
            .iter()
            .zip(layout.strides())
            .zip(mask)
            .map(|((&size, &stride), flip)| (size, stride, flip))
            .collect();
        ReversePlan { dims }
    }

    /// Linear index of the input element that lands at output `linear`.
    #[inline]
    fn source_index(&self, linear: usize) -> usize {
        let mut rem = linear;
        let mut src = 0;
        for &(size, stride, flip) in &self.dims {
            let coord = rem / stride;
            rem %= stride;
            let coord = if flip { size - 1 - coord } else { coord };
            src += coord * stride;
        }
        src
    }
}

/// Reverse `input` along every axis in `axes` with the default config.
pub fn reverse<T: WithDType>(input: &DenseArray<T>, axes: &AxisSet) -> DenseArray<T> {
    reverse_with(input, axes, &ReverseConfig::default())
}

/// Reverse `input` along every axis in `axes`.
///
/// `axes` must already be resolved against `input.rank()`; no validation is
/// repeated here. The output has the same shape and dtype and a freshly
/// allocated buffer; the input is never modified.
///
/// # Panics
///
/// If `axes` holds an axis `>= input.rank()` (see [`AxisSet::flip_mask`]).
pub fn reverse_with<T: WithDType>(
    input: &DenseArray<T>,
    axes: &AxisSet,
    config: &ReverseConfig,
) -> DenseArray<T> {
    let plan = ReversePlan::new(input.layout(), axes);
    let src = input.as_slice();
    let elem_count = input.elem_count();
    let parallel = config.use_parallel(elem_count);
    debug!(
        dims = ?input.dims(),
        axes = ?axes.axes(),
        dtype = %T::DTYPE,
        elem_count,
        parallel,
        "dense reverse"
    );

    let data: Vec<T> = if parallel {
        (0..elem_count)
            .into_par_iter()
            .map(|i| src[plan.source_index(i)])
            .collect()
    } else {
        (0..elem_count).map(|i| src[plan.source_index(i)]).collect()
    };
    DenseArray::from_parts(data, input.layout().clone())
}

/// Dtype-erased form of [`reverse_with`].
pub fn reverse_tensor(input: &Tensor, axes: &AxisSet, config: &ReverseConfig) -> Tensor {
    map_dense!(input, a => reverse_with(a, axes, config))
}

impl<T: WithDType> Reverse for DenseArray<T> {
    fn reverse(&self, axes: &AxisSet, config: &ReverseConfig) -> Result<Self> {
        Ok(reverse_with(self, axes, config))
    }
}

impl Reverse for Tensor {
    fn reverse(&self, axes: &AxisSet, config: &ReverseConfig) -> Result<Self> {
        Ok(reverse_tensor(self, axes, config))
    }
}
