use tracing::trace;

use crate::error::{Error, Result};

// Axis resolution — raw `axis` attribute → validated AxisSet
//
// The `axis` attribute is an ordered list of signed integers. Negative
// values count from the end (Python-style), so for rank r:
//
//   valid raw range:  -r <= a < r
//   normalized:       a' = a + r   when a < 0
//
// Examples (rank 3):
//   [0, 2]   → {0, 2}
//   [-1]     → {2}
//   [1, -2]  → {1}        duplicates collapse, the axis is reversed once
//   [3]      → OutOfRange
//   []       → InvalidArgument
//
// Sequence mode has no static rank: the only accepted attribute is [0].

/// A validated, non-empty set of axes to reverse.
///
/// Axes are normalized to `[0, rank)`, sorted, and deduplicated: an axis is
/// reversed iff it appears in the set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AxisSet {
    axes: Vec<usize>,
}

impl AxisSet {
    /// Validate and normalize `raw_axes` against `rank`. See [`resolve`].
    pub fn resolve(raw_axes: &[i64], rank: usize) -> Result<Self> {
        resolve(raw_axes, rank)
    }

    /// The set `{0}`, the only axis set a tensor sequence accepts.
    pub fn sequence() -> Self {
        AxisSet { axes: vec![0] }
    }

    /// The normalized axes in ascending order.
    pub fn axes(&self) -> &[usize] {
        &self.axes
    }

    pub fn contains(&self, axis: usize) -> bool {
        self.axes.binary_search(&axis).is_ok()
    }

    pub fn len(&self) -> usize {
        self.axes.len()
    }

    /// Always false: resolution rejects empty attributes.
    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    /// Whether this is exactly `{0}`.
    pub fn is_sequence_axis(&self) -> bool {
        self.axes.len() == 1 && self.axes[0] == 0
    }

    /// Per-dimension flip flags for an array of the given rank.
    ///
    /// # Panics
    ///
    /// If the set holds an axis `>= rank`, i.e. it was resolved for a
    /// different rank.
    pub fn flip_mask(&self, rank: usize) -> Vec<bool> {
        let mut mask = vec![false; rank];
        for &axis in &self.axes {
            assert!(axis < rank, "axis {axis} not valid for rank {rank}");
            mask[axis] = true;
        }
        mask
    }
}

/// Normalize a single raw axis against `rank`.
///
/// Fails with [`Error::OutOfRange`] unless `-rank <= axis < rank`.
pub fn normalize_axis(axis: i64, rank: usize) -> Result<usize> {
    let r = rank as i64;
    if axis >= r || axis < -r {
        return Err(Error::OutOfRange { axis, rank });
    }
    let normalized = if axis < 0 { axis + r } else { axis };
    Ok(normalized as usize)
}

/// Validate and normalize a raw `axis` attribute against a known rank.
///
/// Fails with [`Error::InvalidArgument`] if the list is empty and with
/// [`Error::OutOfRange`] on the first value outside `[-rank, rank)`.
pub fn resolve(raw_axes: &[i64], rank: usize) -> Result<AxisSet> {
    if raw_axes.is_empty() {
        return Err(Error::invalid_argument("'axis' can not be empty"));
    }
    let mut axes = raw_axes
        .iter()
        .map(|&a| normalize_axis(a, rank))
        .collect::<Result<Vec<_>>>()?;
    axes.sort_unstable();
    axes.dedup();
    if axes.len() != raw_axes.len() {
        trace!(?raw_axes, ?axes, "collapsed duplicate reverse axes");
    }
    Ok(AxisSet { axes })
}

/// Validate the `axis` attribute of a sequence-mode reverse.
///
/// A tensor sequence can only be reversed along its step dimension, so the
/// attribute must be exactly `[0]`. No rank is involved.
pub fn resolve_sequence(raw_axes: &[i64]) -> Result<AxisSet> {
    if raw_axes.len() != 1 {
        return Err(Error::invalid_argument(format!(
            "sequence reversal requires exactly one axis equal to 0, but received {} axes",
            raw_axes.len()
        )));
    }
    if raw_axes[0] != 0 {
        return Err(Error::invalid_argument(format!(
            "sequence reversal requires exactly one axis equal to 0, but received {}",
            raw_axes[0]
        )));
    }
    Ok(AxisSet::sequence())
}
