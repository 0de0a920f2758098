// Static shapes — What shape inference knows before any data flows
//
// At graph-construction time a variable's shape may be only partly known:
//   - Batch size: bound per run
//   - Sequence length: varies per input
//
// SymbolicShape keeps the rank fixed and lets each dimension be concrete,
// named, or fully dynamic. Reverse inference needs only the rank (to
// validate axes) and copies the whole pattern to the output unchanged.
//
//   [Batch, 5, ?]  --reverse axis=[-1]-->  [Batch, 5, ?]

use std::fmt;

use crate::shape::Shape;

/// A dimension that can be concrete, symbolic, or fully dynamic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SymDim {
    /// Known at graph-construction time.
    Fixed(usize),
    /// Named symbolic dimension: "Batch", "SeqLen".
    Symbolic(String),
    /// Unknown until runtime.
    Dynamic,
}

impl SymDim {
    pub fn fixed(n: usize) -> Self {
        SymDim::Fixed(n)
    }

    pub fn symbolic(name: impl Into<String>) -> Self {
        SymDim::Symbolic(name.into())
    }

    pub fn dynamic() -> Self {
        SymDim::Dynamic
    }
}

impl fmt::Display for SymDim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymDim::Fixed(n) => write!(f, "{n}"),
            SymDim::Symbolic(s) => write!(f, "{s}"),
            SymDim::Dynamic => write!(f, "?"),
        }
    }
}

impl From<usize> for SymDim {
    fn from(n: usize) -> Self {
        SymDim::Fixed(n)
    }
}

impl From<&str> for SymDim {
    fn from(s: &str) -> Self {
        SymDim::Symbolic(s.to_string())
    }
}

/// A shape pattern with a known rank and fixed, symbolic or dynamic dims.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SymbolicShape {
    dims: Vec<SymDim>,
}

impl SymbolicShape {
    pub fn new(dims: Vec<SymDim>) -> Self {
        Self { dims }
    }

    /// Create a fully-fixed symbolic shape from a concrete shape.
    pub fn from_shape(shape: &Shape) -> Self {
        Self {
            dims: shape.dims().iter().map(|&d| SymDim::Fixed(d)).collect(),
        }
    }

    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    pub fn dims(&self) -> &[SymDim] {
        &self.dims
    }
}

impl fmt::Display for SymbolicShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, d) in self.dims.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{d}")?;
        }
        write!(f, "]")
    }
}

impl From<Vec<SymDim>> for SymbolicShape {
    fn from(dims: Vec<SymDim>) -> Self {
        Self::new(dims)
    }
}

impl From<Shape> for SymbolicShape {
    fn from(shape: Shape) -> Self {
        Self::from_shape(&shape)
    }
}
