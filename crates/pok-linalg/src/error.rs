use std::fmt;

/// Extent of an operand reported by [`LinalgError::DimensionMismatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dim {
    Len(usize),
    Shape(usize, usize),
}

impl fmt::Display for Dim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dim::Len(n) => write!(f, "length {}", n),
            Dim::Shape(rows, cols) => write!(f, "shape {}x{}", rows, cols),
        }
    }
}

/// Errors raised by matrix, vector and interpolation operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LinalgError {
    /// Operands that must agree in length or shape do not.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: Dim, found: Dim },

    /// A row has a different length than the first row.
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("matrix operand is missing")]
    NilOperand,

    #[error("index cannot be negative (got {0})")]
    IndexNegative(isize),

    #[error("index {index} is out of range (bound {bound})")]
    IndexOutOfRange { index: usize, bound: usize },

    /// Inner dimensions disagree for a product or a left division.
    #[error("incompatible dimensions {left:?} and {right:?}")]
    IncompatibleDimensions {
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("cannot invert non-square {rows}x{cols} matrix")]
    NotSquare { rows: usize, cols: usize },

    /// No usable pivot could be found in column `col`.
    #[error("matrix is singular (no pivot in column {col})")]
    Singular { col: usize },

    #[error("cannot divide by zero")]
    DivideByZero,

    /// Two samples share the same x value.
    #[error("x value {0} appears more than once")]
    DuplicateAbscissa(f64),

    #[error("value {value} is below the fitted range (min {min})")]
    BelowRange { value: f64, min: f64 },

    #[error("value {value} is above the fitted range (max {max})")]
    AboveRange { value: f64, max: f64 },

    #[error("cannot interpolate at non-finite value {0}")]
    NotFinite(f64),

    /// Validation requested before any sample was fitted.
    #[error("no data available for interpolation")]
    NoData,
}

pub type Result<T> = std::result::Result<T, LinalgError>;
