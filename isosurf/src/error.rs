//! Module containing the universal error type
use thiserror::Error;

/// Universal error type for isosurface extraction
#[derive(Error, Debug)]
pub enum Error {
    /// Sample array length does not match the sampling grid
    #[error("sample count ({0}) does not match grid size ({1})")]
    BadSampleCount(usize, usize),

    /// The sampling grid has more samples than fit in memory
    #[error("grid size overflows `usize`")]
    GridTooLarge,

    /// Sample spacing must be finite and positive
    #[error("invalid spacing {1} on axis {0}; must be finite and positive")]
    BadSpacing(usize, f64),

    /// Sample origin must be finite
    #[error("invalid origin {1} on axis {0}; must be finite")]
    BadOrigin(usize, f64),

    /// Triangle index does not fit in the packed output format
    #[error("triangle index {0} does not fit in a `u32`")]
    IndexOverflow(usize),

    /// IO error; see inner code for details
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}
