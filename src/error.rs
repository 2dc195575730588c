//! Error types for trazo operations.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trazo operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Degenerate geometry that cannot be rasterized (zero-length axis,
    /// negative radius).
    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(String),

    /// Pixel write outside the buffer.
    #[error("Pixel ({x}, {y}) out of bounds for {width}x{height} buffer")]
    OutOfBounds {
        /// X coordinate of the attempted write.
        x: i64,
        /// Y coordinate of the attempted write.
        y: i64,
        /// Buffer width.
        width: usize,
        /// Buffer height.
        height: usize,
    },

    /// Matrix product with incompatible shapes.
    #[error("Matrix dimension mismatch: left has {left_cols} columns, right has {right_rows} rows")]
    DimensionMismatch {
        /// Column count of the left operand.
        left_cols: usize,
        /// Row count of the right operand.
        right_rows: usize,
    },

    /// Image container with an extension this crate cannot read.
    #[error("Unsupported image format: .{extension}")]
    UnsupportedFormat {
        /// The offending file extension.
        extension: String,
    },

    /// Image file does not exist.
    #[error("File not found: {}", .path.display())]
    FileNotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// Image container signature does not match.
    #[error("Bad magic: not a P6 PPM image")]
    BadMagic,

    /// Declared but unimplemented operation.
    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),

    /// Invalid dimensions for a canvas.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: usize,
        /// Height value.
        height: usize,
    },
}
