//! Rasterization algorithms.
//!
//! Pure pixel-stepping functions for geometric primitives: nothing here
//! touches a buffer, each algorithm just produces the point sequence for an
//! outline and leaves compositing to the canvas.
//!
//! # Algorithms
//!
//! - **Naive / DDA / Bresenham lines**: three selectable steppers
//! - **Midpoint circle**: integer stepping with 8-way symmetry
//! - **Two-region midpoint ellipse**: decision-variable stepping with 4-way
//!   symmetry
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital
//!   plotter."

mod circle;
mod ellipse;
mod line;

pub use circle::circle_points;
pub use ellipse::ellipse_points;
pub use line::{Bresenham, Dda, LineAlgorithm, LineTrace, NaiveLine};
