//! Line rasterization algorithms.
//!
//! Three selectable steppers produce the pixel sequence for a segment
//! between two integer endpoints:
//!
//! - **Naive**: real-valued slope interpolation along the x axis
//! - **DDA**: digital differential analyzer, one unit step per major-axis
//!   pixel
//! - **Bresenham**: integer-only decision-variable stepping
//!
//! Each stepper is a lazy, finite, non-restartable iterator over [`Point`]s.
//! Coordinates may be fractional (naive/DDA); the canvas truncates them at
//! write time.
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital
//!   plotter."

use crate::geometry::Point;

/// Selectable line rasterization algorithm.
///
/// Carried per-canvas as an explicit configuration value; there is no
/// process-wide selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineAlgorithm {
    /// Slope-intercept interpolation with an explicit vertical special case.
    Naive,
    /// Digital differential analyzer.
    #[default]
    Dda,
    /// Bresenham's integer algorithm, all octants.
    Bresenham,
}

impl LineAlgorithm {
    /// Trace the segment from `(x1, y1)` to `(x2, y2)` under this algorithm.
    #[must_use]
    pub fn trace(self, x1: i64, y1: i64, x2: i64, y2: i64) -> LineTrace {
        match self {
            Self::Naive => LineTrace::Naive(NaiveLine::new(x1, y1, x2, y2)),
            Self::Dda => LineTrace::Dda(Dda::new(x1, y1, x2, y2)),
            Self::Bresenham => LineTrace::Bresenham(Bresenham::new(x1, y1, x2, y2)),
        }
    }
}

/// Pixel sequence for a line segment, dispatched over the three steppers.
#[derive(Debug, Clone)]
pub enum LineTrace {
    /// Naive interpolation stepper.
    Naive(NaiveLine),
    /// DDA stepper.
    Dda(Dda),
    /// Bresenham stepper.
    Bresenham(Bresenham),
}

impl Iterator for LineTrace {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        match self {
            Self::Naive(it) => it.next(),
            Self::Dda(it) => it.next(),
            Self::Bresenham(it) => it.next(),
        }
    }
}

// ============================================================================
// Naive interpolation
// ============================================================================

/// Naive line stepper: unit steps in `x`, `y = y1 + dy*(x-x1)/dx`.
///
/// Steps toward `x2` exclusive, in either direction. Vertical input
/// (`x1 == x2`) is special-cased as a column of unit steps in `y`: the
/// interpolation divides by `dx`, so a vertical segment must never reach
/// the division.
#[derive(Debug, Clone)]
pub struct NaiveLine {
    x1: i64,
    y1: i64,
    dx: i64,
    dy: i64,
    step: i64,
    vertical: bool,
    i: i64,
    count: i64,
}

impl NaiveLine {
    /// Create a stepper for the segment `(x1, y1)` → `(x2, y2)`.
    #[must_use]
    pub fn new(x1: i64, y1: i64, x2: i64, y2: i64) -> Self {
        let dx = x2 - x1;
        let dy = y2 - y1;
        let vertical = dx == 0;
        let (count, step) = if vertical {
            // Column of pixels toward y2 (exclusive); a zero-length segment
            // still emits its start point.
            (dy.abs().max(1), if dy >= 0 { 1 } else { -1 })
        } else {
            (dx.abs(), dx.signum())
        };
        Self {
            x1,
            y1,
            dx,
            dy,
            step,
            vertical,
            i: 0,
            count,
        }
    }
}

impl Iterator for NaiveLine {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.i >= self.count {
            return None;
        }
        let p = if self.vertical {
            Point::new(self.x1 as f64, (self.y1 + self.i * self.step) as f64)
        } else {
            let x = self.x1 + self.i * self.step;
            let y = self.y1 as f64 + self.dy as f64 * (x - self.x1) as f64 / self.dx as f64;
            Point::new(x as f64, y)
        };
        self.i += 1;
        Some(p)
    }
}

// ============================================================================
// Digital differential analyzer
// ============================================================================

/// DDA line stepper.
///
/// `steps = max(|dx|, |dy|)`; per-step increments are `dx/steps` and
/// `dy/steps`, each of magnitude at most 1. Emits `steps + 1` real-valued
/// points from exactly `(x1, y1)` through exactly `(x2, y2)`, the
/// inclusive count, with the final point pinned to the integer endpoint so
/// accumulated float error cannot shift the last pixel.
#[derive(Debug, Clone)]
pub struct Dda {
    x: f64,
    y: f64,
    x_inc: f64,
    y_inc: f64,
    x2: i64,
    y2: i64,
    i: i64,
    steps: i64,
}

impl Dda {
    /// Create a stepper for the segment `(x1, y1)` → `(x2, y2)`.
    #[must_use]
    pub fn new(x1: i64, y1: i64, x2: i64, y2: i64) -> Self {
        let dx = x2 - x1;
        let dy = y2 - y1;
        let steps = dx.abs().max(dy.abs());
        let (x_inc, y_inc) = if steps == 0 {
            (0.0, 0.0)
        } else {
            (dx as f64 / steps as f64, dy as f64 / steps as f64)
        };
        Self {
            x: x1 as f64,
            y: y1 as f64,
            x_inc,
            y_inc,
            x2,
            y2,
            i: 0,
            steps,
        }
    }
}

impl Iterator for Dda {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.i > self.steps {
            return None;
        }
        let p = if self.i == self.steps {
            Point::new(self.x2 as f64, self.y2 as f64)
        } else {
            Point::new(self.x, self.y)
        };
        self.x += self.x_inc;
        self.y += self.y_inc;
        self.i += 1;
        Some(p)
    }
}

// ============================================================================
// Bresenham
// ============================================================================

/// Bresenham line stepper, fully general over all octants.
///
/// Steep segments are transposed and right-to-left segments endpoint-swapped
/// so stepping always proceeds left-to-right along the major axis; emitted
/// points are mapped back to the input octant. The starting point is emitted
/// first, then `x` advances by one per iteration with the decision variable
/// `pk = 2*dy - dx` choosing whether `y` also steps: `pk < 0` keeps `y` and
/// adds `2*dy`, otherwise `y` steps by `±1` and `pk` adds `2*(dy - dx)`.
/// Integer arithmetic throughout.
#[derive(Debug, Clone)]
pub struct Bresenham {
    x: i64,
    y: i64,
    x_end: i64,
    y_step: i64,
    dx: i64,
    dy: i64,
    pk: i64,
    steep: bool,
    done: bool,
}

impl Bresenham {
    /// Create a stepper for the segment `(x1, y1)` → `(x2, y2)`.
    #[must_use]
    pub fn new(x1: i64, y1: i64, x2: i64, y2: i64) -> Self {
        let steep = (y2 - y1).abs() > (x2 - x1).abs();
        let (x1, y1, x2, y2) = if steep {
            (y1, x1, y2, x2)
        } else {
            (x1, y1, x2, y2)
        };
        let (x1, y1, x2, y2) = if x1 > x2 {
            (x2, y2, x1, y1)
        } else {
            (x1, y1, x2, y2)
        };
        let dx = x2 - x1;
        let dy = (y2 - y1).abs();
        Self {
            x: x1,
            y: y1,
            x_end: x2,
            y_step: if y2 >= y1 { 1 } else { -1 },
            dx,
            dy,
            pk: 2 * dy - dx,
            steep,
            done: false,
        }
    }
}

impl Iterator for Bresenham {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.done {
            return None;
        }
        let p = if self.steep {
            Point::new(self.y as f64, self.x as f64)
        } else {
            Point::new(self.x as f64, self.y as f64)
        };
        if self.x == self.x_end {
            self.done = true;
        } else {
            if self.pk < 0 {
                self.pk += 2 * self.dy;
            } else {
                self.y += self.y_step;
                self.pk += 2 * (self.dy - self.dx);
            }
            self.x += 1;
        }
        Some(p)
    }
}

// ============================================================================
// Tests
// ============================================================================


// ============================================================================
// Property-based tests with proptest
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn pixel_set(trace: LineTrace) -> HashSet<(i64, i64)> {
        trace.map(Point::trunc).collect()
    }

    proptest! {
        /// DDA starts at the start point and lands within one pixel of the
        /// end point.
        #[test]
        fn prop_dda_endpoints(
            x1 in -100i64..100, y1 in -100i64..100,
            x2 in -100i64..100, y2 in -100i64..100,
        ) {
            let pts: Vec<Point> = LineAlgorithm::Dda.trace(x1, y1, x2, y2).collect();
            prop_assert!(!pts.is_empty());
            prop_assert_eq!(pts[0].trunc(), (x1, y1));
            let (lx, ly) = pts[pts.len() - 1].trunc();
            prop_assert!((lx - x2).abs() <= 1 && (ly - y2).abs() <= 1);
        }

        /// Bresenham starts at the start point and reaches the end point.
        #[test]
        fn prop_bresenham_endpoints(
            x1 in -100i64..100, y1 in -100i64..100,
            x2 in -100i64..100, y2 in -100i64..100,
        ) {
            let set = pixel_set(LineAlgorithm::Bresenham.trace(x1, y1, x2, y2));
            prop_assert!(set.contains(&(x1, y1)));
            prop_assert!(set.contains(&(x2, y2)));
        }

        /// Bresenham yields the same pixel set in both traversal directions.
        #[test]
        fn prop_bresenham_symmetric(
            x1 in -100i64..100, y1 in -100i64..100,
            x2 in -100i64..100, y2 in -100i64..100,
        ) {
            let forward = pixel_set(LineAlgorithm::Bresenham.trace(x1, y1, x2, y2));
            let backward = pixel_set(LineAlgorithm::Bresenham.trace(x2, y2, x1, y1));
            prop_assert_eq!(forward, backward);
        }

        /// Every stepper terminates with a bounded point count.
        #[test]
        fn prop_traces_are_finite(
            x1 in -100i64..100, y1 in -100i64..100,
            x2 in -100i64..100, y2 in -100i64..100,
        ) {
            let bound = ((x2 - x1).abs() + (y2 - y1).abs() + 2) as usize;
            for algo in [LineAlgorithm::Naive, LineAlgorithm::Dda, LineAlgorithm::Bresenham] {
                let count = algo.trace(x1, y1, x2, y2).count();
                prop_assert!(count <= bound, "{:?} emitted {} points", algo, count);
            }
        }
    }
}
