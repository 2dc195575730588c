//! Drawable shapes.
//!
//! A closed sum type over the primitives the canvas understands. Matching
//! on [`Shape`] is exhaustive, so adding a variant forces every visitor
//! (rasterization, transform extraction) to handle it at compile time.

use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::raster::{circle_points, ellipse_points, LineAlgorithm};
use crate::transform::AffineTransform;

/// A drawable primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Straight segment between two endpoints.
    Line {
        /// Start point.
        start: Point,
        /// End point.
        end: Point,
    },
    /// Circle outline.
    Circle {
        /// Center point.
        center: Point,
        /// Radius in pixels.
        radius: i64,
    },
    /// Axis-aligned ellipse outline.
    Ellipse {
        /// Center point.
        center: Point,
        /// Horizontal semi-axis.
        rx: i64,
        /// Vertical semi-axis.
        ry: i64,
    },
    /// Composite path of sub-shapes, rendered in order.
    Path(Path),
}

impl Shape {
    /// Line segment from `(x1, y1)` to `(x2, y2)`.
    #[must_use]
    pub fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::Line {
            start: Point::new(x1, y1),
            end: Point::new(x2, y2),
        }
    }

    /// Circle centered at `(cx, cy)`.
    #[must_use]
    pub fn circle(cx: f64, cy: f64, radius: i64) -> Self {
        Self::Circle {
            center: Point::new(cx, cy),
            radius,
        }
    }

    /// Ellipse centered at `(cx, cy)` with semi-axes `rx`, `ry`.
    #[must_use]
    pub fn ellipse(cx: f64, cy: f64, rx: i64, ry: i64) -> Self {
        Self::Ellipse {
            center: Point::new(cx, cy),
            rx,
            ry,
        }
    }

    /// Produce the outline pixel sequence for this shape.
    ///
    /// Control points are truncated toward zero to integer coordinates at
    /// this boundary; the steppers themselves may still emit fractional
    /// points (naive/DDA), which the canvas truncates at write time. Lines
    /// inside a [`Path`] also use `algo`.
    #[must_use]
    pub fn rasterize(&self, algo: LineAlgorithm) -> Vec<Point> {
        match self {
            Self::Line { start, end } => {
                let (x1, y1) = start.trunc();
                let (x2, y2) = end.trunc();
                algo.trace(x1, y1, x2, y2).collect()
            }
            Self::Circle { center, radius } => {
                let (cx, cy) = center.trunc();
                circle_points(cx, cy, *radius)
            }
            Self::Ellipse { center, rx, ry } => {
                let (cx, cy) = center.trunc();
                ellipse_points(cx, cy, *rx, *ry)
            }
            Self::Path(path) => path
                .shapes
                .iter()
                .flat_map(|s| s.rasterize(algo))
                .collect(),
        }
    }

    /// A copy of this shape with its control points passed through `t`.
    ///
    /// Only control points move: line endpoints, circle and ellipse
    /// centers. The circle radius and ellipse semi-axes are deliberately
    /// not transformed, so a non-uniform scale translates a circle without
    /// distorting it. Paths transform each sub-shape recursively.
    #[must_use]
    pub fn transformed(&self, t: &AffineTransform) -> Self {
        match self {
            Self::Line { start, end } => Self::Line {
                start: t.apply_point(*start),
                end: t.apply_point(*end),
            },
            Self::Circle { center, radius } => Self::Circle {
                center: t.apply_point(*center),
                radius: *radius,
            },
            Self::Ellipse { center, rx, ry } => Self::Ellipse {
                center: t.apply_point(*center),
                rx: *rx,
                ry: *ry,
            },
            Self::Path(path) => Self::Path(Path {
                shapes: path.shapes.iter().map(|s| s.transformed(t)).collect(),
                cursor: path.cursor,
            }),
        }
    }
}

/// Composite path built through a current-point cursor.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    shapes: Vec<Shape>,
    cursor: Option<Point>,
}

impl Path {
    /// Create an empty path with no current point.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the current point without emitting a segment.
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.cursor = Some(Point::new(x, y));
    }

    /// Append a line segment from the current point to `(x, y)` and advance
    /// the current point.
    ///
    /// With no current point set, this behaves like
    /// [`move_to`](Self::move_to).
    pub fn line_to(&mut self, x: f64, y: f64) {
        let end = Point::new(x, y);
        if let Some(start) = self.cursor {
            self.shapes.push(Shape::Line { start, end });
        }
        self.cursor = Some(end);
    }

    /// Append a quadratic curve segment.
    ///
    /// Curve segments are declared in the drawing model but not
    /// implemented; this always returns [`Error::NotImplemented`].
    pub fn curve_to(&mut self, _cx: f64, _cy: f64, _x: f64, _y: f64) -> Result<()> {
        Err(Error::NotImplemented("path curve segments"))
    }

    /// The sub-shapes accumulated so far, in insertion order.
    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Whether the path contains no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
