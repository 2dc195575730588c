//! Deferred-mode drawing canvas.
//!
//! The canvas owns a row-major pixel buffer (`index = y * width + x`,
//! origin top-left) and runs two render modes side by side:
//!
//! - **Immediate**: [`fill_rect`](Canvas::fill_rect) and
//!   [`fill`](Canvas::fill) write pixels directly, with no transform.
//! - **Deferred**: the `draw_*` methods pair a [`Shape`] with the current
//!   paint color and append it to a submission list;
//!   [`finalize`](Canvas::finalize) transforms, rasterizes and composites
//!   every submission in insertion order. Later submissions overwrite
//!   earlier ones at overlapping pixels: last write wins, no blending.

use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::raster::LineAlgorithm;
use crate::shape::Shape;
use crate::transform::AffineTransform;

/// A deferred draw call: one shape and the paint color it was submitted
/// with.
#[derive(Debug, Clone)]
struct Submission {
    shape: Shape,
    color: Rgb,
}

/// Owner of the pixel buffer and the deferred rendering pipeline.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
    paint: Rgb,
    transform: Option<AffineTransform>,
    submissions: Vec<Submission>,
    line_algorithm: LineAlgorithm,
}

impl Canvas {
    /// Create a canvas with a black pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            pixels: vec![Rgb::BLACK; width * height],
            paint: Rgb::BLACK,
            transform: None,
            submissions: Vec::new(),
            line_algorithm: LineAlgorithm::default(),
        })
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// The pixel buffer, row-major.
    #[must_use]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// The current paint color.
    #[must_use]
    pub const fn color(&self) -> Rgb {
        self.paint
    }

    /// Set the paint color used by subsequent draw calls.
    pub fn set_color(&mut self, color: Rgb) {
        self.paint = color;
    }

    /// The line algorithm used for line-shaped submissions.
    #[must_use]
    pub const fn line_algorithm(&self) -> LineAlgorithm {
        self.line_algorithm
    }

    /// Select the line algorithm for this canvas.
    pub fn set_line_algorithm(&mut self, algo: LineAlgorithm) {
        self.line_algorithm = algo;
    }

    /// Attach the transform applied to control points at finalize time.
    pub fn set_transform(&mut self, transform: AffineTransform) {
        self.transform = Some(transform);
    }

    /// Detach the active transform.
    pub fn clear_transform(&mut self) {
        self.transform = None;
    }

    /// The color at `(x, y)`, or `None` outside the buffer.
    #[must_use]
    pub fn get_pixel(&self, x: i64, y: i64) -> Option<Rgb> {
        self.index_of(x, y).map(|idx| self.pixels[idx])
    }

    /// Write one pixel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] for coordinates outside the buffer;
    /// nothing is written.
    pub fn set_pixel(&mut self, x: i64, y: i64, color: Rgb) -> Result<()> {
        match self.index_of(x, y) {
            Some(idx) => {
                self.pixels[idx] = color;
                Ok(())
            }
            None => Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            }),
        }
    }

    // ========================================================================
    // Immediate mode
    // ========================================================================

    /// Fill a rectangle with the current paint color, immediately.
    ///
    /// The rectangle is clipped to the buffer: every written pixel satisfies
    /// `0 <= x < width` and `0 <= y < height`. Degenerate or fully
    /// off-buffer rectangles write nothing.
    pub fn fill_rect(&mut self, x: i64, y: i64, w: i64, h: i64) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + w).min(self.width as i64);
        let y1 = (y + h).min(self.height as i64);
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        for row in y0..y1 {
            let start = row as usize * self.width;
            for col in x0..x1 {
                self.pixels[start + col as usize] = self.paint;
            }
        }
    }

    /// Clear the whole buffer to `color`.
    ///
    /// Also resets the paint color to `color`, matching the historical
    /// clear-then-draw call sequence this canvas supports.
    pub fn fill(&mut self, color: Rgb) {
        self.paint = color;
        self.fill_rect(0, 0, self.width as i64, self.height as i64);
    }

    // ========================================================================
    // Deferred mode
    // ========================================================================

    /// Defer a line from `(x1, y1)` to `(x2, y2)`.
    pub fn draw_line(&mut self, x1: i64, y1: i64, x2: i64, y2: i64) {
        self.draw(Shape::line(x1 as f64, y1 as f64, x2 as f64, y2 as f64));
    }

    /// Defer the four edges of a rectangle outline.
    pub fn draw_rect(&mut self, x: i64, y: i64, w: i64, h: i64) {
        self.draw_line(x, y, x + w, y);
        self.draw_line(x, y, x, y + h);
        self.draw_line(x, y + h, x + w, y + h);
        self.draw_line(x + w, y, x + w, y + h);
    }

    /// Defer a circle outline.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateGeometry`] for a negative radius.
    pub fn draw_circle(&mut self, cx: i64, cy: i64, radius: i64) -> Result<()> {
        if radius < 0 {
            return Err(Error::DegenerateGeometry(format!(
                "negative circle radius {radius}"
            )));
        }
        self.draw(Shape::circle(cx as f64, cy as f64, radius));
        Ok(())
    }

    /// Defer an ellipse outline.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateGeometry`] unless both semi-axes are
    /// positive.
    pub fn draw_ellipse(&mut self, cx: i64, cy: i64, rx: i64, ry: i64) -> Result<()> {
        if rx <= 0 || ry <= 0 {
            return Err(Error::DegenerateGeometry(format!(
                "nonpositive ellipse semi-axes {rx}x{ry}"
            )));
        }
        self.draw(Shape::ellipse(cx as f64, cy as f64, rx, ry));
        Ok(())
    }

    /// Defer an arbitrary shape with the current paint color.
    pub fn draw(&mut self, shape: Shape) {
        self.submissions.push(Submission {
            shape,
            color: self.paint,
        });
    }

    /// Number of pending submissions.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.submissions.len()
    }

    /// Rasterize every pending submission into the pixel buffer.
    ///
    /// Submissions are processed in insertion order; at overlapping pixels
    /// the last submission wins. If a transform is attached, each shape's
    /// control points are passed through it first, on a transformed copy,
    /// so the submission list is untouched and calling `finalize` again
    /// reproduces the same buffer. Points falling outside the buffer are
    /// skipped and logged, never fatal: one stray shape cannot abort the
    /// rest of the list.
    pub fn finalize(&mut self) {
        let submissions = self.submissions.clone();
        for submission in &submissions {
            let shape = match &self.transform {
                Some(t) => submission.shape.transformed(t),
                None => submission.shape.clone(),
            };
            for point in shape.rasterize(self.line_algorithm) {
                self.write_point(point, submission.color);
            }
        }
    }

    /// Truncate a rasterized point to pixel coordinates and write it,
    /// skipping coordinates outside the buffer.
    fn write_point(&mut self, point: Point, color: Rgb) {
        let (x, y) = point.trunc();
        match self.index_of(x, y) {
            Some(idx) => self.pixels[idx] = color,
            None => log::debug!(
                "skipping out-of-bounds pixel ({x}, {y}) on {}x{} canvas",
                self.width,
                self.height
            ),
        }
    }

    // ========================================================================
    // Fills
    // ========================================================================

    /// 4-connected boundary fill from `(x, y)`.
    ///
    /// Flood outward over every pixel whose color is neither `fill_color`
    /// nor `boundary_color`, setting each to `fill_color`. Runs on an
    /// explicit work stack, not recursion: each fill consumes one
    /// non-fill-colored pixel, so fills are bounded by `width * height` and
    /// the stack by four pushes per fill. Out-of-bounds seeds are a no-op.
    pub fn boundary_fill(&mut self, x: i64, y: i64, fill_color: Rgb, boundary_color: Rgb) {
        let mut stack = vec![(x, y)];
        while let Some((px, py)) = stack.pop() {
            let Some(idx) = self.index_of(px, py) else {
                continue;
            };
            let current = self.pixels[idx];
            if current != fill_color && current != boundary_color {
                self.pixels[idx] = fill_color;
                stack.push((px + 1, py));
                stack.push((px - 1, py));
                stack.push((px, py + 1));
                stack.push((px, py - 1));
            }
        }
    }

    /// Color-replacing flood fill.
    ///
    /// Declared in the drawing model but not implemented.
    ///
    /// # Errors
    ///
    /// Always returns [`Error::NotImplemented`].
    pub fn flood_fill(
        &mut self,
        _x: i64,
        _y: i64,
        _fill_color: Rgb,
        _replace_color: Rgb,
    ) -> Result<()> {
        Err(Error::NotImplemented("color-replace flood fill"))
    }

    /// Buffer index for `(x, y)`, or `None` outside the buffer.
    fn index_of(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }
}
