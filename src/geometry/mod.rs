//! Geometric primitives for slide layout.
//!
//! All layout math happens on a normalized 16:9 canvas measured in inches
//! (10.0 x 5.625) with a top-left origin. Export adapters convert to their
//! native units (points, EMU) when realizing the instruction stream.

/// A 2D point in layout space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Create a new point.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A rectangle in layout space, top-left anchored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// X coordinate of top-left corner
    pub x: f32,
    /// Y coordinate of top-left corner
    pub y: f32,
    /// Width of rectangle
    pub width: f32,
    /// Height of rectangle
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle from position and dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// use slidesmith::geometry::Rect;
    ///
    /// let rect = Rect::new(0.5, 0.5625, 4.5, 4.5);
    /// assert_eq!(rect.right(), 5.0);
    /// ```
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Get the right edge x-coordinate.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Get the bottom edge y-coordinate.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Get the center point of the rectangle.
    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }
}

/// How an image is scaled into its target rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFit {
    /// Scale to fit entirely inside the rectangle, preserving aspect ratio,
    /// centered on both axes.
    Contain,
    /// Scale to fill the rectangle, preserving aspect ratio; overflow is
    /// cropped by the rectangle.
    Cover,
    /// Stretch to the exact rectangle, ignoring aspect ratio.
    Exact,
}

/// Resolve the placement rectangle for an image of `pixel_w` x `pixel_h`
/// pixels inside `target`, according to `fit`.
///
/// Both adapters place images through this one function so scaling math
/// cannot drift between output formats.
pub fn fit_rect(pixel_w: u32, pixel_h: u32, target: Rect, fit: ImageFit) -> Rect {
    if pixel_w == 0 || pixel_h == 0 {
        return target;
    }
    let aspect = pixel_w as f32 / pixel_h as f32;
    let target_aspect = target.width / target.height;

    match fit {
        ImageFit::Exact => target,
        ImageFit::Contain => {
            let (w, h) = if aspect > target_aspect {
                (target.width, target.width / aspect)
            } else {
                (target.height * aspect, target.height)
            };
            Rect::new(
                target.x + (target.width - w) / 2.0,
                target.y + (target.height - h) / 2.0,
                w,
                h,
            )
        },
        ImageFit::Cover => {
            let (w, h) = if aspect > target_aspect {
                (target.height * aspect, target.height)
            } else {
                (target.width, target.width / aspect)
            };
            Rect::new(
                target.x + (target.width - w) / 2.0,
                target.y + (target.height - h) / 2.0,
                w,
                h,
            )
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(0.5, 0.5625, 4.5, 4.5);
        assert_eq!(r.right(), 5.0);
        assert_eq!(r.bottom(), 5.0625);
    }

    #[test]
    fn test_rect_center() {
        let r = Rect::new(0.0, 0.0, 10.0, 5.625);
        let c = r.center();
        assert_eq!(c.x, 5.0);
        assert_eq!(c.y, 2.8125);
    }

    #[test]
    fn test_fit_exact_ignores_aspect() {
        let target = Rect::new(0.0, 0.0, 10.0, 5.625);
        let placed = fit_rect(400, 400, target, ImageFit::Exact);
        assert_eq!(placed, target);
    }

    #[test]
    fn test_fit_contain_wide_image() {
        // 2:1 image in a square box: full width, half height, centered.
        let target = Rect::new(0.5, 0.5, 4.0, 4.0);
        let placed = fit_rect(200, 100, target, ImageFit::Contain);
        assert_eq!(placed.width, 4.0);
        assert_eq!(placed.height, 2.0);
        assert_eq!(placed.x, 0.5);
        assert_eq!(placed.y, 1.5);
    }

    #[test]
    fn test_fit_contain_tall_image() {
        let target = Rect::new(0.0, 0.0, 4.0, 4.0);
        let placed = fit_rect(100, 200, target, ImageFit::Contain);
        assert_eq!(placed.width, 2.0);
        assert_eq!(placed.height, 4.0);
        assert_eq!(placed.x, 1.0);
    }

    #[test]
    fn test_fit_cover_overflows_narrow_axis() {
        let target = Rect::new(0.0, 0.0, 4.0, 4.0);
        let placed = fit_rect(200, 100, target, ImageFit::Cover);
        assert_eq!(placed.height, 4.0);
        assert_eq!(placed.width, 8.0);
        assert_eq!(placed.x, -2.0);
    }

    #[test]
    fn test_fit_degenerate_pixels_falls_back_to_target() {
        let target = Rect::new(1.0, 1.0, 2.0, 2.0);
        assert_eq!(fit_rect(0, 100, target, ImageFit::Contain), target);
    }
}
