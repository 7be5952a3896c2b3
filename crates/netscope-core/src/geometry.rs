//! Geometric primitives for diagram layout and positioning.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangular bounding box defined by minimum and maximum coordinates
//! - [`Insets`] - Padding/margin values for four sides
//! - [`Projection`] - Maps logical canvas coordinates onto pixel space
//!
//! # Coordinate Systems
//!
//! Two coordinate systems meet here. Component placements live on a *logical*
//! canvas where Y grows upward, the way a chart axis reads. Rendered output
//! uses SVG pixel space:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! [`Projection`] converts between the two, flipping the Y axis.

/// A 2D point.
///
/// # Examples
///
/// ```
/// # use netscope_core::geometry::Point;
/// let p = Point::new(10.0, 20.0);
/// assert_eq!(p.x(), 10.0);
/// assert_eq!(p.y(), 20.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the given coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate
    pub fn y(self) -> f32 {
        self.y
    }
}

/// Width and height of an element.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn width(self) -> f32 {
        self.width
    }

    pub fn height(self) -> f32 {
        self.height
    }
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates bounds from explicit corner coordinates.
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn min_x(self) -> f32 {
        self.min_x
    }

    pub fn min_y(self) -> f32 {
        self.min_y
    }

    pub fn max_x(self) -> f32 {
        self.max_x
    }

    pub fn max_y(self) -> f32 {
        self.max_y
    }

    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Returns `true` if the point lies inside or on the edge of the bounds.
    pub fn contains(self, point: Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }

    /// Returns new bounds shrunk by the given insets.
    pub fn inset(self, insets: Insets) -> Self {
        Self {
            min_x: self.min_x + insets.left,
            min_y: self.min_y + insets.top,
            max_x: self.max_x - insets.right,
            max_y: self.max_y - insets.bottom,
        }
    }
}

/// Padding or margin on four sides.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

impl Insets {
    /// Creates new insets with specified values for each side
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn top(self) -> f32 {
        self.top
    }

    pub fn right(self) -> f32 {
        self.right
    }

    pub fn bottom(self) -> f32 {
        self.bottom
    }

    pub fn left(self) -> f32 {
        self.left
    }
}

/// Linear mapping from a logical, Y-up domain onto a pixel rectangle.
///
/// The domain's `min_y` lands on the bottom edge of the target and `max_y` on
/// the top edge.
///
/// # Examples
///
/// ```
/// # use netscope_core::geometry::{Bounds, Point, Projection};
/// let projection = Projection::new(
///     Bounds::new(0.0, 0.0, 10.0, 10.0),
///     Bounds::new(0.0, 0.0, 100.0, 100.0),
/// );
/// let p = projection.project(Point::new(10.0, 10.0));
/// assert_eq!(p.x(), 100.0);
/// assert_eq!(p.y(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    domain: Bounds,
    target: Bounds,
}

impl Projection {
    /// Creates a projection. Both rectangles must have a non-zero extent.
    pub fn new(domain: Bounds, target: Bounds) -> Self {
        Self { domain, target }
    }

    /// The pixel rectangle that the domain is mapped onto.
    pub fn target(&self) -> Bounds {
        self.target
    }

    /// Maps a logical point to pixel space.
    pub fn project(&self, point: Point) -> Point {
        let tx = (point.x - self.domain.min_x) / self.domain.width();
        let ty = (point.y - self.domain.min_y) / self.domain.height();
        Point::new(
            self.target.min_x + tx * self.target.width(),
            self.target.max_y - ty * self.target.height(),
        )
    }
}
