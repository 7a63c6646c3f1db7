//! # Geometric Primitives
//!
//! Sizes, translation offsets, units, and the layout context that carries the
//! floating-point tolerance. Everything is measured in points (1/72 inch),
//! the native unit of page layout; other units convert on the way in.
//!
//! Layout arithmetic accumulates rounding error, so comparisons against
//! available space are epsilon-tolerant: a line of `100 + 10 + 100 + 10 + 100`
//! points must still count as fitting a 320pt page. The tolerance is not a
//! hidden constant — it travels in [`LayoutContext`], so a caller with
//! different precision needs can inject its own.

use serde::{Deserialize, Serialize};

/// A width/height pair in points.
///
/// Dimensions are non-negative; "unbounded" is representable as
/// `f64::INFINITY` and is how free-flow contexts (e.g. measuring a child
/// against the full remaining column) express "as tall as you need".
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// The zero size.
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    /// Unbounded in both dimensions.
    pub const MAX: Size = Size {
        width: f64::INFINITY,
        height: f64::INFINITY,
    };

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Finite and non-negative in both dimensions. Anything else coming out
    /// of a child measurement is defective input, not a layout outcome.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite()
            && self.height.is_finite()
            && self.width >= 0.0
            && self.height >= 0.0
    }

    /// Whether this size fits inside `container`, absorbing up to `epsilon`
    /// of floating rounding per dimension.
    pub fn fits_within(&self, container: Size, epsilon: f64) -> bool {
        self.width <= container.width + epsilon && self.height <= container.height + epsilon
    }

    /// Component-wise comparison with tolerance.
    pub fn approx_eq(&self, other: Size, epsilon: f64) -> bool {
        (self.width - other.width).abs() <= epsilon
            && (self.height - other.height).abs() <= epsilon
    }
}

/// A translation offset applied to a canvas origin.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// The identity offset.
    pub const ZERO: Position = Position { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The equal-and-opposite offset, used to undo a translate after drawing.
    pub fn reverse(&self) -> Position {
        Position {
            x: -self.x,
            y: -self.y,
        }
    }

    /// Component-wise comparison with tolerance.
    pub fn approx_eq(&self, other: Position, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }
}

/// Unit of measure for configuration input. Point is the native unit;
/// everything else is a multiplication on the way in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Unit {
    #[default]
    Point,
    Millimetre,
    Centimetre,
    Inch,
    Feet,
    /// One thousandth of an inch.
    Mil,
}

impl Unit {
    /// Convert a value in this unit to points.
    pub fn to_points(self, value: f64) -> f64 {
        let points_per_unit = match self {
            Unit::Point => 1.0,
            Unit::Millimetre => 72.0 / 25.4,
            Unit::Centimetre => 72.0 / 2.54,
            Unit::Inch => 72.0,
            Unit::Feet => 72.0 * 12.0,
            Unit::Mil => 72.0 / 1000.0,
        };
        value * points_per_unit
    }
}

/// Ambient parameters threaded through every measure and draw call.
///
/// Currently just the floating-point tolerance used when comparing against
/// available space. Injectable rather than global so that two trees with
/// different precision requirements can coexist in one process.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutContext {
    /// Tolerance absorbed by fit comparisons, in points.
    pub epsilon: f64,
}

impl LayoutContext {
    /// The default tolerance: one thousandth of a point.
    pub const DEFAULT_EPSILON: f64 = 0.001;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_epsilon(epsilon: f64) -> Self {
        Self { epsilon }
    }
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self {
            epsilon: Self::DEFAULT_EPSILON,
        }
    }
}
