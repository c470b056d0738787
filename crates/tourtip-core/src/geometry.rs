#![forbid(unsafe_code)]

//! Geometric primitives for page-space placement.
//!
//! All values are CSS pixels relative to the top-left corner of the page
//! (not the viewport). Coordinates may be negative: nothing in this crate
//! clamps to the visible area.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Bounding box of a target element, in page coordinates.
///
/// This is a snapshot taken by the caller right before a placement call.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    /// Top edge.
    pub top: f64,
    /// Bottom edge.
    pub bottom: f64,
    /// Left edge.
    pub left: f64,
    /// Right edge.
    pub right: f64,
}

impl Position {
    /// Create a position from its four edges.
    #[inline]
    pub const fn new(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// Create a position from an origin and a size.
    #[inline]
    pub fn from_rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(y, y + height, x, x + width)
    }

    /// Horizontal distance between the left and right edges.
    #[inline]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Vertical distance between the top and bottom edges.
    #[inline]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Horizontal midpoint.
    #[inline]
    pub fn x_center(&self) -> f64 {
        self.left + self.width() / 2.0
    }

    /// Vertical midpoint.
    #[inline]
    pub fn y_center(&self) -> f64 {
        self.top + self.height() / 2.0
    }
}

/// Measured size of the popover node.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Viewport and document dimensions.
///
/// `client_*` describe the visible client area and drive corner placement;
/// `full_height` is the whole scrollable document and drives auto placement.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PageSize {
    pub client_width: f64,
    pub client_height: f64,
    pub full_height: f64,
}

impl PageSize {
    /// Create a page size.
    #[inline]
    pub const fn new(client_width: f64, client_height: f64, full_height: f64) -> Self {
        Self {
            client_width,
            client_height,
            full_height,
        }
    }

    /// Page whose document is exactly as tall as its client area.
    #[inline]
    pub const fn uniform(width: f64, height: f64) -> Self {
        Self::new(width, height, height)
    }

    /// Full document extent as a size.
    #[inline]
    pub const fn full_size(&self) -> Size {
        Size::new(self.client_width, self.full_height)
    }

    /// Center of the client area as `(x, y)`.
    #[inline]
    pub fn client_center(&self) -> (f64, f64) {
        (self.client_width / 2.0, self.client_height / 2.0)
    }
}

/// Page coordinates to write onto the popover node.
///
/// `None` leaves that axis at its reset value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Offset {
    pub top: Option<f64>,
    pub left: Option<f64>,
}

impl Offset {
    /// Offset with both axes set.
    #[inline]
    pub const fn new(top: f64, left: f64) -> Self {
        Self {
            top: Some(top),
            left: Some(left),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Offset, PageSize, Position, Size};

    #[test]
    fn position_centers() {
        let pos = Position::new(100.0, 140.0, 20.0, 220.0);
        assert_eq!(pos.x_center(), 120.0);
        assert_eq!(pos.y_center(), 120.0);
        assert_eq!(pos.width(), 200.0);
        assert_eq!(pos.height(), 40.0);
    }

    #[test]
    fn from_rect_builds_edges() {
        let pos = Position::from_rect(10.0, 30.0, 50.0, 20.0);
        assert_eq!(pos, Position::new(30.0, 50.0, 10.0, 60.0));
    }

    #[test]
    fn zero_area_position_centers_on_itself() {
        let pos = Position::new(5.0, 5.0, 7.0, 7.0);
        assert_eq!(pos.x_center(), 7.0);
        assert_eq!(pos.y_center(), 5.0);
    }

    #[test]
    fn page_size_helpers() {
        let page = PageSize::new(800.0, 600.0, 2400.0);
        assert_eq!(page.full_size(), Size::new(800.0, 2400.0));
        assert_eq!(page.client_center(), (400.0, 300.0));
        assert_eq!(PageSize::uniform(10.0, 20.0).full_height, 20.0);
    }

    #[test]
    fn offset_default_is_unset() {
        let offset = Offset::default();
        assert!(offset.top.is_none());
        assert!(offset.left.is_none());
        assert_eq!(Offset::new(1.0, 2.0).left, Some(2.0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn position_serde_field_names() {
        let pos: Position =
            serde_json::from_str(r#"{"top":1.0,"bottom":2.0,"left":3.0,"right":4.0}"#)
                .expect("position should deserialize");
        assert_eq!(pos, Position::new(1.0, 2.0, 3.0, 4.0));
    }
}
