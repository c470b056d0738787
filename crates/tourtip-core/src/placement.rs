#![forbid(unsafe_code)]

//! Placement engine for tour popovers.
//!
//! Given the target's bounding box, the popover's measured size, a padding
//! and the page dimensions, [`compute_position`] returns where the popover's
//! top-left corner goes and which [`TipOrientation`] marker to show.
//!
//! # Margin
//!
//! Every directional calculation keeps `padding + 10` pixels between the
//! popover and the target (see [`EXTRA_CLEARANCE`]). The padding itself is
//! the highlight padding drawn around the target, so the extra clearance
//! keeps the popover off the highlight.
//!
//! # Modes
//!
//! - Fixed (`Left`, `Right`, `Top`, `Bottom`): one edge primitive for the
//!   primary axis, one alignment primitive for the cross axis. No overflow
//!   handling at all.
//! - `Auto`: below the target unless the popover would run past the bottom
//!   of the document, in which case above. Horizontal overflow is not
//!   considered.
//! - `Corner`: picks a diagonal by comparing the target center against the
//!   viewport center on each axis independently.
//!
//! Nothing here clamps to the viewport.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::{Offset, PageSize, Position, Size};

/// Clearance added on top of the padding between target and popover.
pub const EXTRA_CLEARANCE: f64 = 10.0;

/// Requested placement mode.
///
/// Strings coming from configuration go through [`PlacementMode::parse`],
/// which maps anything unrecognized to [`PlacementMode::Auto`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub enum PlacementMode {
    /// Left of the target, top-aligned.
    Left,
    /// Right of the target, top-aligned.
    Right,
    /// Above the target, left-aligned.
    Top,
    /// Below the target, left-aligned.
    Bottom,
    /// Diagonal placement chosen from the target's quadrant.
    Corner,
    /// Below the target, or above it when the page runs out.
    #[default]
    Auto,
}

impl PlacementMode {
    /// Every mode, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Left,
        Self::Right,
        Self::Top,
        Self::Bottom,
        Self::Corner,
        Self::Auto,
    ];

    /// Parse a mode name. Unknown or empty input yields [`PlacementMode::Auto`].
    pub fn parse(name: &str) -> Self {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(name))
            .unwrap_or(Self::Auto)
    }

    /// Lowercase name as used in configuration.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Corner => "corner",
            Self::Auto => "auto",
        }
    }

    /// Whether the engine picks the side itself.
    pub const fn is_automatic(self) -> bool {
        matches!(self, Self::Corner | Self::Auto)
    }
}

impl fmt::Display for PlacementMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlacementMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for PlacementMode {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for PlacementMode {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<PlacementMode> for String {
    fn from(mode: PlacementMode) -> Self {
        mode.as_str().to_owned()
    }
}

/// Which edge of the popover faces the target.
///
/// Named after the popover side nearest the target, so a popover placed to
/// the left of its target carries [`TipOrientation::Right`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TipOrientation {
    Left,
    Right,
    Top,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl TipOrientation {
    /// Every orientation marker.
    pub const ALL: [Self; 8] = [
        Self::Left,
        Self::Right,
        Self::Top,
        Self::Bottom,
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// Class name added to the tip element.
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
        }
    }

    /// Whether this marker belongs to a corner placement.
    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Self::TopLeft | Self::TopRight | Self::BottomLeft | Self::BottomRight
        )
    }
}

impl fmt::Display for TipOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// Result of a placement computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Page coordinates of the popover's top-left corner.
    pub offset: Offset,
    /// Tip marker to show.
    pub orientation: TipOrientation,
}

impl Placement {
    #[inline]
    const fn at(top: f64, left: f64, orientation: TipOrientation) -> Self {
        Self {
            offset: Offset::new(top, left),
            orientation,
        }
    }
}

/// Directional primitives and placement strategies for a given padding.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlacementEngine {
    /// Highlight padding around the target.
    pub padding: f64,
}

impl PlacementEngine {
    /// Create an engine for the given padding.
    #[inline]
    pub const fn new(padding: f64) -> Self {
        Self { padding }
    }

    /// Distance kept between the target and the popover.
    #[inline]
    pub fn margin(&self) -> f64 {
        self.padding + EXTRA_CLEARANCE
    }

    // ── Directional primitives ──────────────────────────────────────────

    /// `left` that puts the popover entirely left of the target.
    #[inline]
    pub fn left_edge(&self, target: &Position, popover: Size) -> f64 {
        target.left - popover.width - self.margin()
    }

    /// `left` that puts the popover entirely right of the target.
    #[inline]
    pub fn right_edge(&self, target: &Position) -> f64 {
        target.right + self.margin()
    }

    /// `top` that puts the popover entirely above the target.
    #[inline]
    pub fn top_edge(&self, target: &Position, popover: Size) -> f64 {
        target.top - popover.height - self.margin()
    }

    /// `top` that puts the popover entirely below the target.
    #[inline]
    pub fn bottom_edge(&self, target: &Position) -> f64 {
        target.bottom + self.margin()
    }

    /// Horizontal anchor for vertical placements.
    #[inline]
    pub fn x_center(&self, target: &Position) -> f64 {
        target.left - self.padding
    }

    /// Vertical anchor for horizontal placements.
    #[inline]
    pub fn y_center(&self, target: &Position) -> f64 {
        target.top - self.padding
    }

    // ── Fixed placements ────────────────────────────────────────────────

    pub fn place_left(&self, target: &Position, popover: Size) -> Placement {
        Placement::at(
            self.y_center(target),
            self.left_edge(target, popover),
            TipOrientation::Right,
        )
    }

    pub fn place_right(&self, target: &Position) -> Placement {
        Placement::at(
            self.y_center(target),
            self.right_edge(target),
            TipOrientation::Left,
        )
    }

    pub fn place_top(&self, target: &Position, popover: Size) -> Placement {
        Placement::at(
            self.top_edge(target, popover),
            self.x_center(target),
            TipOrientation::Bottom,
        )
    }

    pub fn place_bottom(&self, target: &Position) -> Placement {
        Placement::at(
            self.bottom_edge(target),
            self.x_center(target),
            TipOrientation::Top,
        )
    }

    // ── Diagonal placements ─────────────────────────────────────────────

    pub fn place_top_left(&self, target: &Position, popover: Size) -> Placement {
        Placement::at(
            self.top_edge(target, popover),
            self.left_edge(target, popover),
            TipOrientation::TopLeft,
        )
    }

    pub fn place_top_right(&self, target: &Position, popover: Size) -> Placement {
        Placement::at(
            self.top_edge(target, popover),
            self.right_edge(target),
            TipOrientation::TopRight,
        )
    }

    pub fn place_bottom_left(&self, target: &Position, popover: Size) -> Placement {
        Placement::at(
            self.bottom_edge(target),
            self.left_edge(target, popover),
            TipOrientation::BottomLeft,
        )
    }

    pub fn place_bottom_right(&self, target: &Position) -> Placement {
        Placement::at(
            self.bottom_edge(target),
            self.right_edge(target),
            TipOrientation::BottomRight,
        )
    }

    // ── Automatic strategies ────────────────────────────────────────────

    /// Below the target, or above it if the popover would reach the end of
    /// the document.
    ///
    /// Only the vertical axis is checked, once. A popover that is too wide
    /// for the remaining width is still placed, and the top placement is
    /// not re-checked against the top of the page.
    pub fn auto_position(&self, target: &Position, popover: Size, page: PageSize) -> Placement {
        let extent_after_popover = target.bottom + popover.height + self.margin();
        if extent_after_popover >= page.full_height {
            self.place_top(target, popover)
        } else {
            self.place_bottom(target)
        }
    }

    /// Diagonal placement pointing toward the viewport center.
    ///
    /// A target in the lower half gets the popover above it, a target in the
    /// right half gets the popover on its left, and vice versa.
    pub fn auto_position_corner(
        &self,
        target: &Position,
        popover: Size,
        page: PageSize,
    ) -> Placement {
        let (x_screen_center, y_screen_center) = page.client_center();
        let above = target.y_center() > y_screen_center;
        let leftward = target.x_center() > x_screen_center;

        match (above, leftward) {
            (true, true) => self.place_top_left(target, popover),
            (true, false) => self.place_top_right(target, popover),
            (false, true) => self.place_bottom_left(target, popover),
            (false, false) => self.place_bottom_right(target),
        }
    }

    /// Dispatch on `mode`.
    pub fn place(
        &self,
        mode: PlacementMode,
        target: &Position,
        popover: Size,
        page: PageSize,
    ) -> Placement {
        match mode {
            PlacementMode::Left => self.place_left(target, popover),
            PlacementMode::Right => self.place_right(target),
            PlacementMode::Top => self.place_top(target, popover),
            PlacementMode::Bottom => self.place_bottom(target),
            PlacementMode::Corner => self.auto_position_corner(target, popover, page),
            PlacementMode::Auto => self.auto_position(target, popover, page),
        }
    }
}

/// Compute the popover placement for `mode`.
///
/// Pure arithmetic: inputs are not validated, and negative or zero sizes
/// simply produce the corresponding coordinates.
pub fn compute_position(
    mode: PlacementMode,
    target: &Position,
    popover: Size,
    padding: f64,
    page: PageSize,
) -> Placement {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!(
        "placement.compute",
        mode = mode.as_str(),
        padding = padding
    )
    .entered();

    let placement = PlacementEngine::new(padding).place(mode, target, popover, page);

    #[cfg(feature = "tracing")]
    tracing::trace!(
        orientation = placement.orientation.class_name(),
        top = ?placement.offset.top,
        left = ?placement.offset.left,
        "placement resolved"
    );

    placement
}
