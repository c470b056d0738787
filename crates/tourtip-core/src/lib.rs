#![forbid(unsafe_code)]

//! Core: page geometry and the popover placement engine.
//!
//! # Role in tourtip
//! `tourtip-core` is pure arithmetic. It knows nothing about nodes, classes
//! or HTML; `tourtip-widgets` feeds it measurements and writes the result
//! back onto a rendering surface.

pub mod geometry;
pub mod placement;

pub use geometry::{Offset, PageSize, Position, Size};
pub use placement::{
    EXTRA_CLEARANCE, Placement, PlacementEngine, PlacementMode, TipOrientation, compute_position,
};
