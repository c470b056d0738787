#![forbid(unsafe_code)]

//! Tour popover widgets.
//!
//! # Role in tourtip
//! `tourtip-widgets` turns a [`PopoverOptions`](options::PopoverOptions)
//! and a target [`Position`](tourtip_core::Position) into writes against a
//! rendering surface. Geometry comes from `tourtip-core`; the surface comes
//! from `tourtip-web` in a browser or from [`memory`] elsewhere.

pub mod classes;
#[cfg(feature = "config")]
pub mod config;
pub mod memory;
pub mod options;
pub mod popover;
pub mod surface;

#[cfg(feature = "config")]
pub use config::ConfigError;
pub use options::{ButtonLabels, PopoverOptions, PopoverOptionsBuilder, StepProgress};
pub use popover::Popover;
pub use surface::{
    PopoverNode, PopoverPart, StyleOffset, SurfaceError, SurfaceHost, Viewport, Visibility,
};
