#![forbid(unsafe_code)]

//! Browser DOM surface for tourtip popovers.
//!
//! [`DomHost`] locates `#driver-popover-item` in the document, injecting the
//! popover template into `<body>` the first time, and hands out a
//! [`DomNode`] that resolves every named sub-element once. Page dimensions
//! are read fresh on each placement through [`DomViewport`].
//!
//! The DOM types only exist on `wasm32`; [`page`] is target-independent.

pub mod page;

#[cfg(target_arch = "wasm32")]
mod dom;

#[cfg(target_arch = "wasm32")]
pub use dom::{DomHost, DomNode, DomViewport};
pub use page::PageMetrics;
