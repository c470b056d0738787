#![forbid(unsafe_code)]

//! Page dimensions from raw DOM metrics.

use tourtip_core::PageSize;

/// Element metrics read from `document.body` and `document.documentElement`.
///
/// Browsers disagree on which of these reflects the document height, so the
/// full height is the largest of them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PageMetrics {
    pub body_client_width: f64,
    pub body_client_height: f64,
    pub body_scroll_height: f64,
    pub body_offset_height: f64,
    pub html_client_height: f64,
    pub html_scroll_height: f64,
    pub html_offset_height: f64,
}

impl PageMetrics {
    /// Largest reported document height.
    pub fn full_height(&self) -> f64 {
        [
            self.body_scroll_height,
            self.body_offset_height,
            self.html_client_height,
            self.html_scroll_height,
            self.html_offset_height,
        ]
        .into_iter()
        .fold(0.0, f64::max)
    }

    pub fn page_size(&self) -> PageSize {
        PageSize::new(
            self.body_client_width,
            self.body_client_height,
            self.full_height(),
        )
    }
}
