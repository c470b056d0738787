#![forbid(unsafe_code)]

//! Per-step popover options.
//!
//! [`PopoverOptions`] is a plain value. A tour keeps one set of defaults and
//! derives each step's options from it with [`PopoverOptions::to_builder`],
//! instead of mutating a shared object between steps.
//!
//! ```ignore
//! let base = PopoverOptions::builder().padding(8.0).build();
//! let step = base
//!     .to_builder()
//!     .title("Search")
//!     .description("Type here to filter results.")
//!     .progress(StepProgress::for_step(0, 4))
//!     .build();
//! ```

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

use tourtip_core::PlacementMode;

/// Default highlight padding in pixels.
pub const DEFAULT_PADDING: f64 = 10.0;

/// Where the current step sits in the tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct StepProgress {
    pub is_first: bool,
    pub is_last: bool,
    /// Number of steps in the tour. `None` or `0` hides navigation.
    ///
    /// TOML has no null, so an unknown count is written by omission; a
    /// `[progress]` table without the key reads back as `None`.
    #[cfg_attr(feature = "config", serde(default))]
    pub total_count: Option<usize>,
    pub current_index: usize,
}

impl StepProgress {
    /// Progress for step `index` of a `total`-step tour.
    pub fn for_step(index: usize, total: usize) -> Self {
        Self {
            is_first: index == 0,
            is_last: index.saturating_add(1) >= total,
            total_count: Some(total),
            current_index: index,
        }
    }

    /// Whether the tour has more than one step.
    pub fn is_multi_step(&self) -> bool {
        self.total_count.is_some_and(|n| n > 1)
    }
}

impl Default for StepProgress {
    /// A single, standalone step.
    fn default() -> Self {
        Self {
            is_first: true,
            is_last: true,
            total_count: Some(1),
            current_index: 0,
        }
    }
}

/// Button captions. Values are trusted markup.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct ButtonLabels {
    pub close: String,
    /// Next button on the last step.
    pub done: String,
    /// Next button on the first step.
    pub start: String,
    pub next: String,
    pub prev: String,
}

impl Default for ButtonLabels {
    fn default() -> Self {
        Self {
            close: "Close".to_owned(),
            done: "Done".to_owned(),
            start: "Next &rarr;".to_owned(),
            next: "Next &rarr;".to_owned(),
            prev: "&larr; Previous".to_owned(),
        }
    }
}

/// Everything the popover needs to render one step.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct PopoverOptions {
    /// Highlight padding around the target.
    pub padding: f64,
    pub position: PlacementMode,
    /// Title markup.
    pub title: String,
    /// Description markup.
    pub description: String,
    pub show_buttons: bool,
    pub progress: StepProgress,
    pub labels: ButtonLabels,
}

impl Default for PopoverOptions {
    fn default() -> Self {
        Self {
            padding: DEFAULT_PADDING,
            position: PlacementMode::Auto,
            title: String::new(),
            description: String::new(),
            show_buttons: true,
            progress: StepProgress::default(),
            labels: ButtonLabels::default(),
        }
    }
}

impl PopoverOptions {
    /// Start from the defaults.
    pub fn builder() -> PopoverOptionsBuilder {
        PopoverOptionsBuilder::default()
    }

    /// Start from these options.
    pub fn to_builder(&self) -> PopoverOptionsBuilder {
        PopoverOptionsBuilder {
            options: self.clone(),
        }
    }

    /// Whether the footer with navigation buttons is rendered at all.
    pub fn shows_footer(&self) -> bool {
        self.show_buttons && self.progress.is_multi_step()
    }

    /// Caption for the next button given the current progress.
    ///
    /// The last-step caption wins over the first-step caption.
    pub fn next_label(&self) -> &str {
        if self.progress.is_last {
            &self.labels.done
        } else if self.progress.is_first {
            &self.labels.start
        } else {
            &self.labels.next
        }
    }
}

/// Builder for [`PopoverOptions`].
#[derive(Debug, Clone, Default)]
pub struct PopoverOptionsBuilder {
    options: PopoverOptions,
}

impl PopoverOptionsBuilder {
    #[must_use]
    pub fn padding(mut self, padding: f64) -> Self {
        self.options.padding = padding;
        self
    }

    #[must_use]
    pub fn position(mut self, position: PlacementMode) -> Self {
        self.options.position = position;
        self
    }

    /// Set the mode from its name; unknown names become `auto`.
    #[must_use]
    pub fn position_str(mut self, name: &str) -> Self {
        self.options.position = PlacementMode::parse(name);
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.options.title = title.into();
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.options.description = description.into();
        self
    }

    #[must_use]
    pub fn show_buttons(mut self, show: bool) -> Self {
        self.options.show_buttons = show;
        self
    }

    #[must_use]
    pub fn progress(mut self, progress: StepProgress) -> Self {
        self.options.progress = progress;
        self
    }

    #[must_use]
    pub fn first(mut self, is_first: bool) -> Self {
        self.options.progress.is_first = is_first;
        self
    }

    #[must_use]
    pub fn last(mut self, is_last: bool) -> Self {
        self.options.progress.is_last = is_last;
        self
    }

    #[must_use]
    pub fn total_count(mut self, total: Option<usize>) -> Self {
        self.options.progress.total_count = total;
        self
    }

    #[must_use]
    pub fn current_index(mut self, index: usize) -> Self {
        self.options.progress.current_index = index;
        self
    }

    #[must_use]
    pub fn labels(mut self, labels: ButtonLabels) -> Self {
        self.options.labels = labels;
        self
    }

    #[must_use]
    pub fn close_label(mut self, label: impl Into<String>) -> Self {
        self.options.labels.close = label.into();
        self
    }

    #[must_use]
    pub fn done_label(mut self, label: impl Into<String>) -> Self {
        self.options.labels.done = label.into();
        self
    }

    #[must_use]
    pub fn start_label(mut self, label: impl Into<String>) -> Self {
        self.options.labels.start = label.into();
        self
    }

    #[must_use]
    pub fn next_label(mut self, label: impl Into<String>) -> Self {
        self.options.labels.next = label.into();
        self
    }

    #[must_use]
    pub fn prev_label(mut self, label: impl Into<String>) -> Self {
        self.options.labels.prev = label.into();
        self
    }

    pub fn build(self) -> PopoverOptions {
        self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_a_single_step() {
        let opts = PopoverOptions::default();
        assert_eq!(opts.padding, DEFAULT_PADDING);
        assert_eq!(opts.position, PlacementMode::Auto);
        assert!(opts.show_buttons);
        assert!(opts.progress.is_first && opts.progress.is_last);
        assert_eq!(opts.progress.total_count, Some(1));
        assert!(!opts.shows_footer());
        assert_eq!(opts.labels.close, "Close");
        assert_eq!(opts.labels.prev, "&larr; Previous");
    }

    #[test]
    fn for_step_derives_flags() {
        let first = StepProgress::for_step(0, 3);
        assert!(first.is_first && !first.is_last);
        let middle = StepProgress::for_step(1, 3);
        assert!(!middle.is_first && !middle.is_last);
        let last = StepProgress::for_step(2, 3);
        assert!(!last.is_first && last.is_last);
        assert_eq!(last.current_index, 2);
        let only = StepProgress::for_step(0, 1);
        assert!(only.is_first && only.is_last);
    }

    #[test]
    fn footer_rule() {
        let base = PopoverOptions::default();
        assert!(!base.to_builder().total_count(None).build().shows_footer());
        assert!(!base.to_builder().total_count(Some(0)).build().shows_footer());
        assert!(!base.to_builder().total_count(Some(1)).build().shows_footer());
        assert!(base.to_builder().total_count(Some(2)).build().shows_footer());
        assert!(
            !base
                .to_builder()
                .total_count(Some(5))
                .show_buttons(false)
                .build()
                .shows_footer()
        );
    }

    #[test]
    fn next_label_precedence() {
        let base = PopoverOptions::builder()
            .start_label("Begin")
            .done_label("Finish")
            .next_label("Onward")
            .build();
        let first = base.to_builder().first(true).last(false).build();
        assert_eq!(first.next_label(), "Begin");
        let middle = base.to_builder().first(false).last(false).build();
        assert_eq!(middle.next_label(), "Onward");
        let both = base.to_builder().first(true).last(true).build();
        assert_eq!(both.next_label(), "Finish");
    }

    #[test]
    fn to_builder_leaves_original_untouched() {
        let base = PopoverOptions::builder().title("Base").build();
        let step = base.to_builder().title("Step").position_str("left").build();
        assert_eq!(base.title, "Base");
        assert_eq!(base.position, PlacementMode::Auto);
        assert_eq!(step.title, "Step");
        assert_eq!(step.position, PlacementMode::Left);
    }

    #[test]
    fn unknown_position_name_is_auto() {
        let opts = PopoverOptions::builder().position_str("upside-down").build();
        assert_eq!(opts.position, PlacementMode::Auto);
    }
}
