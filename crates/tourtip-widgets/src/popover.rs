#![forbid(unsafe_code)]

//! Tour popover anchored to a highlighted element.
//!
//! [`Popover`] owns one popover node for the lifetime of a tour and
//! re-renders it for every step: content, navigation buttons, then position.
//! Placement math lives in [`tourtip_core::placement`]; this type only
//! measures, dispatches and writes.
//!
//! # Render sequence
//!
//! 1. Reset the node: visible, `left = top = 0`, no `right`/`bottom`, tip
//!    stripped back to its base class.
//! 2. Write title and description markup verbatim.
//! 3. Render buttons from [`StepProgress`](crate::options::StepProgress).
//! 4. Measure, compute the placement, write coordinates and one tip class.
//!
//! Every step overwrites whatever the previous one wrote, so rendering the
//! same options twice leaves the node in the same state.
//!
//! # Example
//!
//! ```ignore
//! use tourtip_core::{PageSize, Position};
//! use tourtip_widgets::memory::MemoryHost;
//! use tourtip_widgets::options::PopoverOptions;
//! use tourtip_widgets::popover::Popover;
//!
//! let mut host = MemoryHost::new(PageSize::uniform(1280.0, 800.0));
//! let mut popover = Popover::attach(&mut host, PopoverOptions::default())?;
//! popover.show(&Position::from_rect(40.0, 60.0, 120.0, 32.0));
//! ```

use tourtip_core::{Placement, PlacementEngine, PlacementMode, Position, Size, compute_position};

use crate::classes::{CLASS_BTN_DISABLED, CLASS_POPOVER_TIP};
use crate::options::PopoverOptions;
use crate::surface::{
    PopoverNode, PopoverPart, StyleOffset, SurfaceError, SurfaceHost, Viewport, Visibility,
};

/// Presentation adapter for a single, reused popover node.
#[derive(Debug)]
pub struct Popover<N, V> {
    node: N,
    viewport: V,
    options: PopoverOptions,
}

impl<N: PopoverNode, V: Viewport> Popover<N, V> {
    /// Wrap an existing node. The node starts hidden.
    pub fn new(node: N, viewport: V, options: PopoverOptions) -> Self {
        let mut popover = Self {
            node,
            viewport,
            options,
        };
        popover.hide();
        popover
    }

    /// Get the node from `host`, creating it if the page has none yet.
    pub fn attach<H>(host: &mut H, options: PopoverOptions) -> Result<Self, SurfaceError>
    where
        H: SurfaceHost<Node = N, Viewport = V>,
    {
        let node = host.ensure_popover()?;
        Ok(Self::new(node, host.viewport(), options))
    }

    pub fn options(&self) -> &PopoverOptions {
        &self.options
    }

    /// Replace the options used by the next [`Popover::show`].
    pub fn set_options(&mut self, options: PopoverOptions) {
        self.options = options;
    }

    pub fn node(&self) -> &N {
        &self.node
    }

    /// Title element, for overlay components that decorate it.
    pub fn title_node(&self) -> N::Element {
        self.node.element(PopoverPart::Title)
    }

    /// Description element, for overlay components that decorate it.
    pub fn description_node(&self) -> N::Element {
        self.node.element(PopoverPart::Description)
    }

    /// Current rendered size of the popover.
    pub fn size(&self) -> Size {
        self.node.measure()
    }

    pub fn hide(&mut self) {
        self.node.set_visibility(PopoverPart::Root, Visibility::Hidden);
    }

    /// Render the current step next to `target` and return where it went.
    pub fn show(&mut self, target: &Position) -> Placement {
        let progress = self.options.progress;
        let _span = tracing::debug_span!(
            "popover.show",
            mode = self.options.position.as_str(),
            total_count = ?progress.total_count,
            current_index = progress.current_index
        )
        .entered();

        self.set_initial_state();

        self.node.set_inner_html(PopoverPart::Title, &self.options.title);
        self.node
            .set_inner_html(PopoverPart::Description, &self.options.description);

        self.render_buttons();

        let placement = compute_position(
            self.options.position,
            target,
            self.size(),
            self.options.padding,
            self.viewport.page_size(),
        );
        self.apply(placement);
        placement
    }

    /// Back to an unpositioned, visible node with a bare tip.
    fn set_initial_state(&mut self) {
        self.node.set_visibility(PopoverPart::Root, Visibility::Shown);
        self.node.set_style_offset(StyleOffset::ORIGIN);
        self.node.set_class_name(PopoverPart::Tip, CLASS_POPOVER_TIP);
    }

    /// Write captions, then decide whether and how navigation shows.
    fn render_buttons(&mut self) {
        let labels = &self.options.labels;
        self.node.set_inner_html(PopoverPart::NextButton, &labels.next);
        self.node.set_inner_html(PopoverPart::PrevButton, &labels.prev);
        self.node.set_inner_html(PopoverPart::CloseButton, &labels.close);

        if !self.options.shows_footer() {
            let reason = if self.options.show_buttons {
                "single step"
            } else {
                "buttons disabled"
            };
            tracing::trace!(reason, "footer hidden");
            self.node
                .set_visibility(PopoverPart::Footer, Visibility::Hidden);
            return;
        }

        self.node.set_visibility(PopoverPart::Footer, Visibility::Shown);
        if self.options.progress.is_first {
            self.node
                .add_class(PopoverPart::PrevButton, CLASS_BTN_DISABLED);
        } else {
            self.node
                .remove_class(PopoverPart::PrevButton, CLASS_BTN_DISABLED);
        }

        let next = self.options.next_label();
        tracing::trace!(
            is_first = self.options.progress.is_first,
            is_last = self.options.progress.is_last,
            next,
            "navigation rendered"
        );
        self.node.set_inner_html(PopoverPart::NextButton, next);
    }

    /// Write a computed placement onto the node.
    fn apply(&mut self, placement: Placement) {
        self.node
            .set_style_offset(StyleOffset::from_offset(placement.offset));
        self.node
            .add_class(PopoverPart::Tip, placement.orientation.class_name());
    }

    fn engine(&self) -> PlacementEngine {
        PlacementEngine::new(self.options.padding)
    }

    /// Position next to `target` using one strategy, bypassing the
    /// configured mode. Assumes content has already been rendered.
    fn place_with(
        &mut self,
        target: &Position,
        place: impl FnOnce(&PlacementEngine, &Position, Size) -> Placement,
    ) -> Placement {
        self.set_initial_state();
        let placement = place(&self.engine(), target, self.size());
        self.apply(placement);
        placement
    }

    pub fn position_on_left(&mut self, target: &Position) -> Placement {
        self.place_with(target, |e, t, s| e.place_left(t, s))
    }

    pub fn position_on_right(&mut self, target: &Position) -> Placement {
        self.place_with(target, |e, t, _| e.place_right(t))
    }

    pub fn position_on_top(&mut self, target: &Position) -> Placement {
        self.place_with(target, |e, t, s| e.place_top(t, s))
    }

    pub fn position_on_bottom(&mut self, target: &Position) -> Placement {
        self.place_with(target, |e, t, _| e.place_bottom(t))
    }

    pub fn position_top_left(&mut self, target: &Position) -> Placement {
        self.place_with(target, |e, t, s| e.place_top_left(t, s))
    }

    pub fn position_top_right(&mut self, target: &Position) -> Placement {
        self.place_with(target, |e, t, s| e.place_top_right(t, s))
    }

    pub fn position_bottom_left(&mut self, target: &Position) -> Placement {
        self.place_with(target, |e, t, s| e.place_bottom_left(t, s))
    }

    pub fn position_bottom_right(&mut self, target: &Position) -> Placement {
        self.place_with(target, |e, t, _| e.place_bottom_right(t))
    }

    pub fn auto_position(&mut self, target: &Position) -> Placement {
        let page = self.viewport.page_size();
        self.place_with(target, |e, t, s| e.auto_position(t, s, page))
    }

    pub fn auto_position_corner(&mut self, target: &Position) -> Placement {
        let page = self.viewport.page_size();
        self.place_with(target, |e, t, s| e.auto_position_corner(t, s, page))
    }

    /// Mode that [`Popover::show`] will use.
    pub fn mode(&self) -> PlacementMode {
        self.options.position
    }
}
