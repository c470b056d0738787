#![forbid(unsafe_code)]

//! In-memory rendering surface.
//!
//! [`MemoryHost`] stands in for a page: it injects the popover template at
//! most once and hands out [`MemoryNode`] handles that all point at the same
//! node state. Useful for headless hosts and for asserting exactly what the
//! adapter wrote.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use tourtip_core::{PageSize, Size};

use crate::surface::{
    PopoverNode, PopoverPart, StyleOffset, SurfaceError, SurfaceHost, Viewport, Visibility,
};

type MeasureFn = dyn Fn(&str, &str) -> Size;

/// Recorded state of one sub-element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartState {
    /// `None` until something writes `display`.
    pub visibility: Option<Visibility>,
    pub classes: Vec<String>,
    pub html: String,
}

impl PartState {
    fn from_template(part: PopoverPart) -> Self {
        let html = match part {
            PopoverPart::Title => "Popover Title",
            PopoverPart::Description => "Popover Description",
            PopoverPart::CloseButton => "Close",
            PopoverPart::PrevButton => "&larr; Previous",
            PopoverPart::NextButton => "Next &rarr;",
            _ => "",
        };
        let classes = match part {
            PopoverPart::Root => Vec::new(),
            _ => vec![part.selector_class().to_owned()],
        };
        Self {
            visibility: None,
            classes,
            html: html.to_owned(),
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

struct NodeState {
    parts: Vec<PartState>,
    style: StyleOffset,
    size: Size,
    measure: Option<Rc<MeasureFn>>,
}

impl NodeState {
    fn from_template() -> Self {
        Self {
            parts: PopoverPart::ALL
                .into_iter()
                .map(PartState::from_template)
                .collect(),
            style: StyleOffset::default(),
            size: Size::default(),
            measure: None,
        }
    }

    fn part_mut(&mut self, part: PopoverPart) -> &mut PartState {
        &mut self.parts[part.index()]
    }
}

/// Shared handle to an in-memory popover node.
#[derive(Clone)]
pub struct MemoryNode {
    state: Rc<RefCell<NodeState>>,
}

impl fmt::Debug for MemoryNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("MemoryNode")
            .field("style", &state.style)
            .field("size", &state.size)
            .field("parts", &state.parts)
            .finish()
    }
}

impl Default for MemoryNode {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryNode {
    /// A node freshly built from the popover template, with zero size.
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(NodeState::from_template())),
        }
    }

    /// Fixed size reported by [`PopoverNode::measure`].
    pub fn set_size(&self, size: Size) {
        let mut state = self.state.borrow_mut();
        state.size = size;
        state.measure = None;
    }

    /// Compute the measured size from the current title and description.
    pub fn measure_with(&self, f: impl Fn(&str, &str) -> Size + 'static) {
        self.state.borrow_mut().measure = Some(Rc::new(f));
    }

    /// Snapshot of one sub-element.
    pub fn part(&self, part: PopoverPart) -> PartState {
        self.state.borrow().parts[part.index()].clone()
    }

    pub fn classes(&self, part: PopoverPart) -> Vec<String> {
        self.part(part).classes
    }

    pub fn has_class(&self, part: PopoverPart, class: &str) -> bool {
        self.state.borrow().parts[part.index()].has_class(class)
    }

    pub fn html(&self, part: PopoverPart) -> String {
        self.part(part).html
    }

    pub fn visibility(&self, part: PopoverPart) -> Option<Visibility> {
        self.state.borrow().parts[part.index()].visibility
    }

    /// Current root positioning styles.
    pub fn style(&self) -> StyleOffset {
        self.state.borrow().style
    }

    /// Whether two handles point at the same node.
    pub fn same_node(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

/// A sub-element of a [`MemoryNode`].
#[derive(Debug, Clone)]
pub struct MemoryElement {
    node: MemoryNode,
    part: PopoverPart,
}

impl MemoryElement {
    pub fn part(&self) -> PopoverPart {
        self.part
    }

    pub fn html(&self) -> String {
        self.node.html(self.part)
    }

    /// Decorate the element, as an overlay component would.
    pub fn add_class(&self, class: &str) {
        let mut state = self.node.state.borrow_mut();
        let part = state.part_mut(self.part);
        if !part.has_class(class) {
            part.classes.push(class.to_owned());
        }
    }

    pub fn classes(&self) -> Vec<String> {
        self.node.classes(self.part)
    }
}

impl PopoverNode for MemoryNode {
    type Element = MemoryElement;

    fn element(&self, part: PopoverPart) -> MemoryElement {
        MemoryElement {
            node: self.clone(),
            part,
        }
    }

    fn set_visibility(&mut self, part: PopoverPart, visibility: Visibility) {
        self.state.borrow_mut().part_mut(part).visibility = Some(visibility);
    }

    fn set_style_offset(&mut self, offset: StyleOffset) {
        self.state.borrow_mut().style = offset;
    }

    fn set_class_name(&mut self, part: PopoverPart, class_name: &str) {
        self.state.borrow_mut().part_mut(part).classes = class_name
            .split_ascii_whitespace()
            .map(str::to_owned)
            .collect();
    }

    fn add_class(&mut self, part: PopoverPart, class: &str) {
        let mut state = self.state.borrow_mut();
        let part = state.part_mut(part);
        if !part.has_class(class) {
            part.classes.push(class.to_owned());
        }
    }

    fn remove_class(&mut self, part: PopoverPart, class: &str) {
        self.state
            .borrow_mut()
            .part_mut(part)
            .classes
            .retain(|c| c != class);
    }

    fn set_inner_html(&mut self, part: PopoverPart, html: &str) {
        html.clone_into(&mut self.state.borrow_mut().part_mut(part).html);
    }

    fn measure(&self) -> Size {
        let state = self.state.borrow();
        match &state.measure {
            Some(f) => (**f)(
                &state.parts[PopoverPart::Title.index()].html,
                &state.parts[PopoverPart::Description.index()].html,
            ),
            None => state.size,
        }
    }
}

/// Page size shared between a [`MemoryHost`] and its popovers.
#[derive(Debug, Clone, Default)]
pub struct MemoryViewport {
    page: Rc<Cell<PageSize>>,
}

impl MemoryViewport {
    pub fn new(page: PageSize) -> Self {
        Self {
            page: Rc::new(Cell::new(page)),
        }
    }

    pub fn set_page_size(&self, page: PageSize) {
        self.page.set(page);
    }
}

impl Viewport for MemoryViewport {
    fn page_size(&self) -> PageSize {
        self.page.get()
    }
}

/// In-memory page that owns at most one popover node.
#[derive(Debug, Default)]
pub struct MemoryHost {
    node: Option<MemoryNode>,
    viewport: MemoryViewport,
    injections: usize,
    missing: Option<PopoverPart>,
}

impl MemoryHost {
    /// Empty page of the given size.
    pub fn new(page: PageSize) -> Self {
        Self {
            viewport: MemoryViewport::new(page),
            ..Self::default()
        }
    }

    /// Page that already contains a popover node.
    pub fn with_node(page: PageSize, node: MemoryNode) -> Self {
        Self {
            node: Some(node),
            ..Self::new(page)
        }
    }

    /// Simulate a page whose popover markup lacks `part`.
    #[must_use]
    pub fn without_part(mut self, part: PopoverPart) -> Self {
        self.missing = Some(part);
        self
    }

    /// How many times the template was injected.
    pub fn injections(&self) -> usize {
        self.injections
    }

    pub fn set_page_size(&self, page: PageSize) {
        self.viewport.set_page_size(page);
    }
}

impl SurfaceHost for MemoryHost {
    type Node = MemoryNode;
    type Viewport = MemoryViewport;

    fn ensure_popover(&mut self) -> Result<MemoryNode, SurfaceError> {
        if let Some(part) = self.missing {
            return Err(SurfaceError::MissingPart(part));
        }
        if let Some(node) = &self.node {
            return Ok(node.clone());
        }
        tracing::debug!("injecting popover template");
        let node = MemoryNode::new();
        self.injections += 1;
        self.node = Some(node.clone());
        Ok(node)
    }

    fn viewport(&self) -> MemoryViewport {
        self.viewport.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classes::{CLASS_POPOVER_TIP, CLASS_POPOVER_TITLE};

    #[test]
    fn template_state() {
        let node = MemoryNode::new();
        assert_eq!(node.classes(PopoverPart::Tip), vec![CLASS_POPOVER_TIP]);
        assert_eq!(node.html(PopoverPart::Title), "Popover Title");
        assert!(node.classes(PopoverPart::Root).is_empty());
        assert_eq!(node.visibility(PopoverPart::Root), None);
    }

    #[test]
    fn ensure_injects_once() {
        let mut host = MemoryHost::new(PageSize::uniform(800.0, 600.0));
        let a = host.ensure_popover().expect("first");
        let b = host.ensure_popover().expect("second");
        assert!(a.same_node(&b));
        assert_eq!(host.injections(), 1);
    }

    #[test]
    fn existing_node_is_reused() {
        let node = MemoryNode::new();
        let mut host = MemoryHost::with_node(PageSize::default(), node.clone());
        let found = host.ensure_popover().expect("existing");
        assert!(found.same_node(&node));
        assert_eq!(host.injections(), 0);
    }

    #[test]
    fn missing_part_is_reported() {
        let mut host = MemoryHost::new(PageSize::default()).without_part(PopoverPart::Footer);
        assert_eq!(
            host.ensure_popover().expect_err("footer missing"),
            SurfaceError::MissingPart(PopoverPart::Footer)
        );
    }

    #[test]
    fn class_operations() {
        let mut node = MemoryNode::new();
        node.add_class(PopoverPart::Tip, "left");
        node.add_class(PopoverPart::Tip, "left");
        assert_eq!(node.classes(PopoverPart::Tip), vec![CLASS_POPOVER_TIP, "left"]);
        node.remove_class(PopoverPart::Tip, "left");
        assert_eq!(node.classes(PopoverPart::Tip), vec![CLASS_POPOVER_TIP]);
        node.set_class_name(PopoverPart::Title, "a  b");
        assert_eq!(node.classes(PopoverPart::Title), vec!["a", "b"]);
    }

    #[test]
    fn measure_from_content() {
        let mut node = MemoryNode::new();
        node.measure_with(|title, description| {
            Size::new(200.0, 20.0 + 10.0 * (title.len() + description.len()) as f64)
        });
        node.set_inner_html(PopoverPart::Title, "ab");
        node.set_inner_html(PopoverPart::Description, "cde");
        assert_eq!(node.measure(), Size::new(200.0, 70.0));
        node.set_size(Size::new(1.0, 2.0));
        assert_eq!(node.measure(), Size::new(1.0, 2.0));
    }

    #[test]
    fn element_handle_decorates_shared_node() {
        let node = MemoryNode::new();
        let title = node.element(PopoverPart::Title);
        title.add_class("highlighted");
        assert!(node.has_class(PopoverPart::Title, CLASS_POPOVER_TITLE));
        assert!(node.has_class(PopoverPart::Title, "highlighted"));
    }

    #[test]
    fn viewport_is_shared() {
        let host = MemoryHost::new(PageSize::uniform(100.0, 100.0));
        let viewport = host.viewport();
        host.set_page_size(PageSize::uniform(300.0, 200.0));
        assert_eq!(viewport.page_size(), PageSize::uniform(300.0, 200.0));
    }
}
