#![forbid(unsafe_code)]

//! Rendering surface abstraction.
//!
//! The popover adapter never talks to a DOM directly. It writes through
//! [`PopoverNode`], reads page dimensions through [`Viewport`], and gets
//! its node once from a [`SurfaceHost`]. `tourtip-web` implements these
//! for the browser; [`crate::memory`] implements them in memory.

use std::fmt;

use tourtip_core::{Offset, PageSize, Size};

use crate::classes::{
    CLASS_CLOSE_BTN, CLASS_NEXT_STEP_BTN, CLASS_POPOVER_DESCRIPTION, CLASS_POPOVER_FOOTER,
    CLASS_POPOVER_TIP, CLASS_POPOVER_TITLE, CLASS_PREV_STEP_BTN, ID_POPOVER,
};

/// Named sub-elements of the popover node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PopoverPart {
    /// The popover element itself.
    Root,
    Tip,
    Title,
    Description,
    Footer,
    PrevButton,
    NextButton,
    CloseButton,
}

impl PopoverPart {
    /// Every part, root first.
    pub const ALL: [Self; 8] = [
        Self::Root,
        Self::Tip,
        Self::Title,
        Self::Description,
        Self::Footer,
        Self::PrevButton,
        Self::NextButton,
        Self::CloseButton,
    ];

    /// Position of this part in [`PopoverPart::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Self::Root => 0,
            Self::Tip => 1,
            Self::Title => 2,
            Self::Description => 3,
            Self::Footer => 4,
            Self::PrevButton => 5,
            Self::NextButton => 6,
            Self::CloseButton => 7,
        }
    }

    /// Class used to locate this part inside the root.
    ///
    /// The root is located by id instead and returns [`ID_POPOVER`].
    pub const fn selector_class(self) -> &'static str {
        match self {
            Self::Root => ID_POPOVER,
            Self::Tip => CLASS_POPOVER_TIP,
            Self::Title => CLASS_POPOVER_TITLE,
            Self::Description => CLASS_POPOVER_DESCRIPTION,
            Self::Footer => CLASS_POPOVER_FOOTER,
            Self::PrevButton => CLASS_PREV_STEP_BTN,
            Self::NextButton => CLASS_NEXT_STEP_BTN,
            Self::CloseButton => CLASS_CLOSE_BTN,
        }
    }
}

impl fmt::Display for PopoverPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Root => "root",
            Self::Tip => "tip",
            Self::Title => "title",
            Self::Description => "description",
            Self::Footer => "footer",
            Self::PrevButton => "prev button",
            Self::NextButton => "next button",
            Self::CloseButton => "close button",
        };
        f.write_str(name)
    }
}

/// Whether a part is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// `display: block`
    Shown,
    /// `display: none`
    Hidden,
}

impl Visibility {
    /// CSS `display` value.
    pub const fn css(self) -> &'static str {
        match self {
            Self::Shown => "block",
            Self::Hidden => "none",
        }
    }
}

/// Absolute-positioning styles of the root element, in pixels.
///
/// `None` clears the property.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StyleOffset {
    pub left: Option<f64>,
    pub top: Option<f64>,
    pub right: Option<f64>,
    pub bottom: Option<f64>,
}

impl StyleOffset {
    /// Unpositioned baseline: `left = top = 0`, no `right`/`bottom`.
    pub const ORIGIN: Self = Self {
        left: Some(0.0),
        top: Some(0.0),
        right: None,
        bottom: None,
    };

    /// Baseline with the computed coordinates written over it.
    pub fn from_offset(offset: Offset) -> Self {
        Self {
            left: offset.left.or(Self::ORIGIN.left),
            top: offset.top.or(Self::ORIGIN.top),
            right: None,
            bottom: None,
        }
    }
}

/// Format a style length the way CSS expects it (`"12px"`, or empty to clear).
pub fn css_px(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v}px"),
        None => String::new(),
    }
}

/// Handle to the popover node and its sub-elements.
///
/// All writes are full overwrites of the addressed property, so applying
/// the same sequence twice leaves the same state.
pub trait PopoverNode {
    /// Handle to a sub-element, handed out to overlay components.
    type Element: Clone;

    /// Sub-element handle.
    fn element(&self, part: PopoverPart) -> Self::Element;

    fn set_visibility(&mut self, part: PopoverPart, visibility: Visibility);

    /// Overwrite the root's `left`/`top`/`right`/`bottom` styles.
    fn set_style_offset(&mut self, offset: StyleOffset);

    /// Replace every class on `part` with `class_name`.
    fn set_class_name(&mut self, part: PopoverPart, class_name: &str);

    fn add_class(&mut self, part: PopoverPart, class: &str);

    fn remove_class(&mut self, part: PopoverPart, class: &str);

    /// Write trusted markup into `part`. No sanitization happens here.
    fn set_inner_html(&mut self, part: PopoverPart, html: &str);

    /// Current rendered size of the root.
    fn measure(&self) -> Size;
}

/// Page and viewport dimensions.
pub trait Viewport {
    fn page_size(&self) -> PageSize;
}

/// Creates or locates the popover node.
pub trait SurfaceHost {
    type Node: PopoverNode;
    type Viewport: Viewport;

    /// Return the popover node, injecting the template on first use.
    ///
    /// Later calls return a handle to the same node.
    fn ensure_popover(&mut self) -> Result<Self::Node, SurfaceError>;

    /// Viewport of the page hosting the node.
    fn viewport(&self) -> Self::Viewport;
}

/// Failure to obtain a usable popover node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// The popover root exists but a named sub-element does not.
    MissingPart(PopoverPart),
    /// The host could not create or attach the template.
    Injection(String),
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPart(part) => write!(
                f,
                "popover {part} not found (expected .{})",
                part.selector_class()
            ),
            Self::Injection(msg) => write!(f, "failed to inject popover template: {msg}"),
        }
    }
}

impl std::error::Error for SurfaceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_indices_follow_all() {
        for (i, part) in PopoverPart::ALL.into_iter().enumerate() {
            assert_eq!(part.index(), i);
        }
    }

    #[test]
    fn origin_clears_right_and_bottom() {
        assert_eq!(StyleOffset::ORIGIN.left, Some(0.0));
        assert_eq!(StyleOffset::ORIGIN.top, Some(0.0));
        assert!(StyleOffset::ORIGIN.right.is_none());
        assert!(StyleOffset::ORIGIN.bottom.is_none());
    }

    #[test]
    fn from_offset_keeps_baseline_for_missing_axis() {
        let style = StyleOffset::from_offset(Offset {
            top: Some(40.0),
            left: None,
        });
        assert_eq!(style.top, Some(40.0));
        assert_eq!(style.left, Some(0.0));
    }

    #[test]
    fn css_px_formats() {
        assert_eq!(css_px(Some(12.0)), "12px");
        assert_eq!(css_px(Some(-3.5)), "-3.5px");
        assert_eq!(css_px(None), "");
    }

    #[test]
    fn error_messages() {
        let err = SurfaceError::MissingPart(PopoverPart::Tip);
        assert_eq!(
            err.to_string(),
            "popover tip not found (expected .driver-popover-tip)"
        );
        let err = SurfaceError::Injection("no body".into());
        assert!(err.to_string().contains("no body"));
    }
}
