#![forbid(unsafe_code)]

use tourtip_core::{PageSize, Size};
use tourtip_widgets::classes::{ID_POPOVER, POPOVER_HTML};
use tourtip_widgets::surface::{
    PopoverNode, PopoverPart, StyleOffset, SurfaceError, SurfaceHost, Viewport, Visibility,
    css_px,
};
use tracing::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use crate::page::PageMetrics;

fn js_message(err: &JsValue) -> String {
    err.dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{err:?}"))
}

fn injection_error(err: JsValue) -> SurfaceError {
    SurfaceError::Injection(js_message(&err))
}

fn set_style(el: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = el.style().set_property(property, value) {
        warn!(property, value, error = %js_message(&err), "failed to set popover style");
    }
}

/// Page that owns the popover element.
#[derive(Debug, Clone)]
pub struct DomHost {
    document: Document,
}

impl DomHost {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Host for the current window's document.
    pub fn from_window() -> Result<Self, SurfaceError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| SurfaceError::Injection("no window document".to_owned()))?;
        Ok(Self::new(document))
    }

    fn inject(&self) -> Result<HtmlElement, SurfaceError> {
        let body = self
            .document
            .body()
            .ok_or_else(|| SurfaceError::Injection("document has no <body>".to_owned()))?;
        let template = self
            .document
            .create_element("div")
            .map_err(injection_error)?;
        template.set_inner_html(POPOVER_HTML.trim());
        let root = template
            .first_element_child()
            .ok_or_else(|| SurfaceError::Injection("empty popover template".to_owned()))?;
        body.append_child(&root).map_err(injection_error)?;
        debug!(id = ID_POPOVER, "injected popover template");
        into_html(root, PopoverPart::Root)
    }
}

fn into_html(el: Element, part: PopoverPart) -> Result<HtmlElement, SurfaceError> {
    el.dyn_into::<HtmlElement>()
        .map_err(|_| SurfaceError::MissingPart(part))
}

impl SurfaceHost for DomHost {
    type Node = DomNode;
    type Viewport = DomViewport;

    fn ensure_popover(&mut self) -> Result<DomNode, SurfaceError> {
        let root = match self.document.get_element_by_id(ID_POPOVER) {
            Some(el) => into_html(el, PopoverPart::Root)?,
            None => self.inject()?,
        };
        DomNode::resolve(root)
    }

    fn viewport(&self) -> DomViewport {
        DomViewport {
            document: self.document.clone(),
        }
    }
}

/// Popover element with its sub-elements resolved.
#[derive(Debug, Clone)]
pub struct DomNode {
    parts: Vec<HtmlElement>,
}

impl DomNode {
    /// Look up every named part below `root`.
    pub fn resolve(root: HtmlElement) -> Result<Self, SurfaceError> {
        let mut parts = Vec::with_capacity(PopoverPart::ALL.len());
        for part in PopoverPart::ALL {
            if part == PopoverPart::Root {
                parts.push(root.clone());
                continue;
            }
            let selector = format!(".{}", part.selector_class());
            let el = root
                .query_selector(&selector)
                .map_err(injection_error)?
                .ok_or(SurfaceError::MissingPart(part))?;
            parts.push(into_html(el, part)?);
        }
        Ok(Self { parts })
    }

    fn el(&self, part: PopoverPart) -> &HtmlElement {
        &self.parts[part.index()]
    }
}

impl PopoverNode for DomNode {
    type Element = HtmlElement;

    fn element(&self, part: PopoverPart) -> HtmlElement {
        self.el(part).clone()
    }

    fn set_visibility(&mut self, part: PopoverPart, visibility: Visibility) {
        set_style(self.el(part), "display", visibility.css());
    }

    fn set_style_offset(&mut self, offset: StyleOffset) {
        let root = self.el(PopoverPart::Root);
        set_style(root, "left", &css_px(offset.left));
        set_style(root, "top", &css_px(offset.top));
        set_style(root, "right", &css_px(offset.right));
        set_style(root, "bottom", &css_px(offset.bottom));
    }

    fn set_class_name(&mut self, part: PopoverPart, class_name: &str) {
        self.el(part).set_class_name(class_name);
    }

    fn add_class(&mut self, part: PopoverPart, class: &str) {
        if let Err(err) = self.el(part).class_list().add_1(class) {
            warn!(%part, class, error = %js_message(&err), "failed to add class");
        }
    }

    fn remove_class(&mut self, part: PopoverPart, class: &str) {
        if let Err(err) = self.el(part).class_list().remove_1(class) {
            warn!(%part, class, error = %js_message(&err), "failed to remove class");
        }
    }

    fn set_inner_html(&mut self, part: PopoverPart, html: &str) {
        self.el(part).set_inner_html(html);
    }

    fn measure(&self) -> Size {
        let root = self.el(PopoverPart::Root);
        Size::new(f64::from(root.offset_width()), f64::from(root.offset_height()))
    }
}

/// Live page dimensions of a document.
#[derive(Debug, Clone)]
pub struct DomViewport {
    document: Document,
}

impl DomViewport {
    fn metrics(&self) -> PageMetrics {
        let mut metrics = PageMetrics::default();
        if let Some(body) = self.document.body() {
            metrics.body_client_width = f64::from(body.client_width());
            metrics.body_client_height = f64::from(body.client_height());
            metrics.body_scroll_height = f64::from(body.scroll_height());
            metrics.body_offset_height = f64::from(body.offset_height());
        }
        if let Some(html) = self.document.document_element() {
            metrics.html_client_height = f64::from(html.client_height());
            metrics.html_scroll_height = f64::from(html.scroll_height());
            if let Some(html) = html.dyn_ref::<HtmlElement>() {
                metrics.html_offset_height = f64::from(html.offset_height());
            }
        }
        metrics
    }
}

impl Viewport for DomViewport {
    fn page_size(&self) -> PageSize {
        self.metrics().page_size()
    }
}
