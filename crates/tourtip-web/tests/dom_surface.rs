#![cfg(target_arch = "wasm32")]
#![forbid(unsafe_code)]

//! Browser tests for the DOM surface.
//!
//! Run:
//!   wasm-pack test --headless --firefox crates/tourtip-web

use tourtip_core::{PlacementMode, Position, TipOrientation};
use tourtip_web::DomHost;
use tourtip_widgets::classes::{CLASS_POPOVER_TIP, ID_POPOVER};
use tourtip_widgets::{Popover, PopoverNode, PopoverOptions, PopoverPart, StepProgress};
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn injects_template_once() {
    let mut host = DomHost::from_window().expect("browser document");
    let _first = Popover::attach(&mut host, PopoverOptions::default()).expect("inject");
    let _second = Popover::attach(&mut host, PopoverOptions::default()).expect("reuse");
    let document = web_sys::window()
        .and_then(|w| w.document())
        .expect("browser document");
    let found = document
        .query_selector_all(&format!("#{ID_POPOVER}"))
        .expect("valid selector");
    assert_eq!(found.length(), 1);
}

#[wasm_bindgen_test]
fn show_writes_style_and_tip_class() {
    let mut host = DomHost::from_window().expect("browser document");
    let options = PopoverOptions::builder()
        .position(PlacementMode::Right)
        .padding(5.0)
        .title("Title")
        .progress(StepProgress::for_step(0, 2))
        .build();
    let mut popover = Popover::attach(&mut host, options).expect("inject");
    let placement = popover.show(&Position::new(100.0, 120.0, 40.0, 90.0));
    assert_eq!(placement.orientation, TipOrientation::Left);

    let root = popover.node().element(PopoverPart::Root);
    assert_eq!(root.style().get_property_value("left").ok().as_deref(), Some("105px"));
    assert_eq!(root.style().get_property_value("top").ok().as_deref(), Some("95px"));
    let tip = popover.node().element(PopoverPart::Tip);
    assert_eq!(tip.class_name(), format!("{CLASS_POPOVER_TIP} left"));
    assert_eq!(popover.title_node().inner_html(), "Title");
}
