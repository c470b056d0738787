#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tourtip_core::{PageSize, PlacementMode, Position, Size, compute_position};

#[derive(Debug, Arbitrary)]
struct Input {
    mode: String,
    target: [f64; 4],
    size: [f64; 2],
    padding: f64,
    page: [f64; 3],
}

fuzz_target!(|input: Input| {
    // Arbitrary numbers, NaN and infinities included: the engine must never
    // panic and must always pick exactly one marker.
    let [top, bottom, left, right] = input.target;
    let target = Position::new(top, bottom, left, right);
    let size = Size::new(input.size[0], input.size[1]);
    let page = PageSize::new(input.page[0], input.page[1], input.page[2]);
    let mode = PlacementMode::parse(&input.mode);

    let placement = compute_position(mode, &target, size, input.padding, page);
    assert!(placement.offset.top.is_some());
    assert!(placement.offset.left.is_some());
    if mode == PlacementMode::Corner {
        assert!(placement.orientation.is_diagonal());
    } else {
        assert!(!placement.orientation.is_diagonal());
    }
});
