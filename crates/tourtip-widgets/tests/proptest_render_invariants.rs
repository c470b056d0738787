//! Property-based invariants for repeated popover rendering.
//!
//! 1. The tip carries its base class plus exactly one orientation marker.
//! 2. Rendering a step twice yields identical node state.
//! 3. The footer is shown iff buttons are enabled and the tour has >1 step.
//! 4. Root positioning never keeps `right`/`bottom`.

use proptest::prelude::*;
use tourtip_core::{PageSize, PlacementMode, Position, Size, TipOrientation};
use tourtip_widgets::classes::CLASS_POPOVER_TIP;
use tourtip_widgets::memory::{MemoryHost, MemoryNode, MemoryViewport};
use tourtip_widgets::{Popover, PopoverOptions, PopoverPart, StepProgress, Visibility};

// ── Helpers ─────────────────────────────────────────────────────────────

fn mode() -> impl Strategy<Value = PlacementMode> {
    proptest::sample::select(PlacementMode::ALL.to_vec())
}

fn options() -> impl Strategy<Value = PopoverOptions> {
    (mode(), 0i32..=40, any::<bool>(), 0usize..6, 0usize..6).prop_map(
        |(mode, padding, show_buttons, index, total)| {
            PopoverOptions::builder()
                .position(mode)
                .padding(padding.into())
                .show_buttons(show_buttons)
                .progress(StepProgress::for_step(index, total))
                .build()
        },
    )
}

fn target() -> impl Strategy<Value = Position> {
    (0i32..2000, 0i32..4000, 1i32..400, 1i32..200).prop_map(|(x, y, w, h)| {
        Position::from_rect(x.into(), y.into(), w.into(), h.into())
    })
}

fn render(
    options: PopoverOptions,
    targets: &[Position],
) -> Popover<MemoryNode, MemoryViewport> {
    let mut host = MemoryHost::new(PageSize::new(1280.0, 800.0, 4000.0));
    let mut popover = Popover::attach(&mut host, options).expect("memory host");
    popover.node().set_size(Size::new(240.0, 120.0));
    for t in targets {
        popover.show(t);
    }
    popover
}

proptest! {
    #[test]
    fn single_marker_after_any_sequence(
        options in options(),
        targets in proptest::collection::vec(target(), 1..6),
    ) {
        let popover = render(options, &targets);
        let classes = popover.node().classes(PopoverPart::Tip);
        prop_assert_eq!(classes.len(), 2);
        prop_assert_eq!(classes[0].as_str(), CLASS_POPOVER_TIP);
        prop_assert!(TipOrientation::ALL.iter().any(|o| o.class_name() == classes[1]));
    }

    #[test]
    fn rerender_is_idempotent(options in options(), t in target()) {
        let once = render(options.clone(), &[t]);
        let twice = render(options, &[t, t]);
        for part in PopoverPart::ALL {
            prop_assert_eq!(once.node().part(part), twice.node().part(part));
        }
        prop_assert_eq!(once.node().style(), twice.node().style());
    }

    #[test]
    fn footer_visibility_rule(options in options(), t in target()) {
        let expected = if options.show_buttons && options.progress.total_count.unwrap_or(0) > 1 {
            Visibility::Shown
        } else {
            Visibility::Hidden
        };
        let popover = render(options, &[t]);
        prop_assert_eq!(popover.node().visibility(PopoverPart::Footer), Some(expected));
    }

    #[test]
    fn right_and_bottom_stay_cleared(options in options(), t in target()) {
        let popover = render(options, &[t]);
        let style = popover.node().style();
        prop_assert!(style.right.is_none());
        prop_assert!(style.bottom.is_none());
        prop_assert!(style.left.is_some());
        prop_assert!(style.top.is_some());
    }
}
