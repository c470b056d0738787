#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tourtip_core::{PageSize, Position, Size};
use tourtip_widgets::classes::CLASS_POPOVER_TIP;
use tourtip_widgets::memory::MemoryHost;
use tourtip_widgets::{Popover, PopoverOptions, PopoverPart, StepProgress};

#[derive(Debug, Arbitrary)]
struct Step {
    mode: String,
    title: String,
    index: u8,
    total: u8,
    show_buttons: bool,
    target: [i16; 4],
}

fuzz_target!(|steps: Vec<Step>| {
    let mut host = MemoryHost::new(PageSize::new(1280.0, 800.0, 3000.0));
    let Ok(mut popover) = Popover::attach(&mut host, PopoverOptions::default()) else {
        return;
    };
    popover.node().set_size(Size::new(240.0, 120.0));

    for step in steps.iter().take(32) {
        let options = PopoverOptions::builder()
            .position_str(&step.mode)
            .title(step.title.as_str())
            .show_buttons(step.show_buttons)
            .progress(StepProgress::for_step(step.index.into(), step.total.into()))
            .build();
        popover.set_options(options);
        let [x, y, w, h] = step.target.map(f64::from);
        popover.show(&Position::from_rect(x, y, w, h));

        // Base class plus exactly one marker after every step.
        let classes = popover.node().classes(PopoverPart::Tip);
        assert_eq!(classes.len(), 2);
        assert_eq!(classes[0], CLASS_POPOVER_TIP);
    }
});
