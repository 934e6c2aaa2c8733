use visibility_tracker::{
    EventQueue, ScrollHost, Size, TrackerOptions, Vec2, ViewportFrame, VisibilityChangeKind,
};
use visibility_tracker_adapter::{Controller, Easing, GridLayout};

fn main() {
    // Example: a 4-column grid of 10k cells. Only cells that enter or leave the viewport are
    // reported, so an adapter can hide everything else (e.g. set its opacity to zero).
    let frame = ViewportFrame::new(Vec2::ZERO, Vec2::ZERO, Size::new(480.0, 640.0));
    let layout = GridLayout::grid(4, Size::new(110.0, 110.0)).with_spacing(Size::new(10.0, 10.0));

    let mut c = Controller::new(frame, TrackerOptions::default(), EventQueue::new());
    let report = c.init_grid(&layout, (0..10_000u32).map(Some), EventQueue::new());
    println!(
        "initial window={:?} tested={}",
        report.window, report.tested
    );
    c.listener_mut().clear();

    let target = c.scroll_to_index_animated(2_000, 0, 240, Easing::EaseOutQuint);
    println!("target_offset={target:?}");

    let mut now_ms = 0u64;
    while c.is_animating() {
        now_ms += 16;
        if let Some(report) = c.tick(now_ms) {
            let (mut shown, mut hidden) = (0usize, 0usize);
            for change in c.listener_mut().drain() {
                match change.kind {
                    VisibilityChangeKind::Enter => shown += 1,
                    VisibilityChangeKind::Exit => hidden += 1,
                }
            }
            if now_ms % 80 == 0 {
                println!(
                    "t={now_ms} window={:?} tested={} enter={shown} exit={hidden}",
                    report.window, report.tested
                );
            }
        }
    }

    println!(
        "done: offset={:?} window={:?}",
        c.view().scroll_offset(),
        c.tracker().window()
    );
}
