// Example: a minimal host plus closure callbacks, scrolled down and back up.
use std::cell::Cell;
use std::rc::Rc;

use visibility_tracker::{
    Aabb, Callbacks, ScrollHost, Size, TrackedItem, TrackerOptions, Vec2, ViewportFrame,
    VisibilityEvent, VisibilityTracker,
};

struct Row {
    top: f32,
    /// Only rows that carry a marker are tracked.
    label: Option<String>,
}

impl TrackedItem for Row {
    type Marker = String;

    fn marker(&self) -> Option<&String> {
        self.label.as_ref()
    }
}

#[derive(Default)]
struct List {
    offset: Vec2,
    rows: Vec<Option<Row>>,
}

const ROW_HEIGHT: f32 = 24.0;
const VIEW: Size = Size::new(320.0, 120.0);

impl ScrollHost for List {
    type Item = Row;

    fn scroll_offset(&self) -> Vec2 {
        self.offset
    }

    fn viewport_frame(&self) -> ViewportFrame {
        ViewportFrame::new(Vec2::ZERO, Vec2::ZERO, VIEW)
    }

    fn child_count(&self) -> usize {
        self.rows.len()
    }

    fn child(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)?.as_ref()
    }

    fn world_bounds(&self, _index: usize, row: &Row) -> Aabb {
        let content_top = VIEW.height + self.offset.y;
        let bottom = content_top - row.top - ROW_HEIGHT;
        Aabb::new(0.0, bottom + 1.0, VIEW.width, ROW_HEIGHT - 2.0)
    }

    fn clear_children(&mut self) {
        self.rows.clear();
    }

    fn push_child(&mut self, child: Option<Row>) {
        self.rows.push(child);
    }

    fn scroll_to_origin(&mut self) {
        self.offset = Vec2::ZERO;
    }
}

fn main() {
    let shown = Rc::new(Cell::new(0usize));
    let listener = Callbacks::new()
        .on_enter({
            let shown = Rc::clone(&shown);
            move |e: &VisibilityEvent<'_, Row>| {
                shown.set(shown.get() + 1);
                println!("enter #{} {}", e.index, e.marker);
            }
        })
        .on_exit(|e: &VisibilityEvent<'_, Row>| {
            println!("exit  #{} {}", e.index, e.marker);
        });

    let mut list = List::default();
    let mut tracker = VisibilityTracker::new(TrackerOptions::default(), Callbacks::new());
    let rows = (0..1_000).map(|i| {
        Some(Row {
            top: i as f32 * ROW_HEIGHT,
            label: Some(format!("row {i}")),
        })
    });
    let report = tracker.initialize(&mut list, rows, listener);
    println!(
        "initial window={:?} tested={}",
        report.window, report.tested
    );

    list.offset = Vec2::new(0.0, 10_000.0);
    let report = tracker.scan(&list);
    println!(
        "after scrolling down: window={:?} direction={:?} tested={}",
        report.window, report.direction, report.tested
    );

    list.offset = Vec2::new(0.0, 9_950.0);
    let report = tracker.scan(&list);
    println!(
        "after nudging up: window={:?} direction={:?} tested={}",
        report.window, report.direction, report.tested
    );
    println!("total enter callbacks: {}", shown.get());
}
