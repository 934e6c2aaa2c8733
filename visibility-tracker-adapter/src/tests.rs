use crate::*;

use alloc::vec::Vec;

use visibility_tracker::{
    Aabb, EdgePolicy, EventQueue, ScanDirection, ScrollHost, Size, TrackerOptions, Vec2,
    ViewportFrame, VisibilityChangeKind, VisibleWindow,
};

fn frame() -> ViewportFrame {
    ViewportFrame::new(Vec2::ZERO, Vec2::ZERO, Size::new(300.0, 250.0))
}

/// 3 columns of 100x100 cells with 10 spacing: row `r` spans `110 * r .. 110 * r + 100`.
fn layout() -> GridLayout {
    GridLayout::grid(3, Size::new(100.0, 100.0)).with_spacing(Size::new(10.0, 10.0))
}

/// Indexes of the bound children intersecting the viewport, found by testing every child.
fn brute_force_visible<T>(view: &ScrollView<T>) -> Vec<usize> {
    let viewport = view.frame().world_box();
    (0..view.child_count())
        .filter(|&i| {
            let Some(node) = view.child(i) else {
                return false;
            };
            let bounds = view.world_bounds(i, node);
            bounds.intersects(&viewport, EdgePolicy::Inclusive)
        })
        .collect()
}

fn controller() -> Controller<u32, EventQueue> {
    let mut c = Controller::new(frame(), TrackerOptions::default(), EventQueue::new());
    c.init_data(layout().nodes((0..30u32).map(Some)), EventQueue::new());
    c
}

#[test]
fn grid_places_cells_row_major_and_column_major() {
    let g = layout();
    assert_eq!(g.place(0), LayoutBox::new(0.0, 0.0, 100.0, 100.0));
    assert_eq!(g.place(4), LayoutBox::new(110.0, 110.0, 100.0, 100.0));

    let h = GridLayout {
        flow: Flow::Horizontal,
        lines: 2,
        cell: Size::new(50.0, 20.0),
        spacing: Size::new(5.0, 0.0),
    };
    assert_eq!(h.place(3), LayoutBox::new(55.0, 20.0, 50.0, 20.0));

    let list = GridLayout::vertical_list(Size::new(300.0, 40.0));
    assert_eq!(list.place(7).top, 280.0);
}

#[test]
fn scroll_view_tracks_content_size_and_clamps() {
    let c = controller();
    let view = c.view();
    assert_eq!(view.content_size(), Size::new(320.0, 1090.0));
    assert_eq!(view.min_offset(), Vec2::new(-20.0, 0.0));
    assert_eq!(view.max_offset(), Vec2::new(0.0, 840.0));
    assert_eq!(
        view.clamp_offset(Vec2::new(-100.0, 5000.0)),
        Vec2::new(-20.0, 840.0)
    );
    assert_eq!(view.offset_for_index(12), Some(Vec2::new(0.0, 440.0)));
    assert_eq!(view.offset_for_index(13), Some(Vec2::new(-20.0, 440.0)));
    assert_eq!(view.offset_for_index(30), None);
}

#[test]
fn world_bounds_follow_frame_anchor_and_offset() {
    let centered = ViewportFrame::new(
        Vec2::new(150.0, 125.0),
        Vec2::new(0.5, 0.5),
        Size::new(300.0, 250.0),
    );
    let mut view = ScrollView::new(centered);
    let first = LayoutBox::new(110.0, 0.0, 100.0, 100.0);
    let second = LayoutBox::new(0.0, 400.0, 100.0, 100.0);
    view.push_child(Some(Node::tracked(first, 1u32)));
    view.push_child(Some(Node::tracked(second, 2u32)));

    let node = view.child(0).unwrap();
    let expected = Aabb::new(110.0, 150.0, 100.0, 100.0);
    assert_eq!(view.world_bounds(0, node), expected);

    view.set_scroll_offset(Vec2::new(0.0, 100.0));
    let node = view.child(0).unwrap();
    let expected = Aabb::new(110.0, 250.0, 100.0, 100.0);
    assert_eq!(view.world_bounds(0, node), expected);
}

#[test]
fn init_data_reports_the_first_rows() {
    let c = controller();
    assert_eq!(c.tracker().window(), VisibleWindow::new(0, 8));
    let entered = c
        .listener()
        .changes()
        .iter()
        .filter(|ch| ch.kind == VisibilityChangeKind::Enter)
        .count();
    assert_eq!(entered, 9);
}

#[test]
fn scrolling_hook_moves_the_window() {
    let mut c = controller();
    c.listener_mut().clear();

    let report = c.on_scroll(Vec2::new(0.0, 150.0)).unwrap();
    assert_eq!(report.direction, Some(ScanDirection::Forward));
    assert_eq!(report.window, VisibleWindow::new(3, 11));

    let report = c.on_scroll(Vec2::new(0.0, 5000.0)).unwrap();
    assert_eq!(c.view().scroll_offset(), Vec2::new(0.0, 840.0));
    assert_eq!(report.window, VisibleWindow::new(21, 29));

    let report = c.on_scroll(Vec2::ZERO).unwrap();
    assert_eq!(report.direction, Some(ScanDirection::Backward));
    assert_eq!(report.window, VisibleWindow::new(0, 8));
}

#[test]
fn disabled_controller_skips_the_hook_but_allows_manual_scans() {
    let mut c = controller();
    c.set_enabled(false);
    assert!(c.on_scroll(Vec2::new(0.0, 150.0)).is_none());
    assert_eq!(c.tracker().window(), VisibleWindow::new(0, 8));

    let report = c.scan();
    assert_eq!(report.window, VisibleWindow::new(3, 11));

    c.set_enabled(true);
    assert!(c.on_scroll(Vec2::new(0.0, 0.0)).is_some());
    assert_eq!(c.tracker().window(), VisibleWindow::new(0, 8));
}

#[test]
fn animated_scroll_to_index_scans_every_tick() {
    let mut c = controller();
    let target = c.scroll_to_index_animated(15, 0, 100, Easing::Linear);
    assert_eq!(target, Some(Vec2::new(0.0, 550.0)));
    assert!(c.is_animating());

    let report = c.tick(0).unwrap();
    assert_eq!(report.window, VisibleWindow::new(0, 8));

    let report = c.tick(50).unwrap();
    assert_eq!(c.view().scroll_offset(), Vec2::new(0.0, 275.0));
    assert_eq!(report.window, VisibleWindow::new(6, 14));

    let report = c.tick(100).unwrap();
    assert_eq!(c.view().scroll_offset(), Vec2::new(0.0, 550.0));
    assert_eq!(report.window, VisibleWindow::new(15, 23));
    assert!(!c.is_animating());
    assert!(c.tick(120).is_none());
}

#[test]
fn user_scroll_and_disable_cancel_animation() {
    let mut c = controller();
    c.scroll_to_offset_animated(Vec2::new(0.0, 600.0), 0, 200, Easing::EaseOutQuint);
    c.tick(20);
    c.on_scroll(Vec2::new(0.0, 10.0));
    assert!(!c.is_animating());

    c.scroll_to_top_left_animated(0, 200, Easing::SmoothStep);
    assert!(c.is_animating());
    c.set_enabled(false);
    assert!(!c.is_animating());
    let target = c.scroll_to_index_animated(99, 0, 100, Easing::Linear);
    assert!(target.is_none());
}

#[test]
fn untracked_cells_are_scrolled_but_never_reported() {
    let mut c = Controller::new(frame(), TrackerOptions::default(), EventQueue::new());
    let markers = (0..30u32).map(|i| (i % 3 != 0 || i < 3).then_some(i));
    let report = c.init_data(layout().nodes(markers), EventQueue::new());
    assert_eq!(report.window, VisibleWindow::new(0, 2));
    assert_eq!(report.untracked, 1);
    assert!(c.listener().changes().iter().all(|ch| ch.index != 3));
}

#[test]
fn tween_samples_and_retargets() {
    let to = Vec2::new(-40.0, 200.0);
    let mut t = Tween::new(Vec2::ZERO, to, 100, 100, Easing::Linear);
    assert_eq!(t.sample(100), Vec2::ZERO);
    assert_eq!(t.sample(150), Vec2::new(-20.0, 100.0));
    assert_eq!(t.sample(500), Vec2::new(-40.0, 200.0));

    t.retarget(150, Vec2::ZERO, 0);
    assert_eq!(t.from, Vec2::new(-20.0, 100.0));
    assert_eq!(t.duration_ms, 1);
    assert!(t.is_done(151));

    for easing in [
        Easing::Linear,
        Easing::SmoothStep,
        Easing::EaseInOutCubic,
        Easing::EaseOutQuint,
    ] {
        assert_eq!(easing.sample(0.0), 0.0);
        assert_eq!(easing.sample(1.0), 1.0);
    }
}

#[test]
fn grids_scroll_along_their_flow_only() {
    let mut c = Controller::new(frame(), TrackerOptions::default(), EventQueue::new());
    let report = c.init_grid(&layout(), (0..30u32).map(Some), EventQueue::new());
    assert_eq!(c.view().scroll_axis(), Some(Flow::Vertical));
    assert_eq!(c.view().min_offset(), Vec2::ZERO);
    assert_eq!(report.window, VisibleWindow::new(0, 8));

    let report = c.on_scroll(Vec2::new(-200.0, 150.0)).unwrap();
    assert_eq!(c.view().scroll_offset(), Vec2::new(0.0, 150.0));
    assert_eq!(report.window, VisibleWindow::new(3, 11));
    assert_eq!(brute_force_visible(c.view()), (3..=11).collect::<Vec<_>>());
}

#[test]
fn lines_starting_outside_the_view_do_not_fit() {
    let narrow = Size::new(200.0, 250.0);
    assert!(!layout().fits_cross_axis(narrow));
    assert!(layout().fits_cross_axis(frame().size));

    let list = GridLayout::vertical_list(Size::new(500.0, 40.0));
    assert!(list.fits_cross_axis(narrow));
    assert_eq!(list.scroll_axis(), None);

    // The third column never intersects a 200 wide view, so the visible cells are not one run.
    let mut view = ScrollView::new(ViewportFrame::new(Vec2::ZERO, Vec2::ZERO, narrow));
    for node in layout().nodes((0..9u32).map(Some)) {
        view.push_child(node);
    }
    assert_eq!(brute_force_visible(&view), [0, 1, 3, 4, 6, 7]);
}

#[test]
fn horizontal_axis_pins_vertical_offset() {
    // 3 rows of 100x100 cells filled column by column: 300 tall in a 250 tall view.
    let strip = GridLayout {
        flow: Flow::Horizontal,
        lines: 3,
        cell: Size::new(100.0, 100.0),
        spacing: Size::default(),
    };
    assert_eq!(strip.scroll_axis(), Some(Flow::Horizontal));
    assert!(strip.fits_cross_axis(frame().size));

    let mut c = Controller::new(frame(), TrackerOptions::default(), EventQueue::new());
    let report = c.init_grid(&strip, (0..20u32).map(Some), EventQueue::new());
    assert_eq!(report.window, VisibleWindow::new(0, 11));
    assert_eq!(c.view().content_size(), Size::new(700.0, 300.0));
    assert_eq!(c.view().max_offset(), Vec2::ZERO);

    let report = c.on_scroll(Vec2::new(-250.0, 40.0)).unwrap();
    assert_eq!(c.view().scroll_offset(), Vec2::new(-250.0, 0.0));
    assert_eq!(report.window, VisibleWindow::new(6, 17));
    assert_eq!(brute_force_visible(c.view()), (6..=17).collect::<Vec<_>>());
}
