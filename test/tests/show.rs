//! Tests for breakpoint-gated mounting with `Show`.

use app_shell_test::prelude::*;
use serial_test::serial;

#[test]
#[serial]
fn test_child_is_not_built_while_outside_tiers() {
    fresh_viewport();
    let tracker = MountTracker::new();
    let view = v_stack(vec![
        Show::above(ScreenSizeBp::Lg, tracker.track(|| text("Aside"))).into_any(),
    ]);
    let mut harness = HeadlessHarness::new_with_size(view, 500.0, 800.0);

    assert_eq!(tracker.mounts(), 0);
    assert_eq!(harness.snapshot().text_content(), "");

    harness.set_size(800.0, 800.0);
    assert_eq!(tracker.mounts(), 0);

    harness.set_size(1200.0, 800.0);
    assert_eq!(tracker.mounts(), 1);
    assert_eq!(harness.snapshot().text_content(), "Aside");
}

#[test]
#[serial]
fn test_child_is_rebuilt_on_each_mount() {
    fresh_viewport();
    let tracker = MountTracker::new();
    let view = v_stack(vec![
        Show::above(ScreenSizeBp::Lg, tracker.track(|| text("Aside"))).into_any(),
    ]);
    let mut harness = HeadlessHarness::new_with_size(view, 1200.0, 800.0);
    assert_eq!(tracker.mounts(), 1);

    // Staying inside the tier set keeps the mounted child.
    harness.set_size(1500.0, 800.0);
    assert_eq!(tracker.mounts(), 1);

    harness.set_size(500.0, 800.0);
    assert_eq!(harness.snapshot().text_content(), "");

    harness.set_size(1000.0, 800.0);
    assert_eq!(tracker.mounts(), 2);
}

#[test]
#[serial]
fn test_show_below_is_the_inverse() {
    fresh_viewport();
    let view = v_stack(vec![
        Show::below(ScreenSizeBp::Lg, || text("narrow")).into_any(),
        Show::above(ScreenSizeBp::Lg, || text("wide")).into_any(),
    ]);
    let mut harness = HeadlessHarness::new_with_size(view, 500.0, 800.0);
    assert_eq!(harness.snapshot().text_content(), "narrow");

    harness.set_size(1200.0, 800.0);
    assert_eq!(harness.snapshot().text_content(), "wide");
}

#[test]
#[serial]
fn test_unmeasured_viewport_matches_nothing() {
    fresh_viewport();
    let tracker = MountTracker::new();
    let view = v_stack(vec![
        Show::new(range(ScreenSize::XS..), tracker.track(|| text("any"))).into_any(),
    ]);
    let mut harness = HeadlessHarness::unmeasured(view);
    assert_eq!(tracker.mounts(), 0);

    harness.set_size(100.0, 100.0);
    assert_eq!(tracker.mounts(), 1);
}

#[test]
#[serial]
fn test_reactive_label_inside_show() {
    fresh_viewport();
    let count = RwSignal::new(0);
    let view = v_stack(vec![
        Show::above(ScreenSizeBp::Lg, move || label(move || format!("count {}", count.get())))
            .into_any(),
    ]);
    let mut harness = HeadlessHarness::new_with_size(view, 1200.0, 800.0);
    assert_eq!(harness.snapshot().text_content(), "count 0");

    count.set(3);
    harness.rebuild();
    assert_eq!(harness.snapshot().text_content(), "count 3");
}
