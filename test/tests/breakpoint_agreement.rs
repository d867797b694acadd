//! The shell answers "is the aside shown?" twice: once through the derived
//! `show_aside` value (min-width thresholds), once through `Show`'s screen
//! size flags. These tests sweep widths to check the two never disagree.

use app_shell_test::prelude::*;
use serial_test::serial;

fn assert_agrees(harness: &HeadlessHarness, aside: app_shell::AsideState, width: f64) {
    let mounted = harness.region("aside").is_some();
    assert_eq!(aside.get(), Some(mounted), "width {width}");
    assert_eq!(
        harness.active_template().unwrap().contains_area("aside"),
        mounted,
        "width {width}"
    );
}

#[test]
#[serial]
fn test_derived_value_and_show_agree_for_every_width() {
    fresh_viewport();
    let app = App::new();
    let aside = app.aside_state();
    let mut harness = HeadlessHarness::new_with_size(app, 0.0, 600.0);

    for width in (0..=2000).map(f64::from) {
        harness.set_size(width, 600.0);
        assert_agrees(&harness, aside, width);
    }
}

#[test]
#[serial]
fn test_agreement_at_threshold_edges() {
    fresh_viewport();
    let app = App::new();
    let aside = app.aside_state();
    let mut harness = HeadlessHarness::new_with_size(app, 500.0, 600.0);

    for width in [991.0, 991.5, 991.999, 992.0, 992.001, 991.999, 1199.5, 1200.0, 1399.9, 1400.0] {
        harness.set_size(width, 600.0);
        assert_agrees(&harness, aside, width);
    }
    harness.set_size(992.0, 600.0);
    assert_eq!(aside.get(), Some(true));
    harness.set_size(991.999, 600.0);
    assert_eq!(aside.get(), Some(false));
}

#[test]
#[serial]
fn test_agreement_with_configured_breakpoints() {
    fresh_viewport();
    let mut config = ShellConfig::default();
    config.breakpoints = GridBreakpoints::new(600.0, 900.0, 1100.0, 1300.0, 1500.0).unwrap();
    let app = App::from_config(&config).unwrap();
    let aside = app.aside_state();
    let mut harness = HeadlessHarness::new_with_size(app, 0.0, 600.0);

    for width in (0..=1800).step_by(7).map(f64::from) {
        harness.set_size(width, 600.0);
        assert_agrees(&harness, aside, width);
    }

    harness.set_size(1050.0, 600.0);
    assert_eq!(aside.get(), Some(false));
    harness.set_size(1100.0, 600.0);
    assert_eq!(aside.get(), Some(true));
}
