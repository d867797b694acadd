//! Tests for the application shell's responsive regions.
//!
//! These tests verify that:
//! 1. Narrow viewports render nav and main only, with the single column template
//! 2. Viewports at or above `lg` add the aside and switch to the two column template
//! 3. Resizing mounts and unmounts the aside without rebuilding nav or main

use app_shell::peniko::color::palette;
use app_shell_test::prelude::*;
use serial_test::serial;

const NARROW: &str = r#""nav" "main""#;
const WIDE: &str = r#""nav nav" "aside main""#;

// =============================================================================
// Scenarios
// =============================================================================

#[test]
#[serial]
fn test_width_500_renders_nav_and_main() {
    fresh_viewport();
    let harness = HeadlessHarness::new_with_size(App::new(), 500.0, 800.0);

    assert_eq!(harness.regions(), vec!["nav", "main"]);
    assert!(harness.region("aside").is_none());
    assert_eq!(harness.active_template().unwrap().to_string(), NARROW);
}

#[test]
#[serial]
fn test_width_1200_renders_all_regions() {
    fresh_viewport();
    let harness = HeadlessHarness::new_with_size(App::new(), 1200.0, 800.0);

    assert_eq!(harness.regions(), vec!["nav", "aside", "main"]);
    assert_eq!(harness.active_template().unwrap().to_string(), WIDE);
}

// =============================================================================
// Region content
// =============================================================================

#[test]
#[serial]
fn test_region_text_and_fill() {
    fresh_viewport();
    let harness = HeadlessHarness::new_with_size(App::new(), 1200.0, 800.0);

    let main = harness.region("main").unwrap();
    assert_eq!(main.text_content(), "Main");
    assert_eq!(
        main.background.map(|c| c.to_rgba8()),
        Some(palette::css::CORAL.to_rgba8())
    );

    let aside = harness.region("aside").unwrap();
    assert_eq!(aside.text_content(), "Aside");
    assert_eq!(
        aside.background.map(|c| c.to_rgba8()),
        Some(palette::css::GOLD.to_rgba8())
    );

    let nav = harness.region("nav").unwrap();
    assert!(nav.background.is_none());
    assert!(nav.iter().any(|node| node.name == "NavBar"));
}

#[test]
#[serial]
fn test_narrow_widths_never_have_aside() {
    fresh_viewport();
    let mut harness = HeadlessHarness::new_with_size(App::new(), 320.0, 800.0);

    for width in [0.0, 320.0, 575.9, 576.0, 767.0, 768.0, 991.0, 991.99] {
        harness.set_size(width, 800.0);
        assert_eq!(harness.regions(), vec!["nav", "main"], "width {width}");
        assert_eq!(harness.region("main").unwrap().text_content(), "Main");
        assert_eq!(harness.active_template().unwrap().to_string(), NARROW);
    }
}

#[test]
#[serial]
fn test_wide_widths_always_have_aside() {
    fresh_viewport();
    let mut harness = HeadlessHarness::new_with_size(App::new(), 992.0, 800.0);

    for width in [992.0, 1000.0, 1199.9, 1200.0, 1400.0, 2560.0] {
        harness.set_size(width, 800.0);
        assert_eq!(harness.regions(), vec!["nav", "aside", "main"], "width {width}");
        assert_eq!(harness.region("aside").unwrap().text_content(), "Aside");
        assert_eq!(harness.active_template().unwrap().to_string(), WIDE);
    }
}

// =============================================================================
// First render
// =============================================================================

#[test]
#[serial]
fn test_unmeasured_viewport_degrades_to_narrow() {
    fresh_viewport();
    let app = App::new();
    let aside = app.aside_state();
    let mut harness = HeadlessHarness::unmeasured(app);

    assert_eq!(aside.get(), None);
    assert_eq!(harness.regions(), vec!["nav", "main"]);
    assert_eq!(harness.active_template().unwrap().to_string(), NARROW);
    assert!(harness.region_rect("main").is_none());

    harness.set_size(1200.0, 800.0);
    assert_eq!(aside.get(), Some(true));
    assert_eq!(harness.regions(), vec!["nav", "aside", "main"]);
}

// =============================================================================
// Resizing
// =============================================================================

#[test]
#[serial]
fn test_resize_mounts_aside_without_remounting_siblings() {
    fresh_viewport();
    let nav_tracker = MountTracker::new();
    let app = App::with_nav(nav_tracker.track(NavBar::new));
    let mut harness = HeadlessHarness::new_with_size(app, 500.0, 800.0);

    let nav_id = harness.region("nav").unwrap().id;
    let main_id = harness.region("main").unwrap().id;

    harness.set_size(1200.0, 800.0);

    let aside_id = harness.region("aside").unwrap().id;
    assert_eq!(harness.region("nav").unwrap().id, nav_id);
    assert_eq!(harness.region("main").unwrap().id, main_id);
    assert_eq!(nav_tracker.mounts(), 1);

    harness.set_size(700.0, 800.0);
    assert!(harness.region("aside").is_none());
    assert!(!aside_id.is_valid(), "aside subtree should be removed, not hidden");
    assert_eq!(harness.region("nav").unwrap().id, nav_id);
    assert_eq!(harness.region("main").unwrap().id, main_id);

    harness.set_size(1300.0, 800.0);
    let remounted = harness.region("aside").unwrap().id;
    assert_ne!(remounted, aside_id);
    assert_eq!(nav_tracker.mounts(), 1);
}

#[test]
#[serial]
fn test_resize_within_a_tier_keeps_aside() {
    fresh_viewport();
    let mut harness = HeadlessHarness::new_with_size(App::new(), 1000.0, 800.0);
    let aside_id = harness.region("aside").unwrap().id;

    harness.set_size(1250.0, 800.0);
    harness.set_size(1600.0, 900.0);
    assert_eq!(harness.region("aside").unwrap().id, aside_id);
}

// =============================================================================
// Several shells
// =============================================================================

#[test]
#[serial]
fn test_shells_with_different_breakpoints_keep_their_own_tiers() {
    fresh_viewport();
    let stock = App::new();
    let stock_aside = stock.aside_state();

    let mut config = ShellConfig::default();
    config.breakpoints = GridBreakpoints::new(600.0, 900.0, 1100.0, 1300.0, 1500.0).unwrap();
    let configured = App::from_config(&config).unwrap();
    let configured_aside = configured.aside_state();

    let view = v_stack(vec![stock.into_any(), configured.into_any()]);
    let mut harness = HeadlessHarness::new_with_size(view, 1050.0, 800.0);

    assert_eq!(stock_aside.get(), Some(true));
    assert_eq!(configured_aside.get(), Some(false));
    assert_eq!(harness.regions(), vec!["nav", "aside", "main", "nav", "main"]);
    assert_eq!(harness.viewport().breakpoints(), GridBreakpoints::default());

    harness.set_size(1100.0, 800.0);
    assert_eq!(configured_aside.get(), Some(true));
    assert_eq!(
        harness.regions(),
        vec!["nav", "aside", "main", "nav", "aside", "main"]
    );
}
