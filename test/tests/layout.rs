//! Layout tests: region rectangles computed from the grid templates.

use app_shell_test::prelude::*;
use serial_test::serial;

#[test]
#[serial]
fn test_narrow_layout_stacks_nav_above_main() {
    fresh_viewport();
    let harness = HeadlessHarness::new_with_size(App::new(), 500.0, 800.0);

    assert_rect(harness.region_rect("nav"), 0.0, 0.0, 500.0, 60.0);
    assert_rect(harness.region_rect("main"), 0.0, 60.0, 500.0, 740.0);
}

#[test]
#[serial]
fn test_wide_layout_spans_nav_and_splits_row_two() {
    fresh_viewport();
    let harness = HeadlessHarness::new_with_size(App::new(), 1200.0, 800.0);

    assert_rect(harness.region_rect("nav"), 0.0, 0.0, 1200.0, 60.0);
    assert_rect(harness.region_rect("aside"), 0.0, 60.0, 600.0, 740.0);
    assert_rect(harness.region_rect("main"), 600.0, 60.0, 600.0, 740.0);
}

#[test]
#[serial]
fn test_layout_follows_resize() {
    fresh_viewport();
    let mut harness = HeadlessHarness::new_with_size(App::new(), 1200.0, 800.0);

    harness.set_size(600.0, 400.0);
    assert_rect(harness.region_rect("nav"), 0.0, 0.0, 600.0, 60.0);
    assert_rect(harness.region_rect("main"), 0.0, 60.0, 600.0, 340.0);
    assert!(harness.region_rect("aside").is_none());
}

#[test]
#[serial]
fn test_configured_columns_and_nav_height() {
    fresh_viewport();
    let config = ShellConfig::from_json_str(
        r#"{
            "nav_height": 48,
            "templates": {
                "base": { "areas": "\"nav\" \"main\"" },
                "lg": {
                    "areas": "\"nav nav\" \"aside main\"",
                    "columns": [{ "px": 240 }, { "fr": 1 }]
                }
            }
        }"#,
    )
    .unwrap();
    let harness = HeadlessHarness::new_with_size(App::from_config(&config).unwrap(), 1240.0, 648.0);

    assert_rect(harness.region_rect("nav"), 0.0, 0.0, 1240.0, 48.0);
    assert_rect(harness.region_rect("aside"), 0.0, 48.0, 240.0, 600.0);
    assert_rect(harness.region_rect("main"), 240.0, 48.0, 1000.0, 600.0);
}

#[test]
#[serial]
fn test_show_takes_no_box_of_its_own() {
    fresh_viewport();
    let harness = HeadlessHarness::new_with_size(App::new(), 1200.0, 800.0);

    let snapshot = harness.snapshot();
    let show = snapshot.iter().find(|node| node.name == "Show").unwrap();
    assert!(show.rect.is_none());
    assert_eq!(show.children.len(), 1);
    assert!(show.children[0].rect.is_some());
}
