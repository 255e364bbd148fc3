use super::*;

fn sections() -> Vec<Section> {
    vec![
        Section::new("home", 0.0),
        Section::new("services", 600.0),
        Section::new("pricing", 1400.0),
        Section::new("contact", 2200.0),
    ]
}

// =============================================================
// Header threshold
// =============================================================

#[test]
fn header_not_scrolled_at_or_below_threshold() {
    for y in [0.0, 5.0, 19.9, 20.0] {
        assert!(!is_scrolled(y, 20.0), "offset {y} should not be scrolled");
    }
}

#[test]
fn header_scrolled_above_threshold() {
    for y in [20.5, 21.0, 300.0, 10_000.0] {
        assert!(is_scrolled(y, 20.0), "offset {y} should be scrolled");
    }
}

// =============================================================
// Active section
// =============================================================

#[test]
fn first_section_active_at_top() {
    assert_eq!(active_section(&sections(), 0.0, 150.0), Some("home"));
}

#[test]
fn section_switches_lookahead_pixels_early() {
    let s = sections();
    assert_eq!(active_section(&s, 449.0, 150.0), Some("home"));
    assert_eq!(active_section(&s, 450.0, 150.0), Some("services"));
}

#[test]
fn last_passed_section_wins() {
    assert_eq!(active_section(&sections(), 5000.0, 150.0), Some("contact"));
}

#[test]
fn no_section_qualifies_when_all_are_below() {
    let s = vec![Section::new("about", 900.0), Section::new("team", 1800.0)];
    assert_eq!(active_section(&s, 100.0, 150.0), None);
}

#[test]
fn no_sections_means_no_active_section() {
    assert_eq!(active_section(&[], 400.0, 150.0), None);
}

#[test]
fn active_section_matches_reference_scan_for_many_offsets() {
    let s = sections();
    let mut y = 0.0;
    while y < 3000.0 {
        let mut expected = None;
        for section in &s {
            if y >= section.top - 150.0 {
                expected = Some(section.id.as_str());
            }
        }
        assert_eq!(active_section(&s, y, 150.0), expected, "offset {y}");
        y += 37.0;
    }
}

// =============================================================
// NavState
// =============================================================

#[test]
fn nav_state_tracks_scroll() {
    let mut nav = NavState::default();
    nav.on_scroll(700.0, &sections(), 20.0, 150.0);
    assert!(nav.header_scrolled);
    assert_eq!(nav.active_section.as_deref(), Some("services"));

    nav.on_scroll(0.0, &sections(), 20.0, 150.0);
    assert!(!nav.header_scrolled);
    assert_eq!(nav.active_section.as_deref(), Some("home"));
}

#[test]
fn nav_state_clears_active_section_when_none_qualifies() {
    let mut nav = NavState { header_scrolled: true, active_section: Some("team".into()) };
    nav.on_scroll(0.0, &[Section::new("team", 900.0)], 20.0, 150.0);
    assert_eq!(nav.active_section, None);
}

// =============================================================
// Links and anchors
// =============================================================

#[test]
fn link_active_only_for_matching_fragment() {
    assert!(link_is_active("#pricing", Some("pricing")));
    assert!(!link_is_active("#services", Some("pricing")));
    assert!(!link_is_active("pricing", Some("pricing")));
    assert!(!link_is_active("#pricing", None));
    assert!(!link_is_active("#", None));
}

#[test]
fn anchor_id_skips_bare_hash_and_external_links() {
    assert_eq!(anchor_id("#services"), Some("services"));
    assert_eq!(anchor_id("#"), None);
    assert_eq!(anchor_id("/about"), None);
    assert_eq!(anchor_id("https://example.com/#top"), None);
}
