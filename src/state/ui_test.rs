use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_shows_feed() {
    let state = UiState::default();
    assert_eq!(state.section, Section::Feed);
    assert!(!state.mobile_nav_open);
}

// =============================================================
// Section selection
// =============================================================

#[test]
fn select_from_drawer_closes_it() {
    let mut state = UiState { mobile_nav_open: true, ..UiState::default() };
    state.select(Section::Scrapbook, true);
    assert_eq!(state.section, Section::Scrapbook);
    assert!(!state.mobile_nav_open);
}

#[test]
fn select_from_sidebar_leaves_drawer_alone() {
    let mut state = UiState { mobile_nav_open: true, ..UiState::default() };
    state.select(Section::Profile, false);
    assert_eq!(state.section, Section::Profile);
    assert!(state.mobile_nav_open);
}

#[test]
fn section_labels_match_menu() {
    let labels: Vec<_> = Section::ALL.iter().map(|s| s.label()).collect();
    assert_eq!(labels, vec!["Feed", "Events", "Profile", "Scrapbook"]);
}
