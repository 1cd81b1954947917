//! Main-shell chrome state: which section is showing and whether the mobile
//! drawer is open.
//!
//! DESIGN
//! ======
//! Section switching stays local to the shell instead of going through the
//! router, so the feed keeps its scroll session while the drawer opens and
//! closes.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Content areas reachable from the left navigation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Feed,
    Events,
    Profile,
    Scrapbook,
}

impl Section {
    pub const ALL: [Self; 4] = [Self::Feed, Self::Events, Self::Profile, Self::Scrapbook];

    pub fn label(self) -> &'static str {
        match self {
            Self::Feed => "Feed",
            Self::Events => "Events",
            Self::Profile => "Profile",
            Self::Scrapbook => "Scrapbook",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Feed => "⌂",
            Self::Events => "▦",
            Self::Profile => "☺",
            Self::Scrapbook => "❏",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub section: Section,
    pub mobile_nav_open: bool,
}

impl UiState {
    /// Switch section. Selecting from the drawer also closes it.
    pub fn select(&mut self, section: Section, close_drawer: bool) {
        self.section = section;
        if close_drawer {
            self.mobile_nav_open = false;
        }
    }
}
