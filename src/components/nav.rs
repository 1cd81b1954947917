//! Left navigation shared by the desktop sidebar and the mobile drawer.
//!
//! DESIGN
//! ======
//! One component renders both placements. The `NavVariant` parameter selects a
//! `NavStyle` strategy that decides classes and whether picking a section
//! closes the drawer, so the markup exists once.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use leptos::prelude::*;

use crate::state::ui::{Section, UiState};

/// Rendering strategy for one navigation placement.
pub trait NavStyle: Send + Sync {
    fn container_class(&self) -> &'static str;
    fn item_class(&self, active: bool) -> &'static str;
    /// Whether selecting a section should close the mobile drawer.
    fn closes_on_select(&self) -> bool;
}

struct DesktopNav;
struct MobileNav;

impl NavStyle for DesktopNav {
    fn container_class(&self) -> &'static str {
        "left-nav left-nav--desktop"
    }

    fn item_class(&self, active: bool) -> &'static str {
        if active { "left-nav__item left-nav__item--active" } else { "left-nav__item" }
    }

    fn closes_on_select(&self) -> bool {
        false
    }
}

impl NavStyle for MobileNav {
    fn container_class(&self) -> &'static str {
        "left-nav left-nav--mobile"
    }

    fn item_class(&self, active: bool) -> &'static str {
        if active {
            "left-nav__item left-nav__item--mobile left-nav__item--active"
        } else {
            "left-nav__item left-nav__item--mobile"
        }
    }

    fn closes_on_select(&self) -> bool {
        true
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavVariant {
    #[default]
    Desktop,
    Mobile,
}

impl NavVariant {
    pub fn style(self) -> &'static dyn NavStyle {
        match self {
            Self::Desktop => &DesktopNav,
            Self::Mobile => &MobileNav,
        }
    }
}

/// Section list; reads and writes the shell's `UiState` from context.
#[component]
pub fn LeftNav(#[prop(optional)] variant: NavVariant) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let style = variant.style();

    view! {
        <nav class=style.container_class()>
            <h2 class="left-nav__brand">"CCCM"</h2>
            {Section::ALL
                .into_iter()
                .map(|section| {
                    view! {
                        <button
                            class=move || style.item_class(ui.get().section == section)
                            on:click=move |_| ui.update(|u| u.select(section, style.closes_on_select()))
                        >
                            <span class="left-nav__icon" aria-hidden="true">{section.icon()}</span>
                            <span class="left-nav__label">{section.label()}</span>
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
