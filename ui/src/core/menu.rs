//! Mobile menu state machine.
//!
//! The panel sub-tree is mounted only in `Open`; every nav click drives the
//! machine back to `Closed` before the browser follows the anchor.

use dioxus::prelude::*;

use crate::config::NavItem;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MobileMenu {
    #[default]
    Closed,
    Open,
}

impl MobileMenu {
    pub fn is_open(self) -> bool {
        matches!(self, MobileMenu::Open)
    }

    /// Menu button press.
    pub fn toggled(self) -> Self {
        match self {
            MobileMenu::Closed => MobileMenu::Open,
            MobileMenu::Open => MobileMenu::Closed,
        }
    }

    /// Nav item chosen from the panel.
    pub fn closed(self) -> Self {
        MobileMenu::Closed
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MobileMenu::Closed => "closed",
            MobileMenu::Open => "open",
        }
    }
}

/// Per-navbar menu state. `Copy`, so handlers can capture it freely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuHandle {
    state: Signal<MobileMenu>,
}

impl MenuHandle {
    pub fn state(&self) -> MobileMenu {
        (self.state)()
    }

    pub fn toggle(&mut self) {
        let next = self.state.peek().toggled();
        tracing::debug!(menu = next.as_str(), "mobile menu toggled");
        self.state.set(next);
    }

    pub fn close_for(&mut self, item: NavItem) {
        tracing::debug!(target_section = item.section_id(), "mobile menu closed by navigation");
        let next = self.state.peek().closed();
        self.state.set(next);
    }
}

/// Menu state owned by the calling component, starting `Closed`.
pub fn use_mobile_menu() -> MenuHandle {
    let state = use_signal(MobileMenu::default);
    MenuHandle { state }
}
