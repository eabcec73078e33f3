//! Shared UI crate for Folio: the portfolio navbar, its theme store and the
//! page shell it sits on. Platform crates (web) only launch and mount these.

pub mod config;
pub mod core;
pub mod error;
pub mod i18n;
pub mod icons;
pub mod theme;
pub mod views;

pub mod components {
    // Site header (components/navbar.rs)
    pub mod navbar;
    pub use navbar::{MobilePanel, Navbar, NavbarStyles};
}

pub use error::{UiError, UiResult};
pub use theme::{use_theme_store, Theme, ThemeStore, ThemedRoot};
