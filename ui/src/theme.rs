//! Light/dark theme and the shared store that owns it.
//!
//! The store is created once near the root (`use_theme_store`) and handed to
//! the navbar as plain props: the current `Theme` plus a setter.

use std::fmt;
use std::str::FromStr;

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::platform;
use crate::error::UiError;
use crate::icons::Glyph;

/// Shared theme stylesheet (CSS custom properties for both modes).
pub const MAIN_CSS: Asset = asset!("/assets/theme/main.css");

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// The other mode. Applying it twice yields the original theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon for the toggle: the mode the next click switches to.
    pub fn toggle_glyph(self) -> Glyph {
        match self {
            Theme::Dark => Glyph::Sun,
            Theme::Light => Glyph::Moon,
        }
    }

    /// Mobile panel action label: names the mode the click switches to.
    pub fn action_label(self) -> &'static str {
        match self {
            Theme::Dark => "Light Mode",
            Theme::Light => "Dark Mode",
        }
    }

    pub fn from_preference(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(UiError::UnknownTheme(other.to_string())),
        }
    }
}

/// Handle over the page-wide theme signal. `Copy`, so it can be moved into
/// any number of event handlers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeStore {
    theme: Signal<Theme>,
}

impl ThemeStore {
    pub fn theme(&self) -> Theme {
        (self.theme)()
    }

    pub fn set_theme(&mut self, value: Theme) {
        if *self.theme.peek() != value {
            tracing::debug!(theme = %value, "theme changed");
        }
        self.theme.set(value);
    }
}

/// Create the store and provide it to descendants through context.
///
/// `initial` overrides the platform colour-scheme preference when given.
pub fn use_theme_store(initial: Option<Theme>) -> ThemeStore {
    use_context_provider(|| {
        let start =
            initial.unwrap_or_else(|| Theme::from_preference(platform::prefers_dark_scheme()));
        tracing::debug!(theme = %start, "theme store created");
        ThemeStore {
            theme: Signal::new(start),
        }
    })
}

/// Page wrapper exposing the theme as a class and `data-theme` attribute.
#[component]
pub fn ThemedRoot(theme: Theme, children: Element) -> Element {
    rsx! {
        div {
            class: "themed-root {theme}",
            "data-theme": "{theme}",
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_an_involution() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_ne!(theme.toggled(), theme);
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn glyph_points_at_the_next_mode() {
        assert_eq!(Theme::Dark.toggle_glyph(), Glyph::Sun);
        assert_eq!(Theme::Light.toggle_glyph(), Glyph::Moon);
    }

    #[test]
    fn action_label_names_the_opposite_mode() {
        assert_eq!(Theme::Dark.action_label(), "Light Mode");
        assert_eq!(Theme::Light.action_label(), "Dark Mode");
    }

    #[test]
    fn parses_only_known_names() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!(
            "system".parse::<Theme>(),
            Err(UiError::UnknownTheme("system".into()))
        );
    }

    #[test]
    fn wire_names_match_the_store_contract() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), r#""dark""#);
        assert_eq!(
            serde_json::from_str::<Theme>(r#""light""#).unwrap(),
            Theme::Light
        );
    }

    #[component]
    fn DarkPage() -> Element {
        let store = use_theme_store(Some(Theme::Dark));
        rsx! {
            ThemedRoot { theme: store.theme(),
                StoreReader {}
            }
        }
    }

    #[component]
    fn StoreReader() -> Element {
        let seen = try_use_context::<ThemeStore>().map(|store| store.theme());
        rsx! { span { class: "seen", "{seen:?}" } }
    }

    #[test]
    fn themed_root_exposes_the_current_mode() {
        let mut dom = VirtualDom::new(DarkPage);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains(r#"data-theme="dark""#), "{html}");
        assert!(html.contains("themed-root dark"), "{html}");
        assert!(html.contains("Some(Dark)"), "store not provided to descendants: {html}");
    }

    #[component]
    fn DefaultStorePage() -> Element {
        let store = use_theme_store(None);
        rsx! { span { "{store.theme()}" } }
    }

    #[test]
    fn native_store_defaults_to_light() {
        let mut dom = VirtualDom::new(DefaultStorePage);
        dom.rebuild_in_place();
        assert!(dioxus_ssr::render(&dom).contains("light"));
    }
}
