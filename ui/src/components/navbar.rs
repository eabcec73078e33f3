use dioxus::prelude::*;

use crate::config::{
    NavItem, SocialKind, SocialLink, BRAND_HREF, BRAND_NAME, NAV_ITEMS, SCROLL_THRESHOLD_PX,
    SOCIAL_LINKS,
};
use crate::core::menu::{use_mobile_menu, MenuHandle, MobileMenu};
use crate::core::scroll::use_scrolled_past;
use crate::core::surface::HeaderSurface;
use crate::i18n;
use crate::icons::{Glyph, Icon};
use crate::t;
use crate::theme::Theme;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Navbar stylesheet. Mount once at the app root (inlined in release native builds).
#[component]
pub fn NavbarStyles() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }
    }
}

/// Fixed site header: brand, anchor links, theme toggle, social links and the
/// collapsible mobile menu.
///
/// The theme is owned by the caller: `theme` is the current value and
/// `on_theme_change` the store's setter. Scroll tracking and menu visibility
/// are local to the navbar instance.
///
/// ```ignore
/// let mut store = use_theme_store(None);
/// rsx! {
///     Navbar {
///         theme: store.theme(),
///         on_theme_change: move |next: Theme| store.set_theme(next),
///     }
/// }
/// ```
#[component]
pub fn Navbar(theme: Theme, on_theme_change: EventHandler<Theme>) -> Element {
    i18n::init();

    let scrolled = use_scrolled_past(SCROLL_THRESHOLD_PX);
    let menu = use_mobile_menu();
    let surface = HeaderSurface::from_scrolled(scrolled());

    rsx! {
        NavbarShell { theme, on_theme_change, menu, surface }
    }
}

/// Header markup for a given surface and menu state.
#[component]
fn NavbarShell(
    theme: Theme,
    on_theme_change: EventHandler<Theme>,
    menu: MenuHandle,
    surface: HeaderSurface,
) -> Element {
    let mut menu = menu;
    let current_menu = menu.state();
    let toggle_glyph = if current_menu.is_open() {
        Glyph::Close
    } else {
        Glyph::Menu
    };

    rsx! {
        nav {
            id: "navbar",
            class: "navbar {surface.css_class()}",
            "data-menu": current_menu.as_str(),

            div { class: "navbar__inner",
                a {
                    class: "navbar__brand",
                    href: BRAND_HREF,
                    "aria-label": t!("brand-home-label"),
                    span { class: "navbar__brand-mark", {BRAND_NAME} }
                }

                ul { class: "navbar__links",
                    for item in NAV_ITEMS {
                        li { key: "{item.id}",
                            a { class: "navbar__link", href: item.href, {item.label} }
                        }
                    }
                }

                div { class: "navbar__actions",
                    ThemeToggle { theme, on_theme_change }
                    for link in SOCIAL_LINKS {
                        SocialAnchor { key: "{link.href}", link }
                    }
                }

                button {
                    class: "navbar__menu-toggle",
                    r#type: "button",
                    "aria-label": t!("menu-toggle-label"),
                    "aria-controls": "navbar-mobile-panel",
                    "aria-expanded": "{current_menu.is_open()}",
                    onclick: move |_| menu.toggle(),
                    Icon { glyph: toggle_glyph, size: 22 }
                }
            }

            {match current_menu {
                MobileMenu::Open => rsx! {
                    MobilePanel {
                        theme,
                        on_theme_change,
                        on_navigate: move |item: NavItem| menu.close_for(item),
                    }
                },
                MobileMenu::Closed => rsx! {},
            }}
        }
    }
}

/// Ask the owner of the theme to switch to the other mode.
fn request_toggle(theme: Theme, on_theme_change: EventHandler<Theme>) {
    let next = theme.toggled();
    tracing::debug!(from = %theme, to = %next, "theme toggle requested");
    on_theme_change.call(next);
}

/// Vertical menu shown on narrow viewports while the menu is open.
///
/// `on_navigate` fires before the browser follows the anchor (the click is not
/// prevented).
#[component]
pub fn MobilePanel(
    theme: Theme,
    on_theme_change: EventHandler<Theme>,
    on_navigate: EventHandler<NavItem>,
) -> Element {
    rsx! {
        div { id: "navbar-mobile-panel", class: "navbar__mobile",
            for item in NAV_ITEMS {
                a {
                    key: "{item.id}",
                    class: "navbar__mobile-link",
                    href: item.href,
                    onclick: move |_| on_navigate.call(item),
                    {item.label}
                }
            }
            button {
                class: "navbar__mobile-theme",
                r#type: "button",
                onclick: move |_| request_toggle(theme, on_theme_change),
                Icon { glyph: theme.toggle_glyph() }
                span { {theme.action_label()} }
            }
        }
    }
}

#[component]
fn ThemeToggle(theme: Theme, on_theme_change: EventHandler<Theme>) -> Element {
    rsx! {
        button {
            class: "navbar__icon-button",
            r#type: "button",
            "aria-label": t!("theme-toggle-label"),
            "aria-pressed": "{theme.is_dark()}",
            onclick: move |_| request_toggle(theme, on_theme_change),
            Icon { glyph: theme.toggle_glyph() }
        }
    }
}

#[component]
fn SocialAnchor(link: SocialLink) -> Element {
    let glyph = social_glyph(link.kind);
    let label = i18n::message(social_message_id(link.kind));

    if link.opens_new_tab() {
        rsx! {
            a {
                class: "navbar__icon-button",
                href: link.href,
                target: "_blank",
                rel: "noopener noreferrer",
                "aria-label": label,
                Icon { glyph }
            }
        }
    } else {
        rsx! {
            a {
                class: "navbar__icon-button",
                href: link.href,
                "aria-label": label,
                Icon { glyph }
            }
        }
    }
}

fn social_glyph(kind: SocialKind) -> Glyph {
    match kind {
        SocialKind::GitHub => Glyph::GitHub,
        SocialKind::LinkedIn => Glyph::LinkedIn,
        SocialKind::Email => Glyph::Mail,
    }
}

fn social_message_id(kind: SocialKind) -> &'static str {
    match kind {
        SocialKind::GitHub => "social-github",
        SocialKind::LinkedIn => "social-linkedin",
        SocialKind::Email => "social-email",
    }
}
