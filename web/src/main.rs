use dioxus::prelude::*;
use tracing::Level;

use ui::components::{Navbar, NavbarStyles};
use ui::theme::MAIN_CSS;
use ui::views::Home;
use ui::{use_theme_store, Theme, ThemedRoot};

fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    // `launch` installs a default subscriber when none is set.
    if let Err(err) = dioxus::logger::init(level) {
        eprintln!("[folio] logger already initialised: {err}");
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Page-wide theme store, seeded from the browser colour-scheme preference.
    let mut store = use_theme_store(None);
    let theme = store.theme();

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        NavbarStyles {}

        ThemedRoot { theme,
            Navbar {
                theme,
                on_theme_change: move |next: Theme| store.set_theme(next),
            }
            Home {}
        }
    }
}
