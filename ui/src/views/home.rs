use dioxus::prelude::*;

use crate::config::NAV_ITEMS;
use crate::i18n;

/// Portfolio page body: one section per navigation anchor.
///
/// Section ids come from the nav hrefs, so every link has a target to
/// scroll to.
#[component]
pub fn Home() -> Element {
    i18n::init();
    let placeholder = crate::t!("section-placeholder");

    rsx! {
        main { class: "page page-home",
            for item in NAV_ITEMS {
                section {
                    key: "{item.id}",
                    id: item.section_id(),
                    class: "page-section",
                    h2 { class: "page-section__title", {item.label} }
                    p { class: "page-section__body", "{placeholder}" }
                }
            }
        }
    }
}
