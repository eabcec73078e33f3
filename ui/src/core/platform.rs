//! Platform detection helpers.

/// Whether the host asks for a dark colour scheme.
///
/// Browsers answer through `prefers-color-scheme`; every other target
/// reports `false` so native renders (tests, SSR) start light.
#[cfg(target_arch = "wasm32")]
pub fn prefers_dark_scheme() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok())
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn prefers_dark_scheme() -> bool {
    false
}
