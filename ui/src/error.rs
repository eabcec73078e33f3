//! Error type for the browser plumbing behind the navbar.
//!
//! The rendered view itself never fails; only platform glue (window access,
//! listener registration) and theme-name parsing return these.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    #[error("browser window is unavailable")]
    WindowUnavailable,

    #[error("failed to {action} scroll listener: {detail}")]
    ScrollListener { action: &'static str, detail: String },

    #[error("unknown theme `{0}` (expected `light` or `dark`)")]
    UnknownTheme(String),
}

pub type UiResult<T> = Result<T, UiError>;
