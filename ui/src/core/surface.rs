//! Header background treatment derived from the scroll position.

/// `true` once the page has moved strictly past `threshold`.
pub fn is_scrolled_past(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeaderSurface {
    #[default]
    Transparent,
    Elevated,
}

impl HeaderSurface {
    pub fn from_scrolled(scrolled: bool) -> Self {
        if scrolled {
            HeaderSurface::Elevated
        } else {
            HeaderSurface::Transparent
        }
    }

    /// Modifier class appended to `navbar`.
    pub fn css_class(self) -> &'static str {
        match self {
            HeaderSurface::Transparent => "navbar--transparent",
            HeaderSurface::Elevated => "navbar--elevated",
        }
    }
}
