//! Site profile: the compile-time content of the navbar.
//!
//! Everything here is literal data. Labels and hrefs are emitted byte-for-byte
//! as written, whatever locale the loader picked.

/// Scroll offset (px) past which the header switches to its elevated surface.
pub const SCROLL_THRESHOLD_PX: f64 = 40.0;

/// Brand text shown as the logo and the in-page target it links to.
pub const BRAND_NAME: &str = "M.Waqar";
pub const BRAND_HREF: &str = "#";

/// One in-page navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    /// Stable key, also used as the list key when rendering.
    pub id: &'static str,
    /// Display label.
    pub label: &'static str,
    /// Anchor fragment of the target section.
    pub href: &'static str,
}

impl NavItem {
    const fn new(id: &'static str, label: &'static str, href: &'static str) -> Self {
        Self { id, label, href }
    }

    /// Section id the anchor points at (`#about` -> `about`).
    pub fn section_id(&self) -> &'static str {
        self.href.trim_start_matches('#')
    }
}

/// Navigation entries in display order.
pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem::new("about", "About", "#about"),
    NavItem::new("projects", "Projects", "#projects"),
    NavItem::new("experience", "Experience", "#experience"),
    NavItem::new("skills", "Skills", "#skills"),
    NavItem::new("contact", "Contact", "#contact"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    GitHub,
    LinkedIn,
    Email,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub href: &'static str,
}

impl SocialLink {
    /// Profile links open in a new tab; `mailto:` keeps the default anchor behaviour.
    pub fn opens_new_tab(&self) -> bool {
        !matches!(self.kind, SocialKind::Email)
    }
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        kind: SocialKind::GitHub,
        href: "https://github.com/waqar shakeel",
    },
    SocialLink {
        kind: SocialKind::LinkedIn,
        href: "https://linkedin.com/in/waqar shakeel",
    },
    SocialLink {
        kind: SocialKind::Email,
        href: "mailto:waqarshakeel96@gmail.com",
    },
];
