pub const SCROLLED_AFTER: f64 = 50.0;
pub const ACTIVE_SECTION_LINE: f64 = 100.0;
pub const HOME_SECTION: &str = "home";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
}

impl NavItem {
    /// Section id for in-page links.
    pub fn section(&self) -> Option<&'static str> {
        self.href.strip_prefix('#')
    }
}

pub const NAV_ITEMS: [NavItem; 6] = [
    NavItem { name: "Home", href: "#home" },
    NavItem { name: "About", href: "#about" },
    NavItem { name: "Projects", href: "#projects" },
    NavItem { name: "Skills", href: "#skills" },
    NavItem { name: "Resume", href: "#resume" },
    NavItem { name: "Contact", href: "/contact" },
];

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_AFTER
}

/// Picks the section the reader is in: the last one, in page order, whose top
/// edge has passed the activation line.
pub fn active_section<'a>(tops: impl IntoIterator<Item = (&'a str, f64)>) -> &'a str {
    tops.into_iter()
        .filter(|(_, top)| *top <= ACTIVE_SECTION_LINE)
        .last()
        .map(|(id, _)| id)
        .unwrap_or(HOME_SECTION)
}

/// Document offset to scroll to so the target lands `offset` below the top.
pub fn scroll_target(rect_top: f64, scroll_top: f64, offset: f64) -> f64 {
    rect_top + scroll_top - offset
}

/// Fragment of an in-page or same-origin link, if there is one to scroll to.
pub fn anchor_hash<'a>(href: &'a str, origin: &str) -> Option<&'a str> {
    let hash = match href.strip_prefix('#') {
        Some(hash) => hash,
        None if href.starts_with(origin) => href.rsplit_once('#')?.1,
        None => return None,
    };
    (!hash.is_empty()).then_some(hash)
}
