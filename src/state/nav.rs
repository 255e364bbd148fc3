//! Sticky header and active-section tracking.
//!
//! Both are recomputed from scratch on every scroll event, so the result only
//! depends on the current offset and section layout, never on how many events
//! were skipped or coalesced by the browser.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// A navigable page section and its top edge in document coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self { id: id.into(), top }
    }
}

/// Navigation state derived from the scroll position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavState {
    pub header_scrolled: bool,
    pub active_section: Option<String>,
}

impl NavState {
    /// Recompute header and active-section state for a scroll offset.
    pub fn on_scroll(&mut self, scroll_y: f64, sections: &[Section], threshold: f64, lookahead: f64) {
        self.header_scrolled = is_scrolled(scroll_y, threshold);

        let active = active_section(sections, scroll_y, lookahead);
        if self.active_section.as_deref() != active {
            log::debug!("active section: {:?} -> {active:?}", self.active_section);
            self.active_section = active.map(str::to_owned);
        }
    }
}

/// Whether the header should show its scrolled style.
pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// The last section, in document order, whose top minus `lookahead` is at or
/// above `scroll_y`.
pub fn active_section(sections: &[Section], scroll_y: f64, lookahead: f64) -> Option<&str> {
    sections.iter().fold(None, |current, section| {
        if scroll_y >= section.top - lookahead { Some(section.id.as_str()) } else { current }
    })
}

/// Whether a nav link pointing at `href` should carry the active class.
pub fn link_is_active(href: &str, active: Option<&str>) -> bool {
    match (href.strip_prefix('#'), active) {
        (Some(id), Some(active)) => id == active,
        _ => false,
    }
}

/// Element id an in-page anchor navigates to.
///
/// Bare `#` links and anything that is not a fragment are left to the browser.
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
