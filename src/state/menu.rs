//! Hamburger / mobile menu open state.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Where a document-level click landed relative to the menu chrome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClickTarget {
    pub inside_menu: bool,
    pub inside_hamburger: bool,
}

impl ClickTarget {
    /// A click on neither the menu nor the hamburger.
    pub fn outside() -> Self {
        Self::default()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    /// Flip the menu. Returns the new open state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        log::debug!("mobile menu toggled, open={}", self.open);
        self.open
    }

    /// Close the menu. Returns `true` if it was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.open;
        self.open = false;
        was_open
    }

    /// Dismiss the menu on a click outside of it. Returns `true` if it closed.
    pub fn on_document_click(&mut self, target: ClickTarget) -> bool {
        if !self.open || target.inside_menu || target.inside_hamburger {
            return false;
        }
        log::debug!("mobile menu dismissed by outside click");
        self.close()
    }
}
