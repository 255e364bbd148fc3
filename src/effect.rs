#[cfg(test)]
#[path = "effect_test.rs"]
mod effect_test;

use crate::state::chat::ChatMessage;
use crate::timer::Timer;

/// Instructions returned from [`crate::site::SiteCore`] handlers for the host to apply.
///
/// Effects are applied in order, and each one is idempotent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Suppress the browser's default action for the triggering event.
    PreventDefault,
    /// Toggle the header's scrolled style.
    SetHeaderScrolled(bool),
    /// Highlight nav links pointing at this section, clear all others.
    SetActiveSection(Option<String>),
    /// Smooth-scroll the element with this id into view.
    ScrollToSection(String),
    /// Open or close the mobile menu and its hamburger.
    SetMenuOpen(bool),
    /// Show or hide the demo modal.
    SetModalOpen(bool),
    /// Show a blocking notification to the visitor. Deferred; see [`Deferred`].
    Notify(String),
    /// Clear every field of the contact form.
    ResetContactForm,
    /// Show or hide the chat window.
    SetChatVisible(bool),
    /// Empty the chat text input.
    ClearChatInput,
    /// Append an entry to the chat transcript and scroll it into view.
    AppendChatMessage(ChatMessage),
    /// Ask the host to call back with `timer` after `delay_ms`. Deferred.
    Schedule { delay_ms: u32, timer: Timer },
}

/// Work the host runs only after it has released the page.
///
/// Notifications block inside `alert()`, and timers re-enter the page when
/// they fire, so neither may run while a handler still holds the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deferred {
    pub notices: Vec<String>,
    pub timers: Vec<(u32, Timer)>,
}

impl Deferred {
    /// Pull the deferred effects out of `effects`, keeping their order.
    pub fn collect(effects: &[Effect]) -> Self {
        let mut deferred = Self::default();
        for effect in effects {
            match effect {
                Effect::Notify(message) => deferred.notices.push(message.clone()),
                Effect::Schedule { delay_ms, timer } => deferred.timers.push((*delay_ms, *timer)),
                _ => {}
            }
        }
        deferred
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty() && self.timers.is_empty()
    }
}
