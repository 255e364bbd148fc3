//! Page-wide coordinator: routes input events to controllers and returns effects.
//!
//! [`SiteCore`] is the testable half of the page. It owns every controller,
//! the configuration, and the injected reply source, but no browser handles.
//! The `dom` host (behind the `hydrate` feature) owns the elements, calls one
//! `on_*` method per browser event, and applies the returned [`Effect`]s.
//!
//! Components only meet in three places: Escape closes both the modal and the
//! mobile menu, in-page navigation closes the mobile menu, and a successful
//! contact submission closes the modal.

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

use crate::config::SiteConfig;
use crate::effect::Effect;
use crate::state::chat::{ChatState, ReplySource};
use crate::state::contact::{self, FormFields};
use crate::state::menu::{ClickTarget, MenuState};
use crate::state::modal::ModalState;
use crate::state::nav::{self, NavState, Section};
use crate::timer::Timer;

/// Which optional page widgets were found at mount.
///
/// Handlers for a missing widget are no-ops and emit nothing.
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Features {
    pub header: bool,
    pub nav: bool,
    pub menu: bool,
    pub modal: bool,
    pub contact: bool,
    /// The chat window itself; enough to hide and show it.
    pub chat_window: bool,
    /// The chat form, input, and transcript; needed to exchange messages.
    pub chat: bool,
}

impl Features {
    /// Every widget present.
    pub fn all() -> Self {
        Self { header: true, nav: true, menu: true, modal: true, contact: true, chat_window: true, chat: true }
    }
}

pub struct SiteCore {
    config: SiteConfig,
    features: Features,
    pub nav: NavState,
    pub menu: MenuState,
    pub modal: ModalState,
    pub chat: ChatState,
    replies: Box<dyn ReplySource>,
}

impl SiteCore {
    pub fn new(config: SiteConfig, features: Features, replies: Box<dyn ReplySource>) -> Self {
        Self {
            config,
            features,
            nav: NavState::default(),
            menu: MenuState::default(),
            modal: ModalState::default(),
            chat: ChatState::default(),
            replies,
        }
    }

    // --- Navigation ---

    /// Establish initial state once listeners are attached.
    pub fn on_load(&mut self, scroll_y: f64, sections: &[Section]) -> Vec<Effect> {
        let mut effects = self.on_scroll(scroll_y, sections);
        if self.features.chat_window {
            self.chat.close();
            effects.push(Effect::SetChatVisible(false));
        }
        effects
    }

    pub fn on_scroll(&mut self, scroll_y: f64, sections: &[Section]) -> Vec<Effect> {
        self.nav.on_scroll(
            scroll_y,
            sections,
            self.config.scroll_threshold_px,
            self.config.section_lookahead_px,
        );

        let mut effects = Vec::with_capacity(2);
        if self.features.header {
            effects.push(Effect::SetHeaderScrolled(self.nav.header_scrolled));
        }
        if self.features.nav {
            effects.push(Effect::SetActiveSection(self.nav.active_section.clone()));
        }
        effects
    }

    /// Click on an `a[href^="#"]` link. `target_exists` says whether the
    /// fragment resolves to an element on the page.
    pub fn on_anchor_click(&mut self, href: &str, target_exists: bool) -> Vec<Effect> {
        let Some(id) = nav::anchor_id(href) else {
            return Vec::new();
        };
        if !target_exists {
            return Vec::new();
        }

        let mut effects = vec![Effect::PreventDefault, Effect::ScrollToSection(id.to_owned())];
        self.close_menu(&mut effects);
        effects
    }

    // --- Mobile menu ---

    pub fn on_hamburger_click(&mut self) -> Vec<Effect> {
        if !self.features.menu {
            return Vec::new();
        }
        vec![Effect::SetMenuOpen(self.menu.toggle())]
    }

    pub fn on_document_click(&mut self, target: ClickTarget) -> Vec<Effect> {
        if self.features.menu && self.menu.on_document_click(target) {
            return vec![Effect::SetMenuOpen(false)];
        }
        Vec::new()
    }

    // --- Modal ---

    pub fn on_demo_trigger(&mut self) -> Vec<Effect> {
        if !self.features.modal {
            return Vec::new();
        }
        self.modal.open();
        vec![Effect::PreventDefault, Effect::SetModalOpen(true)]
    }

    pub fn on_modal_close_click(&mut self) -> Vec<Effect> {
        if !self.features.modal {
            return Vec::new();
        }
        self.modal.close();
        vec![Effect::SetModalOpen(false)]
    }

    /// Click anywhere inside the modal container.
    pub fn on_modal_click(&mut self, target_is_backdrop: bool) -> Vec<Effect> {
        if self.features.modal && self.modal.on_click(target_is_backdrop) {
            return vec![Effect::SetModalOpen(false)];
        }
        Vec::new()
    }

    // --- Keyboard ---

    pub fn on_key_down(&mut self, key: &str) -> Vec<Effect> {
        if key != "Escape" {
            return Vec::new();
        }

        let mut effects = Vec::new();
        if self.features.modal {
            self.modal.close();
            effects.push(Effect::SetModalOpen(false));
        }
        self.close_menu(&mut effects);
        effects
    }

    // --- Contact form ---

    /// Validate a submitted contact form. Nothing is transmitted.
    pub fn on_contact_submit(&mut self, fields: FormFields) -> Vec<Effect> {
        if !self.features.contact {
            return Vec::new();
        }

        let mut effects = vec![Effect::PreventDefault];
        match contact::validate(fields) {
            Ok(form) => {
                log::info!("contact form accepted locally, {} extra field(s)", form.extra.len());
                effects.push(Effect::Notify(form.greeting()));
                effects.push(Effect::ResetContactForm);
                if self.features.modal {
                    self.modal.close();
                    effects.push(Effect::SetModalOpen(false));
                }
            }
            Err(e) => {
                log::debug!("contact form rejected: {e}");
                effects.push(Effect::Notify(e.to_string()));
            }
        }
        effects
    }

    // --- Chat widget ---

    pub fn on_chat_toggle(&mut self) -> Vec<Effect> {
        if !self.features.chat_window {
            return Vec::new();
        }
        self.chat.open();
        vec![Effect::SetChatVisible(true)]
    }

    pub fn on_chat_close(&mut self) -> Vec<Effect> {
        if !self.features.chat_window {
            return Vec::new();
        }
        self.chat.close();
        vec![Effect::SetChatVisible(false)]
    }

    pub fn on_chat_submit(&mut self, raw: &str) -> Vec<Effect> {
        if !self.features.chat {
            return Vec::new();
        }

        let mut effects = vec![Effect::PreventDefault];
        if let Some(message) = self.chat.submit(raw) {
            effects.push(Effect::AppendChatMessage(message));
            effects.push(Effect::ClearChatInput);
            effects.push(Effect::Schedule { delay_ms: self.config.reply_delay_ms, timer: Timer::BotReply });
        }
        effects
    }

    // --- Timers ---

    pub fn on_timer(&mut self, timer: Timer) -> Vec<Effect> {
        match timer {
            Timer::BotReply => self
                .chat
                .deliver_reply(&self.config.replies, self.replies.as_mut())
                .map(Effect::AppendChatMessage)
                .into_iter()
                .collect(),
        }
    }

    fn close_menu(&mut self, effects: &mut Vec<Effect>) {
        if self.features.menu && self.menu.close() {
            effects.push(Effect::SetMenuOpen(false));
        }
    }
}
