//! Applies core effects to the live document.
//!
//! This is the only place that writes to the DOM. It never decides anything:
//! every mutation comes from an [`Effect`] produced by [`SiteCore`].

use wasm_bindgen::JsValue;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use super::elements::{ChatElements, PageElements};
use crate::consts::{ACTIVE_CLASS, BOT_MESSAGE_CLASS, HEADER_SCROLLED_CLASS, USER_MESSAGE_CLASS};
use crate::effect::Effect;
use crate::site::SiteCore;
use crate::state::chat::{ChatMessage, Sender};
use crate::state::nav;

/// The mounted page: core state plus the elements it drives.
pub struct Page {
    pub core: SiteCore,
    pub elements: PageElements,
}

impl Page {
    /// Apply the immediate effects in order. Notifications and timers are
    /// left to the caller, which runs them once the page is released.
    ///
    /// # Errors
    ///
    /// Stops at the first DOM call that throws.
    pub fn apply(&self, effects: &[Effect]) -> Result<(), JsValue> {
        let el = &self.elements;

        for effect in effects {
            match effect {
                Effect::PreventDefault | Effect::Notify(_) | Effect::Schedule { .. } => {}
                Effect::SetHeaderScrolled(scrolled) => {
                    if let Some(header) = &el.header {
                        set_class(header, HEADER_SCROLLED_CLASS, *scrolled)?;
                    }
                }
                Effect::SetActiveSection(active) => {
                    for link in &el.nav_links {
                        let href = link.get_attribute("href").unwrap_or_default();
                        set_class(link, ACTIVE_CLASS, nav::link_is_active(&href, active.as_deref()))?;
                    }
                }
                Effect::ScrollToSection(id) => {
                    if let Some(target) = el.document.get_element_by_id(id) {
                        let options = ScrollIntoViewOptions::new();
                        options.set_behavior(ScrollBehavior::Smooth);
                        options.set_block(ScrollLogicalPosition::Start);
                        target.scroll_into_view_with_scroll_into_view_options(&options);
                    }
                }
                Effect::SetMenuOpen(open) => {
                    for part in [&el.hamburger, &el.mobile_menu].into_iter().flatten() {
                        set_class(part, ACTIVE_CLASS, *open)?;
                    }
                }
                Effect::SetModalOpen(open) => {
                    if let Some(modal) = &el.modal {
                        set_class(modal, ACTIVE_CLASS, *open)?;
                    }
                }
                Effect::ResetContactForm => {
                    if let Some(form) = &el.contact_form {
                        form.reset();
                    }
                }
                Effect::SetChatVisible(visible) => {
                    if let Some(window) = &el.chat_window {
                        let display = if *visible { "flex" } else { "none" };
                        window.style().set_property("display", display)?;
                    }
                }
                Effect::ClearChatInput => {
                    if let Some(chat) = &el.chat {
                        chat.input.set_value("");
                    }
                }
                Effect::AppendChatMessage(message) => {
                    if let Some(chat) = &el.chat {
                        append_message(el, chat, message)?;
                    }
                }
            }
        }

        Ok(())
    }
}

fn set_class(element: &Element, class: &str, on: bool) -> Result<(), JsValue> {
    element.class_list().toggle_with_force(class, on)?;
    Ok(())
}

fn append_message(el: &PageElements, chat: &ChatElements, message: &ChatMessage) -> Result<(), JsValue> {
    let entry = el.document.create_element("div")?;
    entry.set_class_name(match message.sender {
        Sender::User => USER_MESSAGE_CLASS,
        Sender::Bot => BOT_MESSAGE_CLASS,
    });
    entry.set_text_content(Some(&message.text));
    chat.messages.append_child(&entry)?;
    chat.messages.set_scroll_top(chat.messages.scroll_height());
    Ok(())
}
