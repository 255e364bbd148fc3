//! Event listener wiring.
//!
//! Listeners live for the whole page view, so their closures are leaked with
//! `Closure::forget` right after registration.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, EventTarget, KeyboardEvent, Node};

use super::{SharedPage, dispatch};
use crate::state::menu::ClickTarget;

/// Attach every listener whose element exists.
///
/// # Errors
///
/// Fails if the browser rejects a listener registration.
pub fn attach(page: &SharedPage) -> Result<(), JsValue> {
    let elements = page
        .try_borrow()
        .map_err(|_| JsValue::from_str("page borrowed during attach"))?
        .elements
        .clone();

    // Navigation.
    on(page, &elements.window, "scroll", |page, ev| {
        dispatch(page, Some(ev), |core, el| Ok(core.on_scroll(el.scroll_y()?, &el.sections())));
    })?;

    for anchor in &elements.anchors {
        let link = anchor.clone();
        on(page, anchor, "click", move |page, ev| {
            let href = link.get_attribute("href").unwrap_or_default();
            dispatch(page, Some(ev), |core, el| {
                let target_exists = crate::state::nav::anchor_id(&href).is_some_and(|id| el.has_element(id));
                Ok(core.on_anchor_click(&href, target_exists))
            });
        })?;
    }

    // Mobile menu.
    if let Some(hamburger) = &elements.hamburger {
        on(page, hamburger, "click", |page, ev| {
            dispatch(page, Some(ev), |core, _| Ok(core.on_hamburger_click()));
        })?;
    }

    on(page, &elements.document, "click", |page, ev| {
        let target = ev.target();
        let node = target.as_ref().and_then(|t| t.dyn_ref::<Node>());
        dispatch(page, Some(ev), |core, el| {
            let click = ClickTarget {
                inside_menu: el.mobile_menu.as_ref().is_some_and(|m| m.contains(node)),
                inside_hamburger: el.hamburger.as_ref().is_some_and(|h| h.contains(node)),
            };
            Ok(core.on_document_click(click))
        });
    })?;

    // Modal.
    for trigger in &elements.demo_triggers {
        on(page, trigger, "click", |page, ev| {
            dispatch(page, Some(ev), |core, _| Ok(core.on_demo_trigger()));
        })?;
    }

    if let Some(close) = &elements.modal_close {
        on(page, close, "click", |page, ev| {
            dispatch(page, Some(ev), |core, _| Ok(core.on_modal_close_click()));
        })?;
    }

    if let Some(modal) = &elements.modal {
        let backdrop: JsValue = modal.clone().into();
        on(page, modal, "click", move |page, ev| {
            let target_is_backdrop = ev.target().is_some_and(|t| JsValue::from(t) == backdrop);
            dispatch(page, Some(ev), |core, _| Ok(core.on_modal_click(target_is_backdrop)));
        })?;
    }

    // Keyboard.
    on(page, &elements.document, "keydown", |page, ev| {
        let Some(key) = ev.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
            return;
        };
        dispatch(page, Some(ev), |core, _| Ok(core.on_key_down(&key)));
    })?;

    // Contact form.
    if let Some(form) = &elements.contact_form {
        on(page, form, "submit", |page, ev| {
            dispatch(page, Some(ev), |core, el| Ok(core.on_contact_submit(el.contact_fields()?)));
        })?;
    }

    // Chat widget.
    if let Some(toggle) = &elements.chat_toggle {
        on(page, toggle, "click", |page, ev| {
            ev.stop_propagation();
            dispatch(page, Some(ev), |core, _| Ok(core.on_chat_toggle()));
        })?;
    }
    if let Some(close) = &elements.chat_close {
        on(page, close, "click", |page, ev| {
            dispatch(page, Some(ev), |core, _| Ok(core.on_chat_close()));
        })?;
    }
    if let Some(chat) = &elements.chat {
        on(page, &chat.form, "submit", |page, ev| {
            dispatch(page, Some(ev), |core, el| Ok(core.on_chat_submit(&el.chat_input())));
        })?;
    }

    Ok(())
}

/// Register `handler` for `event` on `target`, passing it the shared page.
fn on<F>(page: &SharedPage, target: &EventTarget, event: &str, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(&SharedPage, &Event) + 'static,
{
    let page = Rc::clone(page);
    let callback = Closure::wrap(Box::new(move |ev: Event| handler(&page, &ev)) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}
