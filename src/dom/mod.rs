//! Browser host: mounts [`SiteCore`] onto the live document.
//!
//! SYSTEM CONTEXT
//! ==============
//! Compiled only with the `hydrate` feature. [`mount`] resolves every element
//! once, builds the core, attaches listeners, and runs the initial sync. Each
//! listener goes through [`dispatch`], which borrows the shared [`Page`],
//! calls one core handler, and applies the immediate effects. Notifications
//! and timer requests ([`Deferred`]) run only after the borrow is released,
//! so a blocking `alert()` never holds the page.

pub mod elements;
pub mod listeners;
pub mod page;
pub mod scheduler;

use std::cell::RefCell;
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsValue;
use web_sys::Event;

use crate::config::SiteConfig;
use crate::consts::STARTUP_NOTICE;
use crate::effect::{Deferred, Effect};
use crate::site::SiteCore;
use crate::state::chat::RandomReplies;
use crate::timer::Scheduler;
use elements::PageElements;
use page::Page;
use scheduler::BrowserScheduler;

pub type SharedPage = Rc<RefCell<Page>>;

/// Wire the page. Missing widgets are skipped, not reported as errors.
///
/// # Errors
///
/// Fails if there is no window/document or the browser rejects a listener.
pub fn mount() -> Result<SharedPage, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;

    let config = SiteConfig::load(PageElements::config_block(&document).as_deref());
    log::set_max_level(config.log_level.to_level_filter());

    let elements = PageElements::query(window, document)?;
    let features = elements.features();
    log::debug!("detected features: {features:?}");

    let seed = js_sys::Math::random().to_bits() ^ js_sys::Date::now().to_bits();
    let replies = RandomReplies::new(SmallRng::seed_from_u64(seed));
    let core = SiteCore::new(config, features, Box::new(replies));

    let page = Rc::new(RefCell::new(Page { core, elements }));
    listeners::attach(&page)?;
    dispatch(&page, None, |core, el| Ok(core.on_load(el.scroll_y()?, &el.sections())));

    log::info!("{STARTUP_NOTICE}");
    Ok(page)
}

/// Run one core handler against the shared page and apply its effects.
///
/// `event` receives `preventDefault()` when the handler asks for it. Returns
/// `false` without running `handler` if the page is already borrowed.
pub fn dispatch<F>(page: &SharedPage, event: Option<&Event>, handler: F) -> bool
where
    F: FnOnce(&mut SiteCore, &PageElements) -> Result<Vec<Effect>, JsValue>,
{
    let (window, deferred) = {
        let Ok(mut guard) = page.try_borrow_mut() else {
            log::warn!("page busy, re-entrant event not handled");
            return false;
        };
        let page_mut = &mut *guard;

        let effects = match handler(&mut page_mut.core, &page_mut.elements) {
            Ok(effects) => effects,
            Err(e) => {
                log::warn!("event handler failed: {e:?}");
                return true;
            }
        };

        if let Some(event) = event
            && effects.contains(&Effect::PreventDefault)
        {
            event.prevent_default();
        }

        if let Err(e) = guard.apply(&effects) {
            log::warn!("failed to apply effects: {e:?}");
        }
        (guard.elements.window.clone(), Deferred::collect(&effects))
    };

    for notice in &deferred.notices {
        if let Err(e) = window.alert_with_message(notice) {
            log::warn!("notification failed: {e:?}");
        }
    }

    let mut scheduler = BrowserScheduler::new(Rc::downgrade(page));
    for (delay_ms, timer) in deferred.timers {
        scheduler.schedule(delay_ms, timer);
    }
    true
}
