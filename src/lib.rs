//! # pingvia-site
//!
//! Client-side interactivity for the Pingvia marketing site, compiled to
//! WebAssembly and loaded by the static pages.
//!
//! The crate enhances server-rendered HTML rather than rendering it: the
//! markup and CSS already exist, and this code only toggles classes, shows
//! and hides widgets, and appends chat messages. All decisions live in the
//! headless [`site::SiteCore`], which is tested natively; the `dom` host is
//! built only with the `hydrate` feature.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`site`] | Page coordinator: one handler per browser event, returns [`effect::Effect`]s |
//! | [`state`] | Per-widget controllers (nav, menu, modal, contact form, chat) |
//! | [`effect`] | Instructions from the core to the host |
//! | [`timer`] | Timer ids, the scheduler trait, and a virtual-clock scheduler |
//! | [`config`] | Typed site configuration with built-in defaults |
//! | [`consts`] | Thresholds, delays, class names, and canned replies |
//! | `dom` | Browser host: element lookup, listeners, effect application (`hydrate` only) |

pub mod config;
pub mod consts;
pub mod effect;
pub mod site;
pub mod state;
pub mod timer;

#[cfg(feature = "hydrate")]
pub mod dom;

/// WASM entry point, run once when the module is instantiated.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    // The logger passes everything; `log::set_max_level` does the filtering.
    if let Err(e) = console_log::init_with_level(log::Level::Trace) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    log::set_max_level(config::DEFAULT_LOG_LEVEL.to_level_filter());

    if let Err(e) = dom::mount() {
        log::error!("site mount failed: {e:?}");
    }
}
