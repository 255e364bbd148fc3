use std::cell::RefCell;
use std::rc::Weak;

use gloo_timers::callback::Timeout;

use super::dispatch;
use super::page::Page;
use crate::timer::{Scheduler, Timer};

/// Runs core timers on the browser event loop.
///
/// Timeouts are fire-and-forget. A timer that fires after the page was torn
/// down finds the weak handle dead and does nothing. A timer that fires while
/// the page is busy is queued again with no delay, so it is never lost.
pub struct BrowserScheduler {
    page: Weak<RefCell<Page>>,
}

impl BrowserScheduler {
    pub fn new(page: Weak<RefCell<Page>>) -> Self {
        Self { page }
    }
}

impl Scheduler for BrowserScheduler {
    fn schedule(&mut self, delay_ms: u32, timer: Timer) {
        let page = self.page.clone();
        Timeout::new(delay_ms, move || {
            let Some(shared) = page.upgrade() else {
                return;
            };
            if !dispatch(&shared, None, |core, _| Ok(core.on_timer(timer))) {
                log::debug!("page busy, requeueing {timer:?}");
                BrowserScheduler::new(page).schedule(0, timer);
            }
        })
        .forget();
    }
}
