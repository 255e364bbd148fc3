#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

/// Visibility of the single "book demo" dialog.
///
/// There is no stacking: opening an open modal just re-asserts it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    pub open: bool,
}

impl ModalState {
    pub fn open(&mut self) {
        if !self.open {
            log::debug!("demo modal opened");
        }
        self.open = true;
    }

    /// Close the modal. Returns `true` if it was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.open;
        self.open = false;
        if was_open {
            log::debug!("demo modal closed");
        }
        was_open
    }

    /// Handle a click inside the modal container.
    ///
    /// Only a click whose target *is* the backdrop closes the dialog; clicks on
    /// the content box bubble up here too and must be ignored.
    pub fn on_click(&mut self, target_is_backdrop: bool) -> bool {
        target_is_backdrop && self.close()
    }
}
