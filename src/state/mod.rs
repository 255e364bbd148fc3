//! Headless controller state, one module per page widget.
//!
//! DESIGN
//! ======
//! Nothing in here touches the browser. Each controller is a small plain
//! struct with transition methods, so every rule can be tested natively and
//! the DOM host only has to translate events in and effects out.

pub mod chat;
pub mod contact;
pub mod menu;
pub mod modal;
pub mod nav;
