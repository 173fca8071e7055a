pub mod navigation;
pub mod pointer;

use crate::dom::WebDom;
use crate::frame::BrowserScheduler;
use folio_core::PageFx;
use std::cell::RefCell;
use std::rc::Rc;

pub type WebFx = PageFx<WebDom, BrowserScheduler>;
pub type SharedFx = Rc<RefCell<WebFx>>;

/// Run `f` on the controller unless it is already borrowed further up the
/// stack, in which case the event is dropped.
pub fn with_fx<R>(fx: &SharedFx, f: impl FnOnce(&mut WebFx) -> R) -> Option<R> {
    match fx.try_borrow_mut() {
        Ok(mut fx) => Some(f(&mut fx)),
        Err(_) => {
            log::debug!("[events] controller busy, event dropped");
            None
        }
    }
}

pub use navigation::{wire_menu, wire_nav_links, wire_window};
pub use pointer::{wire_buttons, wire_cards, wire_tags};
