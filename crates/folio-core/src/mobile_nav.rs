//! Open/closed state of the small-screen navigation menu.
//!
//! The `open` class on the menu is the state; `aria-expanded` on the toggle
//! mirrors it on every transition.

use crate::constants::*;
use crate::dom::Dom;

pub struct MobileNav<N> {
    menu: N,
    button: N,
}

impl<N: Clone + PartialEq> MobileNav<N> {
    /// Needs both the menu panel and its toggle.
    pub fn locate<D: Dom<Node = N>>(dom: &D) -> Option<Self> {
        Some(Self {
            menu: dom.query(SEL_NAV_MENU)?,
            button: dom.query(SEL_MENU_BUTTON)?,
        })
    }

    pub fn is_open<D: Dom<Node = N>>(&self, dom: &D) -> bool {
        dom.has_class(&self.menu, CLASS_OPEN)
    }

    /// Flip the menu. Returns the new state.
    pub fn toggle<D: Dom<Node = N>>(&self, dom: &D) -> bool {
        let open = dom.toggle_class(&self.menu, CLASS_OPEN);
        dom.set_attribute(&self.button, ARIA_EXPANDED, bool_str(open));
        log::debug!("[menu] {}", if open { "opened" } else { "closed" });
        open
    }

    /// Force closed. Returns whether the menu was open.
    pub fn close<D: Dom<Node = N>>(&self, dom: &D) -> bool {
        let was_open = self.is_open(dom);
        dom.remove_class(&self.menu, CLASS_OPEN);
        dom.set_attribute(&self.button, ARIA_EXPANDED, "false");
        was_open
    }

    /// Close when a click lands outside both the menu and its toggle.
    pub fn on_document_click<D: Dom<Node = N>>(&self, dom: &D, target: &N) -> bool {
        let inside = dom.contains(&self.menu, target) || dom.contains(&self.button, target);
        if inside || !self.is_open(dom) {
            return false;
        }
        self.close(dom);
        log::debug!("[menu] closed by outside click");
        true
    }

    /// Wide viewports never show the collapsed menu.
    pub fn sync_for_viewport<D: Dom<Node = N>>(&self, dom: &D, breakpoint_px: f64) -> bool {
        if dom.inner_width() <= breakpoint_px {
            return false;
        }
        self.close(dom);
        dom.set_style(&self.menu, "display", "");
        true
    }

    pub fn menu(&self) -> &N {
        &self.menu
    }

    pub fn button(&self) -> &N {
        &self.button
    }
}

#[inline]
fn bool_str(v: bool) -> &'static str {
    if v {
        "true"
    } else {
        "false"
    }
}
