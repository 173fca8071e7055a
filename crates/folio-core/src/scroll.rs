//! In-page navigation and the scroll-to-top control.

use crate::constants::*;
use crate::dom::Dom;

#[inline]
pub fn scroll_top_visible(scroll_y: f64, visible_at_px: f64) -> bool {
    scroll_y > visible_at_px
}

/// Show or hide the scroll-to-top control. `None` when the page has none.
pub fn sync_scroll_top<D: Dom>(dom: &D, visible_at_px: f64) -> Option<bool> {
    let button = dom.query(SEL_SCROLL_TOP)?;
    let show = scroll_top_visible(dom.scroll_y(), visible_at_px);
    if show {
        dom.add_class(&button, CLASS_VISIBLE);
    } else {
        dom.remove_class(&button, CLASS_VISIBLE);
    }
    Some(show)
}

pub fn scroll_to_top<D: Dom>(dom: &D) {
    dom.smooth_scroll_to(0.0);
}

/// Resolve a `#fragment` href to its element.
pub fn fragment_target<D: Dom>(dom: &D, href: &str) -> Option<D::Node> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        return None;
    }
    dom.by_id(id)
}

/// Scroll position that puts `target_top` just below the fixed header.
#[inline]
pub fn nav_scroll_offset(target_top: f64, header_offset_px: f64) -> f64 {
    target_top - header_offset_px
}

/// Smooth-scroll to the element a nav link points at. Returns the offset
/// scrolled to, or `None` when the href does not resolve.
pub fn scroll_to_fragment<D: Dom>(dom: &D, href: &str, header_offset_px: f64) -> Option<f64> {
    let target = fragment_target(dom, href)?;
    let top = nav_scroll_offset(dom.offset_top(&target), header_offset_px);
    dom.smooth_scroll_to(top);
    Some(top)
}
