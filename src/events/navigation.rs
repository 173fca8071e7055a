use super::{with_fx, SharedFx};
use crate::dom::{self, WebDom};
use folio_core::constants::{SEL_MENU_BUTTON, SEL_NAV_LINK};
use folio_core::Dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Window-level scroll and resize.
pub fn wire_window(fx: &SharedFx, window: &web::Window) {
    let fx_scroll = fx.clone();
    dom::listen(window, "scroll", move |_: web::Event| {
        with_fx(&fx_scroll, |fx| fx.on_scroll());
    });

    let fx_resize = fx.clone();
    dom::listen(window, "resize", move |_: web::Event| {
        with_fx(&fx_resize, |fx| fx.on_resize());
    });
}

/// In-page navigation links scroll smoothly instead of jumping.
pub fn wire_nav_links(fx: &SharedFx, page: &WebDom) {
    let links = page.query_all(SEL_NAV_LINK);
    let n = links.len();
    for link in links {
        let fx = fx.clone();
        let target = link.clone();
        dom::listen(&link, "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            with_fx(&fx, |fx| fx.on_nav_link_click(&target));
        });
    }
    log::debug!("[nav] wired {} links", n);
}

/// Menu toggle plus click-outside-to-close. Only wired when the page has a
/// mobile menu.
pub fn wire_menu(fx: &SharedFx, page: &WebDom) {
    if fx.borrow().menu().is_none() {
        return;
    }
    let Some(button) = page.query(SEL_MENU_BUTTON) else {
        return;
    };

    let fx_toggle = fx.clone();
    dom::listen(&button, "click", move |_: web::MouseEvent| {
        with_fx(&fx_toggle, |fx| fx.on_menu_toggle());
    });

    let fx_outside = fx.clone();
    let fallback = page.document().document_element();
    dom::listen(page.document(), "click", move |ev: web::MouseEvent| {
        let target = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .or_else(|| fallback.clone());
        if let Some(target) = target {
            with_fx(&fx_outside, |fx| fx.on_document_click(&target));
        }
    });
}
