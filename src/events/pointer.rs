use super::{with_fx, SharedFx};
use crate::dom::{self, WebDom};
use folio_core::constants::{CLASS_PRIMARY_BUTTON, SEL_BUTTON, SEL_REVEAL_TARGETS, SEL_TAG};
use folio_core::Dom;
use glam::Vec2;
use web_sys as web;

#[inline]
fn client_point(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Tags: ripple on click, pulse on hover.
pub fn wire_tags(fx: &SharedFx, page: &WebDom) {
    for tag in page.query_all(SEL_TAG) {
        let fx_click = fx.clone();
        let el = tag.clone();
        dom::listen(&tag, "click", move |ev: web::MouseEvent| {
            with_fx(&fx_click, |fx| fx.on_tag_click(&el, client_point(&ev)));
        });

        let fx_enter = fx.clone();
        let el = tag.clone();
        dom::listen(&tag, "mouseenter", move |_: web::MouseEvent| {
            with_fx(&fx_enter, |fx| fx.on_tag_enter(&el));
        });

        let fx_end = fx.clone();
        let el = tag.clone();
        dom::listen(&tag, "animationend", move |_: web::AnimationEvent| {
            with_fx(&fx_end, |fx| fx.on_tag_animation_end(&el));
        });
    }
}

/// Buttons: ripple on click; primary buttons also follow the pointer.
pub fn wire_buttons(fx: &SharedFx, page: &WebDom) {
    for button in page.query_all(SEL_BUTTON) {
        let fx_click = fx.clone();
        let el = button.clone();
        dom::listen(&button, "click", move |ev: web::MouseEvent| {
            with_fx(&fx_click, |fx| fx.on_button_click(&el, client_point(&ev)));
        });

        if !page.has_class(&button, CLASS_PRIMARY_BUTTON) {
            continue;
        }

        let fx_move = fx.clone();
        let el = button.clone();
        dom::listen(&button, "mousemove", move |ev: web::MouseEvent| {
            with_fx(&fx_move, |fx| fx.on_button_move(&el, client_point(&ev)));
        });

        let fx_leave = fx.clone();
        let el = button.clone();
        dom::listen(&button, "mouseleave", move |_: web::MouseEvent| {
            with_fx(&fx_leave, |fx| fx.on_button_leave(&el));
        });
    }
}

/// Card hover lift, wired once the page has loaded.
pub fn wire_cards(fx: &SharedFx, page: &WebDom) {
    for card in page.query_all(SEL_REVEAL_TARGETS) {
        let fx_enter = fx.clone();
        let el = card.clone();
        dom::listen(&card, "mouseenter", move |_: web::MouseEvent| {
            with_fx(&fx_enter, |fx| fx.on_card_enter(&el));
        });

        let fx_leave = fx.clone();
        let el = card.clone();
        dom::listen(&card, "mouseleave", move |_: web::MouseEvent| {
            with_fx(&fx_leave, |fx| fx.on_card_leave(&el));
        });

        let fx_touch = fx.clone();
        let el = card.clone();
        dom::listen(&card, "touchstart", move |_: web::TouchEvent| {
            with_fx(&fx_touch, |fx| fx.on_card_touch_start(&el));
        });

        let fx_release = fx.clone();
        let el = card.clone();
        dom::listen(&card, "touchend", move |_: web::TouchEvent| {
            with_fx(&fx_release, |fx| fx.on_card_touch_end(&el));
        });
    }
}
