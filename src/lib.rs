#![cfg(target_arch = "wasm32")]
use folio_core::{FxConfig, PageFx};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod observer;

use dom::WebDom;
use events::{with_fx, SharedFx, WebFx};
use frame::BrowserScheduler;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Smoothly scroll back to the top of the page. Also installed as
/// `window.scrollToTop` for inline `onclick` handlers.
#[wasm_bindgen(js_name = scrollToTop)]
pub fn scroll_to_top() {
    if let Some(page) = WebDom::from_window() {
        folio_core::scroll::scroll_to_top(&page);
    }
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let page = WebDom::new(window.clone(), document.clone());

    let scheduler = BrowserScheduler::new(window.clone());
    let sink = scheduler.sink_slot();
    let fx: SharedFx = Rc::new(RefCell::new(PageFx::new(
        page.clone(),
        scheduler,
        FxConfig::default(),
        StdRng::from_entropy(),
    )));
    let weak: Weak<RefCell<WebFx>> = Rc::downgrade(&fx);
    BrowserScheduler::connect(&sink, move |task| {
        if let Some(fx) = weak.upgrade() {
            with_fx(&fx, |fx| fx.on_timer(task));
        }
    });

    install_global_scroll_to_top(&window);

    // The module can finish loading after either lifecycle event has passed.
    match document.ready_state().as_str() {
        "loading" => {
            let fx_ready = fx.clone();
            let page_ready = page.clone();
            dom::listen(&document, "DOMContentLoaded", move |_: web::Event| {
                on_ready(&fx_ready, &page_ready);
            });
        }
        _ => on_ready(&fx, &page),
    }
    if document.ready_state() == "complete" {
        on_load(&fx, &page);
    } else {
        let fx_load = fx.clone();
        let page_load = page.clone();
        dom::listen(&window, "load", move |_: web::Event| {
            on_load(&fx_load, &page_load);
        });
    }
    Ok(())
}

fn on_ready(fx: &SharedFx, page: &WebDom) {
    log::info!("DOM loaded, initializing");
    with_fx(fx, |fx| fx.on_ready());

    events::wire_window(fx, page.window());
    events::wire_nav_links(fx, page);
    events::wire_menu(fx, page);
    events::wire_tags(fx, page);
    events::wire_buttons(fx, page);
    if let Err(e) = observer::observe_reveal_targets(fx) {
        log::warn!("[reveal] {:?}", e);
    }
    log::info!("all initializations complete");
}

fn on_load(fx: &SharedFx, page: &WebDom) {
    with_fx(fx, |fx| fx.on_load());
    events::wire_cards(fx, page);
}

fn install_global_scroll_to_top(window: &web::Window) {
    let cb = Closure::wrap(Box::new(scroll_to_top) as Box<dyn FnMut()>);
    if let Err(e) = js_sys::Reflect::set(
        window,
        &JsValue::from_str("scrollToTop"),
        cb.as_ref(),
    ) {
        log::warn!("could not install scrollToTop: {:?}", e);
    }
    cb.forget();
}
