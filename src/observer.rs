//! IntersectionObserver feeding reveal batches into the controller.

use crate::events::{with_fx, SharedFx};
use folio_core::constants::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use folio_core::Intersection;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub fn observe_reveal_targets(fx: &SharedFx) -> anyhow::Result<()> {
    let targets: Vec<web::Element> = fx.borrow().reveal_targets().to_vec();
    if targets.is_empty() {
        return Ok(());
    }

    let fx_cb = fx.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            let batch: Vec<Intersection<web::Element>> = entries
                .iter()
                .filter_map(|e| e.dyn_into::<web::IntersectionObserverEntry>().ok())
                .map(|e| Intersection {
                    target: e.target(),
                    is_intersecting: e.is_intersecting(),
                })
                .collect();
            if let Some(done) = with_fx(&fx_cb, |fx| fx.on_intersections(&batch)) {
                for el in &done {
                    observer.unobserve(el);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);

    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    callback.forget();

    for el in &targets {
        observer.observe(el);
    }
    log::info!("[reveal] observing {} elements", targets.len());
    Ok(())
}
