//! Page-level glue: the injected style block, the footer year, the hero
//! entrance and the card hover lift that is enabled after load.

use crate::constants::*;
use crate::dom::Dom;
use crate::error::DomError;
use crate::styles::SUPPLEMENTAL_CSS;
use crate::timer::{Scheduler, Task};

pub fn inject_styles<D: Dom>(dom: &D) -> Result<Option<D::Node>, DomError> {
    let Some(head) = dom.head() else {
        return Ok(None);
    };
    let style = dom.create("style")?;
    dom.set_text(&style, SUPPLEMENTAL_CSS);
    dom.append(&head, &style)?;
    Ok(Some(style))
}

/// Replace the first placeholder year in `text`.
pub fn with_current_year(text: &str, year: i32) -> String {
    text.replacen(COPYRIGHT_PLACEHOLDER, &year.to_string(), 1)
}

pub fn patch_copyright_year<D: Dom>(dom: &D) -> Option<String> {
    let p = dom.query(SEL_FOOTER_YEAR)?;
    let text = dom.text(&p).unwrap_or_default();
    let patched = with_current_year(&text, dom.current_year());
    dom.set_text(&p, &patched);
    Some(patched)
}

/// Mark the body loaded and queue the hero blocks, `stagger_ms` apart.
pub fn start_hero_sequence<D: Dom, S: Scheduler<D::Node>>(
    dom: &D,
    scheduler: &mut S,
    stagger_ms: u32,
) -> usize {
    if let Some(body) = dom.body() {
        dom.add_class(&body, CLASS_LOADED);
    }
    let heroes = dom.query_all(SEL_HERO);
    for (i, el) in heroes.iter().enumerate() {
        scheduler.set_timeout(stagger_ms.saturating_mul(i as u32), Task::HeroReveal(el.clone()));
    }
    heroes.len()
}

pub fn show_hero<D: Dom>(dom: &D, el: &D::Node) {
    dom.set_style(el, "opacity", "1");
    dom.set_style(el, "transform", "translateY(0)");
}

pub fn card_lift<D: Dom>(dom: &D, card: &D::Node, raise: bool) {
    dom.set_style(card, "transform", CARD_LIFT_TRANSFORM);
    if raise {
        dom.set_style(card, "z-index", "10");
    }
}

pub fn card_settle<D: Dom>(dom: &D, card: &D::Node, lower: bool) {
    dom.set_style(card, "transform", CARD_REST_TRANSFORM);
    if lower {
        dom.set_style(card, "z-index", "1");
    }
}
