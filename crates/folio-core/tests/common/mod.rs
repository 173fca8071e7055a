// Shared fixture: a small résumé page built in the in-memory document.

#![allow(dead_code)]

use folio_core::headless::{FakeDom, ManualScheduler, NodeId};
use folio_core::{Dom, FxConfig, PageFx, Rect};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub type Fx = PageFx<FakeDom, ManualScheduler>;

pub struct Page {
    pub particles: NodeId,
    pub navbar: NodeId,
    pub menu: NodeId,
    pub menu_button: NodeId,
    pub menu_item: NodeId,
    pub about_link: NodeId,
    pub broken_link: NodeId,
    pub about: NodeId,
    pub scroll_top: NodeId,
    pub cards: Vec<NodeId>,
    pub tag: NodeId,
    pub primary: NodeId,
    pub secondary: NodeId,
    pub footer_text: NodeId,
    pub heroes: Vec<NodeId>,
    pub outside: NodeId,
}

pub fn build(width: f64) -> (FakeDom, Page) {
    let dom = FakeDom::new(width).with_year(2031);
    let body = dom.body().unwrap();

    let particles = dom.with_id(dom.element(body, "div", "particles"), "particles");

    let navbar = dom.element(body, "nav", "navbar");
    let menu_button = dom.element(navbar, "button", "mobile-menu-btn");
    dom.set_attribute(&menu_button, "aria-expanded", "false");
    let menu = dom.element(navbar, "ul", "nav-menu");
    let menu_item = dom.element(menu, "li", "");
    let about_link = dom.element(menu_item, "a", "nav-link");
    dom.set_attribute(&about_link, "href", "#about");
    let broken_link = dom.element(menu_item, "a", "nav-link");
    dom.set_attribute(&broken_link, "href", "#missing");

    let hero = dom.element(body, "section", "hero");
    let mut heroes = vec![
        dom.element(hero, "h1", "hero-title"),
        dom.element(hero, "p", "hero-description"),
        dom.element(hero, "div", "hero-image"),
    ];
    let tags = dom.element(hero, "div", "hero-tags");
    heroes.push(tags);
    let tag = dom.element(tags, "span", "tag");
    dom.set_rect(tag, Rect::new(10.0, 20.0, 80.0, 30.0));
    let primary = dom.element(hero, "a", "btn btn-primary");
    dom.set_rect(primary, Rect::new(100.0, 200.0, 160.0, 48.0));
    let secondary = dom.element(hero, "a", "btn btn-secondary");
    dom.set_rect(secondary, Rect::new(300.0, 200.0, 160.0, 48.0));

    let about = dom.with_id(dom.element(body, "section", ""), "about");
    dom.set_offset_top(about, 900.0);
    let cards = vec![
        dom.element(about, "div", "resume-card"),
        dom.element(about, "div", "skill-category"),
        dom.element(about, "div", "experience-item"),
        dom.element(about, "div", "education-card"),
        dom.element(about, "div", "contact-item"),
    ];
    let outside = dom.element(about, "p", "");

    let scroll_top = dom.element(body, "button", "scroll-to-top");

    let footer = dom.element(body, "footer", "");
    let footer_left = dom.element(footer, "div", "footer-left");
    let footer_text = dom.element(footer_left, "p", "");
    dom.set_text(&footer_text, "© 2024 Jane Doe");

    let page = Page {
        particles,
        navbar,
        menu,
        menu_button,
        menu_item,
        about_link,
        broken_link,
        about,
        scroll_top,
        cards,
        tag,
        primary,
        secondary,
        footer_text,
        heroes,
        outside,
    };
    (dom, page)
}

pub fn controller(dom: FakeDom) -> Fx {
    PageFx::new(
        dom,
        ManualScheduler::default(),
        FxConfig::default(),
        StdRng::seed_from_u64(42),
    )
}

/// Page at `width`, already through the ready event.
pub fn ready(width: f64) -> (Fx, Page) {
    let (dom, page) = build(width);
    let mut fx = controller(dom);
    fx.on_ready();
    (fx, page)
}

pub fn particle_ids(fx: &Fx) -> Vec<NodeId> {
    fx.dom().query_all(".particle")
}
