mod common;

use common::*;
use folio_core::constants::{NAVBAR_DEFAULT_STYLE, NAVBAR_SCROLLED_STYLE};
use folio_core::headless::FakeDom;
use folio_core::Dom;

fn visible(fx: &Fx, page: &Page) -> bool {
    fx.dom().has_class(&page.scroll_top, "visible")
}

#[test]
fn scroll_to_top_visibility_tracks_offset() {
    let (mut fx, page) = ready(1024.0);
    assert!(!visible(&fx, &page));
    for (y, expected) in [(120.0, false), (300.0, false), (301.0, true), (2_000.0, true), (299.0, false)] {
        fx.dom().set_scroll_y(y);
        fx.on_scroll();
        assert_eq!(visible(&fx, &page), expected, "scrollY {y}");
    }
}

#[test]
fn scroll_to_top_checked_at_ready() {
    let (dom, page) = build(1024.0);
    dom.set_scroll_y(640.0);
    let mut fx = controller(dom);
    fx.on_ready();
    assert!(visible(&fx, &page));
}

#[test]
fn page_without_scroll_to_top_still_initializes() {
    let dom = FakeDom::new(1024.0);
    let mut fx = controller(dom);
    fx.on_ready();
    fx.dom().set_scroll_y(900.0);
    fx.on_scroll();
    fx.scroll_to_top();
    assert_eq!(fx.dom().scroll_log(), vec![0.0]);
}

#[test]
fn scroll_to_top_goes_to_origin() {
    let (fx, _) = ready(1024.0);
    fx.dom().set_scroll_y(1_500.0);
    fx.scroll_to_top();
    assert_eq!(fx.dom().scroll_log(), vec![0.0]);
    assert_eq!(fx.dom().scroll_y(), 0.0);
}

#[test]
fn nav_link_scrolls_below_fixed_header() {
    let (mut fx, page) = ready(1024.0);
    assert_eq!(fx.on_nav_link_click(&page.about_link), Some(820.0));
    assert_eq!(fx.dom().scroll_log(), vec![820.0]);
}

#[test]
fn unresolvable_link_does_not_scroll() {
    let (mut fx, page) = ready(1024.0);
    assert_eq!(fx.on_nav_link_click(&page.broken_link), None);
    assert!(fx.dom().scroll_log().is_empty());
}

#[test]
fn nav_link_closes_open_menu_on_small_screens() {
    let (mut fx, page) = ready(600.0);
    fx.on_menu_toggle();
    assert_eq!(fx.menu_open(), Some(true));

    fx.on_nav_link_click(&page.broken_link);
    assert_eq!(fx.menu_open(), Some(false));
    assert_eq!(
        fx.dom().attribute(&page.menu_button, "aria-expanded").as_deref(),
        Some("false")
    );
}

#[test]
fn nav_link_leaves_menu_alone_on_wide_screens() {
    let (mut fx, page) = ready(1024.0);
    fx.on_menu_toggle();
    fx.on_nav_link_click(&page.about_link);
    assert_eq!(fx.menu_open(), Some(true));
}

#[test]
fn navbar_updates_at_most_once_per_frame() {
    let (mut fx, page) = ready(1024.0);
    fx.dom().set_scroll_y(120.0);
    for _ in 0..25 {
        fx.on_scroll();
    }
    assert_eq!(fx.scheduler().pending_frames(), 1);
    assert_eq!(fx.run_frame(), 1);

    let [transform, background, shadow] = NAVBAR_SCROLLED_STYLE;
    assert_eq!(fx.dom().style(&page.navbar, "transform"), transform);
    assert_eq!(fx.dom().style(&page.navbar, "background"), background);
    assert_eq!(fx.dom().style(&page.navbar, "box-shadow"), shadow);

    // guard released: the next scroll asks for a new frame
    fx.dom().set_scroll_y(50.0);
    fx.on_scroll();
    assert_eq!(fx.run_frame(), 1);
    assert_eq!(fx.dom().style(&page.navbar, "transform"), NAVBAR_DEFAULT_STYLE[0]);
    assert_eq!(fx.dom().style(&page.navbar, "background"), NAVBAR_DEFAULT_STYLE[1]);
}

#[test]
fn no_frame_without_scroll() {
    let (mut fx, page) = ready(1024.0);
    assert_eq!(fx.run_frame(), 0);
    assert_eq!(fx.dom().style(&page.navbar, "transform"), "");
}
