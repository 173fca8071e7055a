mod common;

use common::*;
use folio_core::constants::REVEAL_TRANSITION;
use folio_core::headless::NodeId;
use folio_core::{Dom, Intersection};

fn hit(target: NodeId) -> Intersection<NodeId> {
    Intersection {
        target,
        is_intersecting: true,
    }
}

fn miss(target: NodeId) -> Intersection<NodeId> {
    Intersection {
        target,
        is_intersecting: false,
    }
}

fn revealed(fx: &Fx, node: NodeId) -> bool {
    fx.dom().has_class(&node, "animate-in")
}

#[test]
fn targets_start_hidden() {
    let (fx, page) = ready(1024.0);
    assert_eq!(fx.reveal_targets(), page.cards.as_slice());
    for card in &page.cards {
        assert_eq!(fx.dom().style(card, "opacity"), "0");
        assert_eq!(fx.dom().style(card, "transform"), "translateY(30px)");
        assert_eq!(fx.dom().style(card, "transition"), REVEAL_TRANSITION);
        assert!(!revealed(&fx, *card));
    }
}

#[test]
fn batch_is_staggered_by_position() {
    let (mut fx, page) = ready(1024.0);
    let [a, b, c, ..] = page.cards[..] else {
        unreachable!()
    };

    let done = fx.on_intersections(&[hit(a), miss(b), hit(c)]);
    assert_eq!(done.as_slice(), &[a, c]);

    fx.advance(0);
    assert!(revealed(&fx, a));
    assert_eq!(fx.dom().style(&a, "opacity"), "1");
    assert_eq!(fx.dom().style(&a, "transform"), "translateY(0)");
    assert!(!revealed(&fx, b));
    assert!(!revealed(&fx, c));

    fx.advance(199);
    assert!(!revealed(&fx, c));
    fx.advance(1);
    assert!(revealed(&fx, c));
    assert!(!revealed(&fx, b));
}

#[test]
fn reveal_never_reverts() {
    let (mut fx, page) = ready(1024.0);
    let card = page.cards[0];
    fx.on_intersections(&[hit(card)]);
    fx.advance(0);
    assert!(revealed(&fx, card));

    for _ in 0..3 {
        assert!(fx.on_intersections(&[miss(card)]).is_empty());
        assert!(fx.on_intersections(&[hit(card)]).is_empty());
        fx.advance(500);
        assert!(revealed(&fx, card));
        assert_eq!(fx.dom().style(&card, "opacity"), "1");
        assert_eq!(fx.dom().style(&card, "transform"), "translateY(0)");
    }
    assert_eq!(fx.scheduler().pending_timers(), 0);
}

#[test]
fn repeated_entries_before_timer_fires_schedule_once() {
    let (mut fx, page) = ready(1024.0);
    let card = page.cards[1];
    fx.on_intersections(&[miss(page.cards[0]), hit(card)]);
    fx.on_intersections(&[hit(card)]);
    assert_eq!(fx.scheduler().pending_delays(), vec![100]);
}
