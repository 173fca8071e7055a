// Host-side tests for the tuning constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../crates/folio-core/src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_counts_shrink_on_small_screens() {
    assert!(PARTICLES_MOBILE < PARTICLES_DESKTOP);
    assert!(PARTICLES_MOBILE > 0);
    assert!(PARTICLE_SIZE_MIN_PX > 0.0 && PARTICLE_SIZE_SPAN_PX > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scroll_thresholds_are_ordered() {
    // the navbar reacts before the scroll-to-top control appears
    assert!(NAVBAR_SCROLLED_AT_PX < SCROLL_TOP_VISIBLE_AT_PX);
    assert!(HEADER_OFFSET_PX > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn delays_have_logical_relationships() {
    // button ripples outlive tag ripples, matching their CSS animations
    assert!(BUTTON_RIPPLE_MS > TAG_RIPPLE_MS);
    assert!(MENU_SYNC_DEBOUNCE_MS < LAYOUT_DEBOUNCE_MS);
    assert!(REVEAL_STAGGER_MS < HERO_STAGGER_MS);
    assert!(PARTICLE_RESTORE_MS > 0);
}

#[test]
fn breakpoints_agree() {
    assert_eq!(MOBILE_BREAKPOINT_PX, MENU_BREAKPOINT_PX);
    assert!((0.0..=1.0).contains(&REVEAL_THRESHOLD));
    assert!(MAGNETIC_STRENGTH > 0.0 && MAGNETIC_STRENGTH < 1.0);
}

#[test]
fn selectors_are_well_formed() {
    for list in [SEL_REVEAL_TARGETS, SEL_HERO] {
        for part in list.split(',') {
            assert!(part.trim().starts_with('.'), "bad selector part {part:?}");
        }
    }
    assert!(!SEL_PARTICLES_ID.starts_with('#'));
    assert_eq!(SEL_PARTICLE, format!(".{CLASS_PARTICLE}"));
}

#[test]
fn navbar_variants_differ_in_every_property() {
    for (a, b) in NAVBAR_DEFAULT_STYLE.iter().zip(NAVBAR_SCROLLED_STYLE.iter()) {
        assert_ne!(a, b);
    }
}
