use crate::constants::*;

/// Runtime tunables. `Default` mirrors the values in [`crate::constants`].
#[derive(Clone, Debug, PartialEq)]
pub struct FxConfig {
    pub mobile_breakpoint_px: f64,
    pub menu_breakpoint_px: f64,
    pub particles_mobile: usize,
    pub particles_desktop: usize,
    pub particle_regen_delta_px: f64,
    pub navbar_scrolled_at_px: f64,
    pub scroll_top_visible_at_px: f64,
    pub header_offset_px: f64,
    pub particle_restore_ms: u32,
    pub menu_sync_debounce_ms: u32,
    pub layout_debounce_ms: u32,
    pub touch_release_ms: u32,
    pub tag_ripple_ms: u32,
    pub button_ripple_ms: u32,
    pub reveal_stagger_ms: u32,
    pub hero_stagger_ms: u32,
    pub magnetic_strength: f32,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: MOBILE_BREAKPOINT_PX,
            menu_breakpoint_px: MENU_BREAKPOINT_PX,
            particles_mobile: PARTICLES_MOBILE,
            particles_desktop: PARTICLES_DESKTOP,
            particle_regen_delta_px: PARTICLE_REGEN_DELTA_PX,
            navbar_scrolled_at_px: NAVBAR_SCROLLED_AT_PX,
            scroll_top_visible_at_px: SCROLL_TOP_VISIBLE_AT_PX,
            header_offset_px: HEADER_OFFSET_PX,
            particle_restore_ms: PARTICLE_RESTORE_MS,
            menu_sync_debounce_ms: MENU_SYNC_DEBOUNCE_MS,
            layout_debounce_ms: LAYOUT_DEBOUNCE_MS,
            touch_release_ms: TOUCH_RELEASE_MS,
            tag_ripple_ms: TAG_RIPPLE_MS,
            button_ripple_ms: BUTTON_RIPPLE_MS,
            reveal_stagger_ms: REVEAL_STAGGER_MS,
            hero_stagger_ms: HERO_STAGGER_MS,
            magnetic_strength: MAGNETIC_STRENGTH,
        }
    }
}

impl FxConfig {
    #[inline]
    pub fn is_mobile(&self, width: f64) -> bool {
        width < self.mobile_breakpoint_px
    }

    /// Breakpoint-derived particle count for a viewport width.
    #[inline]
    pub fn particle_target(&self, width: f64) -> usize {
        if self.is_mobile(width) {
            self.particles_mobile
        } else {
            self.particles_desktop
        }
    }
}
