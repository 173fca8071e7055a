//! `PageFx`: every page effect behind one stateful controller.
//!
//! The host forwards DOM events to the `on_*` methods and hands due tasks
//! back through [`PageFx::on_timer`]. All state a page script would keep in
//! globals (recorded resize width, pending timers, reveal flags) lives here.

use crate::config::FxConfig;
use crate::constants::*;
use crate::dom::Dom;
use crate::feedback::{self, RippleKind};
use crate::lifecycle;
use crate::mobile_nav::MobileNav;
use crate::navbar;
use crate::particles::ParticleField;
use crate::reveal::{self, Intersection, RevealSet, Unobserve};
use crate::scroll;
use crate::timer::{Debounce, FrameGuard, Scheduler, Task};
use glam::Vec2;
use rand::rngs::StdRng;

pub struct PageFx<D: Dom, S: Scheduler<D::Node>> {
    pub(crate) dom: D,
    pub(crate) scheduler: S,
    config: FxConfig,
    rng: StdRng,
    particles: ParticleField,
    navbar_frame: FrameGuard,
    reveal: RevealSet<D::Node>,
    nav: Option<MobileNav<D::Node>>,
    layout_resize: Debounce,
    menu_resize: Debounce,
    cards_interactive: bool,
}

impl<D: Dom, S: Scheduler<D::Node>> PageFx<D, S> {
    pub fn new(dom: D, scheduler: S, config: FxConfig, rng: StdRng) -> Self {
        Self {
            particles: ParticleField::new(&config),
            reveal: RevealSet::new(config.reveal_stagger_ms),
            layout_resize: Debounce::new(config.layout_debounce_ms),
            menu_resize: Debounce::new(config.menu_sync_debounce_ms),
            navbar_frame: FrameGuard::default(),
            nav: None,
            cards_interactive: false,
            dom,
            scheduler,
            config,
            rng,
        }
    }

    // ---------------- Lifecycle ----------------

    /// Document parsed: build every effect that does not need layout.
    pub fn on_ready(&mut self) {
        if let Err(e) = lifecycle::inject_styles(&self.dom) {
            log::warn!("[styles] {}", e);
        }
        self.particles.init(&self.dom, &self.config, &mut self.rng);

        match scroll::sync_scroll_top(&self.dom, self.config.scroll_top_visible_at_px) {
            Some(_) => log::info!("scroll to top initialized"),
            None => log::error!("scroll to top button not found"),
        }

        let observed = self.reveal.prepare(&self.dom).len();
        log::debug!("[reveal] observing {} elements", observed);

        self.nav = MobileNav::locate(&self.dom);
        lifecycle::patch_copyright_year(&self.dom);
        log::info!("page effects initialized");
    }

    /// All resources loaded: hero entrance and card hover.
    pub fn on_load(&mut self) {
        let n = lifecycle::start_hero_sequence(
            &self.dom,
            &mut self.scheduler,
            self.config.hero_stagger_ms,
        );
        log::debug!("[hero] sequencing {} blocks", n);
        self.cards_interactive = true;
    }

    // ---------------- Window events ----------------

    pub fn on_scroll(&mut self) {
        self.particles.on_scroll(&self.dom, &mut self.scheduler);
        self.navbar_frame
            .request(&mut self.scheduler, Task::NavbarFrame);
        scroll::sync_scroll_top(&self.dom, self.config.scroll_top_visible_at_px);
    }

    pub fn on_resize(&mut self) {
        self.layout_resize
            .schedule(&mut self.scheduler, Task::LayoutResize);
        if self.nav.is_some() {
            self.menu_resize.schedule(&mut self.scheduler, Task::MenuSync);
        }
    }

    /// Run a task the scheduler handed back, either a timeout or a frame.
    pub fn on_timer(&mut self, task: Task<D::Node>) {
        match task {
            Task::RestoreParticles => self.particles.restore(&self.dom),
            Task::LayoutResize => {
                self.layout_resize.fired();
                self.particles
                    .on_resize(&self.dom, &self.config, &mut self.rng);
            }
            Task::MenuSync => {
                self.menu_resize.fired();
                if let Some(nav) = &self.nav {
                    nav.sync_for_viewport(&self.dom, self.config.menu_breakpoint_px);
                }
            }
            Task::RemoveNode(node) => self.dom.remove(&node),
            Task::Reveal(node) => reveal::reveal(&self.dom, &node),
            Task::HeroReveal(node) => lifecycle::show_hero(&self.dom, &node),
            Task::CardRelease(node) => lifecycle::card_settle(&self.dom, &node, false),
            Task::NavbarFrame => {
                navbar::update(&self.dom, self.config.navbar_scrolled_at_px);
                self.navbar_frame.complete();
            }
        }
    }

    // ---------------- Navigation ----------------

    /// A `.nav-link` was activated. The host always suppresses the default
    /// navigation. Returns the scroll offset used, if the target resolved.
    pub fn on_nav_link_click(&mut self, link: &D::Node) -> Option<f64> {
        let top = self.dom.attribute(link, "href").and_then(|href| {
            scroll::scroll_to_fragment(&self.dom, &href, self.config.header_offset_px)
        });
        if let Some(nav) = &self.nav {
            if self.dom.inner_width() <= self.config.menu_breakpoint_px && nav.is_open(&self.dom)
            {
                nav.close(&self.dom);
            }
        }
        top
    }

    pub fn on_menu_toggle(&mut self) -> Option<bool> {
        let nav = self.nav.as_ref()?;
        Some(nav.toggle(&self.dom))
    }

    pub fn on_document_click(&mut self, target: &D::Node) {
        if let Some(nav) = &self.nav {
            nav.on_document_click(&self.dom, target);
        }
    }

    pub fn scroll_to_top(&self) {
        scroll::scroll_to_top(&self.dom);
    }

    // ---------------- Reveal ----------------

    pub fn on_intersections(&mut self, entries: &[Intersection<D::Node>]) -> Unobserve<D::Node> {
        self.reveal
            .on_intersections(&self.dom, &mut self.scheduler, entries)
    }

    pub fn reveal_targets(&self) -> &[D::Node] {
        self.reveal.targets()
    }

    // ---------------- Pointer feedback ----------------

    pub fn on_tag_click(&mut self, tag: &D::Node, pointer: Vec2) -> Option<D::Node> {
        let lifetime = self.config.tag_ripple_ms;
        self.ripple(tag, pointer, RippleKind::Tag, lifetime)
    }

    pub fn on_tag_enter(&mut self, tag: &D::Node) {
        feedback::tag_pulse(&self.dom, tag);
    }

    pub fn on_tag_animation_end(&mut self, tag: &D::Node) {
        feedback::tag_pulse_end(&self.dom, tag);
    }

    pub fn on_button_click(&mut self, button: &D::Node, pointer: Vec2) -> Option<D::Node> {
        let lifetime = self.config.button_ripple_ms;
        self.ripple(button, pointer, RippleKind::Button, lifetime)
    }

    /// Magnetic pull, primary buttons only.
    pub fn on_button_move(&mut self, button: &D::Node, pointer: Vec2) -> Option<Vec2> {
        if !self.dom.has_class(button, CLASS_PRIMARY_BUTTON) {
            return None;
        }
        Some(feedback::magnetic_move(
            &self.dom,
            button,
            pointer,
            self.config.magnetic_strength,
        ))
    }

    pub fn on_button_leave(&mut self, button: &D::Node) {
        if self.dom.has_class(button, CLASS_PRIMARY_BUTTON) {
            feedback::magnetic_release(&self.dom, button);
        }
    }

    fn ripple(
        &mut self,
        host: &D::Node,
        pointer: Vec2,
        kind: RippleKind,
        lifetime_ms: u32,
    ) -> Option<D::Node> {
        match feedback::spawn_ripple(&self.dom, &mut self.scheduler, host, pointer, kind, lifetime_ms)
        {
            Ok(node) => Some(node),
            Err(e) => {
                log::warn!("[ripple] {}", e);
                None
            }
        }
    }

    // ---------------- Card hover (after load) ----------------

    pub fn on_card_enter(&mut self, card: &D::Node) {
        if self.cards_interactive {
            lifecycle::card_lift(&self.dom, card, true);
        }
    }

    pub fn on_card_leave(&mut self, card: &D::Node) {
        if self.cards_interactive {
            lifecycle::card_settle(&self.dom, card, true);
        }
    }

    pub fn on_card_touch_start(&mut self, card: &D::Node) {
        if self.cards_interactive {
            lifecycle::card_lift(&self.dom, card, false);
        }
    }

    pub fn on_card_touch_end(&mut self, card: &D::Node) {
        if self.cards_interactive {
            self.scheduler
                .set_timeout(self.config.touch_release_ms, Task::CardRelease(card.clone()));
        }
    }

    // ---------------- Accessors ----------------

    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn config(&self) -> &FxConfig {
        &self.config
    }

    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    /// `None` when the page has no mobile menu.
    pub fn menu_open(&self) -> Option<bool> {
        self.nav.as_ref().map(|nav| nav.is_open(&self.dom))
    }

    pub fn menu(&self) -> Option<&MobileNav<D::Node>> {
        self.nav.as_ref()
    }
}
