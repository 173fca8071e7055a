//! Decorative particle field behind the hero section.

use crate::config::FxConfig;
use crate::constants::*;
use crate::dom::Dom;
use crate::timer::{Debounce, Scheduler, Task};
use rand::Rng;

/// Randomized look of one particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleSpec {
    pub size_px: f64,
    pub left_pct: f64,
    pub delay_sec: f64,
}

impl ParticleSpec {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            size_px: PARTICLE_SIZE_MIN_PX + rng.gen::<f64>() * PARTICLE_SIZE_SPAN_PX,
            left_pct: rng.gen::<f64>() * 100.0,
            delay_sec: rng.gen::<f64>() * PARTICLE_DELAY_MAX_SEC,
        }
    }
}

pub struct ParticleField {
    built_mobile: bool,
    recorded_width: f64,
    restore: Debounce,
}

impl ParticleField {
    pub fn new(config: &FxConfig) -> Self {
        Self {
            built_mobile: false,
            recorded_width: 0.0,
            restore: Debounce::new(config.particle_restore_ms),
        }
    }

    /// Fill the container for the current viewport. Returns how many
    /// particles were added (0 when the container is missing).
    pub fn init<D: Dom, R: Rng>(&mut self, dom: &D, config: &FxConfig, rng: &mut R) -> usize {
        let Some(container) = dom.by_id(SEL_PARTICLES_ID) else {
            return 0;
        };
        let width = dom.inner_width();
        self.built_mobile = config.is_mobile(width);
        self.recorded_width = width;

        let count = config.particle_target(width);
        let mut added = 0;
        for _ in 0..count {
            match spawn(dom, &container, ParticleSpec::random(rng)) {
                Ok(()) => added += 1,
                Err(e) => {
                    log::warn!("[particles] {}", e);
                    break;
                }
            }
        }
        log::debug!("[particles] built {} (mobile={})", added, self.built_mobile);
        added
    }

    /// Dim the field while a small screen scrolls; opacity comes back after a
    /// quiet period.
    pub fn on_scroll<D: Dom, S: Scheduler<D::Node>>(&mut self, dom: &D, scheduler: &mut S) {
        if !self.built_mobile {
            return;
        }
        let Some(container) = dom.by_id(SEL_PARTICLES_ID) else {
            return;
        };
        dom.set_style(&container, "opacity", PARTICLE_SCROLL_OPACITY);
        self.restore.schedule(scheduler, Task::RestoreParticles);
    }

    pub fn restore<D: Dom>(&mut self, dom: &D) {
        self.restore.fired();
        if let Some(container) = dom.by_id(SEL_PARTICLES_ID) {
            dom.set_style(&container, "opacity", PARTICLE_REST_OPACITY);
        }
    }

    /// Debounced resize: rebuild on a large width change, then trim anything
    /// above the breakpoint target.
    pub fn on_resize<D: Dom, R: Rng>(&mut self, dom: &D, config: &FxConfig, rng: &mut R) {
        let width = dom.inner_width();
        if (width - self.recorded_width).abs() > config.particle_regen_delta_px {
            if let Some(container) = dom.by_id(SEL_PARTICLES_ID) {
                dom.clear_children(&container);
                self.init(dom, config, rng);
                log::debug!("[particles] regenerated for width {}", width);
            }
            self.recorded_width = width;
        }
        self.trim(dom, config);
    }

    /// Remove particles beyond the target for the current width.
    pub fn trim<D: Dom>(&self, dom: &D, config: &FxConfig) -> usize {
        let target = config.particle_target(dom.inner_width());
        let particles = dom.query_all(SEL_PARTICLE);
        let excess = particles.len().saturating_sub(target);
        for p in particles.iter().skip(target) {
            dom.remove(p);
        }
        excess
    }

    pub fn recorded_width(&self) -> f64 {
        self.recorded_width
    }

    pub fn built_mobile(&self) -> bool {
        self.built_mobile
    }
}

fn spawn<D: Dom>(dom: &D, container: &D::Node, spec: ParticleSpec) -> Result<(), crate::DomError> {
    let p = dom.create("div")?;
    dom.add_class(&p, CLASS_PARTICLE);
    let size = format!("{}px", spec.size_px);
    dom.set_style(&p, "width", &size);
    dom.set_style(&p, "height", &size);
    dom.set_style(&p, "left", &format!("{}%", spec.left_pct));
    dom.set_style(&p, "animation-delay", &format!("{}s", spec.delay_sec));
    dom.append(container, &p)
}
