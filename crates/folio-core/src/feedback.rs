//! Pointer feedback: click ripples, magnetic primary buttons, tag pulse.

use crate::constants::*;
use crate::dom::{Dom, Rect};
use crate::error::DomError;
use crate::timer::{Scheduler, Task};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RippleKind {
    Tag,
    Button,
}

impl RippleKind {
    pub fn class(self) -> &'static str {
        match self {
            Self::Tag => CLASS_RIPPLE,
            Self::Button => CLASS_BUTTON_RIPPLE,
        }
    }
}

/// Ripple square: side length and top-left corner relative to the host, so
/// that its center sits under the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleGeometry {
    pub size: f32,
    pub offset: Vec2,
}

#[inline]
pub fn ripple_geometry(rect: Rect, pointer: Vec2) -> RippleGeometry {
    let size = rect.larger_side();
    RippleGeometry {
        size,
        offset: pointer - rect.origin - Vec2::splat(size * 0.5),
    }
}

/// Translation pulling a button toward the pointer.
#[inline]
pub fn magnetic_offset(rect: Rect, pointer: Vec2, strength: f32) -> Vec2 {
    (pointer - rect.center()) * strength
}

/// Append a ripple to `host` and schedule its removal after `lifetime_ms`.
pub fn spawn_ripple<D: Dom, S: Scheduler<D::Node>>(
    dom: &D,
    scheduler: &mut S,
    host: &D::Node,
    pointer: Vec2,
    kind: RippleKind,
    lifetime_ms: u32,
) -> Result<D::Node, DomError> {
    let geom = ripple_geometry(dom.rect(host), pointer);
    let ripple = dom.create("span")?;
    let size = format!("{}px", geom.size);
    dom.set_style(&ripple, "width", &size);
    dom.set_style(&ripple, "height", &size);
    dom.set_style(&ripple, "left", &format!("{}px", geom.offset.x));
    dom.set_style(&ripple, "top", &format!("{}px", geom.offset.y));
    dom.add_class(&ripple, kind.class());
    dom.append(host, &ripple)?;
    scheduler.set_timeout(lifetime_ms, Task::RemoveNode(ripple.clone()));
    Ok(ripple)
}

pub fn magnetic_move<D: Dom>(dom: &D, button: &D::Node, pointer: Vec2, strength: f32) -> Vec2 {
    let shift = magnetic_offset(dom.rect(button), pointer, strength);
    dom.set_style(
        button,
        "transform",
        &format!("translate({}px, {}px)", shift.x, shift.y),
    );
    shift
}

pub fn magnetic_release<D: Dom>(dom: &D, button: &D::Node) {
    dom.set_style(button, "transform", "translate(0, 0)");
}

pub fn tag_pulse<D: Dom>(dom: &D, tag: &D::Node) {
    dom.set_style(tag, "animation", TAG_PULSE_ANIMATION);
}

/// Clearing the animation lets the next pointer-enter replay it.
pub fn tag_pulse_end<D: Dom>(dom: &D, tag: &D::Node) {
    dom.set_style(tag, "animation", "");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ripple_is_centered_on_pointer() {
        let rect = Rect::new(100.0, 50.0, 120.0, 40.0);
        let g = ripple_geometry(rect, Vec2::new(130.0, 60.0));
        assert_eq!(g.size, 120.0);
        // 130 - 100 - 60, 60 - 50 - 60
        assert_eq!(g.offset, Vec2::new(-30.0, -50.0));
    }

    #[test]
    fn ripple_uses_taller_side() {
        let rect = Rect::new(0.0, 0.0, 20.0, 64.0);
        assert_eq!(ripple_geometry(rect, Vec2::ZERO).size, 64.0);
    }

    #[test]
    fn magnetic_offset_is_tenth_of_distance_from_center() {
        let rect = Rect::new(0.0, 0.0, 200.0, 60.0);
        let at_center = magnetic_offset(rect, Vec2::new(100.0, 30.0), 0.1);
        assert_eq!(at_center, Vec2::ZERO);
        let off = magnetic_offset(rect, Vec2::new(150.0, 10.0), 0.1);
        assert!((off.x - 5.0).abs() < 1e-5);
        assert!((off.y + 2.0).abs() < 1e-5);
    }
}
