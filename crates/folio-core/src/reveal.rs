//! One-shot staggered reveal of content cards as they scroll into view.

use crate::constants::*;
use crate::dom::Dom;
use crate::timer::{Scheduler, Task};
use smallvec::SmallVec;

/// One entry of an intersection batch, in the order the observer reported it.
#[derive(Clone, Debug)]
pub struct Intersection<N> {
    pub target: N,
    pub is_intersecting: bool,
}

/// Nodes that no longer need observing.
pub type Unobserve<N> = SmallVec<[N; 8]>;

pub struct RevealSet<N> {
    targets: Vec<N>,
    scheduled: Vec<N>,
    stagger_ms: u32,
}

impl<N: Clone + PartialEq> RevealSet<N> {
    pub fn new(stagger_ms: u32) -> Self {
        Self {
            targets: Vec::new(),
            scheduled: Vec::new(),
            stagger_ms,
        }
    }

    /// Hide every reveal target and remember it. Returns the nodes to observe.
    pub fn prepare<D: Dom<Node = N>>(&mut self, dom: &D) -> &[N] {
        self.targets = dom.query_all(SEL_REVEAL_TARGETS);
        for el in &self.targets {
            dom.set_style(el, "opacity", REVEAL_HIDDEN_OPACITY);
            dom.set_style(el, "transform", REVEAL_HIDDEN_TRANSFORM);
            dom.set_style(el, "transition", REVEAL_TRANSITION);
        }
        &self.targets
    }

    /// Schedule reveals for the intersecting entries of a batch. Entry `i`
    /// waits `i * stagger`. Elements already scheduled or revealed are
    /// skipped; the returned nodes can be unobserved.
    pub fn on_intersections<D, S>(
        &mut self,
        dom: &D,
        scheduler: &mut S,
        entries: &[Intersection<N>],
    ) -> Unobserve<N>
    where
        D: Dom<Node = N>,
        S: Scheduler<N>,
    {
        let mut done = Unobserve::new();
        for (index, entry) in entries.iter().enumerate() {
            if !entry.is_intersecting || self.is_settled(dom, &entry.target) {
                continue;
            }
            let delay = self.stagger_ms.saturating_mul(index as u32);
            scheduler.set_timeout(delay, Task::Reveal(entry.target.clone()));
            self.scheduled.push(entry.target.clone());
            done.push(entry.target.clone());
        }
        done
    }

    fn is_settled<D: Dom<Node = N>>(&self, dom: &D, node: &N) -> bool {
        self.scheduled.contains(node) || dom.has_class(node, CLASS_ANIMATE_IN)
    }

    pub fn targets(&self) -> &[N] {
        &self.targets
    }
}

pub fn reveal<D: Dom>(dom: &D, node: &D::Node) {
    dom.set_style(node, "opacity", "1");
    dom.set_style(node, "transform", "translateY(0)");
    dom.add_class(node, CLASS_ANIMATE_IN);
}
