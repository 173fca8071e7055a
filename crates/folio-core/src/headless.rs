//! In-memory document and virtual clock.
//!
//! `FakeDom` keeps a small element tree with classes, inline styles,
//! attributes, text and fixed layout boxes, and answers the handful of
//! selector shapes the effects use: `tag`, `.class`, `#id`, compounds such as
//! `p.note`, comma lists and the descendant combinator. `ManualScheduler`
//! holds timeouts and frame requests until the caller advances time.

use crate::controller::PageFx;
use crate::dom::{Dom, Rect};
use crate::error::DomError;
use crate::timer::{Scheduler, Task, TimerId};
use fnv::FnvHashMap;
use smallvec::SmallVec;
use std::cell::{Cell, RefCell};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Default)]
struct NodeData {
    tag: String,
    classes: SmallVec<[String; 4]>,
    attrs: FnvHashMap<String, String>,
    styles: FnvHashMap<String, String>,
    text: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    rect: Rect,
    offset_top: f64,
}

pub struct FakeDom {
    nodes: RefCell<Vec<NodeData>>,
    root: NodeId,
    head: NodeId,
    body: NodeId,
    width: Cell<f64>,
    scroll_y: Cell<f64>,
    year: i32,
    scrolls: RefCell<Vec<f64>>,
    create_budget: Cell<Option<usize>>,
}

impl FakeDom {
    /// Empty `<html><head></head><body></body></html>` at the given viewport width.
    pub fn new(width: f64) -> Self {
        let dom = Self {
            nodes: RefCell::new(Vec::new()),
            root: NodeId(0),
            head: NodeId(1),
            body: NodeId(2),
            width: Cell::new(width),
            scroll_y: Cell::new(0.0),
            year: 2026,
            scrolls: RefCell::new(Vec::new()),
            create_budget: Cell::new(None),
        };
        dom.alloc("html");
        let head = dom.alloc("head");
        let body = dom.alloc("body");
        dom.attach(dom.root, head);
        dom.attach(dom.root, body);
        dom
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    // ---------------- Building ----------------

    /// Append `<tag class="...">` to `parent`.
    pub fn element(&self, parent: NodeId, tag: &str, classes: &str) -> NodeId {
        let id = self.alloc(tag);
        {
            let mut nodes = self.nodes.borrow_mut();
            nodes[id.0].classes = classes.split_whitespace().map(str::to_owned).collect();
        }
        self.attach(parent, id);
        id
    }

    pub fn with_id(&self, node: NodeId, id: &str) -> NodeId {
        self.set_attribute(&node, "id", id);
        node
    }

    pub fn set_rect(&self, node: NodeId, rect: Rect) {
        self.nodes.borrow_mut()[node.0].rect = rect;
    }

    pub fn set_offset_top(&self, node: NodeId, top: f64) {
        self.nodes.borrow_mut()[node.0].offset_top = top;
    }

    pub fn set_width(&self, width: f64) {
        self.width.set(width);
    }

    pub fn set_scroll_y(&self, y: f64) {
        self.scroll_y.set(y);
    }

    /// Make every subsequent `create` fail.
    pub fn fail_creates(&self, fail: bool) {
        self.create_budget.set(fail.then_some(0));
    }

    /// Let `n` more `create` calls succeed, then fail the rest.
    pub fn fail_creates_after(&self, n: usize) {
        self.create_budget.set(Some(n));
    }

    // ---------------- Inspection ----------------

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.nodes.borrow()[node.0].children.clone()
    }

    pub fn is_attached(&self, node: NodeId) -> bool {
        let nodes = self.nodes.borrow();
        let mut cur = node;
        loop {
            if cur == self.root {
                return true;
            }
            match nodes[cur.0].parent {
                Some(p) => cur = p,
                None => return false,
            }
        }
    }

    pub fn tag(&self, node: NodeId) -> String {
        self.nodes.borrow()[node.0].tag.clone()
    }

    /// Every smooth scroll requested so far.
    pub fn scroll_log(&self) -> Vec<f64> {
        self.scrolls.borrow().clone()
    }

    // ---------------- Internals ----------------

    fn alloc(&self, tag: &str) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(NodeData {
            tag: tag.to_ascii_lowercase(),
            ..NodeData::default()
        });
        NodeId(nodes.len() - 1)
    }

    fn detach(&self, node: NodeId) {
        let mut nodes = self.nodes.borrow_mut();
        if let Some(parent) = nodes[node.0].parent.take() {
            nodes[parent.0].children.retain(|c| *c != node);
        }
    }

    fn attach(&self, parent: NodeId, child: NodeId) {
        self.detach(child);
        let mut nodes = self.nodes.borrow_mut();
        nodes[child.0].parent = Some(parent);
        nodes[parent.0].children.push(child);
    }

    fn in_document_order(&self) -> Vec<NodeId> {
        let nodes = self.nodes.borrow();
        let mut out = Vec::new();
        let mut stack = vec![self.root];
        while let Some(n) = stack.pop() {
            out.push(n);
            stack.extend(nodes[n.0].children.iter().rev());
        }
        out
    }

    fn matches(&self, node: NodeId, selector: &str) -> bool {
        selector
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .any(|alt| self.matches_chain(node, alt))
    }

    fn matches_chain(&self, node: NodeId, chain: &str) -> bool {
        let mut parts: Vec<&str> = chain.split_whitespace().collect();
        let Some(last) = parts.pop() else {
            return false;
        };
        let nodes = self.nodes.borrow();
        if !compound_matches(&nodes[node.0], last) {
            return false;
        }
        let mut cur = nodes[node.0].parent;
        while let Some(part) = parts.last() {
            match cur {
                Some(p) => {
                    if compound_matches(&nodes[p.0], part) {
                        parts.pop();
                    }
                    cur = nodes[p.0].parent;
                }
                None => return false,
            }
        }
        true
    }
}

/// `tag`, `.a.b`, `#id`, or a mix like `p.note`.
fn compound_matches(node: &NodeData, compound: &str) -> bool {
    let is_mark = |c: char| c == '.' || c == '#';
    let mut rest = compound;
    let tag_end = rest.find(is_mark).unwrap_or(rest.len());
    let tag = &rest[..tag_end];
    if !tag.is_empty() && tag != "*" && !tag.eq_ignore_ascii_case(&node.tag) {
        return false;
    }
    rest = &rest[tag_end..];
    while !rest.is_empty() {
        let kind = rest.as_bytes()[0];
        let body = &rest[1..];
        let end = body.find(is_mark).unwrap_or(body.len());
        let name = &body[..end];
        let ok = match kind {
            b'.' => node.classes.iter().any(|c| c == name),
            b'#' => node.attrs.get("id").map(String::as_str) == Some(name),
            _ => false,
        };
        if !ok {
            return false;
        }
        rest = &body[end..];
    }
    true
}

impl Dom for FakeDom {
    type Node = NodeId;

    fn query(&self, selector: &str) -> Option<NodeId> {
        self.query_all(selector).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        self.in_document_order()
            .into_iter()
            .filter(|n| self.matches(*n, selector))
            .collect()
    }

    fn by_id(&self, id: &str) -> Option<NodeId> {
        let nodes = self.nodes.borrow();
        self.in_document_order()
            .into_iter()
            .find(|n| nodes[n.0].attrs.get("id").map(String::as_str) == Some(id))
    }

    fn head(&self) -> Option<NodeId> {
        Some(self.head)
    }

    fn body(&self) -> Option<NodeId> {
        Some(self.body)
    }

    fn create(&self, tag: &str) -> Result<NodeId, DomError> {
        match self.create_budget.get() {
            Some(0) => return Err(DomError::Create(tag.to_owned())),
            Some(n) => self.create_budget.set(Some(n - 1)),
            None => {}
        }
        Ok(self.alloc(tag))
    }

    fn append(&self, parent: &NodeId, child: &NodeId) -> Result<(), DomError> {
        if self.contains(child, parent) {
            return Err(DomError::Append("child contains parent".into()));
        }
        self.attach(*parent, *child);
        Ok(())
    }

    fn remove(&self, node: &NodeId) {
        self.detach(*node);
    }

    fn clear_children(&self, node: &NodeId) {
        for child in self.children(*node) {
            self.detach(child);
        }
    }

    fn contains(&self, ancestor: &NodeId, node: &NodeId) -> bool {
        let nodes = self.nodes.borrow();
        let mut cur = Some(*node);
        while let Some(n) = cur {
            if n == *ancestor {
                return true;
            }
            cur = nodes[n.0].parent;
        }
        false
    }

    fn set_style(&self, node: &NodeId, property: &str, value: &str) {
        let mut nodes = self.nodes.borrow_mut();
        let styles = &mut nodes[node.0].styles;
        if value.is_empty() {
            styles.remove(property);
        } else {
            styles.insert(property.to_owned(), value.to_owned());
        }
    }

    fn style(&self, node: &NodeId, property: &str) -> String {
        self.nodes.borrow()[node.0]
            .styles
            .get(property)
            .cloned()
            .unwrap_or_default()
    }

    fn add_class(&self, node: &NodeId, class: &str) {
        let mut nodes = self.nodes.borrow_mut();
        let classes = &mut nodes[node.0].classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_owned());
        }
    }

    fn remove_class(&self, node: &NodeId, class: &str) {
        self.nodes.borrow_mut()[node.0].classes.retain(|c| c != class);
    }

    fn toggle_class(&self, node: &NodeId, class: &str) -> bool {
        if self.has_class(node, class) {
            self.remove_class(node, class);
            false
        } else {
            self.add_class(node, class);
            true
        }
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.nodes.borrow()[node.0].classes.iter().any(|c| c == class)
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.nodes.borrow()[node.0].attrs.get(name).cloned()
    }

    fn set_attribute(&self, node: &NodeId, name: &str, value: &str) {
        self.nodes.borrow_mut()[node.0]
            .attrs
            .insert(name.to_owned(), value.to_owned());
    }

    fn text(&self, node: &NodeId) -> Option<String> {
        self.nodes.borrow()[node.0].text.clone()
    }

    fn set_text(&self, node: &NodeId, text: &str) {
        self.nodes.borrow_mut()[node.0].text = Some(text.to_owned());
    }

    fn rect(&self, node: &NodeId) -> Rect {
        self.nodes.borrow()[node.0].rect
    }

    fn offset_top(&self, node: &NodeId) -> f64 {
        self.nodes.borrow()[node.0].offset_top
    }

    fn inner_width(&self) -> f64 {
        self.width.get()
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn smooth_scroll_to(&self, top: f64) {
        self.scrolls.borrow_mut().push(top);
        self.scroll_y.set(top.max(0.0));
    }

    fn current_year(&self) -> i32 {
        self.year
    }
}

struct Pending<N> {
    due_ms: u64,
    id: TimerId,
    task: Task<N>,
}

/// Virtual clock. Timeouts fire in due order, ties in scheduling order.
pub struct ManualScheduler<N = NodeId> {
    now_ms: u64,
    next_id: i32,
    timers: Vec<Pending<N>>,
    frames: Vec<Task<N>>,
}

impl<N> Default for ManualScheduler<N> {
    fn default() -> Self {
        Self {
            now_ms: 0,
            next_id: 0,
            timers: Vec::new(),
            frames: Vec::new(),
        }
    }
}

impl<N> ManualScheduler<N> {
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn pending_frames(&self) -> usize {
        self.frames.len()
    }

    /// Delays of the pending timeouts relative to now, in scheduling order.
    pub fn pending_delays(&self) -> Vec<u64> {
        self.timers.iter().map(|t| t.due_ms - self.now_ms).collect()
    }

    /// Remove and return the earliest timeout due at or before `until_ms`.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<(u64, Task<N>)> {
        let (idx, _) = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due_ms <= until_ms)
            .min_by_key(|(i, t)| (t.due_ms, *i))?;
        let p = self.timers.remove(idx);
        Some((p.due_ms, p.task))
    }

    pub fn set_now(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }

    pub fn take_frames(&mut self) -> Vec<Task<N>> {
        std::mem::take(&mut self.frames)
    }
}

impl<N> Scheduler<N> for ManualScheduler<N> {
    fn set_timeout(&mut self, delay_ms: u32, task: Task<N>) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.timers.push(Pending {
            due_ms: self.now_ms + delay_ms as u64,
            id,
            task,
        });
        id
    }

    fn clear_timeout(&mut self, id: TimerId) {
        self.timers.retain(|t| t.id != id);
    }

    fn request_frame(&mut self, task: Task<N>) {
        self.frames.push(task);
    }
}

impl PageFx<FakeDom, ManualScheduler> {
    /// Move the virtual clock forward, running every timeout that comes due,
    /// including ones scheduled by earlier tasks within the window.
    pub fn advance(&mut self, ms: u64) {
        let until = self.scheduler.now_ms() + ms;
        while let Some((due, task)) = self.scheduler.pop_due(until) {
            self.scheduler.set_now(due);
            self.on_timer(task);
        }
        self.scheduler.set_now(until);
    }

    /// Deliver one animation frame. Returns how many callbacks ran.
    pub fn run_frame(&mut self) -> usize {
        let tasks = self.scheduler.take_frames();
        let n = tasks.len();
        for task in tasks {
            self.on_timer(task);
        }
        n
    }
}
