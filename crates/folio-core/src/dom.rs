//! The document seam.
//!
//! Every effect reads and writes the page through [`Dom`]. The browser build
//! implements it over `web-sys`; [`crate::headless::FakeDom`] implements it in
//! memory so the effects can be driven without a browser.

use crate::error::DomError;
use glam::Vec2;
use std::fmt;

/// Border box of an element in viewport coordinates (CSS px).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::new(left, top),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    #[inline]
    pub fn larger_side(&self) -> f32 {
        self.size.x.max(self.size.y)
    }
}

pub trait Dom {
    /// Handle to an element. Cheap to clone; equality is node identity.
    type Node: Clone + PartialEq + fmt::Debug;

    // ---------------- Lookup ----------------
    fn query(&self, selector: &str) -> Option<Self::Node>;
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;
    fn by_id(&self, id: &str) -> Option<Self::Node>;
    fn head(&self) -> Option<Self::Node>;
    fn body(&self) -> Option<Self::Node>;

    // ---------------- Tree ----------------
    fn create(&self, tag: &str) -> Result<Self::Node, DomError>;
    fn append(&self, parent: &Self::Node, child: &Self::Node) -> Result<(), DomError>;
    fn remove(&self, node: &Self::Node);
    fn clear_children(&self, node: &Self::Node);
    /// True when `node` is `ancestor` or one of its descendants.
    fn contains(&self, ancestor: &Self::Node, node: &Self::Node) -> bool;

    // ---------------- Style, classes, attributes ----------------
    fn set_style(&self, node: &Self::Node, property: &str, value: &str);
    /// Inline value of `property`, empty when unset.
    fn style(&self, node: &Self::Node, property: &str) -> String;
    fn add_class(&self, node: &Self::Node, class: &str);
    fn remove_class(&self, node: &Self::Node, class: &str);
    /// Flip `class` and return whether it is now present.
    fn toggle_class(&self, node: &Self::Node, class: &str) -> bool;
    fn has_class(&self, node: &Self::Node, class: &str) -> bool;
    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;
    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str);
    fn text(&self, node: &Self::Node) -> Option<String>;
    fn set_text(&self, node: &Self::Node, text: &str);

    // ---------------- Layout ----------------
    fn rect(&self, node: &Self::Node) -> Rect;
    /// Distance from the document top to the element's top edge.
    fn offset_top(&self, node: &Self::Node) -> f64;

    // ---------------- Viewport ----------------
    fn inner_width(&self) -> f64;
    fn scroll_y(&self) -> f64;
    fn smooth_scroll_to(&self, top: f64);

    fn current_year(&self) -> i32;
}
