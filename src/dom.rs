use folio_core::{Dom, DomError, Rect};
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Attach `handler` for `event` on `target` for the lifetime of the page.
pub fn listen<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("[dom] could not listen for {}: {:?}", event, e);
    }
    closure.forget();
}

#[inline]
fn js_err(e: JsValue) -> DomError {
    DomError::Js(format!("{:?}", e))
}

/// The live page, seen through [`Dom`].
#[derive(Clone)]
pub struct WebDom {
    window: web::Window,
    document: web::Document,
}

impl WebDom {
    pub fn new(window: web::Window, document: web::Document) -> Self {
        Self { window, document }
    }

    pub fn from_window() -> Option<Self> {
        let window = web::window()?;
        let document = window.document()?;
        Some(Self::new(window, document))
    }

    pub fn window(&self) -> &web::Window {
        &self.window
    }

    pub fn document(&self) -> &web::Document {
        &self.document
    }
}

impl Dom for WebDom {
    type Node = web::Element;

    fn query(&self, selector: &str) -> Option<web::Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn query_all(&self, selector: &str) -> Vec<web::Element> {
        let Ok(list) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|n| n.dyn_into::<web::Element>().ok())
            .collect()
    }

    fn by_id(&self, id: &str) -> Option<web::Element> {
        self.document.get_element_by_id(id)
    }

    fn head(&self) -> Option<web::Element> {
        self.document.head().map(web::Element::from)
    }

    fn body(&self) -> Option<web::Element> {
        self.document.body().map(web::Element::from)
    }

    fn create(&self, tag: &str) -> Result<web::Element, DomError> {
        self.document
            .create_element(tag)
            .map_err(|_| DomError::Create(tag.to_owned()))
    }

    fn append(&self, parent: &web::Element, child: &web::Element) -> Result<(), DomError> {
        parent
            .append_child(child)
            .map(|_| ())
            .map_err(|e| DomError::Append(format!("{:?}", e)))
    }

    fn remove(&self, node: &web::Element) {
        node.remove();
    }

    fn clear_children(&self, node: &web::Element) {
        node.set_inner_html("");
    }

    fn contains(&self, ancestor: &web::Element, node: &web::Element) -> bool {
        let node: &web::Node = node;
        ancestor.contains(Some(node))
    }

    fn set_style(&self, node: &web::Element, property: &str, value: &str) {
        if let Some(el) = node.dyn_ref::<web::HtmlElement>() {
            if let Err(e) = el.style().set_property(property, value).map_err(js_err) {
                log::debug!("[dom] {}: {}", property, e);
            }
        }
    }

    fn style(&self, node: &web::Element, property: &str) -> String {
        node.dyn_ref::<web::HtmlElement>()
            .and_then(|el| el.style().get_property_value(property).ok())
            .unwrap_or_default()
    }

    fn add_class(&self, node: &web::Element, class: &str) {
        _ = node.class_list().add_1(class);
    }

    fn remove_class(&self, node: &web::Element, class: &str) {
        _ = node.class_list().remove_1(class);
    }

    fn toggle_class(&self, node: &web::Element, class: &str) -> bool {
        node.class_list()
            .toggle(class)
            .unwrap_or_else(|_| node.class_list().contains(class))
    }

    fn has_class(&self, node: &web::Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn attribute(&self, node: &web::Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attribute(&self, node: &web::Element, name: &str, value: &str) {
        _ = node.set_attribute(name, value);
    }

    fn text(&self, node: &web::Element) -> Option<String> {
        node.text_content()
    }

    fn set_text(&self, node: &web::Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn rect(&self, node: &web::Element) -> Rect {
        let r = node.get_bounding_client_rect();
        Rect::new(r.left() as f32, r.top() as f32, r.width() as f32, r.height() as f32)
    }

    fn offset_top(&self, node: &web::Element) -> f64 {
        node.dyn_ref::<web::HtmlElement>()
            .map(|el| el.offset_top() as f64)
            .unwrap_or(0.0)
    }

    fn inner_width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn smooth_scroll_to(&self, top: f64) {
        let opts = web::ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(web::ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&opts);
    }

    fn current_year(&self) -> i32 {
        js_sys::Date::new_0().get_full_year() as i32
    }
}
