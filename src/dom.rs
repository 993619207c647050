use crate::listeners::LoadPhase;
use panel_core::Dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Attach `handler` to `event` on `target` for the rest of the page lifetime.
pub fn add_listener(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut() + 'static,
) -> anyhow::Result<()> {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", event, e))?;
    closure.forget();
    Ok(())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    handler: impl FnMut() + 'static,
) -> anyhow::Result<()> {
    match document.get_element_by_id(element_id) {
        Some(el) => add_listener(&el, crate::constants::EVENT_CLICK, handler),
        None => Err(anyhow::anyhow!("no element `{}` to click", element_id)),
    }
}

pub fn load_phase(document: &web::Document) -> LoadPhase {
    LoadPhase::from_ready_state(&document.ready_state())
}

/// [`Dom`] over the live browser document.
#[derive(Clone, Debug)]
pub struct WebDom {
    document: web::Document,
}

impl WebDom {
    pub fn new(document: web::Document) -> Self {
        Self { document }
    }

    pub fn current() -> Option<Self> {
        window_document().map(Self::new)
    }
}

fn style(el: &web::Element) -> Option<web::CssStyleDeclaration> {
    if let Some(h) = el.dyn_ref::<web::HtmlElement>() {
        return Some(h.style());
    }
    el.dyn_ref::<web::SvgElement>().map(|s| s.style())
}

fn warn_on_err(op: &str, class: &str, res: Result<(), JsValue>) {
    if let Err(e) = res {
        log::warn!("[dom] {} class `{}` failed: {:?}", op, class, e);
    }
}

impl Dom for WebDom {
    type Node = web::Element;

    fn element_by_id(&self, id: &str) -> Option<web::Element> {
        self.document.get_element_by_id(id)
    }

    fn elements_by_class(&self, class: &str) -> Vec<web::Element> {
        let found = self.document.get_elements_by_class_name(class);
        (0..found.length()).filter_map(|i| found.item(i)).collect()
    }

    fn elements_with_attribute(&self, name: &str) -> Vec<web::Element> {
        let found = match self.document.query_selector_all(&format!("[{}]", name)) {
            Ok(list) => list,
            Err(e) => {
                log::warn!("[dom] bad attribute selector `{}`: {:?}", name, e);
                return Vec::new();
            }
        };
        (0..found.length())
            .filter_map(|i| found.item(i))
            .filter_map(|n| n.dyn_into::<web::Element>().ok())
            .collect()
    }

    fn node_id(&self, node: &web::Element) -> Option<String> {
        Some(node.id()).filter(|id| !id.is_empty())
    }

    fn attribute(&self, node: &web::Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn has_class(&self, node: &web::Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn display(&self, node: &web::Element) -> Option<String> {
        style(node)
            .and_then(|s| s.get_property_value("display").ok())
            .filter(|v| !v.is_empty())
    }

    fn add_class(&mut self, node: &web::Element, class: &str) {
        warn_on_err("add", class, node.class_list().add_1(class));
    }

    fn remove_class(&mut self, node: &web::Element, class: &str) {
        warn_on_err("remove", class, node.class_list().remove_1(class));
    }

    fn toggle_class(&mut self, node: &web::Element, class: &str) -> bool {
        match node.class_list().toggle(class) {
            Ok(shown) => shown,
            Err(e) => {
                log::warn!("[dom] toggle class `{}` failed: {:?}", class, e);
                self.has_class(node, class)
            }
        }
    }

    fn set_display(&mut self, node: &web::Element, value: &str) {
        match style(node).map(|s| s.set_property("display", value)) {
            Some(Ok(())) => {}
            Some(Err(e)) => log::warn!("[dom] set display `{}` failed: {:?}", value, e),
            None => log::warn!("[dom] element `{}` has no inline style", node.id()),
        }
    }

    fn root_attribute(&self, name: &str) -> Option<String> {
        self.document
            .document_element()
            .and_then(|el| el.get_attribute(name))
    }
}
