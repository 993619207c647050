use crate::constants::{GLOBAL_SHOW_SECTION, GLOBAL_TOGGLE_MENU};
use crate::dom::{self, WebDom};
use crate::listeners::{self, Scope};
use panel_core::{BindingTable, PanelController, Trigger};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

#[derive(Clone)]
pub struct PageWiring {
    pub window: web::Window,
    pub document: web::Document,
    pub controller: Rc<PanelController>,
    pub table: Rc<RefCell<BindingTable>>,
}

impl PageWiring {
    fn fire(&self, trigger: &Trigger) {
        let mut page = WebDom::new(self.document.clone());
        let ran = self
            .controller
            .dispatch(&mut page, &self.table.borrow(), trigger);
        log::debug!("[events] {:?} ran {} action(s)", trigger, ran);
    }
}

/// Hook the page lifecycle: resolve bindings once the markup is ready and run
/// the initializer on window load. Phases that already passed are replayed.
pub fn wire_page(w: PageWiring) -> anyhow::Result<()> {
    let missed = listeners::missed_triggers(dom::load_phase(&w.document));

    if missed.contains(&Trigger::ContentLoaded) {
        on_content_loaded(&w);
    } else {
        let (_, event) = listeners::listener_for(&Trigger::ContentLoaded);
        let w_ready = w.clone();
        dom::add_listener(&w.document, event, move || on_content_loaded(&w_ready))?;
    }

    if missed.contains(&Trigger::WindowLoad) {
        w.fire(&Trigger::WindowLoad);
    } else {
        let (_, event) = listeners::listener_for(&Trigger::WindowLoad);
        let w_load = w.clone();
        dom::add_listener(&w.window, event, move || w_load.fire(&Trigger::WindowLoad))?;
    }
    Ok(())
}

fn on_content_loaded(w: &PageWiring) {
    let page = WebDom::new(w.document.clone());
    let table = BindingTable::resolve(w.controller.config(), &page);
    log::info!("[events] {} binding(s) resolved", table.len());
    *w.table.borrow_mut() = table;

    let clicks: Vec<Trigger> = w
        .table
        .borrow()
        .click_targets()
        .into_iter()
        .map(|id| Trigger::Click(id.to_string()))
        .collect();
    for trigger in clicks {
        if let (Scope::Element(id), _) = listeners::listener_for(&trigger) {
            let w_click = w.clone();
            let t = trigger.clone();
            if let Err(e) = dom::add_click_listener(&w.document, id, move || w_click.fire(&t)) {
                log::warn!("[events] {}", e);
            }
        }
    }
    w.fire(&Trigger::ContentLoaded);
}

/// Install `window.showSection` and `window.toggleMenu` so inline handlers in
/// the markup reach the same functions the module exports.
pub fn expose_globals(window: &web::Window) -> anyhow::Result<()> {
    let target: &JsValue = window.as_ref();

    let show = Closure::wrap(
        Box::new(move |id: String| crate::show_section(&id)) as Box<dyn FnMut(String)>,
    );
    js_sys::Reflect::set(target, &JsValue::from_str(GLOBAL_SHOW_SECTION), show.as_ref())
        .map_err(|e| anyhow::anyhow!("install {}: {:?}", GLOBAL_SHOW_SECTION, e))?;
    show.forget();

    let toggle = Closure::wrap(Box::new(crate::toggle_menu) as Box<dyn FnMut()>);
    js_sys::Reflect::set(target, &JsValue::from_str(GLOBAL_TOGGLE_MENU), toggle.as_ref())
        .map_err(|e| anyhow::anyhow!("install {}: {:?}", GLOBAL_TOGGLE_MENU, e))?;
    toggle.forget();
    Ok(())
}
