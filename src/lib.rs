#![cfg(target_arch = "wasm32")]
use panel_core::{Action, PageConfig, PanelController};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod listeners;

use dom::WebDom;

thread_local! {
    static CONTROLLER: RefCell<Option<Rc<PanelController>>> = const { RefCell::new(None) };
}

fn controller_for(page: &WebDom) -> Rc<PanelController> {
    if let Some(c) = CONTROLLER.with(|c| c.borrow().clone()) {
        return c;
    }
    let controller = Rc::new(PanelController::new(load_config(page)));
    CONTROLLER.with(|c| *c.borrow_mut() = Some(controller.clone()));
    controller
}

fn load_config(page: &WebDom) -> PageConfig {
    match PageConfig::from_dom(page) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::warn!("[config] {}; using defaults", e);
            PageConfig::default()
        }
    }
}

fn perform(action: Action) {
    match WebDom::current() {
        Some(mut page) => {
            let controller = controller_for(&page);
            controller.perform(&mut page, &action);
        }
        None => log::warn!("[panel] no document; {:?} skipped", action),
    }
}

/// Hide every section, then show the one with id `id`.
#[wasm_bindgen(js_name = showSection)]
pub fn show_section(id: &str) {
    perform(Action::ShowSection(id.to_string()));
}

/// Flip the menu's shown class.
#[wasm_bindgen(js_name = toggleMenu)]
pub fn toggle_menu() {
    perform(Action::ToggleMenu);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("panel-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let controller = controller_for(&WebDom::new(document.clone()));
    events::expose_globals(&window)?;
    events::wire_page(events::PageWiring {
        window,
        document,
        controller,
        table: Rc::new(RefCell::new(Default::default())),
    })
}
