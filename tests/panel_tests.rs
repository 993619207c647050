// Host-side tests for the page controller against the in-memory document.

use panel_core::*;

fn login_page() -> MemoryDom {
    let mut dom = MemoryDom::new();
    dom.push_id("register");
    dom.push_id("login");
    dom.push_id("container");
    dom.push_id("menu");
    for id in ["home", "about", "contact"] {
        dom.push(MemoryElement::new().with_id(id).with_class("section"));
    }
    dom
}

fn visible_sections(dom: &MemoryDom) -> Vec<String> {
    dom.elements_by_class("section")
        .into_iter()
        .filter(|n| dom.display(n).as_deref() == Some("block"))
        .filter_map(|n| dom.node_id(&n))
        .collect()
}

#[test]
fn register_then_login_flips_container() {
    let mut dom = login_page();
    let ctl = PanelController::default();
    let table = BindingTable::resolve(ctl.config(), &dom);
    assert!(!ctl.is_right_panel_active(&dom), "container starts unflipped");

    ctl.dispatch(&mut dom, &table, &Trigger::Click("register".into()));
    assert!(
        dom.by_id("container")
            .is_some_and(|c| c.has_class("right-panel-active")),
        "register click should add the flip class"
    );

    ctl.dispatch(&mut dom, &table, &Trigger::Click("login".into()));
    assert!(
        !ctl.is_right_panel_active(&dom),
        "login click should remove the flip class"
    );
}

#[test]
fn repeated_register_clicks_keep_single_class() {
    let mut dom = login_page();
    let ctl = PanelController::default();
    ctl.activate_right_panel(&mut dom).unwrap();
    ctl.activate_right_panel(&mut dom).unwrap();
    let classes = &dom.by_id("container").unwrap().classes;
    assert_eq!(classes.len(), 1);

    ctl.deactivate_right_panel(&mut dom).unwrap();
    ctl.deactivate_right_panel(&mut dom).unwrap();
    assert!(!ctl.is_right_panel_active(&dom));
}

#[test]
fn show_section_leaves_exactly_one_visible() {
    let mut dom = login_page();
    let ctl = PanelController::default();
    for id in ["about", "home", "contact", "contact", "about"] {
        ctl.show_section(&mut dom, id).unwrap();
        assert_eq!(visible_sections(&dom), vec![id.to_string()]);
        assert_eq!(ctl.current_section(&dom).as_deref(), Some(id));
        for other in ["home", "about", "contact"].iter().filter(|o| **o != id) {
            assert_eq!(
                dom.by_id(other).and_then(|el| el.display.clone()).as_deref(),
                Some("none"),
                "{} should be hidden after showing {}",
                other,
                id
            );
        }
    }
}

#[test]
fn show_section_is_idempotent() {
    let mut once = login_page();
    let mut twice = login_page();
    let ctl = PanelController::default();
    ctl.show_section(&mut once, "about").unwrap();
    ctl.show_section(&mut twice, "about").unwrap();
    ctl.show_section(&mut twice, "about").unwrap();
    assert_eq!(visible_sections(&once), visible_sections(&twice));
    for id in ["home", "about", "contact"] {
        assert_eq!(
            once.by_id(id).unwrap().display,
            twice.by_id(id).unwrap().display
        );
    }
}

#[test]
fn toggle_menu_twice_restores_state() {
    let mut dom = login_page();
    let ctl = PanelController::default();
    assert_eq!(ctl.toggle_menu(&mut dom), Ok(true));
    assert!(dom.by_id("menu").unwrap().has_class("show"));
    assert_eq!(ctl.toggle_menu(&mut dom), Ok(false));
    assert!(!dom.by_id("menu").unwrap().has_class("show"));
}

#[test]
fn toggle_menu_leaves_other_classes_alone() {
    let mut dom = MemoryDom::new();
    dom.push(MemoryElement::new().with_id("menu").with_class("nav"));
    let ctl = PanelController::default();
    ctl.toggle_menu(&mut dom).unwrap();
    ctl.toggle_menu(&mut dom).unwrap();
    let menu = dom.by_id("menu").unwrap();
    assert!(menu.has_class("nav"));
    assert_eq!(menu.classes.len(), 1);
}

#[test]
fn window_load_shows_home_only() {
    let mut dom = login_page();
    let ctl = PanelController::default();
    let table = BindingTable::resolve(ctl.config(), &dom);
    for id in ["home", "about", "contact"] {
        assert_eq!(dom.by_id(id).unwrap().display, None, "{} starts unstyled", id);
    }

    ctl.dispatch(&mut dom, &table, &Trigger::ContentLoaded);
    let ran = ctl.dispatch(&mut dom, &table, &Trigger::WindowLoad);
    assert_eq!(ran, 1);
    assert_eq!(dom.by_id("home").unwrap().display.as_deref(), Some("block"));
    assert_eq!(dom.by_id("about").unwrap().display.as_deref(), Some("none"));
    assert_eq!(dom.by_id("contact").unwrap().display.as_deref(), Some("none"));
}

#[test]
fn missing_menu_is_reported_not_fatal() {
    let mut dom = MemoryDom::new();
    dom.push(MemoryElement::new().with_id("home").with_class("section"));
    let ctl = PanelController::default();

    assert_eq!(ctl.toggle_menu(&mut dom), Err(PanelError::missing("menu")));
    assert!(!ctl.perform(&mut dom, &Action::ToggleMenu));
    assert_eq!(dom.by_id("home").unwrap().display, None);
}

#[test]
fn unknown_section_changes_nothing() {
    let mut dom = login_page();
    let ctl = PanelController::default();
    ctl.show_section(&mut dom, "about").unwrap();

    let err = ctl.show_section(&mut dom, "pricing").unwrap_err();
    assert_eq!(err, PanelError::missing("pricing"));
    assert_eq!(err.to_string(), "no element with id `pricing`");
    assert_eq!(visible_sections(&dom), vec!["about".to_string()]);
}

#[test]
fn missing_home_on_load_does_not_hide_sections() {
    let mut dom = MemoryDom::new();
    dom.push(MemoryElement::new().with_id("about").with_class("section").with_display("block"));
    let ctl = PanelController::default();
    let table = BindingTable::resolve(ctl.config(), &dom);

    assert_eq!(ctl.dispatch(&mut dom, &table, &Trigger::WindowLoad), 0);
    assert_eq!(dom.by_id("about").unwrap().display.as_deref(), Some("block"));
}

#[test]
fn plan_is_pure() {
    let dom = login_page();
    let ctl = PanelController::default();
    let plan = ctl.plan(&dom, &Action::ShowSection("contact".into())).unwrap();
    assert_eq!(plan.len(), 4, "three hides and one show");
    assert!(matches!(
        plan.last(),
        Some(Mutation::SetDisplay { value, .. }) if value == "block"
    ));
    assert_eq!(dom.by_id("contact").unwrap().display, None, "planning must not mutate");
}

#[test]
fn section_without_marker_is_still_shown() {
    let mut dom = login_page();
    dom.push_id("promo");
    let ctl = PanelController::default();
    ctl.show_section(&mut dom, "promo").unwrap();
    assert_eq!(dom.by_id("promo").unwrap().display.as_deref(), Some("block"));
    assert!(visible_sections(&dom).is_empty());
    assert_eq!(ctl.current_section(&dom), None);
}
