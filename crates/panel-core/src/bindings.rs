//! Explicit {trigger -> action} table resolved once the markup is ready.

use crate::config::PageConfig;
use crate::dom::Dom;

/// Host events the page controller reacts to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// Markup parsed (`DOMContentLoaded`).
    ContentLoaded,
    /// Page and sub-resources loaded (`window.onload`).
    WindowLoad,
    /// Click on the element with this id.
    Click(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Add the flip class to the container (sign-up side).
    ActivateRightPanel,
    /// Remove the flip class from the container (sign-in side).
    DeactivateRightPanel,
    ShowSection(String),
    ToggleMenu,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    pub trigger: Trigger,
    pub action: Action,
}

impl Binding {
    pub fn new(trigger: Trigger, action: Action) -> Self {
        Self { trigger, action }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BindingTable {
    bindings: Vec<Binding>,
}

impl BindingTable {
    /// Build the table for the current markup.
    ///
    /// The panel flip pair is only bound when the register control, the login
    /// control and the container all exist; otherwise it is skipped silently.
    /// Every element carrying the section link attribute and an id opens the
    /// section named by that attribute.
    pub fn resolve<D: Dom>(config: &PageConfig, dom: &D) -> Self {
        let mut table = Self::default();
        table.push(Binding::new(
            Trigger::WindowLoad,
            Action::ShowSection(config.default_section.clone()),
        ));

        let flip_ready = [&config.register_id, &config.login_id, &config.container_id]
            .iter()
            .all(|id| dom.element_by_id(id).is_some());
        if flip_ready {
            table.push(Binding::new(
                Trigger::Click(config.register_id.clone()),
                Action::ActivateRightPanel,
            ));
            table.push(Binding::new(
                Trigger::Click(config.login_id.clone()),
                Action::DeactivateRightPanel,
            ));
        } else {
            log::debug!("[bindings] panel flip controls incomplete; not bound");
        }

        for link in dom.elements_with_attribute(&config.section_link_attr) {
            let target = dom
                .attribute(&link, &config.section_link_attr)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty());
            match (dom.node_id(&link), target) {
                (Some(id), Some(target)) => {
                    table.push(Binding::new(Trigger::Click(id), Action::ShowSection(target)))
                }
                (None, Some(target)) => {
                    log::debug!("[bindings] link to `{}` has no id; not bound", target)
                }
                (_, None) => {}
            }
        }
        table
    }

    pub fn push(&mut self, binding: Binding) {
        self.bindings.push(binding);
    }

    /// Actions bound to `trigger`, in table order.
    pub fn actions_for<'a>(
        &'a self,
        trigger: &'a Trigger,
    ) -> impl Iterator<Item = &'a Action> + 'a {
        self.bindings
            .iter()
            .filter(move |b| &b.trigger == trigger)
            .map(|b| &b.action)
    }

    /// Ids of every clicked element, deduplicated, in table order.
    pub fn click_targets(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for b in &self.bindings {
            if let Trigger::Click(id) = &b.trigger {
                if !out.contains(&id.as_str()) {
                    out.push(id);
                }
            }
        }
        out
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
