//! Page controller: turns [`Action`]s into DOM mutations.
//!
//! Planning is pure: [`PanelController::plan`] reads the document and returns
//! the mutations an action would make, or [`PanelError::MissingElement`] when a
//! target is absent. A failed plan applies nothing. Event-facing entry points
//! ([`PanelController::perform`], [`PanelController::dispatch`]) log failures
//! and carry on; nothing here ever panics on missing markup.

use crate::bindings::{Action, BindingTable, Trigger};
use crate::config::PageConfig;
use crate::constants::{DISPLAY_HIDDEN, DISPLAY_VISIBLE};
use crate::dom::{apply, Dom, Mutation};
use crate::error::{PanelError, PanelResult};

#[derive(Clone, Debug, Default)]
pub struct PanelController {
    config: PageConfig,
}

impl PanelController {
    pub fn new(config: PageConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    fn require<D: Dom>(dom: &D, id: &str) -> PanelResult<D::Node> {
        dom.element_by_id(id).ok_or_else(|| PanelError::missing(id))
    }

    pub fn plan<D: Dom>(&self, dom: &D, action: &Action) -> PanelResult<Vec<Mutation<D::Node>>> {
        let cfg = &self.config;
        match action {
            Action::ActivateRightPanel => {
                let node = Self::require(dom, &cfg.container_id)?;
                Ok(vec![Mutation::AddClass {
                    node,
                    class: cfg.flip_class.clone(),
                }])
            }
            Action::DeactivateRightPanel => {
                let node = Self::require(dom, &cfg.container_id)?;
                Ok(vec![Mutation::RemoveClass {
                    node,
                    class: cfg.flip_class.clone(),
                }])
            }
            Action::ShowSection(id) => {
                // Resolve the target first so an unknown id leaves every section untouched.
                let target = Self::require(dom, id)?;
                let mut out: Vec<Mutation<D::Node>> = dom
                    .elements_by_class(&cfg.section_class)
                    .into_iter()
                    .map(|node| Mutation::SetDisplay {
                        node,
                        value: DISPLAY_HIDDEN.to_string(),
                    })
                    .collect();
                out.push(Mutation::SetDisplay {
                    node: target,
                    value: DISPLAY_VISIBLE.to_string(),
                });
                Ok(out)
            }
            Action::ToggleMenu => {
                let node = Self::require(dom, &cfg.menu_id)?;
                Ok(vec![Mutation::ToggleClass {
                    node,
                    class: cfg.menu_shown_class.clone(),
                }])
            }
        }
    }

    /// Plan and apply `action`.
    pub fn run<D: Dom>(&self, dom: &mut D, action: &Action) -> PanelResult<()> {
        let mutations = self.plan(dom, action)?;
        apply(dom, &mutations);
        Ok(())
    }

    /// Like [`Self::run`], but logs a failure instead of returning it.
    pub fn perform<D: Dom>(&self, dom: &mut D, action: &Action) -> bool {
        match self.run(dom, action) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("[panel] {:?} skipped: {}", action, e);
                false
            }
        }
    }

    /// Run every action bound to `trigger`; returns how many succeeded.
    pub fn dispatch<D: Dom>(&self, dom: &mut D, table: &BindingTable, trigger: &Trigger) -> usize {
        table
            .actions_for(trigger)
            .filter(|action| self.perform(dom, action))
            .count()
    }

    pub fn activate_right_panel<D: Dom>(&self, dom: &mut D) -> PanelResult<()> {
        self.run(dom, &Action::ActivateRightPanel)
    }

    pub fn deactivate_right_panel<D: Dom>(&self, dom: &mut D) -> PanelResult<()> {
        self.run(dom, &Action::DeactivateRightPanel)
    }

    /// Hide every section, then show the one with id `id`.
    pub fn show_section<D: Dom>(&self, dom: &mut D, id: &str) -> PanelResult<()> {
        self.run(dom, &Action::ShowSection(id.to_string()))
    }

    /// Flip the menu's shown class; returns whether the menu is shown afterwards.
    pub fn toggle_menu<D: Dom>(&self, dom: &mut D) -> PanelResult<bool> {
        self.run(dom, &Action::ToggleMenu)?;
        let menu = Self::require(dom, &self.config.menu_id)?;
        Ok(dom.has_class(&menu, &self.config.menu_shown_class))
    }

    pub fn is_right_panel_active<D: Dom>(&self, dom: &D) -> bool {
        dom.element_by_id(&self.config.container_id)
            .is_some_and(|c| dom.has_class(&c, &self.config.flip_class))
    }

    /// Id of the visible section, if exactly one section is displayed.
    pub fn current_section<D: Dom>(&self, dom: &D) -> Option<String> {
        let mut visible = dom
            .elements_by_class(&self.config.section_class)
            .into_iter()
            .filter(|n| dom.display(n).as_deref() == Some(DISPLAY_VISIBLE));
        match (visible.next(), visible.next()) {
            (Some(only), None) => dom.node_id(&only),
            _ => None,
        }
    }
}
