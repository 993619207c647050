use crate::constants::{EVENT_CLICK, EVENT_CONTENT_LOADED, EVENT_LOAD};
use panel_core::Trigger;

/// Where a listener for a trigger has to be attached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope<'a> {
    Document,
    Window,
    Element(&'a str),
}

#[inline]
pub fn listener_for(trigger: &Trigger) -> (Scope<'_>, &'static str) {
    match trigger {
        Trigger::ContentLoaded => (Scope::Document, EVENT_CONTENT_LOADED),
        Trigger::WindowLoad => (Scope::Window, EVENT_LOAD),
        Trigger::Click(id) => (Scope::Element(id), EVENT_CLICK),
    }
}

/// Document loading phase, mirroring `document.readyState`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Interactive,
    Complete,
}

impl LoadPhase {
    /// Map a `document.readyState` value; anything unrecognised counts as loading.
    pub fn from_ready_state(state: &str) -> Self {
        match state {
            "complete" => LoadPhase::Complete,
            "interactive" => LoadPhase::Interactive,
            _ => LoadPhase::Loading,
        }
    }

    pub fn content_loaded(self) -> bool {
        !matches!(self, LoadPhase::Loading)
    }

    pub fn window_loaded(self) -> bool {
        matches!(self, LoadPhase::Complete)
    }
}

/// Page lifecycle triggers that already fired before wiring started in `phase`.
/// They are replayed immediately instead of waiting for an event that never comes.
pub fn missed_triggers(phase: LoadPhase) -> Vec<Trigger> {
    let mut out = Vec::new();
    if phase.content_loaded() {
        out.push(Trigger::ContentLoaded);
    }
    if phase.window_loaded() {
        out.push(Trigger::WindowLoad);
    }
    out
}
