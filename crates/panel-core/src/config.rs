use crate::constants::*;
use crate::dom::Dom;
use crate::error::{PanelError, PanelResult};

/// Element ids and class names the controller expects in the page markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageConfig {
    pub register_id: String,
    pub login_id: String,
    pub container_id: String,
    pub menu_id: String,
    pub section_class: String,
    pub flip_class: String,
    pub menu_shown_class: String,
    pub default_section: String,
    pub section_link_attr: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            register_id: REGISTER_ID.to_string(),
            login_id: LOGIN_ID.to_string(),
            container_id: CONTAINER_ID.to_string(),
            menu_id: MENU_ID.to_string(),
            section_class: SECTION_CLASS.to_string(),
            flip_class: FLIP_CLASS.to_string(),
            menu_shown_class: MENU_SHOWN_CLASS.to_string(),
            default_section: DEFAULT_SECTION.to_string(),
            section_link_attr: SECTION_LINK_ATTR.to_string(),
        }
    }
}

impl PageConfig {
    /// Defaults, overridden by `data-*` attributes on the document root.
    pub fn from_dom<D: Dom>(dom: &D) -> PanelResult<Self> {
        Self::default().with_overrides(|name| dom.root_attribute(name))
    }

    /// Apply overrides from `lookup`, keyed by root attribute name, then validate.
    /// Blank values count as unset.
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> PanelResult<Self> {
        let overrides: [(&str, &mut String); 4] = [
            (ATTR_DEFAULT_SECTION, &mut self.default_section),
            (ATTR_FLIP_CLASS, &mut self.flip_class),
            (ATTR_MENU_CLASS, &mut self.menu_shown_class),
            (ATTR_SECTION_CLASS, &mut self.section_class),
        ];
        for (attr, slot) in overrides {
            if let Some(v) = lookup(attr) {
                let v = v.trim();
                if !v.is_empty() {
                    log::debug!("[config] {} = {}", attr, v);
                    *slot = v.to_string();
                }
            }
        }
        self.validate()?;
        Ok(self)
    }

    /// Every field must be a single non-empty token: the browser rejects class
    /// names containing whitespace, and ids containing it never match.
    pub fn validate(&self) -> PanelResult<()> {
        let fields: [(&'static str, &str); 9] = [
            ("register_id", &self.register_id),
            ("login_id", &self.login_id),
            ("container_id", &self.container_id),
            ("menu_id", &self.menu_id),
            ("section_class", &self.section_class),
            ("flip_class", &self.flip_class),
            ("menu_shown_class", &self.menu_shown_class),
            ("default_section", &self.default_section),
            ("section_link_attr", &self.section_link_attr),
        ];
        match fields.iter().find(|(_, v)| v.is_empty() || v.contains(char::is_whitespace)) {
            Some((field, _)) => Err(PanelError::InvalidConfig { field: *field }),
            None => Ok(()),
        }
    }
}
