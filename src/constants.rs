// Host event and global names used by the web front-end.

pub const EVENT_CONTENT_LOADED: &str = "DOMContentLoaded";
pub const EVENT_LOAD: &str = "load";
pub const EVENT_CLICK: &str = "click";

// Functions installed on `window` for inline page handlers
pub const GLOBAL_SHOW_SECTION: &str = "showSection";
pub const GLOBAL_TOGGLE_MENU: &str = "toggleMenu";
