// Default markup contract for the login/register page.

// Element ids
pub const REGISTER_ID: &str = "register";
pub const LOGIN_ID: &str = "login";
pub const CONTAINER_ID: &str = "container";
pub const MENU_ID: &str = "menu";

// Classes
pub const SECTION_CLASS: &str = "section";
pub const FLIP_CLASS: &str = "right-panel-active"; // container shows the sign-up side
pub const MENU_SHOWN_CLASS: &str = "show";

// Section shown once the window has loaded
pub const DEFAULT_SECTION: &str = "home";

// Attribute naming the section a nav link opens
pub const SECTION_LINK_ATTR: &str = "data-section";

// Inline display values
pub const DISPLAY_VISIBLE: &str = "block";
pub const DISPLAY_HIDDEN: &str = "none";

// Overrides read from the document root element
pub const ATTR_DEFAULT_SECTION: &str = "data-default-section";
pub const ATTR_FLIP_CLASS: &str = "data-flip-class";
pub const ATTR_MENU_CLASS: &str = "data-menu-class";
pub const ATTR_SECTION_CLASS: &str = "data-section-class";
