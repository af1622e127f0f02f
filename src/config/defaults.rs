use super::models::LogLevel;

pub(crate) fn default_navbar_id() -> String {
    "navbar".to_string()
}

pub(crate) fn default_menu_toggle_id() -> String {
    "mobileMenuBtn".to_string()
}

pub(crate) fn default_nav_links_id() -> String {
    "navLinks".to_string()
}

pub(crate) fn default_section_selector() -> String {
    "section[id]".to_string()
}

pub(crate) fn default_animated_selector() -> String {
    ".animate-on-scroll".to_string()
}

pub(crate) fn default_anchor_selector() -> String {
    "a[href^=\"#\"]".to_string()
}

pub(crate) fn default_scrolled_class() -> String {
    "scrolled".to_string()
}

pub(crate) fn default_active_class() -> String {
    "active".to_string()
}

pub(crate) fn default_visible_class() -> String {
    "visible".to_string()
}

pub(crate) fn default_menu_open_class() -> String {
    "active".to_string()
}

pub(crate) fn default_resize_debounce_ms() -> u32 {
    100
}

pub(crate) fn default_scroll_log_throttle_ms() -> u32 {
    250
}

pub(crate) fn default_log_level() -> LogLevel {
    LogLevel::Info
}
