use serde::{Deserialize, Serialize};

/// Flat view of every tunable setting.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub navbar_id: String,
    pub menu_toggle_id: String,
    pub nav_links_id: String,
    pub section_selector: String,
    pub animated_selector: String,
    pub anchor_selector: String,
    pub scrolled_class: String,
    pub active_class: String,
    pub visible_class: String,
    pub menu_open_class: String,
    pub resize_debounce_ms: u32,
    pub scroll_log_throttle_ms: u32,
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            navbar_id: crate::config::defaults::default_navbar_id(),
            menu_toggle_id: crate::config::defaults::default_menu_toggle_id(),
            nav_links_id: crate::config::defaults::default_nav_links_id(),
            section_selector: crate::config::defaults::default_section_selector(),
            animated_selector: crate::config::defaults::default_animated_selector(),
            anchor_selector: crate::config::defaults::default_anchor_selector(),
            scrolled_class: crate::config::defaults::default_scrolled_class(),
            active_class: crate::config::defaults::default_active_class(),
            visible_class: crate::config::defaults::default_visible_class(),
            menu_open_class: crate::config::defaults::default_menu_open_class(),
            resize_debounce_ms: crate::config::defaults::default_resize_debounce_ms(),
            scroll_log_throttle_ms: crate::config::defaults::default_scroll_log_throttle_ms(),
            log_level: crate::config::defaults::default_log_level(),
        }
    }
}

/// Logging verbosity.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
