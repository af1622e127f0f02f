use super::defaults;
use super::models::{AppConfig, LogLevel};
use serde::{Deserialize, Serialize};

/// Sectioned form of [`AppConfig`], as written in the page's config block.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    dom: DomConfig,
    #[serde(default)]
    classes: ClassConfig,
    #[serde(default)]
    timing: TimingConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            navbar_id: tables.dom.navbar_id,
            menu_toggle_id: tables.dom.menu_toggle_id,
            nav_links_id: tables.dom.nav_links_id,
            section_selector: tables.dom.section_selector,
            animated_selector: tables.dom.animated_selector,
            anchor_selector: tables.dom.anchor_selector,
            scrolled_class: tables.classes.scrolled,
            active_class: tables.classes.active,
            visible_class: tables.classes.visible,
            menu_open_class: tables.classes.menu_open,
            resize_debounce_ms: tables.timing.resize_debounce_ms,
            scroll_log_throttle_ms: tables.timing.scroll_log_throttle_ms,
            log_level: tables.logging.log_level,
        }
    }
}

impl From<&AppConfig> for ConfigTables {
    fn from(config: &AppConfig) -> Self {
        ConfigTables {
            dom: DomConfig {
                navbar_id: config.navbar_id.clone(),
                menu_toggle_id: config.menu_toggle_id.clone(),
                nav_links_id: config.nav_links_id.clone(),
                section_selector: config.section_selector.clone(),
                animated_selector: config.animated_selector.clone(),
                anchor_selector: config.anchor_selector.clone(),
            },
            classes: ClassConfig {
                scrolled: config.scrolled_class.clone(),
                active: config.active_class.clone(),
                visible: config.visible_class.clone(),
                menu_open: config.menu_open_class.clone(),
            },
            timing: TimingConfig {
                resize_debounce_ms: config.resize_debounce_ms,
                scroll_log_throttle_ms: config.scroll_log_throttle_ms,
            },
            logging: LoggingConfig {
                log_level: config.log_level,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct DomConfig {
    #[serde(default = "defaults::default_navbar_id")]
    navbar_id: String,
    #[serde(default = "defaults::default_menu_toggle_id")]
    menu_toggle_id: String,
    #[serde(default = "defaults::default_nav_links_id")]
    nav_links_id: String,
    #[serde(default = "defaults::default_section_selector")]
    section_selector: String,
    #[serde(default = "defaults::default_animated_selector")]
    animated_selector: String,
    #[serde(default = "defaults::default_anchor_selector")]
    anchor_selector: String,
}

impl Default for DomConfig {
    fn default() -> Self {
        DomConfig {
            navbar_id: defaults::default_navbar_id(),
            menu_toggle_id: defaults::default_menu_toggle_id(),
            nav_links_id: defaults::default_nav_links_id(),
            section_selector: defaults::default_section_selector(),
            animated_selector: defaults::default_animated_selector(),
            anchor_selector: defaults::default_anchor_selector(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct ClassConfig {
    #[serde(default = "defaults::default_scrolled_class")]
    scrolled: String,
    #[serde(default = "defaults::default_active_class")]
    active: String,
    #[serde(default = "defaults::default_visible_class")]
    visible: String,
    #[serde(default = "defaults::default_menu_open_class")]
    menu_open: String,
}

impl Default for ClassConfig {
    fn default() -> Self {
        ClassConfig {
            scrolled: defaults::default_scrolled_class(),
            active: defaults::default_active_class(),
            visible: defaults::default_visible_class(),
            menu_open: defaults::default_menu_open_class(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct TimingConfig {
    #[serde(default = "defaults::default_resize_debounce_ms")]
    resize_debounce_ms: u32,
    #[serde(default = "defaults::default_scroll_log_throttle_ms")]
    scroll_log_throttle_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        TimingConfig {
            resize_debounce_ms: defaults::default_resize_debounce_ms(),
            scroll_log_throttle_ms: defaults::default_scroll_log_throttle_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}
