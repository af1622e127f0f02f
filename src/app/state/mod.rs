mod constants;
mod menu;

pub use constants::{
    ANIMATION_DURATION_PROPERTY, REDUCED_MOTION_QUERY, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD,
    SCROLLED_THRESHOLD, SECTION_LOOKAHEAD,
};
pub use menu::MenuState;

use crate::config::AppConfig;
use crate::timing::Throttle;

/// Context shared by every handler, built once when the page is mounted.
///
/// Geometry is never cached here; it is measured from the page on each
/// evaluation.
pub struct App {
    pub(in crate::app) config: AppConfig,
    pub(in crate::app) menu: MenuState,
    pub(in crate::app) reduced_motion: bool,
    pub(in crate::app) scroll_log: Throttle,
}

impl App {
    pub fn new(config: AppConfig, reduced_motion: bool) -> Self {
        let scroll_log = Throttle::new(config.scroll_log_throttle_ms);
        Self {
            config,
            menu: MenuState::default(),
            reduced_motion,
            scroll_log,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    pub fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }
}
