mod messages;
mod state;
mod update;
#[cfg(target_arch = "wasm32")]
pub(crate) mod web;

pub use messages::Message;
pub use state::{
    ANIMATION_DURATION_PROPERTY, App, MenuState, REDUCED_MOTION_QUERY, REVEAL_ROOT_MARGIN,
    REVEAL_THRESHOLD, SCROLLED_THRESHOLD, SECTION_LOOKAHEAD,
};
pub use update::{
    Effect, ScrollSnapshot, active_section, anchor_scroll_top, entered_indices, fragment_target,
    navbar_scrolled,
};

/// Whether mounting has to wait for `DOMContentLoaded`, given `document.readyState`.
pub fn defers_mount(ready_state: &str) -> bool {
    ready_state == "loading"
}
