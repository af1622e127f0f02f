mod core;
mod motion;
mod navigation;
mod scroll;

pub use motion::entered_indices;
pub use navigation::{anchor_scroll_top, fragment_target};
pub use scroll::{ScrollSnapshot, active_section, navbar_scrolled};

/// Describes work that must be performed against the page, outside the
/// pure reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Read scroll offset and section geometry, then feed them back in.
    MeasureScroll,
    SetNavbarScrolled(bool),
    HighlightSection(Option<String>),
    SetMenuOpen(bool),
    ScrollToAnchor {
        target_id: String,
        smooth: bool,
    },
    Reveal(Vec<usize>),
    RevealAll,
    DisableAnimations,
}

impl Effect {
    fn label(&self) -> &'static str {
        match self {
            Effect::MeasureScroll => "measure-scroll",
            Effect::SetNavbarScrolled(_) => "set-navbar-scrolled",
            Effect::HighlightSection(_) => "highlight-section",
            Effect::SetMenuOpen(_) => "set-menu-open",
            Effect::ScrollToAnchor { .. } => "scroll-to-anchor",
            Effect::Reveal(_) => "reveal",
            Effect::RevealAll => "reveal-all",
            Effect::DisableAnimations => "disable-animations",
        }
    }
}
