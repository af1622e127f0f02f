use super::update::ScrollSnapshot;

/// Everything the page reacts to, already reduced to plain data.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Initialize,
    /// The frame scheduler fired; geometry should be measured now.
    FrameRendered,
    ScrollMeasured(ScrollSnapshot),
    MenuTogglePressed,
    NavLinkSelected,
    DocumentClicked {
        inside_menu: bool,
        inside_toggle: bool,
    },
    AnchorClicked {
        href: String,
    },
    /// Indices of animated elements that just crossed the visibility threshold.
    ElementsEntered(Vec<usize>),
    RevealUnavailable,
}
