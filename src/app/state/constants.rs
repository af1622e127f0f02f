/// Scroll offset past which the navbar takes its `scrolled` style.
pub const SCROLLED_THRESHOLD: f64 = 50.0;
/// Extra distance above a section at which its nav link already lights up.
pub const SECTION_LOOKAHEAD: f64 = 100.0;
/// Fraction of an animated element that must be visible to reveal it.
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
pub const ANIMATION_DURATION_PROPERTY: &str = "--animation-duration";
