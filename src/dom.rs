//! The page as seen by the enhancements: geometry reads and class-list writes.
//!
//! [`PageDom`] is the only way the rest of the crate touches the document.
//! Lookups that can come back empty return `Option`, and every write against a
//! missing element is a no-op, so an absent navbar or menu simply disables the
//! feature it drives.

use anyhow::Result;

#[cfg(test)]
pub(crate) mod memory;
#[cfg(target_arch = "wasm32")]
pub mod web;

/// Elements looked up once by id at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Landmark {
    Navbar,
    MenuToggle,
    NavLinks,
}

/// Anything whose class list the reconciler may change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ClassTarget {
    Landmark(Landmark),
    /// Index into the links inside the nav-links container.
    NavLink(usize),
    /// Index into the elements flagged for scroll-triggered animation.
    Animated(usize),
}

/// Document-relative placement of one page section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionGeometry {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionGeometry {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }
}

pub trait PageDom {
    /// Vertical scroll offset of the window.
    fn scroll_offset(&self) -> f64;

    /// Rendered height of the navbar, if there is one.
    fn navbar_height(&self) -> Option<f64>;

    /// Live geometry of every section, in document order.
    fn sections(&self) -> Vec<SectionGeometry>;

    /// `href` attribute of each nav link, in document order.
    fn nav_link_hrefs(&self) -> Vec<Option<String>>;

    fn animated_count(&self) -> usize;

    /// `None` when the target element does not exist.
    fn has_class(&self, target: ClassTarget, class: &str) -> Option<bool>;

    fn set_class(&self, target: ClassTarget, class: &str, enabled: bool) -> Result<()>;

    fn set_attribute(&self, landmark: Landmark, name: &str, value: &str) -> Result<()>;

    /// Viewport-relative top of the element with this id.
    fn element_viewport_top(&self, id: &str) -> Option<f64>;

    fn scroll_window_to(&self, top: f64, smooth: bool) -> Result<()>;

    fn set_root_style_property(&self, name: &str, value: &str) -> Result<()>;

    fn now_ms(&self) -> f64;
}

/// Bring one class in line with `enabled`, writing only when it differs.
///
/// Returns whether the class list was mutated.
pub fn toggle_class(
    dom: &impl PageDom,
    target: ClassTarget,
    class: &str,
    enabled: bool,
) -> Result<bool> {
    match dom.has_class(target, class) {
        Some(current) if current != enabled => {
            dom.set_class(target, class, enabled)?;
            Ok(true)
        }
        _ => Ok(false),
    }
}

/// Mark exactly the nav link pointing at `#<active_id>`; clear every other one.
///
/// Returns the number of class-list mutations performed.
pub fn reconcile_nav_links(
    dom: &impl PageDom,
    class: &str,
    active_id: Option<&str>,
) -> Result<usize> {
    let wanted = active_id.map(|id| format!("#{id}"));
    let mut mutations = 0;
    for (idx, href) in dom.nav_link_hrefs().iter().enumerate() {
        let enabled = wanted.is_some() && href.as_deref() == wanted.as_deref();
        if toggle_class(dom, ClassTarget::NavLink(idx), class, enabled)? {
            mutations += 1;
        }
    }
    Ok(mutations)
}
