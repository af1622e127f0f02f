use super::super::state::{App, MenuState};
use super::Effect;
use crate::dom::{self, ClassTarget, Landmark, PageDom};
use anyhow::Result;
use tracing::debug;

/// Element id an in-page `href` points at; `None` for a bare or empty `#`.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Window offset that puts an element's top just under the navbar.
pub fn anchor_scroll_top(viewport_top: f64, page_offset: f64, navbar_height: f64) -> f64 {
    viewport_top + page_offset - navbar_height
}

pub(super) fn scroll_to_anchor(page: &impl PageDom, target_id: &str, smooth: bool) -> Result<()> {
    let Some(viewport_top) = page.element_viewport_top(target_id) else {
        debug!(target_id, "Anchor target not found; ignoring click");
        return Ok(());
    };
    let top = anchor_scroll_top(
        viewport_top,
        page.scroll_offset(),
        page.navbar_height().unwrap_or(0.0),
    );
    debug!(target_id, top, smooth, "Scrolling to anchor");
    page.scroll_window_to(top, smooth)
}

impl App {
    pub(super) fn handle_menu_toggle_pressed(&mut self, effects: &mut Vec<Effect>) {
        self.transition_menu(self.menu.toggled(), effects);
    }

    pub(super) fn handle_nav_link_selected(&mut self, effects: &mut Vec<Effect>) {
        self.transition_menu(MenuState::Closed, effects);
    }

    pub(super) fn handle_document_clicked(
        &mut self,
        inside_menu: bool,
        inside_toggle: bool,
        effects: &mut Vec<Effect>,
    ) {
        if !inside_menu && !inside_toggle {
            self.transition_menu(MenuState::Closed, effects);
        }
    }

    pub(super) fn handle_anchor_clicked(&mut self, href: &str, effects: &mut Vec<Effect>) {
        match fragment_target(href) {
            Some(target_id) => effects.push(Effect::ScrollToAnchor {
                target_id: target_id.to_string(),
                smooth: !self.reduced_motion,
            }),
            None => debug!(href, "Anchor without a fragment target"),
        }
    }

    pub(super) fn apply_menu_open(&self, page: &impl PageDom, open: bool) -> Result<usize> {
        let mutations = dom::toggle_class(
            page,
            ClassTarget::Landmark(Landmark::NavLinks),
            &self.config.menu_open_class,
            open,
        )?;
        page.set_attribute(
            Landmark::MenuToggle,
            "aria-expanded",
            if open { "true" } else { "false" },
        )?;
        Ok(usize::from(mutations))
    }

    fn transition_menu(&mut self, next: MenuState, effects: &mut Vec<Effect>) {
        if next == self.menu {
            return;
        }
        debug!(from = ?self.menu, to = ?next, "Mobile menu transition");
        self.menu = next;
        effects.push(Effect::SetMenuOpen(next.is_open()));
    }
}
