use super::super::super::messages::Message;
use super::super::super::state::{ANIMATION_DURATION_PROPERTY, App};
use super::super::Effect;
use super::super::motion::reveal;
use super::super::navigation::scroll_to_anchor;
use super::super::scroll::ScrollSnapshot;
use crate::dom::{self, ClassTarget, Landmark, PageDom};
use tracing::{trace, warn};

impl App {
    /// Reduce `message` and apply the resulting effects to `page`.
    pub fn dispatch(&mut self, page: &impl PageDom, message: Message) {
        for effect in self.reduce(message) {
            self.run_effect(page, effect);
        }
    }

    pub(super) fn run_effect(&mut self, page: &impl PageDom, effect: Effect) {
        let label = effect.label();
        let result = match effect {
            Effect::MeasureScroll => {
                let snapshot = ScrollSnapshot::measure(page);
                self.dispatch(page, Message::ScrollMeasured(snapshot));
                Ok(0)
            }
            Effect::SetNavbarScrolled(scrolled) => dom::toggle_class(
                page,
                ClassTarget::Landmark(Landmark::Navbar),
                &self.config.scrolled_class,
                scrolled,
            )
            .map(usize::from),
            Effect::HighlightSection(active) => {
                dom::reconcile_nav_links(page, &self.config.active_class, active.as_deref())
            }
            Effect::SetMenuOpen(open) => self.apply_menu_open(page, open),
            Effect::ScrollToAnchor { target_id, smooth } => {
                scroll_to_anchor(page, &target_id, smooth).map(|()| 0)
            }
            Effect::Reveal(indices) => reveal(page, &self.config.visible_class, indices),
            Effect::RevealAll => {
                let count = page.animated_count();
                reveal(page, &self.config.visible_class, 0..count)
            }
            Effect::DisableAnimations => page
                .set_root_style_property(ANIMATION_DURATION_PROPERTY, "0s")
                .map(|()| 0),
        };

        match result {
            Ok(mutations) => trace!(effect = label, mutations, "Applied effect"),
            Err(err) => warn!(effect = label, "Skipped effect: {err:#}"),
        }
    }
}
