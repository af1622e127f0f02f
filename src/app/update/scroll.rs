use super::super::state::{App, SCROLLED_THRESHOLD, SECTION_LOOKAHEAD};
use super::Effect;
use crate::dom::{PageDom, SectionGeometry};
use tracing::debug;

/// Geometry read from the page in one pass, before any class is written.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollSnapshot {
    pub offset: f64,
    /// `None` when the page has no navbar.
    pub navbar_height: Option<f64>,
    pub sections: Vec<SectionGeometry>,
    pub taken_at_ms: f64,
}

impl ScrollSnapshot {
    pub fn measure(page: &impl PageDom) -> Self {
        Self {
            offset: sanitize_offset(page.scroll_offset()),
            navbar_height: page.navbar_height(),
            sections: page.sections(),
            taken_at_ms: page.now_ms(),
        }
    }
}

/// Whether the navbar should carry its `scrolled` style at `offset`.
pub fn navbar_scrolled(offset: f64) -> bool {
    offset > SCROLLED_THRESHOLD
}

/// Id of the section whose lookahead-adjusted range contains `offset`.
///
/// Each section's range starts `navbar_height + SECTION_LOOKAHEAD` above its
/// top and spans its height. Sections are checked in document order and the
/// last match wins when adjusted ranges overlap.
pub fn active_section(
    sections: &[SectionGeometry],
    offset: f64,
    navbar_height: f64,
) -> Option<&str> {
    sections
        .iter()
        .filter(|section| {
            let start = section.top - navbar_height - SECTION_LOOKAHEAD;
            offset >= start && offset < start + section.height
        })
        .last()
        .map(|section| section.id.as_str())
}

fn sanitize_offset(offset: f64) -> f64 {
    if offset.is_finite() {
        offset.max(0.0)
    } else {
        0.0
    }
}

impl App {
    pub(super) fn handle_scroll_measured(
        &mut self,
        snapshot: ScrollSnapshot,
        effects: &mut Vec<Effect>,
    ) {
        let scrolled = navbar_scrolled(snapshot.offset);
        let active = active_section(
            &snapshot.sections,
            snapshot.offset,
            snapshot.navbar_height.unwrap_or(0.0),
        )
        .map(str::to_string);

        if self.scroll_log.try_acquire(snapshot.taken_at_ms) {
            debug!(
                offset = snapshot.offset,
                scrolled,
                active = active.as_deref().unwrap_or(""),
                sections = snapshot.sections.len(),
                "Evaluated scroll state"
            );
        }

        if snapshot.navbar_height.is_some() {
            effects.push(Effect::SetNavbarScrolled(scrolled));
        }
        effects.push(Effect::HighlightSection(active));
    }
}
