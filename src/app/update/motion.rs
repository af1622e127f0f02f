use super::super::state::App;
use super::Effect;
use crate::dom::{self, ClassTarget, PageDom};
use anyhow::Result;
use tracing::{debug, info, warn};

/// Indices to reveal from a batch of visibility entries.
///
/// Each entry is the observed element's index (if it is one we track) and
/// whether it is currently intersecting. Leaving the viewport never hides an
/// element again, so non-intersecting entries are dropped.
pub fn entered_indices(entries: impl IntoIterator<Item = (Option<usize>, bool)>) -> Vec<usize> {
    let mut indices: Vec<usize> = entries
        .into_iter()
        .filter_map(|(idx, intersecting)| idx.filter(|_| intersecting))
        .collect();
    indices.sort_unstable();
    indices.dedup();
    indices
}

pub(super) fn reveal(
    page: &impl PageDom,
    class: &str,
    indices: impl IntoIterator<Item = usize>,
) -> Result<usize> {
    let mut mutations = 0;
    for idx in indices {
        if dom::toggle_class(page, ClassTarget::Animated(idx), class, true)? {
            mutations += 1;
        }
    }
    Ok(mutations)
}

impl App {
    pub(super) fn handle_elements_entered(&mut self, indices: Vec<usize>, effects: &mut Vec<Effect>) {
        if indices.is_empty() {
            return;
        }
        debug!(count = indices.len(), "Elements entered viewport");
        effects.push(Effect::Reveal(indices));
    }

    pub(super) fn handle_reveal_unavailable(&mut self, effects: &mut Vec<Effect>) {
        warn!("Viewport observer unavailable; revealing all animated elements");
        effects.push(Effect::RevealAll);
    }

    pub(super) fn push_reduced_motion_effects(&self, effects: &mut Vec<Effect>) {
        info!("Reduced motion preferred; disabling scroll animations");
        effects.push(Effect::DisableAnimations);
        effects.push(Effect::RevealAll);
    }
}
