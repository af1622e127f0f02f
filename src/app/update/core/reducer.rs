use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use tracing::debug;

impl App {
    pub fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::Initialize => self.handle_initialize(&mut effects),
            Message::FrameRendered => effects.push(Effect::MeasureScroll),
            Message::ScrollMeasured(snapshot) => {
                self.handle_scroll_measured(snapshot, &mut effects);
            }
            Message::MenuTogglePressed => self.handle_menu_toggle_pressed(&mut effects),
            Message::NavLinkSelected => self.handle_nav_link_selected(&mut effects),
            Message::DocumentClicked {
                inside_menu,
                inside_toggle,
            } => self.handle_document_clicked(inside_menu, inside_toggle, &mut effects),
            Message::AnchorClicked { href } => self.handle_anchor_clicked(&href, &mut effects),
            Message::ElementsEntered(indices) => {
                self.handle_elements_entered(indices, &mut effects);
            }
            Message::RevealUnavailable => self.handle_reveal_unavailable(&mut effects),
        }

        effects
    }

    fn handle_initialize(&mut self, effects: &mut Vec<Effect>) {
        debug!(reduced_motion = self.reduced_motion, "Initializing page state");
        effects.push(Effect::MeasureScroll);
        if self.reduced_motion {
            self.push_reduced_motion_effects(effects);
        }
    }
}
