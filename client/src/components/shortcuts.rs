//! Global keyboard shortcuts and Escape handling.
//!
//! Letter shortcuts are skipped while typing in a form field. Escape is a
//! separate listener and always applies.

use wasm_bindgen::JsCast;
use web_sys::{Document, Event, KeyboardEvent};

use super::nav_drawer::DrawerHandle;
use super::project_modal::ModalHandle;
use super::theme_toggle::ThemeHandle;
use super::video_overlay::VideoHandle;
use crate::state::detail::{CloseTrigger, OpenTrigger};
use crate::state::drawer::DrawerInput;
use crate::state::shortcuts::{ESCAPE, Shortcut, resolve};
use crate::util::dom;
use crate::util::wiring::Wiring;

/// Components the dispatcher can drive. Absent ones make their key a no-op.
#[derive(Clone, Default)]
pub struct Targets {
    pub theme: Option<ThemeHandle>,
    pub drawer: Option<DrawerHandle>,
    pub modal: Option<ModalHandle>,
    pub video: Option<VideoHandle>,
}

fn key_of(event: &Event) -> Option<String> {
    event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key)
}

pub fn wire(doc: &Document, targets: Targets) -> Wiring {
    let mut wiring = Wiring::new("shortcuts");

    let first_project = doc.clone();
    let keys = targets.clone();
    wiring.on(doc, "keydown", move |event| {
        let Some(key) = key_of(event) else {
            return;
        };
        let tag = dom::target_element(event).map(|el| el.tag_name());
        match resolve(&key, tag.as_deref()) {
            Some(Shortcut::ToggleTheme) => {
                if let Some(theme) = &keys.theme {
                    theme.toggle();
                }
            }
            Some(Shortcut::OpenFirstProject) => {
                if let (Some(modal), Ok(Some(card))) = (&keys.modal, first_project.query_selector(".project")) {
                    modal.open(&card, OpenTrigger::Shortcut);
                }
            }
            Some(Shortcut::ToggleVideo) => {
                if let Some(video) = &keys.video {
                    video.toggle_playback();
                }
            }
            Some(Shortcut::ToggleDrawer) => {
                if let Some(drawer) = &keys.drawer {
                    drawer.dispatch(DrawerInput::Shortcut);
                }
            }
            None => {}
        }
    });

    wiring.on(doc, "keydown", move |event| {
        if key_of(event).as_deref() != Some(ESCAPE) {
            return;
        }
        if let Some(drawer) = &targets.drawer {
            drawer.dispatch(DrawerInput::Escape);
        }
        if let Some(modal) = &targets.modal {
            modal.close(CloseTrigger::Escape);
        }
    });
    wiring
}
