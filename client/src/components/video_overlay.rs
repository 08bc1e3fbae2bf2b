//! About-section video and its play affordance.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Document, Element, HtmlVideoElement};

use crate::error::UiError;
use crate::state::video::{PlayOverlay, PlaybackEvent, VideoCommand};
use crate::util::dom;
use crate::util::wiring::Wiring;

#[derive(Clone)]
pub struct VideoHandle {
    video: HtmlVideoElement,
}

impl VideoHandle {
    /// Play when paused, pause otherwise.
    pub fn toggle_playback(&self) {
        match VideoCommand::toggle(self.video.paused()) {
            VideoCommand::Play => play(&self.video),
            VideoCommand::Pause => {
                if let Err(err) = self.video.pause() {
                    log::warn!("video pause failed: {err:?}");
                }
            }
        }
    }
}

fn play(video: &HtmlVideoElement) {
    match video.play() {
        // Autoplay policy rejections land here.
        Ok(promise) => spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                log::debug!("video play rejected: {err:?}");
            }
        }),
        Err(err) => log::warn!("video play failed: {err:?}"),
    }
}

/// `#aboutVideo` is required; `#videoPlayOverlay` is optional so the `v`
/// shortcut still works without the affordance.
pub fn wire(doc: &Document) -> Result<(VideoHandle, Wiring), UiError> {
    let video: HtmlVideoElement = dom::by_id(doc, "aboutVideo")?;
    let handle = VideoHandle { video };
    let mut wiring = Wiring::new("video");

    let Ok(overlay) = dom::by_id::<Element>(doc, "videoPlayOverlay") else {
        log::debug!("video: no play overlay");
        return Ok((handle, wiring));
    };
    let state = Rc::new(RefCell::new(PlayOverlay::default()));

    let (shown, clicked, video) = (overlay.clone(), Rc::clone(&state), handle.video.clone());
    wiring.on(&overlay, "click", move |_| {
        play(&video);
        let hidden = clicked.borrow_mut().on(PlaybackEvent::OverlayClicked);
        dom::set_attr(&shown, "aria-hidden", hidden);
    });
    for (event, playback) in [("play", PlaybackEvent::Played), ("pause", PlaybackEvent::Paused)] {
        let (shown, state) = (overlay.clone(), Rc::clone(&state));
        wiring.on(&handle.video, event, move |_| {
            let hidden = state.borrow_mut().on(playback);
            dom::set_attr(&shown, "aria-hidden", hidden);
        });
    }
    Ok((handle, wiring))
}
