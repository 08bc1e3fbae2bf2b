//! Play affordance over the embedded video.
//!
//! The affordance mirrors playback: hidden while playing, shown while paused,
//! whatever caused the change.

#[cfg(test)]
#[path = "video_test.rs"]
mod video_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// The affordance itself was activated.
    OverlayClicked,
    Played,
    Paused,
}

/// What the `v` shortcut should do for the current playback state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VideoCommand {
    Play,
    Pause,
}

impl VideoCommand {
    #[must_use]
    pub fn toggle(paused: bool) -> Self {
        if paused { Self::Play } else { Self::Pause }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct PlayOverlay {
    visible: bool,
}

impl Default for PlayOverlay {
    fn default() -> Self {
        Self { visible: true }
    }
}

impl PlayOverlay {
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Apply `event` and return the affordance's `aria-hidden` value.
    pub fn on(&mut self, event: PlaybackEvent) -> &'static str {
        self.visible = matches!(event, PlaybackEvent::Paused);
        self.aria_hidden()
    }

    #[must_use]
    pub fn aria_hidden(&self) -> &'static str {
        if self.visible { "false" } else { "true" }
    }
}
