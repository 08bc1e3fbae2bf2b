//! Type/delete phrase cycle for the hero headline.
//!
//! The cycle reveals a phrase one character per tick, holds, deletes it one
//! character per (faster) tick, then moves to the next phrase, wrapping
//! forever. Each [`PhraseCycle::step`] yields the text to show and how long
//! to wait before the next step; the browser binding just sleeps and repeats.
//!
//! Lengths are counted in `char`s so multi-byte phrases never split.

use crate::config::TypingCadence;

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

/// One rendered step of the cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub text: String,
    pub delay_ms: u32,
}

#[derive(Clone, Debug)]
pub struct PhraseCycle {
    phrases: Vec<Vec<char>>,
    cadence: TypingCadence,
    index: usize,
    shown: usize,
    deleting: bool,
}

impl PhraseCycle {
    /// `None` when there is nothing to cycle through: no phrases, or only
    /// empty ones.
    #[must_use]
    pub fn new(phrases: &[String], cadence: TypingCadence) -> Option<Self> {
        if phrases.iter().all(String::is_empty) {
            return None;
        }
        let phrases = phrases.iter().map(|p| p.chars().collect()).collect();
        Some(Self { phrases, cadence, index: 0, shown: 0, deleting: false })
    }

    #[must_use]
    pub fn phrase_index(&self) -> usize {
        self.index
    }

    /// Characters of the current phrase currently shown.
    #[must_use]
    pub fn shown(&self) -> usize {
        self.shown
    }

    #[must_use]
    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Advance one character and report what to display.
    pub fn step(&mut self) -> Frame {
        let len = self.phrases[self.index].len();
        if len == 0 {
            self.advance_phrase();
            return self.frame(self.cadence.type_ms);
        }

        if self.deleting {
            self.shown -= 1;
            let text = self.text();
            if self.shown == 0 {
                self.advance_phrase();
                return Frame { text, delay_ms: self.cadence.type_ms };
            }
            return Frame { text, delay_ms: self.cadence.delete_ms };
        }

        self.shown += 1;
        if self.shown == len {
            self.deleting = true;
            return self.frame(self.cadence.hold_ms);
        }
        self.frame(self.cadence.type_ms)
    }

    fn advance_phrase(&mut self) {
        self.deleting = false;
        self.shown = 0;
        self.index = (self.index + 1) % self.phrases.len();
    }

    fn text(&self) -> String {
        self.phrases[self.index][..self.shown].iter().collect()
    }

    fn frame(&self, delay_ms: u32) -> Frame {
        Frame { text: self.text(), delay_ms }
    }
}
