//! Light/dark preference and its single read/write accessor.
//!
//! The preference is the only state the page persists. Every reader and
//! writer goes through [`ThemeStore`], which keeps the in-memory value and the
//! backing store in lockstep: after [`ThemeStore::toggle`] returns, the
//! returned theme is what was written.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Storage key holding `"light"` or `"dark"`.
pub const STORAGE_KEY: &str = "theme";

/// Class added to `<body>` in light mode.
pub const LIGHT_CLASS: &str = "light";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    /// Also the result of a missing or unrecognized stored value.
    #[default]
    Dark,
}

impl Theme {
    /// Interpret a stored value. Anything other than `"light"` means dark.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_light(self) -> bool {
        self == Self::Light
    }

    /// Glyph shown on the toggle control.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☀",
            Self::Dark => "☾",
        }
    }

    /// Value for the toggle's `aria-pressed` attribute.
    #[must_use]
    pub fn aria_pressed(self) -> &'static str {
        if self.is_light() { "true" } else { "false" }
    }
}

/// Key-value backend for the preference (browser `localStorage` in production).
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
}

/// Owner of the current theme and its persisted copy.
#[derive(Debug)]
pub struct ThemeStore<S> {
    store: S,
    current: Theme,
}

impl<S: PreferenceStore> ThemeStore<S> {
    /// Read the persisted preference once.
    pub fn load(store: S) -> Self {
        let current = Theme::from_stored(store.load(STORAGE_KEY).as_deref());
        Self { store, current }
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip the theme and write it through.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        self.store.save(STORAGE_KEY, self.current.as_str());
        self.current
    }
}
