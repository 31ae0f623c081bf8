//! Light/dark theme selection and persistence.
//!
//! Reads the stored preference under the `theme` key and applies a
//! `data-theme` attribute to the `<html>` element. Toggle writes back to the
//! store and updates that attribute.
//!
//! TRADE-OFFS
//! ==========
//! Attribute updates are browser-only; SSR and test builds skip them and rely
//! on `UiState::theme` as the source of truth.

use super::storage::KeyValueStore;

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Storage key holding `"light"` or `"dark"`.
pub const STORAGE_KEY: &str = "theme";

/// Document color theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value stored in `localStorage` and written to `data-theme`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything other than the two known names is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The opposite theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Bootstrap icon class for the toggle button. The icon shows the theme
    /// a click switches to.
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "bi-moon-fill",
            Self::Dark => "bi-sun-fill",
        }
    }

    /// Foreground color for chart titles and tick labels.
    pub fn text_color(self) -> &'static str {
        match self {
            Self::Light => "#212529",
            Self::Dark => "#e6edf3",
        }
    }

    /// Color for chart grid lines.
    pub fn grid_color(self) -> &'static str {
        match self {
            Self::Light => "#dee2e6",
            Self::Dark => "#30363d",
        }
    }
}

/// Read the stored preference, defaulting to [`Theme::Light`].
pub fn read_preference(store: &impl KeyValueStore) -> Theme {
    store
        .get(STORAGE_KEY)
        .and_then(|raw| Theme::parse(&raw))
        .unwrap_or_default()
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("data-theme", theme.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Flip `current`, apply it to the document, and persist it.
pub fn toggle(current: Theme, store: &mut impl KeyValueStore) -> Theme {
    let next = current.toggled();
    apply(next);
    store.set(STORAGE_KEY, next.as_str());
    next
}
