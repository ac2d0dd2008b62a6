//! Theme preference state.
//!
//! A single persisted value: `"light"` selects the light theme, anything else
//! (including an absent key) means dark.

pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    /// Interpret a stored preference; absent or unrecognized means dark.
    pub fn from_saved(value: Option<&str>) -> Self {
        value.and_then(Theme::from_str).unwrap_or_default()
    }

    #[inline]
    pub fn is_light(self) -> bool {
        self == Theme::Light
    }
}
