//! Appearance preference. Stored alongside tasks but carries no logic
//! beyond its storage representation.

use std::fmt;

/// Dark/light appearance preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    /// Light appearance.
    #[default]
    Light,
    /// Dark appearance.
    Dark,
}

impl Theme {
    /// Parse the stored value. Anything other than `"dark"` reads as light,
    /// matching how the preference has always been interpreted.
    #[must_use]
    pub fn from_stored(value: &str) -> Self {
        if value == "dark" {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// The stored representation, `"dark"` or `"light"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_roundtrip() {
        assert_eq!(Theme::from_stored(Theme::Dark.as_str()), Theme::Dark);
        assert_eq!(Theme::from_stored(Theme::Light.as_str()), Theme::Light);
    }

    #[test]
    fn unknown_values_read_as_light() {
        assert_eq!(Theme::from_stored(""), Theme::Light);
        assert_eq!(Theme::from_stored("DARK"), Theme::Light);
        assert_eq!(Theme::from_stored("solarized"), Theme::Light);
    }

    #[test]
    fn toggled_flips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }
}
