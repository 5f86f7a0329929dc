pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Only an explicit `"dark"` selects the dark theme.
    pub fn from_storage(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Value to persist; `None` means the key is removed.
    pub fn storage_value(self) -> Option<&'static str> {
        match self {
            Theme::Dark => Some("dark"),
            Theme::Light => None,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn enabled_message(self) -> &'static str {
        match self {
            Theme::Dark => "Dark theme enabled",
            Theme::Light => "Light theme enabled",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_dark_is_dark() {
        assert_eq!(Theme::from_storage(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_storage(Some("Dark")), Theme::Light);
        assert_eq!(Theme::from_storage(None), Theme::Light);
    }

    #[test]
    fn toggled_theme_survives_a_storage_round_trip() {
        let stored = Theme::Light.toggled().storage_value();
        assert_eq!(Theme::from_storage(stored), Theme::Dark);

        let stored = Theme::Dark.toggled().storage_value();
        assert_eq!(stored, None);
        assert_eq!(Theme::from_storage(stored), Theme::Light);
    }
}
