pub const STORAGE_KEY: &str = "darkMode";
pub const DARK_CLASS: &str = "dark-theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("true") => Self::Dark,
            _ => Self::Light,
        }
    }

    pub fn stored_value(self) -> &'static str {
        match self {
            Self::Light => "false",
            Self::Dark => "true",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn icon_html(self) -> &'static str {
        match self {
            Self::Light => "<i class=\"fas fa-moon\"></i>",
            Self::Dark => "<i class=\"fas fa-sun\"></i>",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_true_restores_dark() {
        assert_eq!(Theme::from_stored(Some("true")), Theme::Dark);
    }

    #[test]
    fn absent_or_corrupt_storage_defaults_to_light() {
        assert_eq!(Theme::from_stored(None), Theme::Light);
        assert_eq!(Theme::from_stored(Some("false")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("yes")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("")), Theme::Light);
    }

    #[test]
    fn double_toggle_is_identity() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.toggled().toggled(), theme);
            assert_eq!(
                Theme::from_stored(Some(theme.toggled().toggled().stored_value())),
                theme
            );
        }
    }

    #[test]
    fn dark_shows_sun_light_shows_moon() {
        assert!(Theme::Dark.icon_html().contains("fa-sun"));
        assert!(Theme::Light.icon_html().contains("fa-moon"));
    }
}
