#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Every class string on the page that depends on the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeClasses {
    pub page: &'static str,
    pub surface: &'static str,
    pub muted: &'static str,
    pub chip: &'static str,
    pub skill_card: &'static str,
    pub input: &'static str,
}

const LIGHT: ThemeClasses = ThemeClasses {
    page: "bg-gray-50 text-gray-900",
    surface: "bg-white",
    muted: "text-gray-600",
    chip: "bg-gray-100",
    skill_card: "bg-gray-100 hover:bg-gray-200",
    input: "bg-white border-gray-300",
};

const DARK: ThemeClasses = ThemeClasses {
    page: "bg-gray-900 text-white",
    surface: "bg-gray-800",
    muted: "text-gray-400",
    chip: "bg-gray-700",
    skill_card: "bg-gray-700 hover:bg-gray-600",
    input: "bg-gray-800 border-gray-700",
};

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn classes(self) -> ThemeClasses {
        match self {
            Theme::Light => LIGHT,
            Theme::Dark => DARK,
        }
    }
}

#[cfg(test)]
impl ThemeClasses {
    fn all(&self) -> [&'static str; 6] {
        [
            self.page,
            self.surface,
            self.muted,
            self.chip,
            self.skill_card,
            self.input,
        ]
    }
}
