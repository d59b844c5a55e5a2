//! Light/dark theme and the class lists of every themed surface.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// Background treatment of a page section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionTone {
    Hero,
    Plain,
    Banded,
}

impl Theme {
    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Dark => "Switch to light theme",
            Theme::Light => "Switch to dark theme",
        }
    }

    pub fn page_class(self) -> &'static str {
        match self {
            Theme::Dark => "bg-black text-white overflow-hidden transition-colors duration-500",
            Theme::Light => "bg-white text-gray-900 overflow-hidden transition-colors duration-500",
        }
    }

    pub fn nav_class(self) -> &'static str {
        match self {
            Theme::Dark => "fixed top-0 left-0 right-0 z-40 bg-black/80 backdrop-blur-md border-b border-gray-800",
            Theme::Light => "fixed top-0 left-0 right-0 z-40 bg-white/80 backdrop-blur-md border-b border-gray-200",
        }
    }

    pub fn toggle_class(self) -> &'static str {
        match self {
            Theme::Dark => "p-2 rounded-full hover:bg-gray-800 transition-colors duration-300",
            Theme::Light => "p-2 rounded-full hover:bg-gray-100 transition-colors duration-300",
        }
    }

    pub fn section_class(self, tone: SectionTone) -> &'static str {
        match (tone, self) {
            (SectionTone::Hero, _) => {
                "min-h-screen flex items-center justify-center relative overflow-hidden"
            }
            (SectionTone::Plain, _) => "py-20 px-6",
            (SectionTone::Banded, Theme::Dark) => {
                "py-20 px-6 bg-gradient-to-b from-gray-900/50 to-black"
            }
            (SectionTone::Banded, Theme::Light) => {
                "py-20 px-6 bg-gradient-to-b from-gray-100/50 to-white"
            }
        }
    }

    pub fn hero_backdrop_class(self) -> &'static str {
        match self {
            Theme::Dark => "absolute inset-0 bg-gradient-to-br from-purple-900/20 via-black to-pink-900/20",
            Theme::Light => "absolute inset-0 bg-gradient-to-br from-purple-100/30 via-white to-pink-100/30",
        }
    }

    pub fn star_class(self) -> &'static str {
        match self {
            Theme::Dark => "absolute w-1 h-1 bg-white rounded-full opacity-20 animate-pulse",
            Theme::Light => "absolute w-1 h-1 bg-gray-600 rounded-full opacity-20 animate-pulse",
        }
    }

    pub fn card_class(self) -> &'static str {
        match self {
            Theme::Dark => "bg-gray-900/50 border-gray-700 hover:border-purple-500",
            Theme::Light => "bg-white border-gray-200 hover:border-purple-400",
        }
    }

    pub fn heading_class(self) -> &'static str {
        match self {
            Theme::Dark => "text-white",
            Theme::Light => "text-gray-900",
        }
    }

    pub fn body_text_class(self) -> &'static str {
        match self {
            Theme::Dark => "text-gray-300",
            Theme::Light => "text-gray-600",
        }
    }

    pub fn muted_text_class(self) -> &'static str {
        match self {
            Theme::Dark => "text-gray-400",
            Theme::Light => "text-gray-500",
        }
    }

    pub fn tag_class(self) -> &'static str {
        match self {
            Theme::Dark => "bg-gray-800 text-gray-300 px-3 py-1 rounded-full text-xs",
            Theme::Light => "bg-gray-100 text-gray-700 px-3 py-1 rounded-full text-xs",
        }
    }

    pub fn track_class(self) -> &'static str {
        match self {
            Theme::Dark => "w-full bg-gray-700 rounded-full h-3 mb-2",
            Theme::Light => "w-full bg-gray-300 rounded-full h-3 mb-2",
        }
    }

    pub fn input_class(self) -> &'static str {
        match self {
            Theme::Dark => "w-full px-4 py-3 rounded-lg border bg-gray-800 border-gray-600 text-white placeholder-gray-400 focus:ring-2 focus:ring-purple-500 focus:border-transparent transition-all duration-300",
            Theme::Light => "w-full px-4 py-3 rounded-lg border bg-gray-50 border-gray-300 text-gray-900 placeholder-gray-500 focus:ring-2 focus:ring-purple-500 focus:border-transparent transition-all duration-300",
        }
    }

    pub fn social_class(self) -> &'static str {
        match self {
            Theme::Dark => "w-12 h-12 bg-gray-900/50 border-gray-700 hover:border-purple-500 text-gray-400 hover:text-purple-400 rounded-full border flex items-center justify-center transition-all duration-300 hover:scale-110 group",
            Theme::Light => "w-12 h-12 bg-gray-100 border-gray-200 hover:border-purple-400 text-gray-600 hover:text-purple-500 rounded-full border flex items-center justify-center transition-all duration-300 hover:scale-110 group",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        assert!(Theme::default().is_dark());
    }

    #[test]
    fn test_toggle_twice_restores() {
        for start in [Theme::Dark, Theme::Light] {
            let mut theme = start;
            theme.toggle();
            assert_ne!(theme, start);
            theme.toggle();
            assert_eq!(theme, start);
        }
    }

    #[test]
    fn test_surfaces_follow_theme() {
        assert!(Theme::Dark.page_class().contains("bg-black"));
        assert!(Theme::Light.page_class().contains("bg-white"));
        assert_ne!(
            Theme::Dark.section_class(SectionTone::Banded),
            Theme::Light.section_class(SectionTone::Banded)
        );
        assert_eq!(
            Theme::Dark.section_class(SectionTone::Plain),
            Theme::Light.section_class(SectionTone::Plain)
        );
    }
}
