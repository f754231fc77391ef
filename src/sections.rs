//! The site's navigable sections, in page order.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Solutions,
    Industries,
    Projects,
    Insights,
    Careers,
    Contact,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Home,
        Section::About,
        Section::Solutions,
        Section::Industries,
        Section::Projects,
        Section::Insights,
        Section::Careers,
        Section::Contact,
    ];

    /// Anchor id, also accepted in `ui.start_section`.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Solutions => "solutions",
            Self::Industries => "industries",
            Self::Projects => "projects",
            Self::Insights => "insights",
            Self::Careers => "careers",
            Self::Contact => "contact",
        }
    }

    /// Translation key of the navigation label.
    #[must_use]
    pub const fn nav_key(self) -> &'static str {
        match self {
            Self::Home => "nav.home",
            Self::About => "nav.about",
            Self::Solutions => "nav.solutions",
            Self::Industries => "nav.industries",
            Self::Projects => "nav.projects",
            Self::Insights => "nav.insights",
            Self::Careers => "nav.careers",
            Self::Contact => "nav.contact",
        }
    }

    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// Next section, stopping at the last one.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL.get(self.index() + 1).copied().unwrap_or(self)
    }

    /// Previous section, stopping at the first one.
    #[must_use]
    pub fn previous(self) -> Self {
        self.index().checked_sub(1).map_or(self, |i| Self::ALL[i])
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().trim_start_matches('#').to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|section| section.id() == id)
            .ok_or_else(|| format!("unknown section '{s}'"))
    }
}
