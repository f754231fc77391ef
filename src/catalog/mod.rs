//! Static content catalogs and category filtering.
//!
//! Each catalog is an ordered `&'static` slice of records. Catalogs that can
//! be filtered implement [`Categorized`] and publish their closed tag set.

pub mod careers;
pub mod company;
pub mod industries;
pub mod insights;
pub mod projects;
pub mod solutions;

pub use careers::{Perk, Position, PERKS, POSITIONS, POSITION_TAGS};
pub use company::{
    Headquarters, Milestone, Office, Stat, CERTIFICATIONS, HEADLINE_STATS, HEADQUARTERS, OFFICES, TICKER_STATS, TIMELINE,
};
pub use industries::{Industry, INDUSTRIES};
pub use insights::{Article, ARTICLES, ARTICLE_TAGS};
pub use projects::{Project, PROJECTS, PROJECT_TAGS};
pub use solutions::{Solution, SOLUTIONS};

/// Sentinel tag meaning "no filtering".
pub const ALL_TAG: &str = "all";

/// Errors raised by filter selection and catalog export.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Unknown category '{tag}', expected one of: {}", known.join(", "))]
    UnknownTag { tag: String, known: Vec<&'static str> },

    #[error("Unknown catalog '{}', expected one of: {}", .0, CATALOG_NAMES.join(", "))]
    UnknownCatalog(String),

    #[error("Failed to serialize catalog: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Catalog names accepted by [`export_json`].
pub const CATALOG_NAMES: &[&str] = &[
    "projects",
    "articles",
    "positions",
    "perks",
    "industries",
    "solutions",
    "timeline",
    "stats",
    "offices",
];

/// Pretty-printed JSON for the catalog called `name`.
pub fn export_json(name: &str) -> Result<String, CatalogError> {
    let json = match name {
        "projects" => serde_json::to_string_pretty(PROJECTS)?,
        "articles" => serde_json::to_string_pretty(ARTICLES)?,
        "positions" => serde_json::to_string_pretty(POSITIONS)?,
        "perks" => serde_json::to_string_pretty(PERKS)?,
        "industries" => serde_json::to_string_pretty(INDUSTRIES)?,
        "solutions" => serde_json::to_string_pretty(SOLUTIONS)?,
        "timeline" => serde_json::to_string_pretty(TIMELINE)?,
        "stats" => serde_json::to_string_pretty(TICKER_STATS)?,
        "offices" => serde_json::to_string_pretty(OFFICES)?,
        other => return Err(CatalogError::UnknownCatalog(other.to_string())),
    };
    Ok(json)
}

/// A record carrying a category tag.
pub trait Categorized {
    fn category(&self) -> &str;
}

/// Items whose category equals `tag`, in catalog order. `"all"` keeps every
/// item; a tag no item carries yields an empty result.
#[must_use]
pub fn filter<'a, T: Categorized>(items: &'a [T], tag: &str) -> Vec<&'a T> {
    if tag == ALL_TAG {
        return items.iter().collect();
    }
    items.iter().filter(|item| item.category() == tag).collect()
}

/// Active filter selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Tag(&'static str),
}

impl CategoryFilter {
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::All => ALL_TAG,
            Self::Tag(tag) => tag,
        }
    }
}

/// Filter selection bound to one catalog's tag set.
#[derive(Debug, Clone)]
pub struct FilterState {
    tags: &'static [&'static str],
    active: CategoryFilter,
}

impl FilterState {
    /// A new selection over `tags`, starting at "all".
    #[must_use]
    pub const fn new(tags: &'static [&'static str]) -> Self {
        Self {
            tags,
            active: CategoryFilter::All,
        }
    }

    #[must_use]
    pub fn active(&self) -> CategoryFilter {
        self.active
    }

    /// The sentinel followed by the catalog's tags, in selector order.
    pub fn options(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(ALL_TAG).chain(self.tags.iter().copied())
    }

    /// Select `tag`. Tags outside the catalog's set are rejected and the
    /// current selection is kept.
    pub fn select(&mut self, tag: &str) -> Result<CategoryFilter, CatalogError> {
        if tag == ALL_TAG {
            self.active = CategoryFilter::All;
            return Ok(self.active);
        }

        match self.tags.iter().copied().find(|known| *known == tag) {
            Some(known) => {
                self.active = CategoryFilter::Tag(known);
                Ok(self.active)
            }
            None => Err(CatalogError::UnknownTag {
                tag: tag.to_string(),
                known: self.options().collect(),
            }),
        }
    }

    pub fn reset(&mut self) {
        self.active = CategoryFilter::All;
    }

    /// Move to the next option, wrapping back to "all".
    pub fn next(&mut self) -> CategoryFilter {
        self.step(1)
    }

    /// Move to the previous option, wrapping to the last tag.
    pub fn previous(&mut self) -> CategoryFilter {
        self.step(self.tags.len())
    }

    /// Apply the active selection to `items`.
    #[must_use]
    pub fn apply<'a, T: Categorized>(&self, items: &'a [T]) -> Vec<&'a T> {
        filter(items, self.active.tag())
    }

    fn step(&mut self, offset: usize) -> CategoryFilter {
        let count = self.tags.len() + 1;
        let current = match self.active {
            CategoryFilter::All => 0,
            CategoryFilter::Tag(tag) => self.tags.iter().position(|t| *t == tag).map_or(0, |i| i + 1),
        };
        let index = (current + offset) % count;
        self.active = if index == 0 {
            CategoryFilter::All
        } else {
            CategoryFilter::Tag(self.tags[index - 1])
        };
        self.active
    }
}
