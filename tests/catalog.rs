use nexus_site::catalog::{
    export_json, filter, CatalogError, Categorized, CategoryFilter, FilterState, ARTICLES, ARTICLE_TAGS, CATALOG_NAMES,
    POSITIONS, POSITION_TAGS, PROJECTS, PROJECT_TAGS,
};

#[derive(Debug, PartialEq)]
struct Item {
    name: &'static str,
    category: &'static str,
}

impl Categorized for Item {
    fn category(&self) -> &str {
        self.category
    }
}

const ITEMS: &[Item] = &[
    Item { name: "A", category: "x" },
    Item { name: "B", category: "y" },
    Item { name: "C", category: "x" },
];

fn names(items: &[&Item]) -> Vec<&'static str> {
    items.iter().map(|item| item.name).collect()
}

#[test]
fn test_filter_by_tag_keeps_order() {
    assert_eq!(names(&filter(ITEMS, "x")), vec!["A", "C"]);
    assert_eq!(names(&filter(ITEMS, "y")), vec!["B"]);
}

#[test]
fn test_filter_all_returns_everything() {
    assert_eq!(names(&filter(ITEMS, "all")), vec!["A", "B", "C"]);

    let all_projects = filter(PROJECTS, "all");
    assert_eq!(all_projects.len(), PROJECTS.len());
    for (filtered, original) in all_projects.iter().zip(PROJECTS) {
        assert_eq!(*filtered, original);
    }
}

#[test]
fn test_unknown_tag_yields_nothing() {
    assert!(filter(ITEMS, "z").is_empty());
    assert!(filter(PROJECTS, "nonexistent").is_empty());
    // Tags are case-sensitive
    assert!(filter(PROJECTS, "Fintech").is_empty());
}

#[test]
fn test_project_tags_partition_catalog() {
    let per_tag: usize = PROJECT_TAGS.iter().map(|tag| filter(PROJECTS, tag).len()).sum();
    assert_eq!(per_tag, PROJECTS.len());
    assert_eq!(filter(PROJECTS, "fintech").len(), 2);
    assert_eq!(filter(PROJECTS, "maritime").len(), 2);
    assert_eq!(filter(PROJECTS, "technology").len(), 2);
}

#[test]
fn test_every_record_uses_a_published_tag() {
    assert!(PROJECTS.iter().all(|p| PROJECT_TAGS.contains(&p.category)));
    assert!(ARTICLES.iter().all(|a| ARTICLE_TAGS.contains(&a.category)));
    assert!(POSITIONS.iter().all(|p| POSITION_TAGS.contains(&p.department)));
}

#[test]
fn test_filter_state_select() {
    let mut state = FilterState::new(PROJECT_TAGS);
    assert_eq!(state.active(), CategoryFilter::All);

    assert_eq!(state.select("maritime").unwrap(), CategoryFilter::Tag("maritime"));
    let selected = state.apply(PROJECTS);
    assert_eq!(selected.len(), 2);
    assert!(selected.iter().all(|p| p.category == "maritime"));

    assert_eq!(state.select("all").unwrap(), CategoryFilter::All);
    assert_eq!(state.apply(PROJECTS).len(), PROJECTS.len());
}

#[test]
fn test_filter_state_rejects_unknown_tag() {
    let mut state = FilterState::new(PROJECT_TAGS);
    state.select("fintech").unwrap();

    let err = state.select("security").unwrap_err();
    assert!(matches!(err, CatalogError::UnknownTag { ref tag, .. } if tag == "security"));
    assert!(err.to_string().contains("fintech"));

    // Selection is unchanged
    assert_eq!(state.active(), CategoryFilter::Tag("fintech"));
}

#[test]
fn test_filter_state_cycles() {
    let mut state = FilterState::new(PROJECT_TAGS);
    assert_eq!(state.next(), CategoryFilter::Tag("fintech"));
    assert_eq!(state.next(), CategoryFilter::Tag("maritime"));
    assert_eq!(state.next(), CategoryFilter::Tag("technology"));
    assert_eq!(state.next(), CategoryFilter::All);

    assert_eq!(state.previous(), CategoryFilter::Tag("technology"));
    state.reset();
    assert_eq!(state.active(), CategoryFilter::All);

    let options: Vec<&str> = state.options().collect();
    assert_eq!(options, vec!["all", "fintech", "maritime", "technology"]);
}

#[test]
fn test_export_json() {
    for name in CATALOG_NAMES {
        let json = export_json(name).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value.as_array().is_some_and(|items| !items.is_empty()), "{name} exported nothing");
    }

    let projects: serde_json::Value = serde_json::from_str(&export_json("projects").unwrap()).unwrap();
    assert_eq!(projects[0]["title"], "Global Payment Network");
    assert_eq!(projects[0]["category"], "fintech");

    let err = export_json("pricing").unwrap_err();
    assert!(matches!(err, CatalogError::UnknownCatalog(ref name) if name == "pricing"));
    let message = err.to_string();
    assert!(message.contains("'pricing'"));
    assert!(message.contains("projects, articles, positions"));
}
