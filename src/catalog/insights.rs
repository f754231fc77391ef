//! Articles for the insights hub.

use super::Categorized;
use serde::Serialize;

pub const ARTICLE_TAGS: &[&str] = &["fintech", "maritime", "technology", "security"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    pub category: &'static str,
    pub title: &'static str,
    pub author: &'static str,
    pub date: &'static str,
    pub read_time: &'static str,
    pub icon: &'static str,
    pub featured: bool,
}

impl Categorized for Article {
    fn category(&self) -> &str {
        self.category
    }
}

/// The featured article, if any.
#[must_use]
pub fn featured() -> Option<&'static Article> {
    ARTICLES.iter().find(|article| article.featured)
}

pub const ARTICLES: &[Article] = &[
    Article {
        category: "fintech",
        title: "The Future of Cross-Border Payments in 2026",
        author: "Sarah Chen",
        date: "Feb 4, 2026",
        read_time: "8 min",
        icon: "💳",
        featured: true,
    },
    Article {
        category: "maritime",
        title: "AI-Driven Port Optimization: A Deep Dive",
        author: "Marcus Liu",
        date: "Feb 3, 2026",
        read_time: "12 min",
        icon: "🚢",
        featured: false,
    },
    Article {
        category: "technology",
        title: "Quantum Computing in Enterprise Systems",
        author: "Dr. Elena Rodriguez",
        date: "Feb 2, 2026",
        read_time: "15 min",
        icon: "⚛️",
        featured: false,
    },
    Article {
        category: "security",
        title: "Zero Trust Architecture: Implementation Guide",
        author: "James Park",
        date: "Feb 1, 2026",
        read_time: "10 min",
        icon: "🔐",
        featured: false,
    },
];
