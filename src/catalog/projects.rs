//! Project gallery entries.

use super::Categorized;
use serde::Serialize;

/// Tags used by [`PROJECTS`], in filter-bar order.
pub const PROJECT_TAGS: &[&str] = &["fintech", "maritime", "technology"];

/// A case study shown in the project gallery
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub client: &'static str,
    pub result: &'static str,
    pub icon: &'static str,
}

impl Categorized for Project {
    fn category(&self) -> &str {
        self.category
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Global Payment Network",
        category: "fintech",
        client: "Fortune 100 Bank",
        result: "$2B+ daily transactions",
        icon: "💰",
    },
    Project {
        title: "Smart Port System",
        category: "maritime",
        client: "International Port Authority",
        result: "40% efficiency increase",
        icon: "⚓",
    },
    Project {
        title: "Enterprise Cloud Migration",
        category: "technology",
        client: "Global Retail Chain",
        result: "10M+ users supported",
        icon: "☁️",
    },
    Project {
        title: "Fraud Detection AI",
        category: "fintech",
        client: "Payment Processor",
        result: "99.9% accuracy",
        icon: "🛡️",
    },
    Project {
        title: "Fleet Optimization",
        category: "maritime",
        client: "Shipping Corporation",
        result: "30% cost reduction",
        icon: "🚢",
    },
    Project {
        title: "Data Analytics Platform",
        category: "technology",
        client: "Healthcare Provider",
        result: "500TB data processed",
        icon: "📊",
    },
];
