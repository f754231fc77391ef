//! Open positions and employee perks.

use super::Categorized;
use serde::Serialize;

/// Departments used to filter [`POSITIONS`].
pub const POSITION_TAGS: &[&str] = &["engineering", "maritime", "cloud", "product"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Position {
    pub title: &'static str,
    pub location: &'static str,
    pub employment: &'static str,
    pub department: &'static str,
    pub experience: &'static str,
    pub salary: &'static str,
}

impl Categorized for Position {
    fn category(&self) -> &str {
        self.department
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Perk {
    pub title: &'static str,
    pub description: &'static str,
}

pub const POSITIONS: &[Position] = &[
    Position {
        title: "Senior Fintech Solutions Architect",
        location: "London, UK",
        employment: "Full-time",
        department: "engineering",
        experience: "8+ years",
        salary: "$180K - $250K",
    },
    Position {
        title: "Maritime Systems Engineer",
        location: "Singapore",
        employment: "Full-time",
        department: "maritime",
        experience: "5+ years",
        salary: "$120K - $160K",
    },
    Position {
        title: "Cloud Infrastructure Lead",
        location: "New York, USA",
        employment: "Full-time",
        department: "cloud",
        experience: "7+ years",
        salary: "$160K - $220K",
    },
    Position {
        title: "Product Manager - Digital Platforms",
        location: "Remote",
        employment: "Full-time",
        department: "product",
        experience: "6+ years",
        salary: "$140K - $190K",
    },
];

pub const PERKS: &[Perk] = &[
    Perk {
        title: "Health & Wellness",
        description: "Comprehensive healthcare for you and family",
    },
    Perk {
        title: "Global Mobility",
        description: "Work from anywhere with flexible remote options",
    },
    Perk {
        title: "Growth & Learning",
        description: "Unlimited education budget and mentorship",
    },
];
