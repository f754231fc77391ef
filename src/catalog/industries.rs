//! Industries served.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Industry {
    pub name: &'static str,
    pub clients: u32,
    pub projects: u32,
    pub icon: &'static str,
}

pub const INDUSTRIES: &[Industry] = &[
    Industry {
        name: "Financial Services",
        clients: 150,
        projects: 450,
        icon: "💳",
    },
    Industry {
        name: "Maritime & Logistics",
        clients: 85,
        projects: 220,
        icon: "🚢",
    },
    Industry {
        name: "Technology & SaaS",
        clients: 200,
        projects: 680,
        icon: "💻",
    },
    Industry {
        name: "Healthcare",
        clients: 95,
        projects: 180,
        icon: "🏥",
    },
    Industry {
        name: "Manufacturing",
        clients: 120,
        projects: 340,
        icon: "🏭",
    },
    Industry {
        name: "Energy & Utilities",
        clients: 75,
        projects: 190,
        icon: "⚡",
    },
];

/// Sum of clients across every industry.
#[must_use]
pub fn total_clients() -> u32 {
    INDUSTRIES.iter().map(|industry| industry.clients).sum()
}
