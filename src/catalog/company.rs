//! Company facts: timeline, stats, offices and footer content.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub year: u16,
    pub title: &'static str,
    pub description: &'static str,
}

/// A headline figure. `label` is a translation key for the hero stats and
/// plain text for the ticker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Office {
    pub flag: &'static str,
    pub city: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Headquarters {
    pub address: &'static [&'static str],
    pub email: &'static str,
    pub phone: &'static str,
}

pub const TIMELINE: &[Milestone] = &[
    Milestone {
        year: 1999,
        title: "Foundation",
        description: "Company founded with vision for global transformation",
    },
    Milestone {
        year: 2003,
        title: "First Expansion",
        description: "Opened offices in 15 countries across 3 continents",
    },
    Milestone {
        year: 2008,
        title: "Maritime Division",
        description: "Launched advanced maritime logistics solutions",
    },
    Milestone {
        year: 2012,
        title: "Fintech Launch",
        description: "Introduced revolutionary payment infrastructure",
    },
    Milestone {
        year: 2016,
        title: "Digital Transformation",
        description: "AI and cloud solutions for Fortune 500",
    },
    Milestone {
        year: 2020,
        title: "Global Leader",
        description: "Recognized as industry leader with 80+ countries",
    },
    Milestone {
        year: 2024,
        title: "Future Ready",
        description: "Next-gen solutions with quantum computing integration",
    },
];

pub const HEADLINE_STATS: &[Stat] = &[
    Stat {
        value: "80+",
        label: "hero.stats1",
    },
    Stat {
        value: "500+",
        label: "hero.stats2",
    },
    Stat {
        value: "99.9%",
        label: "hero.stats3",
    },
];

pub const TICKER_STATS: &[Stat] = &[
    Stat {
        value: "80+",
        label: "Countries",
    },
    Stat {
        value: "500+",
        label: "Enterprise Clients",
    },
    Stat {
        value: "10K+",
        label: "Employees",
    },
    Stat {
        value: "99.9%",
        label: "Uptime",
    },
    Stat {
        value: "$50B+",
        label: "Transactions",
    },
    Stat {
        value: "100%",
        label: "Compliance",
    },
];

pub const HEADQUARTERS: Headquarters = Headquarters {
    address: &["123 Innovation Drive", "London EC2N 2DL", "United Kingdom"],
    email: "contact@nexus-global.com",
    phone: "+44 20 7123 4567",
};

pub const OFFICES: &[Office] = &[
    Office {
        flag: "🇺🇸",
        city: "New York",
    },
    Office {
        flag: "🇸🇬",
        city: "Singapore",
    },
    Office {
        flag: "🇦🇪",
        city: "Dubai",
    },
    Office {
        flag: "🇭🇰",
        city: "Hong Kong",
    },
    Office {
        flag: "🇩🇪",
        city: "Frankfurt",
    },
    Office {
        flag: "🇯🇵",
        city: "Tokyo",
    },
];

pub const CERTIFICATIONS: &[&str] = &["ISO 27001 Certified", "SOC 2 Type II", "GDPR Compliant"];

/// Year of the first milestone.
#[must_use]
pub fn founded() -> u16 {
    TIMELINE.first().map_or(1999, |milestone| milestone.year)
}
