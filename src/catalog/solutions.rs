//! Solution lines with their capabilities and headline metrics.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Solution {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    /// `(metric, value)` pairs in display order.
    pub metrics: &'static [(&'static str, &'static str)],
}

pub const SOLUTIONS: &[Solution] = &[
    Solution {
        title: "Fintech Infrastructure",
        description: "Real-time payment processing at global scale",
        features: &["Instant Settlement", "Multi-Currency", "Fraud Detection", "API Integration"],
        metrics: &[("transactions", "$2B+/day"), ("countries", "150+"), ("uptime", "99.99%")],
    },
    Solution {
        title: "Maritime Solutions",
        description: "AI-powered port and logistics management",
        features: &["Fleet Tracking", "Route Optimization", "Cargo Management", "Predictive Maintenance"],
        metrics: &[("ports", "200+"), ("vessels", "5K+"), ("efficiency", "+45%")],
    },
    Solution {
        title: "Cloud Platforms",
        description: "Scalable enterprise cloud infrastructure",
        features: &["Auto-Scaling", "Multi-Region", "Disaster Recovery", "24/7 Support"],
        metrics: &[("users", "10M+"), ("regions", "25"), ("sla", "99.9%")],
    },
    Solution {
        title: "Cybersecurity",
        description: "Enterprise-grade security solutions",
        features: &["Threat Detection", "Zero Trust", "Compliance", "Incident Response"],
        metrics: &[("threats", "1B+ blocked"), ("compliance", "100%"), ("response", "<5min")],
    },
    Solution {
        title: "Analytics & BI",
        description: "Advanced data analytics and insights",
        features: &["Real-time Dashboards", "Predictive Analytics", "Custom Reports", "AI Insights"],
        metrics: &[("data", "500TB+"), ("insights", "1M+/day"), ("accuracy", "98%")],
    },
    Solution {
        title: "AI & Machine Learning",
        description: "Next-gen artificial intelligence solutions",
        features: &["Neural Networks", "Computer Vision", "NLP", "AutoML"],
        metrics: &[("models", "1K+"), ("accuracy", "99.5%"), ("speed", "10ms")],
    },
];
