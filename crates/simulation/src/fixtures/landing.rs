//! Copy for the landing page sections and footer.

/// A titled blurb shown as a card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureCard {
    pub title: &'static str,
    pub description: &'static str,
}

const fn card(title: &'static str, description: &'static str) -> FeatureCard {
    FeatureCard { title, description }
}

pub const HERO_BADGE: &str = "Advanced Traffic Management Technology";
pub const HERO_TITLE: &str = "Smart Traffic Management";
pub const HERO_TITLE_ACCENT: &str = "Powered by AI";
pub const HERO_SUBTITLE: &str = "Leveraging advanced object detection technology to create safer roads, \
reduce congestion, and build sustainable smart cities through high-quality annotated datasets.";

pub const HERO_HIGHLIGHTS: &[FeatureCard] = &[
    card(
        "Real-time Analytics",
        "Monitor traffic patterns and congestion points with advanced analytics",
    ),
    card(
        "Enhanced Safety",
        "Identify potential hazards and dangerous situations to improve road safety",
    ),
    card(
        "Urban Planning",
        "Generate insights for better urban planning and infrastructure development",
    ),
];

pub const FEATURES_TITLE: &str = "Comprehensive Traffic Management Features";
pub const FEATURES_SUBTITLE: &str = "Our system combines cutting-edge object detection with powerful \
analytics to transform urban mobility";

pub const FEATURES: &[FeatureCard] = &[
    card("Vehicle Detection", "Identify and classify various vehicle types in real-time traffic flows."),
    card("High-Quality Dataset", "Meticulously annotated traffic data for training accurate ML models."),
    card("AI-Powered Analytics", "Advanced algorithms that process visual data and extract actionable insights."),
    card("Incident Detection", "Quickly identify accidents, stalled vehicles, and other road hazards."),
    card("Congestion Mapping", "Visualize traffic hotspots and congestion patterns across urban areas."),
    card("Data Integration", "Seamlessly combine traffic data with other urban infrastructure systems."),
    card("Predictive Analysis", "Forecast traffic conditions based on historical patterns and real-time data."),
    card("Performance Metrics", "Measure and track key traffic management performance indicators."),
    card("Traffic Flow Optimization", "Adjust signals and routing to improve overall traffic flow efficiency."),
];

pub const DATASET_TITLE: &str = "Advanced Traffic Data Collection for Smarter Cities";
pub const DATASET_BODY: &str = "Our dataset captures the complexity of urban traffic with precision, \
enabling AI models to accurately recognize vehicles, pedestrians, and infrastructure elements.";
pub const DATASET_FACTS: &[&str] = &["99.7% Detection Accuracy", "Millions of Annotated Frames"];

pub const PROMO_TITLE: &str = "Powerful Analytics Dashboard for Traffic Data";
pub const PROMO_SUBTITLE: &str = "Make informed decisions with comprehensive traffic analytics, \
real-time monitoring, and predictive insights.";

pub const PROMO_POINTS: &[FeatureCard] = &[
    card(
        "Real-time Monitoring",
        "Track traffic conditions, congestion levels, and incidents as they happen across your city.",
    ),
    card(
        "Interactive Visualizations",
        "Explore traffic patterns through intuitive charts, heatmaps, and customizable reports.",
    ),
    card(
        "Predictive Analytics",
        "Anticipate traffic congestion and plan preventive measures with AI-driven forecasts.",
    ),
];

pub const BRAND_SHORT: &str = "STMS";
pub const BRAND_LONG: &str = "Smart Traffic Management System";
pub const FOOTER_BLURB: &str = "Smart Traffic Management System using advanced object detection \
to create safer, more efficient urban mobility.";

/// A titled column of footer links.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkColumn {
    pub heading: &'static str,
    pub links: &'static [&'static str],
}

pub const FOOTER_COLUMNS: &[LinkColumn] = &[
    LinkColumn {
        heading: "Platform",
        links: &["Dashboard", "Object Detection", "Analytics", "Reports", "Integrations"],
    },
    LinkColumn {
        heading: "Resources",
        links: &["Documentation", "API Reference", "Case Studies", "Knowledge Base", "Tutorials"],
    },
    LinkColumn {
        heading: "Company",
        links: &["About Us", "Careers", "Blog", "Contact", "Privacy Policy"],
    },
];

pub const FOOTER_LEGAL: &[&str] = &["Terms", "Privacy", "Cookies"];

pub fn copyright_line(year: i32) -> String {
    format!("© {year} {BRAND_LONG}. All rights reserved.")
}
