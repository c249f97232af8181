//! Demo panels
//!
//! The five canned dashboards shown in the interactive demo section.

use std::str::FromStr;

use crate::charts::VisualizationKind;
use crate::error::VizError;

use super::ColorTag;

/// The demos on offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemoKind {
    PatientContext,
    InsuranceOutcome,
    SsraaIntegration,
    SurgeonValue,
    SurgeonContext,
}

/// One headline number on a demo panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricTile {
    pub label: &'static str,
    pub value: &'static str,
    pub color: ColorTag,
}

/// Everything needed to draw a demo panel
#[derive(Debug, PartialEq, Eq)]
pub struct DemoDescriptor {
    pub kind: DemoKind,
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Font Awesome icon classes
    pub icon: &'static str,
    pub color: ColorTag,
    pub metrics: &'static [MetricTile],
    pub visualization: VisualizationKind,
}

const fn tile(label: &'static str, value: &'static str, color: ColorTag) -> MetricTile {
    MetricTile { label, value, color }
}

static DEMOS: [DemoDescriptor; 5] = [
    DemoDescriptor {
        kind: DemoKind::PatientContext,
        title: "Patient Results in Context",
        subtitle: "Individual Benchmarking Dashboard",
        icon: "fas fa-heart",
        color: ColorTag::Red,
        metrics: &[
            tile("Current Percentile", "52nd", ColorTag::Blue),
            tile("Patient Cohort", "2,788", ColorTag::Green),
            tile("Recovery Rate", "94%", ColorTag::Purple),
            tile("Days to Recovery", "14.2", ColorTag::Orange),
        ],
        visualization: VisualizationKind::PercentileComparison,
    },
    DemoDescriptor {
        kind: DemoKind::InsuranceOutcome,
        title: "Insurance Outcome Analytics",
        subtitle: "Sector-Wide Performance Analysis",
        icon: "fas fa-shield-alt",
        color: ColorTag::Purple,
        metrics: &[
            tile("Performance Rank", "76th", ColorTag::Green),
            tile("Total Claims", "4,687", ColorTag::Blue),
            tile("Cost Savings", "$2.3M", ColorTag::Green),
            tile("ROI Increase", "15%", ColorTag::Purple),
        ],
        visualization: VisualizationKind::OutcomeAnalytics,
    },
    DemoDescriptor {
        kind: DemoKind::SsraaIntegration,
        title: "SSRAA Integration Portal",
        subtitle: "Research Authority Dashboard",
        icon: "fas fa-database",
        color: ColorTag::Blue,
        metrics: &[
            tile("System Uptime", "99.9%", ColorTag::Green),
            tile("API Requests", "1,247", ColorTag::Blue),
            tile("Data Points", "2.4M", ColorTag::Purple),
            tile("Active Users", "89", ColorTag::Orange),
        ],
        visualization: VisualizationKind::IntegrationMetrics,
    },
    DemoDescriptor {
        kind: DemoKind::SurgeonValue,
        title: "Surgeon Value Proposition",
        subtitle: "Performance & Network Analysis",
        icon: "fas fa-user-md",
        color: ColorTag::Green,
        metrics: &[
            tile("Performance Tier", "Top 15%", ColorTag::Green),
            tile("Referral Volume", "156", ColorTag::Blue),
            tile("Growth Rate", "12%", ColorTag::Purple),
            tile("Patient Satisfaction", "4.8/5", ColorTag::Orange),
        ],
        visualization: VisualizationKind::SurgeonPerformance,
    },
    DemoDescriptor {
        kind: DemoKind::SurgeonContext,
        title: "Surgeon Results in Context",
        subtitle: "Pooled Cohort Comparison",
        icon: "fas fa-chart-line",
        color: ColorTag::Indigo,
        metrics: &[
            tile("Peer Ranking", "85th", ColorTag::Green),
            tile("Surgeon Cohort", "247", ColorTag::Blue),
            tile("Pooled Cases", "3,156", ColorTag::Purple),
            tile("Success Rate", "96.2%", ColorTag::Green),
        ],
        visualization: VisualizationKind::SurgeonComparison,
    },
];

/// Bullet points shown under every demo chart
pub const KEY_INSIGHTS: [&str; 4] = [
    "Performance above sector average",
    "Consistent improvement trajectory",
    "Strong benchmarking position",
    "Optimal resource utilization",
];

pub const RECOMMENDATIONS: [&str; 4] = [
    "Maintain current protocols",
    "Focus on efficiency gains",
    "Expand successful practices",
    "Monitor emerging trends",
];

impl DemoKind {
    pub fn all() -> &'static [DemoKind] {
        &[
            DemoKind::PatientContext,
            DemoKind::InsuranceOutcome,
            DemoKind::SsraaIntegration,
            DemoKind::SurgeonValue,
            DemoKind::SurgeonContext,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            DemoKind::PatientContext => "patient-context",
            DemoKind::InsuranceOutcome => "insurance-outcome",
            DemoKind::SsraaIntegration => "ssraa-integration",
            DemoKind::SurgeonValue => "surgeon-value",
            DemoKind::SurgeonContext => "surgeon-context",
        }
    }

    pub fn descriptor(&self) -> &'static DemoDescriptor {
        let index = match self {
            DemoKind::PatientContext => 0,
            DemoKind::InsuranceOutcome => 1,
            DemoKind::SsraaIntegration => 2,
            DemoKind::SurgeonValue => 3,
            DemoKind::SurgeonContext => 4,
        };
        &DEMOS[index]
    }

    pub fn visualization(&self) -> VisualizationKind {
        self.descriptor().visualization
    }

    pub fn color(&self) -> ColorTag {
        self.descriptor().color
    }
}

impl FromStr for DemoKind {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DemoKind::all()
            .iter()
            .copied()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| VizError::UnknownIdentifier(s.to_string()))
    }
}

impl std::fmt::Display for DemoKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
