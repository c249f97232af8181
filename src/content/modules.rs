//! Product modules shown in the module-detail modal

use std::str::FromStr;

use crate::error::VizError;

use super::ColorTag;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleKind {
    SurgicalExcellence,
    TechniqueAnalysis,
    RiskAssessment,
    QualityMetrics,
    RecoveryIntelligence,
}

/// Modal content for one module
#[derive(Debug, PartialEq, Eq)]
pub struct ModuleDetail {
    pub title: &'static str,
    pub summary: &'static str,
    pub capabilities_heading: &'static str,
    pub capabilities: &'static [&'static str],
    pub closing_heading: &'static str,
    pub closing_text: &'static str,
    pub accent: ColorTag,
}

static MODULES: [ModuleDetail; 5] = [
    ModuleDetail {
        title: "SI.X - Surgical Excellence Module",
        summary: "Advanced outcome prediction and surgical optimization engine.",
        capabilities_heading: "Key Capabilities:",
        capabilities: &[
            "Pre-operative outcome prediction with 94% accuracy",
            "Real-time surgical decision support",
            "Post-operative recovery optimization",
            "Complication prevention protocols",
        ],
        closing_heading: "Integration Points:",
        closing_text: "Seamlessly integrates with EMR systems, surgical planning software, \
            and Qi\u{2122} patient interfaces for comprehensive surgical excellence management.",
        accent: ColorTag::Blue,
    },
    ModuleDetail {
        title: "SI.T - Technique Analysis Module",
        summary: "Comprehensive surgical technique analysis and methodology optimization.",
        capabilities_heading: "Core Features:",
        capabilities: &[
            "Procedural methodology comparison",
            "Technique efficacy analysis",
            "Best practice recommendations",
            "Surgical innovation tracking",
        ],
        closing_heading: "Clinical Applications:",
        closing_text: "Enables surgeons to refine techniques based on outcome data, compare \
            methodologies across peer networks, and adopt evidence-based procedural improvements.",
        accent: ColorTag::Green,
    },
    ModuleDetail {
        title: "SI.RA - Risk Assessment Module",
        summary: "Predictive risk modeling and complication prevention system.",
        capabilities_heading: "Risk Analytics:",
        capabilities: &[
            "Multi-factor risk scoring algorithms",
            "Complication probability modeling",
            "Patient-specific risk stratification",
            "Intervention timing optimization",
        ],
        closing_heading: "Predictive Capabilities:",
        closing_text: "Advanced machine learning models trained on extensive surgical datasets \
            to predict and prevent adverse outcomes before they occur.",
        accent: ColorTag::Purple,
    },
    ModuleDetail {
        title: "SI.Q - Quality Metrics Module",
        summary: "Comprehensive quality measurement and benchmarking system.",
        capabilities_heading: "Quality Indicators:",
        capabilities: &[
            "Multi-dimensional quality scoring",
            "Peer performance benchmarking",
            "Quality improvement tracking",
            "Outcome variance analysis",
        ],
        closing_heading: "Benchmarking Framework:",
        closing_text: "Establishes quality metrics that matter, providing actionable insights \
            for continuous improvement and excellence in surgical care delivery.",
        accent: ColorTag::Red,
    },
    ModuleDetail {
        title: "SI.REC - Recovery Intelligence Module",
        summary: "Patient journey optimization and recovery prediction system.",
        capabilities_heading: "Recovery Analytics:",
        capabilities: &[
            "Personalized recovery timelines",
            "Milestone achievement tracking",
            "Rehabilitation optimization",
            "Long-term outcome prediction",
        ],
        closing_heading: "Patient Engagement:",
        closing_text: "Empowers patients with clear recovery expectations, milestone tracking, \
            and personalized guidance throughout their healing journey.",
        accent: ColorTag::Indigo,
    },
];

/// Shown for ids outside the module table
static UNAVAILABLE: ModuleDetail = ModuleDetail {
    title: "Module Details",
    summary: "Module information not available.",
    capabilities_heading: "",
    capabilities: &[],
    closing_heading: "",
    closing_text: "",
    accent: ColorTag::Gray,
};

impl ModuleKind {
    pub fn all() -> &'static [ModuleKind] {
        &[
            ModuleKind::SurgicalExcellence,
            ModuleKind::TechniqueAnalysis,
            ModuleKind::RiskAssessment,
            ModuleKind::QualityMetrics,
            ModuleKind::RecoveryIntelligence,
        ]
    }

    /// Short code used in markup, e.g. `SI.RA`
    pub fn code(&self) -> &'static str {
        match self {
            ModuleKind::SurgicalExcellence => "SI.X",
            ModuleKind::TechniqueAnalysis => "SI.T",
            ModuleKind::RiskAssessment => "SI.RA",
            ModuleKind::QualityMetrics => "SI.Q",
            ModuleKind::RecoveryIntelligence => "SI.REC",
        }
    }

    pub fn detail(&self) -> &'static ModuleDetail {
        match self {
            ModuleKind::SurgicalExcellence => &MODULES[0],
            ModuleKind::TechniqueAnalysis => &MODULES[1],
            ModuleKind::RiskAssessment => &MODULES[2],
            ModuleKind::QualityMetrics => &MODULES[3],
            ModuleKind::RecoveryIntelligence => &MODULES[4],
        }
    }
}

impl ModuleDetail {
    /// Detail for a module code, falling back to the placeholder entry
    pub fn lookup(code: &str) -> &'static ModuleDetail {
        match code.parse::<ModuleKind>() {
            Ok(kind) => kind.detail(),
            Err(_) => &UNAVAILABLE,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        std::ptr::eq(self, &UNAVAILABLE)
    }
}

impl FromStr for ModuleKind {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModuleKind::all()
            .iter()
            .copied()
            .find(|kind| kind.code() == s)
            .ok_or_else(|| VizError::UnknownIdentifier(s.to_string()))
    }
}

impl std::fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for &kind in ModuleKind::all() {
            assert_eq!(kind.code().parse::<ModuleKind>().unwrap(), kind);
            assert!(kind.detail().title.starts_with(kind.code()));
            assert_eq!(kind.detail().capabilities.len(), 4);
        }
    }

    #[test]
    fn test_lookup_fallback() {
        let detail = ModuleDetail::lookup("SI.ZZ");
        assert!(detail.is_placeholder());
        assert_eq!(detail.title, "Module Details");
        assert_eq!(detail.summary, "Module information not available.");

        let detail = ModuleDetail::lookup("SI.RA");
        assert!(!detail.is_placeholder());
        assert_eq!(detail.accent, ColorTag::Purple);
    }
}
