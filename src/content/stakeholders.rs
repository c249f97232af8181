//! Stakeholder audiences

use std::str::FromStr;

use crate::error::VizError;

use super::ColorTag;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stakeholder {
    Clinicians,
    Hospitals,
    Insurers,
    Patients,
    DeviceCompanies,
}

#[derive(Debug, PartialEq, Eq)]
pub struct StakeholderInfo {
    pub name: &'static str,
    pub color: ColorTag,
    pub focus: &'static str,
    pub benefits: [&'static str; 4],
}

static STAKEHOLDERS: [StakeholderInfo; 5] = [
    StakeholderInfo {
        name: "Clinicians",
        color: ColorTag::Blue,
        focus: "Clinical Excellence",
        benefits: ["Peer Benchmarking", "Outcome Prediction", "Performance Analytics", "Research Insights"],
    },
    StakeholderInfo {
        name: "Hospitals",
        color: ColorTag::Green,
        focus: "Operational Excellence",
        benefits: ["Cost Reduction", "Quality Improvement", "Risk Management", "Efficiency Metrics"],
    },
    StakeholderInfo {
        name: "Insurers",
        color: ColorTag::Purple,
        focus: "Risk & ROI",
        benefits: ["Claims Analytics", "Cost Containment", "Risk Assessment", "Fraud Detection"],
    },
    StakeholderInfo {
        name: "Patients",
        color: ColorTag::Red,
        focus: "Personalized Care",
        benefits: ["Treatment Options", "Recovery Predictions", "Provider Selection", "Outcome Clarity"],
    },
    StakeholderInfo {
        name: "Device Companies",
        color: ColorTag::Indigo,
        focus: "Market Intelligence",
        benefits: ["Usage Analytics", "Outcome Studies", "Market Research", "Product Development"],
    },
];

impl Stakeholder {
    pub fn all() -> &'static [Stakeholder] {
        &[
            Stakeholder::Clinicians,
            Stakeholder::Hospitals,
            Stakeholder::Insurers,
            Stakeholder::Patients,
            Stakeholder::DeviceCompanies,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            Stakeholder::Clinicians => "clinicians",
            Stakeholder::Hospitals => "hospitals",
            Stakeholder::Insurers => "insurers",
            Stakeholder::Patients => "patients",
            Stakeholder::DeviceCompanies => "device-companies",
        }
    }

    pub fn info(&self) -> &'static StakeholderInfo {
        match self {
            Stakeholder::Clinicians => &STAKEHOLDERS[0],
            Stakeholder::Hospitals => &STAKEHOLDERS[1],
            Stakeholder::Insurers => &STAKEHOLDERS[2],
            Stakeholder::Patients => &STAKEHOLDERS[3],
            Stakeholder::DeviceCompanies => &STAKEHOLDERS[4],
        }
    }
}

impl FromStr for Stakeholder {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stakeholder::all()
            .iter()
            .copied()
            .find(|candidate| candidate.id() == s)
            .ok_or_else(|| VizError::UnknownIdentifier(s.to_string()))
    }
}
