// Popup content pipeline: property formatting and the
// configuration-driven renderer shared by both dataset variants.

pub mod content;
pub mod render;

use serde::Serialize;

pub use content::{election_summary, income_summary, ElectionSummary, IncomeSummary, PartyRow};
pub use render::{markup, pipeline_for, PopupPipeline};

/// Structured, display-ready popup record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum PopupContent {
    Election(ElectionSummary),
    Income(IncomeSummary),
}

impl PopupContent {
    pub fn title(&self) -> String {
        let (municipality, province) = match self {
            Self::Election(s) => (&s.municipality, &s.province),
            Self::Income(s) => (&s.municipality, &s.province),
        };
        if province.is_empty() {
            municipality.clone()
        } else {
            format!("{municipality} ({province})")
        }
    }
}
