//! Configuration-driven popup pipeline. Both dataset variants share the
//! same query -> build -> show flow; only the layer id and the content
//! builder differ.

use serde_json::{Map, Value};

use crate::domain::Dataset;
use crate::pipeline::content::{election_summary, income_summary};
use crate::pipeline::PopupContent;

pub struct PopupPipeline {
    /// Vector layer the feature query runs against.
    pub layer: &'static str,
    /// Builds the structured popup record from a feature's properties.
    pub build: fn(&Map<String, Value>) -> PopupContent,
}

pub fn pipeline_for(dataset: Dataset) -> PopupPipeline {
    match dataset {
        Dataset::Eleccions => PopupPipeline {
            layer: Dataset::Eleccions.layer(),
            build: |properties| PopupContent::Election(election_summary(properties)),
        },
        Dataset::Renda => PopupPipeline {
            layer: Dataset::Renda.layer(),
            build: |properties| PopupContent::Income(income_summary(properties)),
        },
    }
}

/// Plain-text payload of a popup, used by headless inspection and as the
/// markup handed to the popup primitive.
pub fn markup(content: &PopupContent) -> String {
    match content {
        PopupContent::Election(summary) => {
            let mut out = format!(
                "{} ({})\nDistrito: {} | Sección: {} | Censo: {} electores\n\
                 Participación: {} ({} respecto al 2019)\n",
                summary.municipality,
                summary.province,
                summary.district,
                summary.section,
                summary.census,
                summary.participation,
                summary.participation_dif,
            );
            out.push_str("Partido | Votos | % | Dif. 2019\n");
            for row in &summary.rows {
                out.push_str(&format!(
                    "{} | {} | {} | {}\n",
                    row.code, row.votes, row.percentage, row.dif_2019
                ));
            }
            out
        }
        PopupContent::Income(summary) => format!(
            "{} ({})\nDistrito: {} | Sección: {}\n\
             Renta media: {} €\nDif. año anterior: {} €\nVariación 5 años: {}\n",
            summary.municipality,
            summary.province,
            summary.district,
            summary.section,
            summary.income,
            summary.dif_previous_year,
            summary.five_year_change,
        ),
    }
}
