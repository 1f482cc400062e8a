//! Popup content derivation: turns a feature's raw property mapping into
//! display-ready records. Never fails; missing or malformed fields
//! degrade to sentinel values.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::DifClass;
use crate::format::{
    dif_class, format_percentage_1dp, format_thousands, parse_decimal, sign_prefix,
    to_display_decimal,
};
use crate::map::feature::value_to_string;
use crate::parties::{party_class, party_color};

/// Parties polling below this share are dropped from the results table.
pub const PERCENTAGE_THRESHOLD: f64 = 5.0;

const PERCENTAGE_PREFIX: &str = "Percentatge";
const NO_DATA: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyRow {
    pub code: String,
    pub color: &'static str,
    pub color_class: &'static str,
    pub votes: String,
    pub percentage: String,
    pub dif_2019: String,
    pub dif_class: DifClass,
    /// Parsed share, kept for the legend bars.
    #[serde(skip)]
    pub share: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectionSummary {
    pub municipality: String,
    pub province: String,
    pub district: String,
    pub section: String,
    pub census: String,
    pub participation: String,
    pub participation_dif: String,
    pub participation_dif_class: DifClass,
    pub rows: Vec<PartyRow>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeSummary {
    pub municipality: String,
    pub province: String,
    pub district: String,
    pub section: String,
    pub income: String,
    pub dif_previous_year: String,
    pub dif_previous_year_class: DifClass,
    pub five_year_change: String,
    pub five_year_change_class: DifClass,
}

fn prop(properties: &Map<String, Value>, key: &str) -> Option<String> {
    properties.get(key).and_then(value_to_string)
}

fn prop_or(properties: &Map<String, Value>, key: &str, fallback: &str) -> String {
    prop(properties, key).unwrap_or_else(|| fallback.to_string())
}

/// Election results: percentage-per-party keys are filtered at the 5%
/// threshold and sorted descending; ties keep the property mapping's
/// source order (the sort is stable).
pub fn election_summary(properties: &Map<String, Value>) -> ElectionSummary {
    let mut ranked: Vec<(String, String, f64)> = properties
        .iter()
        .filter_map(|(key, value)| {
            let code = key.strip_prefix(PERCENTAGE_PREFIX)?;
            let raw = value_to_string(value)?;
            let share = parse_decimal(&raw)?;
            (share >= PERCENTAGE_THRESHOLD).then(|| (code.to_string(), raw, share))
        })
        .collect();
    ranked.sort_by(|a, b| b.2.partial_cmp(&a.2).unwrap_or(std::cmp::Ordering::Equal));

    let rows = ranked
        .into_iter()
        .map(|(code, raw_share, share)| {
            let dif_raw = prop(properties, &format!("Dif{code}2019"));
            let dif_2019 = dif_raw.as_deref().map_or_else(
                || NO_DATA.to_string(),
                |raw| sign_prefix(&format_thousands(&to_display_decimal(raw))),
            );
            PartyRow {
                color: party_color(&code),
                color_class: party_class(&code),
                votes: prop_or(properties, &code, "-"),
                percentage: format!("{}%", to_display_decimal(&raw_share)),
                dif_2019,
                dif_class: dif_class(dif_raw.as_deref()),
                share,
                code,
            }
        })
        .collect();

    let participation_dif_raw = prop(properties, "DifParticipacion2019");
    ElectionSummary {
        municipality: prop_or(properties, "NMUN", ""),
        province: prop_or(properties, "NPRO", ""),
        district: prop_or(properties, "CDIS", "-"),
        section: prop_or(properties, "CSEC", "-"),
        census: prop(properties, "Censo")
            .map_or_else(|| "-".to_string(), |raw| format_thousands(&raw)),
        participation: prop(properties, "Participacion")
            .map_or_else(|| "-".to_string(), |raw| format!("{}%", to_display_decimal(&raw))),
        participation_dif: participation_dif_raw.as_deref().map_or_else(
            || NO_DATA.to_string(),
            |raw| sign_prefix(&format_thousands(&to_display_decimal(raw))),
        ),
        participation_dif_class: dif_class(participation_dif_raw.as_deref()),
        rows,
    }
}

/// Income statistics: one fixed statistic per section, no filtering or
/// sorting. The five-year change is rounded to one decimal place before
/// grouping.
pub fn income_summary(properties: &Map<String, Value>) -> IncomeSummary {
    let dif_raw = prop(properties, "DifRendaAnyAnterior");
    let five_year_raw = prop(properties, "IncrementPercentatge5Anys");

    IncomeSummary {
        municipality: prop_or(properties, "NMUN", ""),
        province: prop_or(properties, "NPRO", ""),
        district: prop_or(properties, "CDIS", "-"),
        section: prop_or(properties, "CSEC", "-"),
        income: prop(properties, "RendaMitjana").map_or_else(
            || "Sense dades".to_string(),
            |raw| format_thousands(&to_display_decimal(&raw)),
        ),
        dif_previous_year: dif_raw.as_deref().map_or_else(
            || "Sense dades".to_string(),
            |raw| sign_prefix(&format_thousands(&to_display_decimal(raw))),
        ),
        dif_previous_year_class: dif_class(dif_raw.as_deref()),
        five_year_change: five_year_raw
            .as_deref()
            .and_then(format_percentage_1dp)
            .unwrap_or_else(|| "Sense dades".to_string()),
        five_year_change_class: dif_class(five_year_raw.as_deref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn props(value: Value) -> Map<String, Value> {
        value.as_object().expect("object").clone()
    }

    #[test]
    fn parties_below_threshold_are_excluded() {
        let summary = election_summary(&props(json!({
            "PercentatgePSOE": "34,2",
            "PercentatgePACMA": "4,9",
            "PercentatgePP": "5,0",
        })));
        let codes: Vec<_> = summary.rows.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, ["PSOE", "PP"]);
    }

    #[test]
    fn sort_is_descending_and_stable_on_ties() {
        let summary = election_summary(&props(json!({
            "PercentatgeA": "12,3",
            "PercentatgeB": "45,0",
            "PercentatgeC": "12,3",
        })));
        let codes: Vec<_> = summary.rows.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, ["B", "A", "C"]);
    }

    #[test]
    fn rows_resolve_color_class_votes_and_delta() {
        let summary = election_summary(&props(json!({
            "PercentatgePSOE": "34,2",
            "PSOE": 1523,
            "DifPSOE2019": "1.8",
        })));
        let row = &summary.rows[0];
        assert_eq!(row.color, "#e01319");
        assert_eq!(row.color_class, "psoe-text");
        assert_eq!(row.votes, "1523");
        assert_eq!(row.percentage, "34,2%");
        assert_eq!(row.dif_2019, "+1,8");
        assert_eq!(row.dif_class, crate::domain::DifClass::Positive);
    }

    #[test]
    fn large_deltas_are_grouped_before_the_sign_prefix() {
        let summary = election_summary(&props(json!({
            "PercentatgePSOE": "34,2",
            "DifPSOE2019": "1234,5",
            "PercentatgePP": "20,0",
            "DifPP2019": "-1234,5",
            "Participacion": "64,5",
            "DifParticipacion2019": "2750",
        })));
        assert_eq!(summary.rows[0].dif_2019, "+1.234,5");
        assert_eq!(summary.rows[1].dif_2019, "-1.234,5");
        assert_eq!(summary.participation_dif, "+2.750");
    }

    #[test]
    fn unknown_party_gets_neutral_defaults() {
        let summary = election_summary(&props(json!({
            "PercentatgeAGRUPACION-X": "22,0",
        })));
        let row = &summary.rows[0];
        assert_eq!(row.color, "#000000");
        assert_eq!(row.color_class, "");
        assert_eq!(row.votes, "-");
        assert_eq!(row.dif_2019, "N/A");
        assert_eq!(row.dif_class, crate::domain::DifClass::Default);
    }

    #[test]
    fn neutral_delta_passes_through_with_default_class() {
        let summary = election_summary(&props(json!({
            "PercentatgeVOX": "9,1",
            "DifVOX2019": "Sense dades",
        })));
        let row = &summary.rows[0];
        assert_eq!(row.dif_2019, "Sense dades");
        assert_eq!(row.dif_class, crate::domain::DifClass::Default);
    }

    #[test]
    fn header_fields_are_formatted() {
        let summary = election_summary(&props(json!({
            "NMUN": "Girona",
            "NPRO": "Girona",
            "CDIS": "02",
            "CSEC": "011",
            "Censo": 1234567,
            "Participacion": "64.5",
            "DifParticipacion2019": "1.2",
        })));
        assert_eq!(summary.census, "1.234.567");
        assert_eq!(summary.participation, "64,5%");
        assert_eq!(summary.participation_dif, "+1,2");
        assert_eq!(
            summary.participation_dif_class,
            crate::domain::DifClass::Positive
        );
    }

    #[test]
    fn missing_fields_degrade_to_sentinels() {
        let summary = election_summary(&props(json!({})));
        assert!(summary.rows.is_empty());
        assert_eq!(summary.census, "-");
        assert_eq!(summary.participation_dif, "N/A");
    }

    #[test]
    fn income_summary_formats_the_fixed_statistic() {
        let summary = income_summary(&props(json!({
            "NMUN": "Girona",
            "RendaMitjana": 32450,
            "DifRendaAnyAnterior": "1250",
            "IncrementPercentatge5Anys": "12,37",
        })));
        assert_eq!(summary.income, "32.450");
        assert_eq!(summary.dif_previous_year, "+1.250");
        assert_eq!(summary.five_year_change, "+12,4%");
        assert_eq!(
            summary.five_year_change_class,
            crate::domain::DifClass::Positive
        );
    }

    #[test]
    fn income_missing_fields_degrade_to_sentinels() {
        let summary = income_summary(&props(json!({})));
        assert_eq!(summary.income, "Sense dades");
        assert_eq!(summary.dif_previous_year, "Sense dades");
        assert_eq!(
            summary.dif_previous_year_class,
            crate::domain::DifClass::Default
        );
    }
}
