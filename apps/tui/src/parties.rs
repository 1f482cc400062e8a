//! Static party lookup tables: code -> legend color and code -> styling
//! class, plus the filter alias groups. Unknown codes fall back to a
//! neutral default, lookups never fail.

use std::collections::HashMap;
use std::sync::LazyLock;

pub const DEFAULT_COLOR: &str = "#000000";

/// (code, legend color, styling class), one row per party that appeared
/// on a 23J ballot somewhere in Spain. Regional lists of the same brand
/// share a color.
const PARTY_TABLE: &[(&str, &str, &str)] = &[
    ("FO", "#4c0c10", "fo-text"),
    ("PSOE", "#e01319", "psoe-text"),
    ("PUM+J", "#f9c494", "pumj-text"),
    ("ALM", "#f69408", "alm-text"),
    ("PP", "#1f56a2", "pp-text"),
    ("VOX", "#3fc217", "vox-text"),
    ("PACMA", "#47d751", "pacma-text"),
    ("LB", "#041537", "lb-text"),
    ("RECORTES-CERO", "#154f00", "recortes-cero-text"),
    ("SUMAR-ANDALUCÍA", "#f20d58", "sumar-andalucia-text"),
    ("ADELANTE-ANDALUCÍA", "#43c97d", "adelante-andalucia-text"),
    ("CAMINANDO-JUNTOS", "#0f3371", "caminando-juntos-text"),
    ("ESCAÑOS-EN-BLANCO", "#bf813b", "escanos-en-blanco-text"),
    ("PCTE", "#820605", "pcte-text"),
    ("SUMAR", "#f20d58", "sumar-text"),
    ("JxG", "#fdfd03", "jxg-text"),
    ("XH", "#3691f2", "xh-text"),
    ("JM+", "#c0a831", "jm-text"),
    ("CJ", "#103271", "cj-text"),
    ("FE-JONS", "#666634", "fe-jons-text"),
    ("F.I.A.", "#95465a", "fia-text"),
    ("SUMAR-ARAGÓN", "#f20d58", "sumar-aragon-text"),
    ("EXISTE", "#297d51", "existe-text"),
    ("PAR", "#f5a00c", "par-text"),
    ("EXISTE-TERUEL", "#297d51", "existe-teruel-text"),
    ("PUEDE", "#b5bb02", "puede-text"),
    ("ASTURIAS-EXISTE-EV", "#729ab4", "asturias-existe-ev-text"),
    ("PSIB-PSOE", "#e01319", "psib-psoe-text"),
    (
        "MÉS-PER-MALLORCA-MÉS-PER-MENORCA-SUMAR",
        "#f20d58",
        "mes-per-mallorca-mes-per-menorca-sumar-text",
    ),
    ("CCa", "#fcec75", "cca-text"),
    ("NC-bc", "#82c03c", "nc-bc-text"),
    ("SUMAR-CANARIAS", "#f20d58", "sumar-canarias-text"),
    ("AHORA-CANARIAS-PCPC", "#278101", "ahora-canarias-pcpc-text"),
    ("XAV", "#fad703", "xav-text"),
    ("VB", "#8e684d", "vb-text"),
    ("EV-PCAS-TC", "#863c96", "ev-pcas-tc-text"),
    ("ESPAÑA-VACIADA", "#d43600", "espana-vaciada-text"),
    ("PREPAL", "#b450a0", "prepal-text"),
    ("U.P.L.", "#b91969", "upl-text"),
    ("VP", "#6767af", "vp-text"),
    ("GITV", "#f7a303", "gitv-text"),
    ("3e", "#6fd069", "trese-text"),
    ("SY", "#b09381", "sy-text"),
    ("Ud.Ca", "#72ddff", "udca-text"),
    ("FUERZA-CÍVICA", "#f8ba07", "fuerza-civica-text"),
    ("Zsi", "#f68a98", "zsi-text"),
    ("PSC", "#e01319", "psc-text"),
    ("ERC", "#ffca1b", "erc-text"),
    ("SUMAR-ECP", "#f20d58", "sumar-ecp-text"),
    ("CUP-PR", "#e0c905", "cup-pr-text"),
    ("PCTC", "#820605", "pctc-text"),
    ("PDeCAT-E-CiU", "#e2b005", "pdecat-e-ciu-text"),
    ("JxCAT-JUNTS", "#43c0af", "jxcat-junts-text"),
    ("ESCONS-EN-BLANC", "#bf813b", "escons-en-blanc-text"),
    ("EVC", "#fce3d6", "evc-text"),
    ("UNIDOS SI", "#951f59", "unidos-si-text"),
    ("BQEX", "#224d47", "bqex-text"),
    ("Somos Cc", "#05210b", "somos-cc-text"),
    ("PSdeG-PSOE", "#e01319", "psdeg-psoe-text"),
    ("B.N.G.", "#76b2e1", "bng-text"),
    ("PCTG", "#820605", "pctg-text"),
    ("CCD", "#bff88d", "ccd-text"),
    ("PH", "#f8b483", "ph-text"),
    ("EH-Bildu", "#b2c30f", "eh-bildu-text"),
    ("PSN-PSOE", "#e01319", "psn-psoe-text"),
    ("GBAI", "#f5837a", "gbai-text"),
    ("U.P.N.", "#0d057c", "upn-text"),
    ("EAJ-PNV", "#2c8559", "eaj-pnv-text"),
    ("PSE-EE-(PSOE)", "#e01319", "pse-ee-psoe-text"),
    ("PCTE/ELAK", "#820605", "pcte-elak-text"),
    ("+RDS+", "#9a6600", "rds-text"),
    ("POR-MI-REGIÓN", "#b40022", "por-mi-region-text"),
    ("PARTIDO-AUTÓNOMOS", "#e3efd9", "partido-autonomos-text"),
    ("SUMAR-COMPROMÍS", "#f20d58", "sumar-compromis-text"),
    ("EVB", "#44c2d4", "evb-text"),
    ("CpM", "#6d9697", "cpm-text"),
];

static COLORS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    PARTY_TABLE
        .iter()
        .map(|(code, color, _)| (*code, *color))
        .collect()
});

static CLASSES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    PARTY_TABLE
        .iter()
        .map(|(code, _, class)| (*code, *class))
        .collect()
});

/// Alias groups: one filterable label covering the regional lists of the
/// same brand.
pub static FILTER_ALIASES: LazyLock<HashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| {
        let mut aliases: HashMap<&'static str, &'static [&'static str]> = HashMap::new();
        aliases.insert(
            "PSOE",
            &[
                "PSOE",
                "PSE-EE-(PSOE)",
                "PSC",
                "PSIB-PSOE",
                "PSdeG-PSOE",
                "PSN-PSOE",
            ][..],
        );
        aliases.insert(
            "SUMAR",
            &[
                "SUMAR",
                "SUMAR-ECP",
                "SUMAR-COMPROMÍS",
                "MÉS-PER-MALLORCA-MÉS-PER-MENORCA-SUMAR",
                "SUMAR-ANDALUCÍA",
                "SUMAR-ARAGÓN",
            ][..],
        );
        aliases
    });

/// Tokens exposed by the party filter selector, in display order.
pub const FILTER_TOKENS: &[&str] = &[
    "all", "PSOE", "PP", "VOX", "SUMAR", "ERC", "JxCAT-JUNTS", "EH-Bildu", "EAJ-PNV", "B.N.G.",
];

pub fn party_color(code: &str) -> &'static str {
    COLORS.get(code).copied().unwrap_or(DEFAULT_COLOR)
}

pub fn party_class(code: &str) -> &'static str {
    CLASSES.get(code).copied().unwrap_or("")
}
