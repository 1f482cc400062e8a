use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    Eleccions,
    Renda,
}

impl Dataset {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eleccions => "eleccions",
            Self::Renda => "renda",
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Eleccions),
            1 => Some(Self::Renda),
            _ => None,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "eleccions" | "elections" => Some(Self::Eleccions),
            "renda" | "income" => Some(Self::Renda),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Eleccions => "Resultados 23J",
            Self::Renda => "Renta media",
        }
    }

    /// Vector layer id the dataset is served under.
    pub const fn layer(self) -> &'static str {
        match self {
            Self::Eleccions => "MapaResultats23JESP",
            Self::Renda => "MapaRendaSeccions",
        }
    }

    pub const fn other(self) -> Self {
        match self {
            Self::Eleccions => Self::Renda,
            Self::Renda => Self::Eleccions,
        }
    }
}

/// Display classification of a year-over-year delta. Styling only, no
/// numeric effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DifClass {
    #[default]
    Default,
    Negative,
    Positive,
}

impl DifClass {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Negative => "negative",
            Self::Positive => "positive",
        }
    }
}
