use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ReactomeError;

/// Drug-target interaction databases exposed by the Reactome FI service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrugSource {
    DrugCentral,
    Targetome,
}

impl DrugSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            DrugSource::DrugCentral => "drugcentral",
            DrugSource::Targetome => "targetome",
        }
    }
}

impl fmt::Display for DrugSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DrugSource {
    type Err = ReactomeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "drugcentral" => Ok(DrugSource::DrugCentral),
            "targetome" => Ok(DrugSource::Targetome),
            _ => Err(ReactomeError::InvalidDrugSource(value.to_string())),
        }
    }
}

/// One line of the ReactomePathways GMT file: a pathway with its HGNC gene
/// symbols. `genes` is empty when the pathway has no annotated genes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathwayGeneMapping {
    pub name: String,
    #[serde(rename = "stId")]
    pub st_id: String,
    pub genes: Vec<String>,
}
