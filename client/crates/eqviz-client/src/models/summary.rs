use crate::models::decimal::{deserialize_decimal, deserialize_optional_decimal};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Averages {
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    pub flowrate: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    pub pressure: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    pub temperature: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    pub min: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    pub max: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueRanges {
    #[serde(default)]
    pub flowrate: ValueRange,
    #[serde(default)]
    pub pressure: ValueRange,
    #[serde(default)]
    pub temperature: ValueRange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_count: i64,
    #[serde(default)]
    pub averages: Averages,
    #[serde(default)]
    pub ranges: ValueRanges,
}

/// Per-type aggregate inside a summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeStats {
    pub equipment_type: String,
    pub count: i64,
    #[serde(deserialize_with = "deserialize_decimal")]
    pub percentage: f64,
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    pub avg_flowrate: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    pub avg_pressure: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    pub avg_temperature: Option<f64>,
}

/// Server-computed statistics for one dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub dataset_id: i64,
    pub filename: String,
    pub upload_date: String,
    pub statistics: Statistics,
    #[serde(default)]
    pub type_distribution: Vec<TypeStats>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeShare {
    pub equipment_type: String,
    pub count: i64,
    #[serde(deserialize_with = "deserialize_decimal")]
    pub percentage: f64,
}

/// Equipment type counts without the averages, as used by the doughnut chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDistribution {
    pub dataset_id: i64,
    #[serde(default)]
    pub types: Vec<TypeShare>,
}
