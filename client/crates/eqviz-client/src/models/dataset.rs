use crate::models::decimal::deserialize_optional_decimal;

use serde::{Deserialize, Serialize};

/// One row of upload history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetListItem {
    pub id: i64,
    pub filename: String,
    pub upload_date: String,
    #[serde(default)]
    pub row_count: Option<i64>,
    #[serde(default)]
    pub file_size: Option<i64>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetList {
    pub count: usize,
    pub results: Vec<DatasetListItem>,
}

/// A single piece of process equipment parsed from the uploaded CSV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentRecord {
    pub id: i64,
    pub equipment_name: String,
    pub equipment_type: String,
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    pub flowrate: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    pub pressure: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    pub temperature: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetDetail {
    #[serde(flatten)]
    pub dataset: DatasetListItem,
    #[serde(default)]
    pub equipment: Vec<EquipmentRecord>,
}
