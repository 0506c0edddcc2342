use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub dataset_id: i64,
    pub filename: String,
    pub upload_date: String,
    #[serde(default)]
    pub row_count: Option<i64>,
    #[serde(default)]
    pub file_size: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
}
