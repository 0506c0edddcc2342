//! Checks that run before any request is made.

use std::path::Path;

use thiserror::Error;

/// Largest CSV accepted for upload (10 MiB)
pub const MAX_UPLOAD_SIZE: u64 = 10 * 1024 * 1024;
pub const MIN_PASSWORD_LENGTH: usize = 8;
const CSV_EXTENSION: &str = ".csv";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("No file selected")]
    NoFile,

    #[error("File does not exist")]
    FileNotFound,

    #[error("Only CSV files are allowed")]
    NotCsv,

    #[error("File size must be less than 10MB")]
    TooLarge { size: u64 },

    #[error("Password must be at least 8 characters")]
    PasswordTooShort,

    #[error("Enter a valid email address")]
    InvalidEmail,
}

/// Name and size of a file picked for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    pub name: String,
    pub size: u64,
}

impl FileInfo {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

pub fn validate_csv_file(file: Option<&FileInfo>) -> Result<(), ValidationError> {
    let file = file.ok_or(ValidationError::NoFile)?;

    if !file.name.ends_with(CSV_EXTENSION) {
        return Err(ValidationError::NotCsv);
    }

    if file.size > MAX_UPLOAD_SIZE {
        return Err(ValidationError::TooLarge { size: file.size });
    }

    Ok(())
}

/// Same checks as [`validate_csv_file`], reading name and size from disk.
pub fn validate_csv_path(path: &Path) -> Result<FileInfo, ValidationError> {
    let metadata = match std::fs::metadata(path) {
        Ok(m) if m.is_file() => m,
        _ => return Err(ValidationError::FileNotFound),
    };

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let info = FileInfo::new(name, metadata.len());
    validate_csv_file(Some(&info))?;
    Ok(info)
}

/// Length is counted in UTF-16 code units, the way the web frontend measures
/// it, so a character outside the BMP counts twice.
pub fn validate_password(password: &str) -> bool {
    password.encode_utf16().count() >= MIN_PASSWORD_LENGTH
}

/// Accepts `local@domain.tld`: a single `@`, no whitespace, and a dot inside
/// the domain with text on both sides.
pub fn validate_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
