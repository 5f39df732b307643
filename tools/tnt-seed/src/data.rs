//! Seed data files.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tnt_02_payloads::{CreateRecordTypeBody, Metadata, OrganizationBody};

#[derive(Debug, Error)]
pub enum DataError {
    #[error("Use the DATA environment variable or --data to specify a JSON file")]
    NotSet,

    #[error("Seed data must be a .json file, got {0}")]
    NotJson(PathBuf),

    #[error("Cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid seed data in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// One organization to bootstrap, with its admin user and record types.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeedOrganization {
    pub org_id: String,
    pub org_name: String,
    #[serde(default)]
    pub org_address: String,
    #[serde(default)]
    pub metadata: Option<Metadata>,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub schemas: Vec<CreateRecordTypeBody>,
}

impl SeedOrganization {
    pub fn organization(&self) -> OrganizationBody {
        OrganizationBody {
            id: self.org_id.clone(),
            name: self.org_name.clone(),
            address: self.org_address.clone(),
            metadata: self.metadata.iter().cloned().collect(),
        }
    }
}

/// Check that `data` names a `.json` file.
pub fn data_path(data: Option<&Path>) -> Result<&Path, DataError> {
    let path = data.ok_or(DataError::NotSet)?;
    match path.extension() {
        Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(path),
        _ => Err(DataError::NotJson(path.to_path_buf())),
    }
}

/// Read and parse a seed file.
pub fn load<T: DeserializeOwned>(data: Option<&Path>) -> Result<T, DataError> {
    let path = data_path(data)?;
    let text = std::fs::read_to_string(path).map_err(|source| DataError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| DataError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_organizations(data: Option<&Path>) -> Result<Vec<SeedOrganization>, DataError> {
    load(data)
}

pub fn load_record_types(data: Option<&Path>) -> Result<Vec<CreateRecordTypeBody>, DataError> {
    load(data)
}
