use serde::Deserialize;
use std::collections::HashMap;

use crate::error::StampError;

/// The parts of a PyPI JSON API document (`/pypi/<project>/json`) that we read.
/// Everything else in the document is ignored. Release file records stay
/// untyped until one is looked up.
#[derive(Deserialize, Debug)]
pub struct PackageMetadata {
    pub info: PackageInfo,
    pub releases: HashMap<String, Vec<serde_json::Value>>,
}

#[derive(Deserialize, Debug)]
pub struct PackageInfo {
    pub version: String,
    pub download_url: String,
}

#[derive(Deserialize, Debug)]
pub struct ReleaseFile {
    pub upload_time: String,
}

impl PackageMetadata {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Upload time of the first file published for `info.version`.
    pub fn upload_time(&self) -> Result<String, StampError> {
        let version = &self.info.version;
        let files = self
            .releases
            .get(version)
            .ok_or_else(|| StampError::MissingRelease(version.clone()))?;
        let first = files
            .first()
            .ok_or_else(|| StampError::EmptyRelease(version.clone()))?;
        let file = ReleaseFile::deserialize(first).map_err(|source| StampError::ReleaseFile {
            version: version.clone(),
            source,
        })?;
        Ok(file.upload_time)
    }
}
