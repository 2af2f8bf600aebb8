mod error;
mod pypi_api;

use std::path::{Path, PathBuf};

pub use crate::error::StampError;
pub use crate::pypi_api::{PackageInfo, PackageMetadata, ReleaseFile};

/// File name of the stamp written next to the metadata document.
pub const STAMP_FILE_NAME: &str = "version.str";

/// Version and upload time of a release, as recorded in `version.str`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VersionStamp {
    pub version: String,
    pub timestamp: String,
}

impl VersionStamp {
    pub fn from_metadata(meta: &PackageMetadata) -> Result<Self, StampError> {
        let timestamp = meta.upload_time()?.replace('T', " ");
        Ok(Self {
            version: meta.info.version.clone(),
            timestamp,
        })
    }

    /// Two lines, no trailing newline.
    pub fn render(&self) -> String {
        format!("{}\n{}", self.version, self.timestamp)
    }
}

/// Location of the stamp for a given metadata document.
pub fn stamp_path(input: &Path) -> PathBuf {
    input
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(STAMP_FILE_NAME)
}

/// The `<download_url>;<version>` line consumed by the build system.
pub fn build_line(meta: &PackageMetadata) -> String {
    format!("{};{}", meta.info.download_url, meta.info.version)
}

/// Reads the metadata document at `input`, writes `version.str` beside it and
/// returns the build line.
///
/// Every lookup is done before the stamp is written, so a malformed document
/// never leaves a stamp behind.
pub async fn process(input: impl AsRef<Path>) -> Result<String, StampError> {
    let input = input.as_ref();
    log::debug!("reading package metadata from {}", input.display());
    let bytes = tokio::fs::read(input).await.map_err(|source| StampError::Io {
        path: input.to_path_buf(),
        source,
    })?;
    let meta = PackageMetadata::from_slice(&bytes).map_err(|source| StampError::Parse {
        path: input.to_path_buf(),
        source,
    })?;
    let stamp = VersionStamp::from_metadata(&meta)?;

    let output = stamp_path(input);
    log::info!(
        "writing version {} ({}) to {}",
        stamp.version,
        stamp.timestamp,
        output.display()
    );
    tokio::fs::write(&output, stamp.render())
        .await
        .map_err(|source| StampError::Io {
            path: output,
            source,
        })?;

    Ok(build_line(&meta))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(version: &str, upload_time: &str) -> PackageMetadata {
        let doc = serde_json::json!({
            "info": {"version": version, "download_url": "http://example.com/x.tar.gz"},
            "releases": {(version): [{"upload_time": upload_time}]},
        });
        serde_json::from_value(doc).unwrap()
    }

    #[test]
    fn stamp_renders_two_lines_without_trailing_newline() {
        let stamp = VersionStamp::from_metadata(&metadata("2.6.2", "2016-08-01T12:00:00")).unwrap();
        assert_eq!(stamp.render(), "2.6.2\n2016-08-01 12:00:00");
    }

    #[test]
    fn every_separator_becomes_one_space() {
        let stamp = VersionStamp::from_metadata(&metadata("1.0", "2016-08-01T12:00T00")).unwrap();
        assert_eq!(stamp.timestamp, "2016-08-01 12:00 00");
    }

    #[test]
    fn build_line_joins_url_and_version() {
        assert_eq!(
            build_line(&metadata("2.6.2", "2016-08-01T12:00:00")),
            "http://example.com/x.tar.gz;2.6.2"
        );
    }

    #[test]
    fn stamp_lives_next_to_input() {
        assert_eq!(
            stamp_path(Path::new("build/deps/psycopg2.json")),
            PathBuf::from("build/deps/version.str")
        );
        assert_eq!(stamp_path(Path::new("psycopg2.json")), PathBuf::from("version.str"));
    }
}
