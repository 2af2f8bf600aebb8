use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StampError {
    #[error("failed to access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse package metadata in {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("no release entry for version `{0}`")]
    MissingRelease(String),
    #[error("release `{0}` has no files")]
    EmptyRelease(String),
    #[error("first file of release `{version}` has no usable upload time")]
    ReleaseFile {
        version: String,
        #[source]
        source: serde_json::Error,
    },
}
