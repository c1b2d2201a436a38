use crate::error::ArtifactError;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

/// Reads a JSON artifact, mapping each failure to the path it came from.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ArtifactError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ArtifactError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|e| ArtifactError::Json {
        path: path.to_path_buf(),
        source: e,
    })
}
