use crate::domain::errors::ArtifactError;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

/// Reads and decodes a JSON model artifact.
pub fn read_json_artifact<T: DeserializeOwned>(
    artifact: &'static str,
    path: &Path,
) -> Result<T, ArtifactError> {
    if !path.exists() {
        return Err(ArtifactError::NotFound {
            artifact,
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path).map_err(|source| ArtifactError::Io {
        artifact,
        path: path.to_path_buf(),
        source,
    })?;

    let decoded =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| ArtifactError::Decode {
            artifact,
            path: path.to_path_buf(),
            source,
        })?;

    info!("Loaded {} artifact from {:?}", artifact, path);
    Ok(decoded)
}
