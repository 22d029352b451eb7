use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

use tracing::debug;

#[derive(thiserror::Error, Debug)]
pub enum OutputError {
    #[error("could not create output directory {0:?}")]
    CreateDir(PathBuf, #[source] io::Error),

    #[error("could not write {0:?}")]
    Write(PathBuf, #[source] io::Error),

    #[error("target name {0:?} cannot be used as a file name")]
    InvalidTargetName(String),
}

/// Creates `dir` and its parents. An existing directory is left as it is.
pub fn ensure_dir(dir: &Path) -> Result<(), OutputError> {
    fs::create_dir_all(dir).map_err(|e| OutputError::CreateDir(dir.to_path_buf(), e))
}

/// `{dir}/{target}-{minecraft_version}.srg`
pub fn output_path(
    dir: &Path,
    target: &str,
    minecraft_version: &str,
) -> Result<PathBuf, OutputError> {
    let invalid = target.is_empty()
        || target == "."
        || target == ".."
        || target.contains(['/', '\\', '\0']);
    if invalid {
        return Err(OutputError::InvalidTargetName(target.to_string()));
    }

    Ok(dir.join(format!("{}-{}.srg", target, minecraft_version)))
}

/// Writes every serialized mapping verbatim, one file per target, in target
/// order. Stops at the first failure; files already written are kept.
pub fn write_mappings(
    dir: &Path,
    minecraft_version: &str,
    mappings: &BTreeMap<String, String>,
) -> Result<Vec<PathBuf>, OutputError> {
    let mut written = Vec::with_capacity(mappings.len());

    for (target, serialized) in mappings {
        let path = output_path(dir, target, minecraft_version)?;
        fs::write(&path, serialized).map_err(|e| OutputError::Write(path.clone(), e))?;
        debug!("Wrote {} bytes to {}", serialized.len(), path.display());
        written.push(path);
    }

    Ok(written)
}
