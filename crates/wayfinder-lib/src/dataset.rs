use std::env;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::debug;

use crate::error::{Error, Result};

/// Default filename for world data.
const WORLD_FILENAME: &str = "world.json";

/// Environment variable that overrides the world data location.
pub const WORLD_ENV_VAR: &str = "WAYFINDER_WORLD";

/// Resolve the default world data location using platform-specific project directories.
pub fn default_world_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("org", "wayfinder", "wayfinder").ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().join(WORLD_FILENAME))
}

/// Resolve which world data file to load.
///
/// The resolution order is:
/// 1. Explicit `target` argument when provided.
/// 2. `WAYFINDER_WORLD` environment variable.
/// 3. Platform-specific project data directory.
///
/// A directory resolves to the `world.json` inside it. The returned path is
/// checked for existence.
pub fn resolve_world_path(target: Option<&Path>) -> Result<PathBuf> {
    let resolved = if let Some(explicit) = target {
        canonical_world_path(explicit)
    } else if let Some(env_path) = env::var_os(WORLD_ENV_VAR) {
        canonical_world_path(Path::new(&env_path))
    } else {
        default_world_path()?
    };

    debug!(path = %resolved.display(), "resolved world data path");
    if !resolved.exists() {
        return Err(Error::WorldNotFound { path: resolved });
    }
    Ok(resolved)
}

fn canonical_world_path(path: &Path) -> PathBuf {
    if path.is_dir() {
        return path.join(WORLD_FILENAME);
    }
    path.to_path_buf()
}
