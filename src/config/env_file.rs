//! Optional `.env` loading.
//!
//! Seeds the process environment before [`Config::from_env`] runs. Nothing
//! here fails: a missing or malformed file leaves the environment untouched
//! and is reported through [`EnvFileOutcome`].
//!
//! [`Config::from_env`]: crate::config::Config::from_env

use std::path::{Path, PathBuf};

pub const DEFAULT_ENV_FILE: &str = ".env";

/// What happened when an env file was requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvFileOutcome {
    /// All definitions were applied (existing variables are never overridden).
    Loaded(PathBuf),
    /// No file was found.
    Missing,
    /// The file exists but could not be read or parsed; nothing was applied.
    Skipped { path: PathBuf, reason: String },
}

impl EnvFileOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    /// Log the outcome with the current subscriber.
    pub fn report(&self) {
        match self {
            Self::Loaded(path) => tracing::debug!(path = %path.display(), "loaded env file"),
            Self::Missing => tracing::debug!("no env file found"),
            Self::Skipped { path, reason } => tracing::warn!(
                path = %path.display(),
                reason = %reason,
                "ignoring unreadable env file"
            ),
        }
    }
}

/// Find the nearest `.env`, starting at `start` and walking up.
///
/// Mirrors dotenvy's own finder, but hands back the path so a skipped file
/// can be reported.
pub fn discover(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(DEFAULT_ENV_FILE))
        .find(|candidate| candidate.is_file())
}

/// Load `path` into the process environment.
///
/// The file is read once and fully parsed before any variable is set, so a
/// bad line anywhere means no partial application.
pub fn load(path: &Path) -> EnvFileOutcome {
    let contents = match std::fs::read(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return EnvFileOutcome::Missing,
        Err(e) => return skipped(path, e),
    };

    let parsed: Result<Vec<_>, _> = dotenvy::from_read_iter(contents.as_slice()).collect();
    if let Err(e) = parsed {
        return skipped(path, e);
    }

    match dotenvy::from_read(contents.as_slice()) {
        Ok(()) => EnvFileOutcome::Loaded(path.to_path_buf()),
        Err(e) => skipped(path, e),
    }
}

/// Discover `.env` from the working directory and load it.
pub fn load_default() -> EnvFileOutcome {
    let Ok(cwd) = std::env::current_dir() else {
        return EnvFileOutcome::Missing;
    };
    match discover(&cwd) {
        Some(path) => load(&path),
        None => EnvFileOutcome::Missing,
    }
}

fn skipped(path: &Path, err: impl std::fmt::Display) -> EnvFileOutcome {
    EnvFileOutcome::Skipped {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}
