use std::{
    env, fs,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::error::AppError;

// Environment variable and `.env` entry holding the IPGeolocation key
const KEY_NAME: &str = "API_KEY";

// Shell profile line assigning the key, e.g. `export API_KEY="abc123"`
const EXPORT_PREFIX: &str = "export API_KEY=";

/// Ordered lookup for the IPGeolocation API key.
///
/// Sources are tried first-match-wins:
/// 1. an explicit key passed on the command line
/// 2. an `API_KEY` entry in the `.env` file in the working directory
/// 3. an `export API_KEY="..."` line in the shell profile (`~/.bashrc`)
/// 4. the `API_KEY` process environment variable
///
/// A missing file, a file without the key, or a malformed profile line is not
/// an error; resolution continues with the next source.
pub struct KeyLookup {
    env_file: PathBuf,
    shell_profile: PathBuf,
}

impl Default for KeyLookup {
    fn default() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            env_file: PathBuf::from(".env"),
            shell_profile: home.join(".bashrc"),
        }
    }
}

impl KeyLookup {
    /// Resolves the API key, trying each source in order.
    ///
    /// # Errors
    /// Returns `ApiKeyNotFound` if no source yields a non-empty key.
    pub fn resolve(&self, explicit: Option<&str>) -> Result<String, AppError> {
        self.resolve_with_env(explicit, env::var(KEY_NAME).ok())
    }

    // The environment value is injected so the precedence chain can be
    // exercised without mutating the process environment.
    fn resolve_with_env(
        &self,
        explicit: Option<&str>,
        env_key: Option<String>,
    ) -> Result<String, AppError> {
        explicit
            .map(str::to_string)
            .filter(|key| !key.is_empty())
            .or_else(|| from_env_file(&self.env_file))
            .or_else(|| from_shell_profile(&self.shell_profile))
            .or_else(|| env_key.filter(|key| !key.is_empty()))
            .ok_or(AppError::ApiKeyNotFound)
    }
}

/// Reads the key from a dotenv-style file without touching the process
/// environment, so a file value keeps precedence over a real variable.
fn from_env_file(path: &Path) -> Option<String> {
    let entries = dotenvy::from_path_iter(path).ok()?;
    for entry in entries {
        let Ok((key, value)) = entry else {
            debug!("Skipping malformed line in {}", path.display());
            continue;
        };
        if key == KEY_NAME && !value.is_empty() {
            return Some(value);
        }
    }
    None
}

/// Scans the shell profile top to bottom for an `export API_KEY=` line and
/// returns the first non-empty value, with surrounding quotes stripped.
fn from_shell_profile(path: &Path) -> Option<String> {
    let profile = fs::read_to_string(path).ok()?;
    profile.lines().find_map(|line| {
        let value = line.trim().strip_prefix(EXPORT_PREFIX)?;
        let value = value.trim().trim_matches('"').trim_matches('\'');
        (!value.is_empty()).then(|| value.to_string())
    })
}
