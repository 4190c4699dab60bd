use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::ConfigError;
use crate::engine::DuplicatePolicy;

pub const JSON_FILE_PATH_KEY: &str = "jsonFilePath";
pub const DUPLICATE_POLICY_KEY: &str = "duplicatePolicy";

/// Key-value settings read from a `KEY=VALUE` properties file.
///
/// The file is parsed without exporting anything into the process environment.
/// Unquoted and double-quoted values still expand `$NAME` / `${NAME}` (from the
/// environment first, then earlier keys); single-quoted values are taken literally.
#[derive(Debug, Clone)]
pub struct Settings {
    entries: HashMap<String, String>,
    /// Directory relative paths in the file are resolved against.
    base_dir: PathBuf
}

impl Settings {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("Loading configuration from [{}]", path.display());

        let unreadable = |source: dotenv::Error| ConfigError::Unreadable {
            path: path.to_path_buf(),
            source
        };

        // the iterator form is the only dotenv reader that leaves the process environment untouched
        #[allow(deprecated)]
        let entries = dotenv::from_path_iter(path)
            .map_err(unreadable)?
            .collect::<Result<HashMap<String, String>, _>>()
            .map_err(unreadable)?;

        let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();

        Ok(Self::from_entries(entries, base_dir))
    }

    pub fn from_entries(entries: HashMap<String, String>, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            entries,
            base_dir: base_dir.into()
        }
    }

    /// Returns the trimmed value for `key`; blank values count as missing.
    pub fn get(&self, key: &str) -> Result<&str, ConfigError> {
        self.entries.get(key)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| ConfigError::Missing { key: key.to_string() })
    }

    pub fn json_file_path(&self) -> Result<PathBuf, ConfigError> {
        let value = Path::new(self.get(JSON_FILE_PATH_KEY)?);

        if value.is_absolute() {
            Ok(value.to_path_buf())
        } else {
            Ok(self.base_dir.join(value))
        }
    }

    pub fn duplicate_policy(&self) -> Result<DuplicatePolicy, ConfigError> {
        match self.get(DUPLICATE_POLICY_KEY) {
            Ok(value) => DuplicatePolicy::from_name(value).ok_or_else(|| ConfigError::InvalidValue {
                key: DUPLICATE_POLICY_KEY.to_string(),
                value: value.to_string()
            }),
            Err(ConfigError::Missing { .. }) => Ok(DuplicatePolicy::default()),
            Err(error) => Err(error)
        }
    }
}
