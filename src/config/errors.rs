use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file [{}] could not be read: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        source: dotenv::Error
    },
    #[error("Configuration key [{key}] is not defined")]
    Missing {
        key: String
    },
    #[error("Configuration key [{key}] has an unsupported value [{value}]")]
    InvalidValue {
        key: String,
        value: String
    }
}
