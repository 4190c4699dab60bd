use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::ingest::{IngestError, TransactionSource};
use crate::models::TransactionRecord;

/// Reads transactions from a file holding one top-level JSON array.
pub struct JsonFileSource {
    path: PathBuf
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into()
        }
    }
}

impl TransactionSource for JsonFileSource {
    fn load(&self) -> Result<Vec<TransactionRecord>, IngestError> {
        debug!("Reading transactions from [{}]", self.path.display());

        let content = fs::read_to_string(&self.path).map_err(|source| IngestError::FileNotReadable {
            path: self.path.clone(),
            source
        })?;

        let transactions: Vec<TransactionRecord> = serde_json::from_str(&content).map_err(|source| IngestError::MalformedData {
            path: self.path.clone(),
            source
        })?;

        info!("Loaded [{}] transactions from [{}]", transactions.len(), self.path.display());

        Ok(transactions)
    }
}
