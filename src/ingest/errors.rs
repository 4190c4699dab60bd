use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Transactions file [{}] could not be read: {source}", path.display())]
    FileNotReadable {
        path: PathBuf,
        source: io::Error
    },
    #[error("Transactions file [{}] is not a valid array of transactions: {source}", path.display())]
    MalformedData {
        path: PathBuf,
        source: serde_json::Error
    }
}
