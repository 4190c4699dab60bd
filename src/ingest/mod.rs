mod errors;
mod json_source;

use crate::models::TransactionRecord;

pub use errors::IngestError;
pub use json_source::JsonFileSource;

/// Produces the ordered transaction sequence the query engine is built from.
pub trait TransactionSource {
    fn load(&self) -> Result<Vec<TransactionRecord>, IngestError>;
}
