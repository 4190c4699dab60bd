mod transaction;
#[cfg(test)]
mod tests;

pub use transaction::TransactionRecord;
