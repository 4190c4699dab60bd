mod amount;
mod errors;

pub use amount::Amount;

pub type TransactionNumber = u64;
pub type IssueId = u32;
pub type Age = u32;
