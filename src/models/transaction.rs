use serde::{de, Deserialize, Deserializer};

use crate::types::{Age, Amount, IssueId, TransactionNumber};

/// Represents a single money transfer read from the input JSON file.
///
/// Records are decoded strictly: unknown keys, missing required keys, negative
/// amounts and blank names all fail deserialization instead of defaulting.
/// `issue_solved` is always present but only meaningful when `issue_id` is set.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TransactionRecord {
    /// Money transfer number. Not guaranteed unique across the file.
    #[serde(rename = "mtn", alias = "transactionNumber")]
    pub transaction_number: TransactionNumber,
    pub amount: Amount,
    #[serde(deserialize_with = "non_empty_name")]
    pub sender_full_name: String,
    pub sender_age: Age,
    #[serde(deserialize_with = "non_empty_name")]
    pub beneficiary_full_name: String,
    pub beneficiary_age: Age,
    /// Compliance issue raised on this transfer, if any.
    #[serde(default)]
    pub issue_id: Option<IssueId>,
    pub issue_solved: bool,
    #[serde(default)]
    pub issue_message: Option<String>
}

impl TransactionRecord {
    pub fn has_issue(&self) -> bool {
        self.issue_id.is_some()
    }

    /// True when the issue flag is still open, regardless of `issue_id`.
    pub fn has_open_issue(&self) -> bool {
        !self.issue_solved
    }

    pub fn is_sent_by(&self, name: &str) -> bool {
        same_client(&self.sender_full_name, name)
    }

    pub fn involves(&self, name: &str) -> bool {
        same_client(&self.sender_full_name, name) || same_client(&self.beneficiary_full_name, name)
    }
}

/// Case-insensitive client name comparison.
pub fn same_client(left: &str, right: &str) -> bool {
    left == right || left.to_lowercase() == right.to_lowercase()
}

fn non_empty_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;

    if name.trim().is_empty() {
        return Err(de::Error::custom("client name must not be empty"));
    }

    Ok(name)
}
