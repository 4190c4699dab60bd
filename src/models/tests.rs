use super::transaction::same_client;
use super::TransactionRecord;

use std::str::FromStr;

use anyhow::Result;

use crate::types::Amount;

const COMPLETE_RECORD: &str = r#"{
    "mtn": 663458,
    "amount": 430.2,
    "senderFullName": "Tom Shelby",
    "senderAge": 22,
    "beneficiaryFullName": "Alfie Solomons",
    "beneficiaryAge": 33,
    "issueId": 1,
    "issueSolved": false,
    "issueMessage": "Looks like money laundering"
}"#;

#[test]
fn test_complete_record_deserializes() -> Result<()> {
    let record: TransactionRecord = serde_json::from_str(COMPLETE_RECORD)?;

    assert_eq!(record.transaction_number, 663458);
    assert_eq!(record.amount.rounded(), Amount::from_str("430.2")?);
    assert_eq!(record.sender_full_name, "Tom Shelby");
    assert_eq!(record.beneficiary_age, 33);
    assert_eq!(record.issue_id, Some(1));
    assert!(!record.issue_solved);
    assert_eq!(record.issue_message.as_deref(), Some("Looks like money laundering"));

    Ok(())
}

#[test]
fn test_null_and_absent_issue_fields_become_none() -> Result<()> {
    let with_nulls: TransactionRecord = serde_json::from_str(r#"{
        "mtn": 1, "amount": 67.8, "senderFullName": "Aunt Polly", "senderAge": 34,
        "beneficiaryFullName": "Aberama Gold", "beneficiaryAge": 58,
        "issueId": null, "issueSolved": true, "issueMessage": null
    }"#)?;

    let without_keys: TransactionRecord = serde_json::from_str(r#"{
        "mtn": 1, "amount": 67.8, "senderFullName": "Aunt Polly", "senderAge": 34,
        "beneficiaryFullName": "Aberama Gold", "beneficiaryAge": 58, "issueSolved": true
    }"#)?;

    assert!(!with_nulls.has_issue());
    assert!(with_nulls.issue_message.is_none());
    assert_eq!(with_nulls, without_keys);

    Ok(())
}

#[test]
fn test_transaction_number_alias_is_accepted() -> Result<()> {
    let record: TransactionRecord = serde_json::from_str(r#"{
        "transactionNumber": 42, "amount": 10.5, "senderFullName": "A", "senderAge": 1,
        "beneficiaryFullName": "B", "beneficiaryAge": 2, "issueSolved": true
    }"#)?;

    assert_eq!(record.transaction_number, 42);

    Ok(())
}

#[test]
fn test_unknown_field_is_rejected() {
    let result = serde_json::from_str::<TransactionRecord>(r#"{
        "mtn": 1, "amount": 1.0, "senderFullName": "A", "senderAge": 1,
        "beneficiaryFullName": "B", "beneficiaryAge": 2, "issueSolved": true, "currency": "EUR"
    }"#);

    assert!(result.is_err());
}

#[test]
fn test_missing_required_field_is_rejected() {
    let result = serde_json::from_str::<TransactionRecord>(r#"{
        "mtn": 1, "amount": 1.0, "senderFullName": "A", "senderAge": 1,
        "beneficiaryFullName": "B", "beneficiaryAge": 2
    }"#);

    assert!(result.is_err());
}

#[test]
fn test_blank_name_and_negative_amount_are_rejected() {
    let blank_name = serde_json::from_str::<TransactionRecord>(r#"{
        "mtn": 1, "amount": 1.0, "senderFullName": "  ", "senderAge": 1,
        "beneficiaryFullName": "B", "beneficiaryAge": 2, "issueSolved": true
    }"#);

    let negative_amount = serde_json::from_str::<TransactionRecord>(r#"{
        "mtn": 1, "amount": -1.0, "senderFullName": "A", "senderAge": 1,
        "beneficiaryFullName": "B", "beneficiaryAge": 2, "issueSolved": true
    }"#);

    assert!(blank_name.is_err());
    assert!(negative_amount.is_err());
}

#[test]
fn test_client_matching_is_case_insensitive() -> Result<()> {
    let record: TransactionRecord = serde_json::from_str(COMPLETE_RECORD)?;

    assert!(record.is_sent_by("tom shelby"));
    assert!(!record.is_sent_by("Alfie Solomons"));
    assert!(record.involves("ALFIE SOLOMONS"));
    assert!(!record.involves("Aunt Polly"));
    assert!(same_client("Ärger", "ärger"));

    Ok(())
}
