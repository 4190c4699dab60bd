use std::io::{self, Write};

use crate::engine::TransactionQueries;

/// Writes every query result as `key: value` lines.
pub fn write_report<W: Write>(queries: &TransactionQueries, output: &mut W) -> io::Result<()> {
    writeln!(output, "transactions: {}", queries.len())?;
    writeln!(output, "duplicate_policy: {}", queries.duplicate_policy())?;
    writeln!(output, "total_amount: {}", queries.total_amount())?;
    writeln!(output, "max_amount: {}", queries.max_amount())?;
    writeln!(output, "unique_clients: {}", queries.unique_client_count())?;

    for sender in queries.senders() {
        writeln!(output, "total_sent_by[{}]: {}", sender, queries.total_amount_sent_by(sender))?;
    }

    for client in queries.clients() {
        writeln!(output, "open_compliance_issues[{}]: {}", client, queries.has_open_compliance_issues(client))?;
    }

    for (beneficiary, transactions) in queries.transactions_by_beneficiary() {
        let numbers: Vec<String> = transactions.iter()
            .map(|transaction| transaction.transaction_number.to_string())
            .collect();

        writeln!(output, "transactions_by_beneficiary[{}]: {}", beneficiary, numbers.join(","))?;
    }

    for (beneficiary, transaction) in queries.latest_transaction_by_beneficiary() {
        writeln!(output, "latest_transaction_by_beneficiary[{}]: {}", beneficiary, transaction.transaction_number)?;
    }

    let unsolved: Vec<String> = queries.unsolved_issue_ids()
        .iter()
        .map(|issue_id| issue_id.to_string())
        .collect();

    writeln!(output, "unsolved_issue_ids: {}", unsolved.join(","))?;

    for message in queries.solved_issue_messages() {
        writeln!(output, "solved_issue_message: {message}")?;
    }

    for transaction in queries.top_3_transactions_by_amount() {
        writeln!(
            output,
            "top_transaction: {},{},{},{}",
            transaction.transaction_number,
            transaction.amount.rounded(),
            transaction.sender_full_name,
            transaction.beneficiary_full_name
        )?;
    }

    writeln!(output, "top_sender: {}", queries.top_sender().unwrap_or(""))?;

    output.flush()
}
