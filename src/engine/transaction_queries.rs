use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use tracing::trace;

use crate::engine::DuplicatePolicy;
use crate::models::TransactionRecord;
use crate::types::{Amount, IssueId};

const TOP_TRANSACTIONS: usize = 3;

/// Read-only analytical queries over one immutable sequence of transactions.
///
/// Every query recomputes its answer from the stored records; nothing is cached
/// and no query mutates the engine, so a shared reference may be read from any
/// number of threads.
#[derive(Debug, Clone)]
pub struct TransactionQueries {
    transactions: Vec<TransactionRecord>,
    duplicate_policy: DuplicatePolicy
}

impl TransactionQueries {
    /// Creates an engine that owns the given records, in file order.
    pub fn new(transactions: Vec<TransactionRecord>) -> Self {
        Self {
            transactions,
            duplicate_policy: DuplicatePolicy::default()
        }
    }

    /// Selects how repeated transaction numbers count towards the amount queries.
    pub fn with_duplicate_policy(mut self, duplicate_policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = duplicate_policy;
        self
    }

    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicate_policy
    }

    #[cfg(test)]
    pub fn transactions(&self) -> &[TransactionRecord] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Sum of every rounded amount.
    pub fn total_amount(&self) -> Amount {
        self.counted()
            .map(|transaction| transaction.amount.rounded())
            .sum()
    }

    /// Sum of the rounded amounts sent by `sender_full_name`, matched case-insensitively.
    pub fn total_amount_sent_by(&self, sender_full_name: &str) -> Amount {
        self.counted()
            .filter(|transaction| transaction.is_sent_by(sender_full_name))
            .map(|transaction| transaction.amount.rounded())
            .sum()
    }

    /// Largest rounded amount, zero when there are no transactions.
    pub fn max_amount(&self) -> Amount {
        self.counted()
            .map(|transaction| transaction.amount.rounded())
            .max()
            .unwrap_or_else(Amount::zero)
    }

    /// Number of distinct names acting as sender or beneficiary. Names compare exactly.
    pub fn unique_client_count(&self) -> usize {
        self.transactions.iter()
            .flat_map(|transaction| [transaction.sender_full_name.as_str(), transaction.beneficiary_full_name.as_str()])
            .collect::<HashSet<_>>()
            .len()
    }

    /// Whether the client, as sender or beneficiary, has any transaction with an unsolved issue.
    pub fn has_open_compliance_issues(&self, client_full_name: &str) -> bool {
        self.transactions.iter()
            .filter(|transaction| transaction.involves(client_full_name))
            .any(TransactionRecord::has_open_issue)
    }

    /// All transactions grouped by beneficiary, each group in sequence order.
    pub fn transactions_by_beneficiary(&self) -> BTreeMap<&str, Vec<&TransactionRecord>> {
        let mut groups: BTreeMap<&str, Vec<&TransactionRecord>> = BTreeMap::new();

        for transaction in self.counted() {
            groups.entry(transaction.beneficiary_full_name.as_str())
                .or_default()
                .push(transaction);
        }

        groups
    }

    /// The last transaction addressed to each beneficiary.
    pub fn latest_transaction_by_beneficiary(&self) -> BTreeMap<&str, &TransactionRecord> {
        self.counted()
            .map(|transaction| (transaction.beneficiary_full_name.as_str(), transaction))
            .collect()
    }

    /// Identifiers of issues that are raised and not yet solved.
    pub fn unsolved_issue_ids(&self) -> BTreeSet<IssueId> {
        self.transactions.iter()
            .filter(|transaction| transaction.has_issue() && transaction.has_open_issue())
            .filter_map(|transaction| transaction.issue_id)
            .collect()
    }

    /// Messages of solved issues in sequence order, duplicates included.
    pub fn solved_issue_messages(&self) -> Vec<&str> {
        self.transactions.iter()
            .filter(|transaction| transaction.issue_solved)
            .filter_map(|transaction| transaction.issue_message.as_deref())
            .collect()
    }

    /// Up to `limit` transactions with the highest rounded amounts.
    ///
    /// Equal amounts keep their original relative order.
    pub fn top_transactions_by_amount(&self, limit: usize) -> Vec<&TransactionRecord> {
        let mut ranked: Vec<&TransactionRecord> = self.counted().collect();

        // sort_by is stable, ties stay in sequence order
        ranked.sort_by(|left, right| right.amount.rounded().cmp(&left.amount.rounded()));
        ranked.truncate(limit);
        ranked
    }

    pub fn top_3_transactions_by_amount(&self) -> Vec<&TransactionRecord> {
        self.top_transactions_by_amount(TOP_TRANSACTIONS)
    }

    /// Sender with the highest total of rounded amounts.
    ///
    /// On equal totals the sender seen first in the sequence wins.
    pub fn top_sender(&self) -> Option<&str> {
        let mut totals: Vec<(&str, Amount)> = Vec::new();
        let mut positions: HashMap<&str, usize> = HashMap::new();

        for transaction in self.counted() {
            let sender = transaction.sender_full_name.as_str();
            let position = *positions.entry(sender).or_insert_with(|| {
                totals.push((sender, Amount::zero()));
                totals.len() - 1
            });

            totals[position].1 += transaction.amount.rounded();
        }

        let mut top: Option<(&str, Amount)> = None;

        for (sender, total) in totals {
            match top {
                Some((_, best)) if total <= best => {}
                _ => top = Some((sender, total))
            }
        }

        top.map(|(sender, _)| sender)
    }

    /// Distinct sender names in first-seen order.
    pub fn senders(&self) -> Vec<&str> {
        distinct_in_order(self.transactions.iter().map(|transaction| transaction.sender_full_name.as_str()))
    }

    /// Distinct sender and beneficiary names in first-seen order.
    pub fn clients(&self) -> Vec<&str> {
        distinct_in_order(self.transactions.iter().flat_map(|transaction| {
            [transaction.sender_full_name.as_str(), transaction.beneficiary_full_name.as_str()]
        }))
    }

    /// Records that take part in amount aggregations under the current policy.
    fn counted(&self) -> impl Iterator<Item = &TransactionRecord> {
        let mut seen = HashSet::new();
        let policy = self.duplicate_policy;

        self.transactions.iter().filter(move |transaction| match policy {
            DuplicatePolicy::KeepAll => true,
            DuplicatePolicy::FirstByTransactionNumber => {
                let first = seen.insert(transaction.transaction_number);

                if !first {
                    trace!("Skipping repeated transaction number [{}]", transaction.transaction_number);
                }

                first
            }
        })
    }
}

fn distinct_in_order<'a>(names: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    names.filter(|name| seen.insert(*name)).collect()
}
