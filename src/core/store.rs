//! In-memory, ordered collection of transactions for the current session.

use crate::core::ids::{IdGenerator, SequentialIdGenerator};
use crate::domain::{Displayable, Identifiable, Transaction, TransactionDraft, TransactionId};

/// Newest-first transaction list. `add` and `delete` are its only mutators.
#[derive(Debug)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    ids: Box<dyn IdGenerator>,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::with_generator(Box::new(SequentialIdGenerator::new()))
    }

    pub fn with_generator(ids: Box<dyn IdGenerator>) -> Self {
        Self {
            transactions: Vec::new(),
            ids,
        }
    }

    /// Builds a store holding `records` as-is, in the given order.
    ///
    /// Records whose id repeats an earlier one are dropped.
    pub fn seeded(ids: Box<dyn IdGenerator>, records: Vec<Transaction>) -> Self {
        let mut store = Self::with_generator(ids);
        for record in records {
            if store.contains(&record.id) {
                tracing::warn!(id = %record.id, "skipping seed record with duplicate id");
                continue;
            }
            store.transactions.push(record);
        }
        store
    }

    /// Assigns a fresh id, prepends the record and returns it.
    pub fn add(&mut self, draft: TransactionDraft) -> Transaction {
        let id = self.fresh_id();
        let transaction = Transaction::from_draft(id, draft);
        self.transactions.insert(0, transaction.clone());
        tracing::info!(
            label = %transaction.display_label(),
            amount = transaction.amount,
            "transaction added"
        );
        transaction
    }

    /// Removes the record with `id`. Unknown ids leave the store untouched.
    pub fn delete(&mut self, id: &TransactionId) -> Option<Transaction> {
        let position = self.transactions.iter().position(|txn| txn.id() == id)?;
        let removed = self.transactions.remove(position);
        tracing::info!(id = %removed.id, "transaction deleted");
        Some(removed)
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn get(&self, id: &TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id() == id)
    }

    pub fn contains(&self, id: &TransactionId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    fn fresh_id(&mut self) -> TransactionId {
        loop {
            let candidate = self.ids.next_id();
            if !self.contains(&candidate) {
                return candidate;
            }
        }
    }
}

impl Default for TransactionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::TransactionKind;

    fn draft(amount: f64) -> TransactionDraft {
        TransactionDraft::new(
            TransactionKind::Expense,
            "Food",
            amount,
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        )
    }

    #[test]
    fn add_prepends_with_fresh_ids() {
        let mut store = TransactionStore::new();
        let first = store.add(draft(10.0));
        let second = store.add(draft(20.0));
        assert_ne!(first.id, second.id);
        assert_eq!(store.transactions()[0].id, second.id);
        assert_eq!(store.transactions()[1].id, first.id);
    }

    #[test]
    fn delete_unknown_id_is_a_no_op() {
        let mut store = TransactionStore::new();
        store.add(draft(10.0));
        let before = store.transactions().to_vec();
        assert!(store.delete(&TransactionId::new("missing")).is_none());
        assert_eq!(store.transactions(), before.as_slice());
    }

    #[test]
    fn delete_removes_matching_record() {
        let mut store = TransactionStore::new();
        let kept = store.add(draft(10.0));
        let gone = store.add(draft(20.0));
        let removed = store.delete(&gone.id).expect("record exists");
        assert_eq!(removed.amount, 20.0);
        assert_eq!(store.len(), 1);
        assert!(store.contains(&kept.id));
    }

    #[test]
    fn generated_ids_skip_seeded_collisions() {
        let seed = Transaction::from_draft(TransactionId::new("txn-1"), draft(5.0));
        let mut store = TransactionStore::seeded(Box::new(SequentialIdGenerator::new()), vec![seed]);
        let added = store.add(draft(7.0));
        assert_eq!(added.id.as_str(), "txn-2");
    }
}
