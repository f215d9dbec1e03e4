//! Business logic helpers for recording and removing transactions.

use crate::core::store::TransactionStore;
use crate::core::validation::{self, RawDraft, ValidationErrors};
use crate::currency::LocaleConfig;
use crate::domain::{Transaction, TransactionDraft, TransactionId};

use super::ServiceResult;

/// The only entry point that constructs stored transactions, so the positive
/// amount invariant holds for everything in a [`TransactionStore`].
pub struct TransactionService;

impl TransactionService {
    /// Validates raw form input, reading amounts under `locale`, and records it.
    pub fn record(
        store: &mut TransactionStore,
        raw: &RawDraft,
        locale: &LocaleConfig,
    ) -> ServiceResult<Transaction> {
        let draft = validation::validate_draft(raw, locale)?;
        Ok(store.add(draft))
    }

    /// Records an already-typed draft after re-checking its invariants.
    pub fn add(store: &mut TransactionStore, draft: TransactionDraft) -> ServiceResult<Transaction> {
        let mut messages = Vec::new();
        if draft.category.trim().is_empty() {
            messages.push(validation::MISSING_CATEGORY.to_string());
        }
        if !(draft.amount.is_finite() && draft.amount > 0.0) {
            messages.push(validation::INVALID_AMOUNT.to_string());
        }
        if !messages.is_empty() {
            return Err(ValidationErrors { messages }.into());
        }
        Ok(store.add(draft))
    }

    /// Removes the transaction identified by `id`; `None` when it was not stored.
    pub fn remove(store: &mut TransactionStore, id: &TransactionId) -> Option<Transaction> {
        store.delete(id)
    }
}
