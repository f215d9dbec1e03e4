use crate::domain::transaction::{TransactionId, TransactionKind};

/// Identifies entities that expose a stable unique identifier.
pub trait Identifiable {
    fn id(&self) -> &TransactionId;
}

/// Anything that carries a signed-by-kind monetary amount.
pub trait Amounted {
    fn amount(&self) -> f64;
    fn kind(&self) -> TransactionKind;

    /// Amount with expenses negated, as it affects the balance.
    fn signed_amount(&self) -> f64 {
        match self.kind() {
            TransactionKind::Income => self.amount(),
            TransactionKind::Expense => -self.amount(),
        }
    }
}

/// Supplies a presentation-ready label for UI or logs.
pub trait Displayable {
    fn display_label(&self) -> String;
}

// Re-export common dependencies so consumers can rely on this module as a façade.
pub use chrono;
pub use serde;
