//! Engine layer: id generation, validation, the transaction store, the pure
//! aggregation services and the dashboard controller that ties them together.

pub mod dashboard;
pub mod ids;
pub mod seed;
pub mod services;
pub mod store;
pub mod time;
pub mod utils;
pub mod validation;

pub use dashboard::{Dashboard, DashboardView};
pub use store::TransactionStore;
pub use time::{Clock, FixedClock, SystemClock};
