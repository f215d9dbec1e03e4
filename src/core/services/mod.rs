pub mod aggregation_service;
pub mod transaction_service;
pub mod year_range_service;

pub use aggregation_service::AggregationService;
pub use transaction_service::TransactionService;
pub use year_range_service::{
    generate_year_range, YearRangeOptions, YearRangeService, MAX_YEAR_SPAN,
};

use crate::core::validation::ValidationErrors;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(#[from] ValidationErrors),
}
