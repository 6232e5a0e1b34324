use thiserror::Error;

/// Core domain errors - no I/O dependencies
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid LP cost {lp_cost} for type {type_id}: cost must be positive")]
    InvalidLpCost { type_id: i64, lp_cost: i64 },
}

pub type Result<T> = std::result::Result<T, CoreError>;
