use thiserror::Error;

use stockline_core::Sku;

pub type AllocationResult<T> = Result<T, AllocationError>;

/// Failure of the batch selection policy.
///
/// `Batch` methods never return this; ineligible lines are silent no-ops there.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AllocationError {
    /// No candidate batch can take the requested line.
    #[error("out of stock for sku: {sku}")]
    OutOfStock { sku: Sku },
}

impl AllocationError {
    pub fn out_of_stock(sku: Sku) -> Self {
        Self::OutOfStock { sku }
    }

    /// The sku the failed request was for.
    pub fn sku(&self) -> Sku {
        match self {
            AllocationError::OutOfStock { sku } => *sku,
        }
    }
}
