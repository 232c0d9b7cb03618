//! Stock allocation domain module.
//!
//! Decides which batch of stock satisfies a customer order line, and keeps
//! each batch's available quantity consistent with the lines allocated to it.
//! Pure, synchronous domain logic (no IO, no storage, no locking): callers that
//! share a `Batch` across threads serialize access themselves.

pub mod batch;
pub mod error;
pub mod order_line;
pub mod policy;

pub use batch::Batch;
pub use error::{AllocationError, AllocationResult};
pub use order_line::OrderLine;
pub use policy::{allocate, select_batch};

pub use stockline_core::{BatchReference, OrderId, Sku};
