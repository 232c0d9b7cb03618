//! Batch selection policy.
//!
//! Stock already on hand (no eta) is consumed first; among in-transit stock the
//! earliest arrival wins. Batches with equal etas keep their input order.

use core::ops::Deref;

use stockline_core::BatchReference;

use crate::batch::Batch;
use crate::error::{AllocationError, AllocationResult};
use crate::order_line::OrderLine;

/// Allocate `line` to the earliest eligible batch and return its reference.
///
/// The caller's collection is not reordered. On `OutOfStock` no batch is
/// mutated.
pub fn allocate<'a, I>(line: &OrderLine, batches: I) -> AllocationResult<BatchReference>
where
    I: IntoIterator<Item = &'a mut Batch>,
{
    let Some(batch) = earliest_eligible(line, batches) else {
        tracing::warn!(
            order_id = %line.order_id(),
            sku = %line.sku(),
            quantity = line.quantity(),
            "no batch can satisfy order line"
        );
        return Err(AllocationError::out_of_stock(line.sku()));
    };

    batch.allocate(line);
    Ok(batch.reference().clone())
}

/// The batch [`allocate`] would choose for `line`, without mutating anything.
pub fn select_batch<'a, I>(line: &OrderLine, batches: I) -> Option<&'a Batch>
where
    I: IntoIterator<Item = &'a Batch>,
{
    earliest_eligible(line, batches)
}

/// First batch, in eta order, that can take `line`. Works over shared or
/// mutable references.
fn earliest_eligible<B, I>(line: &OrderLine, batches: I) -> Option<B>
where
    I: IntoIterator<Item = B>,
    B: Deref<Target = Batch>,
{
    let mut candidates: Vec<B> = batches.into_iter().collect();
    // `sort_by` is stable: ties on eta stay in input order.
    candidates.sort_by(|a, b| a.cmp_eta(&**b));
    candidates.into_iter().find(|b| b.can_allocate(line))
}
