use core::cmp::Ordering;
use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockline_core::{BatchReference, Entity, Sku};

use crate::order_line::OrderLine;

/// Entity: a purchased lot of stock for one sku.
///
/// Identity is the `reference` alone: `PartialEq` and `Hash` ignore every other
/// field. Quantities are derived from the allocation set, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Batch {
    reference: BatchReference,
    sku: Sku,
    purchased_quantity: i64,
    /// `None` means the stock is already in the warehouse.
    eta: Option<NaiveDate>,
    allocations: HashSet<OrderLine>,
}

impl Batch {
    pub fn new(
        reference: impl Into<BatchReference>,
        sku: Sku,
        purchased_quantity: i64,
        eta: Option<NaiveDate>,
    ) -> Self {
        Self {
            reference: reference.into(),
            sku,
            purchased_quantity,
            eta,
            allocations: HashSet::new(),
        }
    }

    pub fn reference(&self) -> &BatchReference {
        &self.reference
    }

    pub fn sku(&self) -> Sku {
        self.sku
    }

    pub fn purchased_quantity(&self) -> i64 {
        self.purchased_quantity
    }

    pub fn eta(&self) -> Option<NaiveDate> {
        self.eta
    }

    /// Lines currently allocated to this batch, in no particular order.
    pub fn allocations(&self) -> impl Iterator<Item = &OrderLine> {
        self.allocations.iter()
    }

    pub fn is_allocated(&self, line: &OrderLine) -> bool {
        self.allocations.contains(line)
    }

    /// Sum of allocated line quantities, saturated to the `i64` range.
    pub fn allocated_quantity(&self) -> i64 {
        saturate(self.allocated_exact())
    }

    /// `purchased_quantity - allocated_quantity`, saturated to the `i64` range.
    pub fn available_quantity(&self) -> i64 {
        saturate(self.available_exact())
    }

    /// True iff the skus match and the line fits (an exact fit is allowed).
    ///
    /// Compares against the exact available quantity, not the saturated one.
    pub fn can_allocate(&self, line: &OrderLine) -> bool {
        self.sku == line.sku() && i128::from(line.quantity()) <= self.available_exact()
    }

    // Quantities are unvalidated `i64`s; summing them in `i128` cannot overflow
    // for any set that fits in memory.
    fn allocated_exact(&self) -> i128 {
        self.allocations
            .iter()
            .map(|line| i128::from(line.quantity()))
            .sum()
    }

    fn available_exact(&self) -> i128 {
        i128::from(self.purchased_quantity) - self.allocated_exact()
    }

    /// Allocate `line` if it is eligible; otherwise do nothing.
    ///
    /// Allocating a line that is already allocated has no further effect.
    pub fn allocate(&mut self, line: &OrderLine) {
        self.try_allocate(line);
    }

    /// Same as [`Batch::allocate`], reporting whether this call added the line.
    pub fn try_allocate(&mut self, line: &OrderLine) -> bool {
        if !self.can_allocate(line) {
            tracing::trace!(
                batch = %self.reference,
                order_id = %line.order_id(),
                sku = %line.sku(),
                quantity = line.quantity(),
                "order line not eligible for batch"
            );
            return false;
        }

        let inserted = self.allocations.insert(line.clone());
        if inserted {
            tracing::debug!(
                batch = %self.reference,
                order_id = %line.order_id(),
                sku = %line.sku(),
                quantity = line.quantity(),
                "order line allocated"
            );
        }
        inserted
    }

    /// Remove `line` if it is allocated here; otherwise do nothing.
    pub fn deallocate(&mut self, line: &OrderLine) {
        self.try_deallocate(line);
    }

    /// Same as [`Batch::deallocate`], reporting whether a line was removed.
    pub fn try_deallocate(&mut self, line: &OrderLine) -> bool {
        let removed = self.allocations.remove(line);
        if removed {
            tracing::debug!(
                batch = %self.reference,
                order_id = %line.order_id(),
                sku = %line.sku(),
                quantity = line.quantity(),
                "order line deallocated"
            );
        } else {
            tracing::trace!(
                batch = %self.reference,
                order_id = %line.order_id(),
                "order line not allocated to batch"
            );
        }
        removed
    }

    /// Order batches by eta: missing eta first, then earliest date.
    ///
    /// This is not `Ord`: equality is by reference, ordering is by eta, and the
    /// two disagree.
    pub fn cmp_eta(&self, other: &Self) -> Ordering {
        compare_eta(self.eta, other.eta)
    }

    /// Whether `self` sorts strictly after `other` by eta.
    pub fn is_later_than(&self, other: &Self) -> bool {
        self.cmp_eta(other) == Ordering::Greater
    }
}

fn saturate(value: i128) -> i64 {
    value.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

fn compare_eta(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => a.cmp(&b),
    }
}

impl Entity for Batch {
    type Id = BatchReference;

    fn id(&self) -> &Self::Id {
        &self.reference
    }
}

impl PartialEq for Batch {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity_as(other)
    }
}

impl Eq for Batch {}

impl core::hash::Hash for Batch {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.reference.hash(state);
    }
}

impl core::fmt::Display for Batch {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "<Batch {}>", self.reference)
    }
}
