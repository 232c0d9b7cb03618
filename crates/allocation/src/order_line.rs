use serde::{Deserialize, Serialize};

use stockline_core::{DomainError, DomainResult, OrderId, Sku, ValueObject};

/// Order line: one line item of a customer order.
///
/// A value object: equality and hashing cover all three fields, so two lines
/// with the same order, sku and quantity are interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderLine {
    order_id: OrderId,
    sku: Sku,
    quantity: i64,
}

impl OrderLine {
    /// Build a line without validating the quantity.
    pub fn new(order_id: impl Into<OrderId>, sku: Sku, quantity: i64) -> Self {
        Self {
            order_id: order_id.into(),
            sku,
            quantity,
        }
    }

    /// Build a line, rejecting non-positive quantities.
    pub fn try_new(
        order_id: impl Into<OrderId>,
        sku: Sku,
        quantity: i64,
    ) -> DomainResult<Self> {
        if quantity <= 0 {
            return Err(DomainError::validation(format!(
                "order line quantity must be positive (got {quantity})"
            )));
        }
        Ok(Self::new(order_id, sku, quantity))
    }

    pub fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    pub fn sku(&self) -> Sku {
        self.sku
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }
}

impl ValueObject for OrderLine {}
