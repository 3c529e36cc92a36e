//! [`Cart`]-related read definitions.

use common::Money;

use crate::domain::{Cart, Catalog};

use super::Line;

/// [`Cart`] contents as displayed at the point-of-sale.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Summary {
    /// [`Line`]s in the order their products were first added.
    pub lines: Vec<Line>,

    /// Total price of the [`Cart`].
    pub total: Money,
}

impl Summary {
    /// Resolves a [`Summary`] of the [`Cart`] by the current [`Catalog`].
    #[must_use]
    pub fn of(cart: &Cart, catalog: &Catalog) -> Self {
        let lines = cart
            .reservations()
            .iter()
            .map(|r| Line::resolve(catalog, r.product_id(), r.quantity()))
            .collect::<Vec<_>>();
        Self {
            total: lines.iter().map(|l| l.subtotal).sum(),
            lines,
        }
    }

    /// Computes the change to hand back for the provided `amount_paid`.
    ///
    /// Never negative: an underpayment yields no change.
    #[must_use]
    pub fn change_for(&self, amount_paid: Money) -> Money {
        (amount_paid - self.total).max(Money::ZERO)
    }
}
