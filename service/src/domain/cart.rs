//! [`Cart`] definitions.
//!
//! A [`Cart`] doesn't hold tentative requests: every line of it is a
//! [`Reservation`] of units already taken out of the [`Catalog`] stock, so
//! the [`Catalog`] always shows what remains sellable right now.
//!
//! A [`Reservation`] ends exactly once, either:
//! - released back into the [`Catalog`] when its line is removed;
//! - or committed into a [`sale::Item`] at checkout, leaving the stock as is.

use common::Money;

use crate::domain::{
    product::{self, Quantity},
    sale, Catalog,
};
#[cfg(doc)]
use crate::domain::{Product, Sale};

/// In-progress transaction.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Cart {
    /// [`Reservation`]s in the order their [`Product`]s were first added.
    reservations: Vec<Reservation>,
}

impl Cart {
    /// Returns the [`Reservation`]s of this [`Cart`] in the order their
    /// [`Product`]s were first added.
    #[must_use]
    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    /// Indicates whether this [`Cart`] has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }

    /// Returns the reserved [`Quantity`] of the [`Product`], if it's in this
    /// [`Cart`].
    #[must_use]
    pub fn quantity(&self, product_id: product::Id) -> Option<Quantity> {
        self.reservation(product_id).map(Reservation::quantity)
    }

    /// Reserves a single unit of the [`Product`] in the [`Catalog`] and adds
    /// it to this [`Cart`].
    ///
    /// Repeated additions of the same [`Product`] grow its existing line.
    /// A [`Product`] missing in the [`Catalog`] still gets its line, with
    /// nothing reserved for it. Returns the [`Quantity`] of the line.
    pub fn add(
        &mut self,
        catalog: &mut Catalog,
        product_id: product::Id,
    ) -> Quantity {
        _ = catalog.reserve(product_id, Quantity::ONE);

        match self
            .reservations
            .iter_mut()
            .find(|r| r.product_id == product_id)
        {
            Some(r) => {
                r.quantity = r.quantity.increment();
                r.quantity
            }
            None => {
                self.reservations.push(Reservation {
                    product_id,
                    quantity: Quantity::ONE,
                });
                Quantity::ONE
            }
        }
    }

    /// Removes the whole line of the [`Product`] from this [`Cart`],
    /// releasing all its reserved units back into the [`Catalog`].
    ///
    /// Unlike [`Cart::add()`], it doesn't work unit by unit. Returns the
    /// released [`Quantity`], or [`None`] if the [`Product`] isn't in this
    /// [`Cart`].
    pub fn remove(
        &mut self,
        catalog: &mut Catalog,
        product_id: product::Id,
    ) -> Option<Quantity> {
        let at = self
            .reservations
            .iter()
            .position(|r| r.product_id == product_id)?;
        Some(self.reservations.remove(at).release(catalog))
    }

    /// Computes the total price of this [`Cart`] by the current [`Catalog`]
    /// prices.
    ///
    /// Lines of [`Product`]s missing in the [`Catalog`] contribute nothing.
    #[must_use]
    pub fn total(&self, catalog: &Catalog) -> Money {
        self.reservations
            .iter()
            .map(|r| {
                catalog
                    .price(r.product_id)
                    .unwrap_or(Money::ZERO)
                    .times(r.quantity.get())
            })
            .sum()
    }

    /// Empties this [`Cart`], committing all its [`Reservation`]s into
    /// [`sale::Item`]s.
    ///
    /// The reserved stock stays taken.
    pub fn commit(&mut self) -> Vec<sale::Item> {
        std::mem::take(&mut self.reservations)
            .into_iter()
            .map(Reservation::commit)
            .collect()
    }

    fn reservation(&self, product_id: product::Id) -> Option<&Reservation> {
        self.reservations.iter().find(|r| r.product_id == product_id)
    }
}

/// Units of a [`Product`] taken out of the [`Catalog`] stock by a [`Cart`].
///
/// Only a [`Cart`] creates, grows and ends [`Reservation`]s.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Reservation {
    /// ID of the reserved [`Product`].
    product_id: product::Id,

    /// Reserved units of the [`Product`].
    quantity: Quantity,
}

impl Reservation {
    /// Returns ID of the reserved [`Product`].
    #[must_use]
    pub fn product_id(&self) -> product::Id {
        self.product_id
    }

    /// Returns the reserved [`Quantity`].
    #[must_use]
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Ends this [`Reservation`] by returning its units into the [`Catalog`].
    fn release(self, catalog: &mut Catalog) -> Quantity {
        _ = catalog.release(self.product_id, self.quantity);
        self.quantity
    }

    /// Ends this [`Reservation`] by turning it into a sold [`sale::Item`].
    fn commit(self) -> sale::Item {
        sale::Item {
            product_id: self.product_id,
            quantity: self.quantity,
        }
    }
}
