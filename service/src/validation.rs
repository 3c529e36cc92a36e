//! Optional [`Validation`] of inputs, applied before any state mutation.
//!
//! [`Validation::Lenient`] accepts everything, so negative prices, stocks
//! and payments pass through untouched. [`Validation::Strict`] rejects them
//! with a distinct [`Error`] instead.

use common::Money;
use derive_more::{Display, Error as StdError};
use serde::Deserialize;

use crate::domain::{
    product::{self, Quantity, Stock},
    sale::Payment,
    Cart, Catalog,
};
#[cfg(doc)]
use crate::domain::Product;

/// Validation policy of a [`Service`].
///
/// [`Service`]: crate::Service
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Validation {
    /// Nothing is rejected.
    #[default]
    Lenient,

    /// Inputs breaking domain invariants are rejected.
    Strict,
}

impl Validation {
    /// Checks the price and initial [`Stock`] of a [`Product`].
    ///
    /// # Errors
    ///
    /// In [`Validation::Strict`] mode, if either of them is negative.
    pub fn product(self, price: Money, stock: Stock) -> Result<(), Error> {
        if self == Self::Lenient {
            return Ok(());
        }
        if price.is_negative() {
            return Err(Error::NegativePrice(price));
        }
        if stock.is_negative() {
            return Err(Error::NegativeStock(stock));
        }
        Ok(())
    }

    /// Checks that a single unit of the [`Product`] may be reserved.
    ///
    /// # Errors
    ///
    /// In [`Validation::Strict`] mode, if the [`Catalog`] has no such
    /// [`Product`], or it has no [`Stock`] left.
    pub fn reservation(
        self,
        catalog: &Catalog,
        product_id: product::Id,
    ) -> Result<(), Error> {
        if self == Self::Lenient {
            return Ok(());
        }
        let product = catalog
            .get(product_id)
            .ok_or(Error::UnknownProduct(product_id))?;
        if !product.stock.covers(Quantity::ONE) {
            return Err(Error::OutOfStock(product_id));
        }
        Ok(())
    }

    /// Checks that the [`Cart`] may be checked out with the [`Payment`].
    ///
    /// # Errors
    ///
    /// In [`Validation::Strict`] mode, if the [`Cart`] is empty or the
    /// [`Payment`] has negative amounts.
    pub fn checkout(self, cart: &Cart, payment: &Payment) -> Result<(), Error> {
        if self == Self::Lenient {
            return Ok(());
        }
        if cart.is_empty() {
            return Err(Error::EmptyCart);
        }
        if payment.amount_paid.is_negative() {
            return Err(Error::NegativePayment(payment.amount_paid));
        }
        if payment.change.is_negative() {
            return Err(Error::NegativeChange(payment.change));
        }
        Ok(())
    }
}

/// Error of a [`Validation`].
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, StdError)]
pub enum Error {
    /// Price is below zero.
    #[display("price `{_0}` is negative")]
    NegativePrice(#[error(not(source))] Money),

    /// [`Stock`] is below zero.
    #[display("stock `{_0}` is negative")]
    NegativeStock(#[error(not(source))] Stock),

    /// [`Catalog`] has no such [`Product`].
    #[display("`Product(id: {_0})` doesn't exist")]
    UnknownProduct(#[error(not(source))] product::Id),

    /// [`Product`] has no [`Stock`] left.
    #[display("`Product(id: {_0})` is out of stock")]
    OutOfStock(#[error(not(source))] product::Id),

    /// Paid amount is below zero.
    #[display("paid amount `{_0}` is negative")]
    NegativePayment(#[error(not(source))] Money),

    /// Change is below zero.
    #[display("change `{_0}` is negative")]
    NegativeChange(#[error(not(source))] Money),

    /// [`Cart`] has nothing to check out.
    #[display("`Cart` is empty")]
    EmptyCart,
}

#[cfg(test)]
mod spec {
    use common::Money;

    use crate::domain::{
        product::{self, Stock},
        sale::Payment,
        Cart, Catalog,
    };

    use super::{Error, Validation};

    fn catalog_with(stock: i64) -> (Catalog, product::Id) {
        let mut catalog = Catalog::default();
        let id = catalog
            .add(product::New {
                name: "Teh".into(),
                price: Money::from(3000),
                stock: Stock::from(stock),
            })
            .id;
        (catalog, id)
    }

    fn payment(amount_paid: i64, change: i64) -> Payment {
        Payment {
            amount_paid: Money::from(amount_paid),
            change: Money::from(change),
        }
    }

    #[test]
    fn lenient_accepts_everything() {
        let v = Validation::Lenient;

        assert_eq!(v.product(Money::from(-1), Stock::from(-1)), Ok(()));
        let (catalog, id) = catalog_with(0);
        assert_eq!(v.reservation(&catalog, id), Ok(()));
        assert_eq!(v.reservation(&catalog, product::Id::new()), Ok(()));
        assert_eq!(v.checkout(&Cart::default(), &payment(-5, -5)), Ok(()));
    }

    #[test]
    fn strict_rejects_negative_product_values() {
        let v = Validation::Strict;

        assert_eq!(
            v.product(Money::from(-1), Stock::from(1)),
            Err(Error::NegativePrice(Money::from(-1))),
        );
        assert_eq!(
            v.product(Money::from(1), Stock::from(-1)),
            Err(Error::NegativeStock(Stock::from(-1))),
        );
        assert_eq!(v.product(Money::ZERO, Stock::default()), Ok(()));
    }

    #[test]
    fn strict_rejects_reservation_without_stock() {
        let v = Validation::Strict;
        let (empty, id) = catalog_with(0);

        assert_eq!(v.reservation(&empty, id), Err(Error::OutOfStock(id)));
        let (stocked, id) = catalog_with(1);
        assert_eq!(v.reservation(&stocked, id), Ok(()));
    }

    #[test]
    fn strict_rejects_reservation_of_unknown_product() {
        let (catalog, _) = catalog_with(5);
        let unknown = product::Id::new();

        assert_eq!(
            Validation::Strict.reservation(&catalog, unknown),
            Err(Error::UnknownProduct(unknown)),
        );
    }

    #[test]
    fn strict_rejects_empty_cart() {
        assert_eq!(
            Validation::Strict.checkout(&Cart::default(), &payment(0, 0)),
            Err(Error::EmptyCart),
        );
    }
}
