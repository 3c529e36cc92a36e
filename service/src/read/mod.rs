//! Read entities definitions.

pub mod cart;
pub mod receipt;

use common::Money;

use crate::domain::{
    product::{self, Quantity},
    Catalog,
};
#[cfg(doc)]
use crate::domain::Product;

pub use self::receipt::Receipt;

/// Line of a [`cart::Summary`] or a [`Receipt`], resolved against the
/// current [`Catalog`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Line {
    /// ID of the [`Product`].
    pub product_id: product::Id,

    /// Name of the [`Product`], or [`None`] if it's missing in the
    /// [`Catalog`].
    pub name: Option<product::Name>,

    /// Current price of a single unit of the [`Product`].
    ///
    /// Zero if it's missing in the [`Catalog`].
    pub unit_price: Money,

    /// Units of the [`Product`].
    pub quantity: Quantity,

    /// Price of all the units.
    pub subtotal: Money,
}

impl Line {
    /// Resolves a [`Line`] of the provided `quantity` of the [`Product`]
    /// against the [`Catalog`].
    #[must_use]
    pub fn resolve(
        catalog: &Catalog,
        product_id: product::Id,
        quantity: Quantity,
    ) -> Self {
        let product = catalog.get(product_id);
        let unit_price = product.map_or(Money::ZERO, |p| p.price);
        Self {
            product_id,
            name: product.map(|p| p.name.clone()),
            unit_price,
            quantity,
            subtotal: unit_price.times(quantity.get()),
        }
    }
}
