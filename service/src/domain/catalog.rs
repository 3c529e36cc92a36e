//! [`Catalog`] definitions.

use common::Money;
use serde::{Deserialize, Serialize};

use crate::domain::{
    product::{self, Quantity, Stock},
    Product,
};

/// Ordered set of [`Product`]s offered by the shop.
///
/// Source of truth for prices and stock levels.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog(Vec<Product>);

impl Catalog {
    /// Returns all the [`Product`]s in the order they were added.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.0
    }

    /// Returns the [`Product`] with the provided ID, if any.
    #[must_use]
    pub fn get(&self, id: product::Id) -> Option<&Product> {
        self.0.iter().find(|p| p.id == id)
    }

    /// Returns the current price of the [`Product`] with the provided ID, if
    /// any.
    #[must_use]
    pub fn price(&self, id: product::Id) -> Option<Money> {
        self.get(id).map(|p| p.price)
    }

    /// Appends a new [`Product`] created from the provided data.
    pub fn add(&mut self, new: product::New) -> &Product {
        self.0.push(Product::create(new));
        let last = self.0.len() - 1;
        &self.0[last]
    }

    /// Replaces the [`Product`] having the same ID with the provided one.
    ///
    /// Returns `false` if there is no such [`Product`].
    pub fn edit(&mut self, product: Product) -> bool {
        match self.get_mut(product.id) {
            Some(p) => {
                *p = product;
                true
            }
            None => false,
        }
    }

    /// Takes the provided [`Quantity`] out of the [`Product`]'s [`Stock`].
    ///
    /// The resulting [`Stock`] is not clamped and may go below zero.
    /// Returns [`None`] if there is no such [`Product`].
    pub fn reserve(
        &mut self,
        id: product::Id,
        quantity: Quantity,
    ) -> Option<Stock> {
        let product = self.get_mut(id)?;
        product.stock = product.stock.reserve(quantity);
        Some(product.stock)
    }

    /// Puts the provided [`Quantity`] back into the [`Product`]'s [`Stock`].
    ///
    /// Returns [`None`] if there is no such [`Product`].
    pub fn release(
        &mut self,
        id: product::Id,
        quantity: Quantity,
    ) -> Option<Stock> {
        let product = self.get_mut(id)?;
        product.stock = product.stock.release(quantity);
        Some(product.stock)
    }

    fn get_mut(&mut self, id: product::Id) -> Option<&mut Product> {
        self.0.iter_mut().find(|p| p.id == id)
    }
}

impl From<Vec<Product>> for Catalog {
    fn from(products: Vec<Product>) -> Self {
        Self(products)
    }
}
