//! [`Receipt`] definitions.

use crate::domain::{Catalog, Sale, ShopInfo};

use super::Line;

/// Printable receipt of a [`Sale`].
///
/// Product names and prices are looked up in the current [`Catalog`], so a
/// receipt reprinted after editing a product shows its new details, while
/// the [`Sale::total`] stays as recorded.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Receipt {
    /// [`ShopInfo`] printed in the header.
    pub shop: ShopInfo,

    /// [`Sale`] this [`Receipt`] is for.
    pub sale: Sale,

    /// [`Line`]s of the [`Sale`] items.
    pub lines: Vec<Line>,
}

impl Receipt {
    /// Resolves a [`Receipt`] of the [`Sale`] by the current [`Catalog`].
    #[must_use]
    pub fn of(sale: Sale, shop: ShopInfo, catalog: &Catalog) -> Self {
        let lines = sale
            .items
            .iter()
            .map(|i| Line::resolve(catalog, i.product_id, i.quantity))
            .collect();
        Self { shop, sale, lines }
    }
}
