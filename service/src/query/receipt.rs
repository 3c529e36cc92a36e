//! [`Query`] collection related to [`Receipt`]s.

use std::convert::Infallible;

use common::operations::By;

#[cfg(doc)]
use crate::domain::Sale;
use crate::{domain::sale, read::Receipt, Service};

use super::{Query, StateQuery};

/// Queries a [`Receipt`] of the [`Sale`] with the provided [`sale::Id`].
pub type BySale = StateQuery<By<Option<Receipt>, sale::Id>>;

impl<St> Query<BySale> for Service<St> {
    type Ok = Option<Receipt>;
    type Err = Infallible;

    async fn execute(&self, query: BySale) -> Result<Self::Ok, Self::Err> {
        let id = query.into_inner();
        let state = self.state().await;
        Ok(state.journal.get(id).map(|sale| {
            Receipt::of(sale.clone(), state.shop.clone(), &state.catalog)
        }))
    }
}

#[cfg(test)]
mod spec {
    use common::Money;

    use crate::{
        command::{
            AddProduct, AddToCart, Checkout, Command as _, UpdateShopInfo,
        },
        domain::{product::Stock, sale, ShopInfo},
        infra::Memory,
        query::{self, Query as _},
        Config, Service,
    };

    #[tokio::test]
    async fn combines_sale_with_shop_and_catalog() {
        let service = Service::load(Config::default(), Memory::new())
            .await
            .unwrap();
        let product = service
            .execute(AddProduct {
                name: "Kopi".into(),
                price: Money::from(15000),
                stock: Stock::from(5),
            })
            .await
            .unwrap();
        _ = service.execute(AddToCart::from(product.id)).await.unwrap();
        let sale = service
            .execute(Checkout {
                amount_paid: Money::from(20000),
                change: Money::from(5000),
                customer_name: Some("Budi".into()),
            })
            .await
            .unwrap();
        let shop = ShopInfo {
            name: "Toko Maju".to_owned(),
            ..ShopInfo::default()
        };
        _ = service
            .execute(UpdateShopInfo::from(shop.clone()))
            .await
            .unwrap();

        let receipt = service
            .execute(query::receipt::BySale::by(sale.id))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(receipt.shop, shop);
        assert_eq!(receipt.sale, sale);
        assert_eq!(receipt.lines[0].name, Some("Kopi".into()));
        assert_eq!(receipt.lines[0].subtotal, Money::from(15000));
    }

    #[tokio::test]
    async fn none_for_unknown_sale() {
        let service = Service::load(Config::default(), Memory::new())
            .await
            .unwrap();

        let receipt = service
            .execute(query::receipt::BySale::by(sale::Id::new()))
            .await
            .unwrap();

        assert_eq!(receipt, None);
    }
}
