//! [`Command`] for adding a single unit of a [`Product`] to the [`Cart`].

use common::operations::Update;
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        product::{self, Quantity},
        Catalog,
    },
    infra::{store, Store},
    validation, Service,
};
#[cfg(doc)]
use crate::domain::{Cart, Product};

use super::Command;

/// [`Command`] for adding a single unit of a [`Product`] to the [`Cart`].
///
/// The unit is reserved right away: the [`Product`] stock in the [`Catalog`]
/// drops by one before any checkout happens. A [`Product`] missing in the
/// [`Catalog`] still gets a [`Cart`] line, priced at zero.
#[derive(Clone, Copy, Debug, From)]
pub struct AddToCart {
    /// ID of the [`Product`] to add.
    pub product_id: product::Id,
}

impl<St> Command<AddToCart> for Service<St>
where
    St: Store<Update<Catalog>, Ok = (), Err = Traced<store::Error>>,
{
    /// [`Quantity`] of the [`Product`] in the [`Cart`] after the addition.
    type Ok = Quantity;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: AddToCart) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let AddToCart { product_id } = cmd;

        let mut state = self.state().await;

        self.config()
            .validation
            .reservation(&state.catalog, product_id)
            .map_err(tracerr::from_and_wrap!(=> E))?;
        if state.catalog.get(product_id).is_none() {
            log::warn!(%product_id, "no `Product` to reserve for `Cart`");
        }

        let (mut catalog, mut cart) = (state.catalog.clone(), state.cart.clone());
        let quantity = cart.add(&mut catalog, product_id);
        self.persist(catalog.clone())
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        state.catalog = catalog;
        state.cart = cart;

        log::debug!(
            %product_id,
            quantity = quantity.get(),
            "`Product` reserved in `Cart`",
        );
        Ok(quantity)
    }
}

/// Error of [`AddToCart`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Store`] error.
    #[display("`Store` operation failed: {_0}")]
    Store(store::Error),

    /// [`Product`] cannot be reserved.
    #[display("cannot reserve `Product`: {_0}")]
    Invalid(validation::Error),
}

#[cfg(test)]
mod spec {
    use common::Money;

    use crate::{
        command::{AddProduct, AddToCart, Command as _},
        domain::product::{self, Quantity, Stock},
        infra::Memory,
        validation, Config, Service, Validation,
    };

    use super::ExecutionError;

    async fn service_with(
        config: Config,
        stock: i64,
    ) -> (Service<Memory>, Memory, product::Id) {
        let store = Memory::new();
        let service = Service::load(config, store.clone()).await.unwrap();
        let product = service
            .execute(AddProduct {
                name: "Kopi".into(),
                price: Money::from(15000),
                stock: Stock::from(stock),
            })
            .await
            .unwrap();
        (service, store, product.id)
    }

    #[tokio::test]
    async fn reserves_stock_eagerly() {
        let (service, _, id) = service_with(Config::default(), 5).await;

        for expected in 1..=3 {
            let quantity = service.execute(AddToCart::from(id)).await.unwrap();
            assert_eq!(Some(quantity), Quantity::new(expected));
        }

        let state = service.state().await;
        assert_eq!(state.catalog.get(id).unwrap().stock, Stock::from(2));
        assert_eq!(state.cart.quantity(id), Quantity::new(3));
        assert_eq!(state.cart.reservations().len(), 1);
    }

    #[tokio::test]
    async fn lenient_lets_stock_go_negative() {
        let (service, _, id) = service_with(Config::default(), 0).await;

        _ = service.execute(AddToCart::from(id)).await.unwrap();

        let state = service.state().await;
        assert_eq!(state.catalog.get(id).unwrap().stock, Stock::from(-1));
    }

    #[tokio::test]
    async fn strict_rejects_out_of_stock() {
        let config = Config {
            validation: Validation::Strict,
        };
        let (service, _, id) = service_with(config, 1).await;
        _ = service.execute(AddToCart::from(id)).await.unwrap();

        let err = service.execute(AddToCart::from(id)).await.unwrap_err();

        assert!(matches!(
            err.as_ref(),
            ExecutionError::Invalid(validation::Error::OutOfStock(p)) if *p == id,
        ));
        let state = service.state().await;
        assert_eq!(state.catalog.get(id).unwrap().stock, Stock::from(0));
        assert_eq!(state.cart.quantity(id), Some(Quantity::ONE));
    }

    #[tokio::test]
    async fn unknown_product_gets_a_line_without_stock() {
        let (service, _, id) = service_with(Config::default(), 5).await;
        let unknown = product::Id::new();

        let quantity = service.execute(AddToCart::from(unknown)).await.unwrap();

        assert_eq!(quantity, Quantity::ONE);
        let state = service.state().await;
        assert_eq!(state.cart.quantity(unknown), Some(Quantity::ONE));
        assert_eq!(state.catalog.get(id).unwrap().stock, Stock::from(5));
        assert_eq!(state.catalog.products().len(), 1);
    }

    #[tokio::test]
    async fn strict_rejects_unknown_product() {
        let config = Config {
            validation: Validation::Strict,
        };
        let (service, _, _) = service_with(config, 5).await;
        let unknown = product::Id::new();

        let err = service.execute(AddToCart::from(unknown)).await.unwrap_err();

        assert!(matches!(
            err.as_ref(),
            ExecutionError::Invalid(validation::Error::UnknownProduct(p))
                if *p == unknown,
        ));
        assert!(service.state().await.cart.is_empty());
    }

    #[tokio::test]
    async fn failed_write_keeps_cart_and_stock() {
        let (service, store, id) = service_with(Config::default(), 5).await;
        store.set_read_only(true);

        let err = service.execute(AddToCart::from(id)).await.unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::Store(_)));
        let state = service.state().await;
        assert!(state.cart.is_empty());
        assert_eq!(state.catalog.get(id).unwrap().stock, Stock::from(5));
    }
}
