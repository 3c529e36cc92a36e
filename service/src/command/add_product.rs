//! [`Command`] for adding a new [`Product`] to the [`Catalog`].

use common::{operations::Update, Money};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        product::{self, Stock},
        Catalog, Product,
    },
    infra::{store, Store},
    validation, Service,
};

use super::Command;

/// [`Command`] for adding a new [`Product`] to the [`Catalog`].
#[derive(Clone, Debug)]
pub struct AddProduct {
    /// Name of a new [`Product`].
    pub name: product::Name,

    /// Price of a single unit of a new [`Product`].
    pub price: Money,

    /// Initial [`Stock`] of a new [`Product`].
    pub stock: Stock,
}

impl<St> Command<AddProduct> for Service<St>
where
    St: Store<Update<Catalog>, Ok = (), Err = Traced<store::Error>>,
{
    type Ok = Product;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: AddProduct) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let AddProduct { name, price, stock } = cmd;

        self.config()
            .validation
            .product(price, stock)
            .map_err(tracerr::from_and_wrap!(=> E))?;

        let mut state = self.state().await;

        let mut catalog = state.catalog.clone();
        let product = catalog.add(product::New { name, price, stock }).clone();
        self.persist(catalog.clone())
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        state.catalog = catalog;

        log::debug!(
            product.id = %product.id,
            product.price = %product.price,
            product.stock = %product.stock,
            "`Product` added",
        );
        Ok(product)
    }
}

/// Error of [`AddProduct`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Store`] error.
    #[display("`Store` operation failed: {_0}")]
    Store(store::Error),

    /// [`Product`] data is invalid.
    #[display("invalid `Product`: {_0}")]
    Invalid(validation::Error),
}

#[cfg(test)]
mod spec {
    use common::Money;

    use crate::{
        command::{AddProduct, Command as _},
        domain::product::Stock,
        infra::{store::Key, Memory},
        validation, Config, Service, Validation,
    };

    use super::ExecutionError;

    fn add(price: i64, stock: i64) -> AddProduct {
        AddProduct {
            name: "Kopi".into(),
            price: Money::from(price),
            stock: Stock::from(stock),
        }
    }

    #[tokio::test]
    async fn appends_and_persists() {
        let store = Memory::new();
        let service = Service::load(Config::default(), store.clone())
            .await
            .unwrap();

        let product = service.execute(add(15000, 5)).await.unwrap();

        assert_eq!(service.state().await.catalog.get(product.id), Some(&product));
        let raw = store.raw(Key::PRODUCTS).await.unwrap();
        assert!(raw.contains(&product.id.to_string()));
    }

    #[tokio::test]
    async fn lenient_passes_negative_values_through() {
        let service = Service::load(Config::default(), Memory::new())
            .await
            .unwrap();

        let product = service.execute(add(-1, -2)).await.unwrap();

        assert_eq!(product.price, Money::from(-1));
        assert_eq!(product.stock, Stock::from(-2));
    }

    #[tokio::test]
    async fn strict_rejects_negative_values() {
        let config = Config {
            validation: Validation::Strict,
        };
        let service = Service::load(config, Memory::new()).await.unwrap();

        let err = service.execute(add(15000, -2)).await.unwrap_err();

        assert!(matches!(
            err.as_ref(),
            ExecutionError::Invalid(validation::Error::NegativeStock(_)),
        ));
        assert!(service.state().await.catalog.products().is_empty());
    }

    #[tokio::test]
    async fn failed_write_keeps_catalog() {
        let store = Memory::new();
        let service = Service::load(Config::default(), store.clone())
            .await
            .unwrap();
        store.set_read_only(true);

        let err = service.execute(add(15000, 5)).await.unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::Store(_)));
        assert!(service.state().await.catalog.products().is_empty());
    }
}
