//! [`Command`] for replacing a [`Product`] in the [`Catalog`].

use common::operations::Update;
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{Catalog, Product},
    infra::{store, Store},
    validation, Service,
};

use super::Command;

/// [`Command`] for replacing a [`Product`] in the [`Catalog`] with a new
/// version of it, matched by ID.
///
/// Every field may change, including the stock. There is no conflict
/// detection: the last edit wins.
#[derive(Clone, Debug, From)]
pub struct EditProduct {
    /// New version of the [`Product`].
    pub product: Product,
}

impl<St> Command<EditProduct> for Service<St>
where
    St: Store<Update<Catalog>, Ok = (), Err = Traced<store::Error>>,
{
    /// Edited [`Product`], or [`None`] if the [`Catalog`] has no such
    /// [`Product`].
    type Ok = Option<Product>;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: EditProduct) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let EditProduct { product } = cmd;

        self.config()
            .validation
            .product(product.price, product.stock)
            .map_err(tracerr::from_and_wrap!(=> E))?;

        let mut state = self.state().await;

        let mut catalog = state.catalog.clone();
        if !catalog.edit(product.clone()) {
            log::warn!(product.id = %product.id, "no `Product` to edit");
            return Ok(None);
        }
        self.persist(catalog.clone())
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        state.catalog = catalog;

        log::debug!(
            product.id = %product.id,
            product.price = %product.price,
            product.stock = %product.stock,
            "`Product` edited",
        );
        Ok(Some(product))
    }
}

/// Error of [`EditProduct`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Store`] error.
    #[display("`Store` operation failed: {_0}")]
    Store(store::Error),

    /// [`Product`] data is invalid.
    #[display("invalid `Product`: {_0}")]
    Invalid(validation::Error),
}
