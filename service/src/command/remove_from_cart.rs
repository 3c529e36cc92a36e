//! [`Command`] for removing a whole line from the [`Cart`].

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
    Service,
};
#[cfg(doc)]
use crate::domain::{Cart, Product};

use super::Command;

/// [`Command`] for removing the whole line of a [`Product`] from the
/// [`Cart`], returning all its reserved units into the [`Catalog`] stock.
#[derive(Clone, Copy, Debug, From)]
pub struct RemoveFromCart {
    /// ID of the [`Product`] to remove.
    pub product_id: product::Id,
}

impl<St> Command<RemoveFromCart> for Service<St>
where
    St: Store<Update<Catalog>, Ok = (), Err = Traced<store::Error>>,
{
    /// Released [`Quantity`], or [`None`] if the [`Product`] isn't in the
    /// [`Cart`].
    type Ok = Option<Quantity>;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: RemoveFromCart,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let RemoveFromCart { product_id } = cmd;

        let mut state = self.state().await;

        let (mut catalog, mut cart) = (state.catalog.clone(), state.cart.clone());
        let Some(released) = cart.remove(&mut catalog, product_id) else {
            log::warn!(%product_id, "no `Product` to remove from `Cart`");
            return Ok(None);
        };
        self.persist(catalog.clone())
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        state.catalog = catalog;
        state.cart = cart;

        log::debug!(
            %product_id,
            quantity = released.get(),
            "`Product` released from `Cart`",
        );
        Ok(Some(released))
    }
}

/// Error of [`RemoveFromCart`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Store`] error.
    #[display("`Store` operation failed: {_0}")]
    Store(store::Error),
}
