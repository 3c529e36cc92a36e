//! [`Command`] for amending a recorded [`Sale`].

use common::operations::Update;
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{Journal, Sale},
    infra::{store, Store},
    Service,
};
#[cfg(doc)]
use crate::domain::Catalog;

use super::Command;

/// [`Command`] for replacing a recorded [`Sale`] with its amended version,
/// matched by ID.
///
/// A [`Sale`] is a historical record, so the [`Catalog`] stock is never
/// adjusted, even if the amended [`Sale`] has different items.
#[derive(Clone, Debug, From)]
pub struct AmendSale {
    /// Amended version of the [`Sale`].
    pub sale: Sale,
}

impl<St> Command<AmendSale> for Service<St>
where
    St: Store<Update<Journal>, Ok = (), Err = Traced<store::Error>>,
{
    /// Amended [`Sale`], or [`None`] if no such [`Sale`] was recorded.
    type Ok = Option<Sale>;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: AmendSale) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let AmendSale { sale } = cmd;

        let mut state = self.state().await;

        let mut journal = state.journal.clone();
        if !journal.amend(sale.clone()) {
            log::warn!(sale.id = %sale.id, "no `Sale` to amend");
            return Ok(None);
        }
        self.persist(journal.clone())
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        state.journal = journal;

        log::debug!(
            sale.id = %sale.id,
            sale.total = %sale.total,
            sale.status = %sale.status,
            "`Sale` amended",
        );
        Ok(Some(sale))
    }
}

/// Error of [`AmendSale`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Store`] error.
    #[display("`Store` operation failed: {_0}")]
    Store(store::Error),
}
