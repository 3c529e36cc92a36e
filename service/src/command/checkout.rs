//! [`Command`] for finalizing the [`Cart`] into a [`Sale`].

use common::{operations::Update, Money};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        sale::{CustomerName, Payment},
        Journal, Sale,
    },
    infra::{store, Store},
    validation, Service,
};
#[cfg(doc)]
use crate::domain::{Cart, Catalog};

use super::Command;

/// [`Command`] for finalizing the [`Cart`] into a [`Sale`].
///
/// The reserved stock stays taken, since it was already deducted from the
/// [`Catalog`] when the units were added to the [`Cart`].
#[derive(Clone, Debug)]
pub struct Checkout {
    /// Amount the customer paid.
    pub amount_paid: Money,

    /// Change handed back to the customer, as computed by the caller.
    pub change: Money,

    /// Name of the customer, if given.
    pub customer_name: Option<CustomerName>,
}

impl<St> Command<Checkout> for Service<St>
where
    St: Store<Update<Journal>, Ok = (), Err = Traced<store::Error>>,
{
    /// Recorded [`Sale`].
    type Ok = Sale;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: Checkout) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let Checkout {
            amount_paid,
            change,
            customer_name,
        } = cmd;
        let payment = Payment {
            amount_paid,
            change,
        };

        let mut state = self.state().await;

        self.config()
            .validation
            .checkout(&state.cart, &payment)
            .map_err(tracerr::from_and_wrap!(=> E))?;

        let (mut cart, mut journal) = (state.cart.clone(), state.journal.clone());
        let total = cart.total(&state.catalog);
        let sale = Sale::new(cart.commit(), total, payment, customer_name);
        journal.record(sale.clone());
        self.persist(journal.clone())
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        state.journal = journal;
        state.cart = cart;

        log::debug!(
            sale.id = %sale.id,
            sale.total = %sale.total,
            sale.status = %sale.status,
            sale.units = sale.units(),
            "`Sale` recorded",
        );
        Ok(sale)
    }
}

/// Error of [`Checkout`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Store`] error.
    #[display("`Store` operation failed: {_0}")]
    Store(store::Error),

    /// [`Cart`] cannot be checked out.
    #[display("cannot check out: {_0}")]
    Invalid(validation::Error),
}
