//! [`Command`] for logging the shop operator out.

use common::operations::Delete;
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::IsAuthenticated,
    infra::{
        store::{self, Key, Snapshot as _},
        Store,
    },
    Service,
};

use super::Command;

/// [`Command`] for marking the shop operator as logged out.
///
/// The stored flag is removed rather than overwritten, so a restarted
/// [`Service`] falls back to the logged-out default.
#[derive(Clone, Copy, Debug)]
pub struct LogOut;

impl<St> Command<LogOut> for Service<St>
where
    St: Store<Delete<Key>, Ok = (), Err = Traced<store::Error>>,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(&self, _: LogOut) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let mut state = self.state().await;

        self.store()
            .execute(Delete(IsAuthenticated::KEY))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        state.is_authenticated = IsAuthenticated(false);

        log::debug!("operator logged out");
        Ok(())
    }
}

/// Error of [`LogOut`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Store`] error.
    #[display("`Store` operation failed: {_0}")]
    Store(store::Error),
}
