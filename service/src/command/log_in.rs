//! [`Command`] for logging the shop operator in.

use common::operations::Update;
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::IsAuthenticated,
    infra::{store, Store},
    Service,
};

use super::Command;

/// [`Command`] for marking the shop operator as logged in.
///
/// No credentials are checked.
#[derive(Clone, Copy, Debug)]
pub struct LogIn;

impl<St> Command<LogIn> for Service<St>
where
    St: Store<Update<IsAuthenticated>, Ok = (), Err = Traced<store::Error>>,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(&self, _: LogIn) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let mut state = self.state().await;

        self.persist(IsAuthenticated(true))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        state.is_authenticated = IsAuthenticated(true);

        log::debug!("operator logged in");
        Ok(())
    }
}

/// Error of [`LogIn`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Store`] error.
    #[display("`Store` operation failed: {_0}")]
    Store(store::Error),
}

#[cfg(test)]
mod spec {
    use crate::{
        command::{Command as _, LogIn},
        infra::{store::Key, Memory},
        Config, Service,
    };

    #[tokio::test]
    async fn persists_flag() {
        let store = Memory::new();
        let service = Service::load(Config::default(), store.clone())
            .await
            .unwrap();

        service.execute(LogIn).await.unwrap();

        assert_eq!(service.state().await.is_authenticated, true);
        assert_eq!(
            store.raw(Key::IS_AUTHENTICATED).await.as_deref(),
            Some("true"),
        );
    }
}
