//! [`Query`] collection related to the operator session.

use std::convert::Infallible;

use common::operations::By;

use crate::{domain::IsAuthenticated, Service};

use super::{Query, StateQuery};

/// Queries whether the operator is logged in.
pub type Current = StateQuery<By<IsAuthenticated, ()>>;

impl<St> Query<Current> for Service<St> {
    type Ok = IsAuthenticated;
    type Err = Infallible;

    async fn execute(&self, _: Current) -> Result<Self::Ok, Self::Err> {
        Ok(self.state().await.is_authenticated)
    }
}
