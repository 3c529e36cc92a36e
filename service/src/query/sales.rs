//! [`Query`] collection related to the multiple [`Sale`]s.

use std::convert::Infallible;

use common::operations::By;

use crate::{domain::Sale, Service};

use super::{Query, StateQuery};

/// Queries all the recorded [`Sale`]s, oldest first.
pub type All = StateQuery<By<Vec<Sale>, ()>>;

impl<St> Query<All> for Service<St> {
    type Ok = Vec<Sale>;
    type Err = Infallible;

    async fn execute(&self, _: All) -> Result<Self::Ok, Self::Err> {
        Ok(self.state().await.journal.sales().to_vec())
    }
}
