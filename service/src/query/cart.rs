//! [`Query`] collection related to the [`Cart`].

use std::convert::Infallible;

use common::operations::By;

#[cfg(doc)]
use crate::domain::Cart;
use crate::{read, Service};

use super::{Query, StateQuery};

/// Queries the [`Cart`] contents with their current prices.
pub type Contents = StateQuery<By<read::cart::Summary, ()>>;

impl<St> Query<Contents> for Service<St> {
    type Ok = read::cart::Summary;
    type Err = Infallible;

    async fn execute(&self, _: Contents) -> Result<Self::Ok, Self::Err> {
        let state = self.state().await;
        Ok(read::cart::Summary::of(&state.cart, &state.catalog))
    }
}
