//! [`Query`] collection related to the multiple [`Product`]s.

use std::convert::Infallible;

use common::operations::By;

use crate::{domain::Product, Service};

use super::{Query, StateQuery};

/// Queries all the [`Product`]s of the catalog in the order they were added.
pub type All = StateQuery<By<Vec<Product>, ()>>;

impl<St> Query<All> for Service<St> {
    type Ok = Vec<Product>;
    type Err = Infallible;

    async fn execute(&self, _: All) -> Result<Self::Ok, Self::Err> {
        Ok(self.state().await.catalog.products().to_vec())
    }
}
