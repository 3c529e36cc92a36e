//! [`Query`] collection related to a single [`Product`].

use std::convert::Infallible;

use common::operations::By;

use crate::{
    domain::{product, Product},
    Service,
};

use super::{Query, StateQuery};

/// Queries a [`Product`] by its [`product::Id`].
pub type ById = StateQuery<By<Option<Product>, product::Id>>;

impl<St> Query<ById> for Service<St> {
    type Ok = Option<Product>;
    type Err = Infallible;

    async fn execute(&self, query: ById) -> Result<Self::Ok, Self::Err> {
        let id = query.into_inner();
        Ok(self.state().await.catalog.get(id).cloned())
    }
}
