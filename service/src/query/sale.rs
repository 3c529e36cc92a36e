//! [`Query`] collection related to a single [`Sale`].

use std::convert::Infallible;

use common::operations::By;

use crate::{
    domain::{sale, Sale},
    Service,
};

use super::{Query, StateQuery};

/// Queries a [`Sale`] by its [`sale::Id`].
pub type ById = StateQuery<By<Option<Sale>, sale::Id>>;

impl<St> Query<ById> for Service<St> {
    type Ok = Option<Sale>;
    type Err = Infallible;

    async fn execute(&self, query: ById) -> Result<Self::Ok, Self::Err> {
        let id = query.into_inner();
        Ok(self.state().await.journal.get(id).cloned())
    }
}
