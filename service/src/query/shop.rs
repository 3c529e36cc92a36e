//! [`Query`] collection related to the [`ShopInfo`].

use std::convert::Infallible;

use common::operations::By;

use crate::{domain::ShopInfo, Service};

use super::{Query, StateQuery};

/// Queries the current [`ShopInfo`].
pub type Info = StateQuery<By<ShopInfo, ()>>;

impl<St> Query<Info> for Service<St> {
    type Ok = ShopInfo;
    type Err = Infallible;

    async fn execute(&self, _: Info) -> Result<Self::Ok, Self::Err> {
        Ok(self.state().await.shop.clone())
    }
}
