//! [`Command`] for saving the [`ShopInfo`].

use common::operations::Update;
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::ShopInfo,
    infra::{store, Store},
    Service,
};

use super::Command;

/// [`Command`] for replacing the whole [`ShopInfo`].
#[derive(Clone, Debug, From)]
pub struct UpdateShopInfo {
    /// New [`ShopInfo`].
    pub shop: ShopInfo,
}

impl<St> Command<UpdateShopInfo> for Service<St>
where
    St: Store<Update<ShopInfo>, Ok = (), Err = Traced<store::Error>>,
{
    type Ok = ShopInfo;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: UpdateShopInfo,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateShopInfo { shop } = cmd;

        let mut state = self.state().await;

        self.persist(shop.clone())
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        state.shop = shop.clone();

        log::debug!(shop.name = %shop.name, "`ShopInfo` updated");
        Ok(shop)
    }
}

/// Error of [`UpdateShopInfo`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Store`] error.
    #[display("`Store` operation failed: {_0}")]
    Store(store::Error),
}

#[cfg(test)]
mod spec {
    use crate::{
        command::{Command as _, UpdateShopInfo},
        domain::ShopInfo,
        infra::{store::Key, Memory},
        Config, Service,
    };

    use super::ExecutionError;

    fn toko() -> ShopInfo {
        ShopInfo {
            name: "Toko Maju".to_owned(),
            address: "Jl. Merdeka 1".to_owned(),
            phone: "0812".to_owned(),
            email: "toko@example.com".to_owned(),
        }
    }

    #[tokio::test]
    async fn replaces_and_persists() {
        let store = Memory::new();
        let service = Service::load(Config::default(), store.clone())
            .await
            .unwrap();

        let shop = service.execute(UpdateShopInfo::from(toko())).await.unwrap();

        assert_eq!(shop, toko());
        assert_eq!(service.state().await.shop, toko());
        let raw = store.raw(Key::SHOP_INFO).await.unwrap();
        assert!(raw.contains(r#""name":"Toko Maju""#), "{raw}");

        let reloaded = Service::load(Config::default(), store).await.unwrap();
        assert_eq!(reloaded.state().await.shop, toko());
    }

    #[tokio::test]
    async fn failed_write_keeps_previous() {
        let store = Memory::new();
        let service = Service::load(Config::default(), store.clone())
            .await
            .unwrap();
        store.set_read_only(true);

        let err = service
            .execute(UpdateShopInfo::from(toko()))
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::Store(_)));
        assert_eq!(service.state().await.shop, ShopInfo::default());
    }
}
