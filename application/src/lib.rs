//! Application wires the [`Service`] with its infrastructure, so a
//! presentation layer only has to embed it.

#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod config;
pub mod error;
pub mod log;

#[cfg(test)]
use tempfile as _;
use tracerr::Traced;

pub use self::{config::Config, error::Error, log::init as init_logging};

/// [`Service`] with filled infrastructure dependencies.
///
/// [`Service`]: service::Service
pub type Service = service::Service<service::infra::File>;

/// Loads the [`Config`] from the provided `path`, installs the global logger
/// and [`start`]s a [`Service`].
///
/// # Errors
///
/// If the [`Config`] is invalid, the logger has been installed already, or
/// the [`Service`] fails to [`start`].
pub async fn bootstrap(
    path: impl AsRef<str>,
) -> Result<Service, Traced<Error>> {
    let config =
        Config::new(path).map_err(tracerr::from_and_wrap!(=> Error))?;
    init_logging(config.log.level)
        .map_err(tracerr::from_and_wrap!(=> Error))?;
    start(config).await.map_err(tracerr::wrap!())
}

/// Opens the [`File`] store at the configured path and loads a [`Service`]
/// from it.
///
/// # Errors
///
/// If the store directory cannot be created, or its snapshots cannot be
/// read.
///
/// [`File`]: service::infra::File
pub async fn start(config: Config) -> Result<Service, Traced<Error>> {
    let Config {
        store,
        service: service_config,
        log: _,
    } = config;

    let file = service::infra::File::open(store.path)
        .await
        .map_err(tracerr::map_from_and_wrap!(=> Error))?;
    tracing::info!("`File` store opened at `{}`", file.dir().display());

    service::Service::load(service_config.into(), file)
        .await
        .map_err(tracerr::map_from_and_wrap!(=> Error))
}

#[cfg(test)]
mod spec {
    use service::{
        command::{AddProduct, Command as _, LogIn},
        domain::product::Stock,
        query::{self, Query as _},
    };
    use tempfile::TempDir;

    use crate::{config, Config};

    #[tokio::test]
    async fn restarted_service_sees_persisted_state() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            store: config::Store {
                path: dir.path().join("data"),
            },
            ..Config::default()
        };

        let service = super::start(config.clone()).await.unwrap();
        let product = service
            .execute(AddProduct {
                name: "Kopi".into(),
                price: "15000".parse().unwrap(),
                stock: Stock::from(5),
            })
            .await
            .unwrap();
        service.execute(LogIn).await.unwrap();
        drop(service);

        let service = super::start(config).await.unwrap();

        let products = service
            .execute(query::products::All::by(()))
            .await
            .unwrap();
        assert_eq!(products, [product]);
        let is_authenticated = service
            .execute(query::session::Current::by(()))
            .await
            .unwrap();
        assert_eq!(is_authenticated, true);
    }
}
