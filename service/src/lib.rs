//! Service contains the business logic of the point-of-sale.
//!
//! List of available Cargo features:
#![doc = document_features::document_features!()]
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

pub mod command;
pub mod domain;
pub mod infra;
pub mod query;
pub mod read;
pub mod validation;

use std::sync::Arc;

use common::operations::{By, Select, Update};
use derive_more::{Display, Error, From};
use tokio::sync::{Mutex, MutexGuard};
use tracerr::Traced;
use tracing as log;

#[cfg(test)]
use tempfile as _;

use crate::{
    domain::{Cart, Catalog, IsAuthenticated, Journal, ShopInfo},
    infra::{
        store::{self, Key, Snapshot},
        Store,
    },
};

pub use self::{command::Command, query::Query, validation::Validation};

/// [`Service`] configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct Config {
    /// [`Validation`] policy applied before mutating the state.
    pub validation: Validation,
}

/// Domain service.
///
/// Keeps the whole point-of-sale state in memory and writes a [`Snapshot`]
/// of every changed part into its [`Store`]. Commands are executed one at a
/// time, so snapshots reach the [`Store`] in the order they were issued.
#[derive(Clone, Debug)]
pub struct Service<St> {
    /// Configuration of this [`Service`].
    config: Config,

    /// [`Store`] of this [`Service`].
    store: St,

    /// Current state of this [`Service`].
    state: Arc<Mutex<State>>,
}

/// In-memory state of a [`Service`].
#[derive(Clone, Debug, Default)]
pub(crate) struct State {
    /// Products offered by the shop.
    pub(crate) catalog: Catalog,

    /// In-progress transaction. Never persisted.
    pub(crate) cart: Cart,

    /// Finalized sales.
    pub(crate) journal: Journal,

    /// Profile of the shop.
    pub(crate) shop: ShopInfo,

    /// Whether the operator is logged in.
    pub(crate) is_authenticated: IsAuthenticated,
}

impl<St> Service<St> {
    /// Creates a new [`Service`] restoring its state from the provided
    /// [`Store`].
    ///
    /// Absent [`Snapshot`]s are replaced with defaults, and the [`Cart`]
    /// always starts empty.
    ///
    /// # Errors
    ///
    /// If any of the stored [`Snapshot`]s cannot be read or decoded.
    pub async fn load(
        config: Config,
        store: St,
    ) -> Result<Self, Traced<LoadError>>
    where
        St: Store<
                Select<By<Option<Catalog>, Key>>,
                Ok = Option<Catalog>,
                Err = Traced<store::Error>,
            > + Store<
                Select<By<Option<Journal>, Key>>,
                Ok = Option<Journal>,
                Err = Traced<store::Error>,
            > + Store<
                Select<By<Option<ShopInfo>, Key>>,
                Ok = Option<ShopInfo>,
                Err = Traced<store::Error>,
            > + Store<
                Select<By<Option<IsAuthenticated>, Key>>,
                Ok = Option<IsAuthenticated>,
                Err = Traced<store::Error>,
            >,
    {
        let state = State {
            catalog: restore(&store).await?,
            cart: Cart::default(),
            journal: restore(&store).await?,
            shop: restore(&store).await?,
            is_authenticated: restore(&store).await?,
        };
        log::info!(
            products = state.catalog.products().len(),
            sales = state.journal.sales().len(),
            shop = %state.shop.name,
            "`Service` state restored",
        );

        Ok(Self {
            config,
            store,
            state: Arc::new(Mutex::new(state)),
        })
    }

    /// Returns [`Config`] of this [`Service`].
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns [`Store`] of this [`Service`].
    #[must_use]
    pub fn store(&self) -> &St {
        &self.store
    }

    /// Locks the [`State`] of this [`Service`] for the duration of a single
    /// operation.
    pub(crate) async fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().await
    }

    /// Writes the provided [`Snapshot`] into the [`Store`] of this
    /// [`Service`].
    pub(crate) async fn persist<T>(
        &self,
        snapshot: T,
    ) -> Result<(), Traced<store::Error>>
    where
        T: Snapshot,
        St: Store<Update<T>, Ok = (), Err = Traced<store::Error>>,
    {
        self.store
            .execute(Update(snapshot))
            .await
            .inspect_err(|e| {
                log::error!("failed to persist `{}` snapshot: {e}", T::KEY);
            })
    }
}

/// Reads the [`Snapshot`] of `T` from the provided [`Store`], falling back to
/// its default.
async fn restore<St, T>(store: &St) -> Result<T, Traced<LoadError>>
where
    T: Snapshot + Default,
    St: Store<
        Select<By<Option<T>, Key>>,
        Ok = Option<T>,
        Err = Traced<store::Error>,
    >,
{
    Ok(store
        .execute(Select(By::<Option<T>, _>::new(T::KEY)))
        .await
        .map_err(tracerr::map_from_and_wrap!(=> LoadError))?
        .unwrap_or_default())
}

/// Error of loading a [`Service`].
#[derive(Debug, Display, Error, From)]
pub enum LoadError {
    /// [`Store`] error.
    #[display("`Store` operation failed: {_0}")]
    Store(store::Error),
}
