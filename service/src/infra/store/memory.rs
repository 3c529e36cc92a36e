//! In-memory [`Store`] implementation.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

use common::operations::{By, Delete, Select, Update};
use tokio::sync::RwLock;
use tracerr::Traced;

use super::{Error, Key, Snapshot, Store};

/// [`Store`] keeping JSON-encoded [`Snapshot`]s in memory.
///
/// Clones share the same entries. Nothing survives the process, so it suits
/// tests and throwaway sessions.
#[derive(Clone, Debug, Default)]
pub struct Memory {
    /// JSON-encoded [`Snapshot`]s by their [`Key`]s.
    entries: Arc<RwLock<HashMap<Key, String>>>,

    /// Whether writes are refused.
    read_only: Arc<AtomicBool>,
}

impl Memory {
    /// Creates a new empty [`Memory`] store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes this [`Memory`] store refuse (or accept again) all writes with
    /// an [`Error::Unavailable`].
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.store(read_only, Ordering::SeqCst);
    }

    /// Puts the provided raw JSON under the provided [`Key`], bypassing any
    /// checks.
    pub async fn insert_raw(&self, key: Key, json: impl Into<String>) {
        _ = self.entries.write().await.insert(key, json.into());
    }

    /// Returns the raw JSON stored under the provided [`Key`], if any.
    pub async fn raw(&self, key: Key) -> Option<String> {
        self.entries.read().await.get(&key).cloned()
    }

    /// Fails if this [`Memory`] store is read-only.
    fn ensure_writable(&self, key: Key) -> Result<(), Traced<Error>> {
        if self.read_only.load(Ordering::SeqCst) {
            return Err(tracerr::new!(Error::Unavailable(key)));
        }
        Ok(())
    }
}

impl<T: Snapshot> Store<Select<By<Option<T>, Key>>> for Memory {
    type Ok = Option<T>;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<T>, Key>>,
    ) -> Result<Self::Ok, Self::Err> {
        let Some(raw) = self.raw(by.into_inner()).await else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(tracerr::from_and_wrap!(=> Error))
    }
}

impl<T: Snapshot> Store<Update<T>> for Memory {
    type Ok = ();
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Update(snapshot): Update<T>,
    ) -> Result<Self::Ok, Self::Err> {
        self.ensure_writable(T::KEY)?;
        let raw = serde_json::to_string(&snapshot)
            .map_err(tracerr::from_and_wrap!(=> Error))?;
        self.insert_raw(T::KEY, raw).await;
        Ok(())
    }
}

impl Store<Delete<Key>> for Memory {
    type Ok = ();
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Delete(key): Delete<Key>,
    ) -> Result<Self::Ok, Self::Err> {
        self.ensure_writable(key)?;
        _ = self.entries.write().await.remove(&key);
        Ok(())
    }
}
