//! File-backed [`Store`] implementation.

use std::{
    io,
    path::{Path, PathBuf},
    sync::Arc,
};

use common::operations::{By, Delete, Select, Update};
use tokio::fs;
use tracerr::Traced;

use super::{Error, Key, Snapshot, Store};

/// [`Store`] keeping every [`Snapshot`] in its own `<key>.json` file inside a
/// directory.
///
/// A write goes to a temporary file first, which then atomically replaces
/// the previous [`Snapshot`], so a crash never leaves a half-written one.
#[derive(Clone, Debug)]
pub struct File {
    /// Directory containing the [`Snapshot`] files.
    dir: Arc<PathBuf>,
}

impl File {
    /// Opens a [`File`] store in the provided directory, creating it if
    /// missing.
    ///
    /// # Errors
    ///
    /// If the directory cannot be created.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, Traced<Error>> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .await
            .map_err(tracerr::from_and_wrap!(=> Error))?;
        Ok(Self { dir: Arc::new(dir) })
    }

    /// Returns the directory of this [`File`] store.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the path of the file holding the [`Snapshot`] with the
    /// provided [`Key`].
    fn path(&self, key: Key) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl<T: Snapshot> Store<Select<By<Option<T>, Key>>> for File {
    type Ok = Option<T>;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<T>, Key>>,
    ) -> Result<Self::Ok, Self::Err> {
        let raw = match fs::read(self.path(by.into_inner())).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(tracerr::new!(Error::Io(e))),
        };
        serde_json::from_slice(&raw)
            .map(Some)
            .map_err(tracerr::from_and_wrap!(=> Error))
    }
}

impl<T: Snapshot> Store<Update<T>> for File {
    type Ok = ();
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Update(snapshot): Update<T>,
    ) -> Result<Self::Ok, Self::Err> {
        let raw = serde_json::to_vec(&snapshot)
            .map_err(tracerr::from_and_wrap!(=> Error))?;

        let path = self.path(T::KEY);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, raw)
            .await
            .map_err(tracerr::from_and_wrap!(=> Error))?;
        fs::rename(&tmp, &path)
            .await
            .map_err(tracerr::from_and_wrap!(=> Error))
    }
}

impl Store<Delete<Key>> for File {
    type Ok = ();
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Delete(key): Delete<Key>,
    ) -> Result<Self::Ok, Self::Err> {
        match fs::remove_file(self.path(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(tracerr::new!(Error::Io(e))),
        }
    }
}

#[cfg(test)]
mod spec {
    use common::{
        operations::{By, Delete, Select, Update},
        Money,
    };
    use tempfile::TempDir;

    use crate::{
        domain::{product, Catalog, IsAuthenticated},
        infra::store::{Key, Snapshot as _, Store as _},
    };

    use super::File;

    #[tokio::test]
    async fn snapshots_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let mut catalog = Catalog::default();
        let id = catalog
            .add(product::New {
                name: "Kopi".into(),
                price: Money::from(15000),
                stock: product::Stock::from(5),
            })
            .id;

        let store = File::open(dir.path().join("data")).await.unwrap();
        store.execute(Update(catalog.clone())).await.unwrap();
        drop(store);

        let store = File::open(dir.path().join("data")).await.unwrap();
        let restored = store
            .execute(Select(By::<Option<Catalog>, _>::new(Catalog::KEY)))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(restored, catalog);
        assert!(restored.get(id).is_some());
        assert!(store.dir().join("products.json").exists());
        assert!(!store.dir().join("products.json.tmp").exists());
    }

    #[tokio::test]
    async fn missing_file_reads_as_none() {
        let dir = TempDir::new().unwrap();
        let store = File::open(dir.path()).await.unwrap();

        let flag = store
            .execute(Select(By::<Option<IsAuthenticated>, _>::new(
                IsAuthenticated::KEY,
            )))
            .await
            .unwrap();

        assert_eq!(flag, None);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = File::open(dir.path()).await.unwrap();
        store.execute(Update(IsAuthenticated(true))).await.unwrap();

        store.execute(Delete(Key::IS_AUTHENTICATED)).await.unwrap();
        store.execute(Delete(Key::IS_AUTHENTICATED)).await.unwrap();

        assert!(!dir.path().join("isAuthenticated.json").exists());
    }
}
