//! [`Store`]-related implementations.
//!
//! The [`Store`] keeps whole-collection snapshots under a few well-known
//! [`Key`]s, each one replaced entirely on every write.

#[cfg(feature = "file")]
pub mod file;
pub mod memory;

use std::io;

use derive_more::{Display, Error as StdError, From};
use serde::{de::DeserializeOwned, Serialize};

use crate::domain::{Catalog, IsAuthenticated, Journal, ShopInfo};

#[cfg(feature = "file")]
pub use self::file::File;
pub use self::memory::Memory;

/// Durable key-value storage operation.
pub use common::Handler as Store;

/// Key of a [`Snapshot`] in a [`Store`].
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub struct Key(&'static str);

impl Key {
    /// [`Key`] of the [`Catalog`] products.
    pub const PRODUCTS: Self = Self("products");

    /// [`Key`] of the [`Journal`] sales.
    pub const SALES: Self = Self("sales");

    /// [`Key`] of the [`ShopInfo`].
    pub const SHOP_INFO: Self = Self("shopInfo");

    /// [`Key`] of the [`IsAuthenticated`] flag.
    pub const IS_AUTHENTICATED: Self = Self("isAuthenticated");

    /// Returns the string representation of this [`Key`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

/// Value persisted as a whole under its own [`Key`].
pub trait Snapshot: Serialize + DeserializeOwned {
    /// [`Key`] this [`Snapshot`] is stored under.
    const KEY: Key;
}

impl Snapshot for Catalog {
    const KEY: Key = Key::PRODUCTS;
}

impl Snapshot for Journal {
    const KEY: Key = Key::SALES;
}

impl Snapshot for ShopInfo {
    const KEY: Key = Key::SHOP_INFO;
}

impl Snapshot for IsAuthenticated {
    const KEY: Key = Key::IS_AUTHENTICATED;
}

/// [`Store`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// Failed to access the underlying storage.
    #[display("I/O failed: {_0}")]
    Io(io::Error),

    /// Failed to encode or decode a [`Snapshot`].
    #[display("(de)serialization failed: {_0}")]
    Serialization(serde_json::Error),

    /// [`Store`] refuses to write the [`Snapshot`] with the provided [`Key`].
    #[display("`{_0}` cannot be written")]
    #[from(ignore)]
    Unavailable(#[error(not(source))] Key),
}
