//! Infrastructure layer.

pub mod store;

pub use self::store::Store;
#[cfg(feature = "file")]
pub use self::store::File;
pub use self::store::Memory;
