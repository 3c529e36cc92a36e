//! [`Query`] definition.
//!
//! Every [`Query`] reads the in-memory state of a [`Service`], which always
//! mirrors what was last persisted, so it never touches the [`Store`].
//!
//! [`Store`]: crate::infra::Store

pub mod cart;
pub mod product;
pub mod products;
pub mod receipt;
pub mod sale;
pub mod sales;
pub mod session;
pub mod shop;

use common::operations::By;

#[cfg(doc)]
use crate::Service;

/// [`Query`] of the [`Service`].
pub use common::Handler as Query;

/// [`Query`] selecting a `T`ype from the state of a [`Service`].
#[derive(Clone, Copy, Debug)]
#[expect(clippy::module_name_repetitions, reason = "more readable")]
pub struct StateQuery<T>(T);

impl<W, B> StateQuery<By<W, B>> {
    /// Creates a new [`StateQuery`] selecting a `W` by the provided `B`.
    #[must_use]
    pub fn by(by: B) -> Self {
        Self(By::new(by))
    }

    /// Returns the value this [`StateQuery`] selects by.
    fn into_inner(self) -> B {
        self.0.into_inner()
    }
}
