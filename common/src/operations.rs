//! Abstract operations.

use std::marker::PhantomData;

/// Operation to read a value.
#[derive(Clone, Copy, Debug)]
pub struct Select<T>(pub T);

/// Operation to write a value, replacing the previous one.
#[derive(Clone, Copy, Debug)]
pub struct Update<T>(pub T);

/// Operation to remove a value.
#[derive(Clone, Copy, Debug)]
pub struct Delete<T>(pub T);

/// Selector of `W` by `B`.
///
/// `W` only tags what is expected back, so a [`Handler`] may implement
/// selection of different values by the same `B`.
///
/// [`Handler`]: crate::Handler
#[derive(Clone, Copy, Debug)]
pub struct By<W, B> {
    /// Type of the value to select.
    _what: PhantomData<W>,

    /// Value to select by.
    by: B,
}

impl<W, B> By<W, B> {
    /// Creates a new [`By`] with the given value.
    #[must_use]
    pub fn new(by: B) -> Self {
        Self {
            _what: PhantomData,
            by,
        }
    }

    /// Consumes this [`By`] and returns the inner value.
    #[must_use]
    pub fn into_inner(self) -> B {
        self.by
    }
}
