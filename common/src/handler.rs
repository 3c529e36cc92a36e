//! [`Handler`] abstractions.

use std::future::Future;

/// Executable handler of some `Args`.
///
/// Commands, queries and storage operations are all expressed as
/// [`Handler`]s parametrized by the operation they accept.
pub trait Handler<Args = ()> {
    /// Type of a successful [`Handler`] result.
    type Ok;

    /// Type of this [`Handler`] error.
    type Err;

    /// Executes this [`Handler`] with the provided `args`.
    fn execute(
        &self,
        args: Args,
    ) -> impl Future<Output = Result<Self::Ok, Self::Err>>;
}
