//! [`Error`]-related definitions.

use config::ConfigError;
use derive_more::{Display, Error as StdError, From};
use service::{infra::store, LoadError};
use tracing_subscriber::util::TryInitError;

/// Error of starting the application.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// Configuration is invalid.
    #[display("failed to load `Config`: {_0}")]
    Config(ConfigError),

    /// Global logger cannot be installed.
    #[display("failed to install logger: {_0}")]
    Logging(TryInitError),

    /// Store cannot be opened.
    #[display("failed to open store: {_0}")]
    Store(store::Error),

    /// [`Service`] state cannot be restored.
    ///
    /// [`Service`]: crate::Service
    #[display("failed to load `Service`: {_0}")]
    Load(LoadError),
}
