//! Logging initialization.

use std::io;

use tracing::Level;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::{SubscriberInitExt as _, TryInitError},
};

/// [`Level`]s written into `stderr` rather than `stdout`.
const STDERR_LEVELS: &[Level] = &[Level::WARN, Level::ERROR];

/// Installs the global logger writing events up to the provided [`Level`].
///
/// Warnings and errors go into `stderr`, while everything else goes into
/// `stdout`.
///
/// # Errors
///
/// If the global logger has been installed already.
pub fn init(level: impl Into<Level>) -> Result<(), TryInitError> {
    let level = level.into();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_thread_names(true)
                .with_writer(io::stdout)
                .with_filter(filter_fn(move |meta| {
                    meta.is_span()
                        || (!STDERR_LEVELS.contains(meta.level()))
                            && level >= *meta.level()
                })),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_thread_names(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(move |meta| {
                    meta.is_span()
                        || (STDERR_LEVELS.contains(meta.level()))
                            && level >= *meta.level()
                })),
        )
        .try_init()
}
