//! Marker types distinguishing otherwise identical values.

/// Marker of the moment a record came into existence.
#[derive(Clone, Copy, Debug)]
pub struct Creation;
