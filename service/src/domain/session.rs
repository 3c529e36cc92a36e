//! Authentication session definitions.

use derive_more::Deref;
use serde::{Deserialize, Serialize};

/// Indicator whether the shop operator is logged in.
///
/// The core doesn't enforce it: it only gates the presentation layer.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deref,
    Deserialize,
    Eq,
    Hash,
    PartialEq,
    Serialize,
)]
#[serde(transparent)]
pub struct IsAuthenticated(pub bool);

impl PartialEq<bool> for IsAuthenticated {
    fn eq(&self, other: &bool) -> bool {
        self.0 == *other
    }
}
