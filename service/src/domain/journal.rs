//! [`Journal`] definitions.

use serde::{Deserialize, Serialize};

use crate::domain::{sale, Sale};
#[cfg(doc)]
use crate::domain::Catalog;

/// History of finalized [`Sale`]s in the order they were recorded.
///
/// Records are only appended or amended, never removed.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Journal(Vec<Sale>);

impl Journal {
    /// Returns all the recorded [`Sale`]s, oldest first.
    #[must_use]
    pub fn sales(&self) -> &[Sale] {
        &self.0
    }

    /// Returns the [`Sale`] with the provided ID, if any.
    #[must_use]
    pub fn get(&self, id: sale::Id) -> Option<&Sale> {
        self.0.iter().find(|s| s.id == id)
    }

    /// Appends the provided [`Sale`] to this [`Journal`].
    pub fn record(&mut self, sale: Sale) {
        self.0.push(sale);
    }

    /// Replaces the recorded [`Sale`] having the same ID with the provided
    /// one, keeping its position.
    ///
    /// Any field may change, including the sold items. The [`Catalog`] is
    /// not touched. Returns `false` if there is no such [`Sale`].
    pub fn amend(&mut self, sale: Sale) -> bool {
        match self.0.iter_mut().find(|s| s.id == sale.id) {
            Some(s) => {
                *s = sale;
                true
            }
            None => false,
        }
    }
}
