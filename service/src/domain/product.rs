//! [`Product`] definitions.

use std::num::NonZeroU32;

use common::Money;
use derive_more::{AsRef, Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(doc)]
use crate::domain::{Cart, Catalog};

/// Product offered by the shop.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Product {
    /// ID of this [`Product`].
    pub id: Id,

    /// [`Name`] of this [`Product`].
    pub name: Name,

    /// Price of a single unit of this [`Product`].
    pub price: Money,

    /// Units of this [`Product`] still available for sale.
    pub stock: Stock,
}

/// Data of a [`Product`] not yet added to a [`Catalog`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct New {
    /// [`Name`] of a new [`Product`].
    pub name: Name,

    /// Price of a single unit of a new [`Product`].
    pub price: Money,

    /// Initial [`Stock`] of a new [`Product`].
    pub stock: Stock,
}

impl Product {
    /// Creates a new [`Product`] from the provided [`New`] data, assigning
    /// it a fresh [`Id`].
    #[must_use]
    pub fn create(new: New) -> Self {
        let New { name, price, stock } = new;
        Self {
            id: Id::new(),
            name,
            price,
            stock,
        }
    }
}

/// ID of a [`Product`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
#[serde(transparent)]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Name of a [`Product`].
///
/// Any string is accepted, including an empty one.
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, From, PartialEq, Serialize,
)]
#[as_ref(str, String)]
#[from(&str, String)]
#[serde(transparent)]
pub struct Name(String);

/// Amount of [`Product`] units in stock.
///
/// May become negative: reserving more units than available is not
/// rejected unless strict validation is enabled.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(transparent)]
pub struct Stock(i64);

impl Stock {
    /// Indicates whether this [`Stock`] is below zero.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Indicates whether this [`Stock`] covers the provided [`Quantity`].
    #[must_use]
    pub fn covers(self, quantity: Quantity) -> bool {
        self.0 >= i64::from(quantity.get())
    }

    /// Returns this [`Stock`] decreased by the provided [`Quantity`].
    #[must_use]
    pub fn reserve(self, quantity: Quantity) -> Self {
        Self(self.0.saturating_sub(i64::from(quantity.get())))
    }

    /// Returns this [`Stock`] increased by the provided [`Quantity`].
    #[must_use]
    pub fn release(self, quantity: Quantity) -> Self {
        Self(self.0.saturating_add(i64::from(quantity.get())))
    }
}

/// Positive amount of [`Product`] units.
///
/// A [`Cart`] line with zero units is unrepresentable.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(transparent)]
pub struct Quantity(NonZeroU32);

impl Quantity {
    /// A single unit.
    pub const ONE: Self = Self(NonZeroU32::MIN);

    /// Creates a new [`Quantity`] if the provided `units` are positive.
    #[must_use]
    pub fn new(units: u32) -> Option<Self> {
        NonZeroU32::new(units).map(Self)
    }

    /// Returns the amount of units.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Returns this [`Quantity`] increased by a single unit.
    #[must_use]
    pub fn increment(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}
