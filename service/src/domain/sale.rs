//! [`Sale`] definitions.

use common::{datetime, unit, DateTimeOf, Money};
use derive_more::{AsRef, Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::product::{self, Quantity};
#[cfg(doc)]
use crate::domain::{Cart, Catalog, Product};

/// Finalized transaction of the shop.
///
/// Created at checkout from the [`Cart`] contents. Afterwards it's a
/// historical record: amending it never affects the [`Catalog`].
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    /// ID of this [`Sale`].
    pub id: Id,

    /// Sold [`Item`]s, copied from the [`Cart`] at checkout.
    pub items: Vec<Item>,

    /// Total price of the [`Item`]s at checkout.
    pub total: Money,

    /// [`DateTime`] when this [`Sale`] was created.
    ///
    /// [`DateTime`]: common::DateTime
    #[serde(rename = "timestamp", with = "datetime::serde::unix_timestamp_millis")]
    pub created_at: CreationDateTime,

    /// [`Payment`] received for this [`Sale`].
    pub payment: Payment,

    /// [`Status`] of this [`Sale`] derived at checkout.
    #[serde(rename = "notes")]
    pub status: Status,

    /// Name of the customer, if given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<CustomerName>,
}

impl Sale {
    /// Creates a new [`Sale`] happening right now, deriving its [`Status`]
    /// from the [`Payment`] and the `total`.
    #[must_use]
    pub fn new(
        items: Vec<Item>,
        total: Money,
        payment: Payment,
        customer_name: Option<CustomerName>,
    ) -> Self {
        Self {
            id: Id::new(),
            items,
            total,
            created_at: CreationDateTime::now(),
            status: Status::of(payment.amount_paid, total),
            payment,
            customer_name,
        }
    }

    /// Returns the total amount of sold units.
    #[must_use]
    pub fn units(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity.get())).sum()
    }
}

/// ID of a [`Sale`].
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

/// [`DateTime`] when a [`Sale`] was created.
///
/// [`DateTime`]: common::DateTime
pub type CreationDateTime = DateTimeOf<unit::Creation>;

/// Line of a [`Sale`].
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// ID of the sold [`Product`].
    pub product_id: product::Id,

    /// Sold units of the [`Product`].
    pub quantity: Quantity,
}

/// Payment received for a [`Sale`].
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// Amount the customer paid.
    pub amount_paid: Money,

    /// Change handed back to the customer.
    pub change: Money,
}

/// Fulfilment status of a [`Sale`].
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Eq,
    PartialEq,
    Serialize,
    strum::Display,
    strum::EnumString,
)]
pub enum Status {
    /// Paid in full.
    #[serde(rename = "Lunas")]
    #[strum(serialize = "Lunas")]
    FullyPaid,

    /// Paid partially, as a deposit.
    #[serde(rename = "Dp")]
    #[strum(serialize = "Dp")]
    Deposit,
}

impl Status {
    /// Derives the [`Status`] of a [`Sale`] from the amount paid for it.
    #[must_use]
    pub fn of(amount_paid: Money, total: Money) -> Self {
        if amount_paid >= total {
            Self::FullyPaid
        } else {
            Self::Deposit
        }
    }
}

/// Name of a customer.
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, From, PartialEq, Serialize,
)]
#[as_ref(str, String)]
#[from(&str, String)]
#[serde(transparent)]
pub struct CustomerName(String);

#[cfg(test)]
mod spec {
    use common::Money;
    use serde_json::json;

    use crate::domain::product::{self, Quantity};

    use super::{Item, Payment, Sale, Status};

    #[test]
    fn status_compares_paid_amount_with_total() {
        let total = Money::from(30000);

        assert_eq!(Status::of(Money::from(30000), total), Status::FullyPaid);
        assert_eq!(Status::of(Money::from(30001), total), Status::FullyPaid);
        assert_eq!(Status::of(Money::from(10000), total), Status::Deposit);
        assert_eq!(Status::of(Money::ZERO, Money::ZERO), Status::FullyPaid);
    }

    #[test]
    fn status_notes() {
        assert_eq!(Status::FullyPaid.to_string(), "Lunas");
        assert_eq!(Status::Deposit.to_string(), "Dp");
        assert_eq!("Dp".parse::<Status>().unwrap(), Status::Deposit);
    }

    #[test]
    fn new_sale_derives_status() {
        let sale = Sale::new(
            vec![],
            Money::from(30000),
            Payment {
                amount_paid: Money::from(10000),
                change: Money::ZERO,
            },
            None,
        );

        assert_eq!(sale.status, Status::Deposit);
        assert_eq!(sale.units(), 0);
    }

    #[test]
    fn persisted_layout() {
        let product_id = product::Id::new();
        let sale = Sale::new(
            vec![Item {
                product_id,
                quantity: Quantity::new(2).unwrap(),
            }],
            Money::from(30000),
            Payment {
                amount_paid: Money::from(50000),
                change: Money::from(20000),
            },
            Some("Budi".into()),
        );

        let json = serde_json::to_value(&sale).unwrap();
        assert_eq!(json["items"][0]["productId"], json!(product_id));
        assert_eq!(json["items"][0]["quantity"], json!(2));
        assert_eq!(json["payment"]["amountPaid"].as_f64(), Some(50000.0));
        assert_eq!(json["payment"]["change"].as_f64(), Some(20000.0));
        assert_eq!(json["notes"], json!("Lunas"));
        assert_eq!(json["customerName"], json!("Budi"));
        assert_eq!(
            json["timestamp"],
            json!(sale.created_at.unix_timestamp_millis()),
        );

        let restored: Sale = serde_json::from_value(json).unwrap();
        assert_eq!(restored, sale);
    }

    #[test]
    fn reads_record_without_customer() {
        let json = json!({
            "id": "0b0e5a4e-8a7e-4d3c-9a55-0b3a3c1f9d11",
            "items": [],
            "total": 0,
            "timestamp": 1_700_000_000_123_i64,
            "payment": {"amountPaid": 0, "change": 0},
            "notes": "Lunas",
        });

        let sale: Sale = serde_json::from_value(json).unwrap();
        assert_eq!(sale.customer_name, None);
        assert_eq!(sale.created_at.unix_timestamp_millis(), 1_700_000_000_123);
    }
}
