//! [`ShopInfo`] definitions.

use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;

/// Profile of the shop printed on receipts.
///
/// Replaced as a whole on every save, without any validation.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, SmartDefault)]
#[serde(default)]
pub struct ShopInfo {
    /// Name of the shop.
    #[default("SimplePay".to_owned())]
    pub name: String,

    /// Postal address of the shop.
    pub address: String,

    /// Phone number of the shop.
    pub phone: String,

    /// Email of the shop.
    pub email: String,
}

#[cfg(test)]
mod spec {
    use super::ShopInfo;

    #[test]
    fn default_profile() {
        let shop = ShopInfo::default();

        assert_eq!(shop.name, "SimplePay");
        assert!(shop.address.is_empty());
        assert!(shop.phone.is_empty());
        assert!(shop.email.is_empty());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let shop: ShopInfo =
            serde_json::from_str(r#"{"phone": "0812"}"#).unwrap();

        assert_eq!(shop.name, "SimplePay");
        assert_eq!(shop.phone, "0812");
    }
}
