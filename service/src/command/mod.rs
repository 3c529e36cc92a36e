//! [`Command`] definition.

pub mod add_product;
pub mod add_to_cart;
pub mod amend_sale;
pub mod checkout;
pub mod edit_product;
pub mod log_in;
pub mod log_out;
pub mod remove_from_cart;
pub mod update_shop_info;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    add_product::AddProduct, add_to_cart::AddToCart, amend_sale::AmendSale,
    checkout::Checkout, edit_product::EditProduct, log_in::LogIn,
    log_out::LogOut, remove_from_cart::RemoveFromCart,
    update_shop_info::UpdateShopInfo,
};
