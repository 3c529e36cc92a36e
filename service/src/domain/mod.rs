//! Domain definitions.

pub mod cart;
pub mod catalog;
pub mod journal;
pub mod product;
pub mod sale;
pub mod session;
pub mod shop;

pub use self::{
    cart::Cart, catalog::Catalog, journal::Journal, product::Product,
    sale::Sale, session::IsAuthenticated, shop::ShopInfo,
};
