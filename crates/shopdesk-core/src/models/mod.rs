//! Wire-facing domain models shared by the API client and the CLI.

pub mod asset;
pub mod catalog;
pub mod combo;
pub mod common;
pub mod dealer;
pub mod order;
pub mod product;
pub mod promotion;
pub mod user;

pub use asset::RemoteAsset;
pub use catalog::{CatalogDraft, Category, CategoryDraft, Keyword, ProductField, Size, Variant};
pub use combo::{ComboDraft, ComboProduct};
pub use common::{Page, PageQuery};
pub use dealer::{Dealer, DealerRateUpdate};
pub use order::{Order, OrderItem, OrderStatus};
pub use product::{Product, ProductDraft};
pub use promotion::{
    Coupon, CouponDraft, DiscountKind, FlashSale, FlashSaleDraft, FlashSaleItem, Offer, OfferDraft,
};
pub use user::{Review, User, UserRole};
