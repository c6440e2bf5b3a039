//! Domain entities stored in the key-value store.
//!
//! Every entity serializes with camelCase field names; the stored JSON is
//! exactly what the API returns, so there is no separate wire representation.
//! Each model exposes its storage key layout (`{type}:{id}`) next to the
//! type it belongs to.

pub mod chat;
pub mod product;
pub mod user;
pub mod wishlist;

pub use chat::ChatMessage;
pub use product::{NewProduct, Product};
pub use user::{UserProfile, UserSummary};
pub use wishlist::WishlistEntry;
