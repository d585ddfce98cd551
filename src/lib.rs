//! Client for the [CSFloat](https://csfloat.com) market API.
//!
//! ```no_run
//! # async fn run() -> csfloat::Result<()> {
//! let client = csfloat::Client::new("<api key>")?;
//!
//! let query = csfloat::ListingsQuery {
//!     sort_by: csfloat::SortBy::LowestPrice,
//!     ..csfloat::ListingsQuery::market_hash_name("AK-47 | Redline (Field-Tested)")
//! };
//! for listing in client.get_listings(&query).await? {
//!     println!("{} for {} cents", listing.item.market_hash_name, listing.price);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
pub mod data;
mod enums;
mod error;

pub use client::{
    Client, ClientBuilder, ListingsQuery, ProxyConfig, RateLimit, API_KEY_ENV, BASE_URL, PROXY_ENV,
};
pub use data::{Item, Listing, ListingsPage, Reference, Scm, Seller, SellerStatistics, Sticker};
pub use enums::{Category, SortBy};
pub use error::{Error, Result};
