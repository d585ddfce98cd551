use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Error;

pub(crate) mod de;

use de::Entity;

/// An active offer on the market
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Listing {
    pub id: String,
    #[serde(deserialize_with = "de::created_at::deserialize")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "type")]
    pub type_: String,
    /// In cents
    pub price: u64,
    pub state: String,
    #[serde(default, deserialize_with = "de::nested_or_default")]
    pub seller: Seller,
    #[serde(deserialize_with = "de::nested")]
    pub item: Item,
    #[serde(default, deserialize_with = "de::nested_or_default")]
    pub reference: Reference,
    #[serde(default)]
    pub is_seller: bool,
    #[serde(default)]
    pub is_watchlisted: bool,
    /// Only sent when the seller accepts offers, `0` otherwise
    #[serde(default)]
    pub min_offer_price: u64,
    #[serde(default)]
    pub max_offer_discount: Option<u32>,
    #[serde(default)]
    pub watchers: u32,
}

impl Entity for Listing {
    const NAME: &'static str = "Listing";
}

impl Listing {
    pub fn from_value(value: serde_json::Value) -> Result<Self, Error> {
        serde_json::from_value(value).map_err(|source| Error::Model {
            entity: Self::NAME,
            source,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Seller {
    pub steam_id: Option<String>,
    pub username: Option<String>,
    pub avatar: Option<String>,
    pub obfuscated_id: Option<String>,
    pub online: bool,
    pub away: bool,
    pub stall_public: bool,
    pub has_valid_steam_api_key: bool,
    pub flags: Option<u32>,
    pub verification_mode: Option<String>,
    #[serde(deserialize_with = "de::nested_or_default")]
    pub statistics: SellerStatistics,
}

impl Entity for Seller {
    const NAME: &'static str = "Seller";
}

/// Trade history of a seller. New accounts come without any of these
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SellerStatistics {
    pub median_trade_time: Option<u64>,
    pub total_avoided_trades: Option<u64>,
    pub total_failed_trades: Option<u64>,
    pub total_trades: Option<u64>,
    pub total_verified_trades: Option<u64>,
}

impl Entity for SellerStatistics {
    const NAME: &'static str = "SellerStatistics";
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Item {
    pub asset_id: String,
    pub def_index: u32,
    pub market_hash_name: String,
    #[serde(default)]
    pub paint_index: Option<u32>,
    #[serde(default)]
    pub paint_seed: Option<u32>,
    #[serde(default)]
    pub float_value: Option<f64>,
    #[serde(default)]
    pub low_rank: Option<u32>,
    #[serde(default)]
    pub high_rank: Option<u32>,
    #[serde(default)]
    pub rarity: Option<u32>,
    #[serde(default)]
    pub quality: Option<u32>,
    #[serde(default)]
    pub icon_url: Option<String>,
    #[serde(default)]
    pub d_param: Option<String>,
    #[serde(default)]
    pub inspect_link: Option<String>,
    #[serde(default)]
    pub is_stattrak: bool,
    #[serde(default)]
    pub is_souvenir: bool,
    #[serde(default)]
    pub is_commodity: bool,
    #[serde(default)]
    pub has_screenshot: bool,
    #[serde(default)]
    pub tradable: Option<u32>,
    #[serde(default, rename = "type")]
    pub type_: Option<String>,
    #[serde(default)]
    pub type_name: Option<String>,
    #[serde(default)]
    pub rarity_name: Option<String>,
    #[serde(default)]
    pub item_name: Option<String>,
    #[serde(default)]
    pub wear_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub collection: Option<String>,
    #[serde(default, deserialize_with = "de::nested_list_or_empty")]
    pub stickers: Vec<Sticker>,
    #[serde(default, deserialize_with = "de::null_as_empty")]
    pub badges: Vec<serde_json::Value>,
    #[serde(default, deserialize_with = "de::nested_or_default")]
    pub scm: Scm,
}

impl Entity for Item {
    const NAME: &'static str = "Item";
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Sticker {
    #[serde(rename = "stickerId")]
    pub sticker_id: u32,
    pub slot: u8,
    pub name: String,
    #[serde(default)]
    pub icon_url: Option<String>,
    #[serde(default)]
    pub wear: Option<f64>,
    #[serde(default, deserialize_with = "de::nested_or_default")]
    pub scm: Scm,
}

impl Entity for Sticker {
    const NAME: &'static str = "Sticker";
}

/// Steam Community Market data for an item or sticker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Scm {
    /// In cents
    pub price: Option<u64>,
    pub volume: Option<u64>,
}

impl Entity for Scm {
    const NAME: &'static str = "Scm";
}

/// CSFloat's own price estimate for the listed item
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Reference {
    pub base_price: Option<u64>,
    pub float_factor: Option<f64>,
    pub predicted_price: Option<u64>,
    pub quantity: Option<u64>,
    #[serde(deserialize_with = "de::last_updated::deserialize")]
    pub last_updated: Option<DateTime<Utc>>,
}

impl Entity for Reference {
    const NAME: &'static str = "Reference";
}

/// One page of listings together with the cursor for the next one
#[derive(Debug, Clone, PartialEq)]
pub struct ListingsPage {
    pub listings: Vec<Listing>,
    pub cursor: Option<String>,
}
