use serde::{Serialize, Serializer};

use crate::enums::{Category, SortBy};

/// Filters for [`Client::get_listings`](crate::Client::get_listings).
///
/// Every filter left as `None` (or an empty `def_index`) is left out of the request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingsQuery {
    pub page: u32,
    pub limit: u32,
    pub sort_by: SortBy,
    pub category: Category,
    #[serde(serialize_with = "comma_separated", skip_serializing_if = "Vec::is_empty")]
    pub def_index: Vec<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_float: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_float: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rarity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paint_seed: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paint_index: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,
    /// In cents
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<u64>,
    /// In cents
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_hash_name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stickers: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    /// Print the raw response to stdout
    #[serde(skip)]
    pub debug: bool,
}

impl Default for ListingsQuery {
    fn default() -> Self {
        Self {
            page: 0,
            limit: 50,
            sort_by: SortBy::default(),
            category: Category::default(),
            def_index: Vec::new(),
            min_float: None,
            max_float: None,
            rarity: None,
            paint_seed: None,
            paint_index: None,
            user_id: None,
            collection: None,
            min_price: None,
            max_price: None,
            market_hash_name: None,
            item_type: None,
            stickers: None,
            cursor: None,
            debug: false,
        }
    }
}

impl ListingsQuery {
    pub fn market_hash_name(name: impl Into<String>) -> Self {
        Self {
            market_hash_name: Some(name.into()),
            ..Default::default()
        }
    }
}

fn comma_separated<S>(values: &[u32], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let joined = values
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(",");
    serializer.serialize_str(&joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(query: &ListingsQuery) -> Vec<(String, String)> {
        let encoded = serde_urlencoded::to_string(query).unwrap();
        serde_urlencoded::from_str(&encoded).unwrap()
    }

    fn get<'p>(pairs: &'p [(String, String)], key: &str) -> Option<&'p str> {
        pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn defaults() {
        assert_eq!(
            serde_urlencoded::to_string(ListingsQuery::default()).unwrap(),
            "page=0&limit=50&sort_by=best_deal&category=0"
        );
    }

    #[test]
    fn def_index_joined() {
        let query = ListingsQuery {
            def_index: vec![1, 7, 13],
            ..Default::default()
        };
        assert_eq!(get(&pairs(&query), "def_index"), Some("1,7,13"));
    }

    #[test]
    fn absent_filters_are_omitted() {
        let pairs = pairs(&ListingsQuery::market_hash_name("AK-47 | Redline (Field-Tested)"));
        let keys: Vec<&str> = pairs.iter().map(|(k, _)| k.as_str()).collect();

        assert_eq!(
            keys,
            ["page", "limit", "sort_by", "category", "market_hash_name"]
        );
        assert_eq!(
            get(&pairs, "market_hash_name"),
            Some("AK-47 | Redline (Field-Tested)")
        );
    }

    #[test]
    fn zero_values_are_sent() {
        let query = ListingsQuery {
            paint_seed: Some(0),
            paint_index: Some(0),
            min_price: Some(0),
            rarity: Some(0),
            ..Default::default()
        };
        let pairs = pairs(&query);

        for key in ["paint_seed", "paint_index", "min_price", "rarity"] {
            assert_eq!(get(&pairs, key), Some("0"), "{key}");
        }
        assert_eq!(get(&pairs, "max_price"), None);
    }

    #[test]
    fn all_filters() {
        let query = ListingsQuery {
            page: 2,
            limit: 10,
            sort_by: SortBy::LowestFloat,
            category: Category::StatTrak,
            def_index: vec![7],
            min_float: Some(0.01),
            max_float: Some(0.07),
            rarity: Some(5),
            paint_seed: Some(661),
            paint_index: Some(282),
            user_id: Some("76561198012345678".to_string()),
            collection: Some("set_community_2".to_string()),
            min_price: Some(100),
            max_price: Some(10_000),
            market_hash_name: Some("AK-47 | Redline (Minimal Wear)".to_string()),
            item_type: Some("skin".to_string()),
            stickers: Some("5929|0".to_string()),
            cursor: Some("abc".to_string()),
            debug: true,
        };
        let pairs = pairs(&query);

        assert_eq!(get(&pairs, "page"), Some("2"));
        assert_eq!(get(&pairs, "limit"), Some("10"));
        assert_eq!(get(&pairs, "sort_by"), Some("lowest_float"));
        assert_eq!(get(&pairs, "category"), Some("2"));
        assert_eq!(get(&pairs, "def_index"), Some("7"));
        assert_eq!(get(&pairs, "min_float"), Some("0.01"));
        assert_eq!(get(&pairs, "max_float"), Some("0.07"));
        assert_eq!(get(&pairs, "type"), Some("skin"));
        assert_eq!(get(&pairs, "stickers"), Some("5929|0"));
        assert_eq!(get(&pairs, "cursor"), Some("abc"));
        assert_eq!(get(&pairs, "user_id"), Some("76561198012345678"));
        assert_eq!(get(&pairs, "debug"), None);
        assert_eq!(pairs.len(), 18);
    }
}
