use std::{fmt::Display, str::FromStr};

use crate::Error;

/// The order in which the listings endpoint returns its results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    LowestPrice,
    HighestPrice,
    MostRecent,
    ExpiresSoon,
    LowestFloat,
    HighestFloat,
    #[default]
    BestDeal,
    HighestDiscount,
    FloatRank,
    NumBids,
}

impl SortBy {
    pub const ALL: [SortBy; 10] = [
        Self::LowestPrice,
        Self::HighestPrice,
        Self::MostRecent,
        Self::ExpiresSoon,
        Self::LowestFloat,
        Self::HighestFloat,
        Self::BestDeal,
        Self::HighestDiscount,
        Self::FloatRank,
        Self::NumBids,
    ];
}

impl From<&SortBy> for &'static str {
    fn from(value: &SortBy) -> Self {
        match value {
            SortBy::LowestPrice => "lowest_price",
            SortBy::HighestPrice => "highest_price",
            SortBy::MostRecent => "most_recent",
            SortBy::ExpiresSoon => "expires_soon",
            SortBy::LowestFloat => "lowest_float",
            SortBy::HighestFloat => "highest_float",
            SortBy::BestDeal => "best_deal",
            SortBy::HighestDiscount => "highest_discount",
            SortBy::FloatRank => "float_rank",
            SortBy::NumBids => "num_bids",
        }
    }
}

impl Display for SortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.into())
    }
}

impl FromStr for SortBy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|sort| <&'static str>::from(sort) == s)
            .ok_or_else(|| Error::InvalidParameter(format!("unknown sort_by value {s:?}")))
    }
}

/// Restricts listings to normal, StatTrak™ or Souvenir items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    Any,
    Normal,
    StatTrak,
    Souvenir,
}

impl From<Category> for u8 {
    fn from(value: Category) -> Self {
        match value {
            Category::Any => 0,
            Category::Normal => 1,
            Category::StatTrak => 2,
            Category::Souvenir => 3,
        }
    }
}

impl TryFrom<u8> for Category {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Any),
            1 => Ok(Self::Normal),
            2 => Ok(Self::StatTrak),
            3 => Ok(Self::Souvenir),
            other => Err(Error::InvalidParameter(format!(
                "unknown category value {other}"
            ))),
        }
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "any" => Ok(Self::Any),
            "normal" => Ok(Self::Normal),
            "stattrak" => Ok(Self::StatTrak),
            "souvenir" => Ok(Self::Souvenir),
            other => other
                .parse::<u8>()
                .map_err(|_| Error::InvalidParameter(format!("unknown category value {other:?}")))
                .and_then(Self::try_from),
        }
    }
}

impl serde::Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8((*self).into())
    }
}
