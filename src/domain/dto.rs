use serde::{Deserialize, Serialize};

use super::{BeerId, BeerType};

/// Boundary shape of a beer, accepted and returned by the stock service.
///
/// Field for field the same as [`Beer`](super::Beer); `id` is left out of
/// the JSON until the store has assigned one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeerDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<BeerId>,
    pub name: String,
    pub brand: String,
    pub max: u32,
    pub quantity: u32,
    #[serde(rename = "type")]
    pub beer_type: BeerType,
}

impl BeerDto {
    pub fn new(
        name: impl Into<String>,
        brand: impl Into<String>,
        max: u32,
        quantity: u32,
        beer_type: BeerType,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            brand: brand.into(),
            max,
            quantity,
            beer_type,
        }
    }
}
