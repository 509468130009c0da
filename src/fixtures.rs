//! Test data shared by the unit and scenario tests.

use crate::domain::{BeerDto, BeerId, BeerType};

/// Builds a [`BeerDto`] starting from the "Brahma" fixture:
/// id 1, brand "Ambev", max 50, quantity 10, lager.
#[derive(Debug, Clone)]
pub struct BeerDtoBuilder {
    id: Option<BeerId>,
    name: String,
    brand: String,
    max: u32,
    quantity: u32,
    beer_type: BeerType,
}

impl Default for BeerDtoBuilder {
    fn default() -> Self {
        Self {
            id: Some(1),
            name: "Brahma".to_string(),
            brand: "Ambev".to_string(),
            max: 50,
            quantity: 10,
            beer_type: BeerType::Lager,
        }
    }
}

impl BeerDtoBuilder {
    pub fn id(mut self, id: Option<BeerId>) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn max(mut self, max: u32) -> Self {
        self.max = max;
        self
    }

    pub fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn build(self) -> BeerDto {
        BeerDto {
            id: self.id,
            name: self.name,
            brand: self.brand,
            max: self.max,
            quantity: self.quantity,
            beer_type: self.beer_type,
        }
    }
}
