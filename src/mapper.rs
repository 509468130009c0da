//! Conversion between [`BeerDto`] and the persisted [`Beer`] record.

use crate::domain::{Beer, BeerDto};

/// Pure, total conversion pair. Implementations must be inverse of each
/// other over every field.
pub trait BeerMapper: Send + Sync + 'static {
    fn to_record(&self, dto: BeerDto) -> Beer;
    fn to_dto(&self, beer: Beer) -> BeerDto;
}

/// Field-for-field mapper used by default.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultBeerMapper;

impl BeerMapper for DefaultBeerMapper {
    fn to_record(&self, dto: BeerDto) -> Beer {
        Beer {
            id: dto.id,
            name: dto.name,
            brand: dto.brand,
            max: dto.max,
            quantity: dto.quantity,
            beer_type: dto.beer_type,
        }
    }

    fn to_dto(&self, beer: Beer) -> BeerDto {
        BeerDto {
            id: beer.id,
            name: beer.name,
            brand: beer.brand,
            max: beer.max,
            quantity: beer.quantity,
            beer_type: beer.beer_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::BeerDtoBuilder;

    #[test]
    fn test_mapping_keeps_every_field() {
        let dto = BeerDtoBuilder::default().quantity(3).build();

        let beer = DefaultBeerMapper.to_record(dto.clone());
        assert_eq!(beer.id, Some(1));
        assert_eq!(beer.name, "Brahma");
        assert_eq!(beer.quantity, 3);

        assert_eq!(DefaultBeerMapper.to_dto(beer), dto);
    }
}
