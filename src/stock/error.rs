use std::fmt;
use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::domain::BeerId;

/// Key a failed lookup was made with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Name(String),
    Id(BeerId),
}

impl Lookup {
    /// Name of the field that was searched.
    pub fn field(&self) -> &'static str {
        match self {
            Lookup::Name(_) => "name",
            Lookup::Id(_) => "id",
        }
    }
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookup::Name(name) => write!(f, "name {}", name),
            Lookup::Id(id) => write!(f, "id {}", id),
        }
    }
}

/// Errors that can occur during stock operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StockError {
    #[error("Beer with name {0} already registered in the system")]
    DuplicateName(String),
    #[error("Beer with {0} not found in the system")]
    NotFound(Lookup),
    #[error(
        "Beer with id {id} cannot take {requested} more: quantity {current} would exceed max stock capacity {max}"
    )]
    CapacityExceeded {
        id: BeerId,
        current: u32,
        requested: u32,
        max: u32,
    },
    #[error("Beer {name} cannot be registered with quantity {quantity} above its max {max}")]
    InvalidQuantity {
        name: String,
        quantity: u32,
        max: u32,
    },
    #[error("Stock store unavailable: {0}")]
    StoreUnavailable(String),
}

impl From<FrameworkError> for StockError {
    fn from(error: FrameworkError) -> Self {
        StockError::StoreUnavailable(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_context() {
        let not_found = StockError::NotFound(Lookup::Name("Skol".into()));
        assert_eq!(not_found.to_string(), "Beer with name Skol not found in the system");

        let exceeded = StockError::CapacityExceeded { id: 1, current: 10, requested: 45, max: 50 };
        assert_eq!(
            exceeded.to_string(),
            "Beer with id 1 cannot take 45 more: quantity 10 would exceed max stock capacity 50"
        );

        let invalid = StockError::InvalidQuantity { name: "Brahma".into(), quantity: 60, max: 50 };
        assert_eq!(
            invalid.to_string(),
            "Beer Brahma cannot be registered with quantity 60 above its max 50"
        );

        assert_eq!(Lookup::Id(3).field(), "id");
    }

    #[test]
    fn test_framework_errors_become_store_unavailable() {
        assert_eq!(
            StockError::from(FrameworkError::ActorClosed),
            StockError::StoreUnavailable("Actor closed".into())
        );
    }
}
