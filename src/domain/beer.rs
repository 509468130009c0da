use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier handed out by the record store.
pub type BeerId = u64;

/// Beer style. Carried through mapping verbatim, no behavior hangs off it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BeerType {
    Lager,
    Malzbier,
    Witbier,
    Weiss,
    Ale,
    Ipa,
    Stout,
}

impl BeerType {
    pub fn description(&self) -> &'static str {
        match self {
            BeerType::Lager => "Lager",
            BeerType::Malzbier => "Malzbier",
            BeerType::Witbier => "Witbier",
            BeerType::Weiss => "Weiss",
            BeerType::Ale => "Ale",
            BeerType::Ipa => "IPA",
            BeerType::Stout => "Stout",
        }
    }
}

impl fmt::Display for BeerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A stock entry as persisted by the record store.
///
/// # Invariants
/// - `name` is unique across the store
/// - `quantity <= max` after every successful stock operation
/// - `id` and `max` never change once the record is saved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Beer {
    pub id: Option<BeerId>,
    pub name: String,
    pub brand: String,
    pub max: u32,
    pub quantity: u32,
    pub beer_type: BeerType,
}

impl Beer {
    /// Quantity the record would hold after adding `amount`, or `None` when
    /// that would go past `max` (overflow included).
    pub fn stock_after(&self, amount: u32) -> Option<u32> {
        self.quantity
            .checked_add(amount)
            .filter(|candidate| *candidate <= self.max)
    }
}
