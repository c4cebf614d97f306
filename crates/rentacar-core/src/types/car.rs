//! Car records — the optimistic local cache of contract state.

use serde::{Deserialize, Serialize};

use crate::types::account::AccountId;
use crate::types::amounts::Stroops;

/// Lifecycle status of a listed car, mirroring the contract enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CarStatus {
    Available,
    Rented,
    Maintenance,
}

impl CarStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Rented => "Rented",
            Self::Maintenance => "Maintenance",
        }
    }
}

/// A listed car. One car per owner address, as on-chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub brand: String,
    pub model: String,
    pub color: String,
    pub passengers: u32,
    pub ac: bool,
    pub price_per_day: Stroops,
    pub owner: AccountId,
    pub status: CarStatus,
}

/// Payload for listing a new car, produced by the create form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCar {
    pub brand: String,
    pub model: String,
    pub color: String,
    pub passengers: u32,
    pub ac: bool,
    pub price_per_day: Stroops,
    pub owner: AccountId,
}

impl NewCar {
    /// The optimistic row appended after a successful add-car submit.
    pub fn into_car(self) -> Car {
        Car {
            brand: self.brand,
            model: self.model,
            color: self.color,
            passengers: self.passengers,
            ac: self.ac,
            price_per_day: self.price_per_day,
            owner: self.owner,
            status: CarStatus::Available,
        }
    }
}
