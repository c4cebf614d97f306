//! List view model — which action each row shows, and the display row itself.

use rentacar_core::{AccountId, Car, CarStatus, UserRole};

/// Action button visible on a car row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarAction {
    Delete,
    Withdraw,
    Rent,
    Return,
}

/// Badge tone for a status cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Green,
    Blue,
    Yellow,
}

/// The action a user with `role` can take on a car in `status`.
pub fn action_for(role: UserRole, status: CarStatus) -> Option<CarAction> {
    match role {
        UserRole::Admin => Some(CarAction::Delete),
        UserRole::Owner => match status {
            // Withdraw only once the car is back; nothing while it is out.
            CarStatus::Available => Some(CarAction::Withdraw),
            CarStatus::Rented | CarStatus::Maintenance => None,
        },
        UserRole::Renter => match status {
            CarStatus::Available => Some(CarAction::Rent),
            CarStatus::Rented => Some(CarAction::Return),
            CarStatus::Maintenance => None,
        },
    }
}

pub fn badge_tone(status: CarStatus) -> BadgeTone {
    match status {
        CarStatus::Available => BadgeTone::Green,
        CarStatus::Rented => BadgeTone::Blue,
        CarStatus::Maintenance => BadgeTone::Yellow,
    }
}

/// A fully formatted table row.
#[derive(Debug, Clone, PartialEq)]
pub struct CarRow {
    pub brand: String,
    pub model: String,
    pub color: String,
    pub passengers: u32,
    pub ac_label: &'static str,
    /// Full owner address, the key the action dispatch uses.
    pub owner: AccountId,
    pub owner_short: String,
    pub price_per_day_xlm: String,
    pub status_label: &'static str,
    pub badge: BadgeTone,
    pub action: Option<CarAction>,
}

impl CarRow {
    /// Build the row a user with `role` sees for `car`.
    pub fn build(car: &Car, role: UserRole) -> CarRow {
        CarRow {
            brand: car.brand.clone(),
            model: car.model.clone(),
            color: car.color.clone(),
            passengers: car.passengers,
            ac_label: if car.ac { "Yes" } else { "No" },
            owner: car.owner.clone(),
            owner_short: car.owner.short(),
            price_per_day_xlm: car.price_per_day.to_xlm_string(),
            status_label: car.status.label(),
            badge: badge_tone(car.status),
            action: action_for(role, car.status),
        }
    }
}

/// Rows for the whole collection.
pub fn rows(cars: &[Car], role: UserRole) -> Vec<CarRow> {
    cars.iter().map(|car| CarRow::build(car, role)).collect()
}
