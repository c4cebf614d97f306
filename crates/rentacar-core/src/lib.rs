//! # rentacar-core
//!
//! Foundation crate for the rent-a-car dashboard engine.
//! Defines domain types, amount arithmetic, errors, config, and the
//! collaborator traits. The dashboard crate depends on this.

pub mod config;
pub mod errors;
pub mod telemetry;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::DashboardConfig;
pub use errors::{DashboardError, DashboardResult};
pub use types::account::AccountId;
pub use types::amounts::{Stroops, STROOPS_PER_XLM};
pub use types::car::{Car, CarStatus, NewCar};
pub use types::role::UserRole;
pub use types::tx::TxHash;
