//! # rentacar-dashboard
//!
//! Headless engine for the rent-a-car dashboard: session state, transaction
//! orchestrators, the role-gated list view model, and modal controllers.
//! Ledger logic lives in the smart contract; this crate only composes calls
//! into it through the `rentacar-core` collaborator traits and mirrors the
//! results in an optimistic local cache.

pub mod actions;
pub mod modal;
pub mod page;
pub mod session;
pub mod view;

pub use actions::ActionRunner;
pub use page::{ActiveModal, Dashboard};
pub use session::Session;
