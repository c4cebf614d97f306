//! Modal form controllers.
//!
//! Headless counterparts of the dashboard's modal dialogs: each owns its
//! field state and an `is_submitting` flag, validates at the input boundary,
//! and hands validated values to the action runner. One policy for all of
//! them: stay open on failure, close on success.

mod commission;
mod create_car;
mod rent;
mod withdraw;

pub use commission::SetCommissionModal;
pub use create_car::CreateCarForm;
pub use rent::RentCarModal;
pub use withdraw::{WithdrawCommissionModal, WithdrawForm, WithdrawOwnerModal};
