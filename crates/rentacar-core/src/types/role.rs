//! User roles — selected in the session, never derived from chain state.

use serde::{Deserialize, Serialize};

/// Which set of actions the signed-in user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Admin,
    Owner,
    Renter,
}
