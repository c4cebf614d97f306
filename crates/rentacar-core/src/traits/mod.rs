//! Collaborator traits — the external services the dashboard composes calls
//! into. Implementations live outside this workspace (generated contract
//! bindings, browser wallet bridges); tests supply doubles.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::errors::DashboardResult;
use crate::types::account::AccountId;
use crate::types::amounts::Stroops;
use crate::types::car::CarStatus;
use crate::types::tx::TxHash;

/// An assembled contract call, ready to be signed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedCall {
    xdr: String,
}

impl PreparedCall {
    pub fn new(xdr: impl Into<String>) -> Self {
        Self { xdr: xdr.into() }
    }

    /// Signable envelope, base64 XDR.
    pub fn to_xdr(&self) -> &str {
        &self.xdr
    }
}

/// A wallet-signed transaction envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedTransaction {
    pub signed_tx_xdr: String,
}

/// One async method per contract entry point. Every call is bound to the
/// source account that will sign the resulting envelope.
#[allow(async_fn_in_trait)]
pub trait IRentACarContract: Send + Sync {
    async fn add_car(
        &self,
        source: &AccountId,
        owner: &AccountId,
        price_per_day: Stroops,
    ) -> DashboardResult<PreparedCall>;

    async fn remove_car(&self, source: &AccountId, owner: &AccountId)
        -> DashboardResult<PreparedCall>;

    async fn rental(
        &self,
        source: &AccountId,
        renter: &AccountId,
        owner: &AccountId,
        total_days_to_rent: u32,
        amount: Stroops,
    ) -> DashboardResult<PreparedCall>;

    async fn return_car(
        &self,
        source: &AccountId,
        renter: &AccountId,
        owner: &AccountId,
    ) -> DashboardResult<PreparedCall>;

    async fn payout_owner(
        &self,
        source: &AccountId,
        owner: &AccountId,
        amount: Stroops,
    ) -> DashboardResult<PreparedCall>;

    async fn set_admin_commission(
        &self,
        source: &AccountId,
        commission: Stroops,
    ) -> DashboardResult<PreparedCall>;

    async fn withdraw_admin_commission(
        &self,
        source: &AccountId,
        amount: Stroops,
    ) -> DashboardResult<PreparedCall>;
}

/// Network gateway: submission plus the read queries the dashboard needs.
#[allow(async_fn_in_trait)]
pub trait IHorizonGateway: Send + Sync {
    /// Submit a signed envelope. An `Ok` with an empty hash is treated as a
    /// failure by the caller.
    async fn submit_transaction(&self, signed_xdr: &str) -> DashboardResult<TxHash>;

    async fn owner_available_to_withdraw(&self, owner: &AccountId) -> DashboardResult<Stroops>;

    async fn admin_available_to_withdraw(&self, admin: &AccountId) -> DashboardResult<Stroops>;

    /// Authoritative car status, used by post-submit resync.
    async fn car_status(&self, owner: &AccountId) -> DashboardResult<CarStatus>;
}

/// Wallet signing service. May reject (user cancelled, wallet locked).
#[allow(async_fn_in_trait)]
pub trait IWalletSigner: Send + Sync {
    async fn sign_transaction(&self, xdr: &str) -> DashboardResult<SignedTransaction>;
}

/// Fire-and-forget toast sink. Not awaited for correctness.
pub trait INotifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

// ─── Arc blanket impl ───────────────────────────────────────────────

impl<T: INotifier + ?Sized> INotifier for Arc<T> {
    fn success(&self, message: &str) {
        (**self).success(message)
    }
    fn error(&self, message: &str) {
        (**self).error(message)
    }
}
