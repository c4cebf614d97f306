//! Action orchestrators.
//!
//! One method per user action, each running the same sequence: build the
//! contract call, request a wallet signature, submit, then apply the
//! optimistic session update. Failure anywhere leaves the session untouched;
//! the classified message goes to the notifier either way. The contract is
//! the source of truth for whether the action actually happened — a
//! submission that dies after signing can leave the cache behind the chain,
//! which the best-effort resync narrows but does not close.

use rentacar_core::errors::stellar::classify_error;
use rentacar_core::traits::{
    IHorizonGateway, INotifier, IRentACarContract, IWalletSigner, PreparedCall,
};
use rentacar_core::{
    AccountId, Car, CarStatus, DashboardError, DashboardResult, NewCar, Stroops, TxHash,
};
use tracing::{info, warn};

use crate::session::Session;

/// Runs user actions against the contract through the collaborator traits.
pub struct ActionRunner<C, G, W, N> {
    contract: C,
    gateway: G,
    wallet: W,
    notifier: N,
    session: Session,
}

impl<C, G, W, N> ActionRunner<C, G, W, N>
where
    C: IRentACarContract,
    G: IHorizonGateway,
    W: IWalletSigner,
    N: INotifier,
{
    pub fn new(contract: C, gateway: G, wallet: W, notifier: N, session: Session) -> Self {
        Self {
            contract,
            gateway,
            wallet,
            notifier,
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Sign and submit a prepared call. An empty returned hash is a failure
    /// even though nothing threw.
    async fn sign_and_submit(&self, call: PreparedCall) -> DashboardResult<TxHash> {
        let signed = self.wallet.sign_transaction(call.to_xdr()).await?;
        let hash = self.gateway.submit_transaction(&signed.signed_tx_xdr).await?;
        if hash.is_empty() {
            return Err(DashboardError::MissingTxHash);
        }
        Ok(hash)
    }

    /// Toast + trace for a finished action, leaving the result intact.
    fn report(
        &self,
        action: &'static str,
        success_message: &str,
        result: DashboardResult<TxHash>,
    ) -> DashboardResult<TxHash> {
        match &result {
            Ok(hash) => {
                info!(action, hash = %hash, "transaction submitted");
                self.notifier.success(success_message);
            }
            Err(error) => {
                warn!(action, error = %error, "action failed");
                self.notifier.error(&classify_error(error));
            }
        }
        result
    }

    /// Best-effort reconcile of a car's cached status against the chain.
    /// Failures are logged and swallowed.
    async fn resync_car_status(&self, owner: &AccountId) {
        match self.gateway.car_status(owner).await {
            Ok(status) => self.session.set_car_status(owner, status),
            Err(error) => warn!(owner = %owner, error = %error, "status resync failed"),
        }
    }

    /// Refresh the cached admin commission balance; fetch errors zero it out.
    pub async fn refresh_admin_commission(&self) {
        let admin = self.session.wallet_address();
        match self.gateway.admin_available_to_withdraw(&admin).await {
            Ok(amount) => self.session.set_available_commission(amount),
            Err(error) => {
                warn!(error = %error, "commission balance fetch failed");
                self.session.set_available_commission(Stroops::ZERO);
            }
        }
    }

    /// Owner balance for the withdraw modal; `None` when the fetch fails, so
    /// the modal opens at zero.
    pub async fn owner_available(&self, owner: &AccountId) -> Option<Stroops> {
        match self.gateway.owner_available_to_withdraw(owner).await {
            Ok(amount) => Some(amount),
            Err(error) => {
                warn!(owner = %owner, error = %error, "owner balance fetch failed");
                None
            }
        }
    }

    /// Admin: list a new car. On success the collection gains an
    /// `Available` row.
    pub async fn add_car(&self, new_car: NewCar) -> DashboardResult<TxHash> {
        let result: DashboardResult<TxHash> = async {
            let source = self.session.wallet_address();
            let call = self
                .contract
                .add_car(&source, &new_car.owner, new_car.price_per_day)
                .await?;
            let hash = self.sign_and_submit(call).await?;
            self.session.push_car(new_car.into_car());
            self.session.record_tx(hash.clone());
            Ok(hash)
        }
        .await;
        self.report("add_car", "Vehículo agregado exitosamente.", result)
    }

    /// Admin: delist a car.
    pub async fn remove_car(&self, owner: &AccountId) -> DashboardResult<TxHash> {
        let result: DashboardResult<TxHash> = async {
            let source = self.session.wallet_address();
            let call = self.contract.remove_car(&source, owner).await?;
            let hash = self.sign_and_submit(call).await?;
            self.session.remove_car(owner);
            self.session.record_tx(hash.clone());
            Ok(hash)
        }
        .await;
        self.report("remove_car", "Vehículo eliminado exitosamente.", result)
    }

    /// Renter: rent `car` for `days`. The deposited amount is
    /// `price_per_day × days`; the contract adds the admin commission on top.
    pub async fn rent(&self, car: &Car, days: u32) -> DashboardResult<TxHash> {
        let result: DashboardResult<TxHash> = async {
            let renter = self.session.wallet_address();
            let amount = car.price_per_day.total_for_days(days)?;
            let call = self
                .contract
                .rental(&renter, &renter, &car.owner, days, amount)
                .await?;
            let hash = self.sign_and_submit(call).await?;
            self.session.set_car_status(&car.owner, CarStatus::Rented);
            self.session.record_tx(hash.clone());
            self.resync_car_status(&car.owner).await;
            Ok(hash)
        }
        .await;
        self.report("rental", "Auto alquilado exitosamente.", result)
    }

    /// Renter: return a rented car.
    pub async fn return_car(&self, car: &Car) -> DashboardResult<TxHash> {
        let result: DashboardResult<TxHash> = async {
            let renter = self.session.wallet_address();
            let call = self.contract.return_car(&renter, &renter, &car.owner).await?;
            let hash = self.sign_and_submit(call).await?;
            self.session.set_car_status(&car.owner, CarStatus::Available);
            self.session.record_tx(hash.clone());
            self.resync_car_status(&car.owner).await;
            Ok(hash)
        }
        .await;
        self.report("return_car", "Auto devuelto exitosamente.", result)
    }

    /// Owner: withdraw `amount` from a returned car's accumulated balance.
    pub async fn payout_owner(&self, owner: &AccountId, amount: Stroops) -> DashboardResult<TxHash> {
        let result: DashboardResult<TxHash> = async {
            let source = self.session.wallet_address();
            let call = self.contract.payout_owner(&source, owner, amount).await?;
            let hash = self.sign_and_submit(call).await?;
            self.session.record_tx(hash.clone());
            Ok(hash)
        }
        .await;
        self.report("payout_owner", "Retiro realizado exitosamente.", result)
    }

    /// Admin: set the commission added to each rental deposit.
    pub async fn set_commission(&self, commission: Stroops) -> DashboardResult<TxHash> {
        let result: DashboardResult<TxHash> = async {
            let source = self.session.wallet_address();
            let call = self.contract.set_admin_commission(&source, commission).await?;
            let hash = self.sign_and_submit(call).await?;
            self.session.record_tx(hash.clone());
            Ok(hash)
        }
        .await;
        let result = self.report("set_admin_commission", "Comisión configurada exitosamente.", result);
        if result.is_ok() {
            self.refresh_admin_commission().await;
        }
        result
    }

    /// Admin: withdraw accumulated commission.
    pub async fn withdraw_commission(&self, amount: Stroops) -> DashboardResult<TxHash> {
        let result: DashboardResult<TxHash> = async {
            let source = self.session.wallet_address();
            let call = self
                .contract
                .withdraw_admin_commission(&source, amount)
                .await?;
            let hash = self.sign_and_submit(call).await?;
            self.session.record_tx(hash.clone());
            Ok(hash)
        }
        .await;
        let result = self.report(
            "withdraw_admin_commission",
            "Comisión retirada exitosamente.",
            result,
        );
        if result.is_ok() {
            self.refresh_admin_commission().await;
        }
        result
    }
}
