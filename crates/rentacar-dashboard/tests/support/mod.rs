//! Shared test doubles for the collaborator traits.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use rentacar_core::traits::{
    IHorizonGateway, INotifier, IRentACarContract, IWalletSigner, PreparedCall, SignedTransaction,
};
use rentacar_core::{
    AccountId, Car, CarStatus, DashboardConfig, DashboardError, DashboardResult, Stroops, TxHash,
    UserRole,
};
use rentacar_dashboard::{ActionRunner, Dashboard, Session};
use serde_json::Value;

pub type TestRunner = ActionRunner<TestBackend, TestBackend, TestBackend, RecordingNotifier>;
pub type TestDashboard = Dashboard<TestBackend, TestBackend, TestBackend, RecordingNotifier>;

#[derive(Default)]
struct BackendState {
    calls: Vec<String>,
    sign_error: Option<String>,
    submit_error: Option<Value>,
    submit_hash: String,
    owner_balances: HashMap<String, Stroops>,
    admin_balance: Option<Stroops>,
    chain_status: HashMap<String, CarStatus>,
    status_error: bool,
}

/// One scripted double playing contract client, gateway, and wallet.
/// Clones share state, so tests keep a handle for scripting and assertions.
#[derive(Clone)]
pub struct TestBackend {
    state: Arc<Mutex<BackendState>>,
}

impl TestBackend {
    pub fn new() -> Self {
        let state = BackendState {
            submit_hash: "a1b2c3d4".to_string(),
            ..BackendState::default()
        };
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, BackendState> {
        self.state.lock().unwrap()
    }

    fn record(&self, call: String) {
        self.lock().calls.push(call);
    }

    pub fn calls(&self) -> Vec<String> {
        self.lock().calls.clone()
    }

    /// Make the wallet reject every signature request.
    pub fn reject_signatures(&self, message: &str) {
        self.lock().sign_error = Some(message.to_string());
    }

    /// Make submission fail with the given Horizon problem payload.
    pub fn fail_submissions(&self, payload: Value) {
        self.lock().submit_error = Some(payload);
    }

    pub fn set_submit_hash(&self, hash: &str) {
        self.lock().submit_hash = hash.to_string();
    }

    pub fn set_owner_balance(&self, owner: &AccountId, amount: Stroops) {
        self.lock()
            .owner_balances
            .insert(owner.as_str().to_string(), amount);
    }

    pub fn set_admin_balance(&self, amount: Option<Stroops>) {
        self.lock().admin_balance = amount;
    }

    pub fn set_chain_status(&self, owner: &AccountId, status: CarStatus) {
        self.lock()
            .chain_status
            .insert(owner.as_str().to_string(), status);
    }

    pub fn fail_status_reads(&self) {
        self.lock().status_error = true;
    }
}

impl IRentACarContract for TestBackend {
    async fn add_car(
        &self,
        source: &AccountId,
        owner: &AccountId,
        price_per_day: Stroops,
    ) -> DashboardResult<PreparedCall> {
        self.record(format!(
            "add_car source={source} owner={owner} price={}",
            price_per_day.0
        ));
        Ok(PreparedCall::new("xdr:add_car"))
    }

    async fn remove_car(
        &self,
        source: &AccountId,
        owner: &AccountId,
    ) -> DashboardResult<PreparedCall> {
        self.record(format!("remove_car source={source} owner={owner}"));
        Ok(PreparedCall::new("xdr:remove_car"))
    }

    async fn rental(
        &self,
        source: &AccountId,
        renter: &AccountId,
        owner: &AccountId,
        total_days_to_rent: u32,
        amount: Stroops,
    ) -> DashboardResult<PreparedCall> {
        self.record(format!(
            "rental source={source} renter={renter} owner={owner} days={total_days_to_rent} amount={}",
            amount.0
        ));
        Ok(PreparedCall::new("xdr:rental"))
    }

    async fn return_car(
        &self,
        source: &AccountId,
        renter: &AccountId,
        owner: &AccountId,
    ) -> DashboardResult<PreparedCall> {
        self.record(format!("return_car source={source} renter={renter} owner={owner}"));
        Ok(PreparedCall::new("xdr:return_car"))
    }

    async fn payout_owner(
        &self,
        source: &AccountId,
        owner: &AccountId,
        amount: Stroops,
    ) -> DashboardResult<PreparedCall> {
        self.record(format!(
            "payout_owner source={source} owner={owner} amount={}",
            amount.0
        ));
        Ok(PreparedCall::new("xdr:payout_owner"))
    }

    async fn set_admin_commission(
        &self,
        source: &AccountId,
        commission: Stroops,
    ) -> DashboardResult<PreparedCall> {
        self.record(format!(
            "set_admin_commission source={source} commission={}",
            commission.0
        ));
        Ok(PreparedCall::new("xdr:set_admin_commission"))
    }

    async fn withdraw_admin_commission(
        &self,
        source: &AccountId,
        amount: Stroops,
    ) -> DashboardResult<PreparedCall> {
        self.record(format!(
            "withdraw_admin_commission source={source} amount={}",
            amount.0
        ));
        Ok(PreparedCall::new("xdr:withdraw_admin_commission"))
    }
}

impl IHorizonGateway for TestBackend {
    async fn submit_transaction(&self, signed_xdr: &str) -> DashboardResult<TxHash> {
        let mut state = self.lock();
        state.calls.push(format!("submit {signed_xdr}"));
        if let Some(payload) = state.submit_error.clone() {
            return Err(DashboardError::submission(payload));
        }
        Ok(TxHash::new(state.submit_hash.clone()))
    }

    async fn owner_available_to_withdraw(&self, owner: &AccountId) -> DashboardResult<Stroops> {
        self.lock()
            .owner_balances
            .get(owner.as_str())
            .copied()
            .ok_or_else(|| DashboardError::gateway("owner balance unavailable"))
    }

    async fn admin_available_to_withdraw(&self, _admin: &AccountId) -> DashboardResult<Stroops> {
        self.lock()
            .admin_balance
            .ok_or_else(|| DashboardError::gateway("admin balance unavailable"))
    }

    async fn car_status(&self, owner: &AccountId) -> DashboardResult<CarStatus> {
        let state = self.lock();
        if state.status_error {
            return Err(DashboardError::gateway("status unavailable"));
        }
        state
            .chain_status
            .get(owner.as_str())
            .copied()
            .ok_or_else(|| DashboardError::gateway("car not found on chain"))
    }
}

impl IWalletSigner for TestBackend {
    async fn sign_transaction(&self, xdr: &str) -> DashboardResult<SignedTransaction> {
        let mut state = self.lock();
        state.calls.push(format!("sign {xdr}"));
        if let Some(message) = state.sign_error.clone() {
            return Err(DashboardError::wallet(message));
        }
        Ok(SignedTransaction {
            signed_tx_xdr: format!("signed:{xdr}"),
        })
    }
}

/// Toast sink that records everything it is shown.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    messages: Arc<Mutex<Vec<(&'static str, String)>>>,
}

impl RecordingNotifier {
    pub fn successes(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter(|(kind, _)| *kind == "success")
            .map(|(_, message)| message.clone())
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter(|(kind, _)| *kind == "error")
            .map(|(_, message)| message.clone())
            .collect()
    }

    pub fn last_error(&self) -> Option<String> {
        self.errors().pop()
    }
}

impl INotifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(("success", message.to_string()));
    }

    fn error(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(("error", message.to_string()));
    }
}

pub const WALLET: &str = "GWALLET";

pub fn session(role: UserRole) -> Session {
    Session::new(AccountId::new(WALLET), role)
}

pub fn runner(backend: &TestBackend, notifier: &RecordingNotifier, session: Session) -> TestRunner {
    ActionRunner::new(
        backend.clone(),
        backend.clone(),
        backend.clone(),
        notifier.clone(),
        session,
    )
}

/// Backend, notifier, and a dashboard for `role`, wired together.
pub fn dashboard(role: UserRole) -> (TestBackend, RecordingNotifier, TestDashboard) {
    let backend = TestBackend::new();
    let notifier = RecordingNotifier::default();
    let runner = runner(&backend, &notifier, session(role));
    let dashboard = Dashboard::new(runner, DashboardConfig::default());
    (backend, notifier, dashboard)
}

pub fn car(owner: &str, price_xlm: i128, status: CarStatus) -> Car {
    Car {
        brand: "Toyota".to_string(),
        model: "Yaris".to_string(),
        color: "Red".to_string(),
        passengers: 4,
        ac: true,
        price_per_day: Stroops::from_xlm(price_xlm).unwrap(),
        owner: AccountId::new(owner),
        status,
    }
}
