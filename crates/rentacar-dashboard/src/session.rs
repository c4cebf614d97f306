//! Shared session state — wallet, role, the optimistic car cache, and the
//! last submitted transaction hash.
//!
//! The cache mirrors contract state but is not authoritative; orchestrators
//! mutate it from their completion paths only.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rentacar_core::{AccountId, Car, CarStatus, Stroops, TxHash, UserRole};

#[derive(Debug)]
struct SessionInner {
    wallet_address: AccountId,
    role: UserRole,
    cars: Vec<Car>,
    last_tx: Option<TxHash>,
    available_commission: Stroops,
}

/// Cloneable handle to the session. Accessors lock internally; the lock is
/// never held across an await.
#[derive(Debug, Clone)]
pub struct Session {
    inner: Arc<Mutex<SessionInner>>,
}

impl Session {
    pub fn new(wallet_address: AccountId, role: UserRole) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SessionInner {
                wallet_address,
                role,
                cars: Vec::new(),
                last_tx: None,
                available_commission: Stroops::ZERO,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn wallet_address(&self) -> AccountId {
        self.lock().wallet_address.clone()
    }

    pub fn role(&self) -> UserRole {
        self.lock().role
    }

    pub fn set_role(&self, role: UserRole) {
        self.lock().role = role;
    }

    /// Snapshot of the car collection.
    pub fn cars(&self) -> Vec<Car> {
        self.lock().cars.clone()
    }

    /// Replace the collection, e.g. from the initial load.
    pub fn set_cars(&self, cars: Vec<Car>) {
        self.lock().cars = cars;
    }

    pub fn push_car(&self, car: Car) {
        self.lock().cars.push(car);
    }

    pub fn remove_car(&self, owner: &AccountId) {
        self.lock().cars.retain(|car| &car.owner != owner);
    }

    pub fn set_car_status(&self, owner: &AccountId, status: CarStatus) {
        for car in self.lock().cars.iter_mut() {
            if &car.owner == owner {
                car.status = status;
            }
        }
    }

    pub fn car(&self, owner: &AccountId) -> Option<Car> {
        self.lock().cars.iter().find(|car| &car.owner == owner).cloned()
    }

    pub fn last_tx(&self) -> Option<TxHash> {
        self.lock().last_tx.clone()
    }

    pub fn record_tx(&self, hash: TxHash) {
        self.lock().last_tx = Some(hash);
    }

    pub fn available_commission(&self) -> Stroops {
        self.lock().available_commission
    }

    pub fn set_available_commission(&self, amount: Stroops) {
        self.lock().available_commission = amount;
    }
}
