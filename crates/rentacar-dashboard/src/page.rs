//! Dashboard page container — composes the session, the action runner, and
//! the single active modal.

use rentacar_core::traits::{IHorizonGateway, INotifier, IRentACarContract, IWalletSigner};
use rentacar_core::{AccountId, DashboardConfig, DashboardError, DashboardResult, TxHash, UserRole};

use crate::actions::ActionRunner;
use crate::modal::{
    CreateCarForm, RentCarModal, SetCommissionModal, WithdrawCommissionModal, WithdrawOwnerModal,
};
use crate::session::Session;
use crate::view::{action_for, CarAction, CarRow};

/// At most one modal is open at a time.
#[derive(Debug)]
pub enum ActiveModal {
    CreateCar(CreateCarForm),
    SetCommission(SetCommissionModal),
    WithdrawCommission(WithdrawCommissionModal),
    Rent(RentCarModal),
    WithdrawOwner(WithdrawOwnerModal),
}

/// The page: list rows, admin controls, modal lifecycle, explorer link.
pub struct Dashboard<C, G, W, N> {
    runner: ActionRunner<C, G, W, N>,
    config: DashboardConfig,
    modal: Option<ActiveModal>,
}

impl<C, G, W, N> Dashboard<C, G, W, N>
where
    C: IRentACarContract,
    G: IHorizonGateway,
    W: IWalletSigner,
    N: INotifier,
{
    pub fn new(runner: ActionRunner<C, G, W, N>, config: DashboardConfig) -> Self {
        Self {
            runner,
            config,
            modal: None,
        }
    }

    pub fn session(&self) -> &Session {
        self.runner.session()
    }

    pub fn runner(&self) -> &ActionRunner<C, G, W, N> {
        &self.runner
    }

    pub fn modal(&self) -> Option<&ActiveModal> {
        self.modal.as_ref()
    }

    pub fn modal_mut(&mut self) -> Option<&mut ActiveModal> {
        self.modal.as_mut()
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    /// Rows the current role sees.
    pub fn rows(&self) -> Vec<CarRow> {
        crate::view::rows(&self.session().cars(), self.session().role())
    }

    /// Refresh the cached commission balance. Admin only; no-op otherwise.
    pub async fn refresh_commission(&self) {
        if self.session().role() == UserRole::Admin {
            self.runner.refresh_admin_commission().await;
        }
    }

    /// Admin-only: open the create-car form.
    pub fn open_create_car(&mut self) -> bool {
        if self.session().role() != UserRole::Admin {
            return false;
        }
        self.modal = Some(ActiveModal::CreateCar(CreateCarForm::new()));
        true
    }

    /// Admin-only: open the set-commission modal.
    pub fn open_set_commission(&mut self) -> bool {
        if self.session().role() != UserRole::Admin {
            return false;
        }
        self.modal = Some(ActiveModal::SetCommission(SetCommissionModal::new()));
        true
    }

    /// Admin-only, and only while commission is available to withdraw.
    pub fn open_withdraw_commission(&mut self) -> bool {
        let available = self.session().available_commission();
        if self.session().role() != UserRole::Admin || !available.is_positive() {
            return false;
        }
        self.modal = Some(ActiveModal::WithdrawCommission(WithdrawCommissionModal::new(
            Some(available),
        )));
        true
    }

    /// Dispatch a row's action button: delete and return run immediately;
    /// rent and withdraw open their modals.
    pub async fn activate(&mut self, owner: &AccountId) -> DashboardResult<Option<TxHash>> {
        let car = self
            .session()
            .car(owner)
            .ok_or_else(|| DashboardError::validation("El vehículo ya no está listado."))?;

        match action_for(self.session().role(), car.status) {
            Some(CarAction::Delete) => self.runner.remove_car(owner).await.map(Some),
            Some(CarAction::Return) => self.runner.return_car(&car).await.map(Some),
            Some(CarAction::Rent) => {
                self.modal = Some(ActiveModal::Rent(RentCarModal::new(car)));
                Ok(None)
            }
            Some(CarAction::Withdraw) => {
                // Load the balance before opening; fetch errors open at zero.
                let available = self.runner.owner_available(owner).await;
                self.modal = Some(ActiveModal::WithdrawOwner(WithdrawOwnerModal::new(
                    owner.clone(),
                    available,
                )));
                Ok(None)
            }
            None => Ok(None),
        }
    }

    /// Submit whatever modal is open. Closes it on success, keeps it open
    /// (with the toast already shown) on failure.
    pub async fn submit_modal(&mut self) -> DashboardResult<Option<TxHash>> {
        let Some(modal) = self.modal.as_mut() else {
            return Ok(None);
        };

        let result = match modal {
            ActiveModal::CreateCar(form) => form.submit(&self.runner).await,
            ActiveModal::SetCommission(modal) => modal.submit(&self.runner).await,
            ActiveModal::WithdrawCommission(modal) => modal.submit(&self.runner).await,
            ActiveModal::Rent(modal) => modal.submit(&self.runner).await,
            ActiveModal::WithdrawOwner(modal) => modal.submit(&self.runner).await,
        };

        match result {
            Ok(hash) => {
                self.modal = None;
                Ok(Some(hash))
            }
            Err(error) => Err(error),
        }
    }

    /// Explorer link for the last submitted transaction.
    pub fn explorer_link(&self) -> Option<String> {
        self.session()
            .last_tx()
            .map(|hash| self.config.explorer_tx_url(&hash))
    }
}
