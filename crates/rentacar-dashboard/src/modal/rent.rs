//! Rent-car modal controller.

use rentacar_core::traits::{IHorizonGateway, INotifier, IRentACarContract, IWalletSigner};
use rentacar_core::{Car, DashboardError, DashboardResult, Stroops, TxHash};

use crate::actions::ActionRunner;

/// Controller for the rent flow: day count, computed total, submit.
#[derive(Debug)]
pub struct RentCarModal {
    car: Car,
    days: u32,
    is_submitting: bool,
}

impl RentCarModal {
    /// Opens at the minimum rental of one day.
    pub fn new(car: Car) -> Self {
        Self {
            car,
            days: 1,
            is_submitting: false,
        }
    }

    pub fn car(&self) -> &Car {
        &self.car
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    /// Update the day count. Values below one keep the previous value.
    pub fn set_days(&mut self, days: u32) {
        if days >= 1 {
            self.days = days;
        }
    }

    /// Total shown in the price summary. The admin commission is added by
    /// the contract on top of this, not here.
    pub fn total_price(&self) -> DashboardResult<Stroops> {
        self.car.price_per_day.total_for_days(self.days)
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn can_submit(&self) -> bool {
        !self.is_submitting && self.days >= 1
    }

    /// Validate and run the rent action. `Ok` means the modal should close.
    pub async fn submit<C, G, W, N>(
        &mut self,
        runner: &ActionRunner<C, G, W, N>,
    ) -> DashboardResult<TxHash>
    where
        C: IRentACarContract,
        G: IHorizonGateway,
        W: IWalletSigner,
        N: INotifier,
    {
        if self.days < 1 {
            let error = DashboardError::validation(
                "Por favor ingresa un número válido de días (mínimo 1 día)",
            );
            runner.notifier().error(&error.to_string());
            return Err(error);
        }

        self.is_submitting = true;
        let result = runner.rent(&self.car, self.days).await;
        self.is_submitting = false;
        result
    }
}
