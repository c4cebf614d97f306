//! Create-car form controller.

use rentacar_core::traits::{IHorizonGateway, INotifier, IRentACarContract, IWalletSigner};
use rentacar_core::{AccountId, DashboardError, DashboardResult, NewCar, Stroops, TxHash};

use crate::actions::ActionRunner;

/// Controller for the admin's add-car form. Field values stay as entered
/// text until validation; the price is parsed exactly at submit time.
#[derive(Debug, Default)]
pub struct CreateCarForm {
    pub brand: String,
    pub model: String,
    pub color: String,
    pub passengers: u32,
    pub ac: bool,
    pub owner: String,
    pub price_per_day_xlm: String,
    is_submitting: bool,
}

impl CreateCarForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Check every field and assemble the contract payload.
    pub fn validate(&self) -> DashboardResult<NewCar> {
        if self.brand.trim().is_empty()
            || self.model.trim().is_empty()
            || self.color.trim().is_empty()
        {
            return Err(DashboardError::validation(
                "Por favor completa todos los campos del vehículo.",
            ));
        }
        if self.passengers < 1 {
            return Err(DashboardError::validation(
                "El vehículo debe admitir al menos un pasajero.",
            ));
        }
        if self.owner.trim().is_empty() {
            return Err(DashboardError::validation(
                "Por favor ingresa la dirección del propietario.",
            ));
        }

        let price_per_day = Stroops::parse_xlm(&self.price_per_day_xlm)?;
        if !price_per_day.is_positive() {
            return Err(DashboardError::validation(
                "El precio por día debe ser mayor a cero.",
            ));
        }

        Ok(NewCar {
            brand: self.brand.trim().to_string(),
            model: self.model.trim().to_string(),
            color: self.color.trim().to_string(),
            passengers: self.passengers,
            ac: self.ac,
            price_per_day,
            owner: AccountId::new(self.owner.trim()),
        })
    }

    /// Validate and run the add-car action. `Ok` means the modal should
    /// close; on any failure it stays open for a retry.
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
        let new_car = match self.validate() {
            Ok(new_car) => new_car,
            Err(error) => {
                runner.notifier().error(&error.to_string());
                return Err(error);
            }
        };

        self.is_submitting = true;
        let result = runner.add_car(new_car).await;
        self.is_submitting = false;
        result
    }
}
