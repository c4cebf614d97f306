//! Set-commission modal controller.

use rentacar_core::traits::{IHorizonGateway, INotifier, IRentACarContract, IWalletSigner};
use rentacar_core::{DashboardError, DashboardResult, Stroops, TxHash};

use crate::actions::ActionRunner;

/// Controller for configuring the admin commission added to each rental
/// deposit. Zero is a valid commission.
#[derive(Debug)]
pub struct SetCommissionModal {
    commission: Stroops,
    is_submitting: bool,
}

impl SetCommissionModal {
    pub fn new() -> Self {
        Self {
            commission: Stroops::ZERO,
            is_submitting: false,
        }
    }

    pub fn commission(&self) -> Stroops {
        self.commission
    }

    /// Parse decimal XLM input. Invalid or negative text keeps the previous
    /// value and reports the error.
    pub fn set_commission_xlm(&mut self, input: &str) -> DashboardResult<()> {
        let parsed = Stroops::parse_xlm(input)?;
        if parsed.0 < 0 {
            return Err(DashboardError::validation(
                "La comisión no puede ser negativa.",
            ));
        }
        self.commission = parsed;
        Ok(())
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn can_submit(&self) -> bool {
        !self.is_submitting
    }

    /// Run the set-commission action. `Ok` means the modal should close.
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
        self.is_submitting = true;
        let result = runner.set_commission(self.commission).await;
        self.is_submitting = false;
        result
    }
}

impl Default for SetCommissionModal {
    fn default() -> Self {
        Self::new()
    }
}
