//! Withdrawal modals — owner payout and admin commission share one form.

use rentacar_core::traits::{IHorizonGateway, INotifier, IRentACarContract, IWalletSigner};
use rentacar_core::{AccountId, DashboardError, DashboardResult, Stroops, TxHash};

use crate::actions::ActionRunner;

/// Amount entry with an available-balance ceiling and a Max affordance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithdrawForm {
    available: Stroops,
    amount: Stroops,
}

impl WithdrawForm {
    /// `available` is sanitized: an absent or non-positive balance becomes
    /// zero, which also disables the form.
    pub fn new(available: Option<Stroops>) -> Self {
        let available = available.filter(Stroops::is_positive).unwrap_or(Stroops::ZERO);
        Self {
            available,
            amount: Stroops::ZERO,
        }
    }

    pub fn available(&self) -> Stroops {
        self.available
    }

    /// Balance label, fixed 7 decimals ("0.0000000" when empty).
    pub fn available_xlm(&self) -> String {
        self.available.to_xlm_fixed()
    }

    pub fn amount(&self) -> Stroops {
        self.amount
    }

    /// Parse decimal XLM input. Invalid or negative text keeps the previous
    /// value and reports the error.
    pub fn set_amount_xlm(&mut self, input: &str) -> DashboardResult<()> {
        let parsed = Stroops::parse_xlm(input)?;
        if parsed.0 < 0 {
            return Err(DashboardError::validation(
                "Por favor ingresa un monto válido para retirar.",
            ));
        }
        self.amount = parsed;
        Ok(())
    }

    /// Fill the field with the full available balance.
    pub fn fill_max(&mut self) {
        if self.available.is_positive() {
            self.amount = self.available;
        }
    }

    pub fn can_submit(&self) -> bool {
        self.available.is_positive() && self.amount.is_positive() && self.amount <= self.available
    }

    /// The validated amount, or the inline error the submit handler shows.
    pub fn validated_amount(&self) -> DashboardResult<Stroops> {
        if !self.amount.is_positive() {
            return Err(DashboardError::validation(
                "Por favor ingresa un monto válido para retirar.",
            ));
        }
        if self.amount > self.available {
            return Err(DashboardError::validation(
                "El monto excede el balance disponible.",
            ));
        }
        Ok(self.amount)
    }
}

/// Owner payout modal, bound to one car's owner address.
#[derive(Debug)]
pub struct WithdrawOwnerModal {
    owner: AccountId,
    form: WithdrawForm,
    is_submitting: bool,
}

impl WithdrawOwnerModal {
    pub fn new(owner: AccountId, available: Option<Stroops>) -> Self {
        Self {
            owner,
            form: WithdrawForm::new(available),
            is_submitting: false,
        }
    }

    pub fn owner(&self) -> &AccountId {
        &self.owner
    }

    pub fn form(&self) -> &WithdrawForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut WithdrawForm {
        &mut self.form
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn can_submit(&self) -> bool {
        !self.is_submitting && self.form.can_submit()
    }

    /// Validate and run the payout. `Ok` means the modal should close.
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
        let amount = match self.form.validated_amount() {
            Ok(amount) => amount,
            Err(error) => {
                runner.notifier().error(&error.to_string());
                return Err(error);
            }
        };

        self.is_submitting = true;
        let result = runner.payout_owner(&self.owner, amount).await;
        self.is_submitting = false;
        result
    }
}

/// Admin commission withdrawal modal.
#[derive(Debug)]
pub struct WithdrawCommissionModal {
    form: WithdrawForm,
    is_submitting: bool,
}

impl WithdrawCommissionModal {
    pub fn new(available: Option<Stroops>) -> Self {
        Self {
            form: WithdrawForm::new(available),
            is_submitting: false,
        }
    }

    pub fn form(&self) -> &WithdrawForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut WithdrawForm {
        &mut self.form
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn can_submit(&self) -> bool {
        !self.is_submitting && self.form.can_submit()
    }

    /// Validate and run the withdrawal. `Ok` means the modal should close.
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
        let amount = match self.form.validated_amount() {
            Ok(amount) => amount,
            Err(error) => {
                runner.notifier().error(&error.to_string());
                return Err(error);
            }
        };

        self.is_submitting = true;
        let result = runner.withdraw_commission(amount).await;
        self.is_submitting = false;
        result
    }
}
