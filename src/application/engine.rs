use log::warn;

use crate::domain::debt::{Amount, Debt, DebtStatus};
use crate::domain::payment::Payment;
use crate::domain::ports::{DebtStoreBox, PaymentStoreBox};
use crate::error::Result;

/// The main entry point for applying payments to the debt collection.
///
/// `PayoffEngine` owns the storage backends and processes payments
/// sequentially, awaiting each storage operation, so a payment stream is
/// applied in order with no interleaving.
pub struct PayoffEngine {
    debt_store: DebtStoreBox,
    payment_store: PaymentStoreBox,
}

impl PayoffEngine {
    /// Creates a new `PayoffEngine` instance.
    ///
    /// # Arguments
    ///
    /// * `debt_store` - The store for the tracked debts.
    /// * `payment_store` - The store for already-applied payments.
    pub fn new(debt_store: DebtStoreBox, payment_store: PaymentStoreBox) -> Self {
        Self {
            debt_store,
            payment_store,
        }
    }

    /// Registers a debt after normalizing its derived progress and checking
    /// the creation constraints.
    pub async fn add_debt(&self, mut debt: Debt) -> Result<()> {
        debt.refresh_progress();
        debt.validate()?;
        self.debt_store.store(debt).await
    }

    /// Removes a debt. Unknown ids are a no-op.
    pub async fn remove_debt(&self, debt_id: u32) -> Result<()> {
        self.debt_store.remove(debt_id).await
    }

    /// Applies a single payment.
    ///
    /// Each payment id is applied at most once; replays are skipped, as are
    /// payments against unknown or already paid-off debts. The amount must
    /// be positive.
    pub async fn process_payment(&self, payment: Payment) -> Result<()> {
        if self.payment_store.exists(payment.payment).await? {
            warn!("skipping duplicate payment id {}", payment.payment);
            return Ok(());
        }

        let Some(mut debt) = self.debt_store.get(payment.debt).await? else {
            warn!(
                "payment {} references unknown debt {}",
                payment.payment, payment.debt
            );
            return Ok(());
        };

        // Paid off is terminal: a further payment would have no effect.
        if debt.status() == DebtStatus::PaidOff {
            warn!(
                "skipping payment {} against paid-off debt {}",
                payment.payment, payment.debt
            );
            return Ok(());
        }

        let amount = Amount::new(payment.amount)?;
        debt.apply_payment(amount);

        self.payment_store.store(payment).await?;
        self.debt_store.store(debt).await?;
        Ok(())
    }

    /// Consumes the engine and returns the final state of all debts in
    /// insertion order.
    pub async fn into_results(self) -> Result<Vec<Debt>> {
        self.debt_store.get_all().await
    }
}
