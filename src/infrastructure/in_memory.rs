use crate::domain::debt::Debt;
use crate::domain::payment::Payment;
use crate::domain::ports::{DebtStore, PaymentStore};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for debts.
///
/// Uses `Arc<RwLock<HashMap<u32, Debt>>>` to allow shared concurrent access.
/// `get_all` returns debts in ascending id order; ids are assigned
/// sequentially by the data source, so this is insertion order.
#[derive(Default, Clone)]
pub struct InMemoryDebtStore {
    debts: Arc<RwLock<HashMap<u32, Debt>>>,
}

impl InMemoryDebtStore {
    /// Creates a new, empty in-memory debt store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DebtStore for InMemoryDebtStore {
    async fn store(&self, debt: Debt) -> Result<()> {
        let mut debts = self.debts.write().await;
        debts.insert(debt.id, debt);
        Ok(())
    }

    async fn get(&self, debt_id: u32) -> Result<Option<Debt>> {
        let debts = self.debts.read().await;
        Ok(debts.get(&debt_id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<Debt>> {
        let debts = self.debts.read().await;
        let mut all: Vec<Debt> = debts.values().cloned().collect();
        all.sort_by_key(|d| d.id);
        Ok(all)
    }

    async fn remove(&self, debt_id: u32) -> Result<()> {
        let mut debts = self.debts.write().await;
        debts.remove(&debt_id);
        Ok(())
    }
}

/// A thread-safe in-memory store for applied payments.
///
/// Keyed by payment id; the engine consults it to apply each logical payment
/// at most once.
#[derive(Default, Clone)]
pub struct InMemoryPaymentStore {
    payments: Arc<RwLock<HashMap<u32, Payment>>>,
}

impl InMemoryPaymentStore {
    /// Creates a new, empty in-memory payment store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PaymentStore for InMemoryPaymentStore {
    async fn store(&self, payment: Payment) -> Result<()> {
        let mut payments = self.payments.write().await;
        payments.insert(payment.payment, payment);
        Ok(())
    }

    async fn exists(&self, payment_id: u32) -> Result<bool> {
        let payments = self.payments.read().await;
        Ok(payments.contains_key(&payment_id))
    }
}
