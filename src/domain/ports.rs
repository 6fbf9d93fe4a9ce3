use super::debt::Debt;
use super::payment::Payment;
use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait DebtStore: Send + Sync {
    async fn store(&self, debt: Debt) -> Result<()>;
    async fn get(&self, debt_id: u32) -> Result<Option<Debt>>;
    async fn get_all(&self) -> Result<Vec<Debt>>;
    async fn remove(&self, debt_id: u32) -> Result<()>;
}

#[async_trait]
pub trait PaymentStore: Send + Sync {
    async fn store(&self, payment: Payment) -> Result<()>;
    async fn exists(&self, payment_id: u32) -> Result<bool>;
}

pub type DebtStoreBox = Box<dyn DebtStore>;
pub type PaymentStoreBox = Box<dyn PaymentStore>;
