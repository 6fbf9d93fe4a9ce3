use rust_decimal::Decimal;
use serde::Deserialize;

/// A payment instruction against a single debt.
///
/// `payment` is the idempotence key: the engine applies each payment id at
/// most once, so replaying an input stream cannot double-deduct.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Payment {
    pub payment: u32,
    pub debt: u32,
    pub amount: Decimal,
}
