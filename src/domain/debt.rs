use crate::error::{DebtError, Result};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Represents a monetary value.
///
/// This is a wrapper around `rust_decimal::Decimal` to enforce domain-specific rules
/// and provide type safety for financial calculations.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Balance(pub Decimal);

/// Represents a positive monetary amount for payments.
///
/// Ensures that payment amounts are always positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(DebtError::ValidationError(
                "Amount must be positive".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = DebtError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl From<Amount> for Balance {
    fn from(amount: Amount) -> Self {
        Self(amount.0)
    }
}

impl Balance {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

// Implement basic arithmetic for Balance to make it a usable Value Object
impl Add for Balance {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Balance {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl AddAssign for Balance {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Balance {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum DebtKind {
    Loan,
    Credit,
    Mortgage,
    Other,
}

/// Observable lifecycle state of a debt, derived from its balance.
///
/// `PaidOff` is terminal: the engine does not apply further payments to a
/// debt whose balance has reached zero.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DebtStatus {
    Outstanding,
    PaidOff,
}

/// A single tracked debt.
///
/// The wire shape matches the data source: camelCase fields, `type` for the
/// debt kind. `progress` is derived from `total_amount` and
/// `remaining_amount`; readers normalize it on ingestion and
/// `apply_payment` recomputes it, so it can never drift from the amounts.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Debt {
    /// The unique identifier for the debt, assigned sequentially by the data source.
    pub id: u32,
    /// Display label.
    pub name: String,
    #[serde(rename = "type")]
    pub kind: DebtKind,
    /// Original principal, fixed at creation.
    pub total_amount: Balance,
    /// Current balance. Never negative.
    pub remaining_amount: Balance,
    /// Nominal annual percentage rate (19.9 means 19.9%).
    pub interest_rate: Decimal,
    /// Fixed monthly payment amount.
    pub minimum_payment: Balance,
    /// Day of month the payment is due, in [1, 31].
    pub due_date: u8,
    /// Percentage of the original principal already repaid.
    #[serde(default)]
    pub progress: u8,
}

impl Debt {
    /// Applies a payment, clamping the balance at zero on overpayment.
    pub fn apply_payment(&mut self, amount: Amount) {
        let paid = Balance::from(amount);
        self.remaining_amount = if paid >= self.remaining_amount {
            Balance::ZERO
        } else {
            self.remaining_amount - paid
        };
        self.refresh_progress();
    }

    /// Recomputes `progress` from the current amounts.
    pub fn refresh_progress(&mut self) {
        self.progress = compute_progress(self.total_amount, self.remaining_amount);
    }

    pub fn status(&self) -> DebtStatus {
        if self.remaining_amount.is_zero() {
            DebtStatus::PaidOff
        } else {
            DebtStatus::Outstanding
        }
    }

    /// Checks the field constraints the data entry form enforces.
    pub fn validate(&self) -> Result<()> {
        if !(1..=31).contains(&self.due_date) {
            return Err(DebtError::ValidationError(format!(
                "Due date {} must be a day of month in 1..=31",
                self.due_date
            )));
        }
        if self.total_amount < Balance::ZERO {
            return Err(DebtError::ValidationError(
                "Total amount must not be negative".to_string(),
            ));
        }
        if self.remaining_amount < Balance::ZERO {
            return Err(DebtError::ValidationError(
                "Remaining amount must not be negative".to_string(),
            ));
        }
        if self.minimum_payment < Balance::ZERO {
            return Err(DebtError::ValidationError(
                "Minimum payment must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// Share of the original principal repaid, rounded half away from zero.
///
/// A zero-principal debt reports 100% rather than dividing by zero.
pub fn compute_progress(total: Balance, remaining: Balance) -> u8 {
    if total.0.is_zero() {
        return 100;
    }
    let pct = (total.0 - remaining.0) * Decimal::ONE_HUNDRED / total.0;
    pct.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
        .to_u8()
        .unwrap_or(100)
}
