use crate::error::DebtError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Payoff prioritization strategy.
///
/// Avalanche directs surplus at the highest interest rate first; snowball at
/// the smallest remaining balance first.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    #[default]
    Avalanche,
    Snowball,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Avalanche => write!(f, "avalanche"),
            Strategy::Snowball => write!(f, "snowball"),
        }
    }
}

impl FromStr for Strategy {
    type Err = DebtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "avalanche" => Ok(Strategy::Avalanche),
            "snowball" => Ok(Strategy::Snowball),
            other => Err(DebtError::ValidationError(format!(
                "Unknown strategy '{other}', expected 'avalanche' or 'snowball'"
            ))),
        }
    }
}
