use crate::domain::debt::Debt;
use crate::error::Result;
use std::io::Read;

/// Reads the debt collection from a JSON source.
///
/// The source is an array of debt objects in the data-feed shape (camelCase
/// keys, `type` for the kind). The derived `progress` field is recomputed on
/// ingestion so stale wire values cannot leak into the collection.
pub struct DebtReader<R: Read> {
    source: R,
}

impl<R: Read> DebtReader<R> {
    /// Creates a new `DebtReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        Self { source }
    }

    pub fn debts(self) -> Result<Vec<Debt>> {
        let mut debts: Vec<Debt> = serde_json::from_reader(self.source)?;
        for debt in &mut debts {
            debt.refresh_progress();
        }
        Ok(debts)
    }
}
