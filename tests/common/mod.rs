use serde_json::json;
use std::fs::File;
use std::io::{Error, Write};
use std::path::Path;

/// Writes a debts JSON file with `count` debts, ids 1..=count.
pub fn generate_debts_json(path: &Path, count: usize) -> Result<(), Error> {
    let debts: Vec<serde_json::Value> = (1..=count)
        .map(|id| {
            json!({
                "id": id,
                "name": format!("Debt {id}"),
                "type": "loan",
                "totalAmount": 1000 * id,
                "remainingAmount": 100 * id,
                "interestRate": 9.9,
                "minimumPayment": 25,
                "dueDate": 1,
                "progress": 90
            })
        })
        .collect();

    let mut file = File::create(path)?;
    file.write_all(serde_json::to_string(&debts)?.as_bytes())?;
    Ok(())
}

/// Writes a payments CSV with `rows` distinct payments against debt 1.
pub fn generate_payments_csv(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["payment", "debt", "amount"])?;
    for i in 1..=rows {
        wtr.write_record([&i.to_string(), "1", "0.01"])?;
    }

    wtr.flush()?;
    Ok(())
}
