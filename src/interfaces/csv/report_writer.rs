use crate::domain::debt::Balance;
use crate::domain::planner::{DebtSummary, PlanStep};
use crate::error::Result;
use std::io::Write;

/// Writes one report table as CSV to any `Write` sink.
pub struct ReportWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// Writes the ranked payoff plan: `rank,debt,name,balance,rate`.
    pub fn write_plan(mut self, steps: Vec<PlanStep>) -> Result<()> {
        for step in steps {
            self.writer.serialize(step)?;
        }
        self.writer.flush()?;
        Ok(())
    }

    /// Writes the one-row aggregate summary. The average rate is rounded to
    /// one decimal place for display; the payoff estimate is rendered as
    /// text ("N/A", "Over 50 years", or years and months).
    pub fn write_summary(mut self, summary: DebtSummary) -> Result<()> {
        self.writer.write_record([
            "total_debt",
            "monthly_payment",
            "avg_interest_rate",
            "est_payoff_time",
        ])?;
        self.writer.write_record([
            summary.total_debt.0.to_string(),
            summary.monthly_payment.0.to_string(),
            summary.display_rate().to_string(),
            summary.payoff.to_string(),
        ])?;
        self.writer.flush()?;
        Ok(())
    }

    /// Writes the projected balance series: `month,projected_balance`.
    pub fn write_projection(mut self, series: Vec<Balance>) -> Result<()> {
        self.writer.write_record(["month", "projected_balance"])?;
        for (month, balance) in series.into_iter().enumerate() {
            self.writer
                .write_record([month.to_string(), balance.0.to_string()])?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
