use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use payoff::application::engine::PayoffEngine;
use payoff::domain::planner::{build_payoff_plan, project_balances, summarize};
use payoff::domain::ports::{DebtStoreBox, PaymentStoreBox};
use payoff::domain::strategy::Strategy;
use payoff::infrastructure::in_memory::{InMemoryDebtStore, InMemoryPaymentStore};
use payoff::interfaces::csv::payment_reader::PaymentReader;
use payoff::interfaces::csv::report_writer::ReportWriter;
use payoff::interfaces::json::debt_reader::DebtReader;
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Report {
    /// Ranked payoff plan under the selected strategy
    Plan,
    /// Aggregate totals and the payoff time estimate
    Summary,
    /// Projected balance, month by month, under minimum payments
    Projection,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input debts JSON file
    input: PathBuf,

    /// Payments CSV to apply before reporting (optional)
    #[arg(long)]
    payments: Option<PathBuf>,

    /// Payoff strategy used to order the plan
    #[arg(long, default_value_t = Strategy::Avalanche)]
    strategy: Strategy,

    /// Which report to print
    #[arg(long, value_enum, default_value_t = Report::Plan)]
    report: Report,

    /// Number of projected months (projection report only)
    #[arg(long, default_value_t = 7)]
    horizon: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let debt_store: DebtStoreBox = Box::new(InMemoryDebtStore::new());
    let payment_store: PaymentStoreBox = Box::new(InMemoryPaymentStore::new());
    let engine = PayoffEngine::new(debt_store, payment_store);

    // Load the debt collection
    let file = File::open(&cli.input).into_diagnostic()?;
    let debts = DebtReader::new(file).debts().into_diagnostic()?;
    for debt in debts {
        if let Err(e) = engine.add_debt(debt).await {
            eprintln!("Error loading debt: {}", e);
        }
    }

    // Apply payments
    if let Some(path) = cli.payments {
        let file = File::open(path).into_diagnostic()?;
        let reader = PaymentReader::new(file);
        for payment_result in reader.payments() {
            match payment_result {
                Ok(payment) => {
                    if let Err(e) = engine.process_payment(payment).await {
                        eprintln!("Error processing payment: {}", e);
                    }
                }
                Err(e) => {
                    eprintln!("Error reading payment: {}", e);
                }
            }
        }
    }

    // Collect final state from engine
    let debts = engine.into_results().await.into_diagnostic()?;

    // Output the requested report
    let stdout = io::stdout();
    let writer = ReportWriter::new(stdout.lock());
    match cli.report {
        Report::Plan => writer.write_plan(build_payoff_plan(&debts, cli.strategy)),
        Report::Summary => writer.write_summary(summarize(&debts)),
        Report::Projection => writer.write_projection(project_balances(&debts, cli.horizon)),
    }
    .into_diagnostic()?;

    Ok(())
}
