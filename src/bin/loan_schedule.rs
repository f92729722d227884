//! Print mortgage payments for six frequencies and export their schedules
//!
//! Inputs come from flags, an optional JSON config, or interactive prompts
//! for anything still missing.

use anyhow::{Context, Result};
use clap::Parser;
use mortgage_schedule::export::{export_run, RunSummary};
use mortgage_schedule::{AmortizationEngine, PaymentFrequency, RunConfig};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "loan_schedule")]
#[command(about = "Canadian mortgage payments and amortization schedules", long_about = None)]
struct Cli {
    /// Mortgage principal amount
    #[arg(short, long)]
    principal: Option<f64>,

    /// Quoted annual interest rate in percent (semi-annual compounding)
    #[arg(short, long, allow_negative_numbers = true)]
    rate: Option<f64>,

    /// Amortization period in years
    #[arg(short, long)]
    years: Option<u32>,

    /// Mortgage term in years
    #[arg(short, long)]
    term_years: Option<u32>,

    /// JSON run configuration; flags override its values
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory for schedule sheets, balance series and summary [default: output]
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Print payments only, skip writing files
    #[arg(long)]
    no_export: bool,

    /// Print the full schedule for one frequency (e.g. "Rapid Bi-weekly")
    #[arg(short, long)]
    frequency: Option<String>,
}

/// Read a value from stdin, asking again until it parses
fn prompt<T: FromStr>(message: &str) -> Result<T> {
    let stdin = io::stdin();
    loop {
        print!("{}", message);
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            anyhow::bail!("input closed before a value was entered");
        }
        match line.trim().parse() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Could not read '{}', please try again.", line.trim()),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let start = Instant::now();

    let base = match &cli.config {
        Some(path) => RunConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => RunConfig::default(),
    };
    let mut config = base
        .merge(RunConfig {
            principal: cli.principal,
            quoted_rate: cli.rate,
            amortization_years: cli.years,
            term_years: cli.term_years,
            export: !cli.no_export,
            ..Default::default()
        })
        .with_output_dir(cli.output_dir);

    if config.principal.is_none() {
        config.principal = Some(prompt("Enter the mortgage principal amount: ")?);
    }
    if config.quoted_rate.is_none() {
        config.quoted_rate = Some(prompt("Enter the quoted interest rate (percent): ")?);
    }
    if config.amortization_years.is_none() {
        config.amortization_years = Some(prompt("Enter the amortization period (years): ")?);
    }
    if config.term_years.is_none() {
        config.term_years = Some(prompt("Enter the mortgage term (years): ")?);
    }

    let principal = config.principal().context("invalid principal")?;
    let terms = config.loan_terms().context("invalid loan terms")?;
    let term_years = config.term_years().context("invalid term")?;
    let engine = AmortizationEngine::new(terms);

    for (frequency, payment) in engine.payments(principal).iter() {
        println!("{} Payment: ${:.2}", frequency, payment);
    }

    if let Some(name) = &cli.frequency {
        let frequency: PaymentFrequency = name.parse()?;
        let schedule = engine.schedule(principal, frequency);
        println!("\n{} schedule ({} periods)", frequency, schedule.len());
        println!(
            "{:>6} {:>16} {:>12} {:>12} {:>16}",
            "Period", "Starting", "Interest", "Payment", "Ending"
        );
        for row in schedule.rows() {
            println!(
                "{:>6} {:>16.2} {:>12.2} {:>12.2} {:>16.2}",
                row.period, row.starting_balance, row.interest, row.payment, row.ending_balance
            );
        }
    }

    if config.export {
        let schedules = engine.all_schedules(principal);
        let summary = RunSummary::build(&engine, principal, term_years, &schedules);
        let files = export_run(&config.output_dir, &schedules, &summary)
            .with_context(|| format!("exporting to {}", config.output_dir.display()))?;

        println!("\nSchedules written:");
        for sheet in &files.sheets {
            println!("  {}", sheet.display());
        }
        println!("Balance series written to {}", files.balance_series.display());
        println!("Summary written to {}", files.summary.display());
        if let Some(term) = term_years {
            println!("\nBalance remaining after {} year term:", term);
            for f in &summary.frequencies {
                println!("  {:<16} ${:.2}", f.frequency.label(), f.balance_at_term.unwrap_or(0.0));
            }
        }
    }

    log::info!("Finished in {:?}", start.elapsed());
    Ok(())
}
