//! Investment Calculator CLI
//!
//! One-shot calculation of an investment's maturity value and its
//! inflation-adjusted equivalent. Supports JSON output for scripting
//! via the --json flag.

use clap::Parser;
use investment_calculator::{
    adjust_for_inflation, compute_maturity_value, growth_schedule, ScheduleRow,
};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(version, about = "Compound-growth and inflation-adjustment calculator")]
struct Cli {
    /// Initial investment amount in whole currency units
    #[arg(long, default_value_t = 1000)]
    amount: u64,

    /// Expected annual return rate in percent
    #[arg(long, default_value_t = 5.5, allow_negative_numbers = true)]
    rate: f64,

    /// Investment duration in whole years
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    years: i32,

    /// Expected annual inflation rate in percent
    #[arg(long, default_value_t = 6.5, allow_negative_numbers = true)]
    inflation: f64,

    /// Print a year-by-year growth schedule
    #[arg(long)]
    schedule: bool,

    /// Emit results as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Currently unsupported positional arguments (reported, then ignored)
    #[arg(trailing_var_arg = true, hide = true)]
    unsupported: Vec<String>,
}

#[derive(Serialize)]
struct CalculationResponse {
    amount: u64,
    rate_pct: f64,
    years: i32,
    inflation_pct: f64,
    maturity_value: f64,
    adjusted_value: f64,
    schedule: Vec<ScheduleRow>,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    log::debug!(
        "inputs: amount={} rate={} years={} inflation={}",
        cli.amount,
        cli.rate,
        cli.years,
        cli.inflation
    );

    if !cli.unsupported.is_empty() {
        println!("Warning: the following arguments are currently unsupported:");
        for arg in &cli.unsupported {
            println!("  {}", arg);
        }
        println!();
    }

    let maturity_value = compute_maturity_value(cli.amount, cli.rate, cli.years);
    let adjusted_value = adjust_for_inflation(maturity_value, cli.inflation, cli.years);

    if cli.json {
        let response = CalculationResponse {
            amount: cli.amount,
            rate_pct: cli.rate,
            years: cli.years,
            inflation_pct: cli.inflation,
            maturity_value,
            adjusted_value,
            schedule: growth_schedule(cli.amount, cli.rate, cli.inflation, cli.years),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&response).expect("Failed to serialize response")
        );
        return;
    }

    println!();
    println!("                     Maturity value = {}", maturity_value);
    println!("Maturity value after inflation adj. = {}", adjusted_value);
    println!();

    if cli.schedule {
        let schedule = growth_schedule(cli.amount, cli.rate, cli.inflation, cli.years);

        println!("{:>4} {:>16} {:>16}", "Year", "Nominal", "Today's money");
        println!("{}", "-".repeat(38));
        for row in &schedule {
            println!(
                "{:>4} {:>16.2} {:>16.2}",
                row.year, row.nominal_value, row.adjusted_value
            );
        }
        println!();
    }
}
