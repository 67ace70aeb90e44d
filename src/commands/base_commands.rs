use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use thiserror::Error;

use crate::domain::roi::{
    DEFAULT_EMPLOYEE_COUNT, DEFAULT_HOURLY_RATE, DEFAULT_MONTHLY_TOOL_COST,
    DEFAULT_WEEKLY_HOURS_SAVED,
};
use crate::services::breakdown_plot::BreakdownPlotError;
use crate::services::report_yaml::ReportWriteError;
use crate::services::scenario_yaml::{DEFAULT_CURRENCY, ScenarioYamlError};

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Yaml,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Calculate the ROI of AI tooling from command-line values
    Calculate {
        /// Number of employees using AI tools
        #[arg(short, long, default_value_t = DEFAULT_EMPLOYEE_COUNT, allow_negative_numbers = true)]
        employees: f64,
        /// Hourly cost per employee
        #[arg(short = 'r', long, default_value_t = DEFAULT_HOURLY_RATE, allow_negative_numbers = true)]
        hourly_rate: f64,
        /// Monthly cost of the AI tooling
        #[arg(short = 'c', long, default_value_t = DEFAULT_MONTHLY_TOOL_COST, allow_negative_numbers = true)]
        tool_cost: f64,
        /// Hours saved per week by each employee
        #[arg(short = 'w', long, default_value_t = DEFAULT_WEEKLY_HOURS_SAVED, allow_negative_numbers = true)]
        hours_saved: f64,
        /// Currency label used when printing amounts
        #[arg(long, default_value = DEFAULT_CURRENCY)]
        currency: String,
        /// Format printed to stdout
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Optional YAML report file
        #[arg(short, long)]
        output: Option<String>,
        /// Optional PNG chart of AI cost vs. monthly savings
        #[arg(long)]
        chart: Option<String>,
        /// Report date (YYYY-MM-DD)
        #[arg(short, long, default_value_t = default_report_date())]
        date: NaiveDate,
    },
    /// Calculate the ROI for a YAML scenario file and write a YAML report
    Evaluate {
        /// Scenario YAML file
        #[arg(short, long)]
        input: String,
        /// Output YAML file
        #[arg(short, long)]
        output: String,
        /// Report date (YYYY-MM-DD)
        #[arg(short, long, default_value_t = default_report_date())]
        date: NaiveDate,
    },
    /// Plot AI cost vs. monthly savings for a YAML scenario into a PNG chart
    PlotBreakdown {
        /// Scenario YAML file
        #[arg(short, long)]
        input: String,
        /// Output PNG file
        #[arg(short, long)]
        output: String,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Failed to load scenario: {0}")]
    Scenario(#[from] ScenarioYamlError),
    #[error("Failed to write report: {0}")]
    Report(#[from] ReportWriteError),
    #[error("Failed to plot breakdown: {0}")]
    Plot(#[from] BreakdownPlotError),
}

fn default_report_date() -> NaiveDate {
    Local::now().date_naive()
}
