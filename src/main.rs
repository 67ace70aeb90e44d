use std::process::ExitCode;

use ai_roi::commands::base_commands::{CliArgs, CommandError, Commands};
use ai_roi::commands::calculate_cmd::{CalculateRequest, calculate_command};
use ai_roi::commands::completions_cmd::completions_command;
use ai_roi::commands::evaluate_cmd::evaluate_command;
use ai_roi::commands::plot_breakdown_cmd::plot_breakdown_command;
use ai_roi::domain::roi::RoiInput;
use ai_roi::logging;
use clap::Parser;

fn main() -> ExitCode {
    logging::init();
    let args = CliArgs::parse();
    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<(), CommandError> {
    match command {
        Commands::Calculate {
            employees,
            hourly_rate,
            tool_cost,
            hours_saved,
            currency,
            format,
            output,
            chart,
            date,
        } => calculate_command(CalculateRequest {
            input: RoiInput {
                employee_count: employees,
                hourly_rate,
                monthly_tool_cost: tool_cost,
                weekly_hours_saved_per_employee: hours_saved,
            },
            currency,
            format,
            output,
            chart,
            date,
        }),
        Commands::Evaluate {
            input,
            output,
            date,
        } => evaluate_command(&input, &output, date),
        Commands::PlotBreakdown { input, output } => plot_breakdown_command(&input, &output),
        Commands::Completions { shell } => {
            completions_command(shell);
            Ok(())
        }
    }
}
