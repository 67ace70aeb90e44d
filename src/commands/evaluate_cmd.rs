use chrono::NaiveDate;

use crate::commands::base_commands::CommandError;
use crate::commands::report_format::format_roi_report;
use crate::services::breakdown_plot::plot_breakdown_png;
use crate::services::report_yaml::write_report_yaml_file;
use crate::services::roi_calculation::compute;
use crate::services::roi_report_types::RoiReport;
use crate::services::scenario_yaml::load_scenario_from_yaml_file;

pub fn evaluate_command(input: &str, output: &str, date: NaiveDate) -> Result<(), CommandError> {
    let scenario = load_scenario_from_yaml_file(input)?;
    tracing::debug!(path = %input, input = ?scenario.input, "scenario loaded");

    let result = compute(scenario.input);
    let report = RoiReport::from_calculation(
        &data_source_name(input),
        &date.format("%Y-%m-%d").to_string(),
        &scenario.currency,
        scenario.input,
        &result,
    );

    // Chart first so a chart failure leaves no report behind.
    let chart_path = format!("{output}.png");
    plot_breakdown_png(&chart_path, &report.breakdown, &report.currency)?;
    tracing::info!(path = %chart_path, "breakdown chart written");

    write_report_yaml_file(output, &report)?;
    tracing::info!(path = %output, "report written");

    println!("{}", format_roi_report(&report));
    eprintln!("ROI report written to {output}");
    eprintln!("Breakdown chart written to {chart_path}");
    Ok(())
}

fn data_source_name(path: &str) -> String {
    std::path::Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
        .to_string()
}
