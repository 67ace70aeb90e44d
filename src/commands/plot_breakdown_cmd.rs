use crate::commands::base_commands::CommandError;
use crate::services::breakdown_plot::plot_breakdown_png;
use crate::services::roi_breakdown::cost_breakdown;
use crate::services::roi_calculation::compute;
use crate::services::scenario_yaml::load_scenario_from_yaml_file;

pub fn plot_breakdown_command(input: &str, output: &str) -> Result<(), CommandError> {
    let scenario = load_scenario_from_yaml_file(input)?;
    let bars = cost_breakdown(&compute(scenario.input));
    plot_breakdown_png(output, &bars, &scenario.currency)?;
    tracing::info!(path = %output, "breakdown chart written");
    eprintln!("Breakdown plot written to {output}");
    Ok(())
}
