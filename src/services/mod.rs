pub mod breakdown_plot;
pub mod report_yaml;
pub mod roi_breakdown;
pub mod roi_calculation;
pub mod roi_report_types;
pub mod scenario_yaml;
