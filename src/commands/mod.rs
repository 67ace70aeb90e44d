pub mod base_commands;
pub mod calculate_cmd;
pub mod completions_cmd;
pub mod evaluate_cmd;
pub mod plot_breakdown_cmd;
pub mod report_format;
