use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::roi::RoiInput;

pub const DEFAULT_CURRENCY: &str = "$";

#[derive(Error, Debug)]
pub enum ScenarioYamlError {
    #[error("failed to read scenario file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse scenario yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("scenario value for {field} is not a finite number")]
    NonFinite { field: &'static str },
}

/// A calculation request as stored on disk. The currency is only a display label.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub input: RoiInput,
    pub currency: String,
}

#[derive(Debug, Deserialize)]
struct ScenarioRecord {
    #[serde(flatten)]
    input: RoiInput,
    currency: Option<String>,
}

pub fn deserialize_scenario_from_yaml_str(yaml: &str) -> Result<Scenario, ScenarioYamlError> {
    // An empty document is the default scenario.
    let record: Option<ScenarioRecord> = serde_yaml::from_str(yaml)?;
    let Some(record) = record else {
        return Ok(Scenario {
            input: RoiInput::default(),
            currency: DEFAULT_CURRENCY.to_string(),
        });
    };

    let input = record.input;
    let fields = [
        ("employee_count", input.employee_count),
        ("hourly_rate", input.hourly_rate),
        ("monthly_tool_cost", input.monthly_tool_cost),
        (
            "weekly_hours_saved_per_employee",
            input.weekly_hours_saved_per_employee,
        ),
    ];
    if let Some(&(field, _)) = fields.iter().find(|(_, value)| !value.is_finite()) {
        return Err(ScenarioYamlError::NonFinite { field });
    }

    Ok(Scenario {
        input,
        currency: record
            .currency
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
    })
}

pub fn load_scenario_from_yaml_file<P: AsRef<Path>>(
    path: P,
) -> Result<Scenario, ScenarioYamlError> {
    let path = path.as_ref();
    let yaml = std::fs::read_to_string(path).map_err(|source| ScenarioYamlError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    deserialize_scenario_from_yaml_str(&yaml)
}
