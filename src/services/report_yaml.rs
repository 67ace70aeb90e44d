use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::services::roi_report_types::RoiReport;

#[derive(Error, Debug)]
pub enum ReportWriteError {
    #[error("failed to serialize report to yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to serialize report to json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to write report file {path}: {source}")]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub fn serialize_report_to_yaml<W: Write>(
    writer: &mut W,
    report: &RoiReport,
) -> Result<(), ReportWriteError> {
    let yaml = serde_yaml::to_string(report)?;
    writer.write_all(yaml.as_bytes())?;
    Ok(())
}

pub fn serialize_report_to_json<W: Write>(
    writer: &mut W,
    report: &RoiReport,
) -> Result<(), ReportWriteError> {
    serde_json::to_writer_pretty(&mut *writer, report)?;
    writer.write_all(b"\n")?;
    Ok(())
}

pub fn write_report_yaml_file<P: AsRef<Path>>(
    path: P,
    report: &RoiReport,
) -> Result<(), ReportWriteError> {
    let path = path.as_ref();
    let mut buffer = Vec::new();
    serialize_report_to_yaml(&mut buffer, report)?;
    std::fs::write(path, buffer).map_err(|source| ReportWriteError::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}
