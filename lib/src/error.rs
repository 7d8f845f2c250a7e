//! Errors surfaced to callers of the simulation.
//! The scheduling engine itself never fails on validated input, so everything here
//! comes from validating process lists, simulation parameters and process files.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("No processes to schedule")]
    EmptyProcessSet,
    #[error("Invalid process {pid}: {reason}")]
    InvalidProcess { pid: i32, reason: String },
    #[error("Process with PID {0} already exists")]
    DuplicatePid(i32),
    #[error("No process with PID {0}")]
    UnknownPid(i32),
    #[error("Invalid parameter {name}: {value} (must be a positive number)")]
    InvalidParameter { name: &'static str, value: f64 },
    #[error("Unsupported process file format: {0}")]
    UnsupportedFileFormat(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, SimulationError>;
