//! Read and write process lists as JSON or YAML files
use crate::{
    error::{Result, SimulationError},
    process_set::{ProcessSet, ProcessSpec},
};

use log::info;
use std::{fs, path::Path};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessFileFormat {
    Json,
    Yaml,
}

impl ProcessFileFormat {
    pub fn from_path(file_path: &str) -> Result<Self> {
        match Path::new(file_path)
            .extension()
            .and_then(|extension| extension.to_str())
        {
            Some("json") => Ok(ProcessFileFormat::Json),
            Some("yaml") | Some("yml") => Ok(ProcessFileFormat::Yaml),
            _ => Err(SimulationError::UnsupportedFileFormat(file_path.to_owned())),
        }
    }
}

/// load a process file and return its records in file order
///
/// # Arguments
///
/// *  `file_path` - `.json`, `.yaml` or `.yml` file holding a sequence of
///    `{pid, arrival, burst, priority}` records
///
/// # Example
///
/// ```
/// use lib::process_creator::load_process_specs;
///
/// let specs = load_process_specs("tests/sample_processes/basic.json").unwrap();
/// assert_eq!(specs.len(), 3);
/// assert_eq!(specs[1].burst, 3);
/// ```
pub fn load_process_specs(file_path: &str) -> Result<Vec<ProcessSpec>> {
    let format = ProcessFileFormat::from_path(file_path)?;
    let contents = fs::read_to_string(file_path)?;
    let specs = match format {
        ProcessFileFormat::Json => serde_json::from_str(&contents)?,
        ProcessFileFormat::Yaml => serde_yaml::from_str(&contents)?,
    };
    Ok(specs)
}

/// load a process file and validate it into a process set
pub fn create_process_set_from_file(file_path: &str) -> Result<ProcessSet> {
    let process_set = ProcessSet::from_specs(load_process_specs(file_path)?)?;
    info!(
        "Loaded {} process(es) from {}",
        process_set.len(),
        file_path
    );
    Ok(process_set)
}

/// Replaces the contents of `process_set` with the processes in `file_path`.
/// On any error `process_set` is left as it was.
pub fn import_process_set(process_set: &mut ProcessSet, file_path: &str) -> Result<()> {
    *process_set = create_process_set_from_file(file_path)?;
    Ok(())
}

pub fn export_process_set(process_set: &ProcessSet, file_path: &str) -> Result<()> {
    if process_set.is_empty() {
        return Err(SimulationError::EmptyProcessSet);
    }
    let contents = match ProcessFileFormat::from_path(file_path)? {
        ProcessFileFormat::Json => serde_json::to_string_pretty(process_set.specs())?,
        ProcessFileFormat::Yaml => serde_yaml::to_string(process_set.specs())?,
    };
    if let Some(parent) = Path::new(file_path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(file_path, contents)?;
    info!("Exported {} process(es) to {}", process_set.len(), file_path);
    Ok(())
}
