use chrono::{DateTime, Utc};
use log::info;
use serde_derive::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;

use crate::{
    cpu::{Cpu, FrequencySample, PowerSample},
    error::Result,
    frequency_policy::FrequencyPolicy,
    process::{ExecutionInterval, Process},
    report::SimulationReport,
    simulation::{SimulationParams, SimulationResult},
};

pub fn create_yaml_file(folder_path: &str, file_name: &str) -> Result<String> {
    if fs::metadata(folder_path).is_err() {
        fs::create_dir_all(folder_path)?;
        info!("Created folder: {}", folder_path);
    }
    let file_path = format!("{}/{}.yaml", folder_path, file_name);
    fs::File::create(&file_path)?;
    Ok(file_path)
}

pub fn create_scheduler_log_yaml_file(folder_path: &str, alg_name: &str) -> Result<String> {
    let now: DateTime<Utc> = Utc::now();
    let date = now.format("%Y-%m-%d-%H-%M-%S").to_string();
    let file_name = format!("{}-{}-log", date, alg_name);
    create_yaml_file(folder_path, &file_name)
}

pub fn append_info_to_yaml(file_path: &str, info: &str) -> Result<()> {
    let mut file = OpenOptions::new().append(true).create(true).open(file_path)?;
    file.write_all(info.as_bytes())?;
    Ok(())
}

#[derive(Clone, Default, Serialize, Deserialize)]
pub struct ProcessLog {
    pub pid: i32,
    pub arrival_time: i32,
    pub burst_time: i32,
    pub priority: i32,
    pub start_time: Option<i32>,
    pub finish_time: Option<i32>,
    pub execution_history: Vec<ExecutionInterval>,
}

impl ProcessLog {
    pub fn new(process: &Process) -> Self {
        Self {
            pid: process.pid(),
            arrival_time: process.arrival_time(),
            burst_time: process.burst_time(),
            priority: process.priority(),
            start_time: process.start_time(),
            finish_time: process.finish_time(),
            execution_history: process.execution_history().clone(),
        }
    }
}

#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CpuLog {
    pub base_power: f64,
    pub max_frequency: f64,
    pub min_frequency: f64,
    pub power_consumption: f64,
    pub idle_time: i32,
    pub frequency_history: Vec<FrequencySample>,
    pub power_history: Vec<PowerSample>,
}

impl CpuLog {
    pub fn new<P: FrequencyPolicy>(cpu: &Cpu<P>) -> Self {
        Self {
            base_power: cpu.base_power(),
            max_frequency: cpu.max_frequency(),
            min_frequency: cpu.min_frequency(),
            power_consumption: cpu.power_consumption(),
            idle_time: cpu.idle_time(),
            frequency_history: cpu.frequency_history().clone(),
            power_history: cpu.power_history().clone(),
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct SimulationParamsInfo {
    pub simulation_params: SimulationParams,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct ProcessLogs {
    pub process_logs: Vec<ProcessLog>,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct CpuLogInfo {
    pub cpu_log: CpuLog,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct ResultInfo {
    pub result: SimulationReport,
}

/// Log of one run, written as one YAML mapping per section.
#[derive(Clone)]
pub struct SimulationLog {
    pub params_info: SimulationParamsInfo,
    pub process_logs: ProcessLogs,
    pub cpu_log: CpuLogInfo,
    pub result_info: ResultInfo,
}

impl SimulationLog {
    pub fn new(result: &SimulationResult) -> Self {
        Self {
            params_info: SimulationParamsInfo {
                simulation_params: result.params,
            },
            process_logs: ProcessLogs {
                process_logs: result.completed.iter().map(ProcessLog::new).collect(),
            },
            cpu_log: CpuLogInfo {
                cpu_log: CpuLog::new(&result.cpu),
            },
            result_info: ResultInfo {
                result: SimulationReport::new(result),
            },
        }
    }

    pub fn dump_log_to_yaml(&self, file_path: &str) -> Result<()> {
        append_info_to_yaml(file_path, &serde_yaml::to_string(&self.params_info)?)?;
        append_info_to_yaml(file_path, &serde_yaml::to_string(&self.process_logs)?)?;
        append_info_to_yaml(file_path, &serde_yaml::to_string(&self.cpu_log)?)?;
        append_info_to_yaml(file_path, &serde_yaml::to_string(&self.result_info)?)?;
        info!("Dumped simulation log to {}", file_path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        process_set::{ProcessSet, ProcessSpec},
        simulation::run_simulation,
    };
    use std::fs::remove_file;

    #[derive(Deserialize)]
    struct DumpedLog {
        simulation_params: SimulationParams,
        process_logs: Vec<ProcessLog>,
        cpu_log: CpuLog,
        result: SimulationReport,
    }

    fn create_result() -> SimulationResult {
        let process_set = ProcessSet::from_specs(vec![
            ProcessSpec::new(1, 0, 2, 1),
            ProcessSpec::new(2, 3, 1, 2),
        ])
        .unwrap();
        let params = SimulationParams {
            time_quantum: 2,
            base_power: 100.0,
            max_frequency: 4.0,
            min_frequency: 2.0,
        };
        run_simulation(&process_set, &params).unwrap()
    }

    #[test]
    fn test_create_scheduler_log_yaml_file_name() {
        let file_path = create_scheduler_log_yaml_file("../outputs", "test_name").unwrap();
        assert!(file_path.starts_with("../outputs/"));
        assert!(file_path.ends_with("-test_name-log.yaml"));
        remove_file(file_path).unwrap();
    }

    #[test]
    fn test_dump_log_to_yaml_normal() {
        let file_path = create_yaml_file("../outputs", "test_dump_log_to_yaml_normal").unwrap();
        SimulationLog::new(&create_result())
            .dump_log_to_yaml(&file_path)
            .unwrap();

        let file_contents = std::fs::read_to_string(&file_path).unwrap();
        let dumped: DumpedLog = serde_yaml::from_str(&file_contents).unwrap();

        assert_eq!(dumped.simulation_params.time_quantum, 2);
        assert_eq!(dumped.process_logs.len(), 2);
        assert_eq!(dumped.process_logs[0].execution_history, vec![(0, 2)]);
        assert_eq!(dumped.process_logs[1].finish_time, Some(4));
        assert_eq!(dumped.cpu_log.idle_time, 1);
        assert_eq!(dumped.cpu_log.frequency_history, vec![(2, 0.0), (3, 2.0)]);
        assert_eq!(dumped.result.schedule_length, 4);
        assert_eq!(dumped.result.idle_intervals, vec![(2, 3)]);
        remove_file(file_path).unwrap();
    }
}
