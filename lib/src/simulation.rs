//! One simulation run: validate the inputs, build fresh processes and a CPU, schedule.
use crate::{
    cpu::Cpu,
    error::{Result, SimulationError},
    process::Process,
    process_set::ProcessSet,
    round_robin_scheduler::round_robin_scheduling,
};

use log::{info, warn};
use serde_derive::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParams {
    pub time_quantum: i32,
    /// Watts drawn at `max_frequency`.
    pub base_power: f64,
    /// GHz
    pub max_frequency: f64,
    /// GHz
    pub min_frequency: f64,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            time_quantum: 3,
            base_power: 125.0,
            max_frequency: 5.8,
            min_frequency: 3.0,
        }
    }
}

impl SimulationParams {
    pub fn validate(&self) -> Result<()> {
        let checks = [
            ("time_quantum", self.time_quantum as f64),
            ("base_power", self.base_power),
            ("max_frequency", self.max_frequency),
            ("min_frequency", self.min_frequency),
        ];
        for (name, value) in checks {
            if value.is_nan() || value <= 0.0 {
                return Err(SimulationError::InvalidParameter { name, value });
            }
        }
        if self.min_frequency >= self.max_frequency {
            warn!(
                "min_frequency ({}) is not below max_frequency ({}); low priority processes save no energy",
                self.min_frequency, self.max_frequency
            );
        }
        Ok(())
    }

    pub fn create_cpu(&self) -> Cpu {
        Cpu::new(self.base_power, self.max_frequency, self.min_frequency)
    }
}

/// Everything a caller pulls out of a finished run.
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub params: SimulationParams,
    /// Finished processes in completion order.
    pub completed: Vec<Process>,
    pub cpu: Cpu,
}

impl SimulationResult {
    pub fn schedule_length(&self) -> i32 {
        self.completed
            .iter()
            .filter_map(|process| process.finish_time())
            .max()
            .unwrap_or(0)
    }
}

pub fn run_simulation(process_set: &ProcessSet, params: &SimulationParams) -> Result<SimulationResult> {
    params.validate()?;
    let processes = process_set.to_processes()?;
    let mut cpu = params.create_cpu();

    info!(
        "Scheduling {} process(es) with quantum {}",
        processes.len(),
        params.time_quantum
    );
    let completed = round_robin_scheduling(processes, params.time_quantum, &mut cpu);

    Ok(SimulationResult {
        params: *params,
        completed,
        cpu,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process_set::ProcessSpec;

    fn create_params() -> SimulationParams {
        SimulationParams {
            time_quantum: 3,
            base_power: 100.0,
            max_frequency: 4.0,
            min_frequency: 2.0,
        }
    }

    #[test]
    fn test_validate_rejects_non_positive_parameters() {
        let invalids = [
            SimulationParams {
                time_quantum: 0,
                ..create_params()
            },
            SimulationParams {
                base_power: -1.0,
                ..create_params()
            },
            SimulationParams {
                max_frequency: 0.0,
                ..create_params()
            },
            SimulationParams {
                min_frequency: f64::NAN,
                ..create_params()
            },
        ];
        for params in invalids {
            assert!(matches!(
                params.validate(),
                Err(SimulationError::InvalidParameter { .. })
            ));
        }
        assert!(create_params().validate().is_ok());
        assert!(SimulationParams::default().validate().is_ok());
    }

    #[test]
    fn test_run_simulation_normal() {
        let process_set = ProcessSet::from_specs(vec![ProcessSpec::new(1, 0, 5, 1)]).unwrap();
        let result = run_simulation(&process_set, &create_params()).unwrap();

        assert_eq!(result.completed.len(), 1);
        assert_eq!(result.completed[0].finish_time(), Some(5));
        assert_eq!(result.cpu.power_consumption(), 500.0);
        assert_eq!(result.schedule_length(), 5);
    }

    #[test]
    fn test_run_simulation_at_time_limit() {
        let process_set =
            ProcessSet::from_specs(vec![ProcessSpec::new(1, 0, i32::MAX, 1)]).unwrap();
        let params = SimulationParams {
            time_quantum: i32::MAX,
            ..create_params()
        };
        let result = run_simulation(&process_set, &params).unwrap();

        assert_eq!(result.completed[0].finish_time(), Some(i32::MAX));
        assert_eq!(result.schedule_length(), i32::MAX);
        assert!(ProcessSet::from_specs(vec![
            ProcessSpec::new(1, 0, i32::MAX, 1),
            ProcessSpec::new(2, 0, 1, 1),
        ])
        .is_err());
    }

    #[test]
    fn test_run_simulation_empty_set() {
        assert!(matches!(
            run_simulation(&ProcessSet::new(), &create_params()),
            Err(SimulationError::EmptyProcessSet)
        ));
    }

    #[test]
    fn test_run_simulation_does_not_touch_process_set() {
        let process_set = ProcessSet::from_specs(vec![
            ProcessSpec::new(1, 0, 2, 1),
            ProcessSpec::new(2, 0, 2, 2),
        ])
        .unwrap();
        let first = run_simulation(&process_set, &create_params()).unwrap();
        let second = run_simulation(&process_set, &create_params()).unwrap();

        assert_eq!(first.completed, second.completed);
        assert_eq!(first.cpu.power_history(), second.cpu.power_history());
        assert_eq!(process_set.len(), 2);
    }
}
