//! Fixtures shared by the tests of the algorithm binaries.
use crate::{
    process_set::{ProcessSet, ProcessSpec},
    simulation::SimulationParams,
};

/// 100 W at 4 GHz, 2 GHz for low priority processes.
pub fn create_params(time_quantum: i32) -> SimulationParams {
    SimulationParams {
        time_quantum,
        base_power: 100.0,
        max_frequency: 4.0,
        min_frequency: 2.0,
    }
}

pub fn create_process_set(specs: &[(i32, i32, i32, i32)]) -> ProcessSet {
    ProcessSet::from_specs(
        specs
            .iter()
            .map(|&(pid, arrival, burst, priority)| ProcessSpec::new(pid, arrival, burst, priority))
            .collect(),
    )
    .expect("test process set must be valid")
}
