//! Metrics derived from a finished simulation run
use crate::{
    cpu::FrequencySample,
    process::{ExecutionInterval, Process},
    simulation::SimulationResult,
};
use serde_derive::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessReport {
    pub pid: i32,
    pub start_time: i32,
    pub finish_time: i32,
    pub turnaround_time: i32,
    pub waiting_time: i32,
}

impl ProcessReport {
    /// `None` until the process has been scheduled to completion.
    pub fn new(process: &Process) -> Option<Self> {
        Some(Self {
            pid: process.pid(),
            start_time: process.start_time()?,
            finish_time: process.finish_time()?,
            turnaround_time: process.turnaround_time()?,
            waiting_time: process.waiting_time()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyUsage {
    pub frequency: f64,
    pub duration: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub process_reports: Vec<ProcessReport>,
    pub average_turnaround_time: f64,
    pub average_waiting_time: f64,
    /// Joules
    pub total_power_consumption: f64,
    pub idle_time: i32,
    /// Percentage saved against running every burst at `base_power`.
    pub energy_savings: f64,
    pub schedule_length: i32,
    pub idle_intervals: Vec<ExecutionInterval>,
    pub frequency_usage: Vec<FrequencyUsage>,
}

impl SimulationReport {
    pub fn new(result: &SimulationResult) -> Self {
        let process_reports: Vec<ProcessReport> =
            result.completed.iter().filter_map(ProcessReport::new).collect();
        let num_processes = process_reports.len().max(1) as f64;
        let total_turnaround: i64 = process_reports
            .iter()
            .map(|r| r.turnaround_time as i64)
            .sum();
        let total_waiting: i64 = process_reports.iter().map(|r| r.waiting_time as i64).sum();

        let total_burst_time: i64 = result
            .completed
            .iter()
            .map(|p| p.burst_time() as i64)
            .sum();
        let schedule_length = result.schedule_length();

        Self {
            average_turnaround_time: total_turnaround as f64 / num_processes,
            average_waiting_time: total_waiting as f64 / num_processes,
            total_power_consumption: result.cpu.power_consumption(),
            idle_time: result.cpu.idle_time(),
            energy_savings: get_energy_savings(
                result.params.base_power,
                total_burst_time,
                result.cpu.power_consumption(),
            ),
            schedule_length,
            idle_intervals: get_idle_intervals(&result.completed),
            frequency_usage: get_frequency_usage(
                result.cpu.frequency_history(),
                result.params.max_frequency,
                schedule_length,
            ),
            process_reports,
        }
    }
}

pub fn get_energy_savings(base_power: f64, total_burst_time: i64, power_consumption: f64) -> f64 {
    let baseline = base_power * total_burst_time as f64;
    if baseline <= 0.0 {
        return 0.0;
    }
    (baseline - power_consumption) / baseline * 100.0
}

/// Gaps between the merged execution intervals of all processes, starting from time 0.
pub fn get_idle_intervals(processes: &[Process]) -> Vec<ExecutionInterval> {
    let mut busy_intervals: Vec<ExecutionInterval> = processes
        .iter()
        .flat_map(|process| process.execution_history().iter().copied())
        .collect();
    busy_intervals.sort();

    let mut idle_intervals = Vec::new();
    let mut current_time = 0;
    for (start, end) in busy_intervals {
        if start > current_time {
            idle_intervals.push((current_time, start));
        }
        current_time = current_time.max(end);
    }
    idle_intervals
}

/// Time spent at each frequency level, in order of first use.
///
/// The CPU starts at `initial_frequency` and `frequency_history` holds the changes,
/// so each sample lasts until the next one or until `end_time`.
pub fn get_frequency_usage(
    frequency_history: &[FrequencySample],
    initial_frequency: f64,
    end_time: i32,
) -> Vec<FrequencyUsage> {
    let mut usage: Vec<FrequencyUsage> = Vec::new();
    let mut add = |frequency: f64, duration: i32| {
        if duration <= 0 {
            return;
        }
        match usage.iter_mut().find(|entry| entry.frequency == frequency) {
            Some(entry) => entry.duration += duration,
            None => usage.push(FrequencyUsage {
                frequency,
                duration,
            }),
        }
    };

    let first_change = frequency_history.first().map_or(end_time, |sample| sample.0);
    add(initial_frequency, first_change);
    for (i, &(time, frequency)) in frequency_history.iter().enumerate() {
        let next_time = frequency_history.get(i + 1).map_or(end_time, |sample| sample.0);
        add(frequency, next_time - time);
    }
    usage
}
