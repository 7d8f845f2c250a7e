//! The list of process definitions a simulation run is built from.
use crate::{
    error::{Result, SimulationError},
    process::Process,
};
use serde_derive::{Deserialize, Serialize};

/// One record of the process exchange format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    pub pid: i32,
    pub arrival: i32,
    pub burst: i32,
    pub priority: i32,
}

impl ProcessSpec {
    pub fn new(pid: i32, arrival: i32, burst: i32, priority: i32) -> Self {
        Self {
            pid,
            arrival,
            burst,
            priority,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let reason = if self.pid <= 0 {
            "pid must be a positive integer"
        } else if self.arrival < 0 {
            "arrival time must not be negative"
        } else if self.burst <= 0 {
            "burst time must be a positive integer"
        } else if self.priority <= 0 {
            "priority must be a positive integer"
        } else {
            return Ok(());
        };
        Err(SimulationError::InvalidProcess {
            pid: self.pid,
            reason: reason.to_owned(),
        })
    }

    pub fn to_process(&self) -> Process {
        Process::new(self.pid, self.arrival, self.burst, self.priority)
    }
}

/// Ordered process definitions with unique PIDs. The order is the input order of the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessSet {
    specs: Vec<ProcessSpec>,
}

impl ProcessSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from records, rejecting the whole batch on the first invalid record.
    pub fn from_specs(specs: Vec<ProcessSpec>) -> Result<Self> {
        let mut process_set = Self::new();
        for spec in specs {
            process_set.add(spec)?;
        }
        Ok(process_set)
    }

    pub fn add(&mut self, spec: ProcessSpec) -> Result<()> {
        spec.validate()?;
        if self.contains(spec.pid) {
            return Err(SimulationError::DuplicatePid(spec.pid));
        }
        if self.horizon_with(&spec) > i32::MAX as i64 {
            return Err(SimulationError::InvalidProcess {
                pid: spec.pid,
                reason: format!(
                    "latest arrival plus total burst time exceeds {} time units",
                    i32::MAX
                ),
            });
        }
        self.specs.push(spec);
        Ok(())
    }

    /// Upper bound of the simulated time if `spec` joined the set:
    /// the CPU never idles past the latest arrival and never runs longer than all bursts.
    fn horizon_with(&self, spec: &ProcessSpec) -> i64 {
        let latest_arrival = self
            .specs
            .iter()
            .map(|s| s.arrival)
            .chain(std::iter::once(spec.arrival))
            .max()
            .unwrap_or(0) as i64;
        let total_burst: i64 = self
            .specs
            .iter()
            .map(|s| s.burst as i64)
            .chain(std::iter::once(spec.burst as i64))
            .sum();
        latest_arrival + total_burst
    }

    pub fn remove(&mut self, pid: i32) -> Result<ProcessSpec> {
        let position = self
            .specs
            .iter()
            .position(|spec| spec.pid == pid)
            .ok_or(SimulationError::UnknownPid(pid))?;
        Ok(self.specs.remove(position))
    }

    pub fn clear(&mut self) {
        self.specs.clear();
    }

    pub fn contains(&self, pid: i32) -> bool {
        self.specs.iter().any(|spec| spec.pid == pid)
    }

    /// The PID following the largest one in the set, for auto-numbering new entries.
    pub fn next_pid(&self) -> i32 {
        self.specs.iter().map(|spec| spec.pid).max().unwrap_or(0) + 1
    }

    pub fn specs(&self) -> &[ProcessSpec] {
        &self.specs
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn total_burst_time(&self) -> i32 {
        self.specs.iter().map(|spec| spec.burst).sum()
    }

    /// Fresh engine processes in input order.
    pub fn to_processes(&self) -> Result<Vec<Process>> {
        if self.is_empty() {
            return Err(SimulationError::EmptyProcessSet);
        }
        Ok(self.specs.iter().map(ProcessSpec::to_process).collect())
    }
}
