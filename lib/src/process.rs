//! This module contains the definition of the process handled by the scheduler
use getset::{CopyGetters, Getters};

/// Half-open execution interval `[start, end)` in simulation time units.
pub type ExecutionInterval = (i32, i32);

/// A process with static requirements and the runtime state written during a run.
///
/// The static fields are fixed at construction. `remaining_time`, `start_time`,
/// `finish_time` and `execution_history` are only written by the CPU and the
/// scheduler of this crate.
#[derive(Debug, Clone, PartialEq, Getters, CopyGetters)]
pub struct Process {
    #[getset(get_copy = "pub")]
    pid: i32,
    #[getset(get_copy = "pub")]
    arrival_time: i32,
    #[getset(get_copy = "pub")]
    burst_time: i32,
    /// 1 is high priority, anything greater is low priority.
    #[getset(get_copy = "pub")]
    priority: i32,
    #[getset(get_copy = "pub")]
    remaining_time: i32,
    #[getset(get_copy = "pub")]
    start_time: Option<i32>,
    #[getset(get_copy = "pub")]
    finish_time: Option<i32>,
    #[getset(get = "pub")]
    execution_history: Vec<ExecutionInterval>,
}

impl Process {
    pub fn new(pid: i32, arrival_time: i32, burst_time: i32, priority: i32) -> Self {
        Self {
            pid,
            arrival_time,
            burst_time,
            priority,
            remaining_time: burst_time,
            start_time: None,
            finish_time: None,
            execution_history: Vec::new(),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.remaining_time == 0
    }

    pub fn add_execution_interval(&mut self, start: i32, end: i32) {
        assert!(
            end > start,
            "Process {}: empty execution interval ({}, {})",
            self.pid,
            start,
            end
        );
        if let Some(&(_, last_end)) = self.execution_history.last() {
            assert!(
                start >= last_end,
                "Process {}: interval ({}, {}) overlaps previous end {}",
                self.pid,
                start,
                end,
                last_end
            );
        }
        self.execution_history.push((start, end));
    }

    /// `finish_time - arrival_time`, once the process has finished.
    pub fn turnaround_time(&self) -> Option<i32> {
        self.finish_time
            .map(|finish_time| finish_time - self.arrival_time)
    }

    /// `turnaround_time - burst_time`, once the process has finished.
    pub fn waiting_time(&self) -> Option<i32> {
        self.turnaround_time()
            .map(|turnaround_time| turnaround_time - self.burst_time)
    }

    pub(crate) fn consume(&mut self, duration: i32) {
        self.remaining_time -= duration;
    }

    pub(crate) fn mark_started(&mut self, current_time: i32) {
        if self.start_time.is_none() {
            self.start_time = Some(current_time);
        }
    }

    pub(crate) fn mark_finished(&mut self, current_time: i32) {
        self.finish_time = Some(current_time);
    }
}
