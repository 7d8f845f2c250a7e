//! This module contains the definition of the CPU power/frequency model
use crate::{
    frequency_policy::{FrequencyPolicy, PriorityClass, TwoLevelDvfs},
    process::Process,
};
use getset::{CopyGetters, Getters};
use log::debug;

/// Share of `base_power` drawn while the CPU sits in the low-power idle state.
pub const IDLE_POWER_RATIO: f64 = 0.1;

/// `(time, frequency in GHz)`
pub type FrequencySample = (i32, f64);
/// `(time, instantaneous power in W)`
pub type PowerSample = (i32, f64);

/// Single-core CPU that accumulates energy and frequency telemetry while it
/// executes processes or idles.
#[derive(Debug, Clone, Getters, CopyGetters)]
pub struct Cpu<P = TwoLevelDvfs> {
    #[getset(get_copy = "pub")]
    base_power: f64,
    #[getset(get_copy = "pub")]
    max_frequency: f64,
    #[getset(get_copy = "pub")]
    min_frequency: f64,
    #[getset(get = "pub")]
    frequency_policy: P,
    #[getset(get_copy = "pub")]
    current_frequency: f64,
    /// Cumulative energy in Joules.
    #[getset(get_copy = "pub")]
    power_consumption: f64,
    #[getset(get_copy = "pub")]
    idle_time: i32,
    #[getset(get = "pub")]
    frequency_history: Vec<FrequencySample>,
    #[getset(get = "pub")]
    power_history: Vec<PowerSample>,
}

impl Cpu<TwoLevelDvfs> {
    pub fn new(base_power: f64, max_frequency: f64, min_frequency: f64) -> Self {
        Self::with_policy(
            base_power,
            max_frequency,
            min_frequency,
            TwoLevelDvfs::new(max_frequency, min_frequency),
        )
    }
}

impl<P: FrequencyPolicy> Cpu<P> {
    pub fn with_policy(
        base_power: f64,
        max_frequency: f64,
        min_frequency: f64,
        frequency_policy: P,
    ) -> Self {
        Self {
            base_power,
            max_frequency,
            min_frequency,
            frequency_policy,
            current_frequency: max_frequency,
            power_consumption: 0.0,
            idle_time: 0,
            frequency_history: Vec::new(),
            power_history: Vec::new(),
        }
    }

    /// Runs `process` for at most `time_quantum` units starting at `current_time`.
    ///
    /// Returns the time actually spent, which is shorter than the quantum when the
    /// process finishes inside it.
    pub fn execute(&mut self, process: &mut Process, time_quantum: i32, current_time: i32) -> i32 {
        assert!(time_quantum > 0, "Time quantum must be positive");
        let execution_time = time_quantum.min(process.remaining_time());
        process.consume(execution_time);
        process.add_execution_interval(current_time, current_time + execution_time);

        let new_frequency = self
            .frequency_policy
            .select_frequency(PriorityClass::of(process));
        if new_frequency != self.current_frequency {
            self.current_frequency = new_frequency;
            self.frequency_history
                .push((current_time, self.current_frequency));
        }

        let power = self.power_at(self.current_frequency);
        self.power_consumption += power * execution_time as f64;
        self.power_history.push((current_time, power));

        debug!(
            "t={}: process {} ran {} unit(s) at {} GHz ({} W)",
            current_time,
            process.pid(),
            execution_time,
            self.current_frequency,
            power
        );
        execution_time
    }

    /// Puts the CPU in the low-power idle state for `duration` units.
    pub fn idle(&mut self, duration: i32, current_time: i32) {
        assert!(duration > 0, "Idle duration must be positive");
        self.idle_time += duration;
        let idle_power = self.idle_power();
        self.power_consumption += idle_power * duration as f64;
        self.current_frequency = 0.0;
        self.frequency_history.push((current_time, 0.0));
        self.power_history.push((current_time, idle_power));
        debug!("t={}: cpu idle for {} unit(s)", current_time, duration);
    }

    /// Linear scaling law: `base_power * frequency / max_frequency`.
    pub fn power_at(&self, frequency: f64) -> f64 {
        self.base_power * (frequency / self.max_frequency)
    }

    pub fn idle_power(&self) -> f64 {
        IDLE_POWER_RATIO * self.base_power
    }
}
