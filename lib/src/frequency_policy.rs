//! Frequency selection (DVFS) policies used by the CPU when dispatching a process.
use crate::process::Process;

/// Priority tier of a process as seen by the DVFS policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityClass {
    High,
    Low,
}

impl PriorityClass {
    /// Priority 1 (or below) is high priority, every larger value is low priority.
    pub fn from_priority(priority: i32) -> Self {
        if priority > 1 {
            PriorityClass::Low
        } else {
            PriorityClass::High
        }
    }

    pub fn of(process: &Process) -> Self {
        Self::from_priority(process.priority())
    }
}

pub trait FrequencyPolicy {
    fn select_frequency(&self, priority_class: PriorityClass) -> f64;
}

/// Two discrete frequency levels keyed on the priority class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoLevelDvfs {
    pub high_priority_frequency: f64,
    pub low_priority_frequency: f64,
}

impl TwoLevelDvfs {
    pub fn new(max_frequency: f64, min_frequency: f64) -> Self {
        Self {
            high_priority_frequency: max_frequency,
            low_priority_frequency: min_frequency,
        }
    }
}

impl FrequencyPolicy for TwoLevelDvfs {
    fn select_frequency(&self, priority_class: PriorityClass) -> f64 {
        match priority_class {
            PriorityClass::High => self.high_priority_frequency,
            PriorityClass::Low => self.low_priority_frequency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_class_from_priority() {
        assert_eq!(PriorityClass::from_priority(1), PriorityClass::High);
        assert_eq!(PriorityClass::from_priority(2), PriorityClass::Low);
        assert_eq!(PriorityClass::from_priority(10), PriorityClass::Low);
    }

    #[test]
    fn test_two_level_dvfs_select_frequency() {
        let policy = TwoLevelDvfs::new(4.0, 2.0);
        assert_eq!(policy.select_frequency(PriorityClass::High), 4.0);
        assert_eq!(policy.select_frequency(PriorityClass::Low), 2.0);
    }

    #[test]
    fn test_priority_class_of_process() {
        assert_eq!(PriorityClass::of(&Process::new(0, 0, 1, 1)), PriorityClass::High);
        assert_eq!(PriorityClass::of(&Process::new(1, 0, 1, 3)), PriorityClass::Low);
    }
}
