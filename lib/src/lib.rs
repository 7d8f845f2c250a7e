pub mod cpu;
pub mod error;
pub mod frequency_policy;
pub mod output_log;
pub mod process;
pub mod process_creator;
pub mod process_set;
pub mod report;
pub mod round_robin_scheduler;
pub mod simulation;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;
