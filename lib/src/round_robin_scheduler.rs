use std::collections::VecDeque;

use crate::{cpu::Cpu, frequency_policy::FrequencyPolicy, process::Process};
use log::{debug, info};

const IDLE_STEP: i32 = 1;

/// This function simulates Round-Robin scheduling of a batch of processes on a single CPU
/// with frequency scaling and a low-power idle state.
///
/// # Arguments
///
/// * `processes` - The processes to schedule, in input order. The scheduler owns them for the run.
/// * `time_quantum` - Maximum contiguous CPU time granted per dispatch. Must be positive.
/// * `cpu` - The CPU that executes the processes and accumulates power/frequency telemetry.
///
/// # Returns
///
/// * The finished processes in completion order.
///
/// # Description
///
/// The processes are stable-sorted by arrival time once and held in an arena; the pending
/// list, the ready queue and the completion order only hold indices into that arena.
/// In the main loop the following operations are carried out at the current time:
///
/// 1. Every pending process whose arrival time has been reached is appended to the ready queue.
/// 2. If the ready queue is empty, the CPU idles for one time unit.
/// 3. Otherwise the head of the ready queue runs for at most one quantum.
/// 4. A process with no remaining time is finished, any other is appended to the ready queue again.
///
/// The preempted process is requeued before arrivals that occurred during its slice,
/// since those are only collected at the start of the next iteration.
///
/// # Example
///
/// ```
/// use lib::{cpu::Cpu, process::Process, round_robin_scheduler::round_robin_scheduling};
///
/// let mut cpu = Cpu::new(100.0, 4.0, 2.0);
/// let completed = round_robin_scheduling(vec![Process::new(1, 0, 5, 1)], 3, &mut cpu);
/// assert_eq!(completed[0].execution_history(), &vec![(0, 3), (3, 5)]);
/// assert_eq!(cpu.power_consumption(), 500.0);
/// ```
pub fn round_robin_scheduling<P: FrequencyPolicy>(
    processes: Vec<Process>,
    time_quantum: i32,
    cpu: &mut Cpu<P>,
) -> Vec<Process> {
    assert!(time_quantum > 0, "Time quantum must be positive");

    let mut arena = processes;
    // sort_by_key is stable, so simultaneous arrivals keep their input order.
    arena.sort_by_key(|process| process.arrival_time());

    let mut pending: VecDeque<usize> = (0..arena.len()).collect();
    let mut ready_queue: VecDeque<usize> = VecDeque::new();
    let mut completion_order: Vec<usize> = Vec::with_capacity(arena.len());

    let mut current_time = 0;
    while !pending.is_empty() || !ready_queue.is_empty() {
        while let Some(&process_i) = pending.front() {
            if arena[process_i].arrival_time() > current_time {
                break;
            }
            pending.pop_front();
            debug!(
                "t={}: process {} arrived",
                current_time,
                arena[process_i].pid()
            );
            ready_queue.push_back(process_i);
        }

        let Some(process_i) = ready_queue.pop_front() else {
            cpu.idle(IDLE_STEP, current_time);
            current_time += IDLE_STEP;
            continue;
        };

        let process = &mut arena[process_i];
        process.mark_started(current_time);
        current_time += cpu.execute(process, time_quantum, current_time);

        if process.is_finished() {
            process.mark_finished(current_time);
            debug!("t={}: process {} finished", current_time, process.pid());
            completion_order.push(process_i);
        } else {
            ready_queue.push_back(process_i);
        }
    }

    info!(
        "Round-Robin finished {} process(es) at t={}: {:.2} J, {} idle unit(s)",
        completion_order.len(),
        current_time,
        cpu.power_consumption(),
        cpu.idle_time()
    );

    let mut arena: Vec<Option<Process>> = arena.into_iter().map(Some).collect();
    completion_order
        .iter()
        .filter_map(|&process_i| arena[process_i].take())
        .collect()
}
