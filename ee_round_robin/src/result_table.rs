use lib::report::SimulationReport;

const HEADER: [&str; 5] = ["PID", "Start Time", "Finish Time", "Turnaround", "Waiting"];

pub fn format_result_table(report: &SimulationReport) -> String {
    let mut table = format!(
        "{:>5} {:>12} {:>12} {:>12} {:>9}\n",
        HEADER[0], HEADER[1], HEADER[2], HEADER[3], HEADER[4]
    );
    for row in &report.process_reports {
        table.push_str(&format!(
            "{:>5} {:>12} {:>12} {:>12} {:>9}\n",
            row.pid, row.start_time, row.finish_time, row.turnaround_time, row.waiting_time
        ));
    }
    table
}

pub fn format_metrics(report: &SimulationReport) -> String {
    let mut metrics = format!(
        "Average Turnaround Time: {:.2} units\n\
         Average Waiting Time: {:.2} units\n\
         Total Power Consumption: {:.2} Joules\n\
         CPU Idle Time: {} units\n\
         Estimated Energy Savings: {:.1}%\n",
        report.average_turnaround_time,
        report.average_waiting_time,
        report.total_power_consumption,
        report.idle_time,
        report.energy_savings
    );
    for (start, end) in &report.idle_intervals {
        metrics.push_str(&format!("CPU Idle: [{}, {})\n", start, end));
    }
    metrics
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib::{
        simulation::run_simulation,
        test_helpers::{create_params, create_process_set},
    };

    fn create_report() -> SimulationReport {
        let process_set = create_process_set(&[(1, 0, 2, 1), (2, 0, 2, 2), (3, 6, 1, 1)]);
        SimulationReport::new(&run_simulation(&process_set, &create_params(1)).unwrap())
    }

    #[test]
    fn test_format_result_table_normal() {
        let table = format_result_table(&create_report());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Turnaround"));
        let first_row: Vec<&str> = lines[1].split_whitespace().collect();
        assert_eq!(first_row, vec!["1", "0", "3", "3", "1"]);
        let last_row: Vec<&str> = lines[3].split_whitespace().collect();
        assert_eq!(last_row, vec!["3", "6", "7", "1", "0"]);
    }

    #[test]
    fn test_format_metrics_normal() {
        let metrics = format_metrics(&create_report());
        assert!(metrics.contains("Total Power Consumption: 420.00 Joules"));
        assert!(metrics.contains("CPU Idle Time: 2 units"));
        assert!(metrics.contains("CPU Idle: [4, 6)"));
        let lines: Vec<&str> = metrics.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "Average Turnaround Time: 2.67 units");
        assert_eq!(lines[4], "Estimated Energy Savings: 16.0%");
    }
}
