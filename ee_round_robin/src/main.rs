mod result_table;

use anyhow::{Context, Result};
use clap::Parser;
use lib::output_log::{create_scheduler_log_yaml_file, SimulationLog};
use lib::process_creator::{create_process_set_from_file, export_process_set};
use lib::report::SimulationReport;
use lib::simulation::{run_simulation, SimulationParams};
use log::info;
use result_table::{format_metrics, format_result_table};

#[derive(Parser)]
#[clap(
    name = "EE_Round_Robin",
    version = "1.0",
    about = "About:
    Energy-efficient Round-Robin scheduling on a single CPU.
    Processes with priority 1 run at max_frequency, all others at min_frequency,
    and the CPU drops to 10% of base_power while no process is ready."
)]
struct ArgParser {
    ///Path to the process list (.json, .yaml or .yml).
    #[clap(short = 'p', long = "process_file_path", required = true)]
    process_file_path: String,
    ///Time quantum.
    #[clap(short = 'q', long = "time_quantum", default_value_t = 3)]
    time_quantum: i32,
    ///Power draw at max frequency in W.
    #[clap(long = "base_power", default_value_t = 125.0)]
    base_power: f64,
    ///Max frequency in GHz.
    #[clap(long = "max_frequency", default_value_t = 5.8)]
    max_frequency: f64,
    ///Min frequency in GHz.
    #[clap(long = "min_frequency", default_value_t = 3.0)]
    min_frequency: f64,
    ///Path to output directory.
    #[clap(short = 'o', long = "output_dir_path", default_value = "../outputs")]
    output_dir_path: String,
    ///Write the validated process list to this file as well.
    #[clap(short = 'e', long = "export_path")]
    export_path: Option<String>,
}

impl ArgParser {
    fn simulation_params(&self) -> SimulationParams {
        SimulationParams {
            time_quantum: self.time_quantum,
            base_power: self.base_power,
            max_frequency: self.max_frequency,
            min_frequency: self.min_frequency,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let arg: ArgParser = ArgParser::parse();

    let process_set = create_process_set_from_file(&arg.process_file_path)
        .with_context(|| format!("Failed to import processes from {}", arg.process_file_path))?;
    if let Some(export_path) = &arg.export_path {
        export_process_set(&process_set, export_path)
            .with_context(|| format!("Failed to export processes to {}", export_path))?;
    }

    let result =
        run_simulation(&process_set, &arg.simulation_params()).context("Simulation failed")?;
    let report = SimulationReport::new(&result);
    print!("{}", format_result_table(&report));
    print!("{}", format_metrics(&report));

    let file_path = create_scheduler_log_yaml_file(&arg.output_dir_path, "ee_round_robin")?;
    SimulationLog::new(&result).dump_log_to_yaml(&file_path)?;
    info!("Result written to {}", file_path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arg_parser_defaults() {
        let arg = ArgParser::parse_from(["ee_round_robin", "-p", "processes.json"]);
        assert_eq!(arg.simulation_params(), SimulationParams::default());
        assert_eq!(arg.output_dir_path, "../outputs");
        assert!(arg.export_path.is_none());
    }

    #[test]
    fn test_arg_parser_overrides() {
        let arg = ArgParser::parse_from([
            "ee_round_robin",
            "-p",
            "processes.yaml",
            "-q",
            "2",
            "--base_power",
            "100",
            "--max_frequency",
            "4.0",
            "--min_frequency",
            "2.0",
        ]);
        assert_eq!(
            arg.simulation_params(),
            lib::test_helpers::create_params(2)
        );
    }
}
