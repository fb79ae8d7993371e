//! Command-line front end.
//!
//! - `render` computes one image and writes it as PPM
//! - `strong` / `weak` run a scaling sweep and print a report
//! - `model` fits the speedup model from timings given on the command line

pub mod commands;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::core::actions::measure_scaling::scaling_config::{
    DEFAULT_BASELINE_REPETITIONS, DEFAULT_REPETITIONS,
};
use crate::core::actions::measure_scaling::speedup_model::DEFAULT_PREDICTION_MAX_WORKERS;
use crate::core::data::execution_mode::{ExecutionMode, ExecutionModeError, PartitionPolicy};
use crate::core::fractals::mandelbrot::mandelbrot_config::{
    DEFAULT_HEIGHT, DEFAULT_MAX_ITERATIONS, DEFAULT_WIDTH, DEFAULT_XMAX, DEFAULT_XMIN,
    DEFAULT_YMAX, DEFAULT_YMIN, RenderConfig,
};

/// Mandelbrot escape-time renderer and parallel scaling harness
#[derive(Parser, Debug)]
#[command(name = "mandelscale", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute one image and write it as a binary PPM
    Render(RenderArgs),
    /// Fixed problem size, increasing worker count
    Strong(ScalingArgs),
    /// Rows grow with the worker count
    Weak(ScalingArgs),
    /// Fit the Amdahl/Gustafson model from one serial/parallel timing pair
    Model(ModelArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Serial,
    Parallel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    WorkStealing,
    StaticBands,
}

impl From<PolicyArg> for PartitionPolicy {
    fn from(policy: PolicyArg) -> Self {
        match policy {
            PolicyArg::WorkStealing => Self::WorkStealing,
            PolicyArg::StaticBands => Self::StaticBands,
        }
    }
}

/// Region, size and iteration cap shared by every computing subcommand.
#[derive(Args, Debug, Clone)]
pub struct ViewArgs {
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: u32,

    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    #[arg(long, default_value_t = DEFAULT_XMIN, allow_negative_numbers = true)]
    pub xmin: f64,

    #[arg(long, default_value_t = DEFAULT_XMAX, allow_negative_numbers = true)]
    pub xmax: f64,

    #[arg(long, default_value_t = DEFAULT_YMIN, allow_negative_numbers = true)]
    pub ymin: f64,

    #[arg(long, default_value_t = DEFAULT_YMAX, allow_negative_numbers = true)]
    pub ymax: f64,

    /// How rows are handed to parallel workers
    #[arg(long, value_enum, default_value_t = PolicyArg::WorkStealing)]
    pub policy: PolicyArg,
}

impl ViewArgs {
    #[must_use]
    pub fn render_config(&self, mode: ExecutionMode) -> RenderConfig {
        RenderConfig {
            max_iterations: self.max_iterations,
            width: self.width,
            height: self.height,
            xmin: self.xmin,
            xmax: self.xmax,
            ymin: self.ymin,
            ymax: self.ymax,
            mode,
            policy: self.policy.into(),
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    #[command(flatten)]
    pub view: ViewArgs,

    #[arg(long, value_enum, default_value_t = ModeArg::Serial)]
    pub mode: ModeArg,

    /// Parallel worker count; all hardware threads when omitted
    #[arg(long)]
    pub workers: Option<usize>,

    #[arg(long, default_value = "output/mandelbrot.ppm")]
    pub output: PathBuf,
}

impl RenderArgs {
    pub fn execution_mode(&self) -> Result<ExecutionMode, ExecutionModeError> {
        match self.mode {
            ModeArg::Serial => Ok(ExecutionMode::Serial),
            ModeArg::Parallel => ExecutionMode::parallel(self.workers),
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct ScalingArgs {
    #[command(flatten)]
    pub view: ViewArgs,

    /// Comma-separated worker counts
    #[arg(long, value_delimiter = ',', default_value = "1,2,4,6,8,12,16,18")]
    pub workers: Vec<usize>,

    /// Parallel runs per worker count
    #[arg(long, default_value_t = DEFAULT_REPETITIONS)]
    pub repetitions: usize,

    /// Serial runs averaged into each baseline
    #[arg(long, default_value_t = DEFAULT_BASELINE_REPETITIONS)]
    pub baseline_repetitions: usize,

    /// Worker count to fit the model at; the largest measured one by default
    #[arg(long)]
    pub reference: Option<usize>,

    /// Upper worker count of the predicted curves
    #[arg(long, default_value_t = DEFAULT_PREDICTION_MAX_WORKERS)]
    pub max_workers: usize,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ModelArgs {
    /// Serial run time in seconds
    #[arg(long)]
    pub serial_time: f64,

    /// Parallel run time in seconds
    #[arg(long)]
    pub parallel_time: f64,

    /// Worker count of the parallel run
    #[arg(long)]
    pub workers: usize,

    #[arg(long, default_value_t = DEFAULT_PREDICTION_MAX_WORKERS)]
    pub max_workers: usize,

    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::execution_mode::WorkerCount;

    #[test]
    fn test_render_defaults() {
        let cli = Cli::try_parse_from(["mandelscale", "render"]).unwrap();
        let Command::Render(args) = cli.command else {
            panic!("expected render");
        };
        let config = args.view.render_config(args.execution_mode().unwrap());

        assert_eq!(config, RenderConfig::default());
        assert_eq!(args.output, PathBuf::from("output/mandelbrot.ppm"));
    }

    #[test]
    fn test_render_parallel_with_negative_bounds() {
        let cli = Cli::try_parse_from([
            "mandelscale",
            "render",
            "--mode",
            "parallel",
            "--workers",
            "4",
            "--xmin",
            "-2.0",
            "--ymin",
            "-1.5",
            "--policy",
            "static-bands",
        ])
        .unwrap();
        let Command::Render(args) = cli.command else {
            panic!("expected render");
        };
        let config = args.view.render_config(args.execution_mode().unwrap());

        assert_eq!(config.xmin, -2.0);
        assert_eq!(config.ymin, -1.5);
        assert_eq!(config.policy, PartitionPolicy::StaticBands);
        assert_eq!(
            config.mode,
            ExecutionMode::Parallel(WorkerCount::fixed(4).unwrap())
        );
    }

    #[test]
    fn test_render_zero_workers_is_a_configuration_error() {
        let cli = Cli::try_parse_from(["mandelscale", "render", "--mode", "parallel", "--workers", "0"])
            .unwrap();
        let Command::Render(args) = cli.command else {
            panic!("expected render");
        };

        assert_eq!(args.execution_mode(), Err(ExecutionModeError::ZeroWorkers));
    }

    #[test]
    fn test_scaling_worker_list() {
        let cli = Cli::try_parse_from(["mandelscale", "weak", "--workers", "1,2,8", "--json"])
            .unwrap();
        let Command::Weak(args) = cli.command else {
            panic!("expected weak");
        };

        assert_eq!(args.workers, vec![1, 2, 8]);
        assert_eq!(args.repetitions, 5);
        assert_eq!(args.max_workers, 30);
        assert!(args.json);
    }

    #[test]
    fn test_scaling_default_worker_list() {
        let cli = Cli::try_parse_from(["mandelscale", "strong"]).unwrap();
        let Command::Strong(args) = cli.command else {
            panic!("expected strong");
        };

        assert_eq!(args.workers, vec![1, 2, 4, 6, 8, 12, 16, 18]);
        assert_eq!(args.baseline_repetitions, 1);
    }

    #[test]
    fn test_model_requires_timings() {
        assert!(Cli::try_parse_from(["mandelscale", "model", "--workers", "4"]).is_err());
        assert!(
            Cli::try_parse_from([
                "mandelscale",
                "model",
                "--serial-time",
                "10",
                "--parallel-time",
                "4",
                "--workers",
                "4"
            ])
            .is_ok()
        );
    }
}
