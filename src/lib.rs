mod controllers;
mod core;
mod input;
mod presenters;

pub use controllers::data::summaries::{ModelSummary, ScalingSummary};
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use controllers::ports::report_presenter::ReportPresenterPort;
pub use controllers::render::RenderController;
pub use controllers::scaling::ScalingController;
pub use core::actions::generate_fractal::ports::row_task::RowTask;
pub use core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
pub use core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
pub use core::actions::measure_scaling::errors::HarnessError;
pub use core::actions::measure_scaling::harness::{
    ScalingHarness, measure, strong_scaling, weak_scaling,
};
pub use core::actions::measure_scaling::ports::workload::Workload;
pub use core::actions::measure_scaling::report::{
    ConfigurationFailure, FailureStage, ScalingEntry, ScalingProtocol, ScalingReport,
};
pub use core::actions::measure_scaling::scaling_config::ScalingConfig;
pub use core::actions::measure_scaling::scheduler_workload::SchedulerWorkload;
pub use core::actions::measure_scaling::speedup_model::{
    ModelError, ModelPrediction, SpeedupModel, amdahl, fit_speedup_model, gustafson,
};
pub use core::actions::measure_scaling::statistics::Statistics;
pub use core::actions::schedule::errors::ScheduleError;
pub use core::actions::schedule::scheduler::{ScheduledRun, Scheduler, compute};
pub use core::data::colour::Colour;
pub use core::data::complex::Complex;
pub use core::data::execution_mode::{
    ExecutionMode, ExecutionModeError, PartitionPolicy, WorkerCount,
};
pub use core::data::image_matrix::{ImageMatrix, ImageMatrixError, PixelResult};
pub use core::data::iteration_cap::{IterationCap, IterationCapError};
pub use core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use core::data::viewport::{Viewport, ViewportError};
pub use core::fractals::mandelbrot::algorithm::{MandelbrotRowTask, compute_row, escape_time};
pub use core::fractals::mandelbrot::colour_map::{LogPolynomialColourMap, MandelbrotColourMapError};
pub use core::fractals::mandelbrot::mandelbrot_config::{RenderConfig, RenderConfigError};
pub use core::util::pixel_to_complex_coords::pixel_to_complex_coords;
pub use input::cli::Cli;
pub use input::cli::commands::run as run_cli;
pub use presenters::file::ppm::PpmFilePresenter;
pub use presenters::report::json::JsonReportPresenter;
pub use presenters::report::table::TableReportPresenter;
