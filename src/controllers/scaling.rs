use std::io::Write;

use tracing::{info, warn};

use crate::controllers::data::summaries::{ModelSummary, ScalingSummary};
use crate::controllers::ports::report_presenter::ReportPresenterPort;
use crate::core::actions::measure_scaling::harness::ScalingHarness;
use crate::core::actions::measure_scaling::ports::workload::Workload;
use crate::core::actions::measure_scaling::report::{ScalingProtocol, ScalingReport};
use crate::core::actions::measure_scaling::scaling_config::ScalingConfig;
use crate::core::actions::measure_scaling::speedup_model::fit_speedup_model;
use crate::core::fractals::mandelbrot::mandelbrot_config::RenderConfig;

/// Runs a sweep, fits the speedup model and presents the result.
pub struct ScalingController<P: ReportPresenterPort> {
    presenter: P,
}

impl<P: ReportPresenterPort> ScalingController<P> {
    pub fn new(presenter: P) -> Self {
        Self { presenter }
    }

    /// `reference` picks the worker count the model is fitted at; the largest
    /// measured count when `None`.
    pub fn run<W: Workload>(
        &self,
        protocol: ScalingProtocol,
        workload: W,
        render: &RenderConfig,
        scaling: &ScalingConfig,
        reference: Option<usize>,
        out: &mut dyn Write,
    ) -> Result<ScalingSummary, Box<dyn std::error::Error>> {
        let viewport = render.viewport()?;
        let cap = render.cap()?;
        let harness = ScalingHarness::new(workload, scaling)?;

        info!(
            %protocol,
            workers = ?scaling.worker_counts,
            repetitions = scaling.repetitions,
            "starting scaling sweep"
        );

        let report = match protocol {
            ScalingProtocol::Strong => harness.strong_scaling(&viewport, cap),
            ScalingProtocol::Weak => harness.weak_scaling(&viewport, cap)?,
        };
        if !report.is_complete() {
            warn!(failed = report.failures.len(), "sweep finished with failed configurations");
        }

        let summary = summarise(report, reference, scaling.prediction_max_workers);
        self.presenter.present_scaling(&summary, out)?;

        Ok(summary)
    }

    pub fn model(
        &self,
        serial_time: f64,
        parallel_time: f64,
        workers: usize,
        max_workers: usize,
        out: &mut dyn Write,
    ) -> Result<ModelSummary, Box<dyn std::error::Error>> {
        let model = fit_speedup_model(serial_time, parallel_time, workers)?;
        let summary = ModelSummary {
            serial_time,
            parallel_time,
            workers,
            model,
            predictions: model.predict(max_workers),
        };

        self.presenter.present_model(&summary, out)?;

        Ok(summary)
    }
}

fn summarise(report: ScalingReport, reference: Option<usize>, max_workers: usize) -> ScalingSummary {
    match report.fit_model(reference) {
        Ok(model) => {
            let reference_workers = reference.or_else(|| {
                report
                    .entries
                    .iter()
                    .filter(|e| e.baseline_secs.is_some())
                    .map(|e| e.worker_count)
                    .max()
            });
            info!(
                serial_fraction = model.serial_fraction(),
                parallel_fraction = model.parallel_fraction(),
                reference_workers,
                "speedup model fitted"
            );

            ScalingSummary {
                predictions: model.predict(max_workers),
                model: Some(model),
                reference_workers,
                report,
            }
        }
        Err(error) => {
            warn!(%error, "could not fit speedup model");

            ScalingSummary {
                report,
                reference_workers: None,
                model: None,
                predictions: Vec::new(),
            }
        }
    }
}
