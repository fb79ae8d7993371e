use std::io::{self, Write};

use crate::controllers::data::summaries::{ModelSummary, ScalingSummary};
use crate::controllers::ports::report_presenter::ReportPresenterPort;
use crate::core::actions::measure_scaling::report::FailureStage;
use crate::core::actions::measure_scaling::speedup_model::{ModelPrediction, SpeedupModel};

/// Fixed-width text tables for terminals.
#[derive(Debug, Default, Clone, Copy)]
pub struct TableReportPresenter {}

fn optional(value: Option<f64>, precision: usize) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.precision$}"))
}

impl TableReportPresenter {
    fn write_model(
        model: &SpeedupModel,
        predictions: &[ModelPrediction],
        out: &mut dyn Write,
    ) -> io::Result<()> {
        writeln!(
            out,
            "serial fraction S = {:.4}, parallel fraction P = {:.4}",
            model.serial_fraction(),
            model.parallel_fraction()
        )?;
        writeln!(out)?;
        writeln!(out, "{:>7}  {:>10}  {:>10}", "workers", "amdahl", "gustafson")?;

        for prediction in predictions {
            writeln!(
                out,
                "{:>7}  {:>10.4}  {:>10.4}",
                prediction.workers, prediction.amdahl, prediction.gustafson
            )?;
        }

        Ok(())
    }
}

impl ReportPresenterPort for TableReportPresenter {
    fn present_scaling(&self, summary: &ScalingSummary, out: &mut dyn Write) -> io::Result<()> {
        let report = &summary.report;

        writeln!(
            out,
            "{} scaling, max iterations {}, base size {}x{}",
            report.protocol, report.max_iterations, report.base_width, report.base_height
        )?;
        if let Some(serial) = report.serial_mean_secs {
            writeln!(out, "serial baseline: {serial:.4} s")?;
        }
        writeln!(out)?;
        writeln!(
            out,
            "{:>7}  {:>6}  {:>7}  {:>10}  {:>10}  {:>10}  {:>8}  {:>8}  {:>9}",
            "workers", "width", "height", "serial s", "mean s", "std dev s", "speedup", "amdahl", "gustafson"
        )?;

        for entry in &report.entries {
            let n = entry.worker_count as f64;
            let (amdahl, gustafson) = summary
                .model
                .map_or((None, None), |m| (Some(m.amdahl(n)), Some(m.gustafson(n))));

            writeln!(
                out,
                "{:>7}  {:>6}  {:>7}  {:>10}  {:>10.4}  {:>10.4}  {:>8}  {:>8}  {:>9}",
                entry.worker_count,
                entry.width,
                entry.height,
                optional(entry.baseline_secs, 4),
                entry.mean_secs,
                entry.std_dev_secs,
                optional(entry.speedup, 3),
                optional(amdahl, 3),
                optional(gustafson, 3),
            )?;
        }

        if !report.failures.is_empty() {
            writeln!(out)?;
            writeln!(out, "failed configurations:")?;

            for failure in &report.failures {
                let stage = match failure.stage {
                    FailureStage::Baseline => "serial baseline",
                    FailureStage::Parallel => "parallel",
                };
                let workers = failure
                    .worker_count
                    .map_or_else(|| "-".to_string(), |n| n.to_string());
                writeln!(
                    out,
                    "  workers {workers}, {}x{}, {stage}: {}",
                    failure.width, failure.height, failure.error
                )?;
            }
        }

        writeln!(out)?;
        match (&summary.model, summary.reference_workers) {
            (Some(model), Some(reference)) => {
                writeln!(out, "model fitted at {reference} workers")?;
                Self::write_model(model, &summary.predictions, out)
            }
            _ => writeln!(out, "no model: no configuration has both serial and parallel timings"),
        }
    }

    fn present_model(&self, summary: &ModelSummary, out: &mut dyn Write) -> io::Result<()> {
        writeln!(
            out,
            "serial {:.4} s, parallel {:.4} s with {} workers",
            summary.serial_time, summary.parallel_time, summary.workers
        )?;
        Self::write_model(&summary.model, &summary.predictions, out)
    }
}
