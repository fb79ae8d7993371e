use serde::Serialize;

use crate::core::actions::measure_scaling::report::ScalingReport;
use crate::core::actions::measure_scaling::speedup_model::{ModelPrediction, SpeedupModel};

/// A sweep together with the model fitted from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScalingSummary {
    pub report: ScalingReport,
    /// Worker count the model was fitted at.
    pub reference_workers: Option<usize>,
    /// Absent when no configuration had both a baseline and a parallel time.
    pub model: Option<SpeedupModel>,
    pub predictions: Vec<ModelPrediction>,
}

/// A model fitted from timings given directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelSummary {
    pub serial_time: f64,
    pub parallel_time: f64,
    pub workers: usize,
    pub model: SpeedupModel,
    pub predictions: Vec<ModelPrediction>,
}
