use serde::Serialize;
use thiserror::Error;

/// Upper worker count of the default predicted curves.
pub const DEFAULT_PREDICTION_MAX_WORKERS: usize = 30;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("timings must be positive and finite: serial {serial_time}, parallel {parallel_time}")]
    InvalidTiming { serial_time: f64, parallel_time: f64 },
    #[error("reference worker count must be greater than zero")]
    ZeroWorkers,
    #[error("serial fraction must lie in [0, 1], got {0}")]
    InvalidFraction(f64),
    #[error("no measurement with a serial baseline for {0} workers")]
    MissingReference(usize),
}

/// Serial/parallel split of a program's run time, `S + P = 1`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct SpeedupModel {
    serial_fraction: f64,
    parallel_fraction: f64,
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct ModelPrediction {
    pub workers: usize,
    pub amdahl: f64,
    pub gustafson: f64,
}

impl SpeedupModel {
    pub fn from_serial_fraction(serial_fraction: f64) -> Result<Self, ModelError> {
        if !(0.0..=1.0).contains(&serial_fraction) {
            return Err(ModelError::InvalidFraction(serial_fraction));
        }

        Ok(Self {
            serial_fraction,
            parallel_fraction: 1.0 - serial_fraction,
        })
    }

    #[must_use]
    pub fn serial_fraction(&self) -> f64 {
        self.serial_fraction
    }

    #[must_use]
    pub fn parallel_fraction(&self) -> f64 {
        self.parallel_fraction
    }

    #[must_use]
    pub fn amdahl(&self, workers: f64) -> f64 {
        amdahl(self.serial_fraction, self.parallel_fraction, workers)
    }

    #[must_use]
    pub fn gustafson(&self, workers: f64) -> f64 {
        gustafson(self.serial_fraction, self.parallel_fraction, workers)
    }

    /// Both laws evaluated for `1..=max_workers`.
    #[must_use]
    pub fn predict(&self, max_workers: usize) -> Vec<ModelPrediction> {
        (1..=max_workers)
            .map(|workers| ModelPrediction {
                workers,
                amdahl: self.amdahl(workers as f64),
                gustafson: self.gustafson(workers as f64),
            })
            .collect()
    }
}

/// Solves `parallel = serial * (S + P / N)` for `S` from a single
/// measurement. With two unknowns tied by `S + P = 1` one timing pair
/// determines the model exactly.
///
/// The fraction is not clamped: super-linear speedup gives `S < 0` and a
/// parallel run slower than `serial / N` by more than the serial time gives
/// `S > 1`. Both are reported as measured.
pub fn fit_speedup_model(
    serial_time: f64,
    parallel_time: f64,
    worker_count: usize,
) -> Result<SpeedupModel, ModelError> {
    if worker_count == 0 {
        return Err(ModelError::ZeroWorkers);
    }

    let valid = |t: f64| t > 0.0 && t.is_finite();
    if !valid(serial_time) || !valid(parallel_time) {
        return Err(ModelError::InvalidTiming {
            serial_time,
            parallel_time,
        });
    }

    let serial_fraction = (parallel_time - serial_time / worker_count as f64) / parallel_time;

    Ok(SpeedupModel {
        serial_fraction,
        parallel_fraction: 1.0 - serial_fraction,
    })
}

/// Amdahl's law: `1 / (S + P / N)`.
#[must_use]
pub fn amdahl(serial_fraction: f64, parallel_fraction: f64, workers: f64) -> f64 {
    1.0 / (serial_fraction + parallel_fraction / workers)
}

/// Gustafson's law: `S + P * N`.
#[must_use]
pub fn gustafson(serial_fraction: f64, parallel_fraction: f64, workers: f64) -> f64 {
    serial_fraction + parallel_fraction * workers
}
