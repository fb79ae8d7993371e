use std::time::Duration;

use serde::Serialize;

/// Mean and spread of a set of timing samples, in seconds.
///
/// `std_dev` is the sample standard deviation (divides by `n - 1`), and is
/// zero for a single sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub mean: f64,
    pub std_dev: f64,
    pub samples: Vec<f64>,
}

impl Statistics {
    /// `None` for an empty sample set.
    #[must_use]
    pub fn from_samples(samples: &[Duration]) -> Option<Self> {
        Self::from_secs(samples.iter().map(Duration::as_secs_f64).collect())
    }

    #[must_use]
    pub fn from_secs(samples: Vec<f64>) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let count = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / count;
        let std_dev = if samples.len() < 2 {
            0.0
        } else {
            let squared_deviations: f64 = samples.iter().map(|s| (s - mean).powi(2)).sum();
            (squared_deviations / (count - 1.0)).sqrt()
        };

        Some(Self {
            mean,
            std_dev,
            samples,
        })
    }
}
