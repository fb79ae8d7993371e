use thiserror::Error;

use crate::core::actions::schedule::scheduler::Scheduler;
use crate::core::data::execution_mode::{ExecutionMode, PartitionPolicy};
use crate::core::data::iteration_cap::{IterationCap, IterationCapError};
use crate::core::data::viewport::{Viewport, ViewportError};

pub const DEFAULT_MAX_ITERATIONS: u32 = 100;
pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 500;
pub const DEFAULT_XMIN: f64 = -2.5;
pub const DEFAULT_XMAX: f64 = 1.0;
pub const DEFAULT_YMIN: f64 = -1.0;
pub const DEFAULT_YMAX: f64 = 1.0;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum RenderConfigError {
    #[error(transparent)]
    Viewport(#[from] ViewportError),
    #[error(transparent)]
    IterationCap(#[from] IterationCapError),
}

/// Raw render settings. Validated into domain types by [`RenderConfig::viewport`]
/// and [`RenderConfig::cap`] before anything is computed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderConfig {
    pub max_iterations: u32,
    pub width: u32,
    pub height: u32,
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
    pub mode: ExecutionMode,
    pub policy: PartitionPolicy,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            xmin: DEFAULT_XMIN,
            xmax: DEFAULT_XMAX,
            ymin: DEFAULT_YMIN,
            ymax: DEFAULT_YMAX,
            mode: ExecutionMode::Serial,
            policy: PartitionPolicy::default(),
        }
    }
}

impl RenderConfig {
    pub fn viewport(&self) -> Result<Viewport, RenderConfigError> {
        Ok(Viewport::new(
            self.xmin,
            self.xmax,
            self.ymin,
            self.ymax,
            self.width,
            self.height,
        )?)
    }

    pub fn cap(&self) -> Result<IterationCap, RenderConfigError> {
        Ok(IterationCap::new(self.max_iterations)?)
    }

    #[must_use]
    pub fn scheduler(&self) -> Scheduler {
        Scheduler::new(self.mode, self.policy)
    }
}
