use std::fmt;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum IterationCapError {
    #[error("Maximum iterations must be greater than zero")]
    ZeroMaxIterations,
}

/// Upper bound on escape-time iterations. Always positive.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct IterationCap(u32);

impl IterationCap {
    pub fn new(max_iterations: u32) -> Result<Self, IterationCapError> {
        if max_iterations == 0 {
            return Err(IterationCapError::ZeroMaxIterations);
        }

        Ok(Self(max_iterations))
    }

    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for IterationCap {
    type Error = IterationCapError;

    fn try_from(max_iterations: u32) -> Result<Self, Self::Error> {
        Self::new(max_iterations)
    }
}

impl fmt::Display for IterationCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
