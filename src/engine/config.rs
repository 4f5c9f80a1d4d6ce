//! Engine configuration.

use serde::Serialize;

use crate::core::{DiagonalError, DiagonalResult};

/// Configuration for the assessment engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngineConfig {
    /// Size of the computation index and natural-number range (N).
    pub grid_size: usize,
    /// Registry slot holding the assessor-as-computation.
    pub distinguished_index: usize,
    /// Route the distinguished cell through the controlled loop regardless of
    /// the modulo rule.
    pub specialized_test: bool,
    /// Whether the distinguished slot actually holds the assessor.
    pub assessor_present: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            grid_size: 8,
            distinguished_index: 6,
            specialized_test: false,
            assessor_present: true,
        }
    }
}

impl EngineConfig {
    pub fn with_grid_size(mut self, grid_size: usize) -> Self {
        self.grid_size = grid_size;
        self
    }

    pub fn with_distinguished_index(mut self, index: usize) -> Self {
        self.distinguished_index = index;
        self
    }

    pub fn with_specialized_test(mut self, enabled: bool) -> Self {
        self.specialized_test = enabled;
        self
    }

    pub fn with_assessor_present(mut self, present: bool) -> Self {
        self.assessor_present = present;
        self
    }

    /// Reject configurations the registry cannot be built from.
    pub fn validate(&self) -> DiagonalResult<()> {
        if self.grid_size == 0 {
            return Err(DiagonalError::EmptyGrid);
        }
        if !(1..=self.grid_size).contains(&self.distinguished_index) {
            return Err(DiagonalError::DistinguishedIndexOutOfRange {
                index: self.distinguished_index,
                grid_size: self.grid_size,
            });
        }
        Ok(())
    }
}
