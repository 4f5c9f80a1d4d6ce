//! Indexed computations.
//!
//! A computation is never executed. It exists so that the assessor has
//! something to be applied to, and one distinguished entry stands for the
//! assessor itself.

use serde::Serialize;

/// An opaque unit of behaviour identified by a positive index `q`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Computation {
    index: usize,
    is_assessor: bool,
}

impl Computation {
    /// An inert placeholder computation.
    pub fn placeholder(index: usize) -> Self {
        Self {
            index,
            is_assessor: false,
        }
    }

    /// The computation that represents the assessor itself.
    pub fn assessor(index: usize) -> Self {
        Self {
            index,
            is_assessor: true,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether the behaviour bound to this slot is the assessor.
    pub fn is_assessor(&self) -> bool {
        self.is_assessor
    }
}

impl std::fmt::Display for Computation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_assessor {
            write!(f, "Computation_{} (assessor)", self.index)
        } else {
            write!(f, "Computation_{}", self.index)
        }
    }
}
