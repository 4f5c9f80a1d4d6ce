//! The registry of indexed computations.
//!
//! Built once at startup from `1..=N`, immutable afterwards. When the assessor
//! is present it occupies exactly one slot, the distinguished index; every
//! other slot holds a placeholder.

use super::computation::Computation;
use super::error::{DiagonalError, DiagonalResult};

/// Immutable mapping from index (`1..=N`) to [`Computation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    /// Slot `i` holds the computation with index `i + 1`.
    entries: Vec<Computation>,
    distinguished_index: usize,
    assessor_present: bool,
}

impl Registry {
    /// Build a registry of `grid_size` computations with the assessor at `distinguished_index`.
    ///
    /// With `assessor_present == false` the distinguished slot gets a
    /// placeholder like every other slot. The index is validated either way.
    pub fn build(
        grid_size: usize,
        distinguished_index: usize,
        assessor_present: bool,
    ) -> DiagonalResult<Self> {
        if grid_size == 0 {
            return Err(DiagonalError::EmptyGrid);
        }
        if distinguished_index == 0 || distinguished_index > grid_size {
            return Err(DiagonalError::DistinguishedIndexOutOfRange {
                index: distinguished_index,
                grid_size,
            });
        }

        let entries = (1..=grid_size)
            .map(|index| {
                if assessor_present && index == distinguished_index {
                    Computation::assessor(index)
                } else {
                    Computation::placeholder(index)
                }
            })
            .collect();

        Ok(Self {
            entries,
            distinguished_index,
            assessor_present,
        })
    }

    /// Number of computations (N).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the computation at `index` (1-based).
    pub fn get(&self, index: usize) -> Option<&Computation> {
        index.checked_sub(1).and_then(|slot| self.entries.get(slot))
    }

    /// The slot chosen to hold the assessor.
    pub fn distinguished_index(&self) -> usize {
        self.distinguished_index
    }

    pub fn assessor_present(&self) -> bool {
        self.assessor_present
    }

    /// Whether the computation bound at `index` is the assessor.
    pub fn is_assessor_at(&self, index: usize) -> bool {
        self.get(index).is_some_and(Computation::is_assessor)
    }

    /// Iterate computations in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Computation> {
        self.entries.iter()
    }
}
