use crate::error::{DomainViolation, KnapsackError};
use crate::util::assertions;

/// A validated, unmodifiable 0/1 knapsack instance.
/// Item `i` is described by `values()[i]` and `weights()[i]`; items have no identity beyond their position.
///
/// The only way to obtain an `Instance` is through one of the validating constructors,
/// so every solver can rely on the preconditions of the recurrence:
/// * both sequences have the same length
/// * values, weights and capacity are non-negative
/// * the sum of all values fits in a `u64`
/// * the full `(n + 1) x (W + 1)` table fits in the address space
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    values: Vec<u64>,
    weights: Vec<usize>,
    capacity: usize,
}

impl Instance {
    /// Validates signed input, as supplied by external callers, and converts it into an instance.
    pub fn new(values: &[i64], weights: &[i64], capacity: i64) -> Result<Self, KnapsackError> {
        if values.len() != weights.len() {
            return Err(KnapsackError::Shape {
                n_values: values.len(),
                n_weights: weights.len(),
            });
        }

        let capacity = match capacity {
            c if c < 0 => return Err(DomainViolation::NegativeCapacity(c).into()),
            c => usize::try_from(c).map_err(|_| DomainViolation::CapacityTooLarge {
                capacity: c.unsigned_abs(),
                n_items: values.len(),
            })?,
        };

        let values = values
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                u64::try_from(value).map_err(|_| DomainViolation::NegativeValue { index, value })
            })
            .collect::<Result<Vec<u64>, _>>()?;

        let weights = weights
            .iter()
            .enumerate()
            .map(|(index, &weight)| match weight {
                w if w < 0 => Err(DomainViolation::NegativeWeight { index, weight }),
                // a weight beyond usize::MAX exceeds every representable capacity anyway
                w => Ok(usize::try_from(w).unwrap_or(usize::MAX)),
            })
            .collect::<Result<Vec<usize>, _>>()?;

        Self::from_parts(values, weights, capacity)
    }

    /// Builds an instance from already unsigned parts. Only the length, overflow and size checks remain.
    pub fn from_parts(
        values: Vec<u64>,
        weights: Vec<usize>,
        capacity: usize,
    ) -> Result<Self, KnapsackError> {
        if values.len() != weights.len() {
            return Err(KnapsackError::Shape {
                n_values: values.len(),
                n_weights: weights.len(),
            });
        }
        if !assertions::value_sum_fits(&values) {
            return Err(DomainViolation::ValueOverflow.into());
        }
        if !assertions::table_fits(values.len(), capacity) {
            return Err(DomainViolation::CapacityTooLarge {
                capacity: capacity as u64,
                n_items: values.len(),
            }
            .into());
        }

        Ok(Self {
            values,
            weights,
            capacity,
        })
    }

    pub fn values(&self) -> &[u64] {
        &self.values
    }

    pub fn weights(&self) -> &[usize] {
        &self.weights
    }

    /// Total weight budget `W`
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of items `n`
    pub fn n_items(&self) -> usize {
        self.values.len()
    }

    /// Iterates over the `(value, weight)` pairs of all items, in order.
    pub fn items(&self) -> impl Iterator<Item = (u64, usize)> + '_ {
        self.values.iter().copied().zip(self.weights.iter().copied())
    }

    /// Sum of all item values, an upper bound on every optimal value.
    pub fn total_value(&self) -> u64 {
        self.values.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX_CELLS: usize = isize::MAX as usize / size_of::<u64>();

    #[test]
    fn largest_addressable_table_is_accepted() {
        // one row of MAX_CELLS columns, nothing is allocated by the constructor
        let instance = Instance::from_parts(vec![], vec![], MAX_CELLS - 1).unwrap();
        assert_eq!(instance.capacity(), MAX_CELLS - 1);
    }

    #[test]
    fn table_beyond_address_space_is_rejected() {
        assert_eq!(
            Instance::from_parts(vec![], vec![], MAX_CELLS),
            Err(DomainViolation::CapacityTooLarge {
                capacity: MAX_CELLS as u64,
                n_items: 0,
            }
            .into())
        );
        assert_eq!(
            Instance::from_parts(vec![1, 2], vec![1, 1], MAX_CELLS / 2),
            Err(DomainViolation::CapacityTooLarge {
                capacity: (MAX_CELLS / 2) as u64,
                n_items: 2,
            }
            .into())
        );
        assert_eq!(
            Instance::from_parts(vec![1], vec![1], usize::MAX),
            Err(DomainViolation::CapacityTooLarge {
                capacity: usize::MAX as u64,
                n_items: 1,
            }
            .into())
        );
    }

    #[test]
    fn oversized_weight_is_kept_out_of_reach() {
        let instance = Instance::new(&[7, 3], &[i64::MAX, 2], 10).unwrap();
        assert_eq!(instance.weights()[1], 2);
        assert!(instance.weights()[0] > instance.capacity());
    }
}
