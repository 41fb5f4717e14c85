use thiserror::Error;

/// Reasons why an input cannot be turned into a valid [`Instance`](crate::entities::Instance).
/// All checks happen before any dynamic programming state is allocated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KnapsackError {
    /// The value and weight sequences do not describe the same items
    #[error("shape error: {n_values} values were supplied for {n_weights} weights, both sequences must have equal length")]
    Shape { n_values: usize, n_weights: usize },
    /// A number lies outside the domain the recurrence is defined on
    #[error("domain error: {0}")]
    Domain(#[from] DomainViolation),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainViolation {
    #[error("value of item {index} is negative ({value}), values must be non-negative")]
    NegativeValue { index: usize, value: i64 },
    #[error("weight of item {index} is negative ({weight}), weights must be non-negative")]
    NegativeWeight { index: usize, weight: i64 },
    #[error("capacity is negative ({0}), capacity must be non-negative")]
    NegativeCapacity(i64),
    #[error("capacity {capacity} with {n_items} items needs a dp state too large to allocate")]
    CapacityTooLarge { capacity: u64, n_items: usize },
    #[error("sum of all item values overflows u64, the optimal value would not be representable")]
    ValueOverflow,
}
