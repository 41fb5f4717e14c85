use crate::entities::DPTable;

/// Borrowed view on the dynamic programming state a solver finished with.
#[derive(Debug, Clone, Copy)]
pub enum DPState<'a> {
    /// Full table of the tabulated solver, one row per item-prefix
    Table(&'a DPTable),
    /// Rolling array of the optimized solver, equal to the last row of the table
    Array(&'a [u64]),
}

impl DPState<'_> {
    /// Best values for every capacity `0..=W` using all items.
    pub fn final_row(&self) -> Vec<u64> {
        match self {
            DPState::Table(table) => table.last_row().to_vec(),
            DPState::Array(array) => array.to_vec(),
        }
    }
}
